use serde::{Deserialize, Serialize};

use crate::domain::card::{CardCode, CardSlot};

/// Номер игрока в логе: `p1`, `p2`, … (1-based, как пишет считыватель).
pub type PlayerNumber = u32;

/// Статус игрока в контексте реплея одной раздачи.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlayerStatus {
    /// Игрок ещё в раздаче.
    #[default]
    Active,
    /// Игрок сфолдил.
    Folded,
    /// Игрок поставил весь стек.
    AllIn,
    /// Игрок забрал (часть) банка.
    Winner,
}

/// Две карманные карты игрока.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HoleCards {
    pub first: CardSlot,
    pub second: CardSlot,
}

impl HoleCards {
    /// Положить сданную карту.
    ///
    /// Первая карта занимает первый слот, все последующие перезаписывают
    /// второй (last-write-wins). Первый слот после заполнения не трогаем.
    pub fn deal(&mut self, card: CardCode) {
        if self.first.is_known() {
            self.second = CardSlot::Known(card);
        } else {
            self.first = CardSlot::Known(card);
        }
    }
}
