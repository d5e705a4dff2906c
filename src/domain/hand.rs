use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::PlayerNumber;
use crate::domain::HandNumber;

/// Выплата победителю раздачи (строка `W-p3:450`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinnerPayout {
    pub player: PlayerNumber,
    pub amount: Chips,
}

/// Сыгранная раздача в том виде, в каком её записал считыватель.
///
/// Вход реплея, не меняется. Стеки копируются в состояние реплея,
/// сама запись никогда не мутируется.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandRecord {
    pub hand_number: HandNumber,
    /// Индекс дилера (0-based).
    #[serde(default)]
    pub dealer: Option<u32>,
    /// Стеки на начало раздачи, по одному на игрока.
    #[serde(default)]
    pub stacks: Option<Vec<Chips>>,
    /// Сырые токены действий в порядке записи.
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub winners: Vec<WinnerPayout>,
}

impl HandRecord {
    pub fn new(hand_number: HandNumber) -> Self {
        Self {
            hand_number,
            ..Self::default()
        }
    }

    /// Стеки на начало раздачи. Пустой список приравниваем к отсутствующему.
    pub fn initial_stacks(&self) -> Option<&[Chips]> {
        self.stacks
            .as_deref()
            .filter(|stacks| !stacks.is_empty())
    }
}
