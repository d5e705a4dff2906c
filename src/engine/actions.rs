use serde::{Deserialize, Serialize};

use crate::domain::{CardCode, Chips, PlayerNumber};

/// Какой блайнд поставлен.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BlindKind {
    Small,
    Big,
}

/// Одно событие реплея, уже разобранное из лога.
///
/// Игроки везде 1-based, как в логе; индекс дилера – 0-based.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Action {
    /// Кнопка дилера (синтетическое событие в начале раздачи).
    DealerAssigned { player_index: u32 },

    PostBlind {
        player: PlayerNumber,
        kind: BlindKind,
        amount: Chips,
    },

    Call { player: PlayerNumber, amount: Chips },

    Raise { player: PlayerNumber, amount: Chips },

    Fold { player: PlayerNumber },

    /// All-in – весь стек в банк.
    AllIn { player: PlayerNumber, amount: Chips },

    /// Открыты общие карты (флоп приходит одним токеном из трёх карт).
    CommunityRevealed { cards: Vec<CardCode> },

    /// Игрок получил карманную карту.
    HoleCardDealt { player: PlayerNumber, card: CardCode },

    /// Выплата победителю (синтетическое событие в конце раздачи).
    WinnerPaid { player: PlayerNumber, amount: Chips },

    /// Токен, который не удалось разобрать. Состояние не меняет.
    Unrecognized { raw: String },
}

impl Action {
    /// Игрок, к которому относится действие (если относится).
    pub fn player(&self) -> Option<PlayerNumber> {
        match self {
            Action::PostBlind { player, .. }
            | Action::Call { player, .. }
            | Action::Raise { player, .. }
            | Action::Fold { player }
            | Action::AllIn { player, .. }
            | Action::HoleCardDealt { player, .. }
            | Action::WinnerPaid { player, .. } => Some(*player),
            Action::DealerAssigned { .. }
            | Action::CommunityRevealed { .. }
            | Action::Unrecognized { .. } => None,
        }
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Action::Unrecognized { .. })
    }
}
