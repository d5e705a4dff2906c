use core::fmt;

use serde::{Deserialize, Serialize};

/// Сколько общих карт бывает на борде.
pub const BOARD_SIZE: usize = 5;

/// Как рисуется неизвестная (рубашкой вверх) карта.
pub const FACE_DOWN_PLACEHOLDER: &str = "XX-X";

/// Карта в том виде, в каком её пишет считыватель: `AS-H`, `10-D`, `KD-S`.
///
/// Формат не разбираем на ранг/масть – лог доверенный, а для реплея
/// достаточно показать токен как есть.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CardCode(pub String);

impl CardCode {
    pub fn new(code: impl Into<String>) -> Self {
        CardCode(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Слот карты: либо ещё не открыта, либо известна.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum CardSlot {
    #[default]
    Unknown,
    Known(CardCode),
}

impl CardSlot {
    pub fn is_known(&self) -> bool {
        matches!(self, CardSlot::Known(_))
    }
}

impl fmt::Display for CardSlot {
    /// Неизвестная карта печатается плейсхолдером `XX-X`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardSlot::Unknown => f.write_str(FACE_DOWN_PLACEHOLDER),
            CardSlot::Known(card) => write!(f, "{card}"),
        }
    }
}

/// Общие карты стола: ровно пять слотов.
pub type Board = [CardSlot; BOARD_SIZE];

/// Пустой борд (все пять карт закрыты).
pub fn empty_board() -> Board {
    Default::default()
}
