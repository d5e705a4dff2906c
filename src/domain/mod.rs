//! Доменная модель реплея: карты, фишки, игроки, запись раздачи, конфиг игры.

pub mod card;
pub mod chips;
pub mod config;
pub mod hand;
pub mod player;

/// Номер раздачи в записи (1-based).
pub type HandNumber = u32;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Chips и т.п.
pub use card::*;
pub use chips::*;
pub use config::*;
pub use hand::*;
pub use player::*;
