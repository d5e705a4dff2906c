//! Движок реплея: разбор лога, применение действий, пошаговое проигрывание.
//!
//! Высокоуровневый объект: `HandReplay`
//! Основные операции:
//!   - `ActionLogParser::parse` – токен лога → `Action`
//!   - `HandReplay::step` – применить следующее действие
//!   - `HandReplay::reset` – вернуться в начало раздачи

pub mod actions;
pub mod errors;
pub mod game_state;
pub mod hand_history;
pub mod narration;
pub mod parser;
pub mod pot;
pub mod replay;

pub use actions::{Action, BlindKind};
pub use errors::{ReplayError, TokenError};
pub use game_state::GameState;
pub use hand_history::{ReplayEntry, ReplayHistory};
pub use narration::{Narrator, HAND_COMPLETE, READY_TO_REPLAY};
pub use parser::ActionLogParser;
pub use pot::Pot;
pub use replay::{HandReplay, ReplayStatus, StepNotice, StepOutcome};
