//! Реплей сыгранной покерной раздачи по компактному логу действий.
//!
//! Лог (`p1:c-20`, `com:AS-H,KD-S`, …) разбирается в типизированные
//! действия, которые по одному применяются к снэпшоту стола.
//! Каждый шаг отдаёт новый снэпшот и текстовое описание; отрисовка –
//! чистая проекция снэпшота в DTO, её делает внешний код.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod time_ctrl;

pub use api::{project, TableViewDto};
pub use domain::{GameConfig, HandRecord};
pub use engine::{Action, ActionLogParser, GameState, HandReplay, ReplayError, StepOutcome};
pub use time_ctrl::{AutoPlayDriver, ReplaySession};
