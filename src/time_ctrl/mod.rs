// src/time_ctrl/mod.rs
//! Управление проигрыванием раздачи во времени.
//!
//! Здесь собираем:
//! - тикер автопроигрывания (`AutoPlayDriver`);
//! - фасад `ReplaySession`, который повторяет кнопки Next / Auto / Reset.

pub mod autoplay;

pub use autoplay::{AutoPlayDriver, AutoPlayToggle, AutoTick};

use std::time::Duration;

use crate::api::dto::TableViewDto;
use crate::api::projection::project;
use crate::domain::{GameConfig, HandRecord};
use crate::engine::{HandReplay, ReplayError, StepOutcome, READY_TO_REPLAY};

/// Сессия реплея одной раздачи: реплей + его тикер.
///
/// Все изменения идут через один `&mut self`, поэтому ручной шаг и тик
/// автопроигрывания никогда не выполняются одновременно.
#[derive(Clone, Debug)]
pub struct ReplaySession {
    replay: HandReplay,
    autoplay: AutoPlayDriver,
    /// Описание последнего шага (для строки "Action: …").
    last_description: String,
}

impl ReplaySession {
    pub fn new(config: GameConfig, hand: HandRecord) -> Result<Self, ReplayError> {
        Self::with_driver(config, hand, AutoPlayDriver::new())
    }

    /// Сессия с заданным тикером (например, с другим интервалом).
    pub fn with_driver(
        config: GameConfig,
        hand: HandRecord,
        autoplay: AutoPlayDriver,
    ) -> Result<Self, ReplayError> {
        Ok(Self {
            replay: HandReplay::new(config, hand)?,
            autoplay,
            last_description: READY_TO_REPLAY.to_string(),
        })
    }

    /// Кнопка "Next".
    pub fn next(&mut self) -> StepOutcome {
        let outcome = self.replay.step();
        self.remember(&outcome);
        outcome
    }

    /// Кнопка "Auto": запуск или пауза.
    pub fn toggle_autoplay(&mut self) -> AutoPlayToggle {
        self.autoplay.start()
    }

    /// Остановить автопроигрывание, позиция реплея не меняется.
    pub fn stop_autoplay(&mut self) -> bool {
        self.autoplay.stop()
    }

    /// Тик автопроигрывания (его вызывает внешний планировщик).
    pub fn tick(&mut self) -> AutoTick {
        let tick = self.autoplay.tick(&mut self.replay);
        if let AutoTick::Stepped(outcome) = &tick {
            self.remember(outcome);
        }
        tick
    }

    pub fn on_time_passed(&mut self, delta: Duration) -> Vec<StepOutcome> {
        let outcomes = self.autoplay.on_time_passed(delta, &mut self.replay);
        if let Some(last) = outcomes.last() {
            self.last_description = last.description.clone();
        }
        outcomes
    }

    /// Кнопка "Reset". Сначала гасим автопроигрывание, иначе отложенный
    /// тик сработал бы уже по свежему состоянию.
    pub fn reset(&mut self) {
        self.autoplay.stop();
        self.replay.reset();
        self.last_description = READY_TO_REPLAY.to_string();
    }

    /// Модель для отрисовки текущего состояния.
    pub fn view(&self) -> TableViewDto {
        project(self.replay.state(), self.replay.hand(), self.replay.config())
    }

    pub fn replay(&self) -> &HandReplay {
        &self.replay
    }

    pub fn autoplay(&self) -> &AutoPlayDriver {
        &self.autoplay
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn last_description(&self) -> &str {
        &self.last_description
    }

    fn remember(&mut self, outcome: &StepOutcome) {
        self.last_description = outcome.description.clone();
    }
}
