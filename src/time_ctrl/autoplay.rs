// src/time_ctrl/autoplay.rs
//! Автопроигрывание: тикер, который раз в интервал делает `step()`.
//!
//! Реального таймера здесь нет. Время "протекает" снаружи через
//! `on_time_passed` (в CLI – по wall-clock, в тестах – руками), либо
//! тик дёргается напрямую через `tick`.

use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};

use crate::engine::{HandReplay, StepOutcome};

/// Что сделал `start()`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AutoPlayToggle {
    /// Автопроигрывание запущено.
    Started,
    /// Уже было запущено – повторный `start()` ставит на паузу.
    Paused,
}

/// Результат одного тика.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AutoTick {
    /// Тикер не запущен, реплей не тронут.
    Inactive,
    /// Сделан шаг реплея.
    Stepped(StepOutcome),
    /// Раздача уже доиграна – тикер остановился сам.
    Finished,
}

/// Тикер автопроигрывания. Один на реплей, одновременно активен
/// максимум один "таймер": состояние – просто флаг `running`.
#[derive(Clone, Debug)]
pub struct AutoPlayDriver {
    interval: Duration,
    running: bool,
    /// Сколько времени накопилось с последнего тика.
    elapsed: Duration,
}

impl Default for AutoPlayDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoPlayDriver {
    /// Один шаг в секунду.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

    pub fn new() -> Self {
        Self::with_interval(Self::DEFAULT_INTERVAL)
    }

    /// Нулевой интервал превращаем в минимальный, чтобы `on_time_passed`
    /// не крутился бесконечно.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            running: false,
            elapsed: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Запустить. Если уже запущен – это пауза (отдельного `pause()` нет).
    pub fn start(&mut self) -> AutoPlayToggle {
        if self.running {
            self.stop();
            return AutoPlayToggle::Paused;
        }

        info!("autoplay started, interval {:?}", self.interval);
        self.running = true;
        self.elapsed = Duration::ZERO;
        AutoPlayToggle::Started
    }

    /// Остановить. Повторный вызов ничего не делает.
    /// Возвращает, был ли тикер запущен.
    pub fn stop(&mut self) -> bool {
        let was_running = self.running;
        if was_running {
            info!("autoplay stopped");
        }
        self.running = false;
        self.elapsed = Duration::ZERO;
        was_running
    }

    /// Один тик: шаг реплея, если тикер запущен.
    ///
    /// Как только реплей дошёл до конца, тикер выключается сам.
    pub fn tick(&mut self, replay: &mut HandReplay) -> AutoTick {
        if !self.running {
            return AutoTick::Inactive;
        }

        if replay.is_complete() {
            self.stop();
            return AutoTick::Finished;
        }

        let outcome = replay.step();
        if replay.is_complete() {
            self.stop();
        }
        AutoTick::Stepped(outcome)
    }

    /// "Протекание" времени: делаем столько тиков, сколько интервалов
    /// поместилось в накопленное время. Остаток переносится на следующий вызов.
    pub fn on_time_passed(&mut self, delta: Duration, replay: &mut HandReplay) -> Vec<StepOutcome> {
        let mut outcomes = Vec::new();
        if !self.running {
            return outcomes;
        }

        self.elapsed += delta;

        while self.running && self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            match self.tick(replay) {
                AutoTick::Stepped(outcome) => outcomes.push(outcome),
                AutoTick::Inactive | AutoTick::Finished => break,
            }
        }

        outcomes
    }
}
