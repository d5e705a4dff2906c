use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::hand::HandRecord;
use crate::domain::player::PlayerNumber;

/// Параметры игры, общие для всех раздач записи.
///
/// Имена полей во внешнем JSON сохранены такими, какими их отдаёт сайт
/// (`players`, `starting_pot`, `user_player`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    /// Сколько игроков за столом.
    #[serde(rename = "players")]
    pub player_count: u32,
    /// Стартовый стек (используется, если в раздаче нет строки `Stacks`).
    #[serde(rename = "starting_pot")]
    pub starting_stack: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// Игрок, от лица которого смотрим реплей (1-based).
    #[serde(rename = "user_player")]
    pub viewer_player: PlayerNumber,
}

/// Ошибки конфигурации – фатальны, сессия реплея не создаётся.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Некорректное количество игроков: {0}")]
    InvalidPlayerCount(u32),

    #[error("Стеков в раздаче {actual}, а игроков {expected}")]
    StackCountMismatch { expected: usize, actual: usize },
}

impl GameConfig {
    pub fn new(
        player_count: u32,
        starting_stack: Chips,
        small_blind: Chips,
        big_blind: Chips,
        viewer_player: PlayerNumber,
    ) -> Self {
        Self {
            player_count,
            starting_stack,
            small_blind,
            big_blind,
            viewer_player,
        }
    }

    pub fn seat_count(&self) -> usize {
        self.player_count as usize
    }

    pub fn is_viewer(&self, player: PlayerNumber) -> bool {
        player == self.viewer_player
    }

    /// Проверить, что по этой конфигурации можно проиграть раздачу `hand`.
    pub fn validate_for(&self, hand: &HandRecord) -> Result<(), ConfigError> {
        if self.player_count == 0 {
            return Err(ConfigError::InvalidPlayerCount(self.player_count));
        }

        if let Some(stacks) = hand.initial_stacks() {
            if stacks.len() != self.seat_count() {
                return Err(ConfigError::StackCountMismatch {
                    expected: self.seat_count(),
                    actual: stacks.len(),
                });
            }
        }

        Ok(())
    }
}
