use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::domain::{GameConfig, HandRecord, PlayerNumber};
use crate::engine::actions::Action;
use crate::engine::errors::ReplayError;
use crate::engine::game_state::GameState;
use crate::engine::hand_history::ReplayHistory;
use crate::engine::narration::{Narrator, HAND_COMPLETE};
use crate::engine::parser::ActionLogParser;

/// Где сейчас находится реплей.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReplayStatus {
    /// Ни одного шага ещё не сделано.
    Idle,
    /// Часть действий уже применена.
    Stepping,
    /// Все действия применены. Дальше `step()` ничего не меняет.
    Complete,
}

/// Нефатальные замечания к шагу.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum StepNotice {
    /// Токен не разобран, в описании – он сам.
    UnrecognizedToken(String),
    /// Действие ссылается на игрока, которого нет за столом. Состояние
    /// не изменилось, курсор сдвинулся.
    UnseatedPlayer(PlayerNumber),
    /// `step()` после конца раздачи.
    AlreadyComplete,
}

/// Результат одного шага: снэпшот после шага и его описание.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepOutcome {
    pub snapshot: GameState,
    pub description: String,
    pub notice: Option<StepNotice>,
}

impl StepOutcome {
    pub fn is_complete_marker(&self) -> bool {
        self.notice == Some(StepNotice::AlreadyComplete)
    }
}

/// Реплей одной раздачи.
///
/// Единственный владелец `GameState`: состояние меняется только внутри
/// `step()`, последовательно, по одному действию. Произвольного перехода
/// к середине раздачи нет – только вперёд или `reset()` в начало.
#[derive(Clone, Debug)]
pub struct HandReplay {
    config: GameConfig,
    hand: HandRecord,
    actions: Vec<Action>,
    state: GameState,
    narrator: Narrator,
    history: ReplayHistory,
}

impl HandReplay {
    /// Собрать реплей. Ошибка конфигурации – единственная фатальная ошибка.
    pub fn new(config: GameConfig, hand: HandRecord) -> Result<Self, ReplayError> {
        let state = GameState::initial(&config, &hand)?;
        let actions = ActionLogParser::new(&config).expand(&hand);
        let narrator = Narrator::new(config.viewer_player);

        debug!(
            "hand #{} prepared: {} actions for {} players",
            hand.hand_number,
            actions.len(),
            config.player_count
        );

        Ok(Self {
            config,
            hand,
            actions,
            state,
            narrator,
            history: ReplayHistory::new(),
        })
    }

    pub fn status(&self) -> ReplayStatus {
        let cursor = self.state.cursor;
        if cursor >= self.actions.len() {
            ReplayStatus::Complete
        } else if cursor == 0 {
            ReplayStatus::Idle
        } else {
            ReplayStatus::Stepping
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status() == ReplayStatus::Complete
    }

    /// Применить следующее действие.
    ///
    /// Если раздача уже доиграна – ничего не меняет и возвращает текущий
    /// снэпшот с маркером завершения (сколько угодно раз подряд).
    pub fn step(&mut self) -> StepOutcome {
        let cursor = self.state.cursor;

        let Some(action) = self.actions.get(cursor) else {
            return StepOutcome {
                snapshot: self.state.clone(),
                description: HAND_COMPLETE.to_string(),
                notice: Some(StepNotice::AlreadyComplete),
            };
        };

        let unseated = action.player().filter(|p| !self.state.is_seated(*p));

        self.state.apply(action);
        self.state.cursor = cursor + 1;

        let (description, notice) = match (action, unseated) {
            (_, Some(player)) => (
                self.narrator.describe_unseated(action, player),
                Some(StepNotice::UnseatedPlayer(player)),
            ),
            (Action::Unrecognized { raw }, None) => (
                self.narrator.describe(action),
                Some(StepNotice::UnrecognizedToken(raw.clone())),
            ),
            _ => (self.narrator.describe(action), None),
        };

        self.history.push(cursor, description.clone());

        StepOutcome {
            snapshot: self.state.clone(),
            description,
            notice,
        }
    }

    /// Вернуться в начало: свежая копия стеков, пустой банк, все карты закрыты.
    pub fn reset(&mut self) {
        info!("hand #{} reset to the beginning", self.hand.hand_number);
        self.state = GameState::fresh(&self.config, &self.hand);
        self.history.clear();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Сколько действий ещё не применено.
    pub fn remaining(&self) -> usize {
        self.actions.len().saturating_sub(self.state.cursor)
    }

    pub fn history(&self) -> &ReplayHistory {
        &self.history
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn hand(&self) -> &HandRecord {
        &self.hand
    }
}
