use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::domain::{
    empty_board, Board, CardSlot, Chips, GameConfig, HandRecord, HoleCards, PlayerNumber,
    PlayerStatus, BOARD_SIZE,
};
use crate::engine::actions::Action;
use crate::engine::errors::ReplayError;
use crate::engine::pot::Pot;

/// Снэпшот стола в конкретный момент реплея.
///
/// Все массивы по игрокам имеют длину `player_count` и адресуются
/// индексом `player - 1`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    pub pot: Pot,
    pub stacks: Vec<Chips>,
    pub player_status: Vec<PlayerStatus>,
    pub hole_cards: Vec<HoleCards>,
    pub community: Board,
    /// Сколько общих карт уже открыто (0..=5).
    pub revealed_count: usize,
    /// Индекс следующего действия в последовательности.
    pub cursor: usize,
}

impl GameState {
    /// Начальное состояние раздачи.
    ///
    /// Стеки копируются из записи; если их там нет – у всех стартовый стек.
    /// Число стеков, не совпадающее с числом игроков, – ошибка конфигурации.
    pub fn initial(config: &GameConfig, hand: &HandRecord) -> Result<Self, ReplayError> {
        config.validate_for(hand)?;
        Ok(Self::fresh(config, hand))
    }

    /// `initial` без проверки: пара `config`/`hand` уже проверена.
    pub(crate) fn fresh(config: &GameConfig, hand: &HandRecord) -> Self {
        let seats = config.seat_count();
        let stacks = match hand.initial_stacks() {
            Some(stacks) => stacks.to_vec(),
            None => vec![config.starting_stack; seats],
        };

        Self {
            pot: Pot::new(),
            stacks,
            player_status: vec![PlayerStatus::Active; seats],
            hole_cards: vec![HoleCards::default(); seats],
            community: empty_board(),
            revealed_count: 0,
            cursor: 0,
        }
    }

    pub fn player_count(&self) -> usize {
        self.stacks.len()
    }

    /// Сидит ли игрок за этим столом.
    pub fn is_seated(&self, player: PlayerNumber) -> bool {
        self.seat(player).is_some()
    }

    pub fn stack_of(&self, player: PlayerNumber) -> Option<Chips> {
        self.seat(player).map(|idx| self.stacks[idx])
    }

    pub fn status_of(&self, player: PlayerNumber) -> Option<PlayerStatus> {
        self.seat(player).map(|idx| self.player_status[idx])
    }

    /// Применить одно действие. Курсор здесь не двигается – это делает `HandReplay`.
    ///
    /// Лог доверенный: размеры ставок не проверяются, стек может уйти в минус.
    /// Ссылка на несуществующего игрока пропускается с предупреждением.
    pub fn apply(&mut self, action: &Action) {
        debug!("apply {action:?}");

        match action {
            Action::DealerAssigned { .. } | Action::Unrecognized { .. } => {}

            Action::PostBlind { player, amount, .. }
            | Action::Call { player, amount }
            | Action::Raise { player, amount } => {
                if let Some(idx) = self.seat_or_warn(*player) {
                    self.stacks[idx] -= *amount;
                    self.pot.add(*amount);
                }
            }

            Action::Fold { player } => {
                if let Some(idx) = self.seat_or_warn(*player) {
                    self.player_status[idx] = PlayerStatus::Folded;
                }
            }

            Action::AllIn { player, amount } => {
                if let Some(idx) = self.seat_or_warn(*player) {
                    self.pot.add(*amount);
                    self.stacks[idx] = Chips::ZERO;
                    self.player_status[idx] = PlayerStatus::AllIn;
                }
            }

            Action::CommunityRevealed { cards } => {
                for card in cards {
                    if self.revealed_count >= BOARD_SIZE {
                        debug!("board is full, dropping {card}");
                        continue;
                    }
                    self.community[self.revealed_count] = CardSlot::Known(card.clone());
                    self.revealed_count += 1;
                }
            }

            Action::HoleCardDealt { player, card } => {
                if let Some(idx) = self.seat_or_warn(*player) {
                    self.hole_cards[idx].deal(card.clone());
                }
            }

            Action::WinnerPaid { player, amount } => {
                if let Some(idx) = self.seat_or_warn(*player) {
                    self.stacks[idx] += *amount;
                    self.pot.pay_out(*amount);
                    self.player_status[idx] = PlayerStatus::Winner;
                }
            }
        }
    }

    fn seat(&self, player: PlayerNumber) -> Option<usize> {
        let idx = (player as usize).checked_sub(1)?;
        // поля публичные, так что длины векторов могут разойтись
        let seated = idx < self.stacks.len()
            && idx < self.player_status.len()
            && idx < self.hole_cards.len();
        seated.then_some(idx)
    }

    fn seat_or_warn(&self, player: PlayerNumber) -> Option<usize> {
        let seat = self.seat(player);
        if seat.is_none() {
            warn!(
                "player {player} is not seated (table has {} players), action skipped",
                self.player_count()
            );
        }
        seat
    }
}
