//! Разбор сырых токенов лога раздачи в типизированные `Action`.
//!
//! Грамматика (порядок проверок важен):
//! - `com:AS-H,KD-S,…` – общие карты;
//! - `p<N>:sb` / `p<N>:bb` – блайнды;
//! - `p<N>:c-<amount>` / `r-<amount>` / `a-<amount>` – колл / рейз / олл-ин;
//! - `p<N>:F` – фолд;
//! - `p<N>:<card>` – карманная карта (есть `-`, длина не больше 4).
//!
//! Фиксированные ключевые слова проверяются раньше общего шаблона карты:
//! `c-20` тоже содержит `-` и короче пяти символов.

use log::warn;

use crate::domain::{CardCode, Chips, GameConfig, HandRecord, PlayerNumber};
use crate::engine::actions::{Action, BlindKind};
use crate::engine::errors::TokenError;

const COMMUNITY_PREFIX: &str = "com:";
const CALL_PREFIX: &str = "c-";
const RAISE_PREFIX: &str = "r-";
const ALL_IN_PREFIX: &str = "a-";
const FOLD: &str = "F";
const SMALL_BLIND: &str = "sb";
const BIG_BLIND: &str = "bb";
/// Максимальная длина токена карты (`AS-H`, `10-D`).
const MAX_CARD_LEN: usize = 4;

/// Парсер лога одной игры. Знает размеры блайндов и число игроков.
#[derive(Clone, Debug)]
pub struct ActionLogParser {
    small_blind: Chips,
    big_blind: Chips,
    player_count: u32,
}

impl ActionLogParser {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            small_blind: config.small_blind,
            big_blind: config.big_blind,
            player_count: config.player_count,
        }
    }

    /// Разобрать токен. Никогда не падает: всё непонятное → `Action::Unrecognized`.
    pub fn parse(&self, raw: &str) -> Action {
        match self.diagnose(raw) {
            Ok(action) => action,
            Err(err) => {
                warn!("{err}");
                Action::Unrecognized {
                    raw: raw.to_string(),
                }
            }
        }
    }

    /// То же, что `parse`, но с причиной, если токен не разобран.
    pub fn diagnose(&self, raw: &str) -> Result<Action, TokenError> {
        let token = raw.trim();

        if let Some(rest) = token.strip_prefix(COMMUNITY_PREFIX) {
            let cards = rest
                .split(',')
                .map(str::trim)
                // пустой кусок (`com:AS-H,,KD-S`) тоже занимает слот борда
                .map(|card| CardCode::new(card))
                .collect();
            return Ok(Action::CommunityRevealed { cards });
        }

        let unrecognized = || TokenError::Unrecognized(raw.to_string());

        let (player_part, mv) = token.split_once(':').ok_or_else(unrecognized)?;
        let player = self
            .parse_player(player_part)
            .ok_or_else(|| TokenError::MalformedPlayerReference(raw.to_string()))?;

        let action = if mv == SMALL_BLIND {
            Action::PostBlind {
                player,
                kind: BlindKind::Small,
                amount: self.small_blind,
            }
        } else if mv == BIG_BLIND {
            Action::PostBlind {
                player,
                kind: BlindKind::Big,
                amount: self.big_blind,
            }
        } else if let Some(amount) = mv.strip_prefix(CALL_PREFIX) {
            Action::Call {
                player,
                amount: parse_amount(amount).ok_or_else(unrecognized)?,
            }
        } else if let Some(amount) = mv.strip_prefix(RAISE_PREFIX) {
            Action::Raise {
                player,
                amount: parse_amount(amount).ok_or_else(unrecognized)?,
            }
        } else if mv == FOLD {
            Action::Fold { player }
        } else if let Some(amount) = mv.strip_prefix(ALL_IN_PREFIX) {
            Action::AllIn {
                player,
                amount: parse_amount(amount).ok_or_else(unrecognized)?,
            }
        } else if mv.contains('-') && mv.chars().count() <= MAX_CARD_LEN {
            Action::HoleCardDealt {
                player,
                card: CardCode::new(mv),
            }
        } else {
            return Err(unrecognized());
        };

        Ok(action)
    }

    /// Развернуть запись раздачи в полную последовательность действий:
    /// дилер (если есть) → токены лога → выплаты победителям.
    pub fn expand(&self, hand: &HandRecord) -> Vec<Action> {
        let mut actions = Vec::with_capacity(hand.actions.len() + hand.winners.len() + 1);

        if let Some(player_index) = hand.dealer {
            actions.push(Action::DealerAssigned { player_index });
        }

        actions.extend(hand.actions.iter().map(|raw| self.parse(raw)));

        actions.extend(hand.winners.iter().map(|w| Action::WinnerPaid {
            player: w.player,
            amount: w.amount,
        }));

        actions
    }

    /// `p<N>`, где N – номер игрока за этим столом (1..=player_count).
    fn parse_player(&self, part: &str) -> Option<PlayerNumber> {
        let digits = part.strip_prefix('p')?;
        let player = parse_digits(digits)?;
        let player = PlayerNumber::try_from(player).ok()?;
        (1..=self.player_count).contains(&player).then_some(player)
    }
}

fn parse_amount(text: &str) -> Option<Chips> {
    parse_digits(text)
        .and_then(|v| i64::try_from(v).ok())
        .map(Chips)
}

/// Только ASCII-цифры: `str::parse` пропустил бы ведущий `+`.
fn parse_digits(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
