//! Загрузка записи игры, которую пишет NFC-считыватель.
//!
//! Текстовый формат, по строке на событие:
//!
//! ```text
//! players:3
//! pot:1000
//! sb:5
//! bb:10
//! hand:1
//! dealer:0
//! Stacks:[1000,1000,1000]
//! p2:sb
//! p3:bb
//! p1:AS-H
//! com:2C-D,7H-S,9S-C
//! p1:F
//! W-p3:15
//! Winner:p3-3000
//! ```
//!
//! Всё, что внутри раздачи не похоже на служебную строку, считается
//! токеном действия и уходит в `HandRecord::actions` как есть.
//! Тот же набор данных можно отдать JSON-ом (`GameRecord::from_json`).

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Chips, GameConfig, HandNumber, HandRecord, PlayerNumber, WinnerPayout};

/// Ошибки разбора записи игры.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Строка {line}: ожидалось число, получено `{text}`")]
    InvalidNumber { line: usize, text: String },

    #[error("Строка {line}: некорректный список стеков")]
    MalformedStacks { line: usize },

    #[error("Строка {line}: некорректная строка победителя")]
    MalformedWinner { line: usize },

    #[error("Некорректный JSON записи: {0}")]
    Json(#[from] serde_json::Error),
}

/// Итог всей игры (строка `Winner:p1-2500`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinalWinner {
    pub player: PlayerNumber,
    pub final_chips: Chips,
}

/// Запись целой игры: параметры стола и все раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub players: u32,
    pub starting_pot: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    #[serde(default)]
    pub hands: Vec<HandRecord>,
    #[serde(default)]
    pub winner: Option<FinalWinner>,
}

impl GameRecord {
    /// Разобрать запись: JSON, если текст начинается с `{`, иначе текстовый формат.
    pub fn load(content: &str) -> Result<Self, RecordError> {
        if content.trim_start().starts_with('{') {
            Self::from_json(content)
        } else {
            Self::parse_text(content)
        }
    }

    pub fn from_json(content: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn parse_text(content: &str) -> Result<Self, RecordError> {
        let mut record = GameRecord::default();
        let mut current: Option<HandRecord> = None;

        for (idx, raw_line) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(value) = line.strip_prefix("players:") {
                record.players = parse_number(value, line_no)?;
            } else if let Some(value) = line.strip_prefix("pot:") {
                record.starting_pot = Chips(parse_number(value, line_no)?);
            } else if let Some(value) = line.strip_prefix("sb:") {
                record.small_blind = Chips(parse_number(value, line_no)?);
            } else if let Some(value) = line.strip_prefix("bb:") {
                record.big_blind = Chips(parse_number(value, line_no)?);
            } else if let Some(value) = line.strip_prefix("hand:") {
                let hand_number: HandNumber = parse_number(value, line_no)?;
                if let Some(done) = current.replace(HandRecord::new(hand_number)) {
                    record.hands.push(done);
                }
            } else if let Some(hand) = current.as_mut().filter(|_| line.starts_with("dealer:")) {
                hand.dealer = Some(parse_number(&line["dealer:".len()..], line_no)?);
            } else if let Some(hand) = current.as_mut().filter(|_| line.starts_with("Stacks:")) {
                hand.stacks = Some(parse_stacks(line, line_no)?);
            } else if let Some(hand) = current.as_mut().filter(|_| line.starts_with("W-p")) {
                hand.winners.push(parse_payout(line, line_no)?);
            } else if let Some(value) = line.strip_prefix("Winner:") {
                record.winner = Some(parse_final_winner(value, line_no)?);
            } else if let Some(hand) = current.as_mut() {
                hand.actions.push(line.to_string());
            } else {
                debug!("line {line_no} outside of any hand ignored: {line}");
            }
        }

        if let Some(done) = current {
            record.hands.push(done);
        }

        Ok(record)
    }

    /// Раздача по её номеру из записи.
    pub fn hand(&self, hand_number: HandNumber) -> Option<&HandRecord> {
        self.hands.iter().find(|h| h.hand_number == hand_number)
    }

    /// Конфиг реплея для этой записи, смотрим глазами игрока `viewer`.
    pub fn game_config(&self, viewer: PlayerNumber) -> GameConfig {
        GameConfig::new(
            self.players,
            self.starting_pot,
            self.small_blind,
            self.big_blind,
            viewer,
        )
    }
}

fn parse_number<T: std::str::FromStr>(text: &str, line: usize) -> Result<T, RecordError> {
    let text = text.trim();
    text.parse().map_err(|_| RecordError::InvalidNumber {
        line,
        text: text.to_string(),
    })
}

/// `Stacks:[1000,1000,1000]`
fn parse_stacks(line: &str, line_no: usize) -> Result<Vec<Chips>, RecordError> {
    let malformed = || RecordError::MalformedStacks { line: line_no };

    let (_, rest) = line.split_once('[').ok_or_else(malformed)?;
    let (inner, _) = rest.split_once(']').ok_or_else(malformed)?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|part| parse_number(part, line_no).map(Chips))
        .collect()
}

/// `W-p3:450`
fn parse_payout(line: &str, line_no: usize) -> Result<WinnerPayout, RecordError> {
    let (player, amount) = line["W-p".len()..]
        .split_once(':')
        .ok_or(RecordError::MalformedWinner { line: line_no })?;

    Ok(WinnerPayout {
        player: parse_number(player, line_no)?,
        amount: Chips(parse_number(amount, line_no)?),
    })
}

/// `p1-2500` (после `Winner:`)
fn parse_final_winner(value: &str, line_no: usize) -> Result<FinalWinner, RecordError> {
    let malformed = || RecordError::MalformedWinner { line: line_no };

    let (player, chips) = value.trim().split_once('-').ok_or_else(malformed)?;
    let player = player.strip_prefix('p').ok_or_else(malformed)?;

    Ok(FinalWinner {
        player: parse_number(player, line_no)?,
        final_chips: Chips(parse_number(chips, line_no)?),
    })
}
