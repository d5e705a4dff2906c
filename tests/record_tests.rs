// tests/record_tests.rs

//! Тесты загрузки записи игры:
//! - текстовый формат считывателя: заголовок, раздачи, стеки, победители
//! - неслужебные строки внутри раздачи уходят в actions как есть
//! - JSON-формат
//! - ошибки с номером строки
//! - запись → конфиг → реплей

use poker_replay::domain::{Chips, WinnerPayout};
use poker_replay::engine::HandReplay;
use poker_replay::infra::{FinalWinner, GameRecord, RecordError};

const SAMPLE: &str = "\
players:3
pot:1000
sb:5
bb:10

hand:1
dealer:0
Stacks:[1000,1000,1000]
p2:sb
p3:bb
p1:AS-H
p1:KD-S
p1:r-30
p2:F
p3:c-20
com:2C-D,7H-S,9S-C
W-p1:65
hand:2
dealer:1
Stacks:[1035,995,970]
p3:sb
p1:bb
p2:a-995
p3:F
p1:c-985
W-p2:2000
Winner:p2-3000
";

#[test]
fn text_record_header_and_hands() {
    let record = GameRecord::parse_text(SAMPLE).unwrap();

    assert_eq!(record.players, 3);
    assert_eq!(record.starting_pot, Chips(1000));
    assert_eq!(record.small_blind, Chips(5));
    assert_eq!(record.big_blind, Chips(10));
    assert_eq!(record.hands.len(), 2);
    assert_eq!(
        record.winner,
        Some(FinalWinner {
            player: 2,
            final_chips: Chips(3000)
        })
    );

    let first = record.hand(1).unwrap();
    assert_eq!(first.dealer, Some(0));
    assert_eq!(first.stacks, Some(vec![Chips(1000); 3]));
    assert_eq!(first.actions.len(), 8);
    assert_eq!(first.actions[0], "p2:sb");
    assert_eq!(first.actions[7], "com:2C-D,7H-S,9S-C");
    assert_eq!(
        first.winners,
        vec![WinnerPayout {
            player: 1,
            amount: Chips(65)
        }]
    );

    let second = record.hand(2).unwrap();
    assert_eq!(second.stacks, Some(vec![Chips(1035), Chips(995), Chips(970)]));
    assert!(record.hand(3).is_none());
}

#[test]
fn lines_outside_hands_are_ignored_and_unknown_lines_kept() {
    let text = "players:2\nnoise before hands\nhand:1\nsomething odd\np1:F\n";
    let record = GameRecord::parse_text(text).unwrap();

    assert_eq!(record.hands.len(), 1);
    assert_eq!(record.hands[0].actions, vec!["something odd", "p1:F"]);
    assert_eq!(record.hands[0].dealer, None);
    assert_eq!(record.hands[0].stacks, None);
}

#[test]
fn bad_numbers_report_line() {
    let err = GameRecord::parse_text("players:3\nsb:five\n").unwrap_err();
    match err {
        RecordError::InvalidNumber { line, text } => {
            assert_eq!(line, 2);
            assert_eq!(text, "five");
        }
        other => panic!("unexpected error {other:?}"),
    }

    let err = GameRecord::parse_text("hand:1\nStacks:1000,1000\n").unwrap_err();
    assert!(matches!(err, RecordError::MalformedStacks { line: 2 }));

    let err = GameRecord::parse_text("hand:1\nW-p1\n").unwrap_err();
    assert!(matches!(err, RecordError::MalformedWinner { line: 2 }));
}

#[test]
fn json_record_loads_through_serde() {
    let json = r#"{
        "players": 2,
        "starting_pot": 500,
        "small_blind": 5,
        "big_blind": 10,
        "hands": [
            {
                "hand_number": 1,
                "dealer": null,
                "stacks": null,
                "actions": ["p1:sb", "p2:bb"],
                "winners": [{"player": 2, "amount": 15}]
            }
        ]
    }"#;

    let record = GameRecord::load(json).unwrap();
    assert_eq!(record.players, 2);
    assert_eq!(record.hands[0].actions.len(), 2);
    assert_eq!(record.hands[0].dealer, None);
    assert!(record.winner.is_none());

    assert!(matches!(
        GameRecord::from_json("{\"players\": -1}"),
        Err(RecordError::Json(_))
    ));
}

#[test]
fn text_record_replays_end_to_end() {
    let record = GameRecord::load(SAMPLE).unwrap();
    let config = record.game_config(1);
    assert_eq!(config.viewer_player, 1);

    let hand = record.hand(1).unwrap().clone();
    let mut replay = HandReplay::new(config, hand).unwrap();
    while !replay.is_complete() {
        replay.step();
    }

    let state = replay.state();
    // банк 5 + 10 + 30 + 20 = 65, целиком ушёл победителю
    assert_eq!(state.pot.total, Chips::ZERO);
    assert_eq!(state.stacks, vec![Chips(1035), Chips(995), Chips(970)]);
    assert_eq!(state.revealed_count, 3);
    assert_eq!(
        replay.history().last().map(|e| e.description.as_str()),
        Some("You win $65!")
    );
}
