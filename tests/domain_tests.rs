// tests/domain_tests.rs

//! Тесты внешнего JSON доменных типов:
//! - GameConfig читается и пишется под именами сайта (players, starting_pot, user_player)
//! - HandRecord: null в dealer/stacks = поле отсутствует, пустые actions/winners по умолчанию

use poker_replay::domain::{Chips, GameConfig, HandRecord, WinnerPayout};
use poker_replay::engine::HandReplay;
use serde_json::json;

#[test]
fn game_config_uses_external_field_names() {
    let raw = r#"{
        "players": 3,
        "starting_pot": 1000,
        "small_blind": 5,
        "big_blind": 10,
        "user_player": 2
    }"#;

    let config: GameConfig = serde_json::from_str(raw).unwrap();
    assert_eq!(config, GameConfig::new(3, Chips(1000), Chips(5), Chips(10), 2));
    assert_eq!(config.player_count, 3);
    assert_eq!(config.starting_stack, Chips(1000));
    assert_eq!(config.viewer_player, 2);

    // обратно пишется под теми же внешними именами
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(
        value,
        json!({
            "players": 3,
            "starting_pot": 1000,
            "small_blind": 5,
            "big_blind": 10,
            "user_player": 2
        })
    );

    let back: GameConfig = serde_json::from_value(value).unwrap();
    assert_eq!(back, config);
}

#[test]
fn game_config_rejects_internal_field_names() {
    let raw = r#"{
        "player_count": 3,
        "starting_stack": 1000,
        "small_blind": 5,
        "big_blind": 10,
        "viewer_player": 2
    }"#;

    assert!(serde_json::from_str::<GameConfig>(raw).is_err());
}

#[test]
fn hand_record_null_dealer_and_stacks_are_absent() {
    let raw = r#"{
        "hand_number": 4,
        "dealer": null,
        "stacks": null,
        "actions": ["p1:sb", "p2:bb"],
        "winners": [{"player": 2, "amount": 15}]
    }"#;

    let hand: HandRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(hand.hand_number, 4);
    assert_eq!(hand.dealer, None);
    assert_eq!(hand.stacks, None);
    assert_eq!(hand.initial_stacks(), None);
    assert_eq!(
        hand.winners,
        vec![WinnerPayout {
            player: 2,
            amount: Chips(15)
        }]
    );

    // стеки берутся из конфига
    let config = GameConfig::new(2, Chips(500), Chips(5), Chips(10), 1);
    let replay = HandReplay::new(config, hand).unwrap();
    assert_eq!(replay.state().stacks, vec![Chips(500); 2]);
}

#[test]
fn hand_record_missing_optional_fields_default() {
    let hand: HandRecord = serde_json::from_str(r#"{"hand_number": 1, "stacks": []}"#).unwrap();

    assert_eq!(hand, {
        let mut expected = HandRecord::new(1);
        expected.stacks = Some(Vec::new());
        expected
    });
    assert!(hand.actions.is_empty());
    assert!(hand.winners.is_empty());
    // пустой список стеков – то же, что его отсутствие
    assert_eq!(hand.initial_stacks(), None);
}
