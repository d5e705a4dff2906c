// tests/autoplay_tests.rs
//
// Проверяем автопроигрывание без реального времени:
//
// 1) start/stop:
//    - повторный start = пауза;
//    - stop идемпотентен;
//    - без запуска тик ничего не делает.
//
// 2) Время:
//    - шаг только после полного интервала, остаток переносится;
//    - большой delta → несколько шагов подряд;
//    - на конце раздачи тикер выключается сам.
//
// 3) Сессия:
//    - reset гасит автопроигрывание и сбрасывает состояние;
//    - stop_autoplay гасит автопроигрывание, но позицию не трогает.

use std::time::Duration;

use poker_replay::domain::{Chips, GameConfig, HandRecord};
use poker_replay::engine::{HandReplay, READY_TO_REPLAY};
use poker_replay::time_ctrl::{AutoPlayDriver, AutoPlayToggle, AutoTick, ReplaySession};

fn config() -> GameConfig {
    GameConfig::new(3, Chips(1000), Chips(5), Chips(10), 2)
}

fn hand() -> HandRecord {
    let mut hand = HandRecord::new(7);
    hand.dealer = Some(0);
    hand.actions = vec!["p2:sb".into(), "p3:bb".into(), "p1:F".into()];
    hand
}

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

#[test]
fn start_twice_pauses() {
    let mut driver = AutoPlayDriver::new();
    assert_eq!(driver.interval(), Duration::from_millis(1000));

    assert_eq!(driver.start(), AutoPlayToggle::Started);
    assert!(driver.is_running());

    assert_eq!(driver.start(), AutoPlayToggle::Paused);
    assert!(!driver.is_running());

    assert_eq!(driver.start(), AutoPlayToggle::Started);
    assert!(driver.is_running());
}

#[test]
fn stop_is_idempotent() {
    let mut driver = AutoPlayDriver::new();
    driver.start();

    assert!(driver.stop());
    assert!(!driver.stop());
    assert!(!driver.is_running());
}

#[test]
fn tick_without_start_does_nothing() {
    let mut replay = HandReplay::new(config(), hand()).unwrap();
    let mut driver = AutoPlayDriver::new();

    assert_eq!(driver.tick(&mut replay), AutoTick::Inactive);
    assert!(driver.on_time_passed(secs(10), &mut replay).is_empty());
    assert_eq!(replay.state().cursor, 0);
}

#[test]
fn manual_ticks_step_until_complete_then_stop() {
    let mut replay = HandReplay::new(config(), hand()).unwrap();
    let mut driver = AutoPlayDriver::new();
    driver.start();

    // 4 действия: дилер + 3 токена
    for expected_cursor in 1..=4 {
        match driver.tick(&mut replay) {
            AutoTick::Stepped(outcome) => assert_eq!(outcome.snapshot.cursor, expected_cursor),
            other => panic!("expected a step, got {other:?}"),
        }
    }

    assert!(replay.is_complete());
    assert!(!driver.is_running());
    assert_eq!(driver.tick(&mut replay), AutoTick::Inactive);
}

#[test]
fn starting_on_finished_replay_stops_on_first_tick() {
    let mut replay = HandReplay::new(config(), hand()).unwrap();
    while !replay.is_complete() {
        replay.step();
    }

    let mut driver = AutoPlayDriver::new();
    driver.start();
    assert_eq!(driver.tick(&mut replay), AutoTick::Finished);
    assert!(!driver.is_running());
}

#[test]
fn time_passing_steps_once_per_full_interval() {
    let mut replay = HandReplay::new(config(), hand()).unwrap();
    let mut driver = AutoPlayDriver::new();
    driver.start();

    assert!(driver
        .on_time_passed(Duration::from_millis(600), &mut replay)
        .is_empty());
    assert_eq!(replay.state().cursor, 0);

    // 600 + 600 = 1200 → один шаг, 200 мс переносится
    let steps = driver.on_time_passed(Duration::from_millis(600), &mut replay);
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].description, "Dealer: Player 1");

    // 200 + 800 = 1000 → ещё шаг
    let steps = driver.on_time_passed(Duration::from_millis(800), &mut replay);
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].description, "You post SB $5");
}

#[test]
fn long_delay_catches_up_but_never_past_the_end() {
    let mut replay = HandReplay::new(config(), hand()).unwrap();
    let mut driver = AutoPlayDriver::with_interval(Duration::from_millis(250));
    driver.start();

    let steps = driver.on_time_passed(secs(60), &mut replay);
    assert_eq!(steps.len(), 4);
    assert!(replay.is_complete());
    assert!(!driver.is_running());
}

#[test]
fn session_reset_cancels_autoplay() {
    let mut session = ReplaySession::new(config(), hand()).unwrap();

    assert_eq!(session.toggle_autoplay(), AutoPlayToggle::Started);
    session.on_time_passed(secs(2));
    assert_eq!(session.replay().state().cursor, 2);
    assert_eq!(session.last_description(), "You post SB $5");

    session.reset();

    assert!(!session.is_autoplaying());
    assert_eq!(session.replay().state().cursor, 0);
    assert_eq!(session.last_description(), READY_TO_REPLAY);

    // отложенный тик после reset ничего не трогает
    assert_eq!(session.tick(), AutoTick::Inactive);
    assert!(session.on_time_passed(secs(5)).is_empty());
    assert_eq!(session.replay().state().cursor, 0);
}

#[test]
fn manual_next_and_autoplay_share_one_cursor() {
    let mut session = ReplaySession::new(config(), hand()).unwrap();

    session.next();
    session.toggle_autoplay();
    match session.tick() {
        AutoTick::Stepped(outcome) => {
            assert_eq!(outcome.snapshot.cursor, 2);
            assert_eq!(outcome.description, "You post SB $5");
        }
        other => panic!("expected a step, got {other:?}"),
    }

    assert_eq!(session.next().description, "Player 3 posts BB $10");
    assert_eq!(session.replay().state().pot.total, Chips(15));
}

#[test]
fn session_stop_keeps_position() {
    let mut session = ReplaySession::new(config(), hand()).unwrap();

    session.toggle_autoplay();
    session.on_time_passed(secs(2));
    assert_eq!(session.replay().state().cursor, 2);

    assert!(session.stop_autoplay());
    assert!(!session.stop_autoplay());
    assert!(!session.is_autoplaying());

    assert!(session.on_time_passed(secs(3)).is_empty());
    assert_eq!(session.replay().state().cursor, 2);
    assert_eq!(session.last_description(), "You post SB $5");
}
