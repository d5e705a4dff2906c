// src/bin/poker_replay_cli.rs
//
// Реплей одной раздачи из записи считывателя прямо в терминале.
//
//   poker_replay_cli game.txt --hand 2 --viewer 3
//   poker_replay_cli game.json --auto --interval-ms 500
//   RUST_LOG=debug poker_replay_cli game.txt --json-view

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use poker_replay::api::dto::TableViewDto;
use poker_replay::engine::StepOutcome;
use poker_replay::infra::GameRecord;
use poker_replay::time_ctrl::{AutoPlayDriver, AutoTick, ReplaySession};

#[derive(Parser, Debug)]
#[command(name = "poker_replay_cli", about = "Replay a recorded poker hand step by step")]
struct Args {
    /// Файл записи игры (текстовый формат считывателя или JSON).
    file: PathBuf,

    /// Номер раздачи в записи (по умолчанию – первая).
    #[arg(long)]
    hand: Option<u32>,

    /// От лица какого игрока смотрим (1-based).
    #[arg(long, default_value_t = 1)]
    viewer: u32,

    /// Проигрывать автоматически, по шагу за интервал.
    #[arg(long)]
    auto: bool,

    /// Интервал автопроигрывания в миллисекундах.
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,

    /// После каждого шага печатать модель отрисовки в JSON.
    #[arg(long)]
    json_view: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    let content = std::fs::read_to_string(&args.file)?;
    let record = GameRecord::load(&content)?;

    let hand = match args.hand {
        Some(n) => record.hand(n),
        None => record.hands.first(),
    }
    .cloned()
    .ok_or_else(|| format!("Раздача не найдена в {}", args.file.display()))?;

    let config = record.game_config(args.viewer);
    let driver = AutoPlayDriver::with_interval(Duration::from_millis(args.interval_ms));
    let mut session = ReplaySession::with_driver(config, hand, driver)?;

    println!("=== POKER REPLAY CLI ===\n");
    print_view(&session.view(), args.json_view)?;
    println!("{}\n", session.last_description());

    if args.auto {
        session.toggle_autoplay();
        let mut ticker = tokio::time::interval(session.autoplay().interval());
        // Первый тик interval() срабатывает сразу – пропускаем его.
        ticker.tick().await;

        while session.is_autoplaying() {
            ticker.tick().await;
            match session.tick() {
                AutoTick::Stepped(outcome) => print_step(&session, &outcome, args.json_view)?,
                AutoTick::Finished | AutoTick::Inactive => break,
            }
        }
    } else {
        loop {
            let outcome = session.next();
            if outcome.is_complete_marker() {
                break;
            }
            print_step(&session, &outcome, args.json_view)?;
        }
    }

    println!("{}", session.next().description);
    println!("\n=== POKER REPLAY CLI DONE ===");
    Ok(())
}

fn print_step(
    session: &ReplaySession,
    outcome: &StepOutcome,
    json_view: bool,
) -> Result<(), serde_json::Error> {
    println!(
        "[{}/{}] {}",
        outcome.snapshot.cursor,
        session.replay().actions().len(),
        outcome.description
    );
    print_view(&session.view(), json_view)?;
    println!();
    Ok(())
}

fn print_view(view: &TableViewDto, json_view: bool) -> Result<(), serde_json::Error> {
    if json_view {
        println!("{}", serde_json::to_string(view)?);
        return Ok(());
    }

    println!("{} | {}", view.header, view.pot_label);

    let board: Vec<&str> = view.community.iter().map(|slot| slot.card.text()).collect();
    println!("  Board: {}", board.join(" "));

    for p in &view.players {
        println!(
            "  {:<10} {:>8} | {} : {} | {:?}{}",
            p.label,
            p.stack.to_string(),
            p.hole_cards[0].text(),
            p.hole_cards[1].text(),
            p.style.status,
            if p.is_dealer { " [D]" } else { "" }
        );
    }

    Ok(())
}
