//! Gomoku terminal game
//!
//! Play Black against the engine by typing `row col`. An optional first
//! argument names a TOML config file (default `gomoku.toml`).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use gomoku::{AIEngine, GameConfig, GameSession, GameStatus, MoveResult, Pos, SearchObserver};

struct ThinkingIndicator;

impl SearchObserver for ThinkingIndicator {
    fn search_started(&self) {
        println!("AI is thinking...");
    }

    fn search_finished(&self, result: &MoveResult) {
        if let Some(pos) = result.best_move {
            println!("AI plays {pos} ({} positions, {} ms)", result.nodes, result.time_ms);
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("gomoku.toml"), PathBuf::from);
    let config = GameConfig::load_or_default(&path)?;

    let engine = AIEngine::new(config.depth).with_observer(Arc::new(ThinkingIndicator));
    let mut session = GameSession::with_engine(&config, engine);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{}", session.board());
        match session.status() {
            GameStatus::Won(winner) => {
                println!("{winner:?} wins!");
                break;
            }
            GameStatus::Tied => {
                println!("Tied!");
                break;
            }
            GameStatus::InProgress => {}
        }

        if !session.is_human_turn() {
            session.play_ai_turn()?;
            continue;
        }

        print!("Your move (row col): ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let Some(pos) = parse_move(&line) else {
            println!("Enter two numbers, e.g. `9 10`");
            continue;
        };
        if let Err(e) = session.play_human(pos) {
            println!("{e}");
        }
    }

    Ok(())
}

fn parse_move(line: &str) -> Option<Pos> {
    let mut parts = line.split_whitespace().map(str::parse::<u8>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(row)), Some(Ok(col)), None) => Some(Pos::new(row, col)),
        _ => None,
    }
}
