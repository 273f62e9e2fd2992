//! Noughts - command-line front end
//!
//! Evaluates board records and replays moves through the table registry.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, MoveArg};
use noughts::{Board, GameState, NoughtsConfig, TableManager, TableRecord};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

const CLI_TABLE: &str = "cli";

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => NoughtsConfig::from_file(path)?,
        None => NoughtsConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::State { board } => run_state(&board),
        Command::Play { board, moves } => run_play(&config, board, &moves),
    }
}

/// Print the outcome of a board record
#[instrument]
fn run_state(record: &str) -> Result<()> {
    let board: Board = record.parse().context("Invalid board record")?;
    let state = GameState::of(&board);
    info!(%state, "Evaluated board");
    println!("{state}");
    Ok(())
}

/// Replay moves on a fresh table
#[instrument(skip(config, moves))]
fn run_play(config: &NoughtsConfig, board: Option<String>, moves: &[MoveArg]) -> Result<()> {
    let manager = TableManager::new(config);
    manager.restore(TableRecord {
        id: CLI_TABLE.to_string(),
        version: 0,
        board: board.unwrap_or_else(|| Board::new().to_string()),
        crosses: None,
        noughts: None,
    })?;

    for (turn, mv) in moves.iter().enumerate() {
        debug!(turn, ?mv, "Applying move");
        if let Err(error) = manager.place(CLI_TABLE, mv.mark, mv.row, mv.col, None) {
            let context = format!(
                "Move {} ({}:{}:{}) rejected: {error:?}",
                turn + 1,
                mv.mark,
                mv.row,
                mv.col
            );
            return Err(anyhow::Error::new(error).context(context));
        }
    }

    let record = manager.record(CLI_TABLE)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    println!("{}", manager.state(CLI_TABLE)?);
    Ok(())
}
