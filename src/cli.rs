//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_core::FieldState;
use std::str::FromStr;

/// Noughts - evaluate boards and replay moves against the game rules
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Noughts and crosses rules engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the outcome of a 9-symbol board record
    State {
        /// Board record in row-major order, e.g. "XXX      "
        board: String,
    },

    /// Apply moves in order and print the resulting table record
    Play {
        /// Starting board record (defaults to an empty board)
        #[arg(long)]
        board: Option<String>,

        /// Moves as MARK:ROW:COL, e.g. X:0:0 O:1:1
        #[arg(required = true)]
        moves: Vec<MoveArg>,
    },
}

/// One move given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveArg {
    /// Mark to place.
    pub mark: FieldState,
    /// Target row.
    pub row: usize,
    /// Target column.
    pub col: usize,
}

impl FromStr for MoveArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [mark, row, col] = parts.as_slice() else {
            return Err(format!("expected MARK:ROW:COL, got {s:?}"));
        };
        let mark = mark
            .parse::<FieldState>()
            .map_err(|_| format!("unknown mark {mark:?}"))?;
        let row = row.parse().map_err(|_| format!("bad row {row:?}"))?;
        let col = col.parse().map_err(|_| format!("bad column {col:?}"))?;
        Ok(Self { mark, row, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(
            "x:0:2".parse::<MoveArg>(),
            Ok(MoveArg {
                mark: FieldState::Cross,
                row: 0,
                col: 2
            })
        );
        assert_eq!(
            "nought:2:1".parse::<MoveArg>().map(|m| m.mark),
            Ok(FieldState::Nought)
        );
    }

    #[test]
    fn test_parse_move_rejects_garbage() {
        assert!("X:0".parse::<MoveArg>().is_err());
        assert!("Z:0:0".parse::<MoveArg>().is_err());
        assert!("X:-1:0".parse::<MoveArg>().is_err());
    }

    #[test]
    fn test_cli_parses_play() {
        let cli =
            Cli::try_parse_from(["noughts", "play", "--board", "X        ", "O:1:1"]).unwrap();
        match cli.command {
            Command::Play { board, moves } => {
                assert_eq!(board.as_deref(), Some("X        "));
                assert_eq!(moves.len(), 1);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
