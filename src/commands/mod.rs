//! Command implementations

pub mod generate;
pub mod pairs;
pub mod path;
pub mod play;
pub mod replay;
pub mod solve;

pub use generate::{GenerateConfig, GeneratedPair, generate_pairs};
pub use pairs::{PairCheck, PairStatistics, PairsConfig, check_pair, check_pairs};
pub use path::{PathResult, find_path};
pub use play::run_play;
pub use replay::replay_game;
pub use solve::{SolveStatistics, solve_pairs};

use crate::analysis::SessionError;
use thiserror::Error;

/// Failures surfaced by the command layer
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("word '{0}' is not in the graph")]
    UnknownWord(String),
    #[error("no path from '{start}' to '{target}'")]
    NoPath { start: String, target: String },
    #[error("recorded step {step} ('{word}') rejected: {source}")]
    RejectedStep {
        step: usize,
        word: String,
        #[source]
        source: SessionError,
    },
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
