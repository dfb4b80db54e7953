//! Game analysis
//!
//! Move classification, the end-of-game report, the session that ties
//! them together at play time, and a heuristic solver that plays puzzles
//! the way a person might.

mod classifier;
mod context;
mod report;
mod session;
mod solver;

pub use classifier::{MoveContext, OptimalChoice, classify_move};
pub use context::{
    AiComparison, BacktrackEvent, DailyChallenge, PotentialRarestMove, SessionLog, SessionOptions,
};
pub use report::{GameReport, GameStatus, ReportInputs, generate_report};
pub use session::{GameSession, SessionError};
pub use solver::{HeuristicSolver, SOLVER_MODEL, SolveOutcome, SolveStatus, SolverConfig};
