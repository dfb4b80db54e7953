//! Replay a recorded game
//!
//! Drives a fresh session through the moves of a saved game and produces the
//! same report the live game would have.

use super::CommandError;
use crate::analysis::{GameReport, GameSession};
use crate::core::{WordFrequencies, WordGraph};
use crate::loader::{GameRecord, RecordedMove};
use tracing::debug;

/// Replay `record` against `graph` and report on it
///
/// Steps after the target is reached are ignored.
///
/// # Errors
///
/// Returns an error if the start or target is unknown, or a recorded step is
/// not a legal move from the position it was played at.
pub fn replay_game(
    graph: &WordGraph,
    frequencies: Option<&WordFrequencies>,
    record: &GameRecord,
) -> Result<GameReport, CommandError> {
    let mut session = GameSession::new(
        graph,
        &record.start,
        &record.target,
        record.options.clone(),
    )?;
    if let Some(table) = frequencies {
        session = session.with_frequencies(table);
    }

    for (i, step) in record.moves.iter().enumerate() {
        if session.is_won() {
            debug!(ignored = record.moves.len() - i, "steps after the target");
            break;
        }
        let (word, result) = match step {
            RecordedMove::Move(word) => (word, session.make_move(word).map(|_| ())),
            RecordedMove::Backtrack { backtrack } => (backtrack, session.backtrack(backtrack)),
        };
        result.map_err(|source| CommandError::RejectedStep {
            step: i + 1,
            word: word.clone(),
            source,
        })?;
    }

    Ok(session.finish())
}
