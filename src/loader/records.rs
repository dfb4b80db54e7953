//! Recorded games and word-pair lists

use super::{LoadError, read_file};
use crate::analysis::SessionOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One step of a recorded game: a forward move or a jump back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordedMove {
    Move(String),
    Backtrack { backtrack: String },
}

/// A complete game as saved by a client
///
/// ```json
/// {
///   "start": "cat",
///   "target": "cow",
///   "moves": ["dog", "lion", {"backtrack": "dog"}, "cow"],
///   "is_challenge": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub start: String,
    pub target: String,
    #[serde(default)]
    pub moves: Vec<RecordedMove>,
    #[serde(flatten)]
    pub options: SessionOptions,
}

/// A start and target word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    pub start: String,
    pub target: String,
}

/// Load a recorded game from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_game_record<P: AsRef<Path>>(path: P) -> Result<GameRecord, LoadError> {
    game_record_from_json(&read_file(path.as_ref())?)
}

/// Parse a recorded game from JSON text
///
/// # Errors
///
/// Returns an error if the text is not a valid game record.
pub fn game_record_from_json(json: &str) -> Result<GameRecord, LoadError> {
    serde_json::from_str(json).map_err(|source| LoadError::Parse {
        what: "game record",
        source,
    })
}

/// Load word pairs, one `start target` pair per line
///
/// # Errors
///
/// Returns an error if the file cannot be read or a line is malformed.
pub fn load_pairs<P: AsRef<Path>>(path: P) -> Result<Vec<WordPair>, LoadError> {
    pairs_from_str(&read_file(path.as_ref())?)
}

/// Parse word pairs from text
///
/// Words may be separated by whitespace or a comma. Blank lines and lines
/// starting with `#` are skipped.
///
/// # Errors
///
/// Returns an error naming the first line that does not hold exactly two words.
pub fn pairs_from_str(text: &str) -> Result<Vec<WordPair>, LoadError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| {
            let words: Vec<&str> = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|w| !w.is_empty())
                .collect();
            match words.as_slice() {
                [start, target] => Ok(WordPair {
                    start: (*start).to_string(),
                    target: (*target).to_string(),
                }),
                _ => Err(LoadError::BadPairLine {
                    line: line_no,
                    content: line.to_string(),
                }),
            }
        })
        .collect()
}
