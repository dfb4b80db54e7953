//! Data loading
//!
//! Reads the word graph, frequency tables, recorded games and word-pair
//! lists from JSON or plain-text files. The engine itself never touches the
//! filesystem; everything here happens before a game starts.

mod graph;
mod records;

pub use graph::{frequencies_from_json, graph_from_json, load_frequencies, load_graph};
pub use records::{
    GameRecord, RecordedMove, WordPair, game_record_from_json, load_game_record, load_pairs,
    pairs_from_str,
};

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading data files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}: expected 'start target', got '{content}'")]
    BadPairLine { line: usize, content: String },
    #[error("graph contains no words")]
    EmptyGraph,
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
