//! Path query command
//!
//! Finds the shortest route between two words under a chosen cost model and
//! measures it.

use super::CommandError;
use crate::core::WordGraph;
use crate::pathfinding::{CostModel, PathFinder};
use crate::semantic::{average_similarity, path_distance};

/// Result of a path query
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    pub start: String,
    pub target: String,
    pub cost_model: CostModel,
    pub path: Vec<String>,
    pub hops: usize,
    pub semantic_distance: f64,
    pub average_similarity: Option<f64>,
}

/// Find and measure the best path from `start` to `target`
///
/// # Errors
///
/// Returns an error if either word is not in the graph or the target is
/// unreachable.
pub fn find_path(
    graph: &WordGraph,
    start: &str,
    target: &str,
    cost_model: CostModel,
) -> Result<PathResult, CommandError> {
    for word in [start, target] {
        if !graph.contains(word) {
            return Err(CommandError::UnknownWord(word.to_string()));
        }
    }

    let path = PathFinder::new(graph, cost_model)
        .find_path(start, target)
        .ok_or_else(|| CommandError::NoPath {
            start: start.to_string(),
            target: target.to_string(),
        })?;

    Ok(PathResult {
        start: start.to_string(),
        target: target.to_string(),
        cost_model,
        hops: path.len().saturating_sub(1),
        semantic_distance: path_distance(graph, &path),
        average_similarity: average_similarity(graph, &path),
        path,
    })
}
