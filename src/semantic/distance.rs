//! Distance and similarity along word paths

use crate::core::WordGraph;

/// Distance reported for a hop with no edge
pub const UNKNOWN_EDGE_DISTANCE: f64 = 1.0;

/// Similarity assumed for a hop with no edge when averaging
pub const UNKNOWN_EDGE_SIMILARITY: f64 = 0.0;

/// Semantic distance of the directed hop `source -> target`
///
/// Returns `1 - similarity` when `target` is a direct neighbor of `source`,
/// and [`UNKNOWN_EDGE_DISTANCE`] otherwise (including unknown words).
///
/// # Examples
/// ```
/// use word_path::core::WordGraph;
/// use word_path::semantic::distance;
///
/// let graph = WordGraph::from_edges([("sun", "moon", 0.75)]);
/// assert!((distance(&graph, "sun", "moon") - 0.25).abs() < 1e-12);
/// assert_eq!(distance(&graph, "moon", "sun"), 1.0);
/// ```
#[must_use]
pub fn distance(graph: &WordGraph, source: &str, target: &str) -> f64 {
    graph
        .similarity(source, target)
        .map_or(UNKNOWN_EDGE_DISTANCE, |similarity| 1.0 - similarity)
}

/// Sum of hop distances along a path
///
/// Paths with fewer than two words have distance 0.
#[must_use]
pub fn path_distance<S: AsRef<str>>(graph: &WordGraph, path: &[S]) -> f64 {
    if path.len() < 2 {
        return 0.0;
    }

    path.windows(2).fold(0.0, |total, hop| {
        total + distance(graph, hop[0].as_ref(), hop[1].as_ref())
    })
}

/// Mean hop similarity along a path
///
/// Hops without an edge count as [`UNKNOWN_EDGE_SIMILARITY`]. Returns `None`
/// for paths with fewer than two words: there is no hop to average, which
/// is different from an average of zero.
#[must_use]
pub fn average_similarity<S: AsRef<str>>(graph: &WordGraph, path: &[S]) -> Option<f64> {
    if path.len() < 2 {
        return None;
    }

    let hops = path.len() - 1;
    let total = path.windows(2).fold(0.0, |total, hop| {
        total
            + graph
                .similarity(hop[0].as_ref(), hop[1].as_ref())
                .unwrap_or(UNKNOWN_EDGE_SIMILARITY)
    });

    Some(total / hops as f64)
}

/// Total semantic distance of a path, computed by walking neighbor lists
///
/// Always equal to [`path_distance`]; kept as a separate walk so the two
/// can be checked against each other.
#[must_use]
pub fn total_semantic_distance<S: AsRef<str>>(path: &[S], graph: &WordGraph) -> f64 {
    let mut total = 0.0;

    for hop in path.windows(2) {
        let (from, to) = (hop[0].as_ref(), hop[1].as_ref());
        let similarity = graph
            .neighbors(from)
            .find_map(|(word, similarity)| (word == to).then_some(similarity))
            .unwrap_or(UNKNOWN_EDGE_SIMILARITY);
        total += 1.0 - similarity;
    }

    total
}
