//! Shared graphs for unit tests

use super::WordGraph;

/// Four-word graph used throughout the tests
///
/// ```text
/// A: B 0.8, C 0.5
/// B: A 0.8, D 0.9
/// C: A 0.5, D 0.3
/// D: B 0.9, C 0.3
/// ```
pub fn sample_graph() -> WordGraph {
    WordGraph::from_edges([
        ("A", "B", 0.8),
        ("A", "C", 0.5),
        ("B", "A", 0.8),
        ("B", "D", 0.9),
        ("C", "A", 0.5),
        ("C", "D", 0.3),
        ("D", "B", 0.9),
        ("D", "C", 0.3),
    ])
}

/// Sample graph plus an isolated word `E` and a one-way spur `C -> F`
pub fn extended_graph() -> WordGraph {
    let mut builder = WordGraph::builder();
    for (source, target, similarity) in [
        ("A", "B", 0.8),
        ("A", "C", 0.5),
        ("B", "A", 0.8),
        ("B", "D", 0.9),
        ("C", "A", 0.5),
        ("C", "D", 0.3),
        ("C", "F", 0.6),
        ("D", "B", 0.9),
        ("D", "C", 0.3),
    ] {
        builder.add_edge(source, target, similarity);
    }
    builder.add_word("E");
    builder.build()
}
