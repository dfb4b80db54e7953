//! Graph and frequency file loading
//!
//! The graph file is the output of the graph build pipeline:
//!
//! ```json
//! { "nodes": { "cat": { "edges": { "dog": 0.82 }, "tsne": [1.5, -0.3] } } }
//! ```
//!
//! A bare word map without the `nodes` wrapper is accepted too. Missing
//! `edges` or `tsne` fields default to empty.

use super::{LoadError, read_file};
use crate::core::{Embedding, WordFrequencies, WordGraph};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawGraph {
    Wrapped { nodes: BTreeMap<String, RawNode> },
    Bare(BTreeMap<String, RawNode>),
}

#[derive(Deserialize, Default)]
struct RawNode {
    #[serde(default)]
    edges: BTreeMap<String, f64>,
    #[serde(default)]
    tsne: Option<[f64; 2]>,
}

/// Load a word graph from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid graph JSON,
/// or contains no words.
///
/// # Examples
/// ```no_run
/// use word_path::loader::load_graph;
///
/// let graph = load_graph("data/graph.json").unwrap();
/// println!("Loaded {} words", graph.len());
/// ```
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<WordGraph, LoadError> {
    let path = path.as_ref();
    let graph = graph_from_json(&read_file(path)?)?;
    info!(
        path = %path.display(),
        words = graph.len(),
        edges = graph.edge_count(),
        "loaded word graph"
    );
    Ok(graph)
}

/// Parse a word graph from JSON text
///
/// # Errors
///
/// Returns an error if the text is not valid graph JSON or has no words.
pub fn graph_from_json(json: &str) -> Result<WordGraph, LoadError> {
    let raw: RawGraph = serde_json::from_str(json).map_err(|source| LoadError::Parse {
        what: "word graph",
        source,
    })?;
    let nodes = match raw {
        RawGraph::Wrapped { nodes } | RawGraph::Bare(nodes) => nodes,
    };
    if nodes.is_empty() {
        return Err(LoadError::EmptyGraph);
    }

    let mut builder = WordGraph::builder();
    for (word, node) in nodes {
        for (neighbor, similarity) in node.edges {
            builder.add_edge(word.as_str(), neighbor, similarity);
        }
        match node.tsne {
            Some(coords) => builder.set_embedding(word, Embedding::from(coords)),
            None => builder.add_word(word),
        };
    }
    Ok(builder.build())
}

/// Load a word-frequency table (`{"word": count, ...}`) from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_frequencies<P: AsRef<Path>>(path: P) -> Result<WordFrequencies, LoadError> {
    let path = path.as_ref();
    let table = frequencies_from_json(&read_file(path)?)?;
    info!(path = %path.display(), words = table.len(), "loaded word frequencies");
    Ok(table)
}

/// Parse a word-frequency table from JSON text
///
/// # Errors
///
/// Returns an error if the text is not a JSON object of word counts.
pub fn frequencies_from_json(json: &str) -> Result<WordFrequencies, LoadError> {
    serde_json::from_str(json).map_err(|source| LoadError::Parse {
        what: "word frequencies",
        source,
    })
}
