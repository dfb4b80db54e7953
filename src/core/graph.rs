//! Word graph representation
//!
//! A `WordGraph` is an immutable snapshot of words and the directed,
//! similarity-weighted edges between them. Words are interned into dense
//! ids in lexicographic order, and every node keeps its edges sorted by
//! neighbor id, which gives the graph a canonical neighbor-iteration order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

/// 2-D embedding coordinate pair
///
/// Path finding ignores it. Puzzle generation uses it to keep the start
/// and target visibly apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Embedding {
    pub x: f64,
    pub y: f64,
}

impl Embedding {
    /// Euclidean distance between two coordinates
    #[inline]
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<[f64; 2]> for Embedding {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Embedding> for [f64; 2] {
    fn from(embedding: Embedding) -> Self {
        [embedding.x, embedding.y]
    }
}

/// A directed edge to a neighbor word
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    target: usize,
    similarity: f64,
}

impl Edge {
    /// Id of the neighbor word
    #[inline]
    #[must_use]
    pub const fn target(&self) -> usize {
        self.target
    }

    /// Similarity score in [0, 1]
    #[inline]
    #[must_use]
    pub const fn similarity(&self) -> f64 {
        self.similarity
    }
}

/// A word's outgoing edges and its embedding
#[derive(Debug, Clone, Default)]
pub struct WordNode {
    edges: Vec<Edge>,
    embedding: Option<Embedding>,
}

impl WordNode {
    /// Outgoing edges, sorted by neighbor id
    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    #[must_use]
    pub const fn embedding(&self) -> Option<Embedding> {
        self.embedding
    }
}

/// Immutable word graph
///
/// Edges are not guaranteed symmetric: `a` may list `b` with a weight that
/// differs from, or is absent from, `b`'s list.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    words: Vec<String>,
    index: FxHashMap<String, usize>,
    nodes: Vec<WordNode>,
}

impl WordGraph {
    /// Start building a graph
    #[must_use]
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Build a graph from `(source, target, similarity)` triples
    ///
    /// # Examples
    /// ```
    /// use word_path::core::WordGraph;
    ///
    /// let graph = WordGraph::from_edges([("cat", "dog", 0.8), ("dog", "cat", 0.7)]);
    /// assert_eq!(graph.similarity("cat", "dog"), Some(0.8));
    /// assert_eq!(graph.similarity("dog", "cat"), Some(0.7));
    /// assert_eq!(graph.similarity("cat", "cow"), None);
    /// ```
    pub fn from_edges<'s>(edges: impl IntoIterator<Item = (&'s str, &'s str, f64)>) -> Self {
        let mut builder = GraphBuilder::default();
        for (source, target, similarity) in edges {
            builder.add_edge(source, target, similarity);
        }
        builder.build()
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Total number of directed edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.edges.len()).sum()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Look up the id of a word
    #[inline]
    #[must_use]
    pub fn id(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Get the word for an id
    ///
    /// # Panics
    /// Panics if `id` was not produced by this graph
    #[inline]
    #[must_use]
    pub fn word(&self, id: usize) -> &str {
        &self.words[id]
    }

    /// All words in lexicographic order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn node(&self, word: &str) -> Option<&WordNode> {
        self.id(word).map(|id| &self.nodes[id])
    }

    /// Get the node for an id
    ///
    /// # Panics
    /// Panics if `id` was not produced by this graph
    #[inline]
    #[must_use]
    pub fn node_by_id(&self, id: usize) -> &WordNode {
        &self.nodes[id]
    }

    /// Similarity of the directed edge `source -> target`, if it exists
    #[must_use]
    pub fn similarity(&self, source: &str, target: &str) -> Option<f64> {
        let node = self.node(source)?;
        let target = self.id(target)?;
        node.edges
            .binary_search_by_key(&target, |edge| edge.target)
            .ok()
            .map(|pos| node.edges[pos].similarity)
    }

    /// Neighbors of a word with their similarities, in lexicographic order
    ///
    /// Unknown words have no neighbors.
    pub fn neighbors(&self, word: &str) -> impl Iterator<Item = (&str, f64)> {
        self.node(word)
            .map(WordNode::edges)
            .unwrap_or_default()
            .iter()
            .map(|edge| (self.words[edge.target].as_str(), edge.similarity))
    }

    /// Number of outgoing edges (0 for unknown words)
    #[must_use]
    pub fn degree(&self, word: &str) -> usize {
        self.node(word).map_or(0, |node| node.edges.len())
    }

    #[must_use]
    pub fn embedding(&self, word: &str) -> Option<Embedding> {
        self.node(word).and_then(WordNode::embedding)
    }
}

/// Incremental graph construction
///
/// Insertion order does not matter: the built graph is identical for any
/// order of the same words and edges.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: BTreeMap<String, PendingNode>,
}

#[derive(Debug, Default)]
struct PendingNode {
    edges: BTreeMap<String, f64>,
    embedding: Option<Embedding>,
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word with no edges (no-op if it already exists)
    pub fn add_word(&mut self, word: impl Into<String>) -> &mut Self {
        self.nodes.entry(word.into()).or_default();
        self
    }

    /// Add or replace the directed edge `source -> target`
    pub fn add_edge(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        similarity: f64,
    ) -> &mut Self {
        self.nodes
            .entry(source.into())
            .or_default()
            .edges
            .insert(target.into(), similarity);
        self
    }

    pub fn set_embedding(&mut self, word: impl Into<String>, embedding: Embedding) -> &mut Self {
        self.nodes.entry(word.into()).or_default().embedding = Some(embedding);
        self
    }

    /// Freeze the builder into an immutable graph
    ///
    /// Words that only appear as edge targets become nodes without edges.
    /// Similarities outside [0, 1] are clamped; non-finite ones become 0.
    #[must_use]
    pub fn build(self) -> WordGraph {
        let mut all_words: BTreeSet<&str> = BTreeSet::new();
        for (word, node) in &self.nodes {
            all_words.insert(word);
            all_words.extend(node.edges.keys().map(String::as_str));
        }

        let words: Vec<String> = all_words.into_iter().map(str::to_owned).collect();
        let index: FxHashMap<String, usize> = words
            .iter()
            .enumerate()
            .map(|(id, word)| (word.clone(), id))
            .collect();

        let mut nodes = vec![WordNode::default(); words.len()];
        let mut clamped = 0usize;

        for (word, pending) in &self.nodes {
            let node = &mut nodes[index[word]];
            node.embedding = pending.embedding;
            // BTreeMap iteration is sorted by word, which matches id order
            node.edges = pending
                .edges
                .iter()
                .map(|(target, &raw)| {
                    let similarity = sanitize_similarity(raw);
                    if similarity.to_bits() != raw.to_bits() {
                        clamped += 1;
                    }
                    Edge {
                        target: index[target],
                        similarity,
                    }
                })
                .collect();
        }

        if clamped > 0 {
            warn!(clamped, "similarities outside [0, 1] were clamped");
        }

        WordGraph {
            words,
            index,
            nodes,
        }
    }
}

fn sanitize_similarity(raw: f64) -> f64 {
    if raw.is_finite() {
        raw.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
