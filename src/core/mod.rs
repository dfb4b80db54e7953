//! Core domain types for the word graph
//!
//! This module holds the immutable data the engine reads: the graph itself
//! and the optional word-frequency table. Nothing here performs I/O.

#[cfg(test)]
pub(crate) mod fixtures;
mod frequency;
mod graph;

pub use frequency::WordFrequencies;
pub use graph::{Edge, Embedding, GraphBuilder, WordGraph, WordNode};
