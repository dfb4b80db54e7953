//! Word Path
//!
//! Navigation engine for a word-association game: players walk a weighted,
//! directed graph of semantically related words from a start word to a
//! target word. The engine finds optimal routes, judges every move, and
//! summarizes finished games.
//!
//! # Quick Start
//!
//! ```rust
//! use word_path::analysis::{GameSession, SessionOptions};
//! use word_path::core::WordGraph;
//!
//! let graph = WordGraph::from_edges([
//!     ("cat", "dog", 0.8),
//!     ("dog", "wolf", 0.7),
//!     ("cat", "lion", 0.6),
//!     ("lion", "wolf", 0.4),
//! ]);
//!
//! let mut session = GameSession::new(&graph, "cat", "wolf", SessionOptions::default()).unwrap();
//! session.make_move("dog").unwrap();
//! session.make_move("wolf").unwrap();
//!
//! let report = session.finish();
//! assert!(report.is_won());
//! assert_eq!(report.move_accuracy, 100.0);
//! ```

// Core domain types
pub mod core;

// Semantic distance functions
pub mod semantic;

// Shortest-path search
pub mod pathfinding;

// Move classification, sessions and reports
pub mod analysis;

// Graph, frequency and record files
pub mod loader;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
