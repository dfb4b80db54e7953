//! Semantic distance over the word graph
//!
//! Similarity scores become distances (`1 - similarity`), which the
//! least-drift path search uses as edge costs and the report uses to
//! measure how far a path wandered.

mod distance;

pub use distance::{
    UNKNOWN_EDGE_DISTANCE, UNKNOWN_EDGE_SIMILARITY, average_similarity, distance, path_distance,
    total_semantic_distance,
};
