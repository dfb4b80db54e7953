//! Weighted shortest-path search over the word graph
//!
//! One Dijkstra implementation serves every cost model: fewest hops for the
//! optimal and suggested paths, and semantic distance for the least-drift path.

mod cost;
mod finder;

pub use cost::{CostModel, EdgeCost, HopCost, SemanticCost};
pub use finder::{PathFinder, ShortestPath, find_semantic_path, find_shortest_path};
