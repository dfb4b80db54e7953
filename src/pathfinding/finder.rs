//! Dijkstra path finder
//!
//! # Tie-breaking
//!
//! When several minimum-cost paths exist the finder always returns the same
//! one: the frontier pops the cheapest word first and, among equal costs,
//! the lexicographically smallest word; neighbors are relaxed in
//! lexicographic order; and a word's predecessor is only replaced by a
//! strictly cheaper one. The result depends on the graph's contents alone.

use super::cost::{EdgeCost, HopCost, SemanticCost};
use crate::core::WordGraph;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::debug;

/// Anything that can produce a shortest path between two words
///
/// Returns the words from `start` to `end` inclusive, or an empty vector
/// when no path exists.
pub trait ShortestPath {
    fn shortest_path(&self, start: &str, end: &str) -> Vec<String>;
}

/// Shortest-path search over a borrowed graph with a fixed cost model
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'g, C: EdgeCost> {
    graph: &'g WordGraph,
    cost: C,
}

impl<'g> PathFinder<'g, HopCost> {
    /// Finder that minimizes the number of moves
    #[must_use]
    pub const fn hops(graph: &'g WordGraph) -> Self {
        Self::new(graph, HopCost)
    }
}

impl<'g> PathFinder<'g, SemanticCost> {
    /// Finder that minimizes total semantic distance
    #[must_use]
    pub const fn semantic(graph: &'g WordGraph) -> Self {
        Self::new(graph, SemanticCost)
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the cheapest, then smallest id
#[derive(Debug, Clone, Copy)]
struct Frontier {
    cost: f64,
    node: usize,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

/// Settled costs and predecessors from one search
struct Search {
    cost: Vec<f64>,
    prev: Vec<Option<usize>>,
    settled: usize,
}

impl<'g, C: EdgeCost> PathFinder<'g, C> {
    pub const fn new(graph: &'g WordGraph, cost: C) -> Self {
        Self { graph, cost }
    }

    #[must_use]
    pub const fn graph(&self) -> &'g WordGraph {
        self.graph
    }

    /// Find the cheapest path from `start` to `end`
    ///
    /// Returns `None` if either word is missing from the graph or `end` is
    /// unreachable. A word is always reachable from itself in zero moves.
    ///
    /// # Examples
    /// ```
    /// use word_path::core::WordGraph;
    /// use word_path::pathfinding::PathFinder;
    ///
    /// let graph = WordGraph::from_edges([("a", "b", 0.9), ("b", "c", 0.9), ("a", "c", 0.1)]);
    ///
    /// let fewest = PathFinder::hops(&graph).find_path("a", "c").unwrap();
    /// assert_eq!(fewest, vec!["a", "c"]);
    ///
    /// let closest = PathFinder::semantic(&graph).find_path("a", "c").unwrap();
    /// assert_eq!(closest, vec!["a", "b", "c"]);
    /// ```
    #[must_use]
    pub fn find_path(&self, start: &str, end: &str) -> Option<Vec<String>> {
        self.find_path_with_cost(start, end).map(|(path, _)| path)
    }

    /// Find the cheapest path and its total cost
    #[must_use]
    pub fn find_path_with_cost(&self, start: &str, end: &str) -> Option<(Vec<String>, f64)> {
        let start_id = self.graph.id(start)?;
        let end_id = self.graph.id(end)?;

        if start_id == end_id {
            return Some((vec![start.to_owned()], 0.0));
        }

        let search = self.search(start_id, Some(end_id));
        debug!(start, end, settled = search.settled, "path search finished");

        if search.prev[end_id].is_none() {
            return None;
        }

        let mut ids = vec![end_id];
        let mut current = end_id;
        while let Some(previous) = search.prev[current] {
            ids.push(previous);
            current = previous;
        }
        ids.reverse();

        let path = ids
            .into_iter()
            .map(|id| self.graph.word(id).to_owned())
            .collect();
        Some((path, search.cost[end_id]))
    }

    /// Cheapest cost from `start` to every reachable word (including itself)
    ///
    /// Empty if `start` is not in the graph.
    #[must_use]
    pub fn distances_from(&self, start: &str) -> FxHashMap<&'g str, f64> {
        let Some(start_id) = self.graph.id(start) else {
            return FxHashMap::default();
        };

        let search = self.search(start_id, None);
        search
            .cost
            .iter()
            .enumerate()
            .filter(|(_, cost)| cost.is_finite())
            .map(|(id, &cost)| (self.graph.word(id), cost))
            .collect()
    }

    /// Run Dijkstra from `start`, stopping early once `end` is settled
    fn search(&self, start: usize, end: Option<usize>) -> Search {
        let n = self.graph.len();
        let mut cost = vec![f64::INFINITY; n];
        let mut prev: Vec<Option<usize>> = vec![None; n];
        let mut done = vec![false; n];
        let mut settled = 0;

        let mut heap = BinaryHeap::new();
        cost[start] = 0.0;
        heap.push(Frontier {
            cost: 0.0,
            node: start,
        });

        while let Some(Frontier { cost: current, node }) = heap.pop() {
            if done[node] {
                continue;
            }
            done[node] = true;
            settled += 1;

            if Some(node) == end {
                break;
            }

            for edge in self.graph.node_by_id(node).edges() {
                let next = edge.target();
                if done[next] {
                    continue;
                }
                let candidate = current + self.cost.cost(edge);
                if candidate < cost[next] {
                    cost[next] = candidate;
                    prev[next] = Some(node);
                    heap.push(Frontier {
                        cost: candidate,
                        node: next,
                    });
                }
            }
        }

        Search {
            cost,
            prev,
            settled,
        }
    }
}

impl<C: EdgeCost> ShortestPath for PathFinder<'_, C> {
    fn shortest_path(&self, start: &str, end: &str) -> Vec<String> {
        self.find_path(start, end).unwrap_or_default()
    }
}

/// Fewest-moves path between two words (empty if unreachable)
#[must_use]
pub fn find_shortest_path(graph: &WordGraph, start: &str, end: &str) -> Vec<String> {
    PathFinder::hops(graph).shortest_path(start, end)
}

/// Least-semantic-drift path between two words (empty if unreachable)
#[must_use]
pub fn find_semantic_path(graph: &WordGraph, start: &str, end: &str) -> Vec<String> {
    PathFinder::semantic(graph).shortest_path(start, end)
}
