//! Generate random puzzles
//!
//! Picks start/target pairs whose fewest-moves path has an exact length.
//! The caller supplies the random source so runs can be seeded.
//!
//! A generated set never uses a word as a start twice or as a target twice,
//! never pairs a word with itself and never repeats a pair in either
//! direction. Both words must have at least `min_degree` neighbors, and
//! with `min_embedding_distance` set both need embeddings at least that far
//! apart.

use crate::core::WordGraph;
use crate::pathfinding::PathFinder;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Draws per requested pair before giving up
const ATTEMPTS_PER_PAIR: usize = 200;

/// A generated puzzle and one optimal solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPair {
    pub start: String,
    pub target: String,
    pub path: Vec<String>,
}

/// Constraints on generated puzzles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateConfig {
    /// Exact optimal path length in moves; zero yields no puzzles
    pub hops: usize,
    /// Fewest neighbors the start and the target must each have
    pub min_degree: usize,
    /// Smallest embedding distance between start and target
    pub min_embedding_distance: Option<f64>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            hops: 4,
            min_degree: 1,
            min_embedding_distance: None,
        }
    }
}

impl GenerateConfig {
    fn far_enough(&self, graph: &WordGraph, start: &str, target: &str) -> bool {
        let Some(min) = self.min_embedding_distance else {
            return true;
        };
        match (graph.embedding(start), graph.embedding(target)) {
            (Some(a), Some(b)) => a.distance(b) >= min,
            _ => false,
        }
    }
}

/// Generate up to `count` pairs exactly `config.hops` moves apart
///
/// Returns fewer pairs when the graph does not hold enough of them.
#[must_use]
pub fn generate_pairs<R: Rng + ?Sized>(
    graph: &WordGraph,
    count: usize,
    config: &GenerateConfig,
    rng: &mut R,
) -> Vec<GeneratedPair> {
    if config.hops == 0 {
        return Vec::new();
    }

    let min_degree = config.min_degree.max(1);
    let eligible: Vec<&str> = graph
        .words()
        .filter(|w| graph.degree(w) >= min_degree)
        .collect();
    let finder = PathFinder::hops(graph);
    let wanted = config.hops as f64;

    let mut used_starts = FxHashSet::default();
    let mut used_targets = FxHashSet::default();
    let mut seen = FxHashSet::default();
    let mut pairs = Vec::with_capacity(count);
    for _ in 0..count.saturating_mul(ATTEMPTS_PER_PAIR) {
        if pairs.len() == count {
            break;
        }
        let Some(&start) = eligible.choose(rng) else {
            break;
        };
        if used_starts.contains(start) {
            continue;
        }

        let mut targets: Vec<&str> = finder
            .distances_from(start)
            .into_iter()
            .filter(|&(w, d)| w != start && (d - wanted).abs() < 0.5)
            .map(|(w, _)| w)
            .filter(|w| graph.degree(w) >= min_degree && !used_targets.contains(w))
            .filter(|w| config.far_enough(graph, start, w))
            .collect();
        targets.sort_unstable();
        let Some(&target) = targets.choose(rng) else {
            continue;
        };
        let key = if start < target {
            (start, target)
        } else {
            (target, start)
        };
        if !seen.insert(key) {
            continue;
        }

        if let Some(path) = finder.find_path(start, target) {
            debug!(start, target, hops = config.hops, "generated pair");
            used_starts.insert(start);
            used_targets.insert(target);
            pairs.push(GeneratedPair {
                start: start.to_string(),
                target: target.to_string(),
                path,
            });
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Embedding;
    use crate::core::fixtures::extended_graph;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn exact(hops: usize) -> GenerateConfig {
        GenerateConfig {
            hops,
            ..GenerateConfig::default()
        }
    }

    /// a -> b -> c and a -> d, laid out on a line
    fn embedded_graph() -> WordGraph {
        let mut builder = WordGraph::builder();
        builder
            .add_edge("a", "b", 0.7)
            .add_edge("b", "c", 0.7)
            .add_edge("a", "d", 0.7)
            .add_edge("c", "a", 0.7)
            .add_edge("d", "a", 0.7)
            .set_embedding("a", Embedding { x: 0.0, y: 0.0 })
            .set_embedding("b", Embedding { x: 1.0, y: 0.0 })
            .set_embedding("c", Embedding { x: 10.0, y: 0.0 })
            .set_embedding("d", Embedding { x: 0.5, y: 0.0 });
        builder.build()
    }

    #[test]
    fn pairs_have_requested_length() {
        let graph = extended_graph();
        let mut rng = StdRng::seed_from_u64(7);
        let pairs = generate_pairs(&graph, 3, &exact(2), &mut rng);

        assert!(!pairs.is_empty());
        for pair in &pairs {
            assert_eq!(pair.path.len(), 3);
            assert_eq!(pair.path.first(), Some(&pair.start));
            assert_eq!(pair.path.last(), Some(&pair.target));
        }
    }

    #[test]
    fn zero_hops_yields_nothing() {
        let graph = extended_graph();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_pairs(&graph, 3, &exact(0), &mut rng).is_empty());
    }

    #[test]
    fn start_never_equals_target() {
        let graph = extended_graph();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            for hops in 1..=3 {
                for pair in generate_pairs(&graph, 4, &exact(hops), &mut rng) {
                    assert_ne!(pair.start, pair.target);
                }
            }
        }
    }

    #[test]
    fn starts_and_targets_are_not_reused() {
        let graph = extended_graph();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pairs = generate_pairs(&graph, 20, &exact(1), &mut rng);

            let starts: FxHashSet<&str> = pairs.iter().map(|p| p.start.as_str()).collect();
            let targets: FxHashSet<&str> = pairs.iter().map(|p| p.target.as_str()).collect();
            assert_eq!(starts.len(), pairs.len());
            assert_eq!(targets.len(), pairs.len());
            // Only A, B, C and D have neighbors
            assert!(pairs.len() <= 4);
        }
    }

    #[test]
    fn reversed_pairs_are_not_repeated() {
        let graph = extended_graph();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pairs = generate_pairs(&graph, 20, &exact(1), &mut rng);
            for pair in &pairs {
                assert!(
                    !pairs
                        .iter()
                        .any(|p| p.start == pair.target && p.target == pair.start)
                );
            }
        }
    }

    #[test]
    fn low_degree_words_are_skipped() {
        let graph = extended_graph();
        let mut rng = StdRng::seed_from_u64(5);

        // C is the only word with three neighbors
        let config = GenerateConfig {
            min_degree: 3,
            ..exact(1)
        };
        assert!(generate_pairs(&graph, 4, &config, &mut rng).is_empty());

        let config = GenerateConfig {
            min_degree: 2,
            ..exact(1)
        };
        let pairs = generate_pairs(&graph, 4, &config, &mut rng);
        assert!(!pairs.is_empty());
        for pair in &pairs {
            assert!(graph.degree(&pair.start) >= 2);
            assert!(graph.degree(&pair.target) >= 2);
        }
    }

    #[test]
    fn dead_end_targets_are_skipped() {
        // F is reachable from C but has no neighbors of its own
        let graph = extended_graph();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pairs = generate_pairs(&graph, 4, &exact(1), &mut rng);
            assert!(pairs.iter().all(|p| p.target != "F"));
        }
    }

    #[test]
    fn embedding_distance_filters_close_pairs() {
        let graph = embedded_graph();
        let config = GenerateConfig {
            min_embedding_distance: Some(5.0),
            ..exact(1)
        };
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pairs = generate_pairs(&graph, 5, &config, &mut rng);
            for pair in &pairs {
                let (s, t) = (
                    graph.embedding(&pair.start).unwrap(),
                    graph.embedding(&pair.target).unwrap(),
                );
                assert!(s.distance(t) >= 5.0);
            }
            // b -> c and c -> a are the only one-move pairs that far apart
            assert!(pairs.len() <= 2);
            assert!(!pairs.is_empty());
        }
    }

    #[test]
    fn embedding_distance_needs_embeddings() {
        let graph = extended_graph();
        let config = GenerateConfig {
            min_embedding_distance: Some(0.0),
            ..exact(1)
        };
        let mut rng = StdRng::seed_from_u64(2);
        assert!(generate_pairs(&graph, 4, &config, &mut rng).is_empty());
    }

    #[test]
    fn same_seed_same_pairs() {
        let graph = extended_graph();
        let a = generate_pairs(&graph, 4, &exact(2), &mut StdRng::seed_from_u64(3));
        let b = generate_pairs(&graph, 4, &exact(2), &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn impossible_length_yields_nothing() {
        let graph = extended_graph();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_pairs(&graph, 2, &exact(9), &mut rng).is_empty());
    }
}
