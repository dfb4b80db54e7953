//! Per-move classification
//!
//! Judges each move against two references: the global-optimal path fixed
//! at game start, and the suggested path recomputed from the player's live
//! position. Also records a few heuristic properties of the choice.

use crate::core::{WordFrequencies, WordGraph};
use crate::pathfinding::ShortestPath;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Classification of a single player move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimalChoice {
    /// Word occupied before the move
    pub position: String,
    /// Word the player moved to
    pub chosen: String,
    /// The "correct" next word: the global path's next step while the
    /// player is on it, otherwise the suggested path's next step
    pub optimal_choice: Option<String>,
    /// `position` is on the global path with a successor
    pub on_global_path: bool,
    pub is_global_optimal: bool,
    pub is_local_optimal: bool,
    /// Moves left from `chosen` to the target, `None` if unreachable
    pub hops_to_end: Option<usize>,
    pub chose_most_similar: bool,
    pub chose_least_similar: bool,
    pub chose_rarest: bool,
}

impl OptimalChoice {
    /// Whether this move counts toward move accuracy
    ///
    /// A move is optimal if it follows either reference: the fixed global
    /// path or the freshly recomputed suggested path.
    #[inline]
    #[must_use]
    pub const fn is_optimal(&self) -> bool {
        self.is_global_optimal || self.is_local_optimal
    }

    /// Whether the player left the global path from a position on it
    #[inline]
    #[must_use]
    pub const fn is_missed(&self) -> bool {
        self.on_global_path && !self.is_global_optimal
    }

    /// Human-readable description of a missed move
    ///
    /// Returns `None` unless [`is_missed`](Self::is_missed) holds.
    #[must_use]
    pub fn missed_description(&self) -> Option<String> {
        if !self.is_missed() {
            return None;
        }
        let correct = self.optimal_choice.as_deref()?;
        Some(format!(
            "At {}, chose {} instead of optimal {}",
            self.position, self.chosen, correct
        ))
    }
}

/// Everything the classifier needs to judge one move
#[derive(Debug, Clone, Copy)]
pub struct MoveContext<'a> {
    pub graph: &'a WordGraph,
    /// Word occupied before the move
    pub position: &'a str,
    pub chosen: &'a str,
    /// Hop-shortest path from the start word, computed once at game start
    pub global_path: &'a [String],
    /// Hop-shortest path from `position` to the target, computed this move
    pub suggested_path: &'a [String],
    pub target: &'a str,
    pub frequencies: Option<&'a WordFrequencies>,
}

/// Classify a move
///
/// `pathfinder` is used once, to measure the remaining hops from the
/// chosen word to the target.
///
/// # Examples
/// ```
/// use word_path::analysis::{MoveContext, classify_move};
/// use word_path::core::WordGraph;
/// use word_path::pathfinding::PathFinder;
///
/// let graph = WordGraph::from_edges([("a", "b", 0.9), ("b", "c", 0.9), ("a", "x", 0.2)]);
/// let global = vec!["a".to_string(), "b".to_string(), "c".to_string()];
/// let ctx = MoveContext {
///     graph: &graph,
///     position: "a",
///     chosen: "b",
///     global_path: &global,
///     suggested_path: &global,
///     target: "c",
///     frequencies: None,
/// };
///
/// let choice = classify_move(&ctx, &PathFinder::hops(&graph));
/// assert!(choice.is_global_optimal);
/// assert!(choice.chose_most_similar);
/// assert_eq!(choice.hops_to_end, Some(1));
/// ```
pub fn classify_move<P: ShortestPath + ?Sized>(
    ctx: &MoveContext<'_>,
    pathfinder: &P,
) -> OptimalChoice {
    let graph = ctx.graph;
    let neighbors: Vec<(&str, f64)> = graph.neighbors(ctx.position).collect();
    let has_edges = !neighbors.is_empty();

    let global_next = next_on_path(ctx.global_path, ctx.position);
    let local_next = ctx.suggested_path.get(1).map(String::as_str);

    let on_global_path = has_edges && global_next.is_some();
    let is_global_optimal = has_edges
        && ctx
            .global_path
            .windows(2)
            .any(|pair| pair[0] == ctx.position && pair[1] == ctx.chosen);
    let is_local_optimal = local_next == Some(ctx.chosen);

    let optimal_choice = if on_global_path {
        global_next
    } else {
        local_next
    }
    .map(str::to_owned);

    let remaining = pathfinder.shortest_path(ctx.chosen, ctx.target);
    let hops_to_end = remaining.len().checked_sub(1);

    let (chose_most_similar, chose_least_similar) =
        similarity_extremes(&neighbors, graph.similarity(ctx.position, ctx.chosen));
    let chose_rarest = ctx
        .frequencies
        .is_some_and(|table| is_rarest(table, &neighbors, ctx.chosen));

    debug!(
        position = ctx.position,
        chosen = ctx.chosen,
        is_global_optimal,
        is_local_optimal,
        ?hops_to_end,
        "classified move"
    );

    OptimalChoice {
        position: ctx.position.to_owned(),
        chosen: ctx.chosen.to_owned(),
        optimal_choice,
        on_global_path,
        is_global_optimal,
        is_local_optimal,
        hops_to_end,
        chose_most_similar,
        chose_least_similar,
        chose_rarest,
    }
}

/// Word following the first occurrence of `word` in `path`
fn next_on_path<'p>(path: &'p [String], word: &str) -> Option<&'p str> {
    path.windows(2)
        .find(|pair| pair[0] == word)
        .map(|pair| pair[1].as_str())
}

/// (chosen is most similar, chosen is least similar) among `neighbors`
fn similarity_extremes(neighbors: &[(&str, f64)], chosen: Option<f64>) -> (bool, bool) {
    let Some(chosen) = chosen else {
        return (false, false);
    };

    let max = neighbors.iter().map(|&(_, s)| s).max_by(f64::total_cmp);
    let min = neighbors.iter().map(|&(_, s)| s).min_by(f64::total_cmp);

    (
        max.is_some_and(|max| chosen.total_cmp(&max).is_ge()),
        min.is_some_and(|min| chosen.total_cmp(&min).is_le()),
    )
}

/// Ties with the lowest count also count as rarest
fn is_rarest(table: &WordFrequencies, neighbors: &[(&str, f64)], chosen: &str) -> bool {
    if !neighbors.iter().any(|&(word, _)| word == chosen) {
        return false;
    }
    let Some(chosen_count) = table.get(chosen) else {
        return false;
    };
    table
        .rarest(neighbors.iter().map(|&(word, _)| word))
        .is_some_and(|(_, rarest_count)| chosen_count <= rarest_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::{extended_graph, sample_graph};
    use crate::pathfinding::{PathFinder, find_shortest_path};

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|&w| w.to_string()).collect()
    }

    fn classify(
        graph: &WordGraph,
        position: &str,
        chosen: &str,
        global: &[String],
        target: &str,
        frequencies: Option<&WordFrequencies>,
    ) -> OptimalChoice {
        let suggested = find_shortest_path(graph, position, target);
        let ctx = MoveContext {
            graph,
            position,
            chosen,
            global_path: global,
            suggested_path: &suggested,
            target,
            frequencies,
        };
        classify_move(&ctx, &PathFinder::hops(graph))
    }

    #[test]
    fn following_global_path_is_optimal() {
        let graph = sample_graph();
        let global = owned(&["A", "B", "D"]);
        let choice = classify(&graph, "A", "B", &global, "D", None);

        assert!(choice.is_global_optimal);
        assert!(choice.is_local_optimal);
        assert!(choice.on_global_path);
        assert_eq!(choice.optimal_choice.as_deref(), Some("B"));
        assert_eq!(choice.hops_to_end, Some(1));
        assert!(choice.is_optimal());
        assert!(!choice.is_missed());
    }

    #[test]
    fn deviating_from_global_path_is_missed() {
        let graph = sample_graph();
        let global = owned(&["A", "B", "D"]);
        let choice = classify(&graph, "A", "C", &global, "D", None);

        assert!(!choice.is_global_optimal);
        assert!(!choice.is_local_optimal);
        assert_eq!(choice.optimal_choice.as_deref(), Some("B"));
        assert_eq!(choice.hops_to_end, Some(1));
        assert!(choice.is_missed());
        assert_eq!(
            choice.missed_description().as_deref(),
            Some("At A, chose C instead of optimal B")
        );
    }

    #[test]
    fn off_global_path_uses_suggested_path() {
        let graph = sample_graph();
        let global = owned(&["A", "B", "D"]);
        // Player already deviated to C; global path is still the fixed reference
        let choice = classify(&graph, "C", "D", &global, "D", None);

        assert!(!choice.on_global_path);
        assert!(!choice.is_global_optimal);
        assert!(choice.is_local_optimal);
        assert_eq!(choice.optimal_choice.as_deref(), Some("D"));
        assert_eq!(choice.hops_to_end, Some(0));
        assert!(choice.is_optimal());
        assert!(!choice.is_missed());
        assert_eq!(choice.missed_description(), None);
    }

    #[test]
    fn global_judgement_ignores_later_recomputation() {
        // s -> a -> t is the global path; from s, b is an equally short alternative
        let graph = WordGraph::from_edges([
            ("s", "a", 0.5),
            ("s", "b", 0.5),
            ("a", "t", 0.5),
            ("b", "t", 0.5),
        ]);
        let global = owned(&["s", "a", "t"]);
        let choice = classify(&graph, "s", "b", &global, "t", None);

        assert!(!choice.is_global_optimal);
        assert!(!choice.is_local_optimal);
        assert_eq!(choice.hops_to_end, Some(1));
    }

    #[test]
    fn similarity_heuristics() {
        let graph = sample_graph();
        let global = owned(&["A", "B", "D"]);

        let most = classify(&graph, "A", "B", &global, "D", None);
        assert!(most.chose_most_similar);
        assert!(!most.chose_least_similar);

        let least = classify(&graph, "A", "C", &global, "D", None);
        assert!(!least.chose_most_similar);
        assert!(least.chose_least_similar);
    }

    #[test]
    fn single_neighbor_is_both_most_and_least_similar() {
        let graph = WordGraph::from_edges([("a", "b", 0.4), ("b", "c", 0.4)]);
        let global = owned(&["a", "b", "c"]);
        let choice = classify(&graph, "a", "b", &global, "c", None);
        assert!(choice.chose_most_similar);
        assert!(choice.chose_least_similar);
    }

    #[test]
    fn rarity_heuristic_with_table() {
        let graph = sample_graph();
        let global = owned(&["A", "B", "D"]);
        let table: WordFrequencies = [("B", 500), ("C", 20)].into_iter().collect();

        let rare = classify(&graph, "A", "C", &global, "D", Some(&table));
        assert!(rare.chose_rarest);

        let common = classify(&graph, "A", "B", &global, "D", Some(&table));
        assert!(!common.chose_rarest);
    }

    #[test]
    fn tied_rarest_neighbors_both_count_as_rarest() {
        let graph = sample_graph();
        let global = owned(&["A", "B", "D"]);
        let table: WordFrequencies = [("B", 20), ("C", 20)].into_iter().collect();

        assert!(classify(&graph, "A", "B", &global, "D", Some(&table)).chose_rarest);
        assert!(classify(&graph, "A", "C", &global, "D", Some(&table)).chose_rarest);

        // One more occurrence breaks the tie
        let table: WordFrequencies = [("B", 21), ("C", 20)].into_iter().collect();
        assert!(!classify(&graph, "A", "B", &global, "D", Some(&table)).chose_rarest);
    }

    #[test]
    fn rarity_heuristic_without_table_is_false() {
        let graph = sample_graph();
        let global = owned(&["A", "B", "D"]);
        let choice = classify(&graph, "A", "C", &global, "D", None);
        assert!(!choice.chose_rarest);
    }

    #[test]
    fn rarity_requires_chosen_in_table() {
        let graph = sample_graph();
        let global = owned(&["A", "B", "D"]);
        let table: WordFrequencies = [("B", 500)].into_iter().collect();
        let choice = classify(&graph, "A", "C", &global, "D", Some(&table));
        assert!(!choice.chose_rarest);
    }

    #[test]
    fn position_without_edges_yields_false_flags() {
        let graph = extended_graph();
        // A global path that (wrongly) claims E -> A still cannot make E global-optimal
        let global = owned(&["E", "A"]);
        let table: WordFrequencies = [("A", 1)].into_iter().collect();
        let choice = classify(&graph, "E", "A", &global, "A", Some(&table));

        assert!(!choice.is_global_optimal);
        assert!(!choice.on_global_path);
        assert!(!choice.chose_most_similar);
        assert!(!choice.chose_least_similar);
        assert!(!choice.chose_rarest);
    }

    #[test]
    fn unreachable_target_has_no_hops() {
        let graph = extended_graph();
        let global = owned(&["A", "B", "D"]);
        let choice = classify(&graph, "C", "F", &global, "D", None);
        assert_eq!(choice.hops_to_end, None);
    }

    #[test]
    fn empty_reference_paths_do_not_panic() {
        let graph = sample_graph();
        let ctx = MoveContext {
            graph: &graph,
            position: "A",
            chosen: "B",
            global_path: &[],
            suggested_path: &[],
            target: "D",
            frequencies: None,
        };
        let choice = classify_move(&ctx, &PathFinder::hops(&graph));
        assert!(!choice.is_global_optimal);
        assert!(!choice.is_local_optimal);
        assert_eq!(choice.optimal_choice, None);
        assert_eq!(choice.missed_description(), None);
    }

    #[test]
    fn next_on_path_at_end_is_none() {
        let path = owned(&["A", "B", "D"]);
        assert_eq!(next_on_path(&path, "A"), Some("B"));
        assert_eq!(next_on_path(&path, "D"), None);
        assert_eq!(next_on_path(&path, "Z"), None);
    }
}
