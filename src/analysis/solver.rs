//! Heuristic player simulation
//!
//! A greedy walker that plays a puzzle the way a person might: at each word
//! it scores the neighbors by how close they are to the target and how well
//! connected they are, and sometimes picks one of the runners-up instead of
//! the best. Solutions at or within one move of optimal are retried with
//! more randomness, so the result reads like a plausible human game rather
//! than the shortest path.

use super::context::AiComparison;
use crate::core::WordGraph;
use crate::pathfinding::{HopCost, PathFinder};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Model name reported in an [`AiComparison`]
pub const SOLVER_MODEL: &str = "heuristic_solver";

/// Share of words, by neighbor count, that count as hubs
const HUB_FRACTION: f64 = 0.1;
const HUB_BONUS: f64 = 50.0;
const REVISIT_PENALTY: f64 = 200.0;
const DEGREE_WEIGHT: f64 = 2.0;
const TARGET_SIMILARITY_WEIGHT: f64 = 100.0;
/// Numerator of the closeness term, `CLOSENESS / (hops + 1)`
const CLOSENESS: f64 = 1000.0;

/// Random picks draw from this many of the best-scored neighbors
const TOP_CHOICES: usize = 5;
const BASE_RANDOMNESS: f64 = 0.15;
const RANDOMNESS_STEP: f64 = 0.05;
const MAX_RANDOMNESS: f64 = 0.9;
/// Chance of passing up the target when taking it would be optimal
const DETOUR_AT_OPTIMAL: f64 = 0.9;
/// Chance of passing up the target one move short of optimal
const DETOUR_NEAR_OPTIMAL: f64 = 0.7;

/// Cycle detection starts once the path is longer than this
const CYCLE_CHECK_AFTER: usize = 10;
const CYCLE_WINDOW: usize = 5;

/// Limits for one solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Moves per attempt before giving up
    pub max_steps: usize,
    /// Attempts before accepting whatever was found
    pub max_retries: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_steps: 30,
            max_retries: 50,
        }
    }
}

/// How a solve ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    Solved,
    /// Start or target is not in the graph
    UnknownWord,
    /// No path exists, so no attempt was made
    Unreachable,
    /// The walk reached a word with nowhere left to go
    DeadEnd,
    /// The walk used up its moves
    OutOfSteps,
}

impl SolveStatus {
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved)
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Solved => "solved",
            Self::UnknownWord => "word not in graph",
            Self::Unreachable => "target unreachable",
            Self::DeadEnd => "stuck at a dead end",
            Self::OutOfSteps => "ran out of moves",
        }
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Result of solving one puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveOutcome {
    pub start: String,
    pub target: String,
    /// Words visited, starting with `start`
    pub path: Vec<String>,
    pub status: SolveStatus,
    /// Moves on the fewest-moves path, `None` if there is none
    pub optimal_length: Option<usize>,
    /// Attempts used, zero when no walk was needed
    pub attempts: usize,
}

impl SolveOutcome {
    #[inline]
    #[must_use]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Moves taken per optimal move, for solved non-trivial puzzles
    #[must_use]
    pub fn efficiency(&self) -> Option<f64> {
        let optimal = self.optimal_length.filter(|&n| n > 0)?;
        self.status
            .is_solved()
            .then(|| self.steps() as f64 / optimal as f64)
    }

    /// The solver's path as a comparison entry for a game report
    #[must_use]
    pub fn ai_comparison(&self) -> AiComparison {
        AiComparison {
            model: SOLVER_MODEL.to_string(),
            path: self.path.clone(),
        }
    }
}

/// Remaining-hops cache for one target
type HopMemo<'g> = FxHashMap<&'g str, Option<usize>>;

/// Rule-based solver over a shared graph
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use word_path::analysis::HeuristicSolver;
/// use word_path::core::WordGraph;
///
/// let graph = WordGraph::from_edges([("a", "b", 0.9), ("b", "c", 0.9)]);
/// let outcome = HeuristicSolver::new(&graph).solve("a", "c", &mut StdRng::seed_from_u64(1));
/// assert!(outcome.status.is_solved());
/// assert_eq!(outcome.path, vec!["a", "b", "c"]);
/// ```
pub struct HeuristicSolver<'g> {
    graph: &'g WordGraph,
    finder: PathFinder<'g, HopCost>,
    hubs: FxHashSet<&'g str>,
    config: SolverConfig,
}

impl<'g> HeuristicSolver<'g> {
    #[must_use]
    pub fn new(graph: &'g WordGraph) -> Self {
        Self {
            graph,
            finder: PathFinder::hops(graph),
            hubs: hub_words(graph),
            config: SolverConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Whether `word` is among the best-connected words
    #[must_use]
    pub fn is_hub(&self, word: &str) -> bool {
        self.hubs.contains(word)
    }

    /// Score a candidate next word; higher is better, the target scores infinity
    #[must_use]
    pub fn score(&self, word: &'g str, target: &str, path: &[String]) -> f64 {
        self.score_with(word, target, path, &mut HopMemo::default())
    }

    fn score_with(
        &self,
        word: &'g str,
        target: &str,
        path: &[String],
        memo: &mut HopMemo<'g>,
    ) -> f64 {
        if word == target {
            return f64::INFINITY;
        }

        let mut score = 0.0;
        let hops = *memo.entry(word).or_insert_with(|| {
            self.finder
                .find_path(word, target)
                .map(|p| p.len() - 1)
        });
        if let Some(hops) = hops {
            score += CLOSENESS / (hops as f64 + 1.0);
        }
        if self.hubs.contains(word) {
            score += HUB_BONUS;
        }
        if path.iter().any(|w| w == word) {
            score -= REVISIT_PENALTY;
        }
        score += self.graph.degree(word) as f64 * DEGREE_WEIGHT;
        if let Some(similarity) = self.graph.similarity(word, target) {
            score += similarity * TARGET_SIMILARITY_WEIGHT;
        }
        score
    }

    /// Play `start` to `target`, retrying near-optimal solutions
    ///
    /// Each retry raises the chance of a random pick and tends to pass up
    /// the target when taking it would finish at or near optimal. A
    /// solution more than one move longer than optimal is returned at once.
    /// Otherwise the final attempt is returned if it solved the puzzle, then
    /// the latest solved attempt, then the final failed one.
    pub fn solve<R: Rng + ?Sized>(&self, start: &str, target: &str, rng: &mut R) -> SolveOutcome {
        let outcome = |path: Vec<String>, status, optimal_length, attempts| SolveOutcome {
            start: start.to_string(),
            target: target.to_string(),
            path,
            status,
            optimal_length,
            attempts,
        };

        let (Some(start_id), Some(target_id)) = (self.graph.id(start), self.graph.id(target))
        else {
            return outcome(vec![start.to_string()], SolveStatus::UnknownWord, None, 0);
        };
        let (start, target) = (self.graph.word(start_id), self.graph.word(target_id));
        if start == target {
            return outcome(vec![start.to_string()], SolveStatus::Solved, Some(0), 0);
        }
        let Some(optimal) = self.finder.find_path(start, target).map(|p| p.len() - 1) else {
            return outcome(vec![start.to_string()], SolveStatus::Unreachable, None, 0);
        };

        let retries = self.config.max_retries.max(1);
        let mut memo = HopMemo::default();
        let mut fallback = None;
        let mut last = (vec![start.to_string()], SolveStatus::OutOfSteps);
        for attempt in 0..retries {
            let randomness =
                (BASE_RANDOMNESS + RANDOMNESS_STEP * attempt as f64).min(MAX_RANDOMNESS);
            let walk = Walk {
                start,
                target,
                optimal,
                randomness,
                avoid_optimal: attempt > 0,
            };
            let (path, status) = self.attempt(&walk, &mut memo, rng);

            if status.is_solved() {
                let steps = path.len() - 1;
                if steps > optimal + 1 || attempt + 1 == retries {
                    debug!(start, target, steps, optimal, attempt, "solved");
                    return outcome(path, status, Some(optimal), attempt + 1);
                }
                debug!(steps, optimal, attempt, "solution too close to optimal, retrying");
                fallback = Some(path);
            } else {
                last = (path, status);
            }
        }

        match fallback {
            Some(path) => outcome(path, SolveStatus::Solved, Some(optimal), retries),
            None => outcome(last.0, last.1, Some(optimal), retries),
        }
    }

    fn attempt<R: Rng + ?Sized>(
        &self,
        walk: &Walk<'g>,
        memo: &mut HopMemo<'g>,
        rng: &mut R,
    ) -> (Vec<String>, SolveStatus) {
        let target = walk.target;
        let mut path = vec![walk.start.to_string()];
        let mut current = walk.start;
        let mut steps = 0;

        while steps < self.config.max_steps && current != target {
            let mut neighbors: Vec<(&'g str, f64)> = self.graph.neighbors(current).collect();
            neighbors.sort_by(|a, b| b.1.total_cmp(&a.1));

            if neighbors.iter().any(|&(w, _)| w == target) {
                if rng.random_bool(walk.detour_chance(path.len())) {
                    debug!(at = current, "passing up the target");
                    neighbors.retain(|&(w, _)| w != target);
                } else {
                    path.push(target.to_string());
                    return (path, SolveStatus::Solved);
                }
            }
            if neighbors.is_empty() {
                return (path, SolveStatus::DeadEnd);
            }

            let mut scored: Vec<(f64, &'g str)> = neighbors
                .iter()
                .map(|&(w, _)| (self.score_with(w, target, &path, memo), w))
                .collect();
            scored.sort_by(|a, b| b.0.total_cmp(&a.0));

            let best = scored[0].1;
            let next = if scored.len() > 1 && rng.random_bool(walk.randomness) {
                let top = &scored[..scored.len().min(TOP_CHOICES)];
                top.choose(rng).map_or(best, |&(_, w)| w)
            } else {
                best
            };
            path.push(next.to_string());
            current = next;
            steps += 1;

            if path.len() > CYCLE_CHECK_AFTER && is_cycling(&path) {
                let recent = &path[path.len().saturating_sub(3)..];
                let hubs: Vec<&'g str> = self
                    .graph
                    .neighbors(current)
                    .map(|(w, _)| w)
                    .filter(|w| self.hubs.contains(w) && !recent.iter().any(|r| r == w))
                    .collect();
                if let Some(&hub) = hubs.choose(rng) {
                    debug!(from = current, to = hub, "breaking a cycle through a hub");
                    path.push(hub.to_string());
                    current = hub;
                    steps += 1;
                }
            }
        }

        let status = if current == target {
            SolveStatus::Solved
        } else {
            SolveStatus::OutOfSteps
        };
        (path, status)
    }
}

/// Parameters of a single attempt
struct Walk<'g> {
    start: &'g str,
    target: &'g str,
    optimal: usize,
    randomness: f64,
    avoid_optimal: bool,
}

impl Walk<'_> {
    /// Chance of skipping an adjacent target with `visited` words on the path
    fn detour_chance(&self, visited: usize) -> f64 {
        if !self.avoid_optimal {
            0.0
        } else if visited == self.optimal {
            DETOUR_AT_OPTIMAL
        } else if visited + 1 >= self.optimal {
            DETOUR_NEAR_OPTIMAL
        } else {
            0.0
        }
    }
}

/// Top tenth of words by neighbor count, at least one; ties go to the
/// lexicographically first word
fn hub_words(graph: &WordGraph) -> FxHashSet<&str> {
    if graph.is_empty() {
        return FxHashSet::default();
    }
    let mut by_degree: Vec<&str> = graph.words().collect();
    by_degree.sort_by_key(|w| std::cmp::Reverse(graph.degree(w)));
    let count = ((graph.len() as f64 * HUB_FRACTION) as usize).max(1);
    by_degree.into_iter().take(count).collect()
}

/// The last few words bounce between at most two words
fn is_cycling(path: &[String]) -> bool {
    let recent = &path[path.len().saturating_sub(CYCLE_WINDOW)..];
    let distinct: FxHashSet<&str> = recent.iter().map(String::as_str).collect();
    distinct.len() <= 2
}
