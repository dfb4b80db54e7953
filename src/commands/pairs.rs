//! Validate start/target pairs
//!
//! Checks a batch of candidate puzzles against the graph: is the target
//! reachable, how many moves does it take, and does that fit the configured
//! difficulty window. Pairs are independent, so they are checked in parallel
//! over the shared graph.

use crate::core::WordGraph;
use crate::loader::WordPair;
use crate::pathfinding::PathFinder;
use crate::semantic::path_distance;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

/// Acceptable optimal-path length for a puzzle, in moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairsConfig {
    pub min_hops: usize,
    pub max_hops: usize,
    /// Draw a progress bar on stderr while checking
    pub show_progress: bool,
}

impl Default for PairsConfig {
    fn default() -> Self {
        Self {
            min_hops: 3,
            max_hops: 6,
            show_progress: true,
        }
    }
}

impl PairsConfig {
    #[must_use]
    pub const fn accepts(&self, hops: usize) -> bool {
        hops >= self.min_hops && hops <= self.max_hops
    }
}

/// Outcome for a single pair
#[derive(Debug, Clone, PartialEq)]
pub struct PairCheck {
    pub pair: WordPair,
    /// Moves on the fewest-moves path; `None` if unreachable or unknown
    pub hops: Option<usize>,
    /// Moves on the least-drift path
    pub semantic_hops: Option<usize>,
    /// Semantic distance of the least-drift path
    pub semantic_distance: Option<f64>,
    pub within_window: bool,
}

/// Aggregate results of a pairs run
#[derive(Debug)]
pub struct PairStatistics {
    pub checks: Vec<PairCheck>,
    pub reachable: usize,
    pub within_window: usize,
    pub average_hops: f64,
    pub duration: Duration,
}

impl PairStatistics {
    /// Pairs that fall outside the window or are unreachable
    pub fn rejected(&self) -> impl Iterator<Item = &PairCheck> {
        self.checks.iter().filter(|c| !c.within_window)
    }
}

/// Progress bar on stderr, or a hidden one when `show` is false
pub(super) fn progress_bar(len: usize, show: bool, message: &'static str) -> ProgressBar {
    let pb = if show {
        let pb = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };
    pb.set_message(message);
    pb
}

/// Check one pair against the graph
#[must_use]
pub fn check_pair(graph: &WordGraph, pair: &WordPair, config: &PairsConfig) -> PairCheck {
    let hop_path = PathFinder::hops(graph).find_path(&pair.start, &pair.target);
    let semantic_path = PathFinder::semantic(graph).find_path(&pair.start, &pair.target);

    let hops = hop_path.map(|p| p.len() - 1);
    PairCheck {
        pair: pair.clone(),
        hops,
        semantic_hops: semantic_path.as_ref().map(|p| p.len() - 1),
        semantic_distance: semantic_path.as_ref().map(|p| path_distance(graph, p)),
        within_window: hops.is_some_and(|h| config.accepts(h)),
    }
}

/// Check every pair in parallel
#[must_use]
pub fn check_pairs(graph: &WordGraph, pairs: &[WordPair], config: &PairsConfig) -> PairStatistics {
    let pb = progress_bar(pairs.len(), config.show_progress, "checking pairs");

    let start = Instant::now();
    let checks: Vec<PairCheck> = pairs
        .par_iter()
        .map(|pair| {
            let check = check_pair(graph, pair, config);
            pb.inc(1);
            check
        })
        .collect();
    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let hop_counts: Vec<usize> = checks.iter().filter_map(|c| c.hops).collect();
    let reachable = hop_counts.len();
    let average_hops = if reachable > 0 {
        hop_counts.iter().sum::<usize>() as f64 / reachable as f64
    } else {
        0.0
    };
    let within_window = checks.iter().filter(|c| c.within_window).count();

    info!(
        pairs = checks.len(),
        reachable,
        within_window,
        elapsed_ms = duration.as_millis() as u64,
        "pairs checked"
    );

    PairStatistics {
        checks,
        reachable,
        within_window,
        average_hops,
        duration,
    }
}
