//! End-of-game report
//!
//! Folds the player's path and the per-move classifications into a single
//! immutable record. Generation is pure: the same inputs always produce the
//! same report, and data irregularities degrade to zero or empty values.

use super::classifier::OptimalChoice;
use super::context::{
    AiComparison, BacktrackEvent, DailyChallenge, PotentialRarestMove, SessionLog, SessionOptions,
};
use crate::core::WordGraph;
use crate::pathfinding::ShortestPath;
use crate::semantic::{average_similarity, path_distance};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// How the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Won,
    GivenUp,
}

impl GameStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Won => "won",
            Self::GivenUp => "given_up",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal summary of a finished game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameReport {
    pub status: GameStatus,
    pub target: String,
    pub player_path: Vec<String>,
    /// Fewest-moves path from the start word, fixed at game start
    pub optimal_path: Vec<String>,
    /// Fewest-moves path from the final position; empty when won
    pub suggested_path: Vec<String>,
    /// Least-semantic-drift path from the start word
    pub semantic_path: Vec<String>,
    pub optimal_choices: Vec<OptimalChoice>,
    pub total_moves: usize,
    pub optimal_moves_made: usize,
    /// Percentage of moves that were optimal, 0 when no moves were made
    pub move_accuracy: f64,
    pub player_semantic_distance: f64,
    pub optimal_semantic_distance: f64,
    pub semantic_path_distance: f64,
    /// `None` when the player path has no hops
    pub average_similarity: Option<f64>,
    /// Optimal moves divided by player moves, 0 when no moves were made
    pub path_efficiency: f64,
    pub missed_optimal_moves: Vec<String>,
    pub backtracks_used: usize,
    pub backtrack_events: Vec<BacktrackEvent>,
    pub potential_rarest_moves: Vec<PotentialRarestMove>,
    pub daily_challenge: Option<DailyChallenge>,
    pub ai_comparison: Option<AiComparison>,
    pub is_challenge: bool,
}

impl GameReport {
    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.status, GameStatus::Won)
    }

    /// First word of the player path, if any
    #[must_use]
    pub fn start(&self) -> Option<&str> {
        self.player_path.first().map(String::as_str)
    }
}

/// Everything the report is built from
#[derive(Debug, Clone, Copy)]
pub struct ReportInputs<'a> {
    pub graph: &'a WordGraph,
    pub player_path: &'a [String],
    /// Fewest-moves path from the start word, computed at game start
    pub optimal_path: &'a [String],
    pub optimal_choices: &'a [OptimalChoice],
    pub target: &'a str,
    pub log: &'a SessionLog,
    pub options: &'a SessionOptions,
}

/// Build the report for a finished game
///
/// `hop_finder` recomputes the suggested path after giving up;
/// `distance_finder` computes the least-drift reference path.
pub fn generate_report<H, D>(
    inputs: &ReportInputs<'_>,
    hop_finder: &H,
    distance_finder: &D,
) -> GameReport
where
    H: ShortestPath + ?Sized,
    D: ShortestPath + ?Sized,
{
    let ReportInputs {
        graph,
        player_path,
        optimal_path,
        optimal_choices,
        target,
        log,
        options,
    } = *inputs;

    let start = player_path.first().map(String::as_str);
    let last = player_path.last().map(String::as_str);

    let status = if last == Some(target) {
        GameStatus::Won
    } else {
        GameStatus::GivenUp
    };

    let total_moves = player_path.len().saturating_sub(1);
    let optimal_moves_made = optimal_choices
        .iter()
        .filter(|choice| choice.is_optimal())
        .count();
    let move_accuracy = percentage(optimal_moves_made, total_moves);

    let optimal_moves = optimal_path.len().saturating_sub(1);
    let path_efficiency = ratio(optimal_moves, total_moves);

    let missed_optimal_moves = optimal_choices
        .iter()
        .filter_map(OptimalChoice::missed_description)
        .collect();

    let suggested_path = match (status, last) {
        (GameStatus::GivenUp, Some(last)) => hop_finder.shortest_path(last, target),
        _ => Vec::new(),
    };

    let semantic_path = start
        .map(|start| distance_finder.shortest_path(start, target))
        .unwrap_or_default();

    info!(
        %status,
        total_moves,
        optimal_moves_made,
        "game report generated"
    );

    GameReport {
        status,
        target: target.to_owned(),
        player_path: player_path.to_vec(),
        optimal_path: optimal_path.to_vec(),
        suggested_path,
        player_semantic_distance: path_distance(graph, player_path),
        optimal_semantic_distance: path_distance(graph, optimal_path),
        semantic_path_distance: path_distance(graph, &semantic_path),
        semantic_path,
        optimal_choices: optimal_choices.to_vec(),
        total_moves,
        optimal_moves_made,
        move_accuracy,
        average_similarity: average_similarity(graph, player_path),
        path_efficiency,
        missed_optimal_moves,
        backtracks_used: log.backtrack_events.len(),
        backtrack_events: log.backtrack_events.clone(),
        potential_rarest_moves: log.potential_rarest_moves.clone(),
        daily_challenge: options.daily_challenge.clone(),
        ai_comparison: options.ai_comparison.clone(),
        is_challenge: options.is_challenge,
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn percentage(numerator: usize, denominator: usize) -> f64 {
    ratio(numerator, denominator) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::classifier::{MoveContext, classify_move};
    use crate::core::fixtures::sample_graph;
    use crate::pathfinding::{PathFinder, find_shortest_path};

    const EPS: f64 = 1e-9;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|&w| w.to_string()).collect()
    }

    /// Classify every move of `player_path` the way a live session would
    fn choices_for(
        graph: &WordGraph,
        player_path: &[String],
        global: &[String],
        target: &str,
    ) -> Vec<OptimalChoice> {
        let hops = PathFinder::hops(graph);
        player_path
            .windows(2)
            .map(|pair| {
                let suggested = find_shortest_path(graph, &pair[0], target);
                let ctx = MoveContext {
                    graph,
                    position: &pair[0],
                    chosen: &pair[1],
                    global_path: global,
                    suggested_path: &suggested,
                    target,
                    frequencies: None,
                };
                classify_move(&ctx, &hops)
            })
            .collect()
    }

    fn report_for(graph: &WordGraph, player: &[&str], target: &str) -> GameReport {
        let player_path = owned(player);
        let global = player
            .first()
            .map(|start| find_shortest_path(graph, start, target))
            .unwrap_or_default();
        let choices = choices_for(graph, &player_path, &global, target);
        let log = SessionLog::default();
        let options = SessionOptions::default();
        let inputs = ReportInputs {
            graph,
            player_path: &player_path,
            optimal_path: &global,
            optimal_choices: &choices,
            target,
            log: &log,
            options: &options,
        };
        generate_report(
            &inputs,
            &PathFinder::hops(graph),
            &PathFinder::semantic(graph),
        )
    }

    #[test]
    fn perfect_game() {
        let graph = sample_graph();
        let report = report_for(&graph, &["A", "B", "D"], "D");

        assert_eq!(report.status, GameStatus::Won);
        assert!(report.is_won());
        assert_eq!(report.total_moves, 2);
        assert_eq!(report.optimal_moves_made, 2);
        assert!((report.move_accuracy - 100.0).abs() < EPS);
        assert!((report.path_efficiency - 1.0).abs() < EPS);
        assert!((report.player_semantic_distance - 0.3).abs() < EPS);
        assert!((report.optimal_semantic_distance - 0.3).abs() < EPS);
        assert!((report.average_similarity.unwrap() - 0.85).abs() < EPS);
        assert!(report.missed_optimal_moves.is_empty());
        assert!(report.suggested_path.is_empty());
        assert_eq!(report.semantic_path, owned(&["A", "B", "D"]));
    }

    #[test]
    fn given_up_after_deviation() {
        let graph = sample_graph();
        let report = report_for(&graph, &["A", "C"], "D");

        assert_eq!(report.status, GameStatus::GivenUp);
        assert_eq!(report.optimal_path, owned(&["A", "B", "D"]));
        assert_eq!(
            report.missed_optimal_moves,
            vec!["At A, chose C instead of optimal B".to_string()]
        );
        assert_eq!(report.suggested_path, owned(&["C", "D"]));
        assert_eq!(report.total_moves, 1);
        assert_eq!(report.optimal_moves_made, 0);
        assert!(report.move_accuracy.abs() < EPS);
        assert!((report.path_efficiency - 2.0).abs() < EPS);
    }

    #[test]
    fn detour_then_recovery_counts_local_optimal_moves() {
        let graph = sample_graph();
        let report = report_for(&graph, &["A", "C", "D"], "D");

        assert!(report.is_won());
        assert_eq!(report.total_moves, 2);
        // A -> C misses the global path, C -> D follows the suggested path
        assert_eq!(report.optimal_moves_made, 1);
        assert!((report.move_accuracy - 50.0).abs() < EPS);
        assert!((report.path_efficiency - 1.0).abs() < EPS);
        assert_eq!(report.missed_optimal_moves.len(), 1);
        assert!((report.player_semantic_distance - 1.2).abs() < EPS);
    }

    #[test]
    fn longer_path_lowers_efficiency() {
        let graph = sample_graph();
        let report = report_for(&graph, &["A", "C", "A", "B", "D"], "D");
        assert_eq!(report.total_moves, 4);
        assert!((report.path_efficiency - 0.5).abs() < EPS);
    }

    #[test]
    fn status_won_iff_last_word_is_target() {
        let graph = sample_graph();
        assert!(report_for(&graph, &["A", "B", "D"], "D").is_won());
        assert!(!report_for(&graph, &["A", "B"], "D").is_won());
        assert!(!report_for(&graph, &["D", "B"], "D").is_won());
        // Starting on the target is already a win
        assert!(report_for(&graph, &["D"], "D").is_won());
    }

    #[test]
    fn single_word_path_has_zero_metrics() {
        let graph = sample_graph();
        let report = report_for(&graph, &["A"], "D");

        assert_eq!(report.status, GameStatus::GivenUp);
        assert_eq!(report.total_moves, 0);
        assert!(report.move_accuracy.abs() < f64::EPSILON);
        assert!(report.path_efficiency.abs() < f64::EPSILON);
        assert!(report.player_semantic_distance.abs() < f64::EPSILON);
        assert_eq!(report.average_similarity, None);
        assert_eq!(report.suggested_path, owned(&["A", "B", "D"]));
    }

    #[test]
    fn empty_path_degrades_gracefully() {
        let graph = sample_graph();
        let report = report_for(&graph, &[], "D");

        assert_eq!(report.status, GameStatus::GivenUp);
        assert_eq!(report.total_moves, 0);
        assert_eq!(report.optimal_moves_made, 0);
        assert!(report.move_accuracy.abs() < f64::EPSILON);
        assert!(report.path_efficiency.abs() < f64::EPSILON);
        assert!(report.optimal_semantic_distance.abs() < f64::EPSILON);
        assert_eq!(report.average_similarity, None);
        assert!(report.suggested_path.is_empty());
        assert!(report.semantic_path.is_empty());
        assert_eq!(report.start(), None);
    }

    #[test]
    fn passthrough_fields_are_copied() {
        let graph = sample_graph();
        let player_path = owned(&["A", "B", "D"]);
        let global = owned(&["A", "B", "D"]);
        let log = SessionLog {
            backtrack_events: vec![BacktrackEvent {
                jumped_from: "C".into(),
                landed_on: "A".into(),
            }],
            potential_rarest_moves: vec![PotentialRarestMove {
                position: "A".into(),
                rarest: "C".into(),
                chosen: "B".into(),
            }],
        };
        let options = SessionOptions {
            daily_challenge: Some(DailyChallenge {
                id: "daily-42".into(),
                date: None,
            }),
            ai_comparison: Some(AiComparison {
                model: "baseline".into(),
                path: owned(&["A", "C", "D"]),
            }),
            is_challenge: true,
        };
        let inputs = ReportInputs {
            graph: &graph,
            player_path: &player_path,
            optimal_path: &global,
            optimal_choices: &[],
            target: "D",
            log: &log,
            options: &options,
        };
        let report = generate_report(
            &inputs,
            &PathFinder::hops(&graph),
            &PathFinder::semantic(&graph),
        );

        assert_eq!(report.backtracks_used, 1);
        assert_eq!(report.backtrack_events, log.backtrack_events);
        assert_eq!(report.potential_rarest_moves, log.potential_rarest_moves);
        assert_eq!(report.daily_challenge, options.daily_challenge);
        assert_eq!(report.ai_comparison, options.ai_comparison);
        assert!(report.is_challenge);
    }

    #[test]
    fn generation_is_idempotent() {
        let graph = sample_graph();
        let first = serde_json::to_vec(&report_for(&graph, &["A", "C"], "D")).unwrap();
        let second = serde_json::to_vec(&report_for(&graph, &["A", "C"], "D")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn status_serializes_in_snake_case() {
        assert_eq!(
            serde_json::to_string(&GameStatus::GivenUp).unwrap(),
            "\"given_up\""
        );
        assert_eq!(GameStatus::Won.to_string(), "won");
    }
}
