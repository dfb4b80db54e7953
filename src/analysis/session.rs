//! Live game session
//!
//! Holds the state of one game in progress and drives the per-move cadence:
//! every move recomputes the suggested path from the current position and
//! classifies the choice. The graph and frequency table are borrowed, never
//! owned, so many sessions can share one snapshot.

use super::classifier::{MoveContext, OptimalChoice, classify_move};
use super::context::{BacktrackEvent, PotentialRarestMove, SessionLog, SessionOptions};
use super::report::{GameReport, ReportInputs, generate_report};
use crate::core::{WordFrequencies, WordGraph};
use crate::pathfinding::{PathFinder, ShortestPath};
use thiserror::Error;
use tracing::{debug, info};

/// Player actions the session refuses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("word '{0}' is not in the graph")]
    UnknownWord(String),
    #[error("'{to}' is not a neighbor of '{from}'")]
    NotANeighbor { from: String, to: String },
    #[error("'{0}' is not an earlier word on the current path")]
    NotOnPath(String),
    #[error("the target has already been reached")]
    AlreadyWon,
}

/// One game from a start word to a target word
#[derive(Debug, Clone)]
pub struct GameSession<'g> {
    graph: &'g WordGraph,
    frequencies: Option<&'g WordFrequencies>,
    target: String,
    optimal_path: Vec<String>,
    path: Vec<String>,
    choices: Vec<OptimalChoice>,
    log: SessionLog,
    options: SessionOptions,
}

impl<'g> GameSession<'g> {
    /// Start a game; the global-optimal path is computed here, once
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownWord` if `start` or `target` is not in the graph.
    pub fn new(
        graph: &'g WordGraph,
        start: &str,
        target: &str,
        options: SessionOptions,
    ) -> Result<Self, SessionError> {
        for word in [start, target] {
            if !graph.contains(word) {
                return Err(SessionError::UnknownWord(word.to_owned()));
            }
        }

        let optimal_path = PathFinder::hops(graph).shortest_path(start, target);
        info!(
            start,
            target,
            optimal_moves = optimal_path.len().saturating_sub(1),
            "game started"
        );

        Ok(Self {
            graph,
            frequencies: None,
            target: target.to_owned(),
            optimal_path,
            path: vec![start.to_owned()],
            choices: Vec::new(),
            log: SessionLog::default(),
            options,
        })
    }

    /// Use a frequency table for the rarity heuristic
    #[must_use]
    pub const fn with_frequencies(mut self, frequencies: &'g WordFrequencies) -> Self {
        self.frequencies = Some(frequencies);
        self
    }

    #[must_use]
    pub fn current(&self) -> &str {
        // The path always holds at least the start word
        self.path.last().map_or("", String::as_str)
    }

    #[must_use]
    pub fn start(&self) -> &str {
        self.path.first().map_or("", String::as_str)
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Fewest-moves path computed at game start (empty if unreachable)
    #[must_use]
    pub fn optimal_path(&self) -> &[String] {
        &self.optimal_path
    }

    #[must_use]
    pub fn choices(&self) -> &[OptimalChoice] {
        &self.choices
    }

    #[must_use]
    pub const fn log(&self) -> &SessionLog {
        &self.log
    }

    #[must_use]
    pub fn moves(&self) -> usize {
        self.path.len() - 1
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.current() == self.target
    }

    /// Neighbors of the current position, most similar first
    #[must_use]
    pub fn neighbors(&self) -> Vec<(&'g str, f64)> {
        let mut neighbors: Vec<(&'g str, f64)> = self.graph.neighbors(self.current()).collect();
        neighbors.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        neighbors
    }

    /// Next word on the fewest-moves path from the current position
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        PathFinder::hops(self.graph)
            .shortest_path(self.current(), &self.target)
            .into_iter()
            .nth(1)
    }

    /// Move to a neighbor of the current position
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already won, the word is unknown, or
    /// the word is not a neighbor of the current position.
    pub fn make_move(&mut self, word: &str) -> Result<&OptimalChoice, SessionError> {
        if self.is_won() {
            return Err(SessionError::AlreadyWon);
        }
        if !self.graph.contains(word) {
            return Err(SessionError::UnknownWord(word.to_owned()));
        }
        let position = self.current().to_owned();
        if self.graph.similarity(&position, word).is_none() {
            return Err(SessionError::NotANeighbor {
                from: position,
                to: word.to_owned(),
            });
        }

        let hops = PathFinder::hops(self.graph);
        let suggested = hops.shortest_path(&position, &self.target);
        let ctx = MoveContext {
            graph: self.graph,
            position: &position,
            chosen: word,
            global_path: &self.optimal_path,
            suggested_path: &suggested,
            target: &self.target,
            frequencies: self.frequencies,
        };
        let choice = classify_move(&ctx, &hops);

        let rarest = self
            .frequencies
            .and_then(|table| table.rarest(self.graph.neighbors(&position).map(|(w, _)| w)));
        if let Some((rarest, _)) = rarest {
            self.log.potential_rarest_moves.push(PotentialRarestMove {
                position: position.clone(),
                rarest: rarest.to_owned(),
                chosen: word.to_owned(),
            });
        }

        debug!(from = %position, to = word, move_number = self.path.len(), "move made");
        self.path.push(word.to_owned());
        self.choices.push(choice);
        Ok(&self.choices[self.choices.len() - 1])
    }

    /// Jump back to an earlier word on the path
    ///
    /// Moves after that word are discarded along with their classifications.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already won or `word` is not an
    /// earlier word on the current path.
    pub fn backtrack(&mut self, word: &str) -> Result<(), SessionError> {
        if self.is_won() {
            return Err(SessionError::AlreadyWon);
        }
        let earlier = &self.path[..self.path.len() - 1];
        let Some(index) = earlier.iter().rposition(|w| w == word) else {
            return Err(SessionError::NotOnPath(word.to_owned()));
        };

        let jumped_from = self.current().to_owned();
        self.path.truncate(index + 1);
        self.choices.truncate(index);
        self.log.backtrack_events.push(BacktrackEvent {
            jumped_from,
            landed_on: word.to_owned(),
        });

        debug!(to = word, "backtracked");
        Ok(())
    }

    /// Produce the end-of-game report (won or given up)
    #[must_use]
    pub fn finish(&self) -> GameReport {
        let inputs = ReportInputs {
            graph: self.graph,
            player_path: &self.path,
            optimal_path: &self.optimal_path,
            optimal_choices: &self.choices,
            target: &self.target,
            log: &self.log,
            options: &self.options,
        };
        generate_report(
            &inputs,
            &PathFinder::hops(self.graph),
            &PathFinder::semantic(self.graph),
        )
    }
}
