//! Session records carried into the game report
//!
//! The engine does not interpret these beyond counting them; they are
//! recorded during play and handed to whoever consumes the report.

use serde::{Deserialize, Serialize};

/// The player jumped back from `jumped_from` to an earlier word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacktrackEvent {
    pub jumped_from: String,
    pub landed_on: String,
}

/// At `position`, `rarest` was the least frequent neighbor; the player chose `chosen`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotentialRarestMove {
    pub position: String,
    pub rarest: String,
    pub chosen: String,
}

/// Identity of a daily challenge puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyChallenge {
    pub id: String,
    /// Calendar date supplied by the caller, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// A path produced by an AI model for the same puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiComparison {
    pub model: String,
    pub path: Vec<String>,
}

/// Per-game flags that pass straight through to the report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOptions {
    #[serde(default)]
    pub daily_challenge: Option<DailyChallenge>,
    #[serde(default)]
    pub ai_comparison: Option<AiComparison>,
    #[serde(default)]
    pub is_challenge: bool,
}

/// Event logs accumulated while playing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLog {
    #[serde(default)]
    pub backtrack_events: Vec<BacktrackEvent>,
    #[serde(default)]
    pub potential_rarest_moves: Vec<PotentialRarestMove>,
}
