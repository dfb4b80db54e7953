//! Edge cost models
//!
//! Defines the `EdgeCost` trait and the two cost models the game uses.

use crate::core::Edge;
use std::fmt;

/// Cost of traversing a single edge
///
/// Implementations must return a finite, non-negative cost.
pub trait EdgeCost {
    fn cost(&self, edge: &Edge) -> f64;
}

/// Every hop costs 1 ("fewest moves")
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HopCost;

impl EdgeCost for HopCost {
    #[inline]
    fn cost(&self, _edge: &Edge) -> f64 {
        1.0
    }
}

/// Each hop costs its semantic distance, `1 - similarity` ("least semantic drift")
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SemanticCost;

impl EdgeCost for SemanticCost {
    #[inline]
    fn cost(&self, edge: &Edge) -> f64 {
        1.0 - edge.similarity()
    }
}

/// Enum wrapper for all cost models
///
/// Allows runtime selection of the cost model while keeping static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostModel {
    Hops(HopCost),
    Semantic(SemanticCost),
}

impl EdgeCost for CostModel {
    #[inline]
    fn cost(&self, edge: &Edge) -> f64 {
        match self {
            Self::Hops(c) => c.cost(edge),
            Self::Semantic(c) => c.cost(edge),
        }
    }
}

impl CostModel {
    /// Create a cost model from its name
    ///
    /// Supported names: "hops", "moves", "semantic", "distance".
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hops" | "moves" => Some(Self::Hops(HopCost)),
            "semantic" | "distance" => Some(Self::Semantic(SemanticCost)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hops(_) => "hops",
            Self::Semantic(_) => "semantic",
        }
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::Hops(HopCost)
    }
}

impl fmt::Display for CostModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
