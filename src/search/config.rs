//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// How the searcher models whose turn follows a simulated move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnModel {
    /// Strict alternation every ply, even after a box is completed.
    ///
    /// The search then evaluates a slightly different game than the one
    /// the turn controller plays.
    #[default]
    Alternating,

    /// Alternate mode: a simulated move that completes a box keeps the
    /// same player to move, matching the real extra-turn rule.
    ExtraTurn,
}

/// Minimax search configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Approximate number of leaf positions per search.
    /// Depth is the largest `d` with `open_moves^d <= node_budget`.
    pub node_budget: u64,

    /// Turn order inside the search tree.
    pub turn_model: TurnModel,

    /// Seed for the fallback RNG.
    pub seed: u64,
}

impl SearchConfig {
    /// Reference node budget.
    pub const DEFAULT_NODE_BUDGET: u64 = 19_000;

    /// Create a new config with a custom node budget.
    pub fn with_node_budget(mut self, budget: u64) -> Self {
        self.node_budget = budget;
        self
    }

    /// Create a new config with a custom turn model.
    pub fn with_turn_model(mut self, model: TurnModel) -> Self {
        self.turn_model = model;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            node_budget: Self::DEFAULT_NODE_BUDGET,
            turn_model: TurnModel::Alternating,
            seed: 42,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.node_budget, 19_000);
        assert_eq!(config.turn_model, TurnModel::Alternating);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_node_budget(500)
            .with_turn_model(TurnModel::ExtraTurn)
            .with_seed(7);

        assert_eq!(config.node_budget, 500);
        assert_eq!(config.turn_model, TurnModel::ExtraTurn);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_turn_model(TurnModel::ExtraTurn);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
