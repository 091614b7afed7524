//! Final outcome of a game.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One player owns more boxes.
    Winner(PlayerId),
    /// Both players own the same number of boxes.
    Draw,
}

impl GameResult {
    /// Decide the result from final scores.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<u32>) -> Self {
        let a = scores[PlayerId::A];
        let b = scores[PlayerId::B];
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::A),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::B),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(player) => write!(f, "{player} wins!"),
            GameResult::Draw => f.write_str("It's a tie!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_scores() {
        assert_eq!(
            GameResult::from_scores(&PlayerMap::from_array([3, 1])),
            GameResult::Winner(PlayerId::A)
        );
        assert_eq!(
            GameResult::from_scores(&PlayerMap::from_array([0, 4])),
            GameResult::Winner(PlayerId::B)
        );
        assert_eq!(GameResult::from_scores(&PlayerMap::from_array([2, 2])), GameResult::Draw);
    }

    #[test]
    fn test_is_winner() {
        let result = GameResult::Winner(PlayerId::B);
        assert!(!result.is_winner(PlayerId::A));
        assert!(result.is_winner(PlayerId::B));
        assert!(!GameResult::Draw.is_winner(PlayerId::A));
    }

    #[test]
    fn test_display() {
        assert_eq!(GameResult::Winner(PlayerId::A).to_string(), "Player A wins!");
        assert_eq!(GameResult::Draw.to_string(), "It's a tie!");
    }
}
