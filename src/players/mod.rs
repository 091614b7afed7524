//! Move selection for the two kinds of participant.
//!
//! A [`Player`] is a closed sum type: either an interactive participant
//! whose moves come from a [`MoveSource`] (console, script, UI), or the
//! automated participant driven by [`MinimaxSearch`]. Both only *select*
//! an edge; the turn controller applies it.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::board::{BoardState, Edge};
use crate::core::{MoveError, PlayerId};
use crate::search::{MinimaxSearch, SearchConfig, SearchStats};

/// Supplier of moves for an interactive player.
///
/// Implementations may block (e.g. waiting on a terminal). They are told
/// about rejected moves and are then asked again by the caller.
pub trait MoveSource {
    /// Ask for the next edge for `player`.
    ///
    /// Returns `None` when no more input will arrive.
    fn next_move(&mut self, board: &BoardState, player: PlayerId) -> Option<Edge>;

    /// The last edge from this source was rejected.
    fn rejected(&mut self, _player: PlayerId, _error: &MoveError) {}
}

/// Which kind of participant fills a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Moves come from a [`MoveSource`].
    Human,
    /// Moves come from [`MinimaxSearch`].
    Minimax,
}

/// A participant in the game.
pub enum Player {
    Interactive(Box<dyn MoveSource>),
    Minimax(MinimaxSearch),
}

impl Player {
    /// Wrap a move source as an interactive player.
    pub fn interactive(source: impl MoveSource + 'static) -> Self {
        Player::Interactive(Box::new(source))
    }

    /// A search-driven player with the given configuration.
    pub fn minimax(config: SearchConfig) -> Self {
        Player::Minimax(MinimaxSearch::new(config))
    }

    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        match self {
            Player::Interactive(_) => PlayerKind::Human,
            Player::Minimax(_) => PlayerKind::Minimax,
        }
    }

    /// Select a move for `me` on `board`.
    ///
    /// A search player always returns an open edge while one exists. An
    /// interactive player returns whatever its source supplies, which may
    /// still be rejected by the board.
    pub fn select_move(&mut self, board: &BoardState, me: PlayerId) -> Option<Edge> {
        match self {
            Player::Interactive(source) => source.next_move(board, me),
            Player::Minimax(search) => search.choose_move(board, me),
        }
    }

    /// Forward a rejection to an interactive source.
    pub fn notify_rejected(&mut self, me: PlayerId, error: &MoveError) {
        if let Player::Interactive(source) = self {
            source.rejected(me, error);
        }
    }

    /// Statistics of the last search, for search players.
    #[must_use]
    pub fn last_search(&self) -> Option<&SearchStats> {
        match self {
            Player::Interactive(_) => None,
            Player::Minimax(search) => Some(search.stats()),
        }
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Interactive(_) => f.write_str("Interactive"),
            Player::Minimax(search) => f.debug_tuple("Minimax").field(search.config()).finish(),
        }
    }
}

/// A move source that replays a fixed list of edges.
///
/// Useful for tests and for replaying recorded games.
#[derive(Clone, Debug, Default)]
pub struct ScriptedMoves {
    moves: VecDeque<Edge>,
    rejections: Vec<MoveError>,
}

impl ScriptedMoves {
    pub fn new(moves: impl IntoIterator<Item = Edge>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            rejections: Vec::new(),
        }
    }

    /// Rejections reported so far.
    #[must_use]
    pub fn rejections(&self) -> &[MoveError] {
        &self.rejections
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self, _board: &BoardState, _player: PlayerId) -> Option<Edge> {
        self.moves.pop_front()
    }

    fn rejected(&mut self, _player: PlayerId, error: &MoveError) {
        self.rejections.push(*error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_player_replays_in_order() {
        let board = BoardState::new(2, 2);
        let mut player = Player::interactive(ScriptedMoves::new([Edge::new(0, 1), Edge::new(2, 3)]));

        assert_eq!(player.kind(), PlayerKind::Human);
        assert_eq!(player.select_move(&board, PlayerId::A), Some(Edge::new(0, 1)));
        assert_eq!(player.select_move(&board, PlayerId::A), Some(Edge::new(2, 3)));
        assert_eq!(player.select_move(&board, PlayerId::A), None);
        assert!(player.last_search().is_none());
    }

    #[test]
    fn test_minimax_player_selects_open_edge() {
        let board = BoardState::new(3, 3);
        let mut player = Player::minimax(SearchConfig::default().with_node_budget(200));

        let edge = player.select_move(&board, PlayerId::B).unwrap();

        assert_eq!(player.kind(), PlayerKind::Minimax);
        assert_eq!(board.edge_status(edge), Some(false));
        assert!(player.last_search().unwrap().nodes > 0);
    }

    #[test]
    fn test_scripted_moves_records_rejections() {
        let mut source = ScriptedMoves::default();
        let error = MoveError::InvalidEdge { a: 0, b: 9 };

        source.rejected(PlayerId::A, &error);

        assert_eq!(source.rejections(), &[error]);
    }
}
