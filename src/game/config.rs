//! Game setup: board size, who plays, who starts.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::board::BoardState;
use crate::core::{GameRng, PlayerId, PlayerMap};
use crate::players::{MoveSource, Player, PlayerKind};
use crate::search::{MinimaxSearch, SearchConfig};

use super::controller::TurnController;

/// Game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Dot rows.
    pub rows: usize,

    /// Dot columns.
    pub columns: usize,

    /// Who fills each seat.
    pub players: PlayerMap<PlayerKind>,

    /// Fixed first player; `None` tosses a coin.
    pub first: Option<PlayerId>,

    /// Seed for the coin toss and the search players' fallback RNGs.
    pub seed: u64,

    /// Settings shared by every search player.
    pub search: SearchConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            columns: 5,
            players: PlayerMap::from_array([PlayerKind::Human, PlayerKind::Minimax]),
            first: None,
            seed: 42,
            search: SearchConfig::default(),
        }
    }
}

/// How the first player was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opening {
    /// Who moves first.
    pub first: PlayerId,
    /// Whether a coin toss decided it.
    pub tossed: bool,
}

impl Opening {
    /// Coin face for a toss: heads means A starts.
    #[must_use]
    pub fn coin_face(&self) -> &'static str {
        match self.first {
            PlayerId::A => "heads",
            PlayerId::B => "tails",
        }
    }
}

impl GameConfig {
    pub fn with_size(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    pub fn with_players(mut self, a: PlayerKind, b: PlayerKind) -> Self {
        self.players = PlayerMap::from_array([a, b]);
        self
    }

    pub fn with_first(mut self, first: Option<PlayerId>) -> Self {
        self.first = first;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Whether any seat is interactive.
    #[must_use]
    pub fn has_human(&self) -> bool {
        self.players.iter().any(|(_, &kind)| kind == PlayerKind::Human)
    }

    /// Create the board and players and decide who starts.
    ///
    /// `source` is called once per human seat to obtain its move source.
    #[instrument(level = "debug", skip(source))]
    pub fn build(
        &self,
        mut source: impl FnMut(PlayerId) -> Box<dyn MoveSource>,
    ) -> (TurnController, Opening) {
        let mut rng = GameRng::new(self.seed);

        let opening = match self.first {
            Some(first) => Opening { first, tossed: false },
            None => Opening {
                first: rng.coin_toss(),
                tossed: true,
            },
        };

        let players = PlayerMap::from_array(PlayerId::ALL.map(|id| match self.players[id] {
            PlayerKind::Human => Player::Interactive(source(id)),
            PlayerKind::Minimax => {
                Player::Minimax(MinimaxSearch::new(self.search.clone()).with_rng(rng.fork()))
            }
        }));

        info!(
            rows = self.rows,
            columns = self.columns,
            first = %opening.first,
            tossed = opening.tossed,
            "new game"
        );

        let board = BoardState::new(self.rows, self.columns);
        (TurnController::new(board, players, opening.first), opening)
    }
}
