//! Turn controller: alternation and the extra-turn rule.
//!
//! ```text
//!            move completes a box
//!               ┌──────────┐
//!               ▼          │
//!   ToMove(A) ──┴─► ToMove(B) ──► ... ──► Over
//!          no box      no box
//! ```
//!
//! The controller checks for the end of the game before every move
//! attempt. Each [`TurnController::step`] is exactly one attempt: a
//! rejected move is reported and leaves the board and the active player
//! unchanged, so the caller decides whether to ask again.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::board::{BoardState, Edge};
use crate::core::{MoveError, PlayerId, PlayerMap};
use crate::players::{Player, PlayerKind};

use super::result::GameResult;

/// Whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    ToMove(PlayerId),
    Over,
}

/// One applied move, as kept in the controller's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who moved.
    pub player: PlayerId,
    /// The edge drawn.
    pub edge: Edge,
    /// Boxes completed by this move (0, 1 or 2).
    pub boxes_completed: u8,
    /// Scores after the move.
    pub scores: PlayerMap<u32>,
}

impl MoveRecord {
    /// Whether this move earned another turn.
    #[must_use]
    pub fn scored(&self) -> bool {
        self.boxes_completed > 0
    }
}

/// Why a controller step did not apply a move.
#[derive(Debug, Display, Error)]
pub enum TurnError {
    /// The selected edge was refused by the board.
    #[display("move rejected: {}", _0)]
    Rejected(MoveError),

    /// The active player produced no move (e.g. input closed).
    #[display("{} produced no move", player)]
    NoMove {
        /// The player who was asked.
        player: PlayerId,
    },

    /// Every box is already owned.
    #[display("the game is over")]
    GameOver,
}

impl From<MoveError> for TurnError {
    fn from(err: MoveError) -> Self {
        TurnError::Rejected(err)
    }
}

/// Drives a game between two players on one board.
#[derive(Debug)]
pub struct TurnController {
    board: BoardState,
    players: PlayerMap<Player>,
    state: TurnState,
    history: Vec<MoveRecord>,
}

impl TurnController {
    /// Start a game with `first` to move.
    pub fn new(board: BoardState, players: PlayerMap<Player>, first: PlayerId) -> Self {
        let state = if board.is_over() {
            TurnState::Over
        } else {
            TurnState::ToMove(first)
        };

        Self {
            board,
            players,
            state,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// The player about to move, if the game is still running.
    #[must_use]
    pub fn active_player(&self) -> Option<PlayerId> {
        match self.state {
            TurnState::ToMove(player) => Some(player),
            TurnState::Over => None,
        }
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Applied moves in order.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.board
            .is_over()
            .then(|| GameResult::from_scores(&self.board.scores()))
    }

    /// Make one move attempt for the active player.
    ///
    /// ## Errors
    ///
    /// - [`TurnError::GameOver`] if every box is owned
    /// - [`TurnError::NoMove`] if the player produced nothing
    /// - [`TurnError::Rejected`] if the board refused the edge; the same
    ///   player stays active and its source has been told why
    #[instrument(level = "debug", skip(self), fields(state = ?self.state))]
    pub fn step(&mut self) -> Result<MoveRecord, TurnError> {
        let player = match self.state {
            TurnState::ToMove(player) if !self.board.is_over() => player,
            _ => {
                self.state = TurnState::Over;
                return Err(TurnError::GameOver);
            }
        };

        let edge = self.players[player]
            .select_move(&self.board, player)
            .ok_or(TurnError::NoMove { player })?;

        let outcome = match self.board.apply_move(edge, player) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(%player, %err, "move rejected");
                self.players[player].notify_rejected(player, &err);
                return Err(err.into());
            }
        };

        let record = MoveRecord {
            player,
            edge: outcome.edge,
            boxes_completed: outcome.boxes_completed() as u8,
            scores: self.board.scores(),
        };
        self.history.push(record);

        self.state = if self.board.is_over() {
            TurnState::Over
        } else if outcome.scored() {
            TurnState::ToMove(player)
        } else {
            TurnState::ToMove(player.opponent())
        };

        debug!(
            %player,
            edge = %record.edge,
            boxes = record.boxes_completed,
            next = ?self.state,
            "move applied"
        );
        Ok(record)
    }

    /// Play until the game is over.
    ///
    /// Rejected moves from interactive players are retried by asking the
    /// same player again. A rejected move from a search player, or a player
    /// with no move to give, ends the run with an error.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> Result<GameResult, TurnError> {
        loop {
            if let Some(result) = self.result() {
                self.state = TurnState::Over;
                return Ok(result);
            }

            match self.step() {
                Ok(_) => {}
                Err(TurnError::Rejected(_))
                    if self
                        .active_player()
                        .is_some_and(|p| self.players[p].kind() == PlayerKind::Human) => {}
                Err(err) => return Err(err),
            }
        }
    }
}
