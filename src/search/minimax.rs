//! Depth-limited minimax over cloned boards.
//!
//! The evaluation is the raw margin `score(A) - score(B)`; A maximizes and
//! B minimizes. There is no pruning and no caching, so the cost of a search
//! is governed entirely by [`search_depth`]: with `N` open moves the depth
//! is the largest `d` such that `N^d <= node_budget`.
//!
//! Every explored position is an independent clone of its parent, so the
//! board handed to [`MinimaxSearch::choose_move`] is never touched.

use std::time::Instant;

use tracing::{debug, instrument, trace, warn};

use crate::board::{BoardState, Edge, MoveOutcome};
use crate::core::{GameRng, PlayerId};

use super::config::{SearchConfig, TurnModel};
use super::stats::SearchStats;

/// Depth for a root with `open_moves` candidates.
///
/// Returns `None` when there is at most one move, in which case no search
/// is needed. Otherwise returns `floor(log_open_moves(node_budget))`,
/// which may be 0 when the board is wider than the budget.
///
/// ```
/// use dots_and_boxes::search::search_depth;
///
/// assert_eq!(search_depth(20, 19_000), Some(3));
/// assert_eq!(search_depth(1, 19_000), None);
/// ```
#[must_use]
pub fn search_depth(open_moves: usize, node_budget: u64) -> Option<u32> {
    if open_moves <= 1 {
        return None;
    }

    let base = open_moves as u64;
    let mut depth = 0;
    let mut reach = base;
    while reach <= node_budget {
        depth += 1;
        reach = match reach.checked_mul(base) {
            Some(next) => next,
            None => break,
        };
    }
    Some(depth)
}

/// Minimax move selector for the automated player.
#[derive(Clone, Debug)]
pub struct MinimaxSearch {
    config: SearchConfig,
    rng: GameRng,
    stats: SearchStats,
}

impl MinimaxSearch {
    /// Create a search with its own RNG seeded from the config.
    pub fn new(config: SearchConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Replace the fallback RNG (e.g. with a fork of the game's RNG).
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick the move that maximizes `player`'s margin.
    ///
    /// Candidates are tried in open-move order and a later candidate only
    /// replaces the best one if it scores strictly higher. Returns `None`
    /// only when the board has no open edges.
    #[instrument(level = "debug", skip(self, board), fields(open = board.open_move_count()))]
    pub fn choose_move(&mut self, board: &BoardState, player: PlayerId) -> Option<Edge> {
        let start = Instant::now();
        self.stats.reset();

        let moves = board.open_moves();
        self.stats.root_moves = moves.len() as u32;

        let Some(depth) = search_depth(moves.len(), self.config.node_budget) else {
            // Zero or one move: nothing to compare.
            return moves.first().copied();
        };
        self.stats.depth = Some(depth);

        let mut best: Option<(i32, Edge)> = None;
        for &edge in &moves {
            let mut child = board.clone();
            let Ok(outcome) = child.apply_move(edge, player) else {
                continue;
            };

            let next = self.next_to_move(player, &outcome);
            let margin = self.minimax(&child, next, depth);
            let score = match player {
                PlayerId::A => margin,
                PlayerId::B => -margin,
            };
            trace!(%edge, score, "root candidate");

            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, edge));
            }
        }

        let chosen = match best {
            Some((score, edge)) => {
                debug!(%edge, score, depth, nodes = self.stats.nodes, "search chose move");
                Some(edge)
            }
            None => {
                warn!("no candidate was scored, falling back to a random open move");
                self.rng.choose(&moves).copied()
            }
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        chosen
    }

    /// Choose a move for `player` and apply it to `board`.
    ///
    /// Returns `None` when there is nothing left to play.
    pub fn play_move(&mut self, board: &mut BoardState, player: PlayerId) -> Option<MoveOutcome> {
        let edge = self.choose_move(board, player)?;
        match board.apply_move(edge, player) {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                warn!(%err, "search proposed an unplayable move");
                None
            }
        }
    }

    /// Margin of `board` with `to_move` about to play, looking `depth` plies ahead.
    fn minimax(&mut self, board: &BoardState, to_move: PlayerId, depth: u32) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 || board.is_over() {
            self.stats.leaves += 1;
            return board.margin();
        }

        let mut value = match to_move {
            PlayerId::A => i32::MIN,
            PlayerId::B => i32::MAX,
        };
        // An unowned box always has an open side.
        let moves = board.open_moves();
        debug_assert!(!moves.is_empty(), "unfinished board has no open edge");

        for edge in moves {
            let mut child = board.clone();
            let Ok(outcome) = child.apply_move(edge, to_move) else {
                continue;
            };

            let next = self.next_to_move(to_move, &outcome);
            let child_value = self.minimax(&child, next, depth - 1);
            value = match to_move {
                PlayerId::A => value.max(child_value),
                PlayerId::B => value.min(child_value),
            };
        }

        value
    }

    fn next_to_move(&self, mover: PlayerId, outcome: &MoveOutcome) -> PlayerId {
        match self.config.turn_model {
            TurnModel::Alternating => mover.opponent(),
            TurnModel::ExtraTurn if outcome.scored() => mover,
            TurnModel::ExtraTurn => mover.opponent(),
        }
    }
}
