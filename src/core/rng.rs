//! Deterministic random number generation.
//!
//! Randomness only enters a game in two places: the coin toss that picks
//! the first player, and the search's fallback when no candidate move is
//! scored. Both draw from a seeded `GameRng`, so a whole game replays
//! identically from the same seed.
//!
//! ```
//! use dots_and_boxes::core::GameRng;
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//! assert_eq!(rng1.coin_toss(), rng2.coin_toss());
//!
//! // Forks are independent but still deterministic.
//! let mut fork1 = rng1.fork();
//! let mut fork2 = rng2.fork();
//! assert_eq!(fork1.coin_toss(), fork2.coin_toss());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence. The game
    /// hands a fork to every search player so their fallbacks do not
    /// perturb the coin toss stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Fair coin toss: heads means A starts, tails means B starts.
    pub fn coin_toss(&mut self) -> PlayerId {
        if self.inner.gen_bool(0.5) {
            PlayerId::A
        } else {
            PlayerId::B
        }
    }

    /// Uniform pick from `slice`; `None` when empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Snapshot of the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Resume a stream from a snapshot.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Where a [`GameRng`] stream stands, for saving alongside a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// Position in the ChaCha8 keystream.
    pub word_pos: u128,
    pub fork_counter: u64,
}
