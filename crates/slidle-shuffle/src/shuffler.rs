//! The shuffler and its outcome types.

use std::num::NonZero;

use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use slidle_core::{Board, BoardError};

/// Default retry budget for rejected shuffles.
///
/// Each attempt fails with probability a little over one half (unsolvable
/// permutations plus the solved one), so 30 tries make an unusable board
/// vanishingly unlikely while keeping the loop strictly bounded.
pub const DEFAULT_MAX_TRIES: NonZero<u32> = NonZero::new(30).unwrap();

/// Statistics reported by an in-place shuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleStats {
    /// Number of Fisher–Yates attempts performed, including the accepted one.
    pub attempts: u32,
    /// True when the retry budget ran out and the last permutation was
    /// accepted without a solvability guarantee.
    pub forced_unsolvable: bool,
}

/// A freshly shuffled board together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffledBoard {
    /// The shuffled board.
    pub board: Board,
    /// Seed for the deterministic generator; replaying it through
    /// [`BoardShuffler::shuffle_with_seed`] reproduces `board` exactly.
    pub seed: u64,
    /// Number of Fisher–Yates attempts performed.
    pub attempts: u32,
    /// True when the retry budget ran out; see [`ShuffleStats`].
    pub forced_unsolvable: bool,
}

/// Shuffles boards into solvable, non-trivial starting positions.
///
/// One attempt is an in-place Fisher–Yates pass over the whole tile order.
/// The attempt is rejected when the result is the solved identity (the player
/// would have nothing to do) or fails the solvability check. Rejection
/// re-shuffles the already-shuffled order, which is distributionally
/// identical to starting over, up to [`max_tries`](Self::max_tries) total
/// attempts.
///
/// Exhausting the budget is not an error: the last permutation is kept and
/// flagged `forced_unsolvable`. The game would rather occasionally hand the
/// player a hopeless board than fail to produce one at all.
///
/// # Examples
///
/// ```
/// use std::num::NonZero;
///
/// use slidle_shuffle::BoardShuffler;
///
/// let shuffler = BoardShuffler::new(NonZero::new(50).unwrap());
/// let shuffled = shuffler.shuffle_with_seed(3, 7)?;
/// assert_eq!(shuffled.board.size(), 3);
/// # Ok::<(), slidle_core::BoardError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoardShuffler {
    max_tries: NonZero<u32>,
}

impl Default for BoardShuffler {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TRIES)
    }
}

impl BoardShuffler {
    /// Creates a shuffler with the given retry budget.
    #[must_use]
    pub const fn new(max_tries: NonZero<u32>) -> Self {
        Self { max_tries }
    }

    /// Returns the retry budget.
    #[must_use]
    pub const fn max_tries(&self) -> NonZero<u32> {
        self.max_tries
    }

    /// Shuffles a fresh board of the given size with an entropy-derived seed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SizeOutOfRange`] for invalid sizes.
    pub fn shuffle(&self, size: usize) -> Result<ShuffledBoard, BoardError> {
        self.shuffle_with_seed(size, rand::rng().random())
    }

    /// Shuffles a fresh board of the given size, deterministically from a
    /// seed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SizeOutOfRange`] for invalid sizes.
    pub fn shuffle_with_seed(&self, size: usize, seed: u64) -> Result<ShuffledBoard, BoardError> {
        let mut board = Board::new(size)?;
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let stats = self.shuffle_board(&mut board, &mut rng);
        Ok(ShuffledBoard {
            board,
            seed,
            attempts: stats.attempts,
            forced_unsolvable: stats.forced_unsolvable,
        })
    }

    /// Shuffles an existing board in place using the caller's generator.
    ///
    /// This is the primitive the seeded entry points build on; sessions use
    /// it to drive several shuffles from one reproducible stream.
    ///
    /// Boards with a single slot can never leave the solved state, so for
    /// them every attempt is rejected and the fallback always triggers.
    pub fn shuffle_board<R>(&self, board: &mut Board, rng: &mut R) -> ShuffleStats
    where
        R: Rng + ?Sized,
    {
        let mut attempts = 0;
        loop {
            attempts += 1;
            board.shuffle_with(|i| rng.random_range(0..=i));

            if !board.is_solved() && board.is_solvable() {
                return ShuffleStats {
                    attempts,
                    forced_unsolvable: false,
                };
            }
            if attempts == self.max_tries.get() {
                log::warn!(
                    "shuffle retry budget exhausted after {attempts} attempts; \
                     accepting a possibly unsolvable board"
                );
                return ShuffleStats {
                    attempts,
                    forced_unsolvable: true,
                };
            }
        }
    }
}
