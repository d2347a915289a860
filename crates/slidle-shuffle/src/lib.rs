//! Solvability-aware shuffling for Slidle boards.
//!
//! A uniformly random permutation of sliding-tile pieces is unsolvable half
//! of the time, and occasionally already solved. [`BoardShuffler`] runs an
//! in-place Fisher–Yates shuffle and rejects both cases, retrying within a
//! bounded budget. When the budget runs out, the last permutation is accepted
//! as-is and flagged so the caller can warn the player; the puzzle is always
//! playable, but solvability is only probabilistically guaranteed.
//!
//! Shuffles are reproducible: every [`ShuffledBoard`] carries the seed that
//! produced it, and [`BoardShuffler::shuffle_with_seed`] replays it.
//!
//! # Examples
//!
//! ```
//! use slidle_shuffle::BoardShuffler;
//!
//! let shuffler = BoardShuffler::default();
//! let shuffled = shuffler.shuffle(4)?;
//!
//! assert!(!shuffled.board.is_solved());
//! if !shuffled.forced_unsolvable {
//!     assert!(shuffled.board.is_solvable());
//! }
//!
//! // The same seed reproduces the same board.
//! let replay = shuffler.shuffle_with_seed(4, shuffled.seed)?;
//! assert_eq!(replay.board, shuffled.board);
//! # Ok::<(), slidle_core::BoardError>(())
//! ```

mod shuffler;

pub use self::shuffler::{BoardShuffler, DEFAULT_MAX_TRIES, ShuffleStats, ShuffledBoard};
