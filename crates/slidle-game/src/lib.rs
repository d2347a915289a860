//! Game session management for Slidle.
//!
//! A [`Session`] owns one board and drives a play session through its
//! lifecycle: `Idle` until the player starts, `Playing` while tiles move, and
//! `Won` when the final board is solved. In marathon mode a session demands
//! several consecutive solves, re-shuffling after each intermediate win while
//! the clock keeps running.
//!
//! All mutations run to completion synchronously; the session holds no locks
//! and spawns no tasks. Elapsed time is computed from the wall clock on read,
//! so a UI refreshing every frame (or every 50 ms) simply polls
//! [`Session::elapsed`].
//!
//! # Examples
//!
//! ```
//! use slidle_core::Direction;
//! use slidle_game::Session;
//!
//! let mut session = Session::new(4)?;
//! assert!(session.state().is_idle());
//!
//! session.start();
//! assert!(session.state().is_playing());
//!
//! // Moves are forwarded to the board; the session reacts to a solve.
//! session.move_direction(Direction::Left);
//! # Ok::<(), slidle_core::BoardError>(())
//! ```

mod clock;
mod session;

pub use self::{
    clock::SessionClock,
    session::{DEFAULT_MARATHON_ROUNDS, DEFAULT_SIZE, Session, SessionState},
};
