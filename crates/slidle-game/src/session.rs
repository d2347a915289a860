//! The session state machine.

use std::{num::NonZero, time::Duration};

use derive_more::{Display, IsVariant};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use slidle_core::{Board, BoardError, Direction, MoveOutcome};
use slidle_shuffle::BoardShuffler;

use crate::SessionClock;

/// Default board size N.
pub const DEFAULT_SIZE: usize = 4;

/// Default number of rounds a marathon demands.
pub const DEFAULT_MARATHON_ROUNDS: NonZero<u32> = NonZero::new(3).unwrap();

/// Lifecycle state of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IsVariant)]
pub enum SessionState {
    /// No game is running; configuration commands are accepted.
    Idle,
    /// A shuffled board is live and accepting moves.
    Playing,
    /// The final board was solved; only a new start leaves this state.
    Won,
}

/// A play session: one board, its lifecycle, timing, and marathon
/// progression.
///
/// The session forwards moves to its board while `Playing` and reacts when
/// the board reports a solve: in marathon mode it re-shuffles and counts the
/// round down, otherwise it stops the clock and transitions to `Won`.
///
/// Commands issued in a state that forbids them are silently ignored and
/// report not-applied through their return value, mirroring a UI that simply
/// suppresses the input. Callers that need diagnostics check
/// [`state`](Self::state) before issuing commands.
///
/// # Examples
///
/// ```
/// use slidle_game::Session;
///
/// let mut session = Session::new(4)?;
///
/// // Marathon can only be configured while idle.
/// assert!(session.toggle_marathon());
/// assert!(session.marathon_enabled());
///
/// session.start();
/// assert!(session.state().is_playing());
/// assert_eq!(session.rounds_remaining(), 3);
/// assert!(!session.toggle_marathon());
/// # Ok::<(), slidle_core::BoardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    state: SessionState,
    shuffler: BoardShuffler,
    rng: Pcg64Mcg,
    marathon_enabled: bool,
    marathon_rounds: NonZero<u32>,
    rounds_remaining: u32,
    clock: SessionClock,
    last_shuffle_was_forced_unsolvable: bool,
}

impl Session {
    /// Creates an idle session with a solved board of the given size and an
    /// entropy-derived shuffle stream.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SizeOutOfRange`] for invalid sizes.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Self::with_seed(size, rand::rng().random())
    }

    /// Creates an idle session whose shuffles all derive deterministically
    /// from the given seed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SizeOutOfRange`] for invalid sizes.
    pub fn with_seed(size: usize, seed: u64) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size)?,
            state: SessionState::Idle,
            shuffler: BoardShuffler::default(),
            rng: Pcg64Mcg::seed_from_u64(seed),
            marathon_enabled: false,
            marathon_rounds: DEFAULT_MARATHON_ROUNDS,
            rounds_remaining: 0,
            clock: SessionClock::new(),
            last_shuffle_was_forced_unsolvable: false,
        })
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the owned board, for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the accumulated session time, spanning all marathon rounds.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    /// Returns whether marathon mode is enabled.
    #[must_use]
    pub fn marathon_enabled(&self) -> bool {
        self.marathon_enabled
    }

    /// Returns the configured marathon length.
    #[must_use]
    pub fn marathon_rounds(&self) -> NonZero<u32> {
        self.marathon_rounds
    }

    /// Returns the number of rounds left to solve, including the current
    /// one. Zero once the session is won (or before the first start).
    #[must_use]
    pub fn rounds_remaining(&self) -> u32 {
        self.rounds_remaining
    }

    /// Returns the number of rounds the running session demands in total.
    #[must_use]
    pub fn total_rounds(&self) -> u32 {
        if self.marathon_enabled {
            self.marathon_rounds.get()
        } else {
            1
        }
    }

    /// Returns the average time spent per round.
    ///
    /// Meaningful for display once the session is won; before that it simply
    /// divides the time elapsed so far.
    #[must_use]
    pub fn average_round_time(&self) -> Duration {
        self.elapsed() / self.total_rounds()
    }

    /// Returns whether the most recent shuffle exhausted its retry budget
    /// and was accepted without a solvability guarantee, so the caller can
    /// warn the player.
    #[must_use]
    pub fn last_shuffle_was_forced_unsolvable(&self) -> bool {
        self.last_shuffle_was_forced_unsolvable
    }

    /// Starts a new game: shuffles the board, zeroes and starts the clock,
    /// and transitions to `Playing`.
    ///
    /// Accepted while `Idle` or `Won`; ignored while `Playing`. Returns
    /// whether the command was applied.
    pub fn start(&mut self) -> bool {
        if self.state.is_playing() {
            return false;
        }
        self.rounds_remaining = self.total_rounds();
        self.reshuffle();
        self.clock.reset();
        self.clock.start();
        self.state = SessionState::Playing;
        log::debug!(
            "session started: size {}, {} round(s)",
            self.board.size(),
            self.rounds_remaining
        );
        true
    }

    /// Applies a direction move. Valid only while `Playing`; otherwise the
    /// board is untouched and `Blocked` is returned.
    ///
    /// `Solved` reports that this move solved the current round's board.
    /// During a marathon with rounds left the session immediately
    /// re-shuffles for the next round, so the board read back afterwards is
    /// no longer in the solved order; check [`state`](Self::state) to tell a
    /// round transition (`Playing`) from the final win (`Won`).
    pub fn move_direction(&mut self, direction: Direction) -> MoveOutcome {
        if !self.state.is_playing() {
            return MoveOutcome::Blocked;
        }
        let outcome = self.board.apply_move(direction);
        if outcome.is_solved() {
            self.handle_solved();
        }
        outcome
    }

    /// Applies a position-based (click) move. Valid only while `Playing`;
    /// otherwise the board is untouched and `Blocked` is returned.
    ///
    /// `Solved` reports a solve of the current round's board; see
    /// [`move_direction`](Self::move_direction) for how to tell a marathon
    /// round transition from the final win.
    pub fn move_to_slot(&mut self, slot: usize) -> MoveOutcome {
        if !self.state.is_playing() {
            return MoveOutcome::Blocked;
        }
        let outcome = self.board.slide_to(slot);
        if outcome.is_solved() {
            self.handle_solved();
        }
        outcome
    }

    /// Toggles marathon mode. Valid only while `Idle`; returns whether the
    /// command was applied.
    pub fn toggle_marathon(&mut self) -> bool {
        if !self.state.is_idle() {
            return false;
        }
        self.marathon_enabled = !self.marathon_enabled;
        true
    }

    /// Sets the marathon length. Valid only while `Idle`; returns whether
    /// the command was applied.
    pub fn set_marathon_rounds(&mut self, rounds: NonZero<u32>) -> bool {
        if !self.state.is_idle() {
            return false;
        }
        self.marathon_rounds = rounds;
        true
    }

    /// Replaces the board with a fresh one of the given size. Valid only
    /// while `Idle`; returns whether the command was applied.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SizeOutOfRange`] for invalid sizes, leaving the
    /// session unchanged.
    pub fn resize(&mut self, new_size: usize) -> Result<bool, BoardError> {
        if !self.state.is_idle() {
            return Ok(false);
        }
        self.board = Board::new(new_size)?;
        Ok(true)
    }

    fn reshuffle(&mut self) {
        let stats = self.shuffler.shuffle_board(&mut self.board, &mut self.rng);
        self.last_shuffle_was_forced_unsolvable = stats.forced_unsolvable;
    }

    fn handle_solved(&mut self) {
        if self.marathon_enabled && self.rounds_remaining > 1 {
            // Round transition: the clock keeps running across rounds.
            self.rounds_remaining -= 1;
            self.reshuffle();
            log::debug!("marathon round solved; {} remaining", self.rounds_remaining);
        } else {
            self.rounds_remaining = 0;
            self.clock.stop();
            self.state = SessionState::Won;
            log::debug!("session won after {:?}", self.elapsed());
        }
    }
}
