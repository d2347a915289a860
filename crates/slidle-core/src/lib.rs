//! Core data structures for the Slidle sliding-tile puzzle.
//!
//! This crate provides the board representation and rules of the generalized
//! N×N "15-puzzle": tile layout, move legality, the win condition, and the
//! parity-based solvability predicate. Shuffling and session management live
//! in the `slidle-shuffle` and `slidle-game` crates; rendering and input
//! handling are left to the embedding application.
//!
//! # Overview
//!
//! - [`Board`]: an N×N grid stored as a permutation of tile values in
//!   row-major slot order, where the highest value (`N²−1`) is the empty slot.
//! - [`Direction`]: the four tile travel directions for keyboard-style moves.
//! - [`MoveOutcome`]: whether a move was blocked, moved tiles, or solved the
//!   puzzle.
//!
//! # Examples
//!
//! ```
//! use slidle_core::{Board, Direction, MoveOutcome};
//!
//! let mut board = Board::new(4)?;
//! assert!(board.is_solved());
//!
//! // The empty slot starts in the bottom-right corner, so the tile to its
//! // left can slide right.
//! assert_eq!(board.apply_move(Direction::Right), MoveOutcome::Moved);
//! assert!(!board.is_solved());
//!
//! // Sliding it back restores the solved state.
//! assert_eq!(board.apply_move(Direction::Left), MoveOutcome::Solved);
//! # Ok::<(), slidle_core::BoardError>(())
//! ```

pub mod board;
pub mod direction;

pub use self::{
    board::{Board, BoardError, MAX_SIZE, MoveOutcome},
    direction::Direction,
};
