//! Move directions for keyboard-style input.

use derive_more::Display;

/// The direction a tile travels when a move is applied.
///
/// A direction names the movement of the tile, not of the empty slot: `Up`
/// slides the tile *below* the gap upward, so the empty slot itself moves
/// down. This matches the arrow-key convention of the classic puzzle, where
/// pressing an arrow pushes a tile in that direction.
///
/// # Examples
///
/// ```
/// use slidle_core::Direction;
///
/// assert_eq!(Direction::Left.opposite(), Direction::Right);
/// assert_eq!(Direction::ALL.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Direction {
    /// Slide the tile right of the gap leftward.
    Left,
    /// Slide the tile left of the gap rightward.
    Right,
    /// Slide the tile below the gap upward.
    Up,
    /// Slide the tile above the gap downward.
    Down,
}

impl Direction {
    /// Array containing all four directions.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Returns the opposite direction.
    ///
    /// Applying a move and then its opposite restores the board to its prior
    /// order (provided the first move was not blocked).
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}
