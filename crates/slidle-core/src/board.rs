//! Board representation and move rules.

use derive_more::{Display, Error, IsVariant};

use crate::Direction;

/// Maximum supported board size.
///
/// Tile values are stored as `u16`, which comfortably holds every value of a
/// 255×255 board.
pub const MAX_SIZE: usize = 255;

/// Errors produced when constructing a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The requested size is outside the supported range `1..=255`.
    #[display("board size {size} is outside the supported range 1..=255")]
    SizeOutOfRange {
        /// The rejected size.
        size: usize,
    },
    /// The supplied tile order is not a permutation of `0..size²`.
    #[display("tile order is not a permutation of 0..{expected}")]
    InvalidPermutation {
        /// The expected number of distinct tile values.
        expected: usize,
    },
}

/// Result of applying a move to a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum MoveOutcome {
    /// The move was rejected; the board is unchanged.
    Blocked,
    /// Tiles moved and the board is not in the solved state.
    Moved,
    /// Tiles moved and the board is now solved.
    Solved,
}

/// An N×N sliding-tile board.
///
/// The board stores a permutation of the tile values `0..N²` in row-major
/// slot order: `tile_at(i)` is the tile occupying slot `i`, where slot `i`
/// sits at row `i / N`, column `i % N`. The highest tile value, `N²−1`, is
/// the empty slot.
///
/// Every mutation preserves the permutation invariant: each tile value
/// appears exactly once at all times.
///
/// # Examples
///
/// ```
/// use slidle_core::{Board, Direction};
///
/// let mut board = Board::new(3)?;
/// assert!(board.is_solved());
/// assert_eq!(board.empty_tile(), 8);
/// assert_eq!(board.empty_slot(), 8);
///
/// // Slide the tile left of the gap to the right.
/// board.apply_move(Direction::Right);
/// assert_eq!(board.empty_slot(), 7);
/// assert_eq!(board.tile_at(8), 7);
/// # Ok::<(), slidle_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    order: Vec<u16>,
}

impl Board {
    /// Creates a board of the given size in the solved (identity) order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SizeOutOfRange`] if `size` is zero or exceeds
    /// [`MAX_SIZE`].
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_SIZE {
            return Err(BoardError::SizeOutOfRange { size });
        }
        let mut board = Self {
            size,
            order: Vec::new(),
        };
        board.reset();
        Ok(board)
    }

    /// Creates a board from an explicit tile order.
    ///
    /// Mostly useful for tests and for replaying known positions.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SizeOutOfRange`] if `size` is invalid, or
    /// [`BoardError::InvalidPermutation`] if `order` is not a permutation of
    /// `0..size²`.
    pub fn from_order(size: usize, order: Vec<u16>) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_SIZE {
            return Err(BoardError::SizeOutOfRange { size });
        }
        let expected = size * size;
        let mut seen = vec![false; expected];
        let valid = order.len() == expected
            && order.iter().all(|&tile| {
                let slot = usize::from(tile);
                slot < expected && !std::mem::replace(&mut seen[slot], true)
            });
        if !valid {
            return Err(BoardError::InvalidPermutation { expected });
        }
        Ok(Self { size, order })
    }

    /// Restores the solved (identity) order.
    pub fn reset(&mut self) {
        #[expect(clippy::cast_possible_truncation)]
        {
            self.order = (0..self.slot_count() as u16).collect();
        }
    }

    /// Returns the board size N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of slots, N².
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.size * self.size
    }

    /// Returns the tile value that represents the empty slot, `N²−1`.
    #[must_use]
    pub fn empty_tile(&self) -> u16 {
        #[expect(clippy::cast_possible_truncation)]
        let tile = (self.slot_count() - 1) as u16;
        tile
    }

    /// Returns the tile occupying the given slot.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of range.
    #[must_use]
    pub fn tile_at(&self, slot: usize) -> u16 {
        assert!(slot < self.slot_count());
        self.order[slot]
    }

    /// Returns the current tile order as a slice, one tile per slot in
    /// row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[u16] {
        &self.order
    }

    /// Returns the slot currently holding the empty tile.
    ///
    /// # Panics
    ///
    /// Panics if the permutation invariant is broken, which cannot happen
    /// through the public API.
    #[must_use]
    pub fn empty_slot(&self) -> usize {
        let empty = self.empty_tile();
        self.order
            .iter()
            .position(|&tile| tile == empty)
            .expect("empty tile is present in the permutation")
    }

    /// Checks whether the tiles are in the solved (identity) order.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.order
            .iter()
            .enumerate()
            .all(|(slot, &tile)| usize::from(tile) == slot)
    }

    /// Runs one Fisher–Yates pass over the tile order, drawing each swap
    /// index from `pick`.
    ///
    /// For each slot `i` from the last down to 1, `pick(i)` chooses a slot
    /// in `0..=i` to swap with. Built from swaps only, the pass preserves the
    /// permutation invariant for any `pick`; with a uniform draw it produces
    /// a uniformly random permutation. This is the sole mutation that steps
    /// outside the move rules, and exists for the shuffler.
    ///
    /// # Panics
    ///
    /// Panics if `pick(i)` returns a value greater than `i`.
    pub fn shuffle_with(&mut self, mut pick: impl FnMut(usize) -> usize) {
        for i in (1..self.slot_count()).rev() {
            let j = pick(i);
            assert!(j <= i);
            self.order.swap(i, j);
        }
    }

    /// Applies a direction move: the tile adjacent to the empty slot travels
    /// in the given direction, and the empty slot takes its place.
    ///
    /// Moves that would push a tile across the board edge are rejected with
    /// [`MoveOutcome::Blocked`] and leave the board unchanged.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let empty = self.empty_slot();
        let tile_slot = match direction {
            Direction::Left => {
                if self.col(empty) == self.size - 1 {
                    return MoveOutcome::Blocked;
                }
                empty + 1
            }
            Direction::Right => {
                if self.col(empty) == 0 {
                    return MoveOutcome::Blocked;
                }
                empty - 1
            }
            Direction::Up => {
                if self.row(empty) == self.size - 1 {
                    return MoveOutcome::Blocked;
                }
                empty + self.size
            }
            Direction::Down => {
                if self.row(empty) == 0 {
                    return MoveOutcome::Blocked;
                }
                empty - self.size
            }
        };

        self.order.swap(tile_slot, empty);
        self.outcome_after_move()
    }

    /// Applies a position-based move: every tile between the empty slot and
    /// `target` (inclusive) shifts one slot toward the empty slot's original
    /// position, and the empty slot ends up at `target`.
    ///
    /// The move is legal only when `target` shares a row or column with the
    /// empty slot. Targeting the empty slot itself, a slot off the shared
    /// row/column, or a slot outside the board is rejected with
    /// [`MoveOutcome::Blocked`].
    pub fn slide_to(&mut self, target: usize) -> MoveOutcome {
        if target >= self.slot_count() {
            return MoveOutcome::Blocked;
        }
        let mut empty = self.empty_slot();
        if target == empty {
            return MoveOutcome::Blocked;
        }

        let step = if self.row(target) == self.row(empty) {
            1
        } else if self.col(target) == self.col(empty) {
            self.size
        } else {
            return MoveOutcome::Blocked;
        };

        // Walk the empty slot toward the target one adjacent swap at a time.
        while empty != target {
            let next = if target > empty {
                empty + step
            } else {
                empty - step
            };
            self.order.swap(empty, next);
            empty = next;
        }
        self.outcome_after_move()
    }

    /// Checks whether the current position can be solved.
    ///
    /// Counts inversions among the non-empty tiles (pairs appearing out of
    /// ascending order). For odd N the position is solvable iff the inversion
    /// count is even. For even N, an odd inversion count must pair with the
    /// empty slot on an even row counted from the bottom (1-indexed), and an
    /// even count with an odd row.
    ///
    /// This is the standard 15-puzzle invariant: an adjacent swap flips
    /// inversion parity, and a vertical move also changes the empty slot's
    /// row parity, so legal moves preserve the verdict.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let empty = self.empty_tile();
        let mut inversions = 0_usize;
        for (a, &tile_a) in self.order.iter().enumerate() {
            if tile_a == empty {
                continue;
            }
            for &tile_b in &self.order[a + 1..] {
                if tile_b != empty && tile_a > tile_b {
                    inversions += 1;
                }
            }
        }
        let inversions_even = inversions % 2 == 0;

        if self.size % 2 != 0 {
            inversions_even
        } else {
            let empty_row_from_bottom = self.size - self.empty_slot() / self.size;
            let blank_on_even_row = empty_row_from_bottom % 2 == 0;
            inversions_even != blank_on_even_row
        }
    }

    fn outcome_after_move(&self) -> MoveOutcome {
        if self.is_solved() {
            MoveOutcome::Solved
        } else {
            MoveOutcome::Moved
        }
    }

    fn row(&self, slot: usize) -> usize {
        slot / self.size
    }

    fn col(&self, slot: usize) -> usize {
        slot % self.size
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn order(values: &[u16]) -> Vec<u16> {
        values.to_vec()
    }

    #[test]
    fn test_new_board_is_solved() {
        for size in 1..=8 {
            let board = Board::new(size).unwrap();
            assert!(board.is_solved(), "size {size}");
            assert_eq!(board.slot_count(), size * size);
            assert_eq!(usize::from(board.empty_tile()), size * size - 1);
            assert_eq!(board.empty_slot(), size * size - 1);
        }
    }

    #[test]
    fn test_new_rejects_out_of_range_sizes() {
        assert_eq!(Board::new(0), Err(BoardError::SizeOutOfRange { size: 0 }));
        assert_eq!(
            Board::new(MAX_SIZE + 1),
            Err(BoardError::SizeOutOfRange {
                size: MAX_SIZE + 1
            })
        );
        assert!(Board::new(MAX_SIZE).is_ok());
    }

    #[test]
    fn test_from_order_validates_permutation() {
        assert!(Board::from_order(2, order(&[3, 1, 2, 0])).is_ok());

        // Wrong length.
        assert_eq!(
            Board::from_order(2, order(&[0, 1, 2])),
            Err(BoardError::InvalidPermutation { expected: 4 })
        );
        // Duplicate value.
        assert_eq!(
            Board::from_order(2, order(&[0, 1, 1, 3])),
            Err(BoardError::InvalidPermutation { expected: 4 })
        );
        // Out-of-range value.
        assert_eq!(
            Board::from_order(2, order(&[0, 1, 2, 4])),
            Err(BoardError::InvalidPermutation { expected: 4 })
        );
    }

    #[test]
    fn test_reset_restores_identity() {
        let mut board = Board::from_order(3, order(&[1, 0, 2, 3, 4, 5, 6, 7, 8])).unwrap();
        assert!(!board.is_solved());
        board.reset();
        assert!(board.is_solved());
    }

    #[test]
    fn test_boundary_moves_are_blocked() {
        // Identity board: empty in the bottom-right corner.
        let mut board = Board::new(4).unwrap();
        assert_eq!(board.apply_move(Direction::Left), MoveOutcome::Blocked);
        assert_eq!(board.apply_move(Direction::Up), MoveOutcome::Blocked);
        assert!(board.is_solved());

        // Move the empty slot to the top-left corner.
        let mut top_left: Vec<u16> = (0..16).collect();
        top_left.swap(0, 15);
        let mut board = Board::from_order(4, top_left).unwrap();
        assert_eq!(board.empty_slot(), 0);
        assert_eq!(board.apply_move(Direction::Right), MoveOutcome::Blocked);
        assert_eq!(board.apply_move(Direction::Down), MoveOutcome::Blocked);
    }

    #[test]
    fn test_degenerate_single_slot_board() {
        let mut board = Board::new(1).unwrap();
        assert!(board.is_solved());
        assert!(board.is_solvable());
        for direction in Direction::ALL {
            assert_eq!(board.apply_move(direction), MoveOutcome::Blocked);
        }
        assert_eq!(board.slide_to(0), MoveOutcome::Blocked);
    }

    #[test]
    fn test_direction_move_swaps_with_adjacent_slot() {
        // 4×4 board with the empty tile (15) parked at slot 11 (row 2, col 3).
        let mut tiles: Vec<u16> = (0..16).collect();
        tiles.swap(11, 15);
        let mut board = Board::from_order(4, tiles).unwrap();
        assert_eq!(board.empty_slot(), 11);

        // Up slides the tile below the gap upward: slots 11 and 15 swap.
        assert_eq!(board.apply_move(Direction::Up), MoveOutcome::Solved);
        assert_eq!(board.empty_slot(), 15);
    }

    #[test]
    fn test_move_and_opposite_round_trip() {
        let mut board = Board::from_order(3, order(&[4, 1, 2, 3, 8, 5, 6, 7, 0])).unwrap();
        let before = board.tiles().to_vec();
        for direction in Direction::ALL {
            if board.apply_move(direction) == MoveOutcome::Blocked {
                continue;
            }
            board.apply_move(direction.opposite());
            assert_eq!(board.tiles(), &before[..], "{direction}");
        }
    }

    #[test]
    fn test_slide_to_same_column() {
        // 4×4 board, empty at row 2, col 2 (slot 10); click row 0, col 2
        // (slot 2). The tiles at slots 2 and 6 shift down one slot.
        let mut tiles: Vec<u16> = (0..16).collect();
        tiles.swap(10, 15);
        let mut board = Board::from_order(4, tiles).unwrap();
        let tile_at_2 = board.tile_at(2);
        let tile_at_6 = board.tile_at(6);

        assert_eq!(board.slide_to(2), MoveOutcome::Moved);
        assert_eq!(board.empty_slot(), 2);
        assert_eq!(board.tile_at(6), tile_at_2);
        assert_eq!(board.tile_at(10), tile_at_6);
    }

    #[test]
    fn test_slide_to_same_row() {
        let mut board = Board::new(4).unwrap();
        // Empty at slot 15; click slot 12 in the same row.
        let row: Vec<u16> = (12..15).map(|slot| board.tile_at(slot)).collect();
        assert_eq!(board.slide_to(12), MoveOutcome::Moved);
        assert_eq!(board.empty_slot(), 12);
        // 12, 13, 14 shifted right into 13, 14, 15.
        assert_eq!(board.tile_at(13), row[0]);
        assert_eq!(board.tile_at(14), row[1]);
        assert_eq!(board.tile_at(15), row[2]);
    }

    #[test]
    fn test_slide_to_rejects_illegal_targets() {
        let mut board = Board::new(4).unwrap();
        let before = board.tiles().to_vec();

        // The empty slot itself.
        assert_eq!(board.slide_to(15), MoveOutcome::Blocked);
        // Off the shared row/column (slot 0 is row 0, col 0; empty is row 3,
        // col 3).
        assert_eq!(board.slide_to(0), MoveOutcome::Blocked);
        // Outside the board.
        assert_eq!(board.slide_to(16), MoveOutcome::Blocked);

        assert_eq!(board.tiles(), &before[..]);
    }

    #[test]
    fn test_slide_to_adjacent_matches_direction_move() {
        let mut by_click = Board::new(3).unwrap();
        let mut by_key = by_click.clone();

        // Empty at slot 8; slot 7 is adjacent in the same row.
        by_click.slide_to(7);
        by_key.apply_move(Direction::Right);
        assert_eq!(by_click, by_key);
    }

    #[test]
    fn test_solvable_odd_size_even_inversions() {
        // Empty (8) in the top-right corner, remaining tiles ascending:
        // zero inversions, so an odd-sized board is solvable.
        let board = Board::from_order(3, order(&[0, 1, 8, 2, 3, 4, 5, 6, 7])).unwrap();
        assert!(board.is_solvable());

        // One inversion (1 before 0) flips the verdict.
        let board = Board::from_order(3, order(&[1, 0, 8, 2, 3, 4, 5, 6, 7])).unwrap();
        assert!(!board.is_solvable());
    }

    #[test]
    fn test_solvable_even_size_pairs_parity_with_empty_row() {
        // Identity: zero inversions (even), empty on row 3 of 4 so the
        // 1-indexed row from the bottom is 1 (odd). Even inversions with an
        // odd row is solvable.
        let board = Board::new(4).unwrap();
        assert!(board.is_solvable());

        // Swapping two adjacent tiles makes one inversion while keeping the
        // empty slot in place: now unsolvable.
        let mut tiles: Vec<u16> = (0..16).collect();
        tiles.swap(0, 1);
        let board = Board::from_order(4, tiles).unwrap();
        assert!(!board.is_solvable());
    }

    #[test]
    fn test_shuffle_with_applies_one_fisher_yates_pass() {
        let mut board = Board::new(3).unwrap();

        // Drawing j = i swaps every slot with itself.
        board.shuffle_with(|i| i);
        assert!(board.is_solved());

        // Drawing j = 0 walks each tile through slot 0 in turn.
        board.shuffle_with(|_| 0);
        assert_eq!(board.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
    }

    #[test]
    #[should_panic(expected = "j <= i")]
    fn test_shuffle_with_rejects_out_of_range_draws() {
        let mut board = Board::new(3).unwrap();
        board.shuffle_with(|i| i + 1);
    }

    #[test]
    fn test_single_swap_of_adjacent_tiles_is_unsolvable() {
        // Swapping one adjacent pair of a solved board flips inversion parity
        // without moving the empty slot, the classic unsolvable position.
        let mut tiles: Vec<u16> = (0..16).collect();
        tiles.swap(12, 13);
        let board = Board::from_order(4, tiles).unwrap();
        assert!(!board.is_solvable());
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(&Direction::ALL)
    }

    proptest! {
        #[test]
        fn prop_moves_preserve_permutation(
            size in 2_usize..=5,
            moves in prop::collection::vec(arb_direction(), 0..64),
        ) {
            let mut board = Board::new(size).unwrap();
            for direction in moves {
                board.apply_move(direction);
                let mut sorted = board.tiles().to_vec();
                sorted.sort_unstable();
                let identity: Vec<u16> = (0..sorted.len() as u16).collect();
                prop_assert_eq!(sorted, identity);
            }
        }

        #[test]
        fn prop_legal_moves_preserve_solvability(
            size in 2_usize..=5,
            scramble in prop::collection::vec(arb_direction(), 0..32),
            moves in prop::collection::vec(arb_direction(), 1..32),
        ) {
            // Reach an arbitrary legal position first, then check that each
            // further move keeps the verdict.
            let mut board = Board::new(size).unwrap();
            for direction in scramble {
                board.apply_move(direction);
            }
            let verdict = board.is_solvable();
            for direction in moves {
                board.apply_move(direction);
                prop_assert_eq!(board.is_solvable(), verdict);
            }
        }

        #[test]
        fn prop_move_then_opposite_round_trips(
            size in 2_usize..=5,
            scramble in prop::collection::vec(arb_direction(), 0..32),
            direction in arb_direction(),
        ) {
            let mut board = Board::new(size).unwrap();
            for step in scramble {
                board.apply_move(step);
            }
            let before = board.tiles().to_vec();
            if board.apply_move(direction) != MoveOutcome::Blocked {
                board.apply_move(direction.opposite());
            }
            prop_assert_eq!(board.tiles(), &before[..]);
        }

        #[test]
        fn prop_slide_to_lands_empty_on_target(
            scramble in prop::collection::vec(arb_direction(), 0..32),
            target in 0_usize..16,
        ) {
            let mut board = Board::new(4).unwrap();
            for step in scramble {
                board.apply_move(step);
            }
            let empty = board.empty_slot();
            let legal = target != empty
                && (target / 4 == empty / 4 || target % 4 == empty % 4);
            let outcome = board.slide_to(target);
            if legal {
                prop_assert_ne!(outcome, MoveOutcome::Blocked);
                prop_assert_eq!(board.empty_slot(), target);
            } else {
                prop_assert_eq!(outcome, MoveOutcome::Blocked);
                prop_assert_eq!(board.empty_slot(), empty);
            }
        }
    }
}
