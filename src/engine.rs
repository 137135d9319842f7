//! Board model for the 8-puzzle.
//!
//! This module defines the fixed 3x3 tile arrangement and the static move table:
//! - `Board`: a permutation of the tiles `0..=8` laid out row-major, `0` being the blank.
//! - `MOVE_TABLE`: for every blank position, the up to four positions it may swap with.
//! - `GOAL_BOARD` / `START_BOARD`: the fixed target and the compiled-in start arrangement.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Width (and height) of the square grid.
pub const SIDE: usize = 3;

/// Maximum number of moves available from any blank position.
pub const MAX_MOVES: usize = 4;

/// Swap targets for the blank at each position, `None` marking "no move".
///
/// Rows are indexed by the blank's position; entries are the adjacent
/// positions in the grid. Corners have two targets, edges three, the centre four.
pub const MOVE_TABLE: [[Option<usize>; MAX_MOVES]; CELLS] = [
    [Some(1), Some(3), None, None],
    [Some(0), Some(2), Some(4), None],
    [Some(1), Some(5), None, None],
    [Some(0), Some(4), Some(6), None],
    [Some(1), Some(3), Some(5), Some(7)],
    [Some(2), Some(4), Some(8), None],
    [Some(3), Some(7), None, None],
    [Some(4), Some(6), Some(8), None],
    [Some(5), Some(7), None, None],
];

/// The target arrangement: blank in the centre, tiles running clockwise from the top-left.
///
/// ```text
/// 1 2 3
/// 8 _ 4
/// 7 6 5
/// ```
pub const GOAL_BOARD: Board = Board {
    tiles: [1, 2, 3, 8, 0, 4, 7, 6, 5],
};

/// The compiled-in start arrangement.
pub const START_BOARD: Board = Board {
    tiles: [2, 8, 3, 1, 6, 4, 7, 0, 5],
};

/// A 3x3 arrangement of the tiles `0..=8`, stored row-major.
///
/// Position `0` is the top-left cell and position `8` the bottom-right one.
/// The value `0` denotes the blank. Every `Board` is a permutation of `0..=8`;
/// constructors that accept arbitrary input check this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; CELLS],
}

impl Board {
    /// Creates a board from a row-major tile array.
    ///
    /// Returns `None` unless `tiles` is a permutation of `0..=8`.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::{Board, GOAL_BOARD};
    /// let board = Board::from_tiles([1, 2, 3, 8, 0, 4, 7, 6, 5]).unwrap();
    /// assert_eq!(board, GOAL_BOARD);
    /// assert!(Board::from_tiles([1, 1, 3, 8, 0, 4, 7, 6, 5]).is_none());
    /// ```
    pub fn from_tiles(tiles: [u8; CELLS]) -> Option<Self> {
        let mut seen = [false; CELLS];
        for &tile in &tiles {
            let idx = tile as usize;
            if idx >= CELLS || seen[idx] {
                return None;
            }
            seen[idx] = true;
        }
        Some(Board { tiles })
    }

    /// Returns the row-major tile array.
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    /// Returns the tile at `position`.
    ///
    /// # Panics
    /// Panics if `position >= CELLS`.
    pub fn tile(&self, position: usize) -> u8 {
        self.tiles[position]
    }

    /// Returns the position of the blank.
    pub fn blank_position(&self) -> usize {
        // A permutation of 0..=8 always holds the blank somewhere.
        self.tiles.iter().position(|&t| t == 0).unwrap_or(0)
    }

    /// Returns the raw move-table row for the blank's current position,
    /// including the `None` sentinels.
    pub fn move_slots(&self) -> [Option<usize>; MAX_MOVES] {
        MOVE_TABLE[self.blank_position()]
    }

    /// Returns the positions whose tile may slide into the blank, in move-table order.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::GOAL_BOARD;
    /// assert_eq!(GOAL_BOARD.legal_moves(), vec![1, 3, 5, 7]);
    /// ```
    pub fn legal_moves(&self) -> Vec<usize> {
        self.move_slots().into_iter().flatten().collect()
    }

    /// Returns a new board with the blank and the tile at `target` swapped.
    ///
    /// The receiver is left untouched. `target` is expected to come from
    /// `legal_moves`; any in-range position is swapped as given.
    ///
    /// # Panics
    /// Panics if `target >= CELLS`.
    pub fn apply_move(&self, target: usize) -> Board {
        let mut next = *self;
        next.tiles.swap(self.blank_position(), target);
        next
    }

    /// Returns `true` when the board matches `GOAL_BOARD` cell for cell.
    pub fn is_goal(&self) -> bool {
        *self == GOAL_BOARD
    }

    /// Counts pairs of non-blank tiles that appear in the opposite order
    /// of their numeric value when read row-major.
    pub fn inversions(&self) -> usize {
        let tiles: Vec<u8> = self.tiles.iter().copied().filter(|&t| t != 0).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, &a)| tiles[i + 1..].iter().filter(|&&b| b < a).count())
            .sum()
    }

    /// Returns `true` if the goal can be reached from this board.
    ///
    /// On an odd-width grid every move preserves inversion parity, so a board is
    /// reachable exactly when its parity matches the goal's.
    pub fn is_solvable_from_goal(&self) -> bool {
        self.inversions() % 2 == GOAL_BOARD.inversions() % 2
    }

    /// Produces a board by walking `moves` random legal moves away from the goal.
    ///
    /// The walk never immediately undoes its previous move. The same `seed`
    /// always produces the same board, and the result is always solvable.
    pub fn scrambled_with_seed(seed: u64, moves: usize) -> Board {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = GOAL_BOARD;
        let mut previous_blank: Option<usize> = None;

        for _ in 0..moves {
            let candidates: Vec<usize> = board
                .legal_moves()
                .into_iter()
                .filter(|&target| Some(target) != previous_blank)
                .collect();
            let target = candidates[rng.gen_range(0..candidates.len())];
            previous_blank = Some(board.blank_position());
            board = board.apply_move(target);
        }
        board
    }
}

impl fmt::Display for Board {
    /// Renders the board as three `| a | b | c |` rows separated by `| - | - | - |`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.tiles.chunks(SIDE).enumerate() {
            if row > 0 {
                writeln!(f, "| - | - | - |")?;
            }
            writeln!(f, "| {} | {} | {} |", cells[0], cells[1], cells[2])?;
        }
        Ok(())
    }
}
