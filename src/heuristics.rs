use crate::engine::{Board, CELLS, GOAL_BOARD};

/// Precomputed grid distance between position `i` and position `v`.
///
/// The Manhattan estimate looks this table up as `DISTANCES[i][board[i]]`,
/// indexing the column by the tile value found at `i`.
pub const DISTANCES: [[u32; CELLS]; CELLS] = [
    [0, 1, 2, 1, 2, 3, 2, 3, 4],
    [1, 0, 1, 2, 1, 2, 3, 2, 3],
    [2, 1, 0, 3, 2, 1, 4, 3, 2],
    [1, 2, 3, 0, 1, 2, 1, 2, 3],
    [2, 1, 2, 1, 0, 1, 2, 1, 2],
    [3, 2, 1, 2, 1, 0, 3, 2, 1],
    [2, 3, 4, 1, 2, 3, 0, 1, 2],
    [3, 2, 3, 2, 1, 2, 1, 0, 1],
    [4, 3, 2, 3, 2, 1, 2, 1, 0],
];

/// The heuristic used to score search nodes, chosen once per run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// Table-driven Manhattan distance (selector `1`).
    Manhattan,
    /// Number of cells differing from the goal, blank included (selector `2`).
    MisplacedTiles,
    /// Manhattan distance plus a sequence score (selector `3`).
    Nilsson,
    /// Any other selector: every board scores `0`.
    Zero,
}

impl Heuristic {
    /// Every selectable heuristic paired with its menu selector, in menu order.
    pub const MENU: [(i64, Heuristic); 3] = [
        (1, Heuristic::Manhattan),
        (2, Heuristic::MisplacedTiles),
        (3, Heuristic::Nilsson),
    ];

    /// Maps a user-supplied selector to a heuristic.
    ///
    /// Unknown selectors are not an error; they yield `Heuristic::Zero`.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::heuristics::Heuristic;
    /// assert_eq!(Heuristic::from_selector(2), Heuristic::MisplacedTiles);
    /// assert_eq!(Heuristic::from_selector(42), Heuristic::Zero);
    /// ```
    pub fn from_selector(selector: i64) -> Self {
        match selector {
            1 => Heuristic::Manhattan,
            2 => Heuristic::MisplacedTiles,
            3 => Heuristic::Nilsson,
            _ => Heuristic::Zero,
        }
    }

    /// Returns the label shown in the selection menu.
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Manhattan => "Manhattan Distance",
            Heuristic::MisplacedTiles => "Misplaced tiles",
            Heuristic::Nilsson => "Nilsson's distance",
            Heuristic::Zero => "None",
        }
    }

    /// Scores `board` with this heuristic.
    pub fn evaluate(&self, board: &Board) -> u32 {
        match self {
            Heuristic::Manhattan => manhattan_distance(board),
            Heuristic::MisplacedTiles => misplaced_tiles(board),
            Heuristic::Nilsson => nilsson_distance(board),
            Heuristic::Zero => 0,
        }
    }
}

/// Calculates the table-driven Manhattan distance of a board.
///
/// Every position `i` contributes `DISTANCES[i][board[i]]`, so the column is
/// chosen by the tile value sitting at `i`. The blank takes part like any tile.
///
/// # Arguments
/// * `board`: A reference to the `Board` to score.
///
/// # Returns
/// The summed distance as `u32`. It is `0` only for the layout `[0, 1, ..., 8]`.
pub fn manhattan_distance(board: &Board) -> u32 {
    board
        .tiles()
        .iter()
        .enumerate()
        .map(|(pos, &tile)| DISTANCES[pos][tile as usize])
        .sum()
}

/// Counts the tiles that are not where `GOAL_BOARD` has them.
///
/// All nine positions are compared, the blank included, so a single slide
/// away from the goal scores `2`.
///
/// # Arguments
/// * `board`: A reference to the `Board` to score.
///
/// # Returns
/// The number of mismatching positions, between `0` and `9`.
pub fn misplaced_tiles(board: &Board) -> u32 {
    board
        .tiles()
        .iter()
        .zip(GOAL_BOARD.tiles())
        .filter(|(a, b)| a != b)
        .count() as u32
}

/// Calculates the sequence part of the Nilsson-style estimate.
///
/// Reading the board row-major, every neighbouring pair `board[i], board[i + 1]`
/// whose values are not ascending by exactly one adds `1`. The bottom-right cell
/// adds another `1` when it differs from the goal's bottom-right cell.
///
/// # Arguments
/// * `board`: A reference to the `Board` to score.
///
/// # Returns
/// The sequence score as `u32`, between `0` and `9`.
pub fn sequence_score(board: &Board) -> u32 {
    let tiles = board.tiles();
    let broken_pairs = tiles.windows(2).filter(|w| w[0] + 1 != w[1]).count() as u32;
    let last = CELLS - 1;
    let last_penalty = (tiles[last] != GOAL_BOARD.tile(last)) as u32;
    broken_pairs + last_penalty
}

/// Calculates the Nilsson-style distance: `manhattan_distance + sequence_score`.
///
/// # Arguments
/// * `board`: A reference to the `Board` to score.
///
/// # Returns
/// The combined estimate as `u32`.
pub fn nilsson_distance(board: &Board) -> u32 {
    manhattan_distance(board) + sequence_score(board)
}
