use crate::engine::{Board, CELLS};
use crate::error::{ParseError, SolveError};
use crate::heuristics::Heuristic;
use std::io::{self, BufRead, Write};

/// Writes the heuristic menu followed by the input prompt (no trailing newline).
pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    for (selector, heuristic) in Heuristic::MENU {
        writeln!(out, "{} {}", selector, heuristic.name())?;
    }
    write!(out, "Choose your heuristic: ")?;
    out.flush()
}

/// Writes the fatal-error line for a failed search to the output stream.
///
/// A missing node reads `Fatal: node #<id> points to NULL`; the stream is
/// flushed so the line is visible before the process exits.
pub fn write_fatal<W: Write>(out: &mut W, error: &SolveError) -> io::Result<()> {
    writeln!(out, "Fatal: {}", error)?;
    out.flush()
}

/// Interprets one line of user input as a heuristic selector.
///
/// Surrounding whitespace is ignored. Input that is not an integer yields `0`,
/// which maps to the zero heuristic like any other unknown selector.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::parse_selector;
/// assert_eq!(parse_selector(" 3\n"), 3);
/// assert_eq!(parse_selector("abc"), 0);
/// ```
pub fn parse_selector(line: &str) -> i64 {
    line.trim().parse().unwrap_or(0)
}

/// Reads a single selector line from `input`.
///
/// An empty stream counts as selector `0`.
pub fn read_selector<R: BufRead>(input: &mut R) -> io::Result<i64> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(parse_selector(&line))
}

/// Parses a board from its nine tile digits in row-major order.
///
/// Whitespace, commas and `|` separators are skipped, so both `"283164705"`
/// and `"2 8 3 | 1 6 4 | 7 0 5"` are accepted.
///
/// # Returns
/// * `Ok(Board)` for a permutation of `0..=8`.
/// * `Err(ParseError)` for an unexpected character, a repeated tile,
///   or a tile count other than nine.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::START_BOARD;
/// use eight_puzzle_solver::utils::board_from_str;
///
/// assert_eq!(board_from_str("2 8 3 | 1 6 4 | 7 0 5"), Ok(START_BOARD));
/// assert!(board_from_str("28316470").is_err());
/// ```
pub fn board_from_str(s: &str) -> Result<Board, ParseError> {
    let mut tiles = Vec::with_capacity(CELLS);
    for ch in s.chars() {
        if ch.is_whitespace() || ch == ',' || ch == '|' {
            continue;
        }
        let digit = ch
            .to_digit(10)
            .filter(|&d| (d as usize) < CELLS)
            .ok_or(ParseError::InvalidTile(ch))? as u8;
        if tiles.contains(&digit) {
            return Err(ParseError::DuplicateTile(digit));
        }
        tiles.push(digit);
    }

    let tiles: [u8; CELLS] = tiles
        .try_into()
        .map_err(|v: Vec<u8>| ParseError::WrongTileCount(v.len()))?;
    // Nine distinct digits below nine always form a permutation.
    Board::from_tiles(tiles).ok_or(ParseError::WrongTileCount(CELLS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{GOAL_BOARD, START_BOARD};

    #[test]
    fn test_write_menu() {
        let mut out = Vec::new();
        write_menu(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1 Manhattan Distance\n2 Misplaced tiles\n3 Nilsson's distance\nChoose your heuristic: "
        );
    }

    #[test]
    fn test_write_fatal() {
        let mut out = Vec::new();
        write_fatal(&mut out, &SolveError::FringeExhausted).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Fatal: fringe exhausted before the goal was reached\n"
        );
    }

    #[test]
    fn test_parse_selector() {
        assert_eq!(parse_selector("1"), 1);
        assert_eq!(parse_selector("  2  \n"), 2);
        assert_eq!(parse_selector("-4"), -4);
        assert_eq!(parse_selector(""), 0);
        assert_eq!(parse_selector("two"), 0);
    }

    #[test]
    fn test_read_selector() {
        let mut input = io::Cursor::new("3\nignored\n");
        assert_eq!(read_selector(&mut input).unwrap(), 3);
        let mut empty = io::Cursor::new("");
        assert_eq!(read_selector(&mut empty).unwrap(), 0);
    }

    #[test]
    fn test_board_from_str_valid() {
        assert_eq!(board_from_str("123804765"), Ok(GOAL_BOARD));
        assert_eq!(board_from_str("2,8,3,1,6,4,7,0,5"), Ok(START_BOARD));
        assert_eq!(board_from_str("2 8 3\n1 6 4\n7 0 5\n"), Ok(START_BOARD));
    }

    #[test]
    fn test_board_from_str_invalid_char() {
        assert_eq!(board_from_str("12380476x"), Err(ParseError::InvalidTile('x')));
        assert_eq!(board_from_str("123804769"), Err(ParseError::InvalidTile('9')));
    }

    #[test]
    fn test_board_from_str_duplicate_tile() {
        assert_eq!(board_from_str("123804761"), Err(ParseError::DuplicateTile(1)));
    }

    #[test]
    fn test_board_from_str_wrong_length() {
        assert_eq!(board_from_str("1238"), Err(ParseError::WrongTileCount(4)));
        assert_eq!(board_from_str(""), Err(ParseError::WrongTileCount(0)));
    }
}
