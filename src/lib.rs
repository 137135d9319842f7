//! # 8-Puzzle Solver Library
//!
//! This library explores the state space of the 3x3 sliding-tile puzzle, from
//! a fixed start arrangement to a fixed goal arrangement, scoring every
//! generated state with a selectable heuristic.
//!
//! It is used by two binaries:
//! - `eight_puzzle`: Prints the heuristic menu, reads a selector and solves the
//!   compiled-in start board, tracing every expansion and printing the path.
//! - `heuristic_evaluator`: Runs every heuristic over the start board and a batch
//!   of seeded scrambled boards and prints a comparison table.
//!
//! ## Modules
//! - `engine`: The board (`Board`), the static move table and the goal/start boards.
//! - `heuristics`: Manhattan, misplaced-tiles and Nilsson-style estimates.
//! - `tree`: The arena-backed search tree (`SearchTree`, `Node`, `NodeId`).
//! - `solver`: The fringe, the cycle guard and the `Solver` driver loop.
//! - `error`: `SolveError` and `ParseError`.
//! - `utils`: Menu rendering, selector input and board parsing.

pub mod engine;
pub mod error;
pub mod heuristics;
pub mod solver;
pub mod tree;
pub mod utils;
