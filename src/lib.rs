//! # Water Sort Solver Library
//!
//! This library provides the puzzle model for the water sort game, where colored
//! units are poured between tubes until every tube is empty or full of one color,
//! and four search strategies to solve it.
//!
//! It is used by three binaries:
//! - `human_player`: Interactive play from the command line.
//! - `ai_solver`: Generates or loads a puzzle and solves it with one or all strategies.
//! - `strategy_evaluator`: Compares the strategies over a batch of seeded puzzles.
//!
//! ## Modules
//! - `engine`: Colors, tubes, moves, the immutable `PuzzleState` (move generation,
//!   pouring, goal test) and the interactive `Game`.
//! - `solver`: Backtracking, depth-first, breadth-first and best-first search.
//! - `heuristics`: Remaining-move estimators used by best-first search.
//! - `generator`: Seeded random puzzle generation.
//! - `utils`: Parsing puzzles from text.
//! - `error`: Error types for malformed puzzles and illegal pours.

pub mod engine;
pub mod error;
pub mod generator;
pub mod heuristics;
pub mod solver;
pub mod utils;
