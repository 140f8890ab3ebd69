//! Error types for puzzle construction and move application.
//!
//! Neither type is used to signal an unsolvable puzzle: that is a normal search
//! outcome, see `solver::SearchOutcome`.

use crate::engine::Color;
use thiserror::Error;

/// A puzzle description that cannot be searched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("a puzzle needs at least 2 tubes, found {0}")]
    TooFewTubes(usize),

    #[error("tube capacity must be at least 1")]
    ZeroCapacity,

    #[error("tube {tube} holds {len} units but capacity is {capacity}")]
    TubeOverflow {
        tube: usize,
        len: usize,
        capacity: usize,
    },

    #[error("color {color} appears {count} times but capacity is {capacity}")]
    ColorOverSupply {
        color: Color,
        count: usize,
        capacity: usize,
    },

    #[error("unrecognized color code '{code}' in tube {tube}")]
    UnknownColor { code: char, tube: usize },

    #[error("cannot fill {requested} tubes with distinct colors, only {available} exist")]
    NotEnoughColors { requested: usize, available: usize },
}

/// Why a pour between two tubes is not legal in a given state.
///
/// Tube indices are 1-based, as in [`crate::engine::Move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PourError {
    #[error("tube {index} does not exist (puzzle has {num_tubes} tubes)")]
    NoSuchTube { index: usize, num_tubes: usize },

    #[error("cannot pour tube {0} into itself")]
    SameTube(usize),

    #[error("tube {0} is empty")]
    EmptySource(usize),

    #[error("top of tube {target} is {found}, not {expected}")]
    ColorMismatch {
        target: usize,
        expected: Color,
        found: Color,
    },

    #[error("tube {target} has room for {free} units, {needed} needed")]
    NotEnoughSpace {
        target: usize,
        free: usize,
        needed: usize,
    },
}
