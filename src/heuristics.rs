//! Remaining-move estimators for best-first search.
//!
//! Each estimator is zero on a solved state and grows as tubes get more mixed.
//! Only `ColorSpread` is admissible.
use crate::engine::{Color, PuzzleState};
use std::collections::HashSet;
use std::fmt;

/// Estimators of the number of pours remaining before a state is solved.
///
/// Used by best-first search to rank its frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Heuristic {
    /// Number of tubes that are neither empty nor full of one color.
    ///
    /// Not admissible: a single pour can empty one unsolved tube and complete
    /// another, so it may overestimate by up to a factor of two.
    #[default]
    UnsolvedTubes,
    /// For each color, the number of tubes holding it minus one.
    ///
    /// Admissible: a pour removes its color from at most one tube.
    ColorSpread,
}

impl Heuristic {
    pub fn estimate(&self, state: &PuzzleState) -> usize {
        match self {
            Heuristic::UnsolvedTubes => count_unsolved_tubes(state),
            Heuristic::ColorSpread => count_color_spread(state),
        }
    }

    /// Whether the estimate never exceeds the true number of remaining pours.
    pub fn is_admissible(&self) -> bool {
        matches!(self, Heuristic::ColorSpread)
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::UnsolvedTubes => f.write_str("unsolved-tubes"),
            Heuristic::ColorSpread => f.write_str("color-spread"),
        }
    }
}

/// Counts the tubes that are not in a solved configuration.
///
/// # Arguments
/// * `state`: The state to analyze.
///
/// # Returns
/// Zero exactly when `state.is_solved()`.
pub fn count_unsolved_tubes(state: &PuzzleState) -> usize {
    state
        .tubes()
        .iter()
        .filter(|tube| !tube.is_solved(state.capacity()))
        .count()
}

/// Sums, over every color present, the number of tubes containing that color minus one.
///
/// A sorted puzzle keeps each color in a single tube, so the sum is zero for any
/// solved state.
pub fn count_color_spread(state: &PuzzleState) -> usize {
    let mut placements: HashSet<(Color, usize)> = HashSet::new();
    for (i, tube) in state.tubes().iter().enumerate() {
        for &color in tube.units() {
            placements.insert((color, i));
        }
    }
    let colors = placements.iter().map(|&(c, _)| c).collect::<HashSet<_>>();
    placements.len() - colors.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::state_from_str_array;

    #[test]
    fn test_count_unsolved_tubes() {
        let state = state_from_str_array(&["RRGG", "GGRR", "-"], 4).unwrap();
        assert_eq!(count_unsolved_tubes(&state), 2);

        let partial = state_from_str_array(&["RRRR", "GG", "GG"], 4).unwrap();
        assert_eq!(count_unsolved_tubes(&partial), 2);

        let solved = state_from_str_array(&["RRRR", "GGGG", "-"], 4).unwrap();
        assert_eq!(count_unsolved_tubes(&solved), 0);
    }

    #[test]
    fn test_count_unsolved_tubes_is_state_sensitive() {
        let far = state_from_str_array(&["RGBR", "GBRG", "BRGB", "-"], 4).unwrap();
        let near = state_from_str_array(&["RRRR", "GGGB", "BBBG", "-"], 4).unwrap();
        assert!(count_unsolved_tubes(&near) < count_unsolved_tubes(&far));
    }

    #[test]
    fn test_count_color_spread() {
        let state = state_from_str_array(&["RRGG", "GGRR", "-"], 4).unwrap();
        // Red and green each sit in two tubes.
        assert_eq!(count_color_spread(&state), 2);

        let split = state_from_str_array(&["RRRR", "GG", "GG"], 4).unwrap();
        assert_eq!(count_color_spread(&split), 1);

        let solved = state_from_str_array(&["RRRR", "GGGG", "-"], 4).unwrap();
        assert_eq!(count_color_spread(&solved), 0);
    }

    #[test]
    fn test_color_spread_drops_by_at_most_one_per_pour() {
        let state = state_from_str_array(&["RGBR", "GBRG", "BRGB", "-", "-"], 4).unwrap();
        let h = Heuristic::ColorSpread;
        for mv in state.valid_moves() {
            let next = state.pour(mv);
            assert!(h.estimate(&state) <= h.estimate(&next) + 1);
        }
    }

    #[test]
    fn test_heuristic_dispatch() {
        let state = state_from_str_array(&["RRGG", "GGRR", "RG", "-"], 5).unwrap();
        assert_eq!(Heuristic::UnsolvedTubes.estimate(&state), 3);
        assert_eq!(Heuristic::ColorSpread.estimate(&state), 4);
        assert!(Heuristic::ColorSpread.is_admissible());
        assert!(!Heuristic::UnsolvedTubes.is_admissible());
        assert_eq!(Heuristic::default(), Heuristic::UnsolvedTubes);
    }
}
