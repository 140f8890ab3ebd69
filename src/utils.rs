use crate::engine::{Color, PuzzleState, Tube};
use crate::error::PuzzleError;

/// Parses an array of string slices into a `PuzzleState`.
///
/// Each string slice describes one tube, starting from tube 1. Units are listed
/// bottom to top using the codes of [`Color::to_char`]. An empty string or `-`
/// describes an empty tube. Surrounding whitespace is ignored.
///
/// # Arguments
/// * `s`: One string slice per tube.
/// * `capacity`: The number of units each tube can hold.
///
/// # Returns
/// * `Ok(PuzzleState)` if every character is a known color code and the
///   resulting state passes [`PuzzleState::new`]'s checks.
/// * `Err(PuzzleError)` otherwise.
///
/// # Examples
/// ```
/// use watersort_solver::utils::state_from_str_array;
/// use watersort_solver::engine::Color;
///
/// let state = state_from_str_array(&["RRGG", "GGRR", "-"], 4).unwrap();
/// assert_eq!(state.num_tubes(), 3);
/// assert_eq!(state.tube(1).unwrap().top(), Some(Color::Green));
/// assert!(state.tube(3).unwrap().is_empty());
///
/// assert!(state_from_str_array(&["RXGG", "-"], 4).is_err());
/// ```
pub fn state_from_str_array(s: &[&str], capacity: usize) -> Result<PuzzleState, PuzzleError> {
    let mut tubes = Vec::with_capacity(s.len());
    for (i, row) in s.iter().enumerate() {
        let row = row.trim();
        if row == "-" {
            tubes.push(Tube::new());
            continue;
        }
        let units = row
            .chars()
            .map(|code| {
                Color::from_char(code).ok_or(PuzzleError::UnknownColor { code, tube: i + 1 })
            })
            .collect::<Result<Vec<_>, _>>()?;
        tubes.push(Tube::from_units(units));
    }
    PuzzleState::new(tubes, capacity)
}

/// Parses a puzzle written one tube per line.
///
/// Blank lines and lines starting with `#` are skipped, so an empty tube must
/// be written as `-`.
pub fn state_from_text(text: &str, capacity: usize) -> Result<PuzzleState, PuzzleError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    state_from_str_array(&lines, capacity)
}

/// Formats a state in the format read by [`state_from_text`].
pub fn state_to_text(state: &PuzzleState) -> String {
    state
        .tubes()
        .iter()
        .map(|tube| {
            if tube.is_empty() {
                "-".to_string()
            } else {
                tube.units().iter().map(Color::to_char).collect()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
