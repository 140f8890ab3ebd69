//! Random puzzle generation.
//!
//! Puzzles are produced from a seed so that a run can be reproduced, the same
//! way the board generator seeds `SmallRng`.
use crate::engine::{Color, PuzzleState, Tube};
use crate::error::PuzzleError;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Generates a shuffled puzzle with `filled` full tubes followed by `empty` empty ones.
///
/// `filled` distinct colors are drawn from the palette and each contributes exactly
/// `capacity` units, so every color can end up filling one tube. The units are then
/// shuffled across the filled tubes.
///
/// # Arguments
/// * `filled`: Number of tubes filled at the start (and number of colors).
/// * `empty`: Number of tubes empty at the start.
/// * `capacity`: Units per tube.
/// * `seed`: Seed for the random number generator. The same arguments always
///   produce the same puzzle.
///
/// # Returns
/// * `Err(PuzzleError::NotEnoughColors)` if `filled` exceeds the palette size.
/// * Any error from [`PuzzleState::new`] (fewer than two tubes, zero capacity).
///
/// # Examples
/// ```
/// use watersort_solver::generator::generate;
///
/// let puzzle = generate(3, 2, 4, 7).unwrap();
/// assert_eq!(puzzle.num_tubes(), 5);
/// assert_eq!(puzzle, generate(3, 2, 4, 7).unwrap());
/// ```
pub fn generate(
    filled: usize,
    empty: usize,
    capacity: usize,
    seed: u64,
) -> Result<PuzzleState, PuzzleError> {
    if filled > Color::ALL.len() {
        return Err(PuzzleError::NotEnoughColors {
            requested: filled,
            available: Color::ALL.len(),
        });
    }
    if capacity == 0 {
        return Err(PuzzleError::ZeroCapacity);
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let colors: Vec<Color> = Color::ALL
        .choose_multiple(&mut rng, filled)
        .copied()
        .collect();

    let mut units: Vec<Color> = colors
        .iter()
        .flat_map(|&c| std::iter::repeat(c).take(capacity))
        .collect();
    units.shuffle(&mut rng);

    let mut tubes: Vec<Tube> = units
        .chunks(capacity)
        .map(|chunk| Tube::from_units(chunk.to_vec()))
        .collect();
    tubes.extend((0..empty).map(|_| Tube::new()));

    PuzzleState::new(tubes, capacity)
}
