//! Core model for the water sort puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Color`: The units poured between tubes.
//! - `Tube`: A bounded stack of colors, bottom first.
//! - `Move`: A 1-based `(source, target)` pour.
//! - `PuzzleState`: An immutable snapshot of every tube. It enumerates legal moves,
//!   applies pours, and tests whether the puzzle is sorted.
//! - `Game`: An interactive session over a `PuzzleState` with undo history.
use crate::error::{PourError, PuzzleError};
use std::collections::HashMap;
use std::fmt;

/// A unit color.
///
/// Each variant has a one-character code used by the text format in `utils`
/// and an ANSI background color for terminal display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Cyan,
    Magenta,
    Pink,
    Brown,
    White,
    Gray,
    Black,
}

impl Color {
    /// Every color, in palette order.
    pub const ALL: [Color; 12] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Cyan,
        Color::Magenta,
        Color::Pink,
        Color::Brown,
        Color::White,
        Color::Gray,
        Color::Black,
    ];

    /// Converts the color to its character code.
    ///
    /// # Examples
    ///
    /// ```
    /// use watersort_solver::engine::Color;
    /// assert_eq!(Color::Red.to_char(), 'R');
    /// assert_eq!(Color::Gray.to_char(), 'A');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Cyan => 'C',
            Color::Magenta => 'M',
            Color::Pink => 'P',
            Color::Brown => 'N',
            Color::White => 'W',
            Color::Gray => 'A',
            Color::Black => 'K',
        }
    }

    /// Parses a character code produced by [`Color::to_char`].
    pub fn from_char(c: char) -> Option<Color> {
        Color::ALL.iter().copied().find(|color| color.to_char() == c)
    }

    /// Returns the ANSI SGR parameters for the color's background.
    fn to_ansi_color_code(&self) -> &'static str {
        match self {
            Color::Red => "41",
            Color::Orange => "48;5;208",
            Color::Yellow => "43",
            Color::Green => "42",
            Color::Blue => "44",
            Color::Cyan => "46",
            Color::Magenta => "45",
            Color::Pink => "48;5;213",
            Color::Brown => "48;5;94",
            Color::White => "47",
            Color::Gray => "100",
            Color::Black => "40",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Cyan => "cyan",
            Color::Magenta => "magenta",
            Color::Pink => "pink",
            Color::Brown => "brown",
            Color::White => "white",
            Color::Gray => "gray",
            Color::Black => "black",
        };
        f.write_str(name)
    }
}

/// A stack of colored units, stored bottom first.
///
/// A tube does not know its own capacity; the bound is a property of the
/// puzzle and is enforced by `PuzzleState`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tube {
    units: Vec<Color>,
}

impl Tube {
    /// Creates an empty tube.
    pub fn new() -> Self {
        Tube { units: Vec::new() }
    }

    /// Creates a tube holding `units`, the first element at the bottom.
    pub fn from_units(units: Vec<Color>) -> Self {
        Tube { units }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The units from bottom to top.
    pub fn units(&self) -> &[Color] {
        &self.units
    }

    /// The color on top, if any.
    pub fn top(&self) -> Option<Color> {
        self.units.last().copied()
    }

    /// Length of the combined-top run: the top unit plus every unit directly
    /// beneath it sharing its color. Zero for an empty tube.
    ///
    /// # Examples
    /// ```
    /// use watersort_solver::engine::{Color, Tube};
    /// let tube = Tube::from_units(vec![Color::Red, Color::Green, Color::Green]);
    /// assert_eq!(tube.top_run_len(), 2);
    /// assert_eq!(Tube::new().top_run_len(), 0);
    /// ```
    pub fn top_run_len(&self) -> usize {
        match self.top() {
            Some(top) => self.units.iter().rev().take_while(|&&c| c == top).count(),
            None => 0,
        }
    }

    /// A tube is solved when it is empty, or full and a single color.
    pub fn is_solved(&self, capacity: usize) -> bool {
        match self.units.first() {
            None => true,
            Some(&first) => {
                self.units.len() == capacity && self.units.iter().all(|&c| c == first)
            }
        }
    }
}

/// A pour from one tube into another. Both indices are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub source: usize,
    pub target: usize,
}

impl Move {
    pub fn new(source: usize, target: usize) -> Self {
        Move { source, target }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.source, self.target)
    }
}

/// An immutable snapshot of every tube in a puzzle.
///
/// Equality and hashing compare tubes position by position, so two states that
/// differ only by a permutation of tubes are distinct. Search strategies use the
/// state itself as the key of their visited sets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    tubes: Vec<Tube>,
    capacity: usize,
}

impl PuzzleState {
    /// Creates a state from `tubes`, rejecting configurations that cannot be searched.
    ///
    /// # Returns
    /// * `Ok(PuzzleState)` if there are at least two tubes, `capacity >= 1`, no tube
    ///   holds more than `capacity` units and no color has more than `capacity` units
    ///   across the whole puzzle.
    /// * `Err(PuzzleError)` describing the first violation otherwise.
    ///
    /// # Examples
    /// ```
    /// use watersort_solver::engine::{Color, PuzzleState, Tube};
    ///
    /// let tubes = vec![Tube::from_units(vec![Color::Red; 2]), Tube::new()];
    /// assert!(PuzzleState::new(tubes, 2).is_ok());
    /// assert!(PuzzleState::new(vec![Tube::new()], 2).is_err());
    /// ```
    pub fn new(tubes: Vec<Tube>, capacity: usize) -> Result<Self, PuzzleError> {
        if tubes.len() < 2 {
            return Err(PuzzleError::TooFewTubes(tubes.len()));
        }
        if capacity == 0 {
            return Err(PuzzleError::ZeroCapacity);
        }
        for (i, tube) in tubes.iter().enumerate() {
            if tube.len() > capacity {
                return Err(PuzzleError::TubeOverflow {
                    tube: i + 1,
                    len: tube.len(),
                    capacity,
                });
            }
        }

        let state = PuzzleState { tubes, capacity };
        let mut counts: Vec<(Color, usize)> = state.color_counts().into_iter().collect();
        counts.sort_unstable();
        if let Some(&(color, count)) = counts.iter().find(|&&(_, n)| n > capacity) {
            return Err(PuzzleError::ColorOverSupply {
                color,
                count,
                capacity,
            });
        }
        Ok(state)
    }

    pub fn tubes(&self) -> &[Tube] {
        &self.tubes
    }

    pub fn num_tubes(&self) -> usize {
        self.tubes.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the tube at 1-based `index`, or `None` if out of range.
    pub fn tube(&self, index: usize) -> Option<&Tube> {
        index.checked_sub(1).and_then(|i| self.tubes.get(i))
    }

    /// Total number of units of each color present.
    pub fn color_counts(&self) -> HashMap<Color, usize> {
        let mut counts = HashMap::new();
        for tube in &self.tubes {
            for &color in tube.units() {
                *counts.entry(color).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Checks whether `mv` is a legal pour in this state.
    ///
    /// A pour from `i` to `j` is legal when `i != j`, tube `i` is non-empty, and
    /// tube `j` is either empty or has the same top color with room for the whole
    /// combined-top run of tube `i`.
    pub fn check_pour(&self, mv: Move) -> Result<(), PourError> {
        let num_tubes = self.num_tubes();
        let source = self.tube(mv.source).ok_or(PourError::NoSuchTube {
            index: mv.source,
            num_tubes,
        })?;
        let target = self.tube(mv.target).ok_or(PourError::NoSuchTube {
            index: mv.target,
            num_tubes,
        })?;
        if mv.source == mv.target {
            return Err(PourError::SameTube(mv.source));
        }
        let color = source.top().ok_or(PourError::EmptySource(mv.source))?;
        if let Some(found) = target.top() {
            if found != color {
                return Err(PourError::ColorMismatch {
                    target: mv.target,
                    expected: color,
                    found,
                });
            }
            let free = self.capacity - target.len();
            let needed = source.top_run_len();
            if needed > free {
                return Err(PourError::NotEnoughSpace {
                    target: mv.target,
                    free,
                    needed,
                });
            }
        }
        Ok(())
    }

    pub fn can_pour(&self, mv: Move) -> bool {
        self.check_pour(mv).is_ok()
    }

    /// Enumerates every legal move.
    ///
    /// Moves are ordered by source tube, then target tube, both ascending. Depth-first
    /// strategies explore in this order, so it decides which solution they find first.
    pub fn valid_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for (i, source) in self.tubes.iter().enumerate() {
            let Some(color) = source.top() else {
                continue;
            };
            let run = source.top_run_len();
            for (j, target) in self.tubes.iter().enumerate() {
                if i == j {
                    continue;
                }
                let fits = match target.top() {
                    None => true,
                    Some(top) => top == color && target.len() + run <= self.capacity,
                };
                if fits {
                    moves.push(Move::new(i + 1, j + 1));
                }
            }
        }
        moves
    }

    /// Applies a legal move, returning the resulting state.
    ///
    /// The whole combined-top run of the source tube is moved onto the target.
    /// `self` is left untouched.
    ///
    /// # Panics
    /// Panics if `mv` is not legal in this state. Moves taken from
    /// [`PuzzleState::valid_moves`] on the same state are always legal; use
    /// [`PuzzleState::try_pour`] for moves from an untrusted source.
    pub fn pour(&self, mv: Move) -> PuzzleState {
        if let Err(e) = self.check_pour(mv) {
            panic!("illegal pour {} applied: {}", mv, e);
        }
        self.pour_unchecked(mv)
    }

    /// Applies `mv` if it is legal.
    pub fn try_pour(&self, mv: Move) -> Result<PuzzleState, PourError> {
        self.check_pour(mv)?;
        Ok(self.pour_unchecked(mv))
    }

    fn pour_unchecked(&self, mv: Move) -> PuzzleState {
        let mut tubes = self.tubes.clone();
        let source = &mut tubes[mv.source - 1].units;
        let run = source.split_off(source.len() - self.tubes[mv.source - 1].top_run_len());
        tubes[mv.target - 1].units.extend(run);
        PuzzleState {
            tubes,
            capacity: self.capacity,
        }
    }

    /// Checks if every tube is empty or full of a single color.
    ///
    /// Depends only on tube contents, never on how the state was reached.
    pub fn is_solved(&self) -> bool {
        self.tubes.iter().all(|t| t.is_solved(self.capacity))
    }

    /// Formats the state with one line per tube: `Tube N: ` followed by the units
    /// bottom to top. With `ansi` enabled, units are drawn on their color's
    /// background and the label is green for solved tubes, red otherwise.
    pub fn to_string_with_color(&self, ansi: bool) -> String {
        let mut output = String::new();
        for (i, tube) in self.tubes.iter().enumerate() {
            let label = format!("Tube {:<2}:", i + 1);
            if ansi {
                let label_color = if tube.is_solved(self.capacity) { "32" } else { "31" };
                output.push_str(&format!("\x1b[{}m{}\x1b[m ", label_color, label));
                for color in tube.units() {
                    output.push_str(&format!(
                        "\x1b[1;{}m {} \x1b[m",
                        color.to_ansi_color_code(),
                        color.to_char()
                    ));
                }
            } else {
                output.push_str(&label);
                output.push(' ');
                if tube.is_empty() {
                    output.push('-');
                }
                output.extend(tube.units().iter().map(Color::to_char));
            }
            if i + 1 < self.tubes.len() {
                output.push('\n');
            }
        }
        output
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_color(true))
    }
}

/// Manages an interactive session over a puzzle.
///
/// Tracks the current state, the moves made so far and a history of
/// earlier states so that pours can be undone.
#[derive(Clone, Debug)]
pub struct Game {
    state: PuzzleState,
    moves: Vec<Move>,
    history: Vec<PuzzleState>,
}

impl Game {
    pub fn new(initial_state: PuzzleState) -> Self {
        Game {
            state: initial_state,
            moves: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Moves made so far, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn steps(&self) -> usize {
        self.moves.len()
    }

    /// Pours tube `source` into tube `target` (1-based).
    ///
    /// # Returns
    /// * `Ok(n)` with the number of units poured.
    /// * `Err(PourError)` if the pour is illegal; the game is unchanged.
    pub fn pour(&mut self, source: usize, target: usize) -> Result<usize, PourError> {
        let mv = Move::new(source, target);
        let next = self.state.try_pour(mv)?;
        let poured = self.state.tubes[source - 1].top_run_len();
        self.history.push(std::mem::replace(&mut self.state, next));
        self.moves.push(mv);
        Ok(poured)
    }

    /// Reverts the last pour.
    ///
    /// Returns `false` if no pour has been made yet.
    pub fn undo_last_move(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.state = previous;
                self.moves.pop();
                true
            }
            None => false,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// True when the puzzle is unsolved and no legal pour remains.
    pub fn is_stuck(&self) -> bool {
        !self.is_solved() && self.state.valid_moves().is_empty()
    }
}
