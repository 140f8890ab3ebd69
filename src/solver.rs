//! Search strategies over the water sort state space.
//!
//! Four interchangeable strategies share the move generator, transition function
//! and goal test of [`PuzzleState`]:
//! - `solve_backtracking`: plain recursion, no memory of states outside the current path.
//! - `solve_dfs`: explicit stack with a visited set.
//! - `solve_bfs`: explicit queue with a visited set; returns a shortest path.
//! - `solve_best_first`: priority queue ordered by moves so far plus a [`Heuristic`].
//!
//! Every strategy reports a [`SearchOutcome`]. Running out of states without reaching
//! a goal is a normal outcome, distinct from hitting a caller supplied [`SearchLimits`].
use crate::engine::{Move, PuzzleState};
use crate::error::PourError;
use crate::heuristics::Heuristic;
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::fmt;

/// The available search strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Strategy {
    #[value(name = "backtrack")]
    Backtracking,
    #[value(name = "dfs")]
    DepthFirst,
    #[value(name = "bfs")]
    BreadthFirst,
    #[value(name = "a-star")]
    BestFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Backtracking,
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::BestFirst,
    ];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Backtracking => "BACKTRACK",
            Strategy::DepthFirst => "DFS",
            Strategy::BreadthFirst => "BFS",
            Strategy::BestFirst => "A*",
        };
        f.pad(name)
    }
}

/// Caller imposed bounds on a search. The default is unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of states to expand (goal-test and generate moves from).
    pub max_expansions: Option<usize>,
    /// States reached by this many moves are goal-tested but not expanded further.
    pub max_depth: Option<usize>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        SearchLimits::default()
    }
}

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Distinct states goal-tested.
    pub expanded: usize,
    /// Successor states produced by applying a move.
    pub generated: usize,
    /// Largest frontier size seen. For backtracking, the deepest recursion.
    pub peak_frontier: usize,
}

/// A path from the initial state to a solved state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub moves: Vec<Move>,
    pub stats: SearchStats,
}

/// The result of running a strategy to completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A solved state was reached.
    Solved(Solution),
    /// Every reachable state was examined; the puzzle has no solution.
    Exhausted(SearchStats),
    /// A [`SearchLimits`] bound stopped the search before it could conclude.
    Aborted(SearchStats),
}

impl SearchOutcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Solved(solution) => &solution.stats,
            SearchOutcome::Exhausted(stats) | SearchOutcome::Aborted(stats) => stats,
        }
    }
}

/// Runs `strategy` from `initial`.
///
/// `heuristic` is only consulted by [`Strategy::BestFirst`].
pub fn solve(
    initial: &PuzzleState,
    strategy: Strategy,
    heuristic: Heuristic,
    limits: &SearchLimits,
) -> SearchOutcome {
    debug!(
        "{} search started on {} tubes of capacity {}",
        strategy,
        initial.num_tubes(),
        initial.capacity()
    );
    let outcome = match strategy {
        Strategy::Backtracking => solve_backtracking(initial, limits),
        Strategy::DepthFirst => solve_dfs(initial, limits),
        Strategy::BreadthFirst => solve_bfs(initial, limits),
        Strategy::BestFirst => solve_best_first(initial, heuristic, limits),
    };
    let stats = outcome.stats();
    match &outcome {
        SearchOutcome::Solved(solution) => debug!(
            "{} found {} moves after expanding {} states ({} generated, peak frontier {})",
            strategy,
            solution.moves.len(),
            stats.expanded,
            stats.generated,
            stats.peak_frontier
        ),
        SearchOutcome::Exhausted(_) => debug!(
            "{} exhausted the state space after expanding {} states",
            strategy, stats.expanded
        ),
        SearchOutcome::Aborted(_) => debug!(
            "{} aborted by search limits after expanding {} states",
            strategy, stats.expanded
        ),
    }
    outcome
}

/// Applies `moves` in order from `initial`, returning the final state.
///
/// Fails on the first move that is not legal where it is applied.
pub fn replay(initial: &PuzzleState, moves: &[Move]) -> Result<PuzzleState, PourError> {
    moves
        .iter()
        .try_fold(initial.clone(), |state, &mv| state.try_pour(mv))
}

/// Tracks statistics and enforces limits for one search run.
struct Budget<'a> {
    limits: &'a SearchLimits,
    stats: SearchStats,
    // Set when `max_depth` kept a state from being expanded; exhausting the frontier
    // afterwards no longer proves the puzzle unsolvable.
    depth_cut: bool,
}

impl<'a> Budget<'a> {
    fn new(limits: &'a SearchLimits) -> Self {
        Budget {
            limits,
            stats: SearchStats::default(),
            depth_cut: false,
        }
    }

    fn out_of_expansions(&self) -> bool {
        self.limits
            .max_expansions
            .map_or(false, |max| self.stats.expanded >= max)
    }

    fn may_extend(&mut self, depth: usize) -> bool {
        match self.limits.max_depth {
            Some(max) if depth >= max => {
                self.depth_cut = true;
                false
            }
            _ => true,
        }
    }

    fn observe_frontier(&mut self, len: usize) {
        self.stats.peak_frontier = self.stats.peak_frontier.max(len);
    }

    fn solved(self, moves: Vec<Move>) -> SearchOutcome {
        SearchOutcome::Solved(Solution {
            moves,
            stats: self.stats,
        })
    }

    fn aborted(self) -> SearchOutcome {
        SearchOutcome::Aborted(self.stats)
    }

    fn exhausted(self) -> SearchOutcome {
        if self.depth_cut {
            SearchOutcome::Aborted(self.stats)
        } else {
            SearchOutcome::Exhausted(self.stats)
        }
    }
}

enum Backtrack {
    Found,
    DeadEnd,
    Aborted,
}

/// Solves by recursive backtracking.
///
/// Moves are tried in [`PuzzleState::valid_moves`] order and the first path that reaches
/// a solved state is returned. No state is remembered across branches, so the same state
/// may be explored many times. A successor already on the current recursion path is
/// skipped, which keeps pour cycles from recursing forever.
pub fn solve_backtracking(initial: &PuzzleState, limits: &SearchLimits) -> SearchOutcome {
    let mut budget = Budget::new(limits);
    let mut path = Vec::new();
    let mut on_path = HashSet::new();
    on_path.insert(initial.clone());

    match backtrack(initial, &mut path, &mut on_path, &mut budget) {
        Backtrack::Found => budget.solved(path),
        Backtrack::DeadEnd => budget.exhausted(),
        Backtrack::Aborted => budget.aborted(),
    }
}

fn backtrack(
    state: &PuzzleState,
    path: &mut Vec<Move>,
    on_path: &mut HashSet<PuzzleState>,
    budget: &mut Budget,
) -> Backtrack {
    if budget.out_of_expansions() {
        return Backtrack::Aborted;
    }
    budget.stats.expanded += 1;

    if state.is_solved() {
        return Backtrack::Found;
    }
    if !budget.may_extend(path.len()) {
        return Backtrack::DeadEnd;
    }

    for mv in state.valid_moves() {
        let next = state.pour(mv);
        budget.stats.generated += 1;
        if on_path.contains(&next) {
            continue;
        }

        on_path.insert(next.clone());
        path.push(mv);
        budget.observe_frontier(path.len());

        match backtrack(&next, path, on_path, budget) {
            Backtrack::Found => return Backtrack::Found,
            Backtrack::Aborted => return Backtrack::Aborted,
            Backtrack::DeadEnd => {}
        }

        // Backtrack: the state may be reached again through another branch.
        path.pop();
        on_path.remove(&next);
    }
    Backtrack::DeadEnd
}

/// A state paired with the moves that reached it.
#[derive(Clone, Debug)]
struct SearchNode {
    state: PuzzleState,
    path: Vec<Move>,
}

impl SearchNode {
    fn root(state: &PuzzleState) -> Self {
        SearchNode {
            state: state.clone(),
            path: Vec::new(),
        }
    }

    fn child(&self, mv: Move, state: PuzzleState) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(mv);
        SearchNode { state, path }
    }
}

/// Order in which an unweighted frontier hands back its nodes.
trait Frontier {
    fn push(&mut self, node: SearchNode);
    fn pop(&mut self) -> Option<SearchNode>;
    fn len(&self) -> usize;
}

/// Last in, first out.
impl Frontier for Vec<SearchNode> {
    fn push(&mut self, node: SearchNode) {
        Vec::push(self, node)
    }

    fn pop(&mut self) -> Option<SearchNode> {
        Vec::pop(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// First in, first out.
impl Frontier for VecDeque<SearchNode> {
    fn push(&mut self, node: SearchNode) {
        self.push_back(node)
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.pop_front()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

/// Solves by depth-first search with an explicit stack.
///
/// Each distinct state is expanded at most once. The path returned is the first one
/// found, not necessarily the shortest.
pub fn solve_dfs(initial: &PuzzleState, limits: &SearchLimits) -> SearchOutcome {
    explore(initial, limits, Vec::<SearchNode>::new())
}

/// Solves by breadth-first search with an explicit queue.
///
/// All states `d` moves away are dequeued before any state `d + 1` moves away, so the
/// path returned has the fewest moves of any solution.
pub fn solve_bfs(initial: &PuzzleState, limits: &SearchLimits) -> SearchOutcome {
    explore(initial, limits, VecDeque::<SearchNode>::new())
}

fn explore<F: Frontier>(
    initial: &PuzzleState,
    limits: &SearchLimits,
    mut frontier: F,
) -> SearchOutcome {
    let mut budget = Budget::new(limits);
    let mut visited: HashSet<PuzzleState> = HashSet::new();

    frontier.push(SearchNode::root(initial));
    budget.observe_frontier(frontier.len());

    while let Some(node) = frontier.pop() {
        if visited.contains(&node.state) {
            trace!("skipping revisited state at depth {}", node.path.len());
            continue;
        }
        if budget.out_of_expansions() {
            return budget.aborted();
        }
        visited.insert(node.state.clone());
        budget.stats.expanded += 1;

        if node.state.is_solved() {
            return budget.solved(node.path);
        }
        if !budget.may_extend(node.path.len()) {
            continue;
        }

        for mv in node.state.valid_moves() {
            let next = node.state.pour(mv);
            budget.stats.generated += 1;
            if !visited.contains(&next) {
                frontier.push(node.child(mv, next));
            }
        }
        budget.observe_frontier(frontier.len());
    }

    budget.exhausted()
}

/// A frontier entry for best-first search.
///
/// `priority` is the moves taken so far plus the heuristic estimate. `sequence` is the
/// insertion order and breaks ties first in, first out.
#[derive(Debug)]
struct RankedNode {
    priority: usize,
    sequence: usize,
    node: SearchNode,
}

impl Ord for RankedNode {
    /// Reversed so that `BinaryHeap`, a max heap, pops the lowest priority first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then(other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for RankedNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankedNode {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl Eq for RankedNode {}

/// Solves by best-first (A*) search.
///
/// The frontier is ordered by ascending `moves so far + heuristic.estimate(state)`,
/// ties going to the node pushed first. The path returned is a shortest one when the
/// heuristic never overestimates the remaining moves ([`Heuristic::is_admissible`]).
pub fn solve_best_first(
    initial: &PuzzleState,
    heuristic: Heuristic,
    limits: &SearchLimits,
) -> SearchOutcome {
    let mut budget = Budget::new(limits);
    let mut visited: HashSet<PuzzleState> = HashSet::new();
    let mut frontier = BinaryHeap::new();
    let mut sequence = 0;

    frontier.push(RankedNode {
        priority: heuristic.estimate(initial),
        sequence,
        node: SearchNode::root(initial),
    });
    budget.observe_frontier(frontier.len());

    while let Some(RankedNode { node, .. }) = frontier.pop() {
        if visited.contains(&node.state) {
            trace!("skipping revisited state at depth {}", node.path.len());
            continue;
        }
        if budget.out_of_expansions() {
            return budget.aborted();
        }
        visited.insert(node.state.clone());
        budget.stats.expanded += 1;

        if node.state.is_solved() {
            return budget.solved(node.path);
        }
        if !budget.may_extend(node.path.len()) {
            continue;
        }

        let cost = node.path.len() + 1;
        for mv in node.state.valid_moves() {
            let next = node.state.pour(mv);
            budget.stats.generated += 1;
            if visited.contains(&next) {
                continue;
            }
            sequence += 1;
            frontier.push(RankedNode {
                priority: cost + heuristic.estimate(&next),
                sequence,
                node: node.child(mv, next),
            });
        }
        budget.observe_frontier(frontier.len());
    }

    budget.exhausted()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use crate::utils::state_from_str_array;

    fn moves(pairs: &[(usize, usize)]) -> Vec<Move> {
        pairs.iter().map(|&(s, t)| Move::new(s, t)).collect()
    }

    fn run_all(state: &PuzzleState, limits: &SearchLimits) -> Vec<(Strategy, SearchOutcome)> {
        Strategy::ALL
            .iter()
            .map(|&s| (s, solve(state, s, Heuristic::default(), limits)))
            .collect()
    }

    fn assert_solves(state: &PuzzleState, outcome: &SearchOutcome, strategy: Strategy) {
        let solution = outcome
            .solution()
            .unwrap_or_else(|| panic!("{} found no solution: {:?}", strategy, outcome));
        let end = replay(state, &solution.moves).unwrap();
        assert!(end.is_solved(), "{} returned a path that does not solve", strategy);
    }

    #[test]
    fn test_two_interleaved_tubes() {
        let state = state_from_str_array(&["RRGG", "GGRR", "-"], 4).unwrap();
        for (strategy, outcome) in run_all(&state, &SearchLimits::unlimited()) {
            assert_solves(&state, &outcome, strategy);
        }

        let bfs = solve_bfs(&state, &SearchLimits::unlimited());
        // Pouring the two top runs into each other leaves two half-filled green
        // tubes, so three pours are needed.
        assert_eq!(
            bfs.solution().unwrap().moves,
            moves(&[(1, 3), (2, 1), (2, 3)])
        );

        let dfs = solve_dfs(&state, &SearchLimits::unlimited());
        assert_eq!(
            dfs.solution().unwrap().moves,
            moves(&[(2, 3), (1, 2), (3, 1)])
        );
    }

    #[test]
    fn test_already_solved_returns_empty_path() {
        let state = state_from_str_array(&["RRRR", "GGGG", "-"], 4).unwrap();
        for (strategy, outcome) in run_all(&state, &SearchLimits::unlimited()) {
            let solution = outcome.solution().unwrap();
            assert!(solution.moves.is_empty(), "{} made moves", strategy);
            assert_eq!(solution.stats.expanded, 1);
            assert_eq!(solution.stats.generated, 0, "{} generated moves", strategy);
        }
    }

    #[test]
    fn test_all_empty_tubes_is_solved() {
        let state = state_from_str_array(&["-", "-", "-"], 4).unwrap();
        for (_, outcome) in run_all(&state, &SearchLimits::unlimited()) {
            assert!(outcome.solution().unwrap().moves.is_empty());
        }
    }

    #[test]
    fn test_no_moves_reports_exhausted() {
        let state = state_from_str_array(&["R", "G"], 2).unwrap();
        for (strategy, outcome) in run_all(&state, &SearchLimits::unlimited()) {
            assert!(
                matches!(outcome, SearchOutcome::Exhausted(_)),
                "{} returned {:?}",
                strategy,
                outcome
            );
            assert_eq!(outcome.stats().expanded, 1);
            assert_eq!(outcome.stats().generated, 0);
        }
    }

    #[test]
    fn test_unsolvable_with_moves_reports_exhausted() {
        // Only two units of each color can never fill a tube of three.
        let state = state_from_str_array(&["RG", "RG"], 3).unwrap();
        for (strategy, outcome) in run_all(&state, &SearchLimits::unlimited()) {
            assert!(
                matches!(outcome, SearchOutcome::Exhausted(_)),
                "{} returned {:?}",
                strategy,
                outcome
            );
            assert!(outcome.stats().generated > 0);
        }
        assert_eq!(
            solve_bfs(&state, &SearchLimits::unlimited()).stats().expanded,
            3
        );
    }

    #[test]
    fn test_three_move_puzzle() {
        let state = state_from_str_array(&["RG", "GR", "-"], 2).unwrap();
        for (strategy, outcome) in run_all(&state, &SearchLimits::unlimited()) {
            assert_solves(&state, &outcome, strategy);
        }
        let bfs = solve_bfs(&state, &SearchLimits::unlimited());
        assert_eq!(bfs.solution().unwrap().moves.len(), 3);
        let astar = solve_best_first(&state, Heuristic::ColorSpread, &SearchLimits::unlimited());
        assert_eq!(astar.solution().unwrap().moves.len(), 3);
    }

    #[test]
    fn test_bfs_is_shortest_on_longer_puzzle() {
        let state = state_from_str_array(&["RGRG", "GRGR", "-", "-"], 4).unwrap();
        let unlimited = SearchLimits::unlimited();

        let bfs = solve_bfs(&state, &unlimited);
        assert_solves(&state, &bfs, Strategy::BreadthFirst);
        assert_eq!(bfs.solution().unwrap().moves.len(), 7);

        for (strategy, outcome) in run_all(&state, &unlimited) {
            assert_solves(&state, &outcome, strategy);
            assert!(outcome.solution().unwrap().moves.len() >= 7);
        }

        let astar = solve_best_first(&state, Heuristic::ColorSpread, &unlimited);
        assert_eq!(astar.solution().unwrap().moves.len(), 7);
    }

    #[test]
    fn test_best_first_expands_fewer_states_than_bfs() {
        let state = state_from_str_array(&["RGRG", "GRGR", "-", "-"], 4).unwrap();
        let unlimited = SearchLimits::unlimited();
        let bfs = solve_bfs(&state, &unlimited);
        let astar = solve_best_first(&state, Heuristic::UnsolvedTubes, &unlimited);
        assert!(astar.stats().expanded < bfs.stats().expanded);
    }

    #[test]
    fn test_searches_are_deterministic() {
        let state = state_from_str_array(&["RGBR", "GBRG", "BRGB", "-", "-"], 4).unwrap();
        let limits = SearchLimits::unlimited();
        for strategy in Strategy::ALL {
            for heuristic in [Heuristic::UnsolvedTubes, Heuristic::ColorSpread] {
                let first = solve(&state, strategy, heuristic, &limits);
                let second = solve(&state, strategy, heuristic, &limits);
                assert_eq!(first, second, "{} is not deterministic", strategy);
            }
        }
    }

    #[test]
    fn test_expansion_limit_aborts() {
        let state = state_from_str_array(&["RGRG", "GRGR", "-", "-"], 4).unwrap();
        let limits = SearchLimits {
            max_expansions: Some(5),
            max_depth: None,
        };
        for (strategy, outcome) in run_all(&state, &limits) {
            assert!(
                matches!(outcome, SearchOutcome::Aborted(_)),
                "{} returned {:?}",
                strategy,
                outcome
            );
            assert_eq!(outcome.stats().expanded, 5);
        }
    }

    #[test]
    fn test_depth_limit_aborts_instead_of_exhausting() {
        let state = state_from_str_array(&["RGRG", "GRGR", "-", "-"], 4).unwrap();
        let limits = SearchLimits {
            max_expansions: None,
            max_depth: Some(3),
        };
        for (strategy, outcome) in run_all(&state, &limits) {
            assert!(
                matches!(outcome, SearchOutcome::Aborted(_)),
                "{} returned {:?}",
                strategy,
                outcome
            );
        }
    }

    #[test]
    fn test_depth_limit_still_finds_short_solutions() {
        let state = state_from_str_array(&["RG", "GR", "-"], 2).unwrap();
        let limits = SearchLimits {
            max_expansions: None,
            max_depth: Some(3),
        };
        let bfs = solve_bfs(&state, &limits);
        assert_eq!(bfs.solution().unwrap().moves.len(), 3);
    }

    #[test]
    fn test_generated_puzzles() {
        let unlimited = SearchLimits::unlimited();
        let capped = SearchLimits {
            max_expansions: Some(200_000),
            max_depth: None,
        };
        for seed in 0..8 {
            let state = generate(3, 2, 3, seed).unwrap();
            let bfs = solve_bfs(&state, &unlimited);
            let shortest = bfs.solution().map(|s| s.moves.len());

            for strategy in [Strategy::DepthFirst, Strategy::BestFirst] {
                let outcome = solve(&state, strategy, Heuristic::default(), &unlimited);
                assert_eq!(outcome.is_solved(), bfs.is_solved());
                if let Some(solution) = outcome.solution() {
                    assert_solves(&state, &outcome, strategy);
                    assert!(Some(solution.moves.len()) >= shortest);
                }
            }

            let admissible = solve_best_first(&state, Heuristic::ColorSpread, &unlimited);
            assert_eq!(admissible.solution().map(|s| s.moves.len()), shortest);

            let backtracking = solve_backtracking(&state, &capped);
            if backtracking.is_solved() {
                assert_solves(&state, &backtracking, Strategy::Backtracking);
            }
        }
    }

    #[test]
    fn test_replay_rejects_illegal_path() {
        let state = state_from_str_array(&["RRGG", "GGRR", "-"], 4).unwrap();
        assert_eq!(
            replay(&state, &moves(&[(1, 3), (1, 3)])),
            Err(PourError::ColorMismatch {
                target: 3,
                expected: crate::engine::Color::Red,
                found: crate::engine::Color::Green,
            })
        );
    }

    #[test]
    fn test_replay_returns_intermediate_states() {
        let state = state_from_str_array(&["RRGG", "GGRR", "-"], 4).unwrap();
        let path = moves(&[(1, 3), (2, 1), (2, 3)]);

        let halfway = replay(&state, &path[..2]).unwrap();
        assert_eq!(halfway, state_from_str_array(&["RRRR", "GG", "GG"], 4).unwrap());
        assert!(!halfway.is_solved());

        assert!(replay(&state, &path).unwrap().is_solved());
        assert_eq!(replay(&state, &[]).unwrap(), state);
    }

    #[test]
    fn test_strategy_names() {
        use clap::ValueEnum;

        let labels: Vec<String> = Strategy::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["BACKTRACK", "DFS", "BFS", "A*"]);
        assert_eq!(format!("{:<5}|", Strategy::BestFirst), "A*   |");

        for (name, strategy) in [
            ("backtrack", Strategy::Backtracking),
            ("dfs", Strategy::DepthFirst),
            ("bfs", Strategy::BreadthFirst),
            ("a-star", Strategy::BestFirst),
        ] {
            assert_eq!(Strategy::from_str(name, false), Ok(strategy));
        }
    }

    #[test]
    fn test_ranked_node_ordering() {
        let node = |priority, sequence| RankedNode {
            priority,
            sequence,
            node: SearchNode {
                state: state_from_str_array(&["-", "-"], 1).unwrap(),
                path: Vec::new(),
            },
        };
        let mut heap = BinaryHeap::new();
        heap.push(node(3, 0));
        heap.push(node(1, 1));
        heap.push(node(1, 2));
        heap.push(node(2, 3));
        let order: Vec<(usize, usize)> = std::iter::from_fn(|| heap.pop())
            .map(|n| (n.priority, n.sequence))
            .collect();
        assert_eq!(order, vec![(1, 1), (1, 2), (2, 3), (3, 0)]);
    }
}
