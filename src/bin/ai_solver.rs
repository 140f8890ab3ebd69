use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use watersort_solver::engine::PuzzleState;
use watersort_solver::generator::generate;
use watersort_solver::heuristics::Heuristic;
use watersort_solver::solver::{replay, solve, SearchLimits, SearchOutcome, Strategy};
use watersort_solver::utils::state_from_text;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of tubes filled at the start (one color per tube)
    #[clap(short, long, default_value_t = 4)]
    filled: usize,

    /// Number of tubes empty at the start
    #[clap(short, long, default_value_t = 2)]
    empty: usize,

    /// Units per tube
    #[clap(short, long, default_value_t = 4)]
    capacity: usize,

    /// Seed for puzzle generation
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Strategy to run; all strategies are run when omitted
    #[clap(long, value_enum)]
    strategy: Option<Strategy>,

    /// Estimator used by the a-star strategy
    #[clap(long, value_enum, default_value_t = Heuristic::UnsolvedTubes)]
    heuristic: Heuristic,

    /// Give up after expanding this many states
    #[clap(long, default_value_t = 1_000_000)]
    max_expansions: usize,

    /// Do not expand states this many moves deep
    #[clap(long)]
    max_depth: Option<usize>,

    /// Print the puzzle after every move of each solution
    #[clap(long)]
    show_steps: bool,

    /// Path to a puzzle file (one tube per line, bottom to top, `-` for empty).
    /// Overrides --filled, --empty and --seed.
    puzzle_file: Option<PathBuf>,
}

fn read_puzzle_file(path: &PathBuf, capacity: usize) -> Result<PuzzleState> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    state_from_text(&content, capacity)
        .with_context(|| format!("Invalid puzzle format in {}", path.display()))
}

fn report(
    initial: &PuzzleState,
    strategy: Strategy,
    outcome: &SearchOutcome,
    show_steps: bool,
) -> Result<()> {
    match outcome {
        SearchOutcome::Solved(solution) => {
            let moves: Vec<String> = solution.moves.iter().map(ToString::to_string).collect();
            println!("{} Solution: [{}]", strategy, moves.join(", "));
            println!("Total moves: {}", solution.moves.len());
            if show_steps {
                for (i, mv) in solution.moves.iter().enumerate() {
                    let state = replay(initial, &solution.moves[..=i])
                        .context("Solver returned an illegal move")?;
                    println!("\nMove {}: pour {} into {}", i + 1, mv.source, mv.target);
                    println!("{}", state);
                }
            }
        }
        SearchOutcome::Exhausted(_) => {
            println!("{}: No solution found, puzzle is UNSOLVABLE", strategy);
        }
        SearchOutcome::Aborted(_) => {
            println!("{}: Search aborted by limits before reaching a verdict", strategy);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let initial = match &args.puzzle_file {
        Some(path) => {
            let state = read_puzzle_file(path, args.capacity)?;
            println!("Loaded puzzle from {}\n", path.display());
            state
        }
        None => generate(args.filled, args.empty, args.capacity, args.seed).with_context(|| {
            format!(
                "Cannot generate {} filled and {} empty tubes of capacity {}",
                args.filled, args.empty, args.capacity
            )
        })?,
    };
    println!("Initial puzzle:\n{}\n", initial);

    let limits = SearchLimits {
        max_expansions: Some(args.max_expansions),
        max_depth: args.max_depth,
    };
    let strategies = match args.strategy {
        Some(strategy) => vec![strategy],
        None => Strategy::ALL.to_vec(),
    };

    for strategy in strategies {
        info!("Running {} with {:?}", strategy, limits);
        let start = Instant::now();
        let outcome = solve(&initial, strategy, args.heuristic, &limits);
        let elapsed = start.elapsed();

        report(&initial, strategy, &outcome, args.show_steps)?;
        let stats = outcome.stats();
        println!(
            "{} finished in {:.3} ms ({} states expanded, {} generated, peak frontier {})\n",
            strategy,
            elapsed.as_secs_f64() * 1000.0,
            stats.expanded,
            stats.generated,
            stats.peak_frontier
        );
    }
    Ok(())
}
