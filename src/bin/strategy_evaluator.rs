use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use watersort_solver::generator::generate;
use watersort_solver::heuristics::Heuristic;
use watersort_solver::solver::{solve, SearchLimits, SearchOutcome, Strategy};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of puzzles to evaluate
    #[clap(short, long, default_value_t = 20)]
    puzzles: u64,

    /// First seed; puzzle i uses seed `start_seed + i`
    #[clap(long, default_value_t = 0)]
    start_seed: u64,

    #[clap(short, long, default_value_t = 4)]
    filled: usize,

    #[clap(short, long, default_value_t = 2)]
    empty: usize,

    #[clap(short, long, default_value_t = 4)]
    capacity: usize,

    /// Estimator used by the a-star strategy
    #[clap(long, value_enum, default_value_t = Heuristic::UnsolvedTubes)]
    heuristic: Heuristic,

    /// Per-search expansion cap
    #[clap(long, default_value_t = 500_000)]
    max_expansions: usize,
}

#[derive(Default)]
struct Tally {
    solved: u32,
    exhausted: u32,
    aborted: u32,
    total_moves: usize,
    total_expanded: usize,
    total_time: Duration,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let limits = SearchLimits {
        max_expansions: Some(args.max_expansions),
        max_depth: None,
    };

    let mut tallies: HashMap<Strategy, Tally> = HashMap::new();

    println!("Starting strategy evaluation for {} puzzles...", args.puzzles);

    for offset in 0..args.puzzles {
        let seed = args.start_seed + offset;
        let puzzle = generate(args.filled, args.empty, args.capacity, seed)
            .with_context(|| format!("Cannot generate puzzle for seed {}", seed))?;

        println!("\nEvaluating puzzle {} (Seed: {})", offset, seed);

        for strategy in Strategy::ALL {
            let start = Instant::now();
            let outcome = solve(&puzzle, strategy, args.heuristic, &limits);
            let elapsed = start.elapsed();

            let tally = tallies.entry(strategy).or_default();
            tally.total_expanded += outcome.stats().expanded;
            tally.total_time += elapsed;
            let verdict = match &outcome {
                SearchOutcome::Solved(solution) => {
                    tally.solved += 1;
                    tally.total_moves += solution.moves.len();
                    format!("{} moves", solution.moves.len())
                }
                SearchOutcome::Exhausted(_) => {
                    tally.exhausted += 1;
                    "unsolvable".to_string()
                }
                SearchOutcome::Aborted(_) => {
                    tally.aborted += 1;
                    warn!("{} hit the expansion cap on seed {}", strategy, seed);
                    "aborted".to_string()
                }
            };
            println!(
                "  Strategy: {:<10}, Result: {:<10}, Expanded: {}",
                strategy,
                verdict,
                outcome.stats().expanded
            );
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of puzzles evaluated: {}", args.puzzles);
    println!("\n--- Averages ---");

    for strategy in Strategy::ALL {
        let Some(tally) = tallies.get(&strategy) else {
            continue;
        };
        let avg_moves = if tally.solved > 0 {
            tally.total_moves as f64 / tally.solved as f64
        } else {
            0.0
        };
        let runs = (tally.solved + tally.exhausted + tally.aborted).max(1) as f64;
        println!(
            "Strategy {:<10}: solved {}, unsolvable {}, aborted {}, \
             avg moves {:.2}, avg expanded {:.0}, avg time {:.3} ms",
            strategy,
            tally.solved,
            tally.exhausted,
            tally.aborted,
            avg_moves,
            tally.total_expanded as f64 / runs,
            tally.total_time.as_secs_f64() * 1000.0 / runs
        );
    }
    Ok(())
}
