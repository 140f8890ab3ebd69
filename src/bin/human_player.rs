use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use watersort_solver::engine::Game;
use watersort_solver::generator::generate;
use watersort_solver::utils::state_from_text;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of tubes filled at the start
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

    /// Play a puzzle from a file instead of a generated one
    puzzle_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let initial = match &args.puzzle_file {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            state_from_text(&content, args.capacity)?
        }
        None => generate(args.filled, args.empty, args.capacity, args.seed)?,
    };
    let mut game = Game::new(initial);
    println!("Welcome to Water Sort!");

    loop {
        println!("---------------------");
        println!("Steps: {}", game.steps());
        println!("{}", game.state());

        if game.is_solved() {
            println!();
            println!("---------------------");
            println!("SORTED in {} steps!", game.steps());
            println!("---------------------");
            break;
        }
        if game.is_stuck() {
            println!("No legal pour remains. Undo with 'u' or quit with 'q'.");
        }

        print!("Enter your move (source target), or 'u' to undo, 'q' to quit: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let trimmed_input = input.trim();

        if trimmed_input == "q" {
            println!("Thanks for playing!");
            break;
        }

        if trimmed_input == "u" {
            if game.undo_last_move() {
                println!("Move undone.");
            } else {
                println!("Nothing to undo.");
            }
            continue;
        }

        let parts: Vec<&str> = trimmed_input.split_whitespace().collect();
        match parts.as_slice() {
            [a, b] => match (a.parse::<usize>(), b.parse::<usize>()) {
                (Ok(source), Ok(target)) => match game.pour(source, target) {
                    Ok(poured) => println!(
                        "Poured {} units from tube {} to tube {}.",
                        poured, source, target
                    ),
                    Err(e) => println!("Invalid move: {}.", e),
                },
                _ => println!(
                    "Invalid input: Please enter tube numbers (e.g., '1 3'), 'u', or 'q'."
                ),
            },
            _ => println!("Invalid input format. Use 'source target', 'u', or 'q'."),
        }
    }
    Ok(())
}
