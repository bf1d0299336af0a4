//! First-occurrence binary search over stdin.
//!
//! Input: `n`, then `n` sorted keys, then `k`, then `k` queries, separated
//! by any whitespace. Output: one line with the index of each query's first
//! occurrence, or `-1` when absent.

use std::io;

use clap::{ArgAction, Parser};

use algo_toolbox::divide_and_conquer::binary_search::BinarySearchExercise;
use algo_toolbox::error::Result;
use algo_toolbox::input::Tokens;
use algo_toolbox::logging;
use algo_toolbox::registry::{Exercise, SolveOptions};

#[derive(Parser)]
#[command(name = "binary-search", about = "First occurrence of each query in a sorted sequence")]
#[command(version, long_about = None)]
struct Cli {
    /// Accept repeated keys (non-decreasing input)
    #[arg(long)]
    allow_duplicates: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut input = Tokens::from_reader(io::stdin().lock())?;
    let options = SolveOptions {
        allow_duplicates: cli.allow_duplicates,
    };
    let answer = BinarySearchExercise.solve(&mut input, &options)?;
    println!("{answer}");
    Ok(())
}
