//! Toolbox CLI: list, solve, stress-test and benchmark exercises.
//!
//! Usage:
//!   toolbox list                         # List available exercises
//!   toolbox solve gcd < input.txt        # Answer one instance from stdin
//!   toolbox stress                       # Stress every exercise
//!   toolbox bench binary_search --csv out.csv

use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing::info;

use algo_toolbox::error::Result;
use algo_toolbox::input::Tokens;
use algo_toolbox::logging;
use algo_toolbox::registry::{build_registry, Exercise, ExerciseRegistry, SolveOptions};
use algo_toolbox::report::{
    export_csv, print_exercise_box, print_exercise_list, print_header, print_results_table,
    sort_variants, CsvRow,
};
use algo_toolbox::utils::{measure_variants, time_seed, StressConfig, TimingConfig};

#[derive(Parser)]
#[command(name = "toolbox", about = "Algorithmic toolbox exercises")]
#[command(version, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available exercises and their variants
    #[command(alias = "ls")]
    List,

    /// Read one instance from stdin and print the answer
    Solve {
        /// Exercise name (see `toolbox list`)
        exercise: String,

        /// Accept repeated keys where strictly increasing ones are expected
        #[arg(long)]
        allow_duplicates: bool,
    },

    /// Compare every variant against the naive reference on random inputs
    Stress {
        /// Only stress this exercise
        exercise: Option<String>,

        /// Random cases per exercise
        #[arg(long, default_value_t = 500)]
        rounds: usize,

        /// Seed for the case generator (defaults to the clock)
        #[arg(long, env = "TOOLBOX_SEED")]
        seed: Option<u64>,
    },

    /// Time every variant over a range of input sizes
    Bench {
        /// Only benchmark this exercise
        exercise: Option<String>,

        /// Input sizes, comma separated
        #[arg(long, value_delimiter = ',', default_value = "64,256,1024,4096")]
        sizes: Vec<usize>,

        /// Measured runs per variant and size
        #[arg(long, default_value_t = 30)]
        runs: usize,

        /// Seed for inputs and schedule (defaults to the clock)
        #[arg(long, env = "TOOLBOX_SEED")]
        seed: Option<u64>,

        /// Write averages to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    let registry = build_registry();

    match command {
        Commands::List => {
            print_exercise_list(&registry);
            Ok(())
        }
        Commands::Solve {
            exercise,
            allow_duplicates,
        } => {
            let exercise = registry.get(&exercise)?;
            let mut input = Tokens::from_reader(io::stdin().lock())?;
            let answer = exercise.solve(&mut input, &SolveOptions { allow_duplicates })?;
            println!("{answer}");
            Ok(())
        }
        Commands::Stress {
            exercise,
            rounds,
            seed,
        } => {
            let config = StressConfig {
                rounds,
                seed: Some(seed.unwrap_or_else(time_seed)),
            };
            for exercise in select(&registry, exercise.as_deref())? {
                exercise.verify(&config)?;
                println!(
                    "{:<22} ok ({} rounds, seed {})",
                    exercise.name(),
                    config.rounds,
                    config.resolve_seed()
                );
            }
            Ok(())
        }
        Commands::Bench {
            exercise,
            sizes,
            runs,
            seed,
            csv,
        } => {
            let seed = seed.unwrap_or_else(time_seed);
            let config = TimingConfig {
                runs_per_variant: runs,
                seed,
                ..TimingConfig::default()
            };
            info!(seed, runs, ?sizes, "benchmark started");

            print_header("Algorithmic Toolbox Benchmarks");
            let mut rows = Vec::new();
            for exercise in select(&registry, exercise.as_deref())? {
                print_exercise_box(exercise);
                for &size in &sizes {
                    let mut results = measure_variants(exercise.variant_closures(size, seed), &config);
                    sort_variants(&mut results);
                    print_results_table(&results, size);
                    rows.extend(results.into_iter().map(|result| CsvRow {
                        exercise: exercise.name(),
                        size,
                        result,
                    }));
                }
            }

            if let Some(path) = csv {
                export_csv(&path, &rows)?;
                println!("Results written to {}", path.display());
            }
            println!("Note: Speedup is relative to the 'naive' variant.");
            Ok(())
        }
    }
}

/// One exercise by name, or all of them.
fn select<'a>(registry: &'a ExerciseRegistry, name: Option<&str>) -> Result<Vec<&'a dyn Exercise>> {
    match name {
        Some(name) => Ok(vec![registry.get(name)?]),
        None => Ok(registry.all().iter().map(|e| e.as_ref()).collect()),
    }
}
