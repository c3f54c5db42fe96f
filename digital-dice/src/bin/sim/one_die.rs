//! Binary target estimating the chance that a die shows six.
//!
//! With `--workers` the trials are split over independently seeded workers.

use std::process;

use clap::Parser;
use digital_dice::prelude::*;
use digital_dice::simulations::{one_die, run_simulation};

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "one_die")]
#[command(about = "Estimate P(six) for a fair die", long_about = None)]
struct Args {
    /// Number of trials
    #[arg(short, long, default_value_t = 1_000_000)]
    trials: u64,

    /// Seed of the random stream (base seed with --workers)
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Split the trials over this many workers
    #[arg(short, long)]
    workers: Option<usize>,
}

fn run(args: &Args) -> DiceResult<SimulationReport> {
    match args.workers {
        Some(workers) => run_partitioned(
            Parallelism::Cores(workers),
            args.trials,
            args.seed,
            |slot| one_die(slot.trials, slot.seed),
        ),
        None => run_simulation(one_die(args.trials, args.seed)?),
    }
}

fn main() {
    digital_dice::init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(report) => {
            println!("{report}");
            eprintln!("{} trials in {:?}", report.trials, report.wall_time);
        }
        Err(error) => {
            eprintln!("ERROR: {error}");
            process::exit(1);
        }
    }
}
