//! Binary target for the two-dice payout game.

use std::process;

use clap::Parser;
use digital_dice::prelude::*;
use digital_dice::simulations::{dice_payout, run_simulation};

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "dice_payout")]
#[command(about = "Mean payout when matching dice pay twice their face", long_about = None)]
struct Args {
    /// Number of games
    #[arg(short, long, default_value_t = 1_000_000)]
    trials: u64,

    /// Seed of the random stream
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

fn main() {
    digital_dice::init_tracing();
    let args = Args::parse();

    let result = dice_payout(args.trials, args.seed).and_then(run_simulation);
    match result {
        Ok(report) => println!("{report}"),
        Err(error) => {
            eprintln!("ERROR: {error}");
            process::exit(1);
        }
    }
}
