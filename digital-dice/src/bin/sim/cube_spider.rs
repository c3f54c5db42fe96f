//! Binary target walking an absorbing chain.
//!
//! Walks the cube spider chain by default, or any chain described in a JSON
//! file passed with `--chain` (see `chains/cube_spider.json`).

use std::path::PathBuf;
use std::process;

use clap::Parser;
use digital_dice::prelude::*;
use digital_dice::simulations::cube_spider::cube_spider_chain;
use digital_dice::ChainDescription;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "cube_spider")]
#[command(about = "Expected steps to absorption of a Markov chain", long_about = None)]
struct Args {
    /// Number of walks
    #[arg(short, long, default_value_t = 1_000_000)]
    trials: u64,

    /// Seed of the random stream
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// JSON chain description to walk instead of the cube
    #[arg(short, long)]
    chain: Option<PathBuf>,

    /// Print the chain before walking it
    #[arg(long)]
    show_chain: bool,
}

fn run(args: &Args) -> DiceResult<(SimulationReport, u64)> {
    let chain = match &args.chain {
        Some(path) => ChainDescription::from_file(path)?.into_chain()?,
        None => cube_spider_chain()?,
    };
    if args.show_chain {
        print!("{chain}");
    }
    let mut walker = AbsorbingChainWalker::new(chain, args.trials)?
        .with_seed(args.seed)
        .with_label("E(steps)");
    let report = walker.run()?;
    Ok((report, walker.longest_walk()))
}

fn main() {
    digital_dice::init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok((report, longest)) => {
            println!("{report}");
            eprintln!("longest walk: {longest} steps");
        }
        Err(error) => {
            eprintln!("ERROR: {error}");
            process::exit(1);
        }
    }
}
