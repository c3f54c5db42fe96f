//! # Digital Dice
//!
//! Seeded Monte Carlo estimates for probability puzzles.
//!
//! ## Crate Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │              digital-dice (this crate)                    │
//! │   Re-exports everything + simulation binaries             │
//! ├───────────────────────────────────────────────────────────┤
//! │                   digital-dice-sim                        │
//! │   • SimulationEngine + predicates  • Absorbing chains     │
//! │   • Partitioned runs               • Canned puzzles       │
//! ├───────────────────────────────────────────────────────────┤
//! │                   digital-dice-core                       │
//! │   SimRng, distributions, sources, sample sets, errors     │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Which Crate to Use
//!
//! | Use case | Crate |
//! |----------|-------|
//! | Everything (recommended) | `digital-dice` |
//! | Distributions and sample sets only | `digital-dice-core` |
//! | Engine and walker | `digital-dice-sim` |

#![deny(missing_docs)]

pub use digital_dice_core::*;
pub use digital_dice_sim::*;

pub mod prelude;

/// Install the `tracing` subscriber used by the binaries.
///
/// `RUST_LOG` overrides the default filter of `warn`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
