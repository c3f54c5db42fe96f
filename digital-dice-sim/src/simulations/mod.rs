//! Small probability puzzles with known answers.
//!
//! Used by the binary targets and by integration tests, where the exact
//! answer bounds the Monte Carlo estimate.
//!
//! | Simulation | Estimates | Exact |
//! |------------|-----------|-------|
//! | [`one_die`] | P(a die shows six) | 1/6 |
//! | [`coin`] | P(a biased coin shows 1) | p |
//! | [`dice_payout`] | mean payout of a two-dice game | 7/6 |
//! | [`duel_fixed_threshold`] | P(die beats a fixed 3) | 1/2 |
//! | [`duel_dual_reload`] | P(die beats another die) | 15/36 |
//! | [`three_state`] | steps through a fork to absorption | 3/2 |
//! | [`cube_spider`] | steps for a blind spider to cross a cube | 10 |

pub mod coin;
pub mod cube_spider;
pub mod dice_payout;
pub mod duel;
pub mod one_die;
pub mod three_state;

pub use coin::coin;
pub use cube_spider::cube_spider;
pub use dice_payout::dice_payout;
pub use duel::{duel_dual_reload, duel_fixed_threshold};
pub use one_die::one_die;
pub use three_state::three_state;

use digital_dice_core::DiceResult;

use crate::runner::{Simulation, SimulationReport};

/// Run a simulation once and return its report.
pub fn run_simulation(mut simulation: impl Simulation) -> DiceResult<SimulationReport> {
    simulation.run()
}
