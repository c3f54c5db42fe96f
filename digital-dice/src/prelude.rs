//! Common imports for writing simulations.

pub use digital_dice_core::{
    DEFAULT_SEED, DiceError, DiceResult, IntegralDistribution, RandomVariableSource,
    RealDistribution, SimRng, TrialSampleSet,
};
pub use digital_dice_sim::{
    AbsorbingChain, AbsorbingChainWalker, ChainState, InterimPolicy, Parallelism, ReloadPolicy,
    Simulation, SimulationBuilder, SimulationReport, StateId, TrialContext, TrialPredicate,
    run_partitioned,
};
