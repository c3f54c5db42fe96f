//! Seeded random engine shared by every draw in one simulation run.
//!
//! A [`SimRng`] is owned by the top-level engine or walker and lent by
//! `&mut` to each draw. There is no thread-local or global engine: the same
//! seed and the same sequence of draws always reproduce the same values.

use rand::distr::uniform::{SampleRange, SampleUniform};
use rand::distr::{Distribution, StandardUniform};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed used when the caller does not pick one.
///
/// Kept at 1 so demo programs and regression tests stay reproducible.
pub const DEFAULT_SEED: u64 = 1;

/// Deterministic pseudo-random engine.
///
/// Uses ChaCha8Rng for reproducible randomness and counts every draw made
/// through it.
#[derive(Debug, Clone)]
pub struct SimRng {
    inner: ChaCha8Rng,
    seed: u64,
    draws: u64,
}

impl Default for SimRng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl SimRng {
    /// Create an engine seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            draws: 0,
        }
    }

    /// The seed this engine was last (re)seeded with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of draws made since the last (re)seed.
    pub fn draw_count(&self) -> u64 {
        self.draws
    }

    /// Restart the stream from `seed` and reset the draw counter.
    pub fn reseed(&mut self, seed: u64) {
        self.inner = ChaCha8Rng::seed_from_u64(seed);
        self.seed = seed;
        self.draws = 0;
    }

    /// Draw one value from `distribution`.
    pub fn sample<T, D>(&mut self, distribution: &D) -> T
    where
        D: Distribution<T> + ?Sized,
    {
        self.draws += 1;
        distribution.sample(&mut self.inner)
    }

    /// Draw a value of type `T` from its standard distribution.
    pub fn random<T>(&mut self) -> T
    where
        StandardUniform: Distribution<T>,
    {
        self.draws += 1;
        self.inner.random()
    }

    /// Draw a value from `range` (half-open or inclusive, as written).
    ///
    /// Panics if the range is empty, like [`rand::Rng::random_range`].
    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.draws += 1;
        self.inner.random_range(range)
    }

    /// Draw an `f64` in `[0.0, 1.0)`.
    pub fn random_f64(&mut self) -> f64 {
        self.random()
    }

    /// Return `true` with the given probability.
    ///
    /// Probabilities outside `[0, 1]` are clamped.
    pub fn random_bool(&mut self, probability: f64) -> bool {
        self.random_f64() < probability.clamp(0.0, 1.0)
    }

    /// Shuffle `values` in place. Counts as a single draw.
    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        self.draws += 1;
        values.shuffle(&mut self.inner);
    }
}

/// Derive the seed of worker `index` from a base seed.
///
/// FNV-1a mixing of the base seed and the worker index, so neighbouring
/// workers get unrelated streams instead of overlapping ones.
pub fn worker_seed(base: u64, index: usize) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    hash ^= base;
    hash = hash.wrapping_mul(0x0100_0000_01b3);
    hash ^= index as u64;
    hash = hash.wrapping_mul(0x0100_0000_01b3);
    hash
}
