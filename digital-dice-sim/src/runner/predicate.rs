//! The predicate seam of the trial loop.
//!
//! A predicate decides whether a trial counts and may rewrite the interim
//! value to encode payoffs other than a plain 0/1 indicator. It is the only
//! extension point of [`SimulationEngine`](super::SimulationEngine).

use digital_dice_core::{DiceError, DiceResult, SampleDistribution, SimRng, TrialSampleSet};

use super::engine::SampleChannel;

/// View of the current trial handed to a predicate.
///
/// Gives read access to the sample sets, targeted reloads for dependent
/// trials, and the engine's shared random stream.
pub struct TrialContext<'a, P: SampleDistribution, S: SampleDistribution> {
    pub(crate) trial: u64,
    pub(crate) rng: &'a mut SimRng,
    pub(crate) primary: &'a mut SampleChannel<P>,
    pub(crate) secondary: Option<&'a mut SampleChannel<S>>,
}

impl<'a, P: SampleDistribution, S: SampleDistribution> TrialContext<'a, P, S> {
    /// Zero-based index of this trial across every run of the engine.
    pub fn trial(&self) -> u64 {
        self.trial
    }

    /// Current primary samples.
    pub fn primary(&self) -> &TrialSampleSet<P::Value> {
        &self.primary.samples
    }

    /// Mutable primary samples.
    pub fn primary_mut(&mut self) -> &mut TrialSampleSet<P::Value> {
        &mut self.primary.samples
    }

    /// Current secondary samples, if the engine has a secondary source.
    pub fn secondary(&self) -> Option<&TrialSampleSet<S::Value>> {
        self.secondary.as_deref().map(|channel| &channel.samples)
    }

    /// Mutable secondary samples.
    pub fn secondary_mut(&mut self) -> Option<&mut TrialSampleSet<S::Value>> {
        self.secondary.as_deref_mut().map(|channel| &mut channel.samples)
    }

    /// Redraw one primary slot.
    pub fn reload_primary_one(&mut self, index: usize) -> DiceResult<()> {
        self.primary.reload_one(self.rng, index)
    }

    /// Draw and append one primary value.
    pub fn append_primary(&mut self) -> DiceResult<()> {
        self.primary.append(self.rng)
    }

    /// Redraw every secondary slot. Returns `false` without a secondary source.
    pub fn reload_secondary(&mut self) -> bool {
        match self.secondary.as_deref_mut() {
            Some(channel) => {
                channel.reload(self.rng);
                true
            }
            None => false,
        }
    }

    /// Redraw one secondary slot.
    ///
    /// Without a secondary source every index is out of range.
    pub fn reload_secondary_one(&mut self, index: usize) -> DiceResult<()> {
        match self.secondary.as_deref_mut() {
            Some(channel) => channel.reload_one(self.rng, index),
            None => Err(DiceError::IndexOutOfRange { index, len: 0 }),
        }
    }

    /// The engine's random stream, for draws outside the configured sources.
    pub fn rng(&mut self) -> &mut SimRng {
        &mut *self.rng
    }
}

/// Decides whether a trial counts toward the cumulative total.
///
/// # Example
///
/// ```ignore
/// struct RolledSix;
///
/// impl TrialPredicate<IntegralDistribution> for RolledSix {
///     fn name(&self) -> &str { "rolled_six" }
///     fn evaluate(
///         &mut self,
///         trial: &mut TrialContext<'_, IntegralDistribution, IntegralDistribution>,
///         _interim: &mut f64,
///     ) -> DiceResult<bool> {
///         Ok(trial.primary()[0] == 6)
///     }
/// }
/// ```
pub trait TrialPredicate<P: SampleDistribution, S: SampleDistribution = P> {
    /// Human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Evaluate the current trial.
    ///
    /// When this returns `Ok(true)` the engine adds `*interim` to the
    /// cumulative total. An error aborts the whole run.
    fn evaluate(&mut self, trial: &mut TrialContext<'_, P, S>, interim: &mut f64)
        -> DiceResult<bool>;
}

/// Create a boxed predicate from a name and an infallible closure.
///
/// ```ignore
/// let six = predicate_fn("rolled_six", |trial, _interim| trial.primary()[0] == 6);
/// ```
pub fn predicate_fn<P, S, F>(name: &str, evaluate: F) -> Box<dyn TrialPredicate<P, S>>
where
    P: SampleDistribution + 'static,
    S: SampleDistribution + 'static,
    F: FnMut(&mut TrialContext<'_, P, S>, &mut f64) -> bool + 'static,
{
    Box::new(FnPredicate {
        name: name.to_string(),
        evaluate,
    })
}

/// Create a boxed predicate from a name and a fallible closure.
pub fn try_predicate_fn<P, S, F>(name: &str, evaluate: F) -> Box<dyn TrialPredicate<P, S>>
where
    P: SampleDistribution + 'static,
    S: SampleDistribution + 'static,
    F: FnMut(&mut TrialContext<'_, P, S>, &mut f64) -> DiceResult<bool> + 'static,
{
    Box::new(TryFnPredicate {
        name: name.to_string(),
        evaluate,
    })
}

struct FnPredicate<F> {
    name: String,
    evaluate: F,
}

impl<P, S, F> TrialPredicate<P, S> for FnPredicate<F>
where
    P: SampleDistribution,
    S: SampleDistribution,
    F: FnMut(&mut TrialContext<'_, P, S>, &mut f64) -> bool,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(
        &mut self,
        trial: &mut TrialContext<'_, P, S>,
        interim: &mut f64,
    ) -> DiceResult<bool> {
        Ok((self.evaluate)(trial, interim))
    }
}

struct TryFnPredicate<F> {
    name: String,
    evaluate: F,
}

impl<P, S, F> TrialPredicate<P, S> for TryFnPredicate<F>
where
    P: SampleDistribution,
    S: SampleDistribution,
    F: FnMut(&mut TrialContext<'_, P, S>, &mut f64) -> DiceResult<bool>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(
        &mut self,
        trial: &mut TrialContext<'_, P, S>,
        interim: &mut f64,
    ) -> DiceResult<bool> {
        (self.evaluate)(trial, interim)
    }
}

impl<P, S, T> TrialPredicate<P, S> for Box<T>
where
    P: SampleDistribution,
    S: SampleDistribution,
    T: TrialPredicate<P, S> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn evaluate(
        &mut self,
        trial: &mut TrialContext<'_, P, S>,
        interim: &mut f64,
    ) -> DiceResult<bool> {
        (**self).evaluate(trial, interim)
    }
}
