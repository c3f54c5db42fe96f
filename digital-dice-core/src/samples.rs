//! The values drawn for the current trial.

use std::fmt;
use std::ops::Index;

use crate::distribution::SampleValue;

/// Ordered, mutable sequence of the current trial's drawn values.
///
/// Created by [`RandomVariableSource::load`](crate::RandomVariableSource::load)
/// and refreshed in place by the source's reload operations. Those keep the
/// length fixed; [`set_from_external`](Self::set_from_external) and the
/// source's `append` are the only operations that change it.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialSampleSet<T> {
    values: Vec<T>,
}

impl<T: SampleValue> TrialSampleSet<T> {
    /// Wrap caller-supplied values, e.g. a deterministic state vector.
    pub fn from_values(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Current values in slot order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no slots.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value in slot `index`, if any.
    pub fn get(&self, index: usize) -> Option<T> {
        self.values.get(index).copied()
    }

    /// Iterate over the values in slot order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.values.iter().copied()
    }

    /// Replace the contents wholesale; the length follows `values`.
    pub fn set_from_external(&mut self, values: &[T]) {
        self.values.clear();
        self.values.extend_from_slice(values);
    }

    /// Sum of the current values, in the widened [`SampleValue::Total`].
    pub fn sum(&self) -> T::Total {
        self.values.iter().copied().map(T::widen).sum()
    }

    /// Arithmetic mean, or `None` for an empty set.
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            None
        } else {
            Some(T::total_to_f64(self.sum()) / self.values.len() as f64)
        }
    }

    pub(crate) fn slots_mut(&mut self) -> &mut Vec<T> {
        &mut self.values
    }
}

impl<T> Index<usize> for TrialSampleSet<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<T: fmt::Display> fmt::Display for TrialSampleSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, "  ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
