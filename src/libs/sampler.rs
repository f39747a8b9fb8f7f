//! Injectable source of randomness for the session generators.
//!
//! Every random decision a generator makes is a single draw from an
//! inclusive integer range. [`RangeSampler`] captures exactly that, which
//! lets the command line use `rand` while tests replay a fixed script.
//!
//! ## Implementations
//!
//! - [`RandSampler`]: wraps any [`rand::Rng`]; seedable for reproducible plans
//! - [`ScriptedSampler`]: replays a fixed list of values, cycling when exhausted
//!
//! ## Examples
//!
//! ```rust
//! use fartlek::libs::sampler::{RangeSampler, ScriptedSampler};
//!
//! let mut sampler = ScriptedSampler::new(vec![4, 100]);
//! assert_eq!(sampler.sample(2, 5), 4);
//! assert_eq!(sampler.sample(2, 5), 5); // clamped into range
//! ```

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Draws one value from an inclusive integer range.
pub trait RangeSampler {
    /// Returns a value in `min..=max`. Callers guarantee `min <= max`.
    fn sample(&mut self, min: u32, max: u32) -> u32;
}

impl<S: RangeSampler + ?Sized> RangeSampler for &mut S {
    fn sample(&mut self, min: u32, max: u32) -> u32 {
        (**self).sample(min, max)
    }
}

/// Uniform sampler backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandSampler<R> {
    rng: R,
}

impl<R: Rng> RandSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandSampler<ThreadRng> {
    /// Sampler using the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng())
    }
}

impl RandSampler<StdRng> {
    /// Deterministic sampler: the same seed always yields the same plan.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RangeSampler for RandSampler<R> {
    fn sample(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_range(min..=max)
    }
}

/// Replays a fixed sequence of values.
///
/// Each scripted value is clamped into the requested range, so a script of
/// `[0]` always answers the range minimum and `[u32::MAX]` the maximum. An
/// empty script behaves like [`ScriptedSampler::minimum`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedSampler {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedSampler {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Sampler that always returns the lower bound.
    pub fn minimum() -> Self {
        Self::new(vec![0])
    }

    /// Sampler that always returns the upper bound.
    pub fn maximum() -> Self {
        Self::new(vec![u32::MAX])
    }
}

impl RangeSampler for ScriptedSampler {
    fn sample(&mut self, min: u32, max: u32) -> u32 {
        if self.values.is_empty() {
            return min;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(min, max)
    }
}
