//! Fartlek session generation.
//!
//! A fartlek session is a run of (active, recovery) pairs drawn against a
//! budget of active minutes. While more than ten minutes remain, both
//! lengths are sampled from the session's [`DurationRange`]; once the budget
//! falls into the `(1, 10]` window, a single closing pair splits what is
//! left according to the recovery modifier.
//!
//! ## Generation States
//!
//! ```text
//! ┌──────────────┐  budget <= 10   ┌──────────────────┐  emit once  ┌────────┐
//! │   Sampling   │────────────────▶│  ShortRemainder  │────────────▶│  Done  │
//! │ budget > 10  │                 │ 1 < budget <= 10 │             │        │
//! └──────────────┘                 └──────────────────┘             └────────┘
//!         │                          budget <= 1                        ▲
//!         └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Recovery Modifier
//!
//! The sampled recovery is multiplied by the modifier (1 to 3, lower is
//! harder). In the closing pair the active share is
//! `budget / (modifier + 1)` and recovery takes the rest. The pair is
//! emitted even when that share rounds down to a 0-minute effort.
//!
//! ## Examples
//!
//! ```rust
//! use fartlek::libs::fartlek::run_fartlek;
//! use fartlek::libs::intensity::DurationRange;
//! use fartlek::libs::sampler::ScriptedSampler;
//!
//! let range = DurationRange::new(2, 5)?;
//! let intervals = run_fartlek(12, &range, 1, ScriptedSampler::minimum());
//! let minutes: Vec<u32> = intervals.iter().map(|i| i.seconds / 60).collect();
//! assert_eq!(minutes, vec![2, 2, 4, 4]);
//! # Ok::<(), fartlek::libs::error::SessionError>(())
//! ```

use super::formatter::SECONDS_PER_MINUTE;
use super::intensity::{classify, DurationRange};
use super::interval::IntervalSpec;
use super::sampler::RangeSampler;
use tracing::debug;

/// Budget above which both interval lengths are sampled.
pub const SAMPLING_THRESHOLD_MINUTES: i64 = 10;

/// Budget at or below which no further interval is emitted.
pub const EXHAUSTED_THRESHOLD_MINUTES: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FartlekState {
    Sampling,
    ShortRemainder,
    Done,
}

/// Lazily generated fartlek session.
///
/// Each pull yields one [`IntervalSpec`]; a pair is decided in one step and
/// its recovery half is held back until the next pull.
pub struct FartlekSession<S> {
    range: DurationRange,
    recovery_modifier: u32,
    budget: i64,
    sampler: S,
    pending: Option<IntervalSpec>,
    closed: bool,
}

impl<S: RangeSampler> FartlekSession<S> {
    pub fn new(total_minutes: u32, range: DurationRange, recovery_modifier: u32, sampler: S) -> Self {
        debug!(total_minutes, %range, recovery_modifier, "starting fartlek session");
        Self {
            range,
            recovery_modifier,
            budget: i64::from(total_minutes),
            sampler,
            pending: None,
            closed: false,
        }
    }

    /// Minutes left in the budget. Negative once a sampled pair overshoots.
    pub fn remaining(&self) -> i64 {
        self.budget
    }

    pub fn state(&self) -> FartlekState {
        if self.closed || self.budget <= EXHAUSTED_THRESHOLD_MINUTES {
            FartlekState::Done
        } else if self.budget > SAMPLING_THRESHOLD_MINUTES {
            FartlekState::Sampling
        } else {
            FartlekState::ShortRemainder
        }
    }

    fn sample_pair(&mut self) -> (u32, u32) {
        let active = self.sampler.sample(self.range.min(), self.range.max());
        debug_assert!(self.range.contains(active), "sampler left {}", self.range);
        let recovery = self
            .sampler
            .sample(active, self.range.max())
            .saturating_mul(self.recovery_modifier);
        self.budget -= i64::from(active) + i64::from(recovery);
        debug!(active, recovery, remaining = self.budget, "sampled fartlek pair");
        (active, recovery)
    }

    fn split_remainder(&mut self) -> (u32, u32) {
        let budget = self.budget;
        let active = budget / (i64::from(self.recovery_modifier) + 1);
        let recovery = budget - active;
        self.budget -= active + recovery;
        self.closed = true;
        debug!(active, recovery, "closing fartlek pair");
        (active as u32, recovery as u32)
    }

    fn emit(&mut self, active: u32, recovery: u32) -> Option<IntervalSpec> {
        self.pending = Some(IntervalSpec::recovery(to_seconds(recovery)));
        let percent = classify(active, &self.range);
        Some(IntervalSpec::heart_rate(to_seconds(active), percent))
    }
}

impl<S: RangeSampler> Iterator for FartlekSession<S> {
    type Item = IntervalSpec;

    fn next(&mut self) -> Option<IntervalSpec> {
        if let Some(recovery) = self.pending.take() {
            return Some(recovery);
        }
        match self.state() {
            FartlekState::Sampling => {
                let (active, recovery) = self.sample_pair();
                self.emit(active, recovery)
            }
            FartlekState::ShortRemainder => {
                let (active, recovery) = self.split_remainder();
                self.emit(active, recovery)
            }
            FartlekState::Done => None,
        }
    }
}

fn to_seconds(minutes: u32) -> u32 {
    minutes.saturating_mul(SECONDS_PER_MINUTE)
}

/// Generates a complete fartlek session.
///
/// # Arguments
///
/// * `total_minutes` - Active-minute budget (warmup and cooldown excluded)
/// * `range` - Admissible interval lengths in minutes
/// * `recovery_modifier` - Recovery multiplier, 1 (hardest) to 3
/// * `sampler` - Source of the random draws
pub fn run_fartlek<S: RangeSampler>(
    total_minutes: u32,
    range: &DurationRange,
    recovery_modifier: u32,
    sampler: S,
) -> Vec<IntervalSpec> {
    FartlekSession::new(total_minutes, *range, recovery_modifier, sampler).collect()
}
