//! HIIT session generation.
//!
//! A HIIT session spends a budget of seconds on fixed-length blocks chosen at
//! random: two-minute moderate blocks and one-minute high-intensity blocks,
//! each split into an activity part and a recovery part. Three guards shape
//! the sequence:
//!
//! - **Checkpoint**: after 900 seconds of effective training a rest marker is
//!   emitted and the accumulator starts over
//! - **Tail**: once 120 seconds or less remain, a single moderate interval
//!   covers the rest and closes the session
//! - **Forced recovery**: four high-intensity blocks in a row are followed by
//!   a fixed 30-second recovery
//!
//! ## Decision Order
//!
//! ```text
//! accumulator >= 900 ──▶ Checkpoint (reset accumulator)
//!        │
//! budget <= 120 ───────▶ Tail (final interval, done)
//!        │
//! 4 high in a row ─────▶ ForcedRecovery (-30s budget, counter reset)
//!        │
//! coin flip ───────────▶ moderate 120s block | high 60s block
//! ```
//!
//! Forced recovery time is taken from the budget but is not counted as
//! effective training.

use super::interval::IntervalSpec;
use super::sampler::RangeSampler;
use tracing::{debug, trace};

/// Effective training seconds between two checkpoint markers.
pub const CHECKPOINT_SECONDS: u32 = 900;

/// Remaining budget at or below which the tail interval closes the session.
pub const TAIL_THRESHOLD_SECONDS: i64 = 120;

/// High-intensity blocks allowed in a row before a forced recovery.
pub const MAX_CONSECUTIVE_HIGH: u32 = 4;

pub const FORCED_RECOVERY_SECONDS: u32 = 30;

pub const MODERATE_BLOCK_SECONDS: u32 = 120;

/// Inclusive bounds of the activity share of a moderate block, in percent.
pub const MODERATE_ACTIVITY_PERCENT: (u32, u32) = (75, 91);

pub const HIGH_BLOCK_SECONDS: u32 = 60;

/// Inclusive bounds of the activity share of a high block, in percent.
pub const HIGH_ACTIVITY_PERCENT: (u32, u32) = (67, 84);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HiitState {
    Running,
    ForcedRecovery,
    Checkpoint,
    Tail,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockClass {
    Moderate,
    High,
}

impl BlockClass {
    fn length(self) -> u32 {
        match self {
            BlockClass::Moderate => MODERATE_BLOCK_SECONDS,
            BlockClass::High => HIGH_BLOCK_SECONDS,
        }
    }

    fn activity_percent(self) -> (u32, u32) {
        match self {
            BlockClass::Moderate => MODERATE_ACTIVITY_PERCENT,
            BlockClass::High => HIGH_ACTIVITY_PERCENT,
        }
    }
}

/// Lazily generated HIIT session.
pub struct HiitSession<S> {
    budget: i64,
    consecutive_high: u32,
    effective: u32,
    sampler: S,
    pending: Option<IntervalSpec>,
    finished: bool,
}

impl<S: RangeSampler> HiitSession<S> {
    pub fn new(total_minutes: u32, sampler: S) -> Self {
        debug!(total_minutes, "starting hiit session");
        Self {
            budget: i64::from(total_minutes) * 60,
            consecutive_high: 0,
            effective: 0,
            sampler,
            pending: None,
            finished: false,
        }
    }

    /// Seconds left in the budget.
    pub fn remaining(&self) -> i64 {
        self.budget
    }

    pub fn consecutive_high(&self) -> u32 {
        self.consecutive_high
    }

    /// Effective training seconds since the last checkpoint.
    pub fn effective(&self) -> u32 {
        self.effective
    }

    /// The branch the next decision will take.
    pub fn state(&self) -> HiitState {
        if self.finished {
            HiitState::Done
        } else if self.effective >= CHECKPOINT_SECONDS {
            HiitState::Checkpoint
        } else if self.budget <= TAIL_THRESHOLD_SECONDS {
            HiitState::Tail
        } else if self.consecutive_high == MAX_CONSECUTIVE_HIGH {
            HiitState::ForcedRecovery
        } else {
            HiitState::Running
        }
    }

    fn checkpoint(&mut self) -> IntervalSpec {
        debug!(effective = self.effective, "effective training checkpoint");
        self.effective = 0;
        IntervalSpec::checkpoint()
    }

    fn tail(&mut self) -> IntervalSpec {
        let seconds = self.budget.max(0) as u32;
        debug!(seconds, "closing hiit session with tail interval");
        self.budget = 0;
        self.finished = true;
        IntervalSpec::moderate(seconds)
    }

    fn forced_recovery(&mut self) -> IntervalSpec {
        trace!(remaining = self.budget, "forcing recovery after high-intensity streak");
        self.budget -= i64::from(FORCED_RECOVERY_SECONDS);
        self.consecutive_high = 0;
        IntervalSpec::recovery(FORCED_RECOVERY_SECONDS)
    }

    fn block(&mut self) -> IntervalSpec {
        let class = if self.sampler.sample(0, 1) == 0 {
            BlockClass::Moderate
        } else {
            BlockClass::High
        };
        let (low, high) = class.activity_percent();
        let percent = self.sampler.sample(low, high);
        let length = class.length();
        let activity = length * percent / 100;
        let recovery = length - activity;

        self.budget -= i64::from(length);
        self.effective += length;
        self.pending = Some(IntervalSpec::recovery(recovery));

        debug!(?class, activity, recovery, remaining = self.budget, "hiit block");
        match class {
            BlockClass::Moderate => {
                self.consecutive_high = 0;
                IntervalSpec::moderate(activity)
            }
            BlockClass::High => {
                self.consecutive_high += 1;
                IntervalSpec::high(activity)
            }
        }
    }
}

impl<S: RangeSampler> Iterator for HiitSession<S> {
    type Item = IntervalSpec;

    fn next(&mut self) -> Option<IntervalSpec> {
        if let Some(recovery) = self.pending.take() {
            return Some(recovery);
        }
        match self.state() {
            HiitState::Checkpoint => Some(self.checkpoint()),
            HiitState::Tail => Some(self.tail()),
            HiitState::ForcedRecovery => Some(self.forced_recovery()),
            HiitState::Running => Some(self.block()),
            HiitState::Done => None,
        }
    }
}

/// Generates a complete HIIT session for `total_minutes` of active time.
pub fn run_hiit<S: RangeSampler>(total_minutes: u32, sampler: S) -> Vec<IntervalSpec> {
    HiitSession::new(total_minutes, sampler).collect()
}
