//! Validated session parameters and generator selection.
//!
//! A [`SessionConfig`] is built once, from command-line arguments or the
//! interactive wizard, and never changes afterwards. Building it is where
//! user input is checked; once it exists the generators can run without any
//! further validation.
//!
//! ## Admissible Values
//!
//! - Total active minutes: at least [`MIN_ACTIVE_MINUTES`]
//! - Recovery modifier (fartlek): 1, 2 or 3, lower is harder
//! - Difficulty modifier (fartlek): -1 to +2, shifts the `[2, 5]` base range
//!
//! ## Examples
//!
//! ```rust
//! use fartlek::libs::sampler::ScriptedSampler;
//! use fartlek::libs::session::{Mode, SessionConfig};
//!
//! let config = SessionConfig::fartlek(12, 1, 0)?;
//! let session = config.generate(ScriptedSampler::minimum());
//! assert_eq!(session.mode, Mode::Fartlek);
//! assert_eq!(session.intervals.len(), 4);
//! # Ok::<(), fartlek::libs::error::SessionError>(())
//! ```

use super::error::SessionError;
use super::fartlek::run_fartlek;
use super::hiit::run_hiit;
use super::intensity::DurationRange;
use super::interval::IntervalSpec;
use super::messages::Message;
use super::sampler::RangeSampler;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use tracing::info;

/// Sessions shorter than this are not worth generating.
pub const MIN_ACTIVE_MINUTES: u32 = 10;

pub const RECOVERY_MODIFIERS: RangeInclusive<u32> = 1..=3;

pub const DIFFICULTY_MODIFIERS: RangeInclusive<i64> = -1..=2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Fartlek,
    Hiit,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Fartlek => write!(f, "fartlek"),
            Mode::Hiit => write!(f, "HIIT"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Plan {
    Fartlek {
        range: DurationRange,
        recovery_modifier: u32,
    },
    Hiit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    total_minutes: u32,
    plan: Plan,
}

/// A generated session, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub mode: Mode,
    pub intervals: Vec<IntervalSpec>,
}

impl Session {
    /// Sum of all interval lengths, recoveries included.
    pub fn total_seconds(&self) -> u64 {
        self.intervals.iter().map(|i| u64::from(i.seconds)).sum()
    }
}

pub fn validate_total_minutes(minutes: u32) -> Result<u32, SessionError> {
    if minutes < MIN_ACTIVE_MINUTES {
        return Err(SessionError::InvalidConfiguration(
            Message::TooFewActiveMinutes(MIN_ACTIVE_MINUTES).to_string(),
        ));
    }
    Ok(minutes)
}

pub fn validate_recovery_modifier(modifier: u32) -> Result<u32, SessionError> {
    if !RECOVERY_MODIFIERS.contains(&modifier) {
        return Err(SessionError::InvalidConfiguration(
            Message::RecoveryModifierOutOfRange(modifier).to_string(),
        ));
    }
    Ok(modifier)
}

pub fn validate_difficulty(difficulty: i64) -> Result<i64, SessionError> {
    if difficulty > *DIFFICULTY_MODIFIERS.end() {
        return Err(SessionError::InvalidConfiguration(Message::DifficultyTooHard.to_string()));
    }
    if difficulty < *DIFFICULTY_MODIFIERS.start() {
        return Err(SessionError::InvalidConfiguration(Message::DifficultyTooEasy.to_string()));
    }
    Ok(difficulty)
}

impl SessionConfig {
    pub fn fartlek(total_minutes: u32, recovery_modifier: u32, difficulty: i64) -> Result<Self, SessionError> {
        let total_minutes = validate_total_minutes(total_minutes)?;
        let recovery_modifier = validate_recovery_modifier(recovery_modifier)?;
        let range = DurationRange::with_difficulty(validate_difficulty(difficulty)?)?;
        Ok(Self {
            total_minutes,
            plan: Plan::Fartlek {
                range,
                recovery_modifier,
            },
        })
    }

    pub fn hiit(total_minutes: u32) -> Result<Self, SessionError> {
        Ok(Self {
            total_minutes: validate_total_minutes(total_minutes)?,
            plan: Plan::Hiit,
        })
    }

    pub fn mode(&self) -> Mode {
        match self.plan {
            Plan::Fartlek { .. } => Mode::Fartlek,
            Plan::Hiit => Mode::Hiit,
        }
    }

    pub fn total_minutes(&self) -> u32 {
        self.total_minutes
    }

    pub fn range(&self) -> Option<DurationRange> {
        match self.plan {
            Plan::Fartlek { range, .. } => Some(range),
            Plan::Hiit => None,
        }
    }

    pub fn recovery_modifier(&self) -> Option<u32> {
        match self.plan {
            Plan::Fartlek { recovery_modifier, .. } => Some(recovery_modifier),
            Plan::Hiit => None,
        }
    }

    /// Runs the generator matching this configuration.
    pub fn generate<S: RangeSampler>(&self, sampler: S) -> Session {
        let intervals = match self.plan {
            Plan::Fartlek {
                range,
                recovery_modifier,
            } => run_fartlek(self.total_minutes, &range, recovery_modifier, sampler),
            Plan::Hiit => run_hiit(self.total_minutes, sampler),
        };
        info!(mode = %self.mode(), intervals = intervals.len(), "session generated");
        Session {
            mode: self.mode(),
            intervals,
        }
    }
}
