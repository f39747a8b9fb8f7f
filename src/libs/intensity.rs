//! Admissible interval lengths and relative intensity classification.
//!
//! A [`DurationRange`] is the inclusive set of interval lengths (in minutes)
//! a fartlek session may draw from. The same range doubles as the reference
//! distribution for [`classify`]: intervals longer than the range median are
//! run at a lower share of maximum heart rate than the shorter ones.
//!
//! ## Difficulty
//!
//! The base range is `[2, 5]` minutes. A difficulty modifier shifts both
//! bounds, so `+1` yields `[3, 6]` and `-1` yields `[1, 4]`.
//!
//! ## Examples
//!
//! ```rust
//! use fartlek::libs::intensity::{classify, DurationRange};
//!
//! let range = DurationRange::with_difficulty(0)?;
//! assert_eq!((range.min(), range.max()), (2, 5));
//! assert_eq!(classify(3, &range), 85);
//! assert_eq!(classify(4, &range), 70);
//! # Ok::<(), fartlek::libs::error::SessionError>(())
//! ```

use super::error::SessionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of the base duration range, in minutes.
pub const BASE_MIN_MINUTES: i64 = 2;

/// Upper bound of the base duration range, in minutes.
pub const BASE_MAX_MINUTES: i64 = 5;

/// Heart-rate share for intervals longer than the range median.
pub const LONG_INTERVAL_HR_PERCENT: u8 = 70;

/// Heart-rate share for intervals at or below the range median.
pub const SHORT_INTERVAL_HR_PERCENT: u8 = 85;

/// Inclusive range of interval lengths in minutes.
///
/// Always non-empty with `min >= 1`; the only way to build one is through
/// [`DurationRange::new`] (or deserialization, which runs the same check).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct DurationRange {
    min: u32,
    max: u32,
}

#[derive(Serialize, Deserialize)]
struct RawRange {
    min: i64,
    max: i64,
}

impl DurationRange {
    /// Builds a range from inclusive bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidRange`] when `min < 1` or `min > max`.
    pub fn new(min: i64, max: i64) -> Result<Self, SessionError> {
        if min < 1 || min > max || max > i64::from(u32::MAX) {
            return Err(SessionError::InvalidRange { min, max });
        }
        Ok(Self {
            min: min as u32,
            max: max as u32,
        })
    }

    /// Derives the session range from the base bounds and a difficulty modifier.
    pub fn with_difficulty(difficulty: i64) -> Result<Self, SessionError> {
        Self::new(BASE_MIN_MINUTES + difficulty, BASE_MAX_MINUTES + difficulty)
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Median of the integer values in the range. May be a half-integer.
    ///
    /// This is the threshold [`classify`] compares against.
    pub fn median(&self) -> f64 {
        (f64::from(self.min) + f64::from(self.max)) / 2.0
    }

    /// Whether a sampled length falls inside the range.
    pub fn contains(&self, length: u32) -> bool {
        (self.min..=self.max).contains(&length)
    }
}

impl TryFrom<RawRange> for DurationRange {
    type Error = SessionError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl From<DurationRange> for RawRange {
    fn from(range: DurationRange) -> Self {
        RawRange {
            min: i64::from(range.min),
            max: i64::from(range.max),
        }
    }
}

impl fmt::Display for DurationRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Maps an interval length to a relative heart-rate percentage.
///
/// Returns [`LONG_INTERVAL_HR_PERCENT`] when `length` is strictly greater
/// than [`DurationRange::median`] and [`SHORT_INTERVAL_HR_PERCENT`]
/// otherwise. The comparison is done in integers, so it agrees with
/// `f64::from(length) > range.median()` for every input.
pub fn classify(length: u32, range: &DurationRange) -> u8 {
    // length > (min + max) / 2, kept in integers so half-integer medians compare exactly
    if u64::from(length) * 2 > u64::from(range.min) + u64::from(range.max) {
        LONG_INTERVAL_HR_PERCENT
    } else {
        SHORT_INTERVAL_HR_PERCENT
    }
}
