//! The unit of output shared by both session generators.
//!
//! An [`IntervalSpec`] is produced by a generator and handed straight to the
//! presentation layer; it is never stored. Durations are always held in
//! seconds, fartlek intervals simply being whole multiples of a minute.

use super::intensity::SHORT_INTERVAL_HR_PERCENT;
use serde::{Deserialize, Serialize};

/// What the athlete does during an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalKind {
    ActiveHighIntensity,
    ActiveModerateIntensity,
    Recovery,
    /// Marker after 15 minutes of effective training; the rest is optional.
    RestCheckpoint,
}

/// Target effort attached to an activity interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "label", content = "percent")]
pub enum IntensityLabel {
    /// Percentage of maximum heart rate (fartlek).
    MaxHeartRate(u8),
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalSpec {
    pub kind: IntervalKind,
    pub seconds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<IntensityLabel>,
}

impl IntervalSpec {
    /// Fartlek activity at a share of maximum heart rate.
    ///
    /// The kind follows the classification: the short-interval percentage
    /// is the high-intensity one.
    pub fn heart_rate(seconds: u32, percent: u8) -> Self {
        let kind = if percent >= SHORT_INTERVAL_HR_PERCENT {
            IntervalKind::ActiveHighIntensity
        } else {
            IntervalKind::ActiveModerateIntensity
        };
        Self {
            kind,
            seconds,
            intensity: Some(IntensityLabel::MaxHeartRate(percent)),
        }
    }

    pub fn moderate(seconds: u32) -> Self {
        Self {
            kind: IntervalKind::ActiveModerateIntensity,
            seconds,
            intensity: Some(IntensityLabel::Moderate),
        }
    }

    pub fn high(seconds: u32) -> Self {
        Self {
            kind: IntervalKind::ActiveHighIntensity,
            seconds,
            intensity: Some(IntensityLabel::High),
        }
    }

    pub fn recovery(seconds: u32) -> Self {
        Self {
            kind: IntervalKind::Recovery,
            seconds,
            intensity: None,
        }
    }

    pub fn checkpoint() -> Self {
        Self {
            kind: IntervalKind::RestCheckpoint,
            seconds: 0,
            intensity: None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(
            self.kind,
            IntervalKind::ActiveHighIntensity | IntervalKind::ActiveModerateIntensity
        )
    }
}
