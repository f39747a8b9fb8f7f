//! Interval duration formatting utilities for user-friendly display.
//!
//! This module converts raw second and minute counts into the short textual
//! forms used when a session plan is printed. HIIT intervals are measured in
//! seconds and rendered with [`format_seconds`]; fartlek intervals are whole
//! minutes and rendered with [`format_minutes`].
//!
//! ## Format Specifications
//!
//! ### Seconds Format
//! - Durations up to and including one minute stay in seconds: `"45s"`, `"60s"`
//! - Longer durations split into minutes and remaining seconds: `"1m1s"`, `"2m5s"`
//! - No zero padding is applied to either part
//!
//! ### Examples
//! - 0 seconds → "0s"
//! - 60 seconds → "60s"
//! - 61 seconds → "1m1s"
//! - 125 seconds → "2m5s"
//!
//! ## Examples
//!
//! ```rust
//! use fartlek::libs::formatter::{format_minutes, format_seconds};
//!
//! assert_eq!(format_seconds(100), "1m40s");
//! assert_eq!(format_minutes(4), "4min");
//! ```

/// Number of seconds in one minute.
pub const SECONDS_PER_MINUTE: u32 = 60;

/// Formats a second count as `"{m}m{s}s"` or `"{s}s"`.
///
/// Values strictly greater than one minute are split into whole minutes and
/// the remaining seconds. Anything up to 60 seconds is printed as seconds
/// only, so `60` stays `"60s"`.
///
/// # Arguments
///
/// * `seconds` - Interval or session length in seconds
///
/// # Examples
///
/// ```rust
/// use fartlek::libs::formatter::format_seconds;
///
/// assert_eq!(format_seconds(0), "0s");
/// assert_eq!(format_seconds(60), "60s");
/// assert_eq!(format_seconds(61), "1m1s");
/// assert_eq!(format_seconds(125), "2m5s");
/// ```
pub fn format_seconds(seconds: u64) -> String {
    let minute = u64::from(SECONDS_PER_MINUTE);
    if seconds > minute {
        let mins = seconds / minute;
        let secs = seconds % minute;
        format!("{}m{}s", mins, secs)
    } else {
        format!("{}s", seconds)
    }
}

/// Formats a whole-minute count as `"{m}min"`.
pub fn format_minutes(minutes: u32) -> String {
    format!("{}min", minutes)
}
