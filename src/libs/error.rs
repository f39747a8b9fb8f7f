//! Error types raised while building and generating a session.
//!
//! Only two things can go wrong before the generators run: the duration
//! range handed to the classifier is malformed, or the user-supplied session
//! parameters are out of bounds. Running out of budget is never an error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The duration range is empty or starts below one minute.
    #[error("Invalid duration range [{min}, {max}]: expected 1 <= min <= max")]
    InvalidRange { min: i64, max: i64 },

    /// A session parameter is outside its admissible values.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
