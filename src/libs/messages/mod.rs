//! User-facing messages.
//!
//! - `types`: the [`Message`] enum
//! - `display`: the wording of every message
//! - `macros`: `msg_*!` macros routing messages to stdout or `tracing`

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
