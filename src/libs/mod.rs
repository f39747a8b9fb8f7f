//! Core library modules for the fartlek application.
//!
//! ## Features
//!
//! - **Generation**: fartlek and HIIT generators, intensity classification,
//!   injectable randomness
//! - **Configuration**: validated session parameters, persisted defaults,
//!   interactive prompts
//! - **User Interface**: console rendering, duration formatting, messaging
//!
//! ## Usage
//!
//! ```rust
//! use fartlek::libs::hiit::run_hiit;
//! use fartlek::libs::sampler::RandSampler;
//!
//! let intervals = run_hiit(20, RandSampler::seeded(3));
//! assert_eq!(intervals.iter().map(|i| i.seconds).sum::<u32>(), 20 * 60);
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod fartlek;
pub mod formatter;
pub mod hiit;
pub mod intensity;
pub mod interval;
pub mod messages;
pub mod prompt;
pub mod sampler;
pub mod session;
pub mod view;
