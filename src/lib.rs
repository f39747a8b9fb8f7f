//! # Fartlek - stochastic interval session generator
//!
//! A command-line utility that builds randomized interval-training sessions
//! from a budget of active minutes.
//!
//! ## Features
//!
//! - **Fartlek**: (active, recovery) pairs sampled from a difficulty-adjusted
//!   range, each effort tagged with a share of maximum heart rate
//! - **HIIT**: moderate and high-intensity blocks with forced recovery after
//!   four hard blocks and an optional rest every 15 effective minutes
//! - **Reproducible plans**: every random draw goes through an injectable
//!   sampler, seedable from the command line
//! - **Output**: table, plain text or JSON, bracketed by warmup and cooldown
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fartlek::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
