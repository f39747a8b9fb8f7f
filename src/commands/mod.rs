//! Command-line interface.
//!
//! ## Commands
//!
//! - **`fartlek`**: generate a fartlek session from arguments
//! - **`hiit`**: generate a HIIT session from arguments
//! - **`plan`**: answer a few prompts, then generate
//! - **`init`**: save the answers used as defaults

pub mod fartlek;
pub mod hiit;
pub mod init;
pub mod plan;

use crate::libs::messages::Message;
use crate::libs::sampler::{RandSampler, RangeSampler};
use crate::libs::session::SessionConfig;
use crate::libs::view::{OutputFormat, View};
use crate::{msg_debug, msg_print};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Generate a fartlek session")]
    Fartlek(fartlek::FartlekArgs),
    #[command(about = "Generate a HIIT session")]
    Hiit(hiit::HiitArgs),
    #[command(about = "Plan a session interactively")]
    Plan(plan::PlanArgs),
    #[command(about = "Configure session defaults")]
    Init,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Fartlek(args) => fartlek::cmd(args),
            Commands::Hiit(args) => hiit::cmd(args),
            Commands::Plan(args) => plan::cmd(args),
            Commands::Init => init::cmd(),
        }
    }
}

/// Generates the configured session and prints it.
pub(crate) fn generate_and_show(config: &SessionConfig, seed: Option<u64>, format: OutputFormat) -> Result<()> {
    let mut sampler: Box<dyn RangeSampler> = match seed {
        Some(seed) => {
            msg_debug!(Message::SessionSeed(seed));
            Box::new(RandSampler::seeded(seed))
        }
        None => Box::new(RandSampler::from_entropy()),
    };

    if format != OutputFormat::Json {
        msg_print!(Message::SessionHeader(config.mode(), config.total_minutes()), true);
    }
    let session = config.generate(&mut *sampler);
    View::session(&session, format)
}
