use super::generate_and_show;
use crate::libs::{config::Config, session::SessionConfig, view::OutputFormat};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct FartlekArgs {
    #[arg(long, short, help = "Active minutes, warmup and cooldown excluded (at least 10)")]
    minutes: Option<u32>,
    #[arg(long, short, help = "Recovery modifier: 1 (hardest) to 3")]
    recovery: Option<u32>,
    #[arg(long, short, allow_negative_numbers = true, help = "Difficulty modifier: -1 to +2")]
    difficulty: Option<i64>,
    #[arg(long, help = "Seed for a reproducible session")]
    seed: Option<u64>,
    #[arg(long, short, value_enum, help = "Output format")]
    format: Option<OutputFormat>,
}

pub fn cmd(args: FartlekArgs) -> Result<()> {
    let defaults = Config::read_defaults();
    let config = SessionConfig::fartlek(
        args.minutes.unwrap_or(defaults.total_minutes),
        args.recovery.unwrap_or(defaults.recovery_modifier),
        args.difficulty.unwrap_or(defaults.difficulty),
    )?;
    generate_and_show(&config, args.seed, args.format.unwrap_or(defaults.format))
}
