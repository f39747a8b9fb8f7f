use super::generate_and_show;
use crate::libs::{config::Config, session::SessionConfig, view::OutputFormat};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct HiitArgs {
    #[arg(long, short, help = "Active minutes, warmup and cooldown excluded (at least 10)")]
    minutes: Option<u32>,
    #[arg(long, help = "Seed for a reproducible session")]
    seed: Option<u64>,
    #[arg(long, short, value_enum, help = "Output format")]
    format: Option<OutputFormat>,
}

pub fn cmd(args: HiitArgs) -> Result<()> {
    let defaults = Config::read_defaults();
    let config = SessionConfig::hiit(args.minutes.unwrap_or(defaults.total_minutes))?;
    generate_and_show(&config, args.seed, args.format.unwrap_or(defaults.format))
}
