use super::generate_and_show;
use crate::libs::{
    config::Config,
    prompt,
    session::{Mode, SessionConfig},
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PlanArgs {
    #[arg(long, help = "Seed for a reproducible session")]
    seed: Option<u64>,
}

// Asks for the mode first, then only the parameters that mode uses.
pub fn cmd(args: PlanArgs) -> Result<()> {
    let defaults = Config::read_defaults();

    let config = match prompt::mode(Mode::Fartlek)? {
        Mode::Fartlek => {
            let minutes = prompt::total_minutes(defaults.total_minutes)?;
            let difficulty = prompt::difficulty(defaults.difficulty)?;
            let recovery = prompt::recovery_modifier(defaults.recovery_modifier)?;
            SessionConfig::fartlek(minutes, recovery, difficulty)?
        }
        Mode::Hiit => SessionConfig::hiit(prompt::total_minutes(defaults.total_minutes)?)?,
    };

    generate_and_show(&config, args.seed, defaults.format)
}
