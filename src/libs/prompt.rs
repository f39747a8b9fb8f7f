//! Interactive prompts for session parameters.
//!
//! Each prompt re-asks until the answer passes the same validation
//! [`SessionConfig`](super::session::SessionConfig) applies, so a value read
//! here can never be rejected later. Both the `plan` command and the
//! preferences wizard go through these helpers.

use super::messages::Message;
use super::session::{validate_difficulty, validate_recovery_modifier, validate_total_minutes, Mode};
use super::view::OutputFormat;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

const MODES: [Mode; 2] = [Mode::Fartlek, Mode::Hiit];
const FORMATS: [OutputFormat; 3] = [OutputFormat::Table, OutputFormat::Plain, OutputFormat::Json];

pub fn mode(default: Mode) -> Result<Mode> {
    let items: Vec<String> = MODES.iter().map(|mode| mode.to_string()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectMode.to_string())
        .items(&items)
        .default(MODES.iter().position(|m| *m == default).unwrap_or(0))
        .interact()?;
    Ok(MODES[selection])
}

pub fn total_minutes(default: u32) -> Result<u32> {
    let minutes = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTotalMinutes.to_string())
        .default(default)
        .validate_with(|input: &u32| validate_total_minutes(*input).map(|_| ()))
        .interact_text()?;
    Ok(minutes)
}

pub fn recovery_modifier(default: u32) -> Result<u32> {
    let modifier = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptRecoveryModifier.to_string())
        .default(default)
        .validate_with(|input: &u32| validate_recovery_modifier(*input).map(|_| ()))
        .interact_text()?;
    Ok(modifier)
}

pub fn difficulty(default: i64) -> Result<i64> {
    let difficulty = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDifficulty.to_string())
        .default(default)
        .validate_with(|input: &i64| validate_difficulty(*input).map(|_| ()))
        .interact_text()?;
    Ok(difficulty)
}

pub fn output_format(default: OutputFormat) -> Result<OutputFormat> {
    let items: Vec<String> = FORMATS.iter().map(|format| format!("{:?}", format).to_lowercase()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptOutputFormat.to_string())
        .items(&items)
        .default(FORMATS.iter().position(|f| *f == default).unwrap_or(0))
        .interact()?;
    Ok(FORMATS[selection])
}
