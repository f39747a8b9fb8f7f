//! Persisted preferences.
//!
//! The preferences file only remembers the answers a user gives most often,
//! so that `plan` can offer them as prompt defaults and `fartlek`/`hiit` can
//! fall back to them when an argument is omitted. Generated sessions are
//! never written anywhere.
//!
//! ## File Format
//!
//! Pretty-printed JSON named `config.json` in the data directory:
//!
//! ```json
//! {
//!   "defaults": {
//!     "total_minutes": 30,
//!     "recovery_modifier": 2,
//!     "difficulty": 0,
//!     "format": "table"
//!   }
//! }
//! ```
//!
//! A missing file reads as [`Config::default`].

use super::data_storage::DataStorage;
use super::messages::Message;
use super::prompt;
use super::view::OutputFormat;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Answers offered as defaults when a session is planned.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlanDefaults {
    /// Active minutes, warmup and cooldown excluded.
    pub total_minutes: u32,

    /// Fartlek recovery multiplier, 1 (hardest) to 3.
    pub recovery_modifier: u32,

    /// Fartlek range shift, -1 to +2.
    pub difficulty: i64,

    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for PlanDefaults {
    fn default() -> Self {
        PlanDefaults {
            total_minutes: 30,
            recovery_modifier: 2,
            difficulty: 0,
            format: OutputFormat::Table,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<PlanDefaults>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Saved defaults, or the built-in ones.
    pub fn defaults(&self) -> PlanDefaults {
        self.defaults.clone().unwrap_or_default()
    }

    /// Saved defaults for a command run. An unreadable file is reported on
    /// stderr, so JSON output stays clean, and the built-in defaults apply.
    pub fn read_defaults() -> PlanDefaults {
        match Self::read() {
            Ok(config) => config.defaults(),
            Err(e) => {
                msg_warning!(Message::ConfigReadFailed(e.to_string()));
                PlanDefaults::default()
            }
        }
    }

    /// Interactive wizard seeded with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.defaults();

        msg_print!(Message::ConfigModuleDefaults);
        config.defaults = Some(PlanDefaults {
            total_minutes: prompt::total_minutes(default.total_minutes)?,
            recovery_modifier: prompt::recovery_modifier(default.recovery_modifier)?,
            difficulty: prompt::difficulty(default.difficulty)?,
            format: prompt::output_format(default.format)?,
        });

        Ok(config)
    }
}
