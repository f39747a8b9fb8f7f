//! Console rendering of generated sessions.
//!
//! Every session is bracketed by the same fixed announcements: a 20-minute
//! warmup before the first interval and a 10-minute cooldown after the last.
//! In between, intervals are shown as a table, as plain lines, or as JSON.
//!
//! Fartlek intervals are whole minutes and print as `"3min"`; HIIT intervals
//! print through [`format_seconds`].

use super::formatter::{format_minutes, format_seconds, SECONDS_PER_MINUTE};
use super::interval::{IntensityLabel, IntervalKind, IntervalSpec};
use super::messages::Message;
use super::session::{Mode, Session};
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::ValueEnum;
use prettytable::{row, Table};
use serde::{Deserialize, Serialize};

pub const WARMUP_MINUTES: u32 = 20;
pub const COOLDOWN_MINUTES: u32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Plain,
    Json,
}

#[derive(Serialize)]
struct SessionDocument<'a> {
    warmup_minutes: u32,
    mode: Mode,
    intervals: &'a [IntervalSpec],
    cooldown_minutes: u32,
}

pub struct View {}

impl View {
    pub fn session(session: &Session, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Table => Self::table(session),
            OutputFormat::Plain => {
                for line in Self::plain_lines(session) {
                    msg_print!(line);
                }
                Ok(())
            }
            OutputFormat::Json => {
                println!("{}", Self::json(session)?);
                Ok(())
            }
        }
    }

    fn table(session: &Session) -> Result<()> {
        msg_print!(Message::WarmupAnnouncement(WARMUP_MINUTES));

        let mut table = Table::new();
        table.add_row(row!["#", "TYPE", "DURATION", "INTENSITY"]);
        for (index, interval) in session.intervals.iter().enumerate() {
            table.add_row(row![
                index + 1,
                Self::kind(interval.kind),
                Self::duration(session.mode, interval.seconds),
                Self::intensity(interval.intensity)
            ]);
        }
        table.printstd();

        msg_print!(Message::CooldownAnnouncement(COOLDOWN_MINUTES));
        msg_info!(Message::SessionTotal(format_seconds(session.total_seconds())));
        Ok(())
    }

    /// One line per interval, bracketed by the warmup and cooldown lines.
    pub fn plain_lines(session: &Session) -> Vec<String> {
        let mut lines = Vec::with_capacity(session.intervals.len() + 2);
        lines.push(Message::WarmupAnnouncement(WARMUP_MINUTES).to_string());
        lines.extend(session.intervals.iter().map(|interval| Self::describe(session.mode, interval)));
        lines.push(Message::CooldownAnnouncement(COOLDOWN_MINUTES).to_string());
        lines
    }

    pub fn json(session: &Session) -> Result<String> {
        let document = SessionDocument {
            warmup_minutes: WARMUP_MINUTES,
            mode: session.mode,
            intervals: &session.intervals,
            cooldown_minutes: COOLDOWN_MINUTES,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    pub fn describe(mode: Mode, interval: &IntervalSpec) -> String {
        let duration = Self::duration(mode, interval.seconds);
        let message = match (interval.kind, interval.intensity) {
            (IntervalKind::RestCheckpoint, _) => Message::IntervalOptionalRest,
            (IntervalKind::Recovery, _) => match mode {
                Mode::Fartlek => Message::IntervalActiveRecovery(duration),
                Mode::Hiit => Message::IntervalRecovery(duration),
            },
            (_, Some(IntensityLabel::MaxHeartRate(percent))) => Message::IntervalAtHeartRate(duration, percent),
            (_, Some(IntensityLabel::High)) | (IntervalKind::ActiveHighIntensity, None) => {
                Message::IntervalHigh(duration)
            }
            (_, Some(IntensityLabel::Moderate)) | (IntervalKind::ActiveModerateIntensity, None) => {
                Message::IntervalModerate(duration)
            }
        };
        message.to_string()
    }

    fn duration(mode: Mode, seconds: u32) -> String {
        match mode {
            Mode::Fartlek => format_minutes(seconds / SECONDS_PER_MINUTE),
            Mode::Hiit => format_seconds(u64::from(seconds)),
        }
    }

    fn kind(kind: IntervalKind) -> String {
        match kind {
            IntervalKind::ActiveHighIntensity => Message::KindHighIntensity,
            IntervalKind::ActiveModerateIntensity => Message::KindModerateIntensity,
            IntervalKind::Recovery => Message::KindRecovery,
            IntervalKind::RestCheckpoint => Message::KindCheckpoint,
        }
        .to_string()
    }

    fn intensity(intensity: Option<IntensityLabel>) -> String {
        match intensity {
            Some(IntensityLabel::MaxHeartRate(percent)) => format!("{}% max HR", percent),
            Some(IntensityLabel::Moderate) => Message::KindModerateIntensity.to_string(),
            Some(IntensityLabel::High) => Message::KindHighIntensity.to_string(),
            None => "-".to_string(),
        }
    }
}
