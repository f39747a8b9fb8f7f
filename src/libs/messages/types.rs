//! Message type definitions.
//!
//! Every user-facing string of the application is a [`Message`] variant.
//! The text itself lives in the `Display` implementation in `display.rs`,
//! which keeps wording in one place and lets callers pass typed data
//! (minutes, percentages, formatted durations) instead of building strings.

use crate::libs::session::Mode;

#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    WarmupAnnouncement(u32),  // minutes
    CooldownAnnouncement(u32), // minutes
    SessionHeader(Mode, u32),  // mode, active minutes
    SessionTotal(String),      // formatted total duration
    SessionSeed(u64),

    // === INTERVAL MESSAGES ===
    IntervalAtHeartRate(String, u8), // duration, percent of max heart rate
    IntervalActiveRecovery(String),  // duration
    IntervalModerate(String),        // duration
    IntervalHigh(String),            // duration
    IntervalRecovery(String),        // duration
    IntervalOptionalRest,
    KindHighIntensity,
    KindModerateIntensity,
    KindRecovery,
    KindCheckpoint,

    // === VALIDATION MESSAGES ===
    TooFewActiveMinutes(u32), // minimum minutes
    DifficultyTooHard,
    DifficultyTooEasy,
    RecoveryModifierOutOfRange(u32),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleDefaults,
    ConfigReadFailed(String),

    // === PROMPTS ===
    PromptSelectMode,
    PromptTotalMinutes,
    PromptDifficulty,
    PromptRecoveryModifier,
    PromptOutputFormat,
}
