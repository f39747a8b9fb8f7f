use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::WarmupAnnouncement(minutes) => format!("{}-minute warmup", minutes),
            Message::CooldownAnnouncement(minutes) => format!("{}-minute cooldown", minutes),
            Message::SessionHeader(mode, minutes) => format!("{} session, {} active minutes", mode, minutes),
            Message::SessionTotal(duration) => format!("Total planned time: {}", duration),
            Message::SessionSeed(seed) => format!("Using seed {}", seed),

            // === INTERVAL MESSAGES ===
            Message::IntervalAtHeartRate(duration, percent) => format!("{} {}% max HR", duration, percent),
            Message::IntervalActiveRecovery(duration) => format!("{} active recovery", duration),
            Message::IntervalModerate(duration) => format!("{} moderate", duration),
            Message::IntervalHigh(duration) => format!("{} high intensity", duration),
            Message::IntervalRecovery(duration) => format!("{} recovery", duration),
            Message::IntervalOptionalRest => "optional rest".to_string(),
            Message::KindHighIntensity => "high intensity".to_string(),
            Message::KindModerateIntensity => "moderate".to_string(),
            Message::KindRecovery => "recovery".to_string(),
            Message::KindCheckpoint => "checkpoint".to_string(),

            // === VALIDATION MESSAGES ===
            Message::TooFewActiveMinutes(min) => format!("Under {} active minutes it makes no sense", min),
            Message::DifficultyTooHard => "Let's not overdo it (maximum is +2)".to_string(),
            Message::DifficultyTooEasy => "Too easy (minimum is -1)".to_string(),
            Message::RecoveryModifierOutOfRange(value) => {
                format!("Recovery modifier must be 1, 2 or 3, got {}", value)
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleDefaults => "Session defaults".to_string(),
            Message::ConfigReadFailed(error) => format!("Failed to read config, using defaults: {}", error),

            // === PROMPTS ===
            Message::PromptSelectMode => "Training mode".to_string(),
            Message::PromptTotalMinutes => "Active minutes (warmup and cooldown excluded)".to_string(),
            Message::PromptDifficulty => "Difficulty modifier [-1, +2]".to_string(),
            Message::PromptRecoveryModifier => "Recovery modifier [1 = hardest, 3 = easiest]".to_string(),
            Message::PromptOutputFormat => "Output format".to_string(),
        };
        write!(f, "{}", text)
    }
}
