#[cfg(test)]
mod tests {
    use fartlek::libs::config::{Config, PlanDefaults, CONFIG_FILE_NAME};
    use fartlek::libs::data_storage::DataStorage;
    use fartlek::libs::view::OutputFormat;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        total_minutes: u32,
        recovery_modifier: u32,
        difficulty: i64,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                total_minutes: 45,
                recovery_modifier: 1,
                difficulty: 2,
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.defaults.is_none());
        assert_eq!(config.defaults(), PlanDefaults::default());
    }

    #[test]
    fn test_default_plan_defaults() {
        let defaults = PlanDefaults::default();
        assert_eq!(defaults.total_minutes, 30);
        assert_eq!(defaults.recovery_modifier, 2);
        assert_eq!(defaults.difficulty, 0);
        assert_eq!(defaults.format, OutputFormat::Table);
    }

    #[test]
    fn test_missing_format_defaults_to_table() {
        let json = r#"{"defaults":{"total_minutes":20,"recovery_modifier":3,"difficulty":-1}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        let defaults = config.defaults();
        assert_eq!(defaults.total_minutes, 20);
        assert_eq!(defaults.difficulty, -1);
        assert_eq!(defaults.format, OutputFormat::Table);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the default config.
        let config = Config::read().unwrap();
        assert_eq!(config.defaults, None);

        let config = Config {
            defaults: Some(PlanDefaults {
                total_minutes: ctx.total_minutes,
                recovery_modifier: ctx.recovery_modifier,
                difficulty: ctx.difficulty,
                format: OutputFormat::Json,
            }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        let defaults = read_config.defaults.unwrap();
        assert_eq!(defaults.total_minutes, ctx.total_minutes);
        assert_eq!(defaults.recovery_modifier, ctx.recovery_modifier);
        assert_eq!(defaults.difficulty, ctx.difficulty);
        assert_eq!(defaults.format, OutputFormat::Json);
        assert_eq!(Config::read_defaults().total_minutes, ctx.total_minutes);

        // A malformed file is an error for read() but falls back for commands.
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Config::read().is_err());
        assert_eq!(Config::read_defaults(), PlanDefaults::default());
    }
}
