#[cfg(test)]
mod tests {
    use hourbank::libs::config::{Config, ExportConfig, ScheduleConfig, DEFAULT_MAIL_SUBJECT};
    use hourbank::libs::time::TimeOfDay;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.export.is_none());
        assert!(config.schedule.is_none());
    }

    #[test]
    fn test_default_export_subject() {
        assert_eq!(ExportConfig::default().subject, DEFAULT_MAIL_SUBJECT);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        // With no file on disk, read() falls back to the default config.
        let config = Config::read().unwrap();
        assert!(config.export.is_none());
        assert!(config.schedule.is_none());

        let config = Config {
            export: Some(ExportConfig {
                subject: "Hour bank".to_string(),
            }),
            schedule: Some(ScheduleConfig {
                scheduled_end: TimeOfDay::new(17, 30).unwrap(),
            }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config.export.unwrap().subject, "Hour bank");
        assert_eq!(read_config.schedule.unwrap().scheduled_end, TimeOfDay::new(17, 30).unwrap());

        // Deleting the file brings the defaults back.
        Config::delete().unwrap();
        let read_config = Config::read().unwrap();
        assert!(read_config.export.is_none());
    }
}
