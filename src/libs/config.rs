//! Configuration management for the hourbank application.
//!
//! Settings live in a JSON file in the platform application-data directory
//! and are grouped into optional modules, each configured independently
//! through the interactive `hourbank init` wizard. A missing file is not an
//! error; every module simply stays disabled until the user opts in.
//!
//! ## Modules
//!
//! - **Export**: subject line used when the summary is shared by mail
//! - **Schedule**: the usual end-of-shift time, pre-filled in the add form

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::time::TimeOfDay;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::str::FromStr;

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Subject used for mail export when no export module is configured.
pub const DEFAULT_MAIL_SUBJECT: &str = "Overtime hours";

/// A configurable module shown in the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Settings for the share-link export.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExportConfig {
    /// Subject line for the `mailto:` share link.
    pub subject: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            subject: DEFAULT_MAIL_SUBJECT.to_string(),
        }
    }
}

/// Settings describing the usual shift schedule.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ScheduleConfig {
    /// Scheduled end of shift offered as the default in the add form.
    pub scheduled_end: TimeOfDay,
}

/// Main configuration container.
///
/// Unconfigured modules are omitted from the JSON output, keeping the file
/// limited to what the user actually set up.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleConfig>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when no file
    /// exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file, if any.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Existing values are offered as defaults, so re-running the wizard
    /// only changes what the user actually edits.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let module_descriptions = vec![
            ConfigModule {
                key: "export".to_string(),
                name: "Export".to_string(),
            },
            ConfigModule {
                key: "schedule".to_string(),
                name: "Schedule".to_string(),
            },
        ];

        let selected_modules = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&module_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_modules {
            match module_descriptions[selection].key.as_str() {
                "export" => {
                    let default = config.export.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleExport);
                    config.export = Some(ExportConfig {
                        subject: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptExportSubject.to_string())
                            .default(default.subject)
                            .interact_text()?,
                    });
                }
                "schedule" => {
                    let default = config
                        .schedule
                        .map(|schedule| schedule.scheduled_end.to_string())
                        .unwrap_or_else(|| "17:00".to_string());
                    msg_print!(Message::ConfigModuleSchedule);
                    let text: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultScheduledEnd.to_string())
                        .default(default)
                        .validate_with(|text: &String| TimeOfDay::from_str(text).map(|_| ()).map_err(|e| e.to_string()))
                        .interact_text()?;
                    config.schedule = Some(ScheduleConfig {
                        scheduled_end: TimeOfDay::from_str(&text)?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
