//! Display implementation for hourbank application messages.
//!
//! Single source of truth for all user-facing text. Every `Message` variant
//! is converted here, so wording stays consistent across commands and the
//! macros in [`crate::libs::messages::macros`].

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === ENTRY MESSAGES ===
            Message::EntrySaved(date) => format!("Entry for {} added to the hour bank", date),
            Message::EntryDeleted(date) => format!("Entry for {} deleted", date),
            Message::EntryPreview => "Summary".to_string(),
            Message::NoEntriesFound => "No entries saved".to_string(),
            Message::DuplicateDate(date) => format!("An entry for {} already exists", date),
            Message::EntryIndexOutOfRange(position) => format!("No entry at position {}", position),
            Message::ReasonRequired => "The reason cannot be empty".to_string(),
            Message::ConfirmSaveEntry => "Save this entry?".to_string(),
            Message::ConfirmDeleteEntry(date) => format!("Delete the entry for {}?", date),
            Message::ConfirmClearBank => "Clear every entry from the hour bank?".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === BANK MESSAGES ===
            Message::BankHeader => "Hour bank".to_string(),
            Message::BankCleared => "Hour bank cleared".to_string(),
            Message::InvalidDate(text) => format!("Expected a date in dd/mm/yyyy format, got '{}'", text),

            // === PROMPT MESSAGES ===
            Message::PromptDate => "Entry date (dd/mm/yyyy)".to_string(),
            Message::PromptScheduledEnd => "Scheduled end of shift (HH:MM)".to_string(),
            Message::PromptActualEnd => "Actual end of shift (HH:MM)".to_string(),
            Message::PromptReason => "Reason for the overtime".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::ConfigModuleExport => "Export settings".to_string(),
            Message::ConfigModuleSchedule => "Schedule settings".to_string(),
            Message::PromptExportSubject => "Mail subject for exported summaries".to_string(),
            Message::PromptDefaultScheduledEnd => "Default scheduled end of shift (HH:MM)".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportOpening(target) => format!("Opening {} with the hour bank summary", target),
            Message::ExportOpenFailed(error) => format!("Failed to open the share link: {}", error),
            Message::NothingToExport => "Nothing to export, the hour bank is empty".to_string(),
        };
        write!(f, "{}", text)
    }
}
