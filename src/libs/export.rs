//! Share-link export of the hour bank.
//!
//! Builds the plain-text summary, one block per entry plus the grand totals,
//! and hands it to a messaging or mail application through a deep link. The
//! text is percent-encoded with an `encodeURIComponent`-compatible set so it
//! survives every URL handler unchanged.

use crate::libs::config::{Config, DEFAULT_MAIL_SUBJECT};
use crate::libs::messages::Message;
use crate::libs::record::BankRecord;
use crate::libs::summary::BankSummary;
use crate::{msg_error, msg_info};
use anyhow::Result;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

/// Characters `encodeURIComponent` leaves intact; everything else gets
/// percent-encoded.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Where the composed summary is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportTarget {
    /// `whatsapp://send` deep link
    Whatsapp,
    /// `mailto:` link with subject and body
    Email,
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportTarget::Whatsapp => write!(f, "WhatsApp"),
            ExportTarget::Email => write!(f, "mail"),
        }
    }
}

/// Composes the summary text and opens the matching deep link.
pub struct Exporter {
    target: ExportTarget,
    subject: String,
}

impl Exporter {
    /// Builds an exporter, taking the mail subject from the configuration
    /// when the export module is set up.
    pub fn new(target: ExportTarget) -> Result<Self> {
        let subject = Config::read()?
            .export
            .map(|export| export.subject)
            .unwrap_or_else(|| DEFAULT_MAIL_SUBJECT.to_string());
        Ok(Exporter { target, subject })
    }

    /// Renders the multi-line summary: one block per entry, a separator
    /// between blocks, and the grand totals at the end.
    pub fn compose(records: &[BankRecord]) -> String {
        let mut message = String::from("Overtime bank:\n\n");

        for record in records {
            let holiday_marker = if record.overtime.is_holiday() { " (holiday)" } else { "" };
            message.push_str(&format!("Date: {}{}\n", record.date_string(), holiday_marker));
            message.push_str(&format!("Scheduled end: {}\n", record.scheduled_end));
            message.push_str(&format!("Actual end: {}\n", record.actual_end));
            if record.overtime.is_holiday() {
                message.push_str(&format!("Holiday day hours: {}\n", record.overtime.day()));
                message.push_str(&format!("Holiday night hours: {}\n", record.overtime.night()));
            } else {
                message.push_str(&format!("Day overtime: {}\n", record.overtime.day()));
                message.push_str(&format!("Night overtime: {}\n", record.overtime.night()));
            }
            message.push_str(&format!("Reason: {}\n", record.reason));
            message.push_str("----------------------\n");
        }

        let summary = BankSummary::of(records);
        message.push_str(&format!("\nTotal day overtime: {}\n", summary.day));
        message.push_str(&format!("Total night overtime: {}\n", summary.night));
        message.push_str(&format!("Total holiday day: {}\n", summary.holiday_day));
        message.push_str(&format!("Total holiday night: {}\n", summary.holiday_night));
        message.push_str(&format!("Holidays: {}\n", summary.holiday_count));

        message
    }

    /// Builds the percent-encoded deep link for the chosen target.
    pub fn deep_link(&self, message: &str) -> String {
        match self.target {
            ExportTarget::Whatsapp => format!("whatsapp://send?text={}", encode_component(message)),
            ExportTarget::Email => format!(
                "mailto:?subject={}&body={}",
                encode_component(&self.subject),
                encode_component(message)
            ),
        }
    }

    /// Composes the summary and opens the share link with the default
    /// handler. An open failure is reported and swallowed; there is no
    /// fallback handler to try.
    pub fn send(&self, records: &[BankRecord]) -> Result<()> {
        let message = Self::compose(records);
        let url = self.deep_link(&message);

        msg_info!(Message::ExportOpening(self.target.to_string()));
        if let Err(error) = webbrowser::open(&url) {
            msg_error!(Message::ExportOpenFailed(error.to_string()));
        }
        Ok(())
    }
}

pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}
