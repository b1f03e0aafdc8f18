//! Entry form for the hour bank.
//!
//! Collects a date, the scheduled and actual end-of-shift times, an optional
//! holiday flag, and a reason. Anything not supplied as a flag is asked for
//! interactively. The derived overtime split is previewed and confirmed
//! before the entry is written; validation failures and duplicate dates
//! abort the save with nothing written.

use crate::db::bank::Bank;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::record::{BankRecord, DATE_FORMAT};
use crate::libs::time::TimeOfDay;
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::str::FromStr;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Entry date as dd/mm/yyyy, or "today"
    #[arg(short, long, default_value = "today")]
    date: String,

    /// Scheduled end of shift (HH:MM)
    #[arg(short, long)]
    scheduled: Option<TimeOfDay>,

    /// Actual end of shift (HH:MM)
    #[arg(short, long)]
    actual: Option<TimeOfDay>,

    /// Attribute the whole split to the holiday buckets
    #[arg(long)]
    holiday: bool,

    /// Justification for the overtime
    #[arg(short, long)]
    reason: Option<String>,

    /// Save without the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let config = Config::read()?;

    let scheduled_end = match args.scheduled {
        Some(time) => time,
        None => prompt_time(Message::PromptScheduledEnd, config.schedule.map(|s| s.scheduled_end))?,
    };
    let actual_end = match args.actual {
        Some(time) => time,
        None => prompt_time(Message::PromptActualEnd, None)?,
    };
    let reason = match args.reason {
        Some(reason) => reason,
        None => {
            let theme = ColorfulTheme::default();
            Input::with_theme(&theme)
                .with_prompt(Message::PromptReason.to_string())
                .interact_text()?
        }
    };
    if reason.trim().is_empty() {
        return Err(msg_error_anyhow!(Message::ReasonRequired));
    }

    let record = BankRecord::new(date, scheduled_end, actual_end, args.holiday, reason);

    msg_print!(Message::EntryPreview, true);
    View::records(std::slice::from_ref(&record))?;

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmSaveEntry.to_string())
            .default(true)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    Bank::new()?.append(record)?;
    msg_success!(Message::EntrySaved(date.format(DATE_FORMAT).to_string()));
    Ok(())
}

fn parse_date(text: &str) -> Result<NaiveDate> {
    if text.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| msg_error_anyhow!(Message::InvalidDate(text.to_string())))
}

fn prompt_time(prompt: Message, default: Option<TimeOfDay>) -> Result<TimeOfDay> {
    let theme = ColorfulTheme::default();
    let mut input = Input::with_theme(&theme).with_prompt(prompt.to_string());
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    let text: String = input
        .validate_with(|text: &String| TimeOfDay::from_str(text).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;
    Ok(TimeOfDay::from_str(&text)?)
}
