//! Lists every saved entry together with the running totals.

use crate::db::bank::Bank;
use crate::libs::messages::Message;
use crate::libs::summary::BankSummary;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let records = Bank::new()?.load()?;
    if records.is_empty() {
        msg_info!(Message::NoEntriesFound);
        return Ok(());
    }

    msg_print!(Message::BankHeader, true);
    View::records(&records)?;
    View::summary(&BankSummary::of(&records))?;
    Ok(())
}
