//! Deletes one entry from the hour bank.

use crate::db::bank::Bank;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// List position of the entry to delete (see `hourbank list`)
    #[arg(required = true)]
    position: usize,

    /// Delete without the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let bank = Bank::new()?;
    let records = bank.load()?;

    if args.position == 0 || args.position > records.len() {
        msg_bail_anyhow!(Message::EntryIndexOutOfRange(args.position));
    }
    let date = records[args.position - 1].date_string();

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteEntry(date.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    bank.remove(args.position - 1)?;
    msg_success!(Message::EntryDeleted(date));
    Ok(())
}
