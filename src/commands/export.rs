//! Shares the hour bank through a messaging or mail deep link.

use crate::db::bank::Bank;
use crate::libs::export::{Exporter, ExportTarget};
use crate::libs::messages::Message;
use crate::msg_info;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Share target
    #[arg(value_enum, default_value = "whatsapp")]
    target: ExportTarget,

    /// Print the summary text instead of opening a share link
    #[arg(short, long)]
    print: bool,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let records = Bank::new()?.load()?;
    if records.is_empty() {
        msg_info!(Message::NothingToExport);
        return Ok(());
    }

    if args.print {
        println!("{}", Exporter::compose(&records));
        return Ok(());
    }

    Exporter::new(args.target)?.send(&records)
}
