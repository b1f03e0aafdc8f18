//! Shows the aggregated totals for every bucket.

use crate::db::bank::Bank;
use crate::libs::summary::BankSummary;
use crate::libs::view::View;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let records = Bank::new()?.load()?;
    View::summary(&BankSummary::of(&records))
}
