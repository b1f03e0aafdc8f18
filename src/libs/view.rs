use crate::libs::record::BankRecord;
use crate::libs::summary::BankSummary;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn records(records: &[BankRecord]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "DATE", "SCHEDULED", "ACTUAL", "DAY", "NIGHT", "HOLIDAY", "REASON"]);
        for (index, record) in records.iter().enumerate() {
            table.add_row(row![
                index + 1,
                record.date_string(),
                record.scheduled_end,
                record.actual_end,
                record.overtime.day(),
                record.overtime.night(),
                if record.overtime.is_holiday() { "yes" } else { "" },
                record.reason
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn summary(summary: &BankSummary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["BUCKET", "TOTAL"]);
        table.add_row(row!["Day overtime", summary.day]);
        table.add_row(row!["Night overtime", summary.night]);
        table.add_row(row!["Holiday day", summary.holiday_day]);
        table.add_row(row!["Holiday night", summary.holiday_night]);
        table.add_row(row!["Holidays", summary.holiday_count]);
        table.printstd();

        Ok(())
    }
}
