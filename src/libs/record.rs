//! Persisted hour-bank entries.

use crate::libs::overtime::OvertimeSplit;
use crate::libs::time::TimeOfDay;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used wherever an entry date faces the user or the disk.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// One saved hour-bank entry.
///
/// Entries are immutable once saved. The date is the natural key: no two
/// entries in the collection may share it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankRecord {
    #[serde(with = "bank_date")]
    pub date: NaiveDate,
    pub scheduled_end: TimeOfDay,
    pub actual_end: TimeOfDay,
    pub reason: String,
    #[serde(flatten)]
    pub overtime: OvertimeSplit,
}

impl BankRecord {
    /// Builds an entry from validated form input, deriving the overtime
    /// split from the two end-of-shift times.
    pub fn new(date: NaiveDate, scheduled_end: TimeOfDay, actual_end: TimeOfDay, holiday: bool, reason: String) -> Self {
        let overtime = OvertimeSplit::from_times(scheduled_end, actual_end, holiday);
        BankRecord {
            date,
            scheduled_end,
            actual_end,
            reason,
            overtime,
        }
    }

    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

mod bank_date {
    use super::DATE_FORMAT;
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
