//! JSON-backed store for the hour-bank record collection.
//!
//! The whole collection lives in one file. Every mutation reads the list,
//! changes it in memory, and writes the full list back, so the last writer
//! always owns the stored state.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::record::BankRecord;
use crate::msg_bail_anyhow;
use anyhow::Result;
use serde_json::Value;
use std::fs::{self, File};
use std::path::PathBuf;

pub const BANK_FILE_NAME: &str = "bank_hours.json";

pub struct Bank {
    path: PathBuf,
}

impl Bank {
    /// Opens the bank stored in the platform data directory.
    pub fn new() -> Result<Self> {
        Ok(Bank {
            path: DataStorage::new().get_path(BANK_FILE_NAME)?,
        })
    }

    /// Opens a bank stored at an explicit path.
    pub fn with_path(path: PathBuf) -> Self {
        Bank { path }
    }

    /// Reads the whole collection.
    ///
    /// A missing file yields an empty list, as does a well-formed JSON
    /// value that is not an array (the only shape check performed on
    /// stored data). Malformed JSON is an error.
    pub fn load(&self) -> Result<Vec<BankRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        let value: Value = serde_json::from_str(&raw)?;
        if !value.is_array() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Replaces the stored collection with `records`.
    pub fn save(&self, records: &[BankRecord]) -> Result<()> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(&file, records)?;
        Ok(())
    }

    /// Appends one record, rejecting a second entry for the same date. On
    /// rejection the stored collection is left untouched.
    pub fn append(&self, record: BankRecord) -> Result<()> {
        let mut records = self.load()?;
        if records.iter().any(|existing| existing.date == record.date) {
            msg_bail_anyhow!(Message::DuplicateDate(record.date_string()));
        }
        records.push(record);
        self.save(&records)
    }

    /// Removes the record at `index` (zero-based), keeping the order of the
    /// remaining records, and returns it.
    pub fn remove(&self, index: usize) -> Result<BankRecord> {
        let mut records = self.load()?;
        if index >= records.len() {
            msg_bail_anyhow!(Message::EntryIndexOutOfRange(index + 1));
        }
        let removed = records.remove(index);
        self.save(&records)?;
        Ok(removed)
    }

    /// Drops every record.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
