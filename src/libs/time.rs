//! Wall-clock time of day used for shift boundaries.
//!
//! Times reach the application as free text, either a full `"HH:MM"` string
//! from a command-line flag or separate hour and minute answers from an
//! interactive prompt. [`TimeOfDay`] validates on construction, so a value
//! that exists always holds an hour in `0..=23` and a minute in `0..=59`.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Validation failures for user-supplied clock times.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeError {
    #[error("the maximum value for hours is 23")]
    HourOutOfRange,
    #[error("the maximum value for minutes is 59")]
    MinuteOutOfRange,
    #[error("expected a time in HH:MM format, got '{0}'")]
    Malformed(String),
}

/// An (hour, minute) pair with no date component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::HourOutOfRange);
        }
        if minute > 59 {
            return Err(TimeError::MinuteOutOfRange);
        }
        Ok(TimeOfDay { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Minutes since midnight.
    pub fn total_minutes(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s.split_once(':').ok_or_else(|| TimeError::Malformed(s.to_string()))?;
        let hour: u32 = hour.trim().parse().map_err(|_| TimeError::Malformed(s.to_string()))?;
        let minute: u32 = minute.trim().parse().map_err(|_| TimeError::Malformed(s.to_string()))?;
        TimeOfDay::new(hour, minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
