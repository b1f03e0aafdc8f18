//! Overtime split computation.
//!
//! Converts a scheduled and an actual end-of-shift time into day-period and
//! night-period overtime minutes. The night window runs from 22:00 to 05:00
//! on the following day; an actual end earlier than the scheduled end is
//! taken to fall on the next calendar day.

use crate::libs::time::TimeOfDay;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Start of the night window, in minutes since midnight (22:00).
pub const NIGHT_START: u32 = 22 * 60;
/// End of the night window on the following day (05:00).
pub const NIGHT_END: u32 = 5 * 60;

const FULL_DAY: u32 = 24 * 60;

/// Raw day/night minute buckets produced by [`split`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OvertimeMinutes {
    pub day: u32,
    pub night: u32,
}

/// Splits the overtime worked between `scheduled_end` and `actual_end` into
/// day and night minutes.
///
/// When `actual_end` is earlier than `scheduled_end` the shift is assumed to
/// have run past midnight and the actual end is shifted by a full day, so a
/// shift never appears to end before it started. Night minutes are clamped
/// to the elapsed total, so the two buckets always partition it exactly.
pub fn split(scheduled_end: TimeOfDay, actual_end: TimeOfDay) -> OvertimeMinutes {
    let scheduled_total = scheduled_end.total_minutes();
    let mut actual_total = actual_end.total_minutes();

    // Rollover to the following day.
    if actual_total < scheduled_total {
        actual_total += FULL_DAY;
    }

    let extra_minutes = actual_total - scheduled_total;
    if extra_minutes == 0 {
        return OvertimeMinutes { day: 0, night: 0 };
    }

    let mut night = if actual_total > NIGHT_START {
        // The shift runs past 22:00 on the unrolled timeline.
        actual_total - scheduled_total.max(NIGHT_START)
    } else if actual_total <= NIGHT_END {
        // The shift ends at or before 05:00 without reaching 22:00, so the
        // overtime sits in the post-midnight segment. A scheduled end ahead
        // of 22:00 means the 22:00-24:00 segment was worked through as well.
        let mut night = actual_total;
        if scheduled_total < NIGHT_START {
            night += FULL_DAY - NIGHT_START;
        }
        night
    } else {
        0
    };

    // The branch conditions can both touch the window boundaries; never
    // credit more night minutes than were actually worked.
    night = night.min(extra_minutes);

    OvertimeMinutes {
        day: extra_minutes - night,
        night,
    }
}

/// An (hours, minutes) pair as stored and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursMinutes {
    pub hours: u32,
    pub minutes: u32,
}

impl HoursMinutes {
    pub fn from_minutes(total: u32) -> Self {
        HoursMinutes {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    pub fn zero() -> Self {
        HoursMinutes { hours: 0, minutes: 0 }
    }
}

impl fmt::Display for HoursMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

/// Destination buckets for a computed split.
///
/// A record is either a regular workday or a holiday. The splitting
/// arithmetic is identical; only the buckets the result lands in differ,
/// and exactly one pair exists per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OvertimeSplit {
    Regular { day: HoursMinutes, night: HoursMinutes },
    Holiday { day: HoursMinutes, night: HoursMinutes },
}

impl OvertimeSplit {
    /// Computes the split for the given shift times, attributing the result
    /// to the holiday buckets when `holiday` is set.
    pub fn from_times(scheduled_end: TimeOfDay, actual_end: TimeOfDay, holiday: bool) -> Self {
        let minutes = split(scheduled_end, actual_end);
        let day = HoursMinutes::from_minutes(minutes.day);
        let night = HoursMinutes::from_minutes(minutes.night);
        if holiday {
            OvertimeSplit::Holiday { day, night }
        } else {
            OvertimeSplit::Regular { day, night }
        }
    }

    pub fn is_holiday(&self) -> bool {
        matches!(self, OvertimeSplit::Holiday { .. })
    }

    pub fn day(&self) -> HoursMinutes {
        match self {
            OvertimeSplit::Regular { day, .. } | OvertimeSplit::Holiday { day, .. } => *day,
        }
    }

    pub fn night(&self) -> HoursMinutes {
        match self {
            OvertimeSplit::Regular { night, .. } | OvertimeSplit::Holiday { night, .. } => *night,
        }
    }
}
