//! Signed elapsed-time values and their two textual encodings.
//!
//! Source records encode times as `H:MM:SS[.fraction]` with up to nanosecond
//! resolution; everything the analyzer emits uses an adaptive display
//! encoding (`M:SS.CC` for short times, `HH:MM:SS` otherwise). A zero value
//! is the sentinel for "not recorded" and is never a measured zero-length
//! interval.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

const NANOS_PER_SEC: i64 = 1_000_000_000;
const NANOS_PER_MIN: i64 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MIN;

/// Number of colon-separated fields in the source encoding.
const SOURCE_PARTS: usize = 3;
/// Maximum digits of the fractional second carried by the source encoding.
const MAX_FRACTION_DIGITS: usize = 9;
/// Minute threshold below which the display encoding uses the short form.
const SHORT_FORM_MINUTE_LIMIT: u64 = 10;

/// A signed elapsed time with nanosecond resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSpan(i64);

impl TimeSpan {
    /// The "not recorded" sentinel.
    pub const ZERO: TimeSpan = TimeSpan(0);

    /// Sentinel for an undefined minimum or missing best time.
    pub const MAX: TimeSpan = TimeSpan(i64::MAX);

    pub const fn from_nanos(nanos: i64) -> Self {
        TimeSpan(nanos)
    }

    pub const fn from_secs(secs: i64) -> Self {
        TimeSpan(secs * NANOS_PER_SEC)
    }

    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    /// True for a measured, positive time; the zero sentinel and negative
    /// values read as "absent" everywhere in the analyzers.
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// The value rounded to the nearest whole second.
    pub fn whole_seconds(self) -> i64 {
        (self.0 as f64 / NANOS_PER_SEC as f64).round() as i64
    }

    pub const fn saturating_add(self, other: TimeSpan) -> TimeSpan {
        TimeSpan(self.0.saturating_add(other.0))
    }

    pub const fn saturating_sub(self, other: TimeSpan) -> TimeSpan {
        TimeSpan(self.0.saturating_sub(other.0))
    }

    /// Parse the source encoding: `H:MM:SS` or `H:MM:SS.fraction`.
    ///
    /// Whitespace is trimmed and an empty string yields the zero sentinel.
    /// Only the hour field may carry a sign; the minute, second, and
    /// fraction fields parse as unsigned. The fraction is truncated to 9
    /// digits or right-padded with zeros to 9, then read as nanoseconds.
    pub fn parse(text: &str) -> Result<TimeSpan> {
        let s = text.trim();
        if s.is_empty() {
            return Ok(TimeSpan::ZERO);
        }

        let invalid = || Error::InvalidDuration(text.to_string());

        let parts: Vec<&str> = s.splitn(SOURCE_PARTS, ':').collect();
        if parts.len() != SOURCE_PARTS {
            return Err(invalid());
        }

        let hours: i64 = parts[0].parse().map_err(|_| invalid())?;
        let minutes: u32 = parts[1].parse().map_err(|_| invalid())?;

        let (sec_part, frac_part) = match parts[2].split_once('.') {
            Some((sec, frac)) => (sec, Some(frac)),
            None => (parts[2], None),
        };

        let seconds: u32 = sec_part.parse().map_err(|_| invalid())?;

        let nanos: u32 = match frac_part {
            Some(frac) => {
                let mut frac = frac.to_string();
                frac.truncate(MAX_FRACTION_DIGITS);
                while frac.len() < MAX_FRACTION_DIGITS {
                    frac.push('0');
                }
                frac.parse().map_err(|_| invalid())?
            }
            None => 0,
        };

        Ok(TimeSpan(
            hours * NANOS_PER_HOUR
                + i64::from(minutes) * NANOS_PER_MIN
                + i64::from(seconds) * NANOS_PER_SEC
                + i64::from(nanos),
        ))
    }
}

impl Add for TimeSpan {
    type Output = TimeSpan;

    fn add(self, other: TimeSpan) -> TimeSpan {
        TimeSpan(self.0 + other.0)
    }
}

impl AddAssign for TimeSpan {
    fn add_assign(&mut self, other: TimeSpan) {
        self.0 += other.0;
    }
}

impl Sub for TimeSpan {
    type Output = TimeSpan;

    fn sub(self, other: TimeSpan) -> TimeSpan {
        TimeSpan(self.0 - other.0)
    }
}

/// Display encoding: `M:SS.CC` when hours = 0 and minutes < 10, else
/// `HH:MM:SS`. The magnitude is formatted and a single `-` prefixes
/// negative values.
impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        let sign = if self.0 < 0 { "-" } else { "" };

        let hours = abs / NANOS_PER_HOUR as u64;
        let minutes = abs % NANOS_PER_HOUR as u64 / NANOS_PER_MIN as u64;
        let seconds = abs % NANOS_PER_MIN as u64 / NANOS_PER_SEC as u64;

        if hours == 0 && minutes < SHORT_FORM_MINUTE_LIMIT {
            let centis = abs % NANOS_PER_SEC as u64 / 10_000_000;
            write!(f, "{}{}:{:02}.{:02}", sign, minutes, seconds, centis)
        } else {
            write!(f, "{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds)
        }
    }
}

impl Serialize for TimeSpan {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
