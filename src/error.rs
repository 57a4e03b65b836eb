// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every fallible operation of the crate.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GnssError>;

#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GnssError {
    /// A calendar string could not be split into year, month and day.
    #[error("cannot parse calendar string {input:?}: {reason}")]
    Parse { input: String, reason: String },
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i64, month: u32, day: u32 },
    #[error("invalid time of day {hour:02}:{minute:02}:{second:02}.{microsecond:06}")]
    InvalidTime {
        hour: u32,
        minute: u32,
        second: u32,
        microsecond: u32,
    },
    #[error("day of year {doy} is outside year {year}")]
    InvalidDayOfYear { year: i32, doy: u32 },
    #[error("GPS week-day {0} is outside 0..=6")]
    InvalidWeekDay(u32),
    #[error("GPS time of week {0} s is outside [0, 604800)")]
    InvalidTimeOfWeek(f64),
    /// An ISO-8601 instant could not be parsed.
    #[error("cannot parse instant {0:?}")]
    InvalidInstant(String),
    #[error("MJD value is not finite ({0})")]
    NonFiniteMjd(f64),
    /// The result does not fit the range of the underlying datetime value.
    #[error("instant is outside the representable calendar range")]
    OutOfRange,
}
