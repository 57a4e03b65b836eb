// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Gregorian ↔ MJD transform
//!
//! Integer day-number arithmetic for the proleptic Gregorian calendar.
//!
//! The forward direction is the Fliegel & Van Flandern Julian Day Number
//! formula (the `(month - 14) / 12` term shifts January and February to the
//! end of the previous year), re-based on the MJD epoch:
//!
//! ```text
//! MJD = JDN − 2 400 001          (JD = JDN − 0.5 at civil midnight)
//! ```
//!
//! All year-dependent divisions are floor divisions, so the formulas stay
//! valid for negative (astronomical) years and impose no era limit. Only the
//! conversion into a `chrono` value is bounded by chrono's own range.
//!
//! ## Quick Example
//! ```rust
//! use chrono::NaiveTime;
//! use gnsstime::{date_to_mjd, mjd_to_date};
//!
//! let mjd = date_to_mjd(2011, 1, 1, NaiveTime::MIN).unwrap();
//! assert_eq!(mjd, 55_562.0);
//!
//! let back = mjd_to_date(55_562.5).unwrap();
//! assert_eq!(back.to_string(), "2011-01-01 12:00:00");
//! ```

use crate::error::{GnssError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Julian Day Number of MJD 0 (1858-11-17).
pub const MJD_EPOCH_JDN: i64 = 2_400_001;

/// Offset between fractional JD and MJD: `JD = MJD + 2 400 000.5`.
pub const MJD_TO_JD: f64 = 2_400_000.5;

pub const SECONDS_PER_DAY: i64 = 86_400;

const MICROS_PER_DAY: i64 = SECONDS_PER_DAY * 1_000_000;

/// Largest |MJD| accepted before the day count is cast to an integer.
/// Well beyond chrono's ±262 000 year range, well inside `i64` arithmetic.
pub(crate) const MAX_ABS_MJD: f64 = 1.0e10;

/// Largest |year| accepted for calendar fields; keeps every MJD inside
/// [`MAX_ABS_MJD`].
pub(crate) const MAX_ABS_YEAR: i64 = 27_000_000;

/// Days elapsed before the first of each month in a common year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Gregorian leap-year rule: divisible by 4, not by 100 unless also by 400.
#[inline]
pub const fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Number of days in `month` of `year`, or `0` for a month outside 1–12.
pub const fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

#[inline]
pub const fn days_in_year(year: i64) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Reject calendar fields that do not name a Gregorian date, or whose year
/// magnitude exceeds `MAX_ABS_YEAR`.
pub fn validate_date(year: i64, month: u32, day: u32) -> Result<()> {
    if year.unsigned_abs() > MAX_ABS_YEAR as u64 {
        return Err(GnssError::OutOfRange);
    }
    if day == 0 || day > days_in_month(year, month) {
        return Err(GnssError::InvalidDate { year, month, day });
    }
    Ok(())
}

/// Integer MJD of a calendar date. The fields are not validated.
pub const fn civil_to_mjd(year: i64, month: u32, day: u32) -> i64 {
    let (y, m, d) = (year, month as i64, day as i64);
    // Truncating on purpose: −1 for January/February, 0 otherwise.
    let a = (m - 14) / 12;
    let jdn = (1461 * (y + 4800 + a)).div_euclid(4) + (367 * (m - 2 - 12 * a)).div_euclid(12)
        - (3 * (y + 4900 + a).div_euclid(100)).div_euclid(4)
        + d
        - 32_075;
    jdn - MJD_EPOCH_JDN
}

/// Calendar date `(year, month, day)` of an integer MJD.
pub const fn mjd_to_civil(mjd: i64) -> (i64, u32, u32) {
    let jdn = mjd + MJD_EPOCH_JDN;
    let f = jdn + 1401 + ((4 * jdn + 274_277).div_euclid(146_097) * 3).div_euclid(4) - 38;
    let e = 4 * f + 3;
    let g = e.rem_euclid(1461).div_euclid(4);
    let h = 5 * g + 2;
    let day = h.rem_euclid(153).div_euclid(5) + 1;
    let month = (h.div_euclid(153) + 2).rem_euclid(12) + 1;
    let year = e.div_euclid(1461) - 4716 + (12 + 2 - month).div_euclid(12);
    (year, month as u32, day as u32)
}

/// 1-based day of the year. The fields must already be validated.
pub(crate) const fn day_of_year(year: i64, month: u32, day: u32) -> u32 {
    let leap_day = if month > 2 && is_leap_year(year) { 1 } else { 0 };
    DAYS_BEFORE_MONTH[(month - 1) as usize] + leap_day + day
}

/// Fraction of the civil day elapsed at `time`.
fn day_fraction(time: &NaiveTime) -> f64 {
    let seconds = time.num_seconds_from_midnight() as f64 + time.nanosecond() as f64 * 1e-9;
    seconds / SECONDS_PER_DAY as f64
}

/// Real-valued MJD of a calendar date and time of day.
///
/// Fails with [`GnssError::InvalidDate`] when the fields do not name a
/// Gregorian date; nothing is clamped.
pub fn date_to_mjd(year: i64, month: u32, day: u32, time_of_day: NaiveTime) -> Result<f64> {
    validate_date(year, month, day)?;
    Ok(civil_to_mjd(year, month, day) as f64 + day_fraction(&time_of_day))
}

/// MJD of a chrono civil datetime. Always valid, chrono already checked it.
pub(crate) fn naive_to_mjd(datetime: &NaiveDateTime) -> f64 {
    use chrono::Datelike;
    let date = datetime.date();
    civil_to_mjd(date.year() as i64, date.month(), date.day()) as f64
        + day_fraction(&datetime.time())
}

/// Calendar datetime of a real-valued MJD.
///
/// The fractional day is rounded to whole microseconds; a fraction that
/// rounds up to a full day carries into the next date.
pub fn mjd_to_date(mjd: f64) -> Result<NaiveDateTime> {
    if !mjd.is_finite() {
        return Err(GnssError::NonFiniteMjd(mjd));
    }
    if mjd.abs() > MAX_ABS_MJD {
        return Err(GnssError::OutOfRange);
    }
    let whole = mjd.floor();
    let mut day = whole as i64;
    let mut micros = ((mjd - whole) * MICROS_PER_DAY as f64).round() as i64;
    if micros >= MICROS_PER_DAY {
        day += 1;
        micros -= MICROS_PER_DAY;
    }

    let (year, month, dom) = mjd_to_civil(day);
    let year = i32::try_from(year).map_err(|_| GnssError::OutOfRange)?;
    let date = NaiveDate::from_ymd_opt(year, month, dom).ok_or(GnssError::OutOfRange)?;
    let seconds = (micros / 1_000_000) as u32;
    let nanos = (micros % 1_000_000) as u32 * 1_000;
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, nanos)
        .ok_or(GnssError::OutOfRange)?;
    Ok(date.and_time(time))
}

/// Parse a `"YYYY/MM/DD"` calendar string.
///
/// `-` and `.` are accepted as separators too, as long as the same one is
/// used throughout. Malformed text is a [`GnssError::Parse`]; well-formed
/// text naming an impossible date is a [`GnssError::InvalidDate`].
pub fn ymd_to_date(ymd: &str) -> Result<NaiveDate> {
    let input = ymd.trim();
    let parse_error = |reason: &str| GnssError::Parse {
        input: ymd.to_string(),
        reason: reason.to_string(),
    };

    let separator = input
        .chars()
        .find(|c| !c.is_ascii_digit())
        .ok_or_else(|| parse_error("expected YYYY/MM/DD"))?;
    if !matches!(separator, '/' | '-' | '.') {
        return Err(parse_error("unsupported separator"));
    }

    let fields: Vec<&str> = input.split(separator).collect();
    let [year, month, day] = fields.as_slice() else {
        return Err(parse_error("expected exactly three fields"));
    };
    let number = |field: &str| -> Result<u32> {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(parse_error("fields must be unsigned integers"));
        }
        field.parse().map_err(|_| parse_error("field is too large"))
    };
    let (year, month, day) = (number(*year)?, number(*month)?, number(*day)?);

    validate_date(year as i64, month, day)?;
    let year = i32::try_from(year).map_err(|_| GnssError::OutOfRange)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(GnssError::OutOfRange)
}
