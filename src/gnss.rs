// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! [`GnssTime`]: a calendar datetime with GNSS-derived properties.
//!
//! The value wraps a `chrono` datetime, optionally tagged with a fixed UTC
//! offset, and adds read-only properties computed on every access:
//!
//! | Property | Meaning |
//! |----------|---------|
//! | [`mjd`](GnssTime::mjd) | Modified Julian Date |
//! | [`doy`](GnssTime::doy) | day of year, 1–366 |
//! | [`gpsw`](GnssTime::gpsw) | GPS week since 1980-01-06 |
//! | [`gpswd`](GnssTime::gpswd) | GPS week-day, 0 = Sunday |
//! | [`gpswsec`](GnssTime::gpswsec) | GPS second of week |
//! | [`leapsec`](GnssTime::leapsec) | `−(GPS − UTC)` in seconds |
//! | [`gpst`](GnssTime::gpst) | the instant shifted to GPS time |
//!
//! Every property first normalizes the value to UTC civil fields. An
//! instant without an offset is taken to already be in the reference time.
//!
//! ```rust
//! use gnsstime::GnssTime;
//!
//! let t = GnssTime::new(2011, 1, 1).unwrap();
//! assert_eq!(t.mjd(), 55_562.0);
//! assert_eq!((t.doy(), t.gpsw(), t.gpswd()), (1, 1616, 6));
//! assert_eq!(t.leapsec(), -15);
//! assert_eq!(t.gpst().isoformat(), "2011-01-01T00:00:15");
//!
//! let later = t + chrono::Duration::days(2);
//! assert_eq!(later.isoformat(), "2011-01-03T00:00:00");
//! assert_eq!(later.gpsw(), 1617);
//! ```

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    Timelike, Utc,
};
use qtty::*;

use crate::calendar;
use crate::error::{GnssError, Result};
use crate::gps_ext::GpsCalendar;
use crate::instant::{Time, TimeScale};
use crate::leap_seconds;
use crate::scales::{GPS, GPS_EPOCH_MJD, JD, MJD};

const SECONDS_PER_WEEK: f64 = 604_800.0;

/// Calendar datetime extended with GNSS calendar algebra.
///
/// Immutable once built. Equality, ordering and hashing compare the
/// UTC-normalized instant, so `12:00+02:00` equals a naive `10:00`.
#[derive(Debug, Copy, Clone)]
pub struct GnssTime {
    datetime: DateTime<FixedOffset>,
    /// `false` for a naive value, stored internally with a zero offset.
    aware: bool,
}

impl GnssTime {
    // ── constructors ──────────────────────────────────────────────────

    /// Midnight of a calendar date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        Self::from_ymd_hms_micro(year, month, day, 0, 0, 0, 0)
    }

    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        Self::from_ymd_hms_micro(year, month, day, hour, minute, second, 0)
    }

    /// Build from every calendar field.
    ///
    /// Out-of-range fields fail with [`GnssError::InvalidDate`] or
    /// [`GnssError::InvalidTime`]; nothing is clamped.
    #[allow(clippy::too_many_arguments)]
    pub fn from_ymd_hms_micro(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        microsecond: u32,
    ) -> Result<Self> {
        calendar::validate_date(year as i64, month, day)?;
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(GnssError::OutOfRange)?;
        let invalid_time = GnssError::InvalidTime {
            hour,
            minute,
            second,
            microsecond,
        };
        if microsecond >= 1_000_000 {
            return Err(invalid_time);
        }
        let time = NaiveTime::from_hms_micro_opt(hour, minute, second, microsecond)
            .ok_or(invalid_time)?;
        Ok(Self::from_naive(date.and_time(time)))
    }

    /// Wrap a naive civil datetime (no timezone attachment).
    pub fn from_naive(local: NaiveDateTime) -> Self {
        Self {
            datetime: local.and_utc().fixed_offset(),
            aware: false,
        }
    }

    /// Wrap a timezone-aware datetime, keeping its offset.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self {
            datetime: datetime.fixed_offset(),
            aware: true,
        }
    }

    /// Instant of a Modified Julian Date, rounded to whole microseconds.
    pub fn from_mjd(mjd: f64) -> Result<Self> {
        calendar::mjd_to_date(mjd).map(Self::from_naive)
    }

    /// Instant of any day counter.
    pub fn from_time<S: TimeScale>(time: Time<S>) -> Result<Self> {
        Self::from_mjd(time.modified_julian_day().value())
    }

    /// Start of GPS week-day `gpswd` of week `gpsw`.
    ///
    /// `nrollover` counts completed 1024-week cycles when `gpsw` is a
    /// broadcast 10-bit week number; pass `0` for a full week count.
    pub fn from_gpsw(gpsw: i64, gpswd: u32, nrollover: i64) -> Result<Self> {
        if gpswd >= Time::<GPS>::DAYS_PER_WEEK as u32 {
            return Err(GnssError::InvalidWeekDay(gpswd));
        }
        Self::from_gps_offset(gpsw, nrollover, Duration::try_days(gpswd as i64))
    }

    /// Instant at `tow` seconds into GPS week `gpsw`.
    pub fn from_gps_tow(gpsw: i64, tow: Seconds, nrollover: i64) -> Result<Self> {
        let seconds = tow.value();
        if !(0.0..SECONDS_PER_WEEK).contains(&seconds) {
            return Err(GnssError::InvalidTimeOfWeek(seconds));
        }
        let micros = (seconds * 1e6).round() as i64;
        Self::from_gps_offset(gpsw, nrollover, Some(Duration::microseconds(micros)))
    }

    fn from_gps_offset(gpsw: i64, nrollover: i64, offset: Option<Duration>) -> Result<Self> {
        let epoch = calendar::mjd_to_date(GPS_EPOCH_MJD as f64)?;
        let weeks = nrollover
            .checked_mul(Time::<GPS>::ROLLOVER_WEEKS)
            .and_then(|w| w.checked_add(gpsw))
            .and_then(|w| w.checked_mul(Time::<GPS>::DAYS_PER_WEEK))
            .and_then(Duration::try_days);
        weeks
            .zip(offset)
            .and_then(|(weeks, offset)| weeks.checked_add(&offset))
            .and_then(|total| epoch.checked_add_signed(total))
            .map(Self::from_naive)
            .ok_or(GnssError::OutOfRange)
    }

    /// Midnight of day `doy` of `year`.
    ///
    /// Two-digit years are expanded: `0..80` → 2000s, `80..100` → 1900s.
    pub fn from_doy(year: i32, doy: u32) -> Result<Self> {
        let year = match year {
            0..=79 => year + 2000,
            80..=99 => year + 1900,
            _ => year,
        };
        if doy == 0 || doy > calendar::days_in_year(year as i64) {
            return Err(GnssError::InvalidDayOfYear { year, doy });
        }
        let date = NaiveDate::from_yo_opt(year, doy).ok_or(GnssError::OutOfRange)?;
        Ok(Self::from_naive(date.and_time(NaiveTime::MIN)))
    }

    /// Attach `offset` to the same civil fields.
    pub fn with_offset(self, offset: FixedOffset) -> Result<Self> {
        let datetime = offset
            .from_local_datetime(&self.naive_local())
            .single()
            .ok_or(GnssError::OutOfRange)?;
        Ok(Self {
            datetime,
            aware: true,
        })
    }

    /// Drop the timezone attachment, keeping the civil fields.
    pub fn without_offset(self) -> Self {
        Self::from_naive(self.naive_local())
    }

    // ── calendar fields ───────────────────────────────────────────────

    /// Civil fields as written, in the attached offset if any.
    #[inline]
    pub fn naive_local(&self) -> NaiveDateTime {
        self.datetime.naive_local()
    }

    /// Civil fields normalized to UTC.
    #[inline]
    pub fn naive_utc(&self) -> NaiveDateTime {
        self.datetime.naive_utc()
    }

    /// The attached offset, `None` for a naive instant.
    #[inline]
    pub fn offset(&self) -> Option<FixedOffset> {
        self.aware.then(|| *self.datetime.offset())
    }

    pub fn year(&self) -> i32 {
        self.naive_local().year()
    }

    pub fn month(&self) -> u32 {
        self.naive_local().month()
    }

    pub fn day(&self) -> u32 {
        self.naive_local().day()
    }

    pub fn hour(&self) -> u32 {
        self.naive_local().hour()
    }

    pub fn minute(&self) -> u32 {
        self.naive_local().minute()
    }

    pub fn second(&self) -> u32 {
        self.naive_local().second()
    }

    pub fn microsecond(&self) -> u32 {
        self.naive_local().nanosecond() / 1_000
    }

    /// The base datetime value with the same civil fields, offset dropped.
    pub fn to_datetime(&self) -> NaiveDateTime {
        self.naive_local()
    }

    /// The aware base value; naive instants are read as UTC.
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.datetime.with_timezone(&Utc)
    }

    // ── derived properties ────────────────────────────────────────────

    /// Integer MJD of the UTC day.
    fn utc_day_number(&self) -> i64 {
        let date = self.naive_utc().date();
        calendar::civil_to_mjd(date.year() as i64, date.month(), date.day())
    }

    /// Modified Julian Date, fraction of day included.
    pub fn mjd(&self) -> f64 {
        calendar::naive_to_mjd(&self.naive_utc())
    }

    pub fn modified_julian_date(&self) -> Time<MJD> {
        Time::new(self.mjd())
    }

    pub fn julian_date(&self) -> Time<JD> {
        self.modified_julian_date().to::<JD>()
    }

    /// Days since the GPS epoch, fraction included.
    pub fn gps_days(&self) -> Time<GPS> {
        self.modified_julian_date().to::<GPS>()
    }

    /// `(doy, gpsw, gpswd)` of this instant's UTC day.
    pub fn gps_calendar(&self) -> GpsCalendar {
        GpsCalendar::from_day_number(self.utc_day_number())
    }

    /// Day of year, 1–366.
    pub fn doy(&self) -> u32 {
        self.gps_calendar().doy
    }

    /// GPS week since 1980-01-06; negative before it.
    pub fn gpsw(&self) -> i64 {
        self.gps_calendar().gpsw
    }

    /// GPS week-day, 0 = Sunday … 6 = Saturday.
    pub fn gpswd(&self) -> u32 {
        self.gps_calendar().gpswd
    }

    /// Seconds since the start of the GPS week (Sunday 00:00).
    pub fn gpswsec(&self) -> Seconds {
        let time = self.naive_utc().time();
        let of_day = time.num_seconds_from_midnight() as f64 + time.nanosecond() as f64 * 1e-9;
        let days = Days::new(self.gpswd() as f64).to::<Second>();
        days + Seconds::new(of_day)
    }

    /// Leap-second adjustment `−(GPS − UTC)`, never positive.
    pub fn leapsec(&self) -> i32 {
        leap_seconds::leap_seconds(&self.naive_utc())
    }

    /// This instant expressed in GPS time: `self − leapsec` seconds.
    ///
    /// The result keeps the receiver's timezone attachment.
    pub fn gpst(&self) -> Self {
        *self - Duration::seconds(self.leapsec() as i64)
    }

    // ── arithmetic ────────────────────────────────────────────────────

    pub fn checked_add(&self, rhs: Duration) -> Option<Self> {
        self.datetime
            .checked_add_signed(rhs)
            .map(|datetime| self.rewrap(datetime))
    }

    pub fn checked_sub(&self, rhs: Duration) -> Option<Self> {
        self.datetime
            .checked_sub_signed(rhs)
            .map(|datetime| self.rewrap(datetime))
    }

    /// Same variant as `self` around a new datetime.
    fn rewrap(&self, datetime: DateTime<FixedOffset>) -> Self {
        Self {
            datetime,
            aware: self.aware,
        }
    }

    // ── formatting ────────────────────────────────────────────────────

    /// ISO-8601 text: `YYYY-MM-DDTHH:MM:SS[.ffffff][±HH:MM]`.
    ///
    /// Microseconds appear only when non-zero, the offset only when one is
    /// attached.
    pub fn isoformat(&self) -> String {
        let fraction = if self.naive_local().nanosecond() == 0 {
            ""
        } else {
            "%.6f"
        };
        let zone = if self.aware { "%:z" } else { "" };
        let pattern = format!("%Y-%m-%dT%H:%M:%S{fraction}{zone}");
        self.datetime.format(&pattern).to_string()
    }
}

/// Convert a qtty day span to a chrono duration at microsecond resolution.
fn days_to_duration(days: Days) -> Duration {
    Duration::microseconds((days.to::<Second>().value() * 1e6).round() as i64)
}

// ═══════════════════════════════════════════════════════════════════════════
// Comparison
// ═══════════════════════════════════════════════════════════════════════════

impl PartialEq for GnssTime {
    fn eq(&self, other: &Self) -> bool {
        self.datetime == other.datetime
    }
}

impl Eq for GnssTime {}

impl PartialOrd for GnssTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GnssTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.datetime.cmp(&other.datetime)
    }
}

impl Hash for GnssTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.naive_utc().hash(state);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Arithmetic
// ═══════════════════════════════════════════════════════════════════════════

impl Add<Duration> for GnssTime {
    type Output = GnssTime;

    fn add(self, rhs: Duration) -> GnssTime {
        self.checked_add(rhs).expect("overflow when adding duration")
    }
}

impl Sub<Duration> for GnssTime {
    type Output = GnssTime;

    fn sub(self, rhs: Duration) -> GnssTime {
        self.checked_sub(rhs).expect("overflow when subtracting duration")
    }
}

impl Add<Days> for GnssTime {
    type Output = GnssTime;

    fn add(self, rhs: Days) -> GnssTime {
        self + days_to_duration(rhs)
    }
}

impl Sub<Days> for GnssTime {
    type Output = GnssTime;

    fn sub(self, rhs: Days) -> GnssTime {
        self - days_to_duration(rhs)
    }
}

impl Sub for GnssTime {
    type Output = Duration;

    fn sub(self, rhs: GnssTime) -> Duration {
        self.datetime.signed_duration_since(rhs.datetime)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Conversions
// ═══════════════════════════════════════════════════════════════════════════

impl From<NaiveDateTime> for GnssTime {
    fn from(local: NaiveDateTime) -> Self {
        Self::from_naive(local)
    }
}

impl From<NaiveDate> for GnssTime {
    fn from(date: NaiveDate) -> Self {
        Self::from_naive(date.and_time(NaiveTime::MIN))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for GnssTime {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::from_datetime(&datetime)
    }
}

impl From<GnssTime> for NaiveDateTime {
    fn from(time: GnssTime) -> Self {
        time.naive_local()
    }
}

impl std::fmt::Display for GnssTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.isoformat())
    }
}

impl FromStr for GnssTime {
    type Err = GnssError;

    /// Parse ISO-8601 text with or without an offset.
    fn from_str(s: &str) -> Result<Self> {
        if let Ok(aware) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::from_datetime(&aware));
        }
        s.parse::<NaiveDateTime>()
            .map(Self::from_naive)
            .map_err(|_| GnssError::InvalidInstant(s.to_string()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GnssTime {
    fn serialize<Ser>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        serializer.serialize_str(&self.isoformat())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GnssTime {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
