// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # GPS calendar query
//!
//! `gpscal` answers `(doy, gpsw, gpswd)` for a date given in any of several
//! shapes. [`CalendarArgs`] collects whatever the caller supplied and
//! [`CalendarArgs::resolve`] keeps exactly one form, by priority:
//!
//! 1. an MJD value,
//! 2. a `"YYYY/MM/DD"` string,
//! 3. a datetime-like value,
//! 4. positional `(year, month, day)`,
//! 5. `year`, `month` and `day` set one by one (all three required),
//! 6. nothing — the receiver instant of [`GnssTime::gpscal`].
//!
//! Lower-priority forms are dropped without error (they are logged at
//! `debug` level). The free function [`gpscal`] takes a resolved
//! [`CalendarQuery`] directly, so a date is always required there.
//!
//! ```rust
//! use gnsstime::{gpscal, CalendarArgs, CalendarQuery, GnssTime};
//!
//! assert_eq!(gpscal((2013, 12, 31)).unwrap(), (365, 1773, 2));
//! assert_eq!(gpscal("2013/12/31").unwrap(), (365, 1773, 2));
//! assert_eq!(gpscal(CalendarQuery::Mjd(56_657.0)).unwrap(), (365, 1773, 2));
//!
//! let t = GnssTime::new(2011, 1, 1).unwrap();
//! assert_eq!(t.gpscal(CalendarArgs::new()).unwrap(), (1, 1616, 6));
//! assert_eq!(t.gpscal(CalendarArgs::new().ymd("2013/12/31")).unwrap(), (365, 1773, 2));
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::calendar;
use crate::error::Result;
use crate::gnss::GnssTime;
use crate::gps_ext::GpsCalendar;

/// One date, in the shape the caller gave it.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarQuery {
    /// Modified Julian Date.
    Mjd(f64),
    /// Calendar string such as `"2013/12/31"`.
    Ymd(String),
    /// A datetime-like value; its UTC-normalized date is used.
    Instant(GnssTime),
    /// Calendar fields.
    Date { year: i64, month: u32, day: u32 },
}

impl CalendarQuery {
    /// `(doy, gpsw, gpswd)` of the queried day.
    pub fn gps_calendar(&self) -> Result<GpsCalendar> {
        match self {
            CalendarQuery::Mjd(mjd) => {
                Ok(GnssTime::from_naive(calendar::mjd_to_date(*mjd)?).gps_calendar())
            }
            CalendarQuery::Ymd(ymd) => {
                Ok(GnssTime::from(calendar::ymd_to_date(ymd)?).gps_calendar())
            }
            CalendarQuery::Instant(instant) => Ok(instant.gps_calendar()),
            CalendarQuery::Date { year, month, day } => {
                GpsCalendar::from_date(*year, *month, *day)
            }
        }
    }
}

impl From<(i64, u32, u32)> for CalendarQuery {
    fn from((year, month, day): (i64, u32, u32)) -> Self {
        CalendarQuery::Date { year, month, day }
    }
}

impl From<&str> for CalendarQuery {
    fn from(ymd: &str) -> Self {
        CalendarQuery::Ymd(ymd.to_string())
    }
}

impl From<String> for CalendarQuery {
    fn from(ymd: String) -> Self {
        CalendarQuery::Ymd(ymd)
    }
}

impl From<GnssTime> for CalendarQuery {
    fn from(instant: GnssTime) -> Self {
        CalendarQuery::Instant(instant)
    }
}

impl From<NaiveDate> for CalendarQuery {
    fn from(date: NaiveDate) -> Self {
        CalendarQuery::Instant(date.into())
    }
}

impl From<NaiveDateTime> for CalendarQuery {
    fn from(datetime: NaiveDateTime) -> Self {
        CalendarQuery::Instant(datetime.into())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CalendarQuery {
    fn from(datetime: DateTime<Tz>) -> Self {
        CalendarQuery::Instant(datetime.into())
    }
}

/// Every argument shape `gpscal` accepts, before priority resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarArgs {
    mjd: Option<f64>,
    ymd: Option<String>,
    instant: Option<GnssTime>,
    positional: Option<(i64, u32, u32)>,
    year: Option<i64>,
    month: Option<u32>,
    day: Option<u32>,
}

impl CalendarArgs {
    /// No arguments: the receiver instant is queried.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mjd(mut self, mjd: f64) -> Self {
        self.mjd = Some(mjd);
        self
    }

    pub fn ymd(mut self, ymd: impl Into<String>) -> Self {
        self.ymd = Some(ymd.into());
        self
    }

    /// A datetime-like value: `GnssTime`, chrono naive or aware values.
    pub fn date(mut self, date: impl Into<GnssTime>) -> Self {
        self.instant = Some(date.into());
        self
    }

    /// Positional `(year, month, day)`.
    pub fn positional(mut self, year: i64, month: u32, day: u32) -> Self {
        self.positional = Some((year, month, day));
        self
    }

    pub fn year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }

    pub fn month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }

    /// Keep the highest-priority form supplied, or `None` when nothing was.
    pub fn resolve(self) -> Option<CalendarQuery> {
        let fields = match (self.year, self.month, self.day) {
            (Some(year), Some(month), Some(day)) => Some(CalendarQuery::Date { year, month, day }),
            (None, None, None) => None,
            partial => {
                log::debug!("ignoring incomplete year/month/day arguments {partial:?}");
                None
            }
        };
        let forms = [
            self.mjd.map(CalendarQuery::Mjd),
            self.ymd.map(CalendarQuery::Ymd),
            self.instant.map(CalendarQuery::Instant),
            self.positional.map(CalendarQuery::from),
            fields,
        ];

        let mut supplied = forms.into_iter().flatten();
        let chosen = supplied.next();
        match &chosen {
            Some(query) => log::debug!("calendar query resolved to {query:?}"),
            None => log::debug!("no calendar arguments, querying the receiver"),
        }
        for ignored in supplied {
            log::debug!("ignoring lower-priority calendar argument {ignored:?}");
        }
        chosen
    }
}

impl From<CalendarQuery> for CalendarArgs {
    fn from(query: CalendarQuery) -> Self {
        let args = CalendarArgs::new();
        match query {
            CalendarQuery::Mjd(mjd) => args.mjd(mjd),
            CalendarQuery::Ymd(ymd) => args.ymd(ymd),
            CalendarQuery::Instant(instant) => args.date(instant),
            CalendarQuery::Date { year, month, day } => args.positional(year, month, day),
        }
    }
}

impl From<(i64, u32, u32)> for CalendarArgs {
    fn from((year, month, day): (i64, u32, u32)) -> Self {
        CalendarArgs::new().positional(year, month, day)
    }
}

impl From<GnssTime> for CalendarArgs {
    fn from(instant: GnssTime) -> Self {
        CalendarArgs::new().date(instant)
    }
}

impl GnssTime {
    /// `(doy, gpsw, gpswd)` for the date resolved from `args`, or for this
    /// instant when `args` is empty.
    pub fn gpscal(&self, args: impl Into<CalendarArgs>) -> Result<GpsCalendar> {
        match args.into().resolve() {
            Some(query) => query.gps_calendar(),
            None => Ok(self.gps_calendar()),
        }
    }
}

/// `(doy, gpsw, gpswd)` for a date given in any accepted shape.
pub fn gpscal(query: impl Into<CalendarQuery>) -> Result<GpsCalendar> {
    query.into().gps_calendar()
}
