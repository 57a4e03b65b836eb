// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Leap seconds — UTC ↔ GPS time offset
//!
//! GPS time was aligned with UTC at 1980-01-06 and has not applied any of
//! the leap seconds inserted into UTC since. The table below lists, for each
//! insertion, the UTC date from which the new offset applies and the
//! cumulative count **GPS − UTC** in seconds.
//!
//! The table is compiled in and read-only. It must be extended by hand when
//! the IERS announces a new leap second; for instants after
//! [`LEAP_TABLE_VALID_UNTIL_MJD`] the last known offset is returned and a
//! warning is logged.
//!
//! ## Sign convention
//! [`leap_seconds`] reports the offset as a non-positive number, so that
//! `GPST = UTC − leap_seconds`.

use crate::calendar::civil_to_mjd;
use chrono::{Datelike, NaiveDateTime};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One leap-second insertion.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LeapSecond {
    /// MJD of the first UTC day on which `gps_utc` applies.
    pub mjd: i64,
    /// GPS − UTC in whole seconds from that day on.
    pub gps_utc: i32,
}

impl LeapSecond {
    const fn new(year: i64, month: u32, day: u32, gps_utc: i32) -> Self {
        Self {
            mjd: civil_to_mjd(year, month, day),
            gps_utc,
        }
    }
}

/// GPS − UTC before the first insertion.
pub const BASELINE_GPS_UTC: i32 = 0;

/// Last UTC day for which [`LEAP_SECONDS`] is known to be complete.
pub const LEAP_TABLE_VALID_UNTIL_MJD: i64 = civil_to_mjd(2026, 12, 28);

#[rustfmt::skip]
pub static LEAP_SECONDS: [LeapSecond; 18] = [
    LeapSecond::new(1981, 7, 1,  1),
    LeapSecond::new(1982, 7, 1,  2),
    LeapSecond::new(1983, 7, 1,  3),
    LeapSecond::new(1985, 7, 1,  4),
    LeapSecond::new(1988, 1, 1,  5),
    LeapSecond::new(1990, 1, 1,  6),
    LeapSecond::new(1991, 1, 1,  7),
    LeapSecond::new(1992, 7, 1,  8),
    LeapSecond::new(1993, 7, 1,  9),
    LeapSecond::new(1994, 7, 1, 10),
    LeapSecond::new(1996, 1, 1, 11),
    LeapSecond::new(1997, 7, 1, 12),
    LeapSecond::new(1999, 1, 1, 13),
    LeapSecond::new(2006, 1, 1, 14),
    LeapSecond::new(2009, 1, 1, 15),
    LeapSecond::new(2012, 7, 1, 16),
    LeapSecond::new(2015, 7, 1, 17),
    LeapSecond::new(2017, 1, 1, 18),
];

/// GPS − UTC in seconds on the UTC day with integer MJD `day`.
///
/// Picks the last entry effective on or before `day`, or
/// [`BASELINE_GPS_UTC`] when `day` predates the table.
pub fn gps_utc_offset(day: i64) -> i32 {
    let applied = LEAP_SECONDS.partition_point(|leap| leap.mjd <= day);
    let offset = match applied {
        0 => BASELINE_GPS_UTC,
        n => LEAP_SECONDS[n - 1].gps_utc,
    };
    log::trace!("GPS-UTC on MJD {day}: {offset} s");
    if day > LEAP_TABLE_VALID_UNTIL_MJD {
        log::warn!(
            "MJD {day} is past the leap-second table horizon (MJD {LEAP_TABLE_VALID_UNTIL_MJD}); \
             GPS-UTC may be stale"
        );
    }
    offset
}

/// Signed leap-second adjustment for a UTC civil datetime:
/// `−(GPS − UTC)`, never positive.
pub fn leap_seconds(utc: &NaiveDateTime) -> i32 {
    let date = utc.date();
    -gps_utc_offset(civil_to_mjd(date.year() as i64, date.month(), date.day()))
}
