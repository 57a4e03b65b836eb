// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! GPS week numbering on top of the day counters.
//!
//! GPS week 0 starts on Sunday 1980-01-06. Week and week-day are derived
//! from the integer day count only: the time of day never shifts them.

use super::calendar::{self, MAX_ABS_MJD};
use super::error::{GnssError, Result};
use super::instant::Time;
use super::scales::{GPS, MJD};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

impl Time<GPS> {
    pub const DAYS_PER_WEEK: i64 = 7;

    /// Weeks covered by the 10-bit broadcast week number.
    pub const ROLLOVER_WEEKS: i64 = 1024;

    /// Whole days since the GPS epoch (floor, so negative before it).
    #[inline]
    pub fn day_number(&self) -> i64 {
        self.value().floor() as i64
    }

    /// GPS week, `floor(days / 7)`. Negative before 1980-01-06.
    #[inline]
    pub fn week(&self) -> i64 {
        self.day_number().div_euclid(Self::DAYS_PER_WEEK)
    }

    /// Day within the GPS week, 0 = Sunday … 6 = Saturday.
    #[inline]
    pub fn week_day(&self) -> u32 {
        self.day_number().rem_euclid(Self::DAYS_PER_WEEK) as u32
    }
}

/// Day-of-year, GPS week and GPS week-day of one calendar day.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GpsCalendar {
    /// Day of the year, 1–366.
    pub doy: u32,
    /// GPS week since 1980-01-06.
    pub gpsw: i64,
    /// GPS week-day, 0 = Sunday … 6 = Saturday.
    pub gpswd: u32,
}

impl GpsCalendar {
    /// Calendar of the civil day with integer MJD `day`.
    pub fn from_day_number(day: i64) -> Self {
        let (year, month, dom) = calendar::mjd_to_civil(day);
        let gps = Time::<MJD>::new(day as f64).to::<GPS>();
        Self {
            doy: calendar::day_of_year(year, month, dom),
            gpsw: gps.week(),
            gpswd: gps.week_day(),
        }
    }

    /// Calendar of the day containing `mjd`; the fraction of day is dropped.
    pub fn from_mjd(mjd: f64) -> Result<Self> {
        if !mjd.is_finite() {
            return Err(GnssError::NonFiniteMjd(mjd));
        }
        if mjd.abs() > MAX_ABS_MJD {
            return Err(GnssError::OutOfRange);
        }
        Ok(Self::from_day_number(mjd.floor() as i64))
    }

    /// Calendar of a Gregorian date, validated first.
    pub fn from_date(year: i64, month: u32, day: u32) -> Result<Self> {
        calendar::validate_date(year, month, day)?;
        Ok(Self::from_day_number(calendar::civil_to_mjd(year, month, day)))
    }

    /// `(doy, gpsw, gpswd)`.
    #[inline]
    pub const fn as_tuple(&self) -> (u32, i64, u32) {
        (self.doy, self.gpsw, self.gpswd)
    }
}

impl From<GpsCalendar> for (u32, i64, u32) {
    fn from(cal: GpsCalendar) -> Self {
        cal.as_tuple()
    }
}

impl PartialEq<(u32, i64, u32)> for GpsCalendar {
    fn eq(&self, other: &(u32, i64, u32)) -> bool {
        self.as_tuple() == *other
    }
}

impl std::fmt::Display for GpsCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.doy, self.gpsw, self.gpswd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scales::GPS_EPOCH_MJD;

    #[test]
    fn week_and_day_at_epoch() {
        let epoch = Time::<MJD>::new(GPS_EPOCH_MJD as f64).to::<GPS>();
        assert_eq!(epoch.week(), 0);
        assert_eq!(epoch.week_day(), 0);
    }

    #[test]
    fn time_of_day_does_not_shift_week_day() {
        let saturday_night = Time::<GPS>::new(6.999);
        assert_eq!(saturday_night.week(), 0);
        assert_eq!(saturday_night.week_day(), 6);
        assert_eq!(Time::<GPS>::new(7.0).week(), 1);
    }

    #[test]
    fn week_day_stays_non_negative_before_epoch() {
        let saturday_before = Time::<GPS>::new(-1.0);
        assert_eq!(saturday_before.week(), -1);
        assert_eq!(saturday_before.week_day(), 6);

        let noon_before = Time::<GPS>::new(-0.5);
        assert_eq!(noon_before.week(), -1);
        assert_eq!(noon_before.week_day(), 6);
    }

    #[test]
    fn calendar_reference_days() {
        assert_eq!(GpsCalendar::from_mjd(55_562.0).unwrap(), (1, 1616, 6));
        assert_eq!(GpsCalendar::from_mjd(56_657.0).unwrap(), (365, 1773, 2));
        assert_eq!(GpsCalendar::from_mjd(56_657.99).unwrap(), (365, 1773, 2));
        assert_eq!(GpsCalendar::from_date(2013, 12, 31).unwrap(), (365, 1773, 2));
        assert_eq!(GpsCalendar::from_date(2012, 12, 31).unwrap().doy, 366);
    }

    #[test]
    fn calendar_cycles_weekly() {
        for day in 44_000..44_030 {
            let now = GpsCalendar::from_day_number(day);
            let next = GpsCalendar::from_day_number(day + 7);
            assert_eq!(next.gpswd, now.gpswd);
            assert_eq!(next.gpsw, now.gpsw + 1);
        }
    }

    #[test]
    fn calendar_rejects_bad_input() {
        assert!(matches!(GpsCalendar::from_mjd(f64::NAN), Err(GnssError::NonFiniteMjd(_))));
        assert_eq!(GpsCalendar::from_mjd(-1.0e11), Err(GnssError::OutOfRange));
        assert_eq!(
            GpsCalendar::from_date(2013, 2, 30),
            Err(GnssError::InvalidDate { year: 2013, month: 2, day: 30 })
        );
    }

    #[test]
    fn calendar_display_and_tuple() {
        let cal = GpsCalendar::from_day_number(55_562);
        assert_eq!(cal.to_string(), "(1, 1616, 6)");
        let (doy, gpsw, gpswd): (u32, i64, u32) = cal.into();
        assert_eq!((doy, gpsw, gpswd), (1, 1616, 6));
    }
}
