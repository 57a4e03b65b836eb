// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! GNSS calendar algebra on top of a calendar datetime.
//!
//! This crate adds the conversions GNSS analysis needs to a `chrono`
//! datetime: Modified Julian Date, GPS week / week-day / day-of-year, and
//! GPS time derived from UTC through the historical leap-second table.
//!
//! # Core types
//!
//! - [`GnssTime`] — calendar datetime with derived `mjd`, `doy`, `gpsw`,
//!   `gpswd`, `gpswsec`, `leapsec` and `gpst` properties.
//! - [`GpsCalendar`] — the `(doy, gpsw, gpswd)` triple.
//! - [`CalendarArgs`] / [`CalendarQuery`] — the flexible input accepted by
//!   [`gpscal`] and [`GnssTime::gpscal`].
//! - [`Time<S>`] — real-valued day count parameterised by a [`TimeScale`]
//!   marker ([`JD`], [`MJD`], [`GPS`]).
//!
//! # Free functions
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`date_to_mjd`] | Gregorian date + time of day → MJD |
//! | [`mjd_to_date`] | MJD → Gregorian datetime |
//! | [`ymd_to_date`] | `"YYYY/MM/DD"` → date |
//! | [`gpscal`] | any accepted date shape → [`GpsCalendar`] |
//! | [`leap_seconds`] | UTC datetime → leap-second adjustment |
//!
//! # Example
//!
//! ```rust
//! use gnsstime::{gpscal, GnssTime};
//!
//! let t = GnssTime::new(2011, 1, 1).unwrap();
//! assert_eq!(t.gpscal(gnsstime::CalendarArgs::new()).unwrap(), (1, 1616, 6));
//! assert_eq!(gpscal((2013, 12, 31)).unwrap(), (365, 1773, 2));
//! ```
//!
//! # Features
//!
//! - `serde`: serialization of [`Time<S>`] (as `f64`), [`GnssTime`] (as
//!   ISO-8601 text), [`GpsCalendar`] and [`LeapSecond`].

pub mod calendar;
mod error;
mod gnss;
mod gps_ext;
pub(crate) mod instant;
pub mod leap_seconds;
mod query;
pub(crate) mod scales;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{date_to_mjd, mjd_to_date, ymd_to_date};
pub use error::{GnssError, Result};
pub use gnss::GnssTime;
pub use gps_ext::GpsCalendar;
pub use instant::{Time, TimeScale};
pub use leap_seconds::{leap_seconds, LeapSecond};
pub use query::{gpscal, CalendarArgs, CalendarQuery};
pub use scales::{GPS, GPS_EPOCH_MJD, JD, MJD};

/// Modified Julian Date on the civil axis.
///
/// This is a type alias for [`Time<MJD>`].
pub type ModifiedJulianDate = Time<MJD>;

/// Julian Date on the civil axis.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Days since the start of GPS week 0.
///
/// This is a type alias for [`Time<GPS>`].
pub type GpsDays = Time<GPS>;
