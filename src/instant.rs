// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Generic day-counter instant.
//!
//! [`Time<S>`] stores a scalar quantity in [`Days`] whose *meaning* is
//! determined by the compile-time marker `S: TimeScale`. Arithmetic with
//! day quantities, differences between instants, UTC conversion,
//! serialisation and display are implemented once for every scale.
//!
//! Methods that only make sense for a particular counter (e.g.
//! [`Time::<GPS>::week()`](crate::GPS)) live in inherent `impl` blocks gated
//! on the concrete marker type.

use chrono::{DateTime, Utc};
use qtty::*;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for day counters.
///
/// A scale defines a human-readable **label** and a pair of conversions
/// between its native quantity (in [`Days`]) and the **Modified Julian Date**
/// on the civil axis, the canonical representation used by the crate.
///
/// Every scale shipped here is a constant epoch offset, so the compiler
/// inlines and folds the conversions away.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`Time`] formatting.
    const LABEL: &'static str;

    /// Convert a quantity in this scale to an MJD.
    fn to_mjd(value: Days) -> Days;

    /// Convert an MJD back to this scale's native quantity.
    fn from_mjd(mjd: Days) -> Days;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S> — the generic instant
// ═══════════════════════════════════════════════════════════════════════════

/// A point on day counter `S`.
///
/// `PhantomData` is zero-sized, so `Time<S>` is layout-identical to `Days`
/// (a single `f64`).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw scalar (days since the scale's epoch).
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Modified Julian Date of this instant.
    #[inline]
    pub fn modified_julian_day(&self) -> Days {
        S::to_mjd(self.quantity)
    }

    /// Build an instant from a Modified Julian Date.
    #[inline]
    pub fn from_modified_julian_day(mjd: Days) -> Self {
        Self::from_days(S::from_mjd(mjd))
    }

    /// Convert this instant to another day counter.
    ///
    /// ```text
    /// self → MJD → target
    /// ```
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::<T>::from_modified_julian_day(S::to_mjd(self.quantity))
    }

    // ── UTC helpers ───────────────────────────────────────────────────

    /// Convert to a `chrono::DateTime<Utc>`, rounded to whole microseconds.
    ///
    /// Returns `None` if the value is not finite or falls outside chrono's
    /// representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let mjd = self.modified_julian_day().value();
        crate::calendar::mjd_to_date(mjd)
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// Build an instant from a `chrono::DateTime<Utc>`.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let mjd = crate::calendar::naive_to_mjd(&datetime.naive_utc());
        Self::from_modified_julian_day(Days::new(mjd))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Generic trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display ───────────────────────────────────────────────────────────────

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> AddAssign<Days> for Time<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl<S: TimeScale> SubAssign<Days> for Time<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── From/Into Days ────────────────────────────────────────────────────────

impl<S: TimeScale> From<Days> for Time<S> {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl<S: TimeScale> From<Time<S>> for Days {
    #[inline]
    fn from(time: Time<S>) -> Self {
        time.quantity
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::super::scales::{GPS, JD, MJD};
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_mjd_creation() {
        let mjd = Time::<MJD>::new(55_562.0);
        assert_eq!(mjd.quantity(), Days::new(55_562.0));
        assert_eq!(mjd.value(), 55_562.0);
    }

    #[test]
    fn test_from_utc_has_no_offset() {
        let datetime = Utc.with_ymd_and_hms(2011, 1, 1, 0, 0, 0).unwrap();
        let mjd = Time::<MJD>::from_utc(datetime);
        assert_eq!(mjd.quantity(), Days::new(55_562.0));

        let jd = Time::<JD>::from_utc(Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap());
        assert_eq!(jd.quantity(), Days::new(2_451_545.0));
    }

    #[test]
    fn test_utc_roundtrip() {
        let datetime = Utc.with_ymd_and_hms(2015, 7, 1, 6, 30, 15).unwrap();
        let gps = Time::<GPS>::from_utc(datetime);
        assert_eq!(gps.to_utc(), Some(datetime));
    }

    #[test]
    fn test_to_utc_out_of_range() {
        assert_eq!(Time::<MJD>::new(f64::NAN).to_utc(), None);
        assert_eq!(Time::<MJD>::new(1.0e12).to_utc(), None);
    }

    #[test]
    fn test_mjd_add_sub_days() {
        let mjd = Time::<MJD>::new(59_000.0);
        assert_eq!((mjd + Days::new(1.5)).quantity(), Days::new(59_001.5));
        assert_eq!((mjd - Days::new(1.5)).quantity(), Days::new(58_998.5));
    }

    #[test]
    fn test_mjd_sub_mjd() {
        let diff = Time::<MJD>::new(59_001.0) - Time::<MJD>::new(59_000.0);
        assert_eq!(diff, 1.0);
    }

    #[test]
    fn test_add_assign_sub_assign() {
        let mut gps = Time::<GPS>::new(7.0);
        gps += Days::new(7.0);
        assert_eq!(gps.quantity(), Days::new(14.0));
        gps -= Days::new(0.5);
        assert_eq!(gps.quantity(), Days::new(13.5));
    }

    #[test]
    fn test_comparison() {
        assert!(Time::<MJD>::new(59_000.0) < Time::<MJD>::new(59_001.0));
    }

    #[test]
    fn test_into_days() {
        let mjd = Time::<MJD>::new(51_544.5);
        let days: Days = mjd.into();
        assert_eq!(days, 51_544.5);
        assert_eq!(Time::<MJD>::from(days), mjd);
    }

    #[test]
    fn test_display() {
        assert!(format!("{}", Time::<JD>::new(2_451_545.0)).contains("Julian Day"));
        assert!(format!("{}", Time::<MJD>::new(51_544.5)).contains("MJD"));
        assert!(format!("{}", Time::<GPS>::new(3.0)).contains("GPS day"));
    }
}
