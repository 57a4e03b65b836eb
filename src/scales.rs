// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day-counter marker types.
//!
//! Each zero-sized type identifies a continuous day count and encodes how
//! values in that count relate to the canonical **Modified Julian Date** on
//! the civil (UTC) axis.
//!
//! | Marker | Description | Epoch (MJD) |
//! |--------|-------------|-------------|
//! | [`JD`] | Julian Date | −2 400 000.5 |
//! | [`MJD`] | Modified Julian Date, 1858-11-17 | 0 |
//! | [`GPS`] | Days since GPS week 0, 1980-01-06 | 44 244 |
//!
//! All three are pure epoch offsets: converting between them never applies
//! leap seconds. The UTC→GPS time correction lives on
//! [`GnssTime::gpst`](crate::GnssTime::gpst).

use super::instant::TimeScale;
use qtty::Days;

/// Julian Date — days since noon, 4713 BC January 1 (proleptic Julian).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

/// `JD = MJD + 2 400 000.5`.
const JD_MINUS_MJD: Days = Days::new(crate::calendar::MJD_TO_JD);

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_mjd(value: Days) -> Days {
        value - JD_MINUS_MJD
    }

    #[inline(always)]
    fn from_mjd(mjd: Days) -> Days {
        mjd + JD_MINUS_MJD
    }
}

/// Modified Julian Date — the identity scale.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct MJD;

impl TimeScale for MJD {
    const LABEL: &'static str = "MJD";

    #[inline(always)]
    fn to_mjd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_mjd(mjd: Days) -> Days {
        mjd
    }
}

// ---------------------------------------------------------------------------
// Navigation counters
// ---------------------------------------------------------------------------

/// GPS day count — continuous days since 1980-01-06T00:00:00, the start of
/// GPS week 0.
///
/// Week numbering is done on the civil calendar day, so this counter shares
/// the UTC axis with [`MJD`].
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct GPS;

/// Integer MJD of the GPS epoch (1980-01-06).
pub const GPS_EPOCH_MJD: i64 = crate::calendar::civil_to_mjd(1980, 1, 6);

const GPS_EPOCH: Days = Days::new(GPS_EPOCH_MJD as f64);

impl TimeScale for GPS {
    const LABEL: &'static str = "GPS day";

    #[inline(always)]
    fn to_mjd(value: Days) -> Days {
        value + GPS_EPOCH
    }

    #[inline(always)]
    fn from_mjd(mjd: Days) -> Days {
        mjd - GPS_EPOCH
    }
}

// ---------------------------------------------------------------------------
// Cross-scale From/Into and .to::<T>()  (generated by macro)
// ---------------------------------------------------------------------------

/// Generate pairwise `From<Time<A>> for Time<B>` implementations.
macro_rules! impl_time_conversions {
    // Base case: single scale, nothing left.
    ($single:ty) => {};

    // Recursive: generate pairs between $first and every $rest, then recurse.
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<super::instant::Time<$first>> for super::instant::Time<$rest> {
                #[inline]
                fn from(t: super::instant::Time<$first>) -> Self {
                    t.to::<$rest>()
                }
            }

            impl From<super::instant::Time<$rest>> for super::instant::Time<$first> {
                #[inline]
                fn from(t: super::instant::Time<$rest>) -> Self {
                    t.to::<$first>()
                }
            }
        )+

        impl_time_conversions!($($rest),+);
    };
}

impl_time_conversions!(JD, MJD, GPS);
