// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies a specific time scale and encodes how
//! millisecond counts on that scale relate to the canonical **GPS time**.
//!
//! | Marker | Epoch | Leap seconds |
//! |--------|-------|--------------|
//! | [`GPST`] | 1980-01-06T00:00:00 | counted as increments (continuous) |
//! | [`UnixTime`] | 1970-01-01T00:00:00 | repeated (POSIX, civil) |
//! | [`LinearUnix`] | 1970-01-01T00:00:00 | counted as increments |
//! | [`BDT`] | 1980-01-06T00:00:00 − 14 s | none |
//!
//! GLONASS time is leap-stepped Moscow civil time and is only ever
//! transmitted as a time of day; it is handled by the
//! [`regional`](crate::regional) functions rather than by a marker.

use super::convert;
use super::instant::TimeScale;
use super::leap::LeapSecondTable;
use super::regional;

// ---------------------------------------------------------------------------
// Satellite scales
// ---------------------------------------------------------------------------

/// GPS Time: continuous millisecond count since 1980-01-06T00:00:00.
///
/// Never repeats or skips.  Seen from civil time, each inserted leap second
/// is one extra second in this count.  This is the identity scale.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GPST;

impl TimeScale for GPST {
    const LABEL: &'static str = "GPST";

    #[inline(always)]
    fn to_gpst(value: i64, _leaps: &LeapSecondTable) -> i64 {
        value
    }

    #[inline(always)]
    fn from_gpst(gpst: i64, _leaps: &LeapSecondTable) -> i64 {
        gpst
    }
}

/// BeiDou Time: leap-free, 14 s behind GPS time, counted on the GPS epoch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BDT;

impl TimeScale for BDT {
    const LABEL: &'static str = "BDT";

    #[inline(always)]
    fn to_gpst(value: i64, _leaps: &LeapSecondTable) -> i64 {
        regional::bdt_to_gps(value)
    }

    #[inline(always)]
    fn from_gpst(gpst: i64, _leaps: &LeapSecondTable) -> i64 {
        regional::gps_to_bdt(gpst)
    }
}

// ---------------------------------------------------------------------------
// Civil scales
// ---------------------------------------------------------------------------

/// Unix Time: milliseconds since 1970-01-01T00:00:00 UTC, POSIX style.
///
/// Leap seconds are not counted: the inserted second repeats the previous
/// civil second.  The inverse conversion is therefore two-valued inside a
/// leap second, see [`convert::unix_to_gps`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnixTime;

impl TimeScale for UnixTime {
    const LABEL: &'static str = "UNIX";

    #[inline]
    fn to_gpst(value: i64, leaps: &LeapSecondTable) -> i64 {
        convert::unix_to_gps(leaps, value)
    }

    #[inline]
    fn from_gpst(gpst: i64, leaps: &LeapSecondTable) -> i64 {
        convert::gps_to_unix(leaps, gpst)
    }
}

/// Milliseconds since 1970-01-01 obtained from GPS time by the fixed epoch
/// shift alone.
///
/// Differences on this scale are true elapsed time across leap seconds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinearUnix;

impl TimeScale for LinearUnix {
    const LABEL: &'static str = "UNIX+LS";

    #[inline(always)]
    fn to_gpst(value: i64, _leaps: &LeapSecondTable) -> i64 {
        convert::unix_to_gps_ignoring_leaps(value)
    }

    #[inline(always)]
    fn from_gpst(gpst: i64, _leaps: &LeapSecondTable) -> i64 {
        convert::gps_to_unix_ignoring_leaps(gpst)
    }
}

// ---------------------------------------------------------------------------
// Cross-scale From/Into  (generated by macro)
// ---------------------------------------------------------------------------

/// Generate pairwise `From<Instant<A>> for Instant<B>` implementations.
macro_rules! impl_instant_conversions {
    // Base case: single scale, nothing left.
    ($single:ty) => {};

    // Recursive: generate pairs between $first and every $rest, then recurse.
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<super::instant::Instant<$first>> for super::instant::Instant<$rest> {
                #[inline]
                fn from(t: super::instant::Instant<$first>) -> Self {
                    t.to::<$rest>()
                }
            }

            impl From<super::instant::Instant<$rest>> for super::instant::Instant<$first> {
                #[inline]
                fn from(t: super::instant::Instant<$rest>) -> Self {
                    t.to::<$first>()
                }
            }
        )+

        impl_instant_conversions!($($rest),+);
    };
}

impl_instant_conversions!(GPST, BDT, UnixTime, LinearUnix);

#[cfg(test)]
mod tests {
    use super::super::instant::Instant;
    use super::super::leap::GPST_LEAP_EPOCHS;
    use super::*;

    #[test]
    fn gpst_identity() {
        let t = Instant::<GPST>::new(123_456);
        assert_eq!(t.to::<GPST>(), t);
    }

    #[test]
    fn bdt_is_fourteen_seconds_behind() {
        let gps = Instant::<GPST>::new(1_000_000_000_000);
        let bdt: Instant<BDT> = gps.to::<BDT>();
        assert_eq!(bdt.millis(), 999_999_986_000);
        let back: Instant<GPST> = bdt.into();
        assert_eq!(back, gps);
    }

    #[test]
    fn unix_epoch_offset() {
        let leaps = LeapSecondTable::builtin();
        let unix = Instant::<GPST>::new(0).to_with::<UnixTime>(&leaps);
        assert_eq!(unix.millis(), 315_964_800_000);
    }

    #[test]
    fn unix_and_linear_differ_by_leap_count() {
        let leaps = LeapSecondTable::builtin();
        let gps = Instant::<GPST>::new(GPST_LEAP_EPOCHS[17] + 5_000);
        let civil = gps.to_with::<UnixTime>(&leaps);
        let linear = gps.to_with::<LinearUnix>(&leaps);
        assert_eq!(linear.millis() - civil.millis(), 18_000);
    }

    #[test]
    fn civil_from_into() {
        let gps = Instant::<GPST>::new(1_300_000_000_000);
        let civil: Instant<UnixTime> = gps.into();
        let back: Instant<GPST> = Instant::from(civil);
        assert_eq!(back, gps);
    }

    #[test]
    fn bdt_to_civil_routes_through_gps() {
        let leaps = LeapSecondTable::builtin();
        let bdt = Instant::<BDT>::new(1_300_000_000_000);
        let civil = bdt.to_with::<UnixTime>(&leaps);
        assert_eq!(civil.millis(), 1_300_000_014_000 + 315_964_800_000 - 18_000);
    }
}
