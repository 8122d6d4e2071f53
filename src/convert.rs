// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Millisecond-level conversions between GPS time and civil time.
//!
//! Every function here is pure and total over `i64`.  Instants outside the
//! leap table simply saturate the leap count at `0` or at the table size;
//! arithmetic at the extreme ends of the `i64` range wraps instead of
//! panicking.
//!
//! Naming follows the scales:
//!
//! | Term | Meaning |
//! |------|---------|
//! | *gps* | ms since 1980-01-06T00:00:00, leap seconds counted as increments |
//! | *unix* | ms since 1970-01-01T00:00:00, leap-second-naive (repeats) |
//! | *ignoring leaps* | fixed epoch shift only, no leap term |
//!
//! ## Civil → GPS near a leap second
//!
//! During an inserted second the same civil value is shown twice, so the
//! inverse mapping is two-valued.  [`unix_to_gps`] evaluates the leap count
//! once, on the uncorrected value, and therefore always lands on the
//! instant *before* the inserted second.  Callers that need the other
//! candidate add one second themselves.

use crate::leap::{self, LeapSecondTable};
use crate::period::Period;
use crate::resolve::resolve;
use qtty::Days;

pub const MS_IN_SECOND: i64 = 1_000;
pub const MS_IN_HOUR: i64 = 60 * 60 * MS_IN_SECOND;
pub const MS_IN_DAY: i64 = 24 * MS_IN_HOUR;
pub const MS_IN_WEEK: i64 = 7 * MS_IN_DAY;
pub const SEC_IN_WEEK: i64 = MS_IN_WEEK / MS_IN_SECOND;

/// GPS epoch minus UNIX epoch: 5 days (Jan 1 → Jan 6) + 2 leap days
/// (1972, 1976) + 10 common years.
pub const GPS_UNIX_DIFF: i64 = (5 + 2 + 10 * 365) * MS_IN_DAY;
pub const GPS_UNIX_DIFF_S: i64 = GPS_UNIX_DIFF / MS_IN_SECOND;

/// 2100-01-01 plus one minute minus leap seconds, in GPS ms.  Used as an
/// "obviously in the future" sentinel.
pub const Y2100: i64 = 3_786_480_060_000;

/// Modified Julian Date of the GPS epoch.
pub const MJD_GPS_EPOCH: i64 = 44_244;

#[inline]
fn leap_ms(count: usize) -> i64 {
    count as i64 * MS_IN_SECOND
}

// ---------------------------------------------------------------------------
// GPS ↔ civil
// ---------------------------------------------------------------------------

/// `unix − gps` at the GPS instant `gps`.
#[inline]
pub fn gps_unix_diff_at(leaps: &LeapSecondTable, gps: i64) -> i64 {
    GPS_UNIX_DIFF - leap_ms(leaps.leap_seconds_at(gps))
}

/// GPS → UNIX (civil, leap-second-naive).
#[inline]
pub fn gps_to_unix(leaps: &LeapSecondTable, gps: i64) -> i64 {
    gps.wrapping_add(gps_unix_diff_at(leaps, gps))
}

/// UNIX → GPS.
///
/// Single pass: the leap count is looked up on the value re-based on the GPS
/// epoch *before* correction.  See the module docs for the behaviour inside
/// a leap second.
#[inline]
pub fn unix_to_gps(leaps: &LeapSecondTable, unix: i64) -> i64 {
    let uncorrected = unix.wrapping_sub(GPS_UNIX_DIFF);
    uncorrected.wrapping_add(leap_ms(leaps.leap_seconds_at_uncorrected(uncorrected)))
}

/// GPS → UNIX with the fixed epoch shift only.
///
/// The result is a linear count in which leap seconds are increments, which
/// is what elapsed-time arithmetic across a leap second wants.
#[inline]
pub const fn gps_to_unix_ignoring_leaps(gps: i64) -> i64 {
    gps.wrapping_add(GPS_UNIX_DIFF)
}

/// Inverse of [`gps_to_unix_ignoring_leaps`].
#[inline]
pub const fn unix_to_gps_ignoring_leaps(unix: i64) -> i64 {
    unix.wrapping_sub(GPS_UNIX_DIFF)
}

// ---------------------------------------------------------------------------
// Regional scales (leap-stepped, fixed offset from civil time)
// ---------------------------------------------------------------------------

/// Offset within `period` of the GPS instant `gps` on a regional scale that
/// follows civil time shifted by `regional_offset` ms.
///
/// The Euclidean remainder keeps the result in `0..period`, whatever the sign
/// of the intermediate sum.
pub fn to_regional(leaps: &LeapSecondTable, gps: i64, regional_offset: i64, period: Period) -> i64 {
    gps.wrapping_add(regional_offset)
        .wrapping_sub(leap_ms(leaps.leap_seconds_at(gps)))
        .rem_euclid(period.millis())
}

/// Absolute GPS instant whose regional time-of-day is `regional_ms_of_day`,
/// picking the day nearest to `reference`.
///
/// The regional offset is removed, the day is resolved on the uncorrected
/// value, and the leap correction is then applied once using the
/// uncorrected lookup (same discipline as [`unix_to_gps`]).
pub fn from_regional_to_absolute(
    leaps: &LeapSecondTable,
    regional_ms_of_day: i64,
    regional_offset: i64,
    reference: i64,
) -> i64 {
    let uncorrected = resolve(
        reference,
        regional_ms_of_day.wrapping_sub(regional_offset),
        Period::Day,
    );
    uncorrected.wrapping_add(leap_ms(leaps.leap_seconds_at_uncorrected(uncorrected)))
}

// ---------------------------------------------------------------------------
// Modified Julian Date
// ---------------------------------------------------------------------------

/// Integer MJD of the GPS day containing `gps`.
#[inline]
pub const fn mjd(gps: i64) -> i64 {
    gps.div_euclid(MS_IN_DAY) + MJD_GPS_EPOCH
}

/// GPS instant at `ms_of_day` into the GPS day numbered `mjd`.
#[inline]
pub const fn mjd_to_gps(mjd: i64, ms_of_day: i64) -> i64 {
    mjd.wrapping_sub(MJD_GPS_EPOCH)
        .wrapping_mul(MS_IN_DAY)
        .wrapping_add(ms_of_day)
}

/// Fractional MJD of `gps`.
#[inline]
pub fn mjd_days(gps: i64) -> Days {
    Days::new(MJD_GPS_EPOCH as f64 + gps as f64 / MS_IN_DAY as f64)
}

// ---------------------------------------------------------------------------
// System clock
// ---------------------------------------------------------------------------

/// Current GPS time derived from the system clock and the process-wide leap
/// table.  Only as good as the host clock; don't rely upon it for anything
/// better than a rollover reference.
pub fn gps_now() -> i64 {
    unix_to_gps(&leap::current(), chrono::Utc::now().timestamp_millis())
}

/// Number of leap seconds in effect right now.
pub fn current_leap_second_count() -> usize {
    leap::current().leap_seconds_at(gps_now())
}
