// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! GLONASS and BeiDou time.
//!
//! # GLONASS
//!
//! GLONASS time follows UTC(SU), i.e. Moscow civil time (UTC + 3 h), and so
//! steps with every leap second.  Navigation messages transmit the time of
//! day (and sometimes the day of week); the rest is recovered against a GPS
//! reference.  [`GPS_GLONASS_DIFF`] folds the +3 h shift together with a
//! one-day wraparound convention so that all intermediate values stay close
//! to the GPS count.
//!
//! # BeiDou
//!
//! BDT is leap-free like GPS time and sits a fixed 14 s behind it.  Instants
//! are kept on the GPS epoch; [`BDT_EPOCH`] marks the start of BeiDou week 0
//! (2006-01-01T00:00:00 BDT) in that count.

use crate::convert::{from_regional_to_absolute, to_regional, MS_IN_DAY, MS_IN_HOUR, MS_IN_SECOND, MS_IN_WEEK};
use crate::leap::LeapSecondTable;
use crate::period::Period;
use crate::resolve::resolve;

/// Moscow offset (+3 h) minus one day.
pub const GPS_GLONASS_DIFF: i64 = 3 * MS_IN_HOUR - MS_IN_DAY;

/// GPS − BDT.
pub const GPS_BDT_DIFF: i64 = 14 * MS_IN_SECOND;

/// Start of BeiDou week 0 on the BDT axis (GPS week 1356).
pub const BDT_EPOCH: i64 = 1_356 * MS_IN_WEEK;

// ---------------------------------------------------------------------------
// GLONASS
// ---------------------------------------------------------------------------

/// GLONASS time of day (ms) at the GPS instant `gps`.
#[inline]
pub fn gps_to_glonass_ms_of_day(leaps: &LeapSecondTable, gps: i64) -> i64 {
    to_regional(leaps, gps, GPS_GLONASS_DIFF, Period::Day)
}

/// GPS ms of week + reference GPS week → GLONASS time of day.
///
/// The leap count is evaluated on the instant formed with `ref_week`.
#[inline]
pub fn gps_ms_of_week_to_glonass_ms_of_day(
    leaps: &LeapSecondTable,
    ms_of_week: i64,
    ref_week: i64,
) -> i64 {
    gps_to_glonass_ms_of_day(leaps, crate::period::construct_gps_time(ref_week, ms_of_week))
}

/// Full GPS time for a GLONASS time of day, nearest to the GPS `reference`.
#[inline]
pub fn glonass_ms_of_day_to_gps(leaps: &LeapSecondTable, glonass_ms: i64, reference: i64) -> i64 {
    from_regional_to_absolute(leaps, glonass_ms, GPS_GLONASS_DIFF, reference)
}

/// GLONASS day of week at `gps`: `0` = Sunday, `1` = Monday … `6` = Saturday.
pub fn glonass_day_of_week(leaps: &LeapSecondTable, gps: i64) -> u8 {
    let shifted = gps
        .wrapping_add(GPS_GLONASS_DIFF)
        .wrapping_sub(leaps.leap_seconds_at(gps) as i64 * MS_IN_SECOND);
    (shifted.div_euclid(MS_IN_DAY) + 1).rem_euclid(7) as u8
}

/// Full GPS time for a GLONASS day of week (`7` is accepted for Sunday) and
/// time of day, nearest to the GPS `reference`.
pub fn glonass_dow_ms_to_gps(
    leaps: &LeapSecondTable,
    day_of_week: u8,
    glonass_ms: i64,
    reference: i64,
) -> i64 {
    let days_after_monday = (i64::from(day_of_week) + 6) % 7;
    let ms_of_week = (days_after_monday * MS_IN_DAY)
        .wrapping_add(glonass_ms)
        .wrapping_sub(GPS_GLONASS_DIFF);
    let uncorrected = resolve(reference, ms_of_week, Period::Week);
    uncorrected.wrapping_add(leaps.leap_seconds_at_uncorrected(uncorrected) as i64 * MS_IN_SECOND)
}

// ---------------------------------------------------------------------------
// BeiDou
// ---------------------------------------------------------------------------

/// GPS → BDT.
#[inline]
pub const fn gps_to_bdt(gps: i64) -> i64 {
    gps.wrapping_sub(GPS_BDT_DIFF)
}

/// BDT → GPS.
#[inline]
pub const fn bdt_to_gps(bdt: i64) -> i64 {
    bdt.wrapping_add(GPS_BDT_DIFF)
}

/// BeiDou week number of the GPS instant `gps`.
#[inline]
pub const fn bds_week(gps: i64) -> i64 {
    gps_to_bdt(gps).wrapping_sub(BDT_EPOCH).div_euclid(MS_IN_WEEK)
}
