// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! GPS time (`Instant<GPST>`) specific extensions.

use chrono::{DateTime, Utc};
use qtty::{Days, Seconds};

use super::calendar;
use super::convert;
use super::instant::Instant;
use super::leap::{self, LeapSecondTable};
use super::period::{self, Period, PeriodOffset, TimeFields};
use super::regional;
use super::resolve;
use super::scales::GPST;

impl Instant<GPST> {
    /// GPS epoch: 1980-01-06T00:00:00 UTC.
    pub const EPOCH: Self = Self::new(0);

    /// Early 2100, a sentinel safely past any real receiver epoch.
    pub const Y2100: Self = Self::new(convert::Y2100);

    /// Instant `ms_of_week` milliseconds into GPS week `week`.
    #[inline]
    pub const fn from_week_ms(week: i64, ms_of_week: i64) -> Self {
        Self::new(period::construct_gps_time(week, ms_of_week))
    }

    /// Current GPS time from the system clock.
    pub fn now() -> Self {
        Self::new(convert::gps_now())
    }

    // ── week / period decomposition ───────────────────────────────────

    #[inline]
    pub const fn week(&self) -> i64 {
        period::gps_week(self.millis())
    }

    #[inline]
    pub const fn ms_of_week(&self) -> i64 {
        period::ms_of_week(self.millis())
    }

    /// `(index, offset)` of this instant within `period`.
    #[inline]
    pub const fn split(&self, period: Period) -> PeriodOffset {
        PeriodOffset::split(self.millis(), period)
    }

    #[inline]
    pub const fn fields(&self) -> TimeFields {
        TimeFields::from_millis(self.millis())
    }

    /// Full instant nearest to `self` whose offset within `period` is
    /// `transmitted`.  `self` acts as the reference.
    #[inline]
    pub fn resolve(&self, transmitted: i64, period: Period) -> Self {
        Self::new(resolve::resolve(self.millis(), transmitted, period))
    }

    // ── leap seconds ──────────────────────────────────────────────────

    /// Leap seconds inserted up to and including this instant.
    pub fn leap_seconds(&self) -> usize {
        leap::current().leap_seconds_at(self.millis())
    }

    /// GPS − UTC at this instant.
    pub fn leap_offset(&self) -> Seconds {
        leap::current().offset_at(self.millis())
    }

    /// `true` if this instant is the first millisecond of an inserted leap
    /// second.
    pub fn is_leap_second(&self) -> bool {
        leap::current().is_leap_second(self.millis())
    }

    // ── MJD ───────────────────────────────────────────────────────────

    #[inline]
    pub const fn mjd(&self) -> i64 {
        convert::mjd(self.millis())
    }

    #[inline]
    pub fn mjd_days(&self) -> Days {
        convert::mjd_days(self.millis())
    }

    // ── other constellations ──────────────────────────────────────────

    #[inline]
    pub const fn bds_week(&self) -> i64 {
        regional::bds_week(self.millis())
    }

    pub fn glonass_ms_of_day(&self) -> i64 {
        regional::gps_to_glonass_ms_of_day(&leap::current(), self.millis())
    }

    /// `0` = Sunday.
    pub fn glonass_day_of_week(&self) -> u8 {
        regional::glonass_day_of_week(&leap::current(), self.millis())
    }

    /// Instant nearest to `self` with the given GLONASS time of day.
    pub fn resolve_glonass(&self, glonass_ms: i64) -> Self {
        Self::new(regional::glonass_ms_of_day_to_gps(
            &leap::current(),
            glonass_ms,
            self.millis(),
        ))
    }

    // ── civil rendering ───────────────────────────────────────────────

    /// UTC date-time showing an inserted leap second as `23:59:60`.
    pub fn to_utc_leap_aware(&self) -> Option<DateTime<Utc>> {
        calendar::gps_to_datetime_leap_aware(&leap::current(), self.millis())
    }

    /// Same as [`to_utc_leap_aware`](Self::to_utc_leap_aware) with an
    /// explicit table.
    pub fn to_utc_leap_aware_with(&self, leaps: &LeapSecondTable) -> Option<DateTime<Utc>> {
        calendar::gps_to_datetime_leap_aware(leaps, self.millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarFields;
    use crate::convert::{MS_IN_DAY, MS_IN_HOUR};
    use crate::leap::GPST_LEAP_EPOCHS;

    #[test]
    fn epoch_constants() {
        assert_eq!(Instant::<GPST>::EPOCH.millis(), 0);
        assert_eq!(Instant::<GPST>::EPOCH.week(), 0);
        assert!(Instant::<GPST>::Y2100 > Instant::<GPST>::new(GPST_LEAP_EPOCHS[17]));
    }

    #[test]
    fn week_decomposition() {
        let t = Instant::<GPST>::from_week_ms(2_086, 3 * MS_IN_DAY + 17);
        assert_eq!(t.week(), 2_086);
        assert_eq!(t.ms_of_week(), 3 * MS_IN_DAY + 17);
        let day = t.split(Period::Day);
        assert_eq!(day.index, 2_086 * 7 + 3);
        assert_eq!(day.offset, 17);
        assert_eq!(t.fields().day_of_week, 3);
    }

    #[test]
    fn resolve_from_self() {
        let reference = Instant::<GPST>::from_week_ms(2_000, 7 * MS_IN_DAY - 2_000);
        let resolved = reference.resolve(1_000, Period::Week);
        assert_eq!(resolved, Instant::from_week_ms(2_001, 1_000));
    }

    #[test]
    fn leap_queries_use_builtin_history() {
        let after = Instant::<GPST>::new(GPST_LEAP_EPOCHS[17] + 1);
        assert!(after.leap_seconds() >= 18);
        assert!(after.leap_offset() >= Seconds::new(18.0));
        assert!(Instant::<GPST>::new(GPST_LEAP_EPOCHS[17]).is_leap_second());
        assert_eq!(Instant::<GPST>::EPOCH.leap_seconds(), 0);
    }

    #[test]
    fn mjd_of_epoch() {
        assert_eq!(Instant::<GPST>::EPOCH.mjd(), 44_244);
        assert_eq!(Instant::<GPST>::new(MS_IN_DAY / 2).mjd_days(), Days::new(44_244.5));
    }

    #[test]
    fn glonass_from_instant() {
        let t = Instant::<GPST>::from_week_ms(2_100, MS_IN_DAY + 4 * MS_IN_HOUR);
        let glo = t.glonass_ms_of_day();
        assert_eq!(t.resolve_glonass(glo), t);
        assert_eq!(t.glonass_day_of_week(), 1);
    }

    #[test]
    fn leap_aware_rendering_with_table() {
        let leaps = LeapSecondTable::builtin();
        let t = Instant::<GPST>::new(GPST_LEAP_EPOCHS[16] + 999);
        let utc = t.to_utc_leap_aware_with(&leaps).unwrap();
        assert_eq!(
            CalendarFields::from_chrono(&utc),
            CalendarFields::new(2015, 6, 30, 23, 59, 60, 999)
        );
    }
}
