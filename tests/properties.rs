//! Property-based checks for the conversion invariants.
//!
//! Instants are drawn from roughly ±300 years around the GPS epoch so that
//! no intermediate sum wraps.

use gnsstime::convert::{from_regional_to_absolute, gps_to_unix, to_regional, unix_to_gps};
use gnsstime::regional::{
    bdt_to_gps, glonass_day_of_week, glonass_dow_ms_to_gps, gps_to_bdt, gps_to_glonass_ms_of_day,
    GPS_GLONASS_DIFF,
};
use gnsstime::{resolve, LeapSecondTable, Period, PeriodOffset, TimeFields};
use proptest::prelude::*;

const SPAN: i64 = 10_000_000_000_000;

fn period() -> impl Strategy<Value = Period> {
    prop_oneof![Just(Period::Week), Just(Period::Day), Just(Period::Hour)]
}

/// Mostly the modern era, where the interesting leap seconds are.
fn instant() -> impl Strategy<Value = i64> {
    prop_oneof![-SPAN..SPAN, 0i64..1_300_000_000_000]
}

proptest! {
    #[test]
    fn leap_count_is_monotonic_and_bounded(a in instant(), b in instant()) {
        let leaps = LeapSecondTable::builtin();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(leaps.leap_seconds_at(lo) <= leaps.leap_seconds_at(hi));
        prop_assert!(leaps.leap_seconds_at(hi) <= leaps.len());
        prop_assert!(leaps.leap_seconds_at_uncorrected(lo) <= leaps.leap_seconds_at_uncorrected(hi));
    }

    #[test]
    fn civil_roundtrip_outside_leap_seconds(t in instant()) {
        let leaps = LeapSecondTable::builtin();
        let back = unix_to_gps(&leaps, gps_to_unix(&leaps, t));
        if leaps.within_leap_second(t) {
            // The repeated civil second maps back onto the earlier instant.
            prop_assert_eq!(back, t - 1_000);
        } else {
            prop_assert_eq!(back, t);
        }
    }

    #[test]
    fn split_and_join_are_inverse(t in instant(), period in period()) {
        let split = PeriodOffset::split(t, period);
        prop_assert!((0..period.millis()).contains(&split.offset));
        prop_assert_eq!(split.to_millis(), t);
        prop_assert_eq!(TimeFields::from_millis(t).to_millis(), t);
    }

    #[test]
    fn resolver_recovers_nearby_instants(
        reference in instant(),
        delta in -302_399_999i64..302_399_999,
        period in period(),
    ) {
        let half = period.millis() / 2;
        let delta = delta % half;
        let actual = reference + delta;
        prop_assert_eq!(resolve(reference, actual.rem_euclid(period.millis()), period), actual);
    }

    #[test]
    fn resolver_stays_within_half_a_period(
        reference in instant(),
        transmitted in any::<i64>(),
        period in period(),
    ) {
        let resolved = resolve(reference, transmitted, period);
        prop_assert!((resolved - reference).abs() <= period.millis() / 2);
        prop_assert_eq!(resolved.rem_euclid(period.millis()), transmitted.rem_euclid(period.millis()));
    }

    #[test]
    fn beidou_offset_is_an_involution(t in any::<i64>()) {
        prop_assert_eq!(bdt_to_gps(gps_to_bdt(t)), t);
        prop_assert_eq!(gps_to_bdt(bdt_to_gps(t)), t);
    }

    #[test]
    fn glonass_time_of_day_recovers_gps(t in instant()) {
        let leaps = LeapSecondTable::builtin();
        prop_assume!(!leaps.within_leap_second(t));
        let glo = to_regional(&leaps, t, GPS_GLONASS_DIFF, Period::Day);
        prop_assert_eq!(glo, gps_to_glonass_ms_of_day(&leaps, t));
        prop_assert_eq!(from_regional_to_absolute(&leaps, glo, GPS_GLONASS_DIFF, t), t);
    }

    #[test]
    fn glonass_day_and_time_recover_gps(t in instant(), jitter in -3_600_000i64..3_600_000) {
        let leaps = LeapSecondTable::builtin();
        prop_assume!(!leaps.within_leap_second(t));
        let dow = glonass_day_of_week(&leaps, t);
        prop_assert!(dow < 7);
        let glo = gps_to_glonass_ms_of_day(&leaps, t);
        prop_assert_eq!(glonass_dow_ms_to_gps(&leaps, dow, glo, t + jitter), t);
    }
}
