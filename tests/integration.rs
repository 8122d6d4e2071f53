use chrono::{TimeZone, Utc};
use gnsstime::calendar::{self, CalendarFields};
use gnsstime::convert::{gps_to_unix, unix_to_gps, MS_IN_DAY, MS_IN_SECOND};
use gnsstime::regional;
use gnsstime::{
    resolve, BeidouTime, GpsTime, LeapSecondTable, Period, UnixInstant, GPST_LEAP_EPOCHS,
};

fn civil(fields: CalendarFields) -> i64 {
    calendar::calendar_fields_to_epoch_millis(&fields).unwrap()
}

#[test]
fn day_offset_resolves_into_the_2015_leap_second() {
    let leaps = LeapSecondTable::builtin();
    let reference = unix_to_gps(&leaps, civil(CalendarFields::new(2015, 6, 30, 23, 59, 59, 500)));
    assert_eq!(reference, 1_119_744_015_500);

    let transmitted = (reference + MS_IN_SECOND).rem_euclid(MS_IN_DAY);
    let resolved = resolve(reference, transmitted, Period::Day);

    assert_eq!(resolved, reference + MS_IN_SECOND);
    assert!(leaps.within_leap_second(resolved));
    // Both instants show the same civil clock reading.
    assert_eq!(gps_to_unix(&leaps, resolved), gps_to_unix(&leaps, reference));

    let shown = calendar::gps_to_datetime_leap_aware(&leaps, resolved).unwrap();
    assert_eq!(
        CalendarFields::from_chrono(&shown).to_string(),
        "2015-06-30T23:59:60.500"
    );
}

#[test]
fn gps_epoch_renders_as_1980_01_06() {
    let epoch = GpsTime::EPOCH.to_utc().unwrap();
    let fields = CalendarFields::from_chrono(&epoch);
    assert_eq!(fields.to_string(), "1980-01-06T00:00:00.000");
}

#[test]
fn leap_aware_rendering_of_2016_leap_second() {
    let leaps = LeapSecondTable::builtin();
    let t = GpsTime::new(GPST_LEAP_EPOCHS[17]);
    let shown = t.to_utc_leap_aware_with(&leaps).unwrap();
    let fields = CalendarFields::from_chrono(&shown);
    assert_eq!(fields.second, 60);
    assert_eq!(fields, CalendarFields::new(2016, 12, 31, 23, 59, 60, 0));
}

#[test]
fn civil_roundtrip_through_instant_types() {
    let datetime = Utc.with_ymd_and_hms(2019, 4, 6, 23, 59, 42).unwrap();
    let gps = GpsTime::from_utc(datetime);
    let unix: UnixInstant = gps.into();
    assert_eq!(unix.millis(), datetime.timestamp_millis());
    assert_eq!(gps.to_utc(), Some(datetime));
}

#[test]
fn synthetic_table_drives_every_conversion() {
    let leaps = LeapSecondTable::new(vec![10 * MS_IN_DAY]).unwrap();
    let before = 10 * MS_IN_DAY - 1;
    let after = 10 * MS_IN_DAY + MS_IN_SECOND;
    assert_eq!(gps_to_unix(&leaps, after) - gps_to_unix(&leaps, before), 1);
    assert_eq!(unix_to_gps(&leaps, gps_to_unix(&leaps, after)), after);
    assert_eq!(GpsTime::new(after).to_with::<gnsstime::UnixTime>(&leaps).millis(), gps_to_unix(&leaps, after));
}

#[test]
fn unsorted_table_is_rejected() {
    let err = LeapSecondTable::new(vec![5_000, 5_000]).unwrap_err();
    assert!(matches!(err, gnsstime::Error::UnsortedLeapTable { index: 1, .. }));
}

#[test]
fn glonass_day_and_time_recover_gps() {
    let leaps = LeapSecondTable::builtin();
    let t = GpsTime::from_week_ms(2_222, 5 * MS_IN_DAY + 22 * 3_600_000 + 123);
    let dow = regional::glonass_day_of_week(&leaps, t.millis());
    let glo = regional::gps_to_glonass_ms_of_day(&leaps, t.millis());
    // Late Friday UTC is already Saturday in Moscow.
    assert_eq!(dow, 6);
    let reference = t.millis() + 2 * 3_600_000;
    assert_eq!(regional::glonass_dow_ms_to_gps(&leaps, dow, glo, reference), t.millis());
}

#[test]
fn beidou_week_and_seconds() {
    let gps = GpsTime::from_week_ms(2_300, 14_000);
    let bdt: BeidouTime = gps.to::<gnsstime::BDT>();
    assert_eq!(bdt.millis(), gps.millis() - 14_000);
    assert_eq!(gps.bds_week(), 2_300 - 1_356);
}

#[test]
fn time_fields_display() {
    let t = GpsTime::from_week_ms(2_000, 2 * MS_IN_DAY + 3_723_004);
    assert_eq!(t.fields().to_string(), "week 2000 day 2 01:02:03.004");
    assert_eq!(t.fields().to_millis(), t.millis());
}

#[cfg(feature = "serde")]
#[test]
fn observation_record_serialises_with_raw_millis() {
    #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
    struct Record {
        at: GpsTime,
        shown: CalendarFields,
        leaps: LeapSecondTable,
    }

    let record = Record {
        at: GpsTime::new(GPST_LEAP_EPOCHS[0]),
        shown: CalendarFields::new(1981, 6, 30, 23, 59, 60, 0),
        leaps: LeapSecondTable::new(vec![GPST_LEAP_EPOCHS[0]]).unwrap(),
    };
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"at\":46828800000"));
    assert!(json.contains("\"leaps\":[46828800000]"));
    let back: Record = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
