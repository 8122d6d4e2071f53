// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar bridge.
//!
//! The crate never does calendar arithmetic itself: year/month/day breakdown
//! is delegated to `chrono`, and only epoch milliseconds on the civil UNIX
//! scale cross this boundary.

use crate::convert::{gps_to_unix, gps_to_unix_ignoring_leaps};
use crate::error::{Error, Result};
use crate::leap::LeapSecondTable;
use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use std::fmt;
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Civil calendar breakdown of an instant.
///
/// `second` is `60` only for an instant inside an inserted leap second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl CalendarFields {
    pub const fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Midnight of the given date.
    pub const fn date(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0, 0)
    }

    /// Breakdown of a chrono timestamp.  chrono carries a leap second as
    /// `:59` with more than 1000 ms; it is shown here as `:60`.
    pub fn from_chrono(datetime: &DateTime<Utc>) -> Self {
        let mut second = datetime.second();
        let mut millisecond = datetime.timestamp_subsec_millis();
        if millisecond >= 1_000 {
            second += 1;
            millisecond -= 1_000;
        }
        Self {
            year: datetime.year(),
            month: datetime.month(),
            day: datetime.day(),
            hour: datetime.hour(),
            minute: datetime.minute(),
            second,
            millisecond,
        }
    }

    /// Inverse of [`from_chrono`](Self::from_chrono); `None` for fields that
    /// name no calendar instant.
    pub fn to_chrono(&self) -> Option<DateTime<Utc>> {
        let (second, millisecond) = match self.second {
            60 => (59, self.millisecond.checked_add(1_000)?),
            s => (s, self.millisecond),
        };
        if self.millisecond >= 1_000 {
            return None;
        }
        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day)?;
        let time = date.and_hms_milli_opt(self.hour, self.minute, second, millisecond)?;
        Some(time.and_utc())
    }
}

impl fmt::Display for CalendarFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }
}

// ---------------------------------------------------------------------------
// Bridge
// ---------------------------------------------------------------------------

/// UNIX epoch milliseconds → calendar fields.
pub fn epoch_millis_to_calendar_fields(millis: i64) -> Result<CalendarFields> {
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(datetime) => Ok(CalendarFields::from_chrono(&datetime)),
        None => {
            trace!(millis, "epoch milliseconds outside calendar range");
            Err(Error::CalendarOutOfRange(millis))
        }
    }
}

/// Calendar fields → UNIX epoch milliseconds.
///
/// A `:60` leap second maps onto the following civil second, as POSIX does.
pub fn calendar_fields_to_epoch_millis(fields: &CalendarFields) -> Result<i64> {
    match fields.to_chrono() {
        Some(datetime) => Ok(datetime.timestamp_millis()),
        None => {
            trace!(%fields, "calendar fields name no instant");
            Err(Error::InvalidCalendarFields(*fields))
        }
    }
}

/// GPS time → UTC date-time (civil, leap seconds repeat `23:59:59`).
pub fn gps_to_datetime(leaps: &LeapSecondTable, gps: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(gps_to_unix(leaps, gps))
}

/// GPS time → date-time with the fixed epoch shift only.
pub fn gps_to_datetime_ignoring_leaps(gps: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(gps_to_unix_ignoring_leaps(gps))
}

/// GPS time → UTC date-time, rendering an instant inside an inserted leap
/// second as `23:59:60.xxx` (chrono's leap-second representation).
pub fn gps_to_datetime_leap_aware(leaps: &LeapSecondTable, gps: i64) -> Option<DateTime<Utc>> {
    let civil = gps_to_unix(leaps, gps);
    if !leaps.within_leap_second(gps) {
        return DateTime::<Utc>::from_timestamp_millis(civil);
    }
    // `civil` repeats 23:59:59.xxx; push the fraction past 1 s instead.
    let secs = civil.div_euclid(1_000);
    let nanos = (civil.rem_euclid(1_000) as u32 + 1_000) * 1_000_000;
    DateTime::<Utc>::from_timestamp(secs, nanos)
}
