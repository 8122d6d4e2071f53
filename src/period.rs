// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Week / day / hour codec.
//!
//! Splits an absolute GPS instant into a period index and an offset within
//! that period, and reassembles them:
//!
//! ```text
//! absolute = index · period + offset,    0 ≤ offset < period
//! ```
//!
//! Floor division is used throughout, so instants before the GPS epoch split
//! into a negative index and a non-negative offset.

use crate::convert::{MS_IN_DAY, MS_IN_HOUR, MS_IN_SECOND, MS_IN_WEEK};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Period length a navigation message counts within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Period {
    Week,
    Day,
    Hour,
}

impl Period {
    /// Length of the period in milliseconds.
    #[inline]
    pub const fn millis(self) -> i64 {
        match self {
            Period::Week => MS_IN_WEEK,
            Period::Day => MS_IN_DAY,
            Period::Hour => MS_IN_HOUR,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Day => "day",
            Period::Hour => "hour",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PeriodOffset
// ═══════════════════════════════════════════════════════════════════════════

/// An absolute instant expressed as `(index, offset)` for a [`Period`].
///
/// For [`Period::Day`] and [`Period::Hour`] the index is the compound count
/// since the GPS epoch (`week·7 + day_of_week`, `week·168 + hour_of_week`),
/// not the position within the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PeriodOffset {
    pub period: Period,
    pub index: i64,
    pub offset: i64,
}

impl PeriodOffset {
    /// Split `absolute` ms into index and non-negative offset.
    #[inline]
    pub const fn split(absolute: i64, period: Period) -> Self {
        let p = period.millis();
        Self {
            period,
            index: absolute.div_euclid(p),
            offset: absolute.rem_euclid(p),
        }
    }

    /// Reassemble the absolute instant.
    #[inline]
    pub const fn to_millis(self) -> i64 {
        self.index
            .wrapping_mul(self.period.millis())
            .wrapping_add(self.offset)
    }
}

impl From<PeriodOffset> for i64 {
    #[inline]
    fn from(split: PeriodOffset) -> Self {
        split.to_millis()
    }
}

/// GPS week number of `gps`.
#[inline]
pub const fn gps_week(gps: i64) -> i64 {
    gps.div_euclid(MS_IN_WEEK)
}

/// Milliseconds into the GPS week of `gps`.
#[inline]
pub const fn ms_of_week(gps: i64) -> i64 {
    gps.rem_euclid(MS_IN_WEEK)
}

/// GPS week number + ms of week → GPS time.
#[inline]
pub const fn construct_gps_time(week: i64, ms_of_week: i64) -> i64 {
    PeriodOffset {
        period: Period::Week,
        index: week,
        offset: ms_of_week,
    }
    .to_millis()
}

// ═══════════════════════════════════════════════════════════════════════════
// Display decomposition
// ═══════════════════════════════════════════════════════════════════════════

/// `(ms, s, min, hr, day_of_week, week)` breakdown of a GPS instant.
///
/// Every field is taken modulo its natural radix.  Meant for display: the
/// fields are GPS-scale, not civil, so no leap second is ever shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeFields {
    pub millisecond: u16,
    pub second: u8,
    pub minute: u8,
    pub hour: u8,
    /// `0` = Sunday.
    pub day_of_week: u8,
    pub week: i64,
}

impl TimeFields {
    pub const fn from_millis(gps: i64) -> Self {
        let seconds = gps.div_euclid(MS_IN_SECOND);
        let minutes = seconds.div_euclid(60);
        let hours = minutes.div_euclid(60);
        let days = hours.div_euclid(24);
        Self {
            millisecond: gps.rem_euclid(MS_IN_SECOND) as u16,
            second: seconds.rem_euclid(60) as u8,
            minute: minutes.rem_euclid(60) as u8,
            hour: hours.rem_euclid(24) as u8,
            day_of_week: days.rem_euclid(7) as u8,
            week: days.div_euclid(7),
        }
    }

    /// Back to GPS milliseconds.
    pub const fn to_millis(&self) -> i64 {
        let of_week = self.day_of_week as i64 * MS_IN_DAY
            + self.hour as i64 * MS_IN_HOUR
            + self.minute as i64 * 60 * MS_IN_SECOND
            + self.second as i64 * MS_IN_SECOND
            + self.millisecond as i64;
        construct_gps_time(self.week, of_week)
    }
}

impl fmt::Display for TimeFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "week {} day {} {:02}:{:02}:{:02}.{:03}",
            self.week, self.day_of_week, self.hour, self.minute, self.second, self.millisecond
        )
    }
}
