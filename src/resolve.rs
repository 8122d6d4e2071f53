// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Rollover resolution for transmitted time-of-week/day/hour fields.
//!
//! Navigation messages carry only the offset within the current week, day or
//! hour.  Given a reference instant known to lie within half a period of the
//! truth (the last fix, or the system clock), the full instant is the one with
//! the transmitted offset that is nearest to the reference:
//!
//! 1. split the reference into `(index, offset)`;
//! 2. if the transmitted offset is more than half a period away from the
//!    reference offset, the counter has wrapped: a *smaller* transmitted value
//!    belongs to the next period, a larger one to the previous period;
//! 3. reassemble with the transmitted offset.
//!
//! Exactly half a period away is **not** a rollover: ties stay in the
//! reference period.
//!
//! The reference is trusted.  One that is off by more than half a period
//! yields a plausible but wrong instant, and nothing here can detect that.

use crate::period::{Period, PeriodOffset};
use tracing::trace;

/// GPS instant nearest to `reference` whose offset within `period` is
/// `transmitted` (reduced modulo the period first).
pub fn resolve(reference: i64, transmitted: i64, period: Period) -> i64 {
    let p = period.millis();
    let offset = transmitted.rem_euclid(p);
    let PeriodOffset {
        index,
        offset: reference_offset,
        ..
    } = PeriodOffset::split(reference, period);

    let mut index = index;
    if (offset - reference_offset).abs() > p / 2 {
        if offset < reference_offset {
            index = index.wrapping_add(1);
            trace!(%period, reference, transmitted, "forward rollover");
        } else {
            index = index.wrapping_sub(1);
            trace!(%period, reference, transmitted, "backward rollover");
        }
    }

    PeriodOffset {
        period,
        index,
        offset,
    }
    .to_millis()
}

/// GPS time nearest to `reference` with `ms_of_week` ms into the week.
#[inline]
pub fn resolve_week(reference: i64, ms_of_week: i64) -> i64 {
    resolve(reference, ms_of_week, Period::Week)
}

/// GPS time nearest to `reference` with `ms_of_day` ms into the day.
///
/// The day index is the compound `week·7 + day_of_week`, so a rollover at the
/// end of Saturday lands on the next week's Sunday.
#[inline]
pub fn resolve_day(reference: i64, ms_of_day: i64) -> i64 {
    resolve(reference, ms_of_day, Period::Day)
}

/// GPS time nearest to `reference` with `ms_of_hour` ms into the hour.
#[inline]
pub fn resolve_hour(reference: i64, ms_of_hour: i64) -> i64 {
    resolve(reference, ms_of_hour, Period::Hour)
}
