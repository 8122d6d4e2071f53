// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Errors for the few fallible edges of the crate.
//!
//! Every time-scale conversion is total over `i64` and never fails. Errors
//! only arise when building a leap-second table from external data or when
//! crossing the calendar bridge into `chrono`.

use crate::calendar::CalendarFields;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Leap-second epochs must be strictly increasing.
    #[error("leap second table is not strictly increasing at index {index}: {value} ms follows {previous} ms")]
    UnsortedLeapTable {
        index: usize,
        previous: i64,
        value: i64,
    },

    /// The millisecond count cannot be represented by the calendar backend.
    #[error("epoch milliseconds {0} outside the representable calendar range")]
    CalendarOutOfRange(i64),

    /// The fields do not name an existing calendar instant.
    #[error("invalid calendar fields: {0}")]
    InvalidCalendarFields(CalendarFields),
}

pub type Result<T> = std::result::Result<T, Error>;
