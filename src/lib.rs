// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! GNSS time scales
//!
//! Millisecond-precision conversions between GPS time, civil (UNIX/UTC)
//! time, GLONASS time and BeiDou time, plus the week/day/hour codecs and the
//! rollover resolver needed to turn the truncated time fields of navigation
//! messages back into absolute instants.
//!
//! All instants are signed 64-bit millisecond counts.  **GPS time** (ms since
//! 1980-01-06T00:00:00, leap seconds counted as increments) is the canonical
//! axis; every other scale is defined by its conversion to and from it.
//!
//! # Core types
//!
//! - [`Instant<S>`]: generic instant parameterised by a [`TimeScale`] marker.
//! - [`LeapSecondTable`]: sorted GPS instants at which a leap second starts.
//! - [`Period`] / [`PeriodOffset`]: week/day/hour split of an instant.
//! - [`TimeFields`]: display breakdown of a GPS instant.
//! - [`CalendarFields`]: civil calendar breakdown, `:60` for leap seconds.
//!
//! # Time scales
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`GPST`] | GPS Time |
//! | [`BDT`] | BeiDou Time |
//! | [`UnixTime`] | UNIX / POSIX civil time |
//! | [`LinearUnix`] | UNIX epoch, leap seconds counted |
//!
//! GLONASS time is only ever transmitted as a time of day and is handled by
//! the functions in [`regional`].
//!
//! # Leap seconds
//!
//! Conversions that depend on leap seconds take a [`LeapSecondTable`]
//! explicitly.  The generic [`Instant::to`] and the `GpsTime` helpers use the
//! process-wide table returned by [`leap::current`], which starts as the
//! built-in history and can be replaced with [`leap::install`].
//!
//! ```
//! use gnsstime::{GpsTime, Period};
//!
//! let reference = GpsTime::from_week_ms(1_855, 604_799_000);
//! let resolved = reference.resolve(500, Period::Week);
//! assert_eq!(resolved, GpsTime::from_week_ms(1_856, 500));
//! ```

pub mod calendar;
pub mod convert;
mod error;
mod gpst_ext;
pub(crate) mod instant;
pub mod leap;
mod period;
pub mod regional;
pub mod resolve;
pub(crate) mod scales;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::CalendarFields;
pub use error::{Error, Result};
pub use instant::{Instant, TimeScale};
pub use leap::{LeapSecondTable, GPST_LEAP_EPOCHS};
pub use period::{construct_gps_time, gps_week, ms_of_week, Period, PeriodOffset, TimeFields};
pub use resolve::resolve;
pub use scales::{LinearUnix, UnixTime, BDT, GPST};

// ── Type aliases ──────────────────────────────────────────────────────────

/// GPS time.
///
/// This is a type alias for [`Instant<GPST>`]; the scale-specific helpers
/// (week numbers, rollover resolution, GLONASS day-time, …) are inherent
/// methods on it.
pub type GpsTime = Instant<GPST>;

/// Civil UNIX time in milliseconds, leap seconds repeated.
pub type UnixInstant = Instant<UnixTime>;

/// BeiDou time on the GPS epoch.
pub type BeidouTime = Instant<BDT>;
