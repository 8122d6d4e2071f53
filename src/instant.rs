// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Generic time–scale parameterised instant.
//!
//! [`Instant<S>`] stores a signed millisecond count whose *meaning* (epoch,
//! leap-second convention) is determined by the compile-time marker
//! `S: TimeScale`.  Arithmetic, cross-scale conversion, UTC conversion,
//! serialisation and display are implemented once, generically.
//!
//! Methods that only make sense on a particular scale (week numbers,
//! rollover resolution, GLONASS day-time, …) live in inherent `impl` blocks
//! on the concrete marker, see `gpst_ext.rs`.

use crate::leap::{self, LeapSecondTable};
use crate::scales::UnixTime;
use chrono::{DateTime, Duration, Utc};
use qtty::{Days, Seconds};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for time scales.
///
/// A **time scale** defines:
///
/// 1. A human-readable **label** (e.g. `"GPST"`, `"UNIX"`, `"BDT"`).
/// 2. A pair of conversion functions between the scale's native millisecond
///    count and **GPS time** (ms since 1980-01-06, leap seconds counted as
///    increments), the canonical axis used throughout the crate.
///
/// Conversions receive the leap-second table explicitly.  Leap-free scales
/// (GPS, BeiDou, the linear UNIX count) ignore it and reduce to a constant
/// offset; the civil UNIX scale consults it.
pub trait TimeScale:
    Copy + Clone + std::fmt::Debug + PartialEq + Eq + PartialOrd + Ord + std::hash::Hash + 'static
{
    /// Display label used by [`Instant`] formatting.
    const LABEL: &'static str;

    /// Convert a millisecond count on this scale to GPS time.
    fn to_gpst(value: i64, leaps: &LeapSecondTable) -> i64;

    /// Convert GPS time to this scale's millisecond count.
    fn from_gpst(gpst: i64, leaps: &LeapSecondTable) -> i64;
}

// ═══════════════════════════════════════════════════════════════════════════
// Instant<S>: the generic instant
// ═══════════════════════════════════════════════════════════════════════════

/// A point on time scale `S`, with millisecond resolution.
///
/// `PhantomData` is zero-sized, so `Instant<S>` is layout-identical to `i64`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant<S: TimeScale> {
    millis: i64,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Instant<S> {
    // ── constructors ──────────────────────────────────────────────────

    /// Create from milliseconds since the scale's epoch.
    #[inline]
    pub const fn new(millis: i64) -> Self {
        Self {
            millis,
            _scale: PhantomData,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Milliseconds since the scale's epoch.
    #[inline]
    pub const fn millis(&self) -> i64 {
        self.millis
    }

    /// Time since the scale's epoch as a typed quantity.
    #[inline]
    pub fn as_seconds(&self) -> Seconds {
        Seconds::new(self.millis as f64 / 1_000.0)
    }

    /// Time since the scale's epoch in days.
    #[inline]
    pub fn as_days(&self) -> Days {
        Days::new(self.millis as f64 / 86_400_000.0)
    }

    // ── cross-scale conversion ────────────────────────────────────────

    /// Convert this instant to another time scale using the process-wide
    /// leap-second table.
    ///
    /// ```text
    /// self → GPS time → target
    /// ```
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Instant<T> {
        self.to_with::<T>(&leap::current())
    }

    /// Convert with an explicit leap-second table.
    #[inline]
    pub fn to_with<T: TimeScale>(&self, leaps: &LeapSecondTable) -> Instant<T> {
        Instant::new(T::from_gpst(S::to_gpst(self.millis, leaps), leaps))
    }

    // ── UTC helpers ───────────────────────────────────────────────────

    /// Convert to a `chrono::DateTime<Utc>` through the civil UNIX scale.
    ///
    /// An instant inside a leap second renders as the repeated `23:59:59`;
    /// see [`Instant::<GPST>::to_utc_leap_aware`](crate::GpsTime::to_utc_leap_aware)
    /// for `23:59:60`.  Returns `None` outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.to::<UnixTime>().millis())
    }

    /// Build an instant from a `chrono::DateTime<Utc>` (sub-millisecond part
    /// truncated).
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Instant::<UnixTime>::new(datetime.timestamp_millis()).to::<S>()
    }

    // ── min / max ─────────────────────────────────────────────────────

    #[inline]
    pub const fn min(self, other: Self) -> Self {
        if self.millis <= other.millis {
            self
        } else {
            other
        }
    }

    #[inline]
    pub const fn max(self, other: Self) -> Self {
        if self.millis >= other.millis {
            self
        } else {
            other
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Generic trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display ───────────────────────────────────────────────────────────────

impl<S: TimeScale> std::fmt::Display for Instant<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ms", S::LABEL, self.millis)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Instant<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_i64(self.millis)
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Instant<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = i64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: TimeScale> Add<Duration> for Instant<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        Self::new(self.millis.wrapping_add(rhs.num_milliseconds()))
    }
}

impl<S: TimeScale> AddAssign<Duration> for Instant<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl<S: TimeScale> Sub<Duration> for Instant<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Duration) -> Self::Output {
        Self::new(self.millis.wrapping_sub(rhs.num_milliseconds()))
    }
}

impl<S: TimeScale> SubAssign<Duration> for Instant<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

impl<S: TimeScale> Sub for Instant<S> {
    type Output = Duration;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        // chrono's range is ±i64::MAX ms.
        Duration::milliseconds(self.millis.saturating_sub(rhs.millis).max(-i64::MAX))
    }
}

// ── From/Into i64 ─────────────────────────────────────────────────────────

impl<S: TimeScale> From<i64> for Instant<S> {
    #[inline]
    fn from(millis: i64) -> Self {
        Self::new(millis)
    }
}

impl<S: TimeScale> From<Instant<S>> for i64 {
    #[inline]
    fn from(instant: Instant<S>) -> Self {
        instant.millis
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
