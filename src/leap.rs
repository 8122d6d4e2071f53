// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Leap-second table
//!
//! GPS time counts milliseconds since 1980-01-06T00:00:00 without ever
//! repeating or skipping.  Civil (UTC-derived, POSIX) time repeats one
//! second at each leap-second insertion.  Seen from the civil side, every
//! insertion therefore adds one second to the running GPS count:
//!
//! ```text
//! civil     : 23:59:59.000  23:59:59.500  23:59:60.000  23:59:60.500  00:00:00.000
//! GPS count :   ...800.000      800.500      801.000      801.500      802.000
//! POSIX     :   ...800.000      800.500      800.000      800.500      801.000
//! ```
//!
//! A [`LeapSecondTable`] stores the GPS instant (ms) of each `23:59:60.000`.
//! The number of entries at or before a GPS instant is the cumulative
//! GPS − UTC offset in seconds at that instant.
//!
//! ## Process-wide table
//!
//! The table is append-only historical fact and is treated as immutable
//! configuration.  [`current`] hands out a shared snapshot (the built-in
//! table unless something else was installed); [`install`] swaps in a newly
//! built table.  A table is never modified in place: readers holding an older
//! snapshot keep a consistent view.
//!
//! ```rust
//! use gnsstime::leap::{self, LeapSecondTable};
//!
//! let table = LeapSecondTable::builtin();
//! assert_eq!(table.leap_seconds_at(0), 0);
//! assert_eq!(table.leap_seconds_at(i64::MAX), 18);
//! assert_eq!(leap::current().len(), table.len());
//! ```

use crate::error::{Error, Result};
use qtty::Seconds;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Known leap seconds, as the GPS instant (ms) of each inserted `23:59:60`.
#[rustfmt::skip]
pub const GPST_LEAP_EPOCHS: [i64; 18] = [
    46_828_800_000,    // 1981-06-30
    78_364_801_000,    // 1982-06-30
    109_900_802_000,   // 1983-06-30
    173_059_203_000,   // 1985-06-30
    252_028_804_000,   // 1987-12-31
    315_187_205_000,   // 1989-12-31
    346_723_206_000,   // 1990-12-31
    393_984_007_000,   // 1992-06-30
    425_520_008_000,   // 1993-06-30
    457_056_009_000,   // 1994-06-30
    504_489_610_000,   // 1995-12-31
    551_750_411_000,   // 1997-06-30
    599_184_012_000,   // 1998-12-31
    820_108_813_000,   // 2005-12-31
    914_803_214_000,   // 2008-12-31
    1_025_136_015_000, // 2012-06-30
    1_119_744_016_000, // 2015-06-30
    1_167_264_017_000, // 2016-12-31
];

/// Length of an inserted leap second.
const LEAP_MS: i64 = 1_000;

// ═══════════════════════════════════════════════════════════════════════════
// LeapSecondTable
// ═══════════════════════════════════════════════════════════════════════════

/// Ordered, immutable list of leap-second insertion instants (GPS ms).
///
/// Consecutive entries are guaranteed to be more than one second apart, which
/// keeps both the direct and the civil-convention thresholds sorted and lets
/// every lookup use binary search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<i64>", into = "Vec<i64>")
)]
pub struct LeapSecondTable {
    epochs: Vec<i64>,
}

impl LeapSecondTable {
    // ── constructors ──────────────────────────────────────────────────

    /// The table of leap seconds known to this build.
    pub fn builtin() -> Self {
        Self {
            epochs: GPST_LEAP_EPOCHS.to_vec(),
        }
    }

    /// Build a table from an externally supplied list of GPS instants (ms).
    ///
    /// Fails with [`Error::UnsortedLeapTable`] unless every entry is more
    /// than one second after its predecessor.
    pub fn new(epochs: Vec<i64>) -> Result<Self> {
        for (index, pair) in epochs.windows(2).enumerate() {
            let (previous, value) = (pair[0], pair[1]);
            if value.saturating_sub(previous) <= LEAP_MS {
                return Err(Error::UnsortedLeapTable {
                    index: index + 1,
                    previous,
                    value,
                });
            }
        }
        Ok(Self { epochs })
    }

    /// A table without any leap second.
    pub const fn empty() -> Self {
        Self { epochs: Vec::new() }
    }

    /// A new table with `epoch` appended.  `self` is left untouched.
    pub fn extended(&self, epoch: i64) -> Result<Self> {
        let mut epochs = Vec::with_capacity(self.epochs.len() + 1);
        epochs.extend_from_slice(&self.epochs);
        epochs.push(epoch);
        Self::new(epochs)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Number of leap seconds in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }

    /// The insertion instants, in increasing order.
    #[inline]
    pub fn epochs(&self) -> &[i64] {
        &self.epochs
    }

    /// The most recent insertion, if any.
    #[inline]
    pub fn last(&self) -> Option<i64> {
        self.epochs.last().copied()
    }

    // ── lookups ───────────────────────────────────────────────────────

    /// Number of leap seconds inserted at or before the GPS instant `gpst`.
    ///
    /// Nondecreasing in `gpst`; `0` before the first entry and [`len`](Self::len)
    /// after the last one.
    #[inline]
    pub fn leap_seconds_at(&self, gpst: i64) -> usize {
        self.epochs.partition_point(|&epoch| epoch <= gpst)
    }

    /// Same lookup for an instant whose leap seconds have not been added back
    /// yet, i.e. a civil count re-based on the GPS epoch.
    ///
    /// Entry `i` is compared against `epochs[i] − i·1000`: each of the `i`
    /// earlier leap seconds is missing from such a count.
    pub fn leap_seconds_at_uncorrected(&self, uncorrected: i64) -> usize {
        let (mut lo, mut hi) = (0, self.epochs.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if uncorrected >= self.uncorrected_threshold(mid) {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    #[inline]
    fn uncorrected_threshold(&self, index: usize) -> i64 {
        self.epochs[index].wrapping_sub(index as i64 * LEAP_MS)
    }

    /// `true` if `gpst` is exactly the start of an inserted leap second.
    #[inline]
    pub fn is_leap_second(&self, gpst: i64) -> bool {
        self.epochs.binary_search(&gpst).is_ok()
    }

    /// `true` while `gpst` lies inside an inserted second (`23:59:60.xxx`).
    pub fn within_leap_second(&self, gpst: i64) -> bool {
        match self.leap_seconds_at(gpst) {
            0 => false,
            n => gpst.wrapping_sub(self.epochs[n - 1]) < LEAP_MS,
        }
    }

    /// GPS − UTC at `gpst`, as a typed quantity.
    #[inline]
    pub fn offset_at(&self, gpst: i64) -> Seconds {
        Seconds::new(self.leap_seconds_at(gpst) as f64)
    }
}

impl Default for LeapSecondTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<Vec<i64>> for LeapSecondTable {
    type Error = Error;

    fn try_from(epochs: Vec<i64>) -> Result<Self> {
        Self::new(epochs)
    }
}

impl From<LeapSecondTable> for Vec<i64> {
    fn from(table: LeapSecondTable) -> Self {
        table.epochs
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Process-wide table
// ═══════════════════════════════════════════════════════════════════════════

fn slot() -> &'static RwLock<Arc<LeapSecondTable>> {
    static SLOT: OnceLock<RwLock<Arc<LeapSecondTable>>> = OnceLock::new();
    SLOT.get_or_init(|| RwLock::new(Arc::new(LeapSecondTable::builtin())))
}

/// Snapshot of the process-wide leap-second table.
pub fn current() -> Arc<LeapSecondTable> {
    let guard = slot().read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&guard)
}

/// Replace the process-wide table, returning the previous snapshot.
pub fn install(table: LeapSecondTable) -> Arc<LeapSecondTable> {
    debug!(
        entries = table.len(),
        last = ?table.last(),
        "installing leap second table"
    );
    let mut guard = slot().write().unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *guard, Arc::new(table))
}
