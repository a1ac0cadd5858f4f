//! Time slot model.
//!
//! # Time Model
//! All times are in milliseconds relative to a planning epoch.
//! The consumer defines what epoch means.

use serde::{Deserialize, Serialize};

/// A time interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Interval start (ms, inclusive).
    pub start_ms: i64,
    /// Interval end (ms, exclusive).
    pub end_ms: i64,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    /// Creates a slot of the given length starting at the epoch.
    pub fn of_duration(duration_ms: i64) -> Self {
        Self::new(0, duration_ms)
    }

    /// Duration of this slot (ms).
    ///
    /// Saturates at the `i64` bounds; negative for a reversed slot.
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end_ms.saturating_sub(self.start_ms)
    }
}
