//! Program slot model.
//!
//! A program slot is a single scheduled block inside a meeting: a talk,
//! a workshop, a break. It carries its own time range, title and room.
//!
//! # Time Model
//! Slots are treated as intervals `[start, end)`. No ordering check is
//! performed here; overlap between slots is validated by the owning
//! [`Program`](super::Program).

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::validation::{ValidationError, ValidationErrorKind};

/// A scheduled block within a meeting program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramSlot {
    start: NaiveDateTime,
    end: NaiveDateTime,
    title: String,
    room: String,
}

impl ProgramSlot {
    /// Creates a new slot. Performs no validation.
    pub fn new(
        start: NaiveDateTime,
        end: NaiveDateTime,
        title: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            title: title.into(),
            room: room.into(),
        }
    }

    /// Slot start.
    #[inline]
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Slot end.
    #[inline]
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Slot title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Room the slot takes place in.
    pub fn room(&self) -> &str {
        &self.room
    }

    /// Length of the slot (`end - start`). Negative for malformed slots.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Replaces the start time. No re-validation.
    pub fn set_start(&mut self, start: NaiveDateTime) {
        self.start = start;
    }

    /// Replaces the end time. No re-validation.
    pub fn set_end(&mut self, end: NaiveDateTime) {
        self.end = end;
    }

    /// Whether this slot overlaps `other`.
    ///
    /// True iff `other.start < self.end && other.end > self.start`.
    /// Slots that merely touch (one ends where the other starts) do not
    /// overlap; slots with identical intervals do.
    pub fn overlaps_with(&self, other: &Self) -> bool {
        other.start < self.end && other.end > self.start
    }

    /// Computes this slot's bounds shifted by `delta`, without applying them.
    pub(crate) fn shifted_bounds(
        &self,
        delta: Duration,
    ) -> Result<(NaiveDateTime, NaiveDateTime), ValidationError> {
        Ok((shift_timestamp(self.start, delta)?, shift_timestamp(self.end, delta)?))
    }

    /// Shifts both bounds by `delta`.
    ///
    /// Either both bounds move or neither does.
    pub fn shift(&mut self, delta: Duration) -> Result<(), ValidationError> {
        let (start, end) = self.shifted_bounds(delta)?;
        self.set_start(start);
        self.set_end(end);
        Ok(())
    }
}

/// Adds `delta` to `time`, failing instead of overflowing.
pub(crate) fn shift_timestamp(
    time: NaiveDateTime,
    delta: Duration,
) -> Result<NaiveDateTime, ValidationError> {
    time.checked_add_signed(delta).ok_or_else(|| {
        ValidationError::new(
            ValidationErrorKind::TimeOutOfRange,
            format!("Shifting {time} by {delta} leaves the supported time range"),
        )
    })
}
