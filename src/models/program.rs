//! Program model.
//!
//! A program is the ordered list of slots belonging to one meeting.
//! Construction rejects any two slots that overlap; after that the only
//! mutation is a uniform shift of every slot, which cannot introduce an
//! overlap, so the check is not repeated.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::ProgramSlot;
use crate::validation::{self, ValidationError};

/// An ordered, non-overlapping sequence of program slots.
///
/// May be empty; the non-empty requirement belongs to
/// [`Meeting`](super::Meeting).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProgram")]
pub struct Program {
    slots: Vec<ProgramSlot>,
}

/// Unvalidated wire form of a [`Program`].
#[derive(Deserialize)]
struct RawProgram {
    slots: Vec<ProgramSlot>,
}

impl TryFrom<RawProgram> for Program {
    type Error = ValidationError;

    fn try_from(raw: RawProgram) -> Result<Self, Self::Error> {
        Self::new(raw.slots)
    }
}

impl Program {
    /// Creates a program, rejecting overlapping slots.
    ///
    /// # Errors
    /// `OverlappingSlots` if any two distinct slots overlap, including two
    /// slots with identical intervals.
    pub fn new(slots: Vec<ProgramSlot>) -> Result<Self, ValidationError> {
        if let Err(err) = validation::check_for_overlaps(&slots) {
            tracing::warn!(kind = ?err.kind, slot_count = slots.len(), "program rejected: {err}");
            return Err(err);
        }
        tracing::debug!(slot_count = slots.len(), "program created");
        Ok(Self { slots })
    }

    /// The slots, in the order they were supplied.
    pub fn slots(&self) -> &[ProgramSlot] {
        &self.slots
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the program has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Shifts every slot by `delta`.
    ///
    /// All new bounds are computed before any slot is touched, so on error
    /// the program is left unchanged.
    pub fn reschedule(&mut self, delta: Duration) -> Result<(), ValidationError> {
        let shifted = self
            .slots
            .iter()
            .map(|slot| slot.shifted_bounds(delta))
            .collect::<Result<Vec<_>, _>>()?;

        for (slot, (start, end)) in self.slots.iter_mut().zip(shifted) {
            slot.set_start(start);
            slot.set_end(end);
        }

        tracing::debug!(slot_count = self.slots.len(), delta = %delta, "program rescheduled");
        Ok(())
    }
}
