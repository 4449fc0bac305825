//! Construction-time validation for meetings and programs.
//!
//! Every check is fail-fast and returns the first violation it finds.
//! Detects:
//! - Empty or too-short meeting titles
//! - Meeting end before meeting start
//! - Programs without any slots
//! - Overlapping program slots
//!
//! # Overlap Scan
//! All-pairs comparison, O(n²) in the number of slots. Programs are small
//! (a handful of sessions), so no sort-and-sweep is used.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::config::MeetingRules;
use crate::models::ProgramSlot;

/// Result of a single validation check.
pub type ValidationResult = Result<(), ValidationError>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// The meeting title is empty.
    EmptyTitle,
    /// The meeting title is shorter than the configured minimum.
    TitleTooShort,
    /// The meeting ends before it starts.
    InvalidTimeRange,
    /// The meeting program has no slots.
    EmptyProgram,
    /// Two distinct program slots overlap.
    OverlappingSlots,
    /// A reschedule would move a timestamp outside the representable range.
    TimeOutOfRange,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a meeting title.
///
/// Checks, in order:
/// 1. The title is not empty
/// 2. The title has at least `rules.min_title_chars` characters
pub fn validate_title(title: &str, rules: &MeetingRules) -> ValidationResult {
    if title.is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::EmptyTitle,
            "Title cannot be empty",
        ));
    }

    let length = title.chars().count();
    if length < rules.min_title_chars {
        return Err(ValidationError::new(
            ValidationErrorKind::TitleTooShort,
            format!(
                "Title length must be at least {} characters (got {length})",
                rules.min_title_chars
            ),
        ));
    }

    Ok(())
}

/// Validates that `end` is not before `start`.
///
/// A zero-length range (`end == start`) is accepted.
pub fn validate_time_range(start: NaiveDateTime, end: NaiveDateTime) -> ValidationResult {
    if end < start {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidTimeRange,
            format!("End time must be after the start time (start {start}, end {end})"),
        ));
    }
    Ok(())
}

/// Validates that a program holds at least one slot.
pub fn validate_slot_count(count: usize) -> ValidationResult {
    if count < 1 {
        return Err(ValidationError::new(
            ValidationErrorKind::EmptyProgram,
            "Meeting program must have at least one program slot",
        ));
    }
    Ok(())
}

/// Finds the first pair of distinct slots that overlap.
///
/// Returns the index pair `(i, j)` with `i < j`. Slots are distinguished by
/// position, so two slots with identical intervals are still compared
/// (and reported, since identical intervals overlap).
pub fn find_overlap(slots: &[ProgramSlot]) -> Option<(usize, usize)> {
    // overlaps_with is symmetric, so each unordered pair is tested once
    for (i, a) in slots.iter().enumerate() {
        for (j, b) in slots.iter().enumerate().skip(i + 1) {
            if a.overlaps_with(b) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Validates that no two distinct slots overlap.
pub fn check_for_overlaps(slots: &[ProgramSlot]) -> ValidationResult {
    match find_overlap(slots) {
        Some((i, j)) => Err(ValidationError::new(
            ValidationErrorKind::OverlappingSlots,
            format!(
                "Times should not overlap: '{}' and '{}'",
                slots[i].title(),
                slots[j].title()
            ),
        )),
        None => Ok(()),
    }
}
