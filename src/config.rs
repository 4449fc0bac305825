//! Tunable validation parameters.
//!
//! Rules are plain data so they can be loaded from a configuration document
//! alongside the rest of an application's settings. Missing fields fall back
//! to the defaults.

use serde::{Deserialize, Serialize};

/// Default minimum title length (in characters).
pub const DEFAULT_MIN_TITLE_CHARS: usize = 5;

/// Validation rules applied when a meeting is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingRules {
    /// Minimum number of characters (Unicode scalar values) in a title.
    pub min_title_chars: usize,
}

impl MeetingRules {
    /// Creates the default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum title length.
    pub fn with_min_title_chars(mut self, min_title_chars: usize) -> Self {
        self.min_title_chars = min_title_chars;
        self
    }
}

impl Default for MeetingRules {
    fn default() -> Self {
        Self {
            min_title_chars: DEFAULT_MIN_TITLE_CHARS,
        }
    }
}
