//! Meeting programs for the U-Engine ecosystem.
//!
//! Models a scheduled meeting made of non-overlapping program slots.
//! All invariants are enforced at construction; the only later mutation is
//! a whole-meeting reschedule that shifts every timestamp by the same delta.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Meeting`, `Program`, `ProgramSlot`
//! - **`validation`**: Construction checks (titles, time ranges, empty
//!   programs, slot overlap) and the `ValidationError` taxonomy
//! - **`config`**: `MeetingRules`, the tunable validation parameters
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveDate, NaiveDateTime};
//! use u_meeting::models::{Meeting, Program, ProgramSlot};
//! use uuid::Uuid;
//!
//! fn at(day: u32, hour: u32) -> NaiveDateTime {
//!     NaiveDate::from_ymd_opt(2017, 12, day)
//!         .unwrap()
//!         .and_hms_opt(hour, 0, 0)
//!         .unwrap()
//! }
//!
//! let program = Program::new(vec![
//!     ProgramSlot::new(at(15, 19), at(15, 20), "Divergence", "Main room"),
//!     ProgramSlot::new(at(15, 20), at(15, 21), "Convergence", "Main room"),
//! ])
//! .unwrap();
//!
//! let mut meeting = Meeting::new(
//!     Uuid::new_v4(),
//!     "TDD, DDD & Teamwork",
//!     "Hands-on workshop",
//!     at(15, 19),
//!     at(15, 21),
//!     program,
//! )
//! .unwrap();
//!
//! meeting.reschedule(at(16, 9)).unwrap();
//! assert_eq!(meeting.end(), at(16, 11));
//! assert_eq!(meeting.program().slots()[1].start(), at(16, 10));
//! ```

pub mod config;
pub mod models;
pub mod validation;

pub use config::MeetingRules;
pub use models::{Meeting, Program, ProgramSlot};
pub use validation::{ValidationError, ValidationErrorKind};
