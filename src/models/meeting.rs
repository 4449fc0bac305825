//! Meeting model (aggregate root).
//!
//! A meeting owns exactly one [`Program`], which in turn owns its slots.
//! All invariants are checked once, at construction:
//!
//! 1. Title is not empty
//! 2. Title has at least `min_title_chars` characters (default 5)
//! 3. End is not before start
//! 4. Program has at least one slot
//!
//! Checks run in that order and the first violation is returned.
//!
//! # Reschedule
//! Moving a meeting computes `delta = new_start - start` and applies it to
//! the meeting's own bounds and to every slot in the program. A uniform
//! shift keeps every duration and gap, so nothing is re-validated.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Program;
use crate::config::MeetingRules;
use crate::models::program_slot::shift_timestamp;
use crate::validation::{self, ValidationError};

/// A scheduled meeting with its program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMeeting")]
pub struct Meeting {
    id: Uuid,
    title: String,
    description: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    program: Program,
}

/// Unvalidated wire form of a [`Meeting`].
///
/// The nested program validates itself while it is deserialized, before
/// any meeting-level check runs.
#[derive(Deserialize)]
struct RawMeeting {
    id: Uuid,
    title: String,
    description: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    program: Program,
}

impl TryFrom<RawMeeting> for Meeting {
    type Error = ValidationError;

    fn try_from(raw: RawMeeting) -> Result<Self, Self::Error> {
        Self::new(
            raw.id,
            raw.title,
            raw.description,
            raw.start,
            raw.end,
            raw.program,
        )
    }
}

impl Meeting {
    /// Creates a meeting using the default [`MeetingRules`].
    ///
    /// # Errors
    /// `EmptyTitle`, `TitleTooShort`, `InvalidTimeRange` or `EmptyProgram`,
    /// whichever is violated first.
    pub fn new(
        id: Uuid,
        title: impl Into<String>,
        description: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        program: Program,
    ) -> Result<Self, ValidationError> {
        Self::with_rules(
            &MeetingRules::default(),
            id,
            title,
            description,
            start,
            end,
            program,
        )
    }

    /// Creates a meeting validated against explicit rules.
    pub fn with_rules(
        rules: &MeetingRules,
        id: Uuid,
        title: impl Into<String>,
        description: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        program: Program,
    ) -> Result<Self, ValidationError> {
        let title = title.into();

        let checked = validation::validate_title(&title, rules)
            .and_then(|()| validation::validate_time_range(start, end))
            .and_then(|()| validation::validate_slot_count(program.len()));
        if let Err(err) = checked {
            tracing::warn!(meeting_id = %id, kind = ?err.kind, "meeting rejected: {err}");
            return Err(err);
        }

        tracing::debug!(
            meeting_id = %id,
            slot_count = program.len(),
            %start,
            %end,
            "meeting created"
        );

        Ok(Self {
            id,
            title,
            description: description.into(),
            start,
            end,
            program,
        })
    }

    /// Meeting identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Meeting start.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Meeting end.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Length of the meeting (`end - start`), never negative.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// The meeting program (read-only).
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Moves the meeting so that it starts at `new_start`.
    ///
    /// The meeting's end and every program slot move by the same signed
    /// delta (`new_start - start`), so durations and gaps are kept.
    ///
    /// # Errors
    /// `TimeOutOfRange` if any shifted timestamp cannot be represented.
    /// The meeting is unchanged in that case.
    pub fn reschedule(&mut self, new_start: NaiveDateTime) -> Result<(), ValidationError> {
        let delta = new_start - self.start;
        self.reschedule_by(delta)
    }

    /// Shifts the meeting and its whole program by `delta`.
    pub fn reschedule_by(&mut self, delta: Duration) -> Result<(), ValidationError> {
        let start = shift_timestamp(self.start, delta)?;
        let end = shift_timestamp(self.end, delta)?;

        // Program::reschedule is all-or-nothing, so commit own bounds after it
        self.program.reschedule(delta)?;
        self.start = start;
        self.end = end;

        tracing::debug!(meeting_id = %self.id, delta = %delta, %start, "meeting rescheduled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProgramSlot;
    use crate::validation::ValidationErrorKind;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
            .with_test_writer()
            .try_init();
    }

    fn dt(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn workshop_program(year: i32) -> Program {
        Program::new(vec![
            ProgramSlot::new(
                dt(year, 12, 15, 19, 0),
                dt(year, 12, 15, 20, 0),
                "Divergence",
                "Main room",
            ),
            ProgramSlot::new(
                dt(year, 12, 15, 20, 0),
                dt(year, 12, 15, 21, 0),
                "Convergence",
                "Main room",
            ),
        ])
        .unwrap()
    }

    fn build(
        title: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        program: Program,
    ) -> Result<Meeting, ValidationError> {
        Meeting::new(
            Uuid::new_v4(),
            title,
            "This is a silly workshop, don't come",
            start,
            end,
            program,
        )
    }

    fn workshop(year: i32) -> Meeting {
        build(
            "TDD, DDD & Teamwork",
            dt(year, 12, 15, 19, 0),
            dt(year, 12, 15, 21, 0),
            workshop_program(year),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_meeting() {
        init_tracing();
        let id = Uuid::new_v4();
        let meeting = Meeting::new(
            id,
            "TDD, DDD & Teamwork",
            "This is a silly workshop, don't come",
            dt(2017, 12, 15, 19, 0),
            dt(2017, 12, 15, 21, 0),
            workshop_program(2017),
        )
        .unwrap();

        assert_eq!(meeting.id(), id);
        assert_eq!(meeting.title(), "TDD, DDD & Teamwork");
        assert_eq!(meeting.description(), "This is a silly workshop, don't come");
        assert_eq!(meeting.start(), dt(2017, 12, 15, 19, 0));
        assert_eq!(meeting.end(), dt(2017, 12, 15, 21, 0));
        assert_eq!(meeting.duration(), Duration::hours(2));
        assert_eq!(meeting.program(), &workshop_program(2017));
    }

    #[test]
    fn test_empty_title() {
        let err = build(
            "",
            dt(2017, 12, 15, 19, 0),
            dt(2017, 12, 15, 21, 0),
            workshop_program(2017),
        )
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::EmptyTitle);
    }

    #[test]
    fn test_title_too_short() {
        let err = build(
            "Yo",
            dt(2017, 12, 15, 19, 0),
            dt(2017, 12, 15, 21, 0),
            workshop_program(2017),
        )
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::TitleTooShort);
    }

    #[test]
    fn test_end_before_start() {
        let err = build(
            "Yoyoyo",
            dt(2017, 12, 15, 21, 0),
            dt(2017, 12, 15, 19, 0),
            workshop_program(2017),
        )
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidTimeRange);
    }

    #[test]
    fn test_zero_length_meeting_allowed() {
        let meeting = build(
            "Stand-up",
            dt(2017, 12, 15, 19, 0),
            dt(2017, 12, 15, 19, 0),
            workshop_program(2017),
        )
        .unwrap();
        assert_eq!(meeting.duration(), Duration::zero());
    }

    #[test]
    fn test_empty_program() {
        let err = build(
            "Meeting with no program slots",
            dt(2017, 12, 15, 19, 0),
            dt(2017, 12, 15, 21, 0),
            Program::new(Vec::new()).unwrap(),
        )
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::EmptyProgram);
    }

    #[test]
    fn test_first_violation_wins() {
        // Short title, reversed times and empty program: title is reported
        let err = build(
            "Yo",
            dt(2017, 12, 15, 21, 0),
            dt(2017, 12, 15, 19, 0),
            Program::new(Vec::new()).unwrap(),
        )
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::TitleTooShort);

        // Reversed times and empty program: time range is reported
        let err = build(
            "Yoyoyo",
            dt(2017, 12, 15, 21, 0),
            dt(2017, 12, 15, 19, 0),
            Program::new(Vec::new()).unwrap(),
        )
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidTimeRange);
    }

    #[test]
    fn test_custom_rules() {
        let rules = MeetingRules::new().with_min_title_chars(2);
        let meeting = Meeting::with_rules(
            &rules,
            Uuid::new_v4(),
            "Yo",
            "",
            dt(2017, 12, 15, 19, 0),
            dt(2017, 12, 15, 21, 0),
            workshop_program(2017),
        );
        assert!(meeting.is_ok());
    }

    #[test]
    fn test_reschedule_one_year_later() {
        init_tracing();
        let mut actual = workshop(2017);
        actual.reschedule(dt(2018, 12, 15, 19, 0)).unwrap();

        let expected = Meeting::new(
            actual.id(),
            "TDD, DDD & Teamwork",
            "This is a silly workshop, don't come",
            dt(2018, 12, 15, 19, 0),
            dt(2018, 12, 15, 21, 0),
            workshop_program(2018),
        )
        .unwrap();

        assert_eq!(actual.end(), dt(2018, 12, 15, 21, 0));
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_reschedule_backwards() {
        let mut meeting = workshop(2017);
        meeting.reschedule(dt(2017, 12, 14, 9, 30)).unwrap();

        assert_eq!(meeting.start(), dt(2017, 12, 14, 9, 30));
        assert_eq!(meeting.end(), dt(2017, 12, 14, 11, 30));
        let slots = meeting.program().slots();
        assert_eq!(slots[0].start(), dt(2017, 12, 14, 9, 30));
        assert_eq!(slots[0].end(), dt(2017, 12, 14, 10, 30));
        assert_eq!(slots[1].start(), dt(2017, 12, 14, 10, 30));
        assert_eq!(slots[1].end(), dt(2017, 12, 14, 11, 30));
    }

    #[test]
    fn test_reschedule_to_same_start_is_noop() {
        let mut meeting = workshop(2017);
        let before = meeting.clone();
        meeting.reschedule(meeting.start()).unwrap();
        assert_eq!(meeting, before);
    }

    #[test]
    fn test_reschedule_preserves_invariants() {
        let mut rng = StdRng::seed_from_u64(2017);
        let mut meeting = workshop(2017);
        let duration = meeting.duration();
        let slot_durations: Vec<_> = meeting
            .program()
            .slots()
            .iter()
            .map(|s| s.duration())
            .collect();

        for _ in 0..200 {
            let delta = Duration::minutes(rng.random_range(-1_000_000..1_000_000));
            meeting.reschedule_by(delta).unwrap();

            assert!(meeting.end() >= meeting.start());
            assert_eq!(meeting.duration(), duration);
            assert!(validation::find_overlap(meeting.program().slots()).is_none());
            let after: Vec<_> = meeting.program().slots().iter().map(|s| s.duration()).collect();
            assert_eq!(after, slot_durations);
            // Slots keep their offset from the meeting start
            assert_eq!(meeting.program().slots()[0].start(), meeting.start());
        }
    }

    #[test]
    fn test_reschedule_out_of_range_is_atomic() {
        let mut meeting = workshop(2017);
        let before = meeting.clone();
        let err = meeting.reschedule(NaiveDateTime::MAX).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::TimeOutOfRange);
        assert_eq!(meeting, before);
    }

    #[test]
    fn test_deserialize_validates() {
        let meeting = workshop(2017);
        let json = serde_json::to_string(&meeting).unwrap();
        let back: Meeting = serde_json::from_str(&json).unwrap();
        assert_eq!(meeting, back);

        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["title"] = serde_json::Value::from("Yo");
        let err = serde_json::from_value::<Meeting>(value).unwrap_err();
        assert!(err.to_string().contains("Title length"));

        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["program"]["slots"] = serde_json::Value::Array(Vec::new());
        let err = serde_json::from_value::<Meeting>(value).unwrap_err();
        assert!(err.to_string().contains("at least one program slot"));
    }
}
