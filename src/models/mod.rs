//! Meeting domain models.
//!
//! Three entities compose bottom-up, each exclusively owning the next:
//!
//! | Entity | Owns | Validated at construction |
//! |--------|------|---------------------------|
//! | `Meeting` | one `Program` | title, time range, non-empty program |
//! | `Program` | ordered `ProgramSlot`s | pairwise non-overlap |
//! | `ProgramSlot` | — | nothing |
//!
//! Rescheduling flows top-down: `Meeting` → `Program` → each `ProgramSlot`,
//! with the same delta passed explicitly through every level.

mod meeting;
mod program;
mod program_slot;

pub use meeting::Meeting;
pub use program::Program;
pub use program_slot::ProgramSlot;
