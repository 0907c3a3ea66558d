//! Domain types and models
//!
//! Field names follow the backend's camelCase JSON.

pub mod calendar;
pub mod note;
pub mod roster;
pub mod user;

pub use calendar::{CalendarEvent, Subtopic, SubtopicName, SubtopicStatus, SubtopicStatusRef};
pub use note::{Note, NoteType, QcStatus};
pub use roster::{Batch, Trainee, TrainingStatus};
pub use user::BamUser;
