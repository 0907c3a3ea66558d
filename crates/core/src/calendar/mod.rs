//! Batch calendar: subtopics placed on a schedule
//!
//! Clicking an event advances its status; dragging it to another day moves
//! the date and then re-derives the status, both synced to the backend.

pub mod board;
pub mod ports;
pub mod status;

pub use board::{event_from_subtopic, CalendarBoard};
pub use ports::CalendarApi;
pub use status::{moved_status, next_status, status_color};
