//! Status transitions and colours for calendar events

use caliber_domain::constants::{COLOR_CANCELED, COLOR_COMPLETED, COLOR_MISSED, COLOR_PENDING};
use caliber_domain::{CalendarEvent, SubtopicStatus};
use chrono::{DateTime, Utc};

/// Status after a click: Pending -> Completed -> Missed -> Pending.
///
/// Canceled subtopics stay canceled.
pub fn next_status(current: SubtopicStatus) -> SubtopicStatus {
    match current {
        SubtopicStatus::Pending => SubtopicStatus::Completed,
        SubtopicStatus::Completed => SubtopicStatus::Missed,
        SubtopicStatus::Missed => SubtopicStatus::Pending,
        SubtopicStatus::Canceled => SubtopicStatus::Canceled,
    }
}

/// Status after the event was dropped on its new `start` date.
///
/// Future dates are pending again. A past date keeps a completed status and
/// otherwise counts as missed.
pub fn moved_status(event: &CalendarEvent, now: DateTime<Utc>) -> SubtopicStatus {
    match event.status {
        SubtopicStatus::Canceled => SubtopicStatus::Canceled,
        _ if event.start > now => SubtopicStatus::Pending,
        SubtopicStatus::Completed => SubtopicStatus::Completed,
        _ => SubtopicStatus::Missed,
    }
}

/// Display colour of a subtopic in `status`.
pub fn status_color(status: SubtopicStatus) -> &'static str {
    match status {
        SubtopicStatus::Pending => COLOR_PENDING,
        SubtopicStatus::Completed => COLOR_COMPLETED,
        SubtopicStatus::Missed => COLOR_MISSED,
        SubtopicStatus::Canceled => COLOR_CANCELED,
    }
}
