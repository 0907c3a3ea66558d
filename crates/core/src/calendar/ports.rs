//! Port interface for the calendar backend

use async_trait::async_trait;
use caliber_domain::{CalendarEvent, Result, Subtopic};

/// Remote calendar operations for one batch's subtopics
#[async_trait]
pub trait CalendarApi: Send + Sync {
    /// One page of a batch's scheduled subtopics.
    async fn subtopics_by_batch_page(
        &self,
        batch_id: i64,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<Subtopic>>;

    /// Move a subtopic to a new date (milliseconds since the Unix epoch).
    async fn change_topic_date(&self, subtopic_id: i64, batch_id: i64, epoch_millis: i64)
        -> Result<()>;

    /// Store the event's current status.
    async fn update_topic_status(&self, event: &CalendarEvent, batch_id: i64) -> Result<()>;
}
