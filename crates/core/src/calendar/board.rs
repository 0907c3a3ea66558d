//! Calendar board - the events shown for one batch and their sync

use std::sync::Arc;

use caliber_domain::constants::{DEFAULT_SUBTOPIC_PAGE, DEFAULT_SUBTOPIC_PAGE_SIZE};
use caliber_domain::{CalendarEvent, CaliberError, Result, Subtopic};
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use super::ports::CalendarApi;
use super::status::{moved_status, next_status, status_color};
use crate::sync::{apply_two_phase, MutationTarget};

/// Map a backend subtopic onto a calendar event.
pub fn event_from_subtopic(subtopic: &Subtopic) -> Result<CalendarEvent> {
    let status = subtopic.status()?;
    Ok(CalendarEvent {
        subtopic_id: subtopic.subtopic_id,
        title: subtopic.subtopic_name.name.clone(),
        start: subtopic.scheduled_at()?,
        status,
        color: status_color(status).to_string(),
    })
}

/// Events on one batch's calendar
///
/// Local changes are applied before the backend is told about them, so the
/// board never waits on the network to reflect a user gesture.
pub struct CalendarBoard {
    api: Arc<dyn CalendarApi>,
    batch_id: i64,
    events: Vec<CalendarEvent>,
}

impl CalendarBoard {
    /// Create an empty board for `batch_id`
    pub fn new(api: Arc<dyn CalendarApi>, batch_id: i64) -> Self {
        Self { api, batch_id, events: Vec::new() }
    }

    /// Batch whose subtopics this board shows.
    pub fn batch_id(&self) -> i64 {
        self.batch_id
    }

    /// Events from the last load, with local edits applied.
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Replace the board with one page of the batch's subtopics.
    ///
    /// Subtopics with an unknown status or an unrepresentable date are
    /// skipped.
    #[instrument(skip(self), fields(batch_id = self.batch_id))]
    pub async fn load(&mut self, page: u32, page_size: u32) -> Result<&[CalendarEvent]> {
        let subtopics = self.api.subtopics_by_batch_page(self.batch_id, page, page_size).await?;

        self.events = subtopics
            .iter()
            .filter_map(|subtopic| match event_from_subtopic(subtopic) {
                Ok(event) => Some(event),
                Err(err) => {
                    warn!(subtopic_id = subtopic.subtopic_id, error = %err, "skipping subtopic");
                    None
                }
            })
            .collect();

        info!(count = self.events.len(), "calendar loaded");
        Ok(&self.events)
    }

    /// Load the first page of the batch, sized to cover a month view.
    pub async fn load_default_page(&mut self) -> Result<&[CalendarEvent]> {
        self.load(DEFAULT_SUBTOPIC_PAGE, DEFAULT_SUBTOPIC_PAGE_SIZE).await
    }

    /// Advance a clicked event to its next status and store it.
    ///
    /// The board is updated before the backend call; a failed call is
    /// returned but not rolled back.
    #[instrument(skip(self, clicked), fields(subtopic_id = clicked.subtopic_id))]
    pub async fn handle_event_click(&mut self, clicked: CalendarEvent) -> Result<CalendarEvent> {
        let mut event = clicked;
        event.status = next_status(event.status);
        event.color = status_color(event.status).to_string();
        self.update_events(&event);

        if let Err(err) = self.api.update_topic_status(&event, self.batch_id).await {
            warn!(error = %err, "status update failed");
            return Err(err);
        }

        debug!(status = %event.status, "status updated");
        Ok(event)
    }

    /// Store an event dropped on a new date.
    ///
    /// `dropped.start` already holds the new date. The status is re-derived
    /// against `now` and the board updated; then the date change is sent,
    /// followed by the status update, which runs even if the date change
    /// failed. Only a failed status update is returned as an error.
    #[instrument(skip(self, dropped), fields(subtopic_id = dropped.subtopic_id))]
    pub async fn handle_event_drop(
        &mut self,
        dropped: CalendarEvent,
        now: DateTime<Utc>,
    ) -> Result<CalendarEvent> {
        let mut event = dropped;
        event.status = moved_status(&event, now);
        event.color = status_color(event.status).to_string();
        self.update_events(&event);

        let batch_id = self.batch_id;
        let subtopic_id = event.subtopic_id;
        let epoch_millis = event.start.timestamp_millis();
        let date_api = Arc::clone(&self.api);
        let status_api = Arc::clone(&self.api);
        let to_store = event.clone();

        let settled = apply_two_phase(
            MutationTarget::new(event),
            move || async move {
                date_api.change_topic_date(subtopic_id, batch_id, epoch_millis).await.map(|()| None)
            },
            move |_date_change| async move {
                status_api.update_topic_status(&to_store, batch_id).await?;
                Ok::<_, CaliberError>(Some(to_store))
            },
        )
        .await?;

        let event = settled.into_current();
        self.update_events(&event);
        Ok(event)
    }

    /// Copy status, start and colour onto every event with the same title.
    ///
    /// Returns how many events were updated.
    pub fn update_events(&mut self, changed: &CalendarEvent) -> usize {
        let mut updated = 0;
        for event in self.events.iter_mut().filter(|event| event.title == changed.title) {
            event.status = changed.status;
            event.start = changed.start;
            event.color.clone_from(&changed.color);
            updated += 1;
        }
        updated
    }
}
