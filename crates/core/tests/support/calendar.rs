use std::sync::Mutex;

use async_trait::async_trait;
use caliber_core::CalendarApi;
use caliber_domain::{
    CalendarEvent, CaliberError, Result as DomainResult, Subtopic, SubtopicName,
    SubtopicStatusRef,
};

/// Build a subtopic scheduled at `epoch_millis` with the given status name.
pub fn subtopic(id: i64, name: &str, epoch_millis: i64, status: &str) -> Subtopic {
    Subtopic {
        subtopic_id: id,
        subtopic_name: SubtopicName { id: None, name: name.to_string() },
        subtopic_date: epoch_millis,
        status: SubtopicStatusRef { id: None, name: status.to_string() },
        batch_id: Some(22506),
    }
}

/// In-memory `CalendarApi` that records every call in order.
#[derive(Default)]
pub struct MockCalendarApi {
    subtopics: Vec<Subtopic>,
    fail_date_change: bool,
    fail_status_update: bool,
    calls: Mutex<Vec<String>>,
}

impl MockCalendarApi {
    pub fn new(subtopics: Vec<Subtopic>) -> Self {
        Self { subtopics, ..Default::default() }
    }

    pub fn failing_date_change(mut self) -> Self {
        self.fail_date_change = true;
        self
    }

    pub fn failing_status_update(mut self) -> Self {
        self.fail_status_update = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CalendarApi for MockCalendarApi {
    async fn subtopics_by_batch_page(
        &self,
        batch_id: i64,
        page: u32,
        page_size: u32,
    ) -> DomainResult<Vec<Subtopic>> {
        self.calls.lock().unwrap().push(format!("page {batch_id} {page} {page_size}"));
        let start = (page * page_size) as usize;
        Ok(self.subtopics.iter().skip(start).take(page_size as usize).cloned().collect())
    }

    async fn change_topic_date(
        &self,
        subtopic_id: i64,
        batch_id: i64,
        epoch_millis: i64,
    ) -> DomainResult<()> {
        self.calls.lock().unwrap().push(format!("date {subtopic_id} {batch_id} {epoch_millis}"));
        if self.fail_date_change {
            return Err(CaliberError::Network("date update timed out".into()));
        }
        Ok(())
    }

    async fn update_topic_status(
        &self,
        event: &CalendarEvent,
        batch_id: i64,
    ) -> DomainResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("status {} {batch_id} {}", event.subtopic_id, event.status));
        if self.fail_status_update {
            return Err(CaliberError::Network("status update refused".into()));
        }
        Ok(())
    }
}
