//! HTTP adapter for the calendar backend
//!
//! The backend takes every calendar mutation as a GET with query
//! parameters.

use std::sync::Arc;

use async_trait::async_trait;
use caliber_core::CalendarApi;
use caliber_domain::{CalendarEvent, Result, Subtopic};
use tracing::{debug, instrument};
use url::form_urlencoded;

use super::rest::{get_list, RestClient};

/// [`CalendarApi`] over the portal REST endpoints
pub struct HttpCalendarApi {
    client: Arc<dyn RestClient>,
}

impl HttpCalendarApi {
    pub fn new(client: Arc<dyn RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CalendarApi for HttpCalendarApi {
    #[instrument(skip(self))]
    async fn subtopics_by_batch_page(
        &self,
        batch_id: i64,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<Subtopic>> {
        let path = with_query(
            "calendar/subtopicspagination",
            &[
                ("batchId", batch_id.to_string()),
                ("pageNumber", page.to_string()),
                ("pageSize", page_size.to_string()),
            ],
        );
        let subtopics: Vec<Subtopic> = get_list(self.client.as_ref(), &path).await?;
        debug!(count = subtopics.len(), "fetched subtopics");
        Ok(subtopics)
    }

    #[instrument(skip(self))]
    async fn change_topic_date(
        &self,
        subtopic_id: i64,
        batch_id: i64,
        epoch_millis: i64,
    ) -> Result<()> {
        let path = with_query(
            "calendar/dateupdate",
            &[
                ("subtopicId", subtopic_id.to_string()),
                ("batchId", batch_id.to_string()),
                ("date", epoch_millis.to_string()),
            ],
        );
        self.client.get_json(&path).await?;
        Ok(())
    }

    #[instrument(skip(self, event), fields(subtopic_id = event.subtopic_id, status = %event.status))]
    async fn update_topic_status(&self, event: &CalendarEvent, batch_id: i64) -> Result<()> {
        let path = with_query(
            "calendar/statusupdate",
            &[
                ("subtopicId", event.subtopic_id.to_string()),
                ("batchId", batch_id.to_string()),
                ("status", event.status.to_string()),
            ],
        );
        self.client.get_json(&path).await?;
        Ok(())
    }
}

fn with_query(path: &str, params: &[(&str, String)]) -> String {
    let query = form_urlencoded::Serializer::new(String::new()).extend_pairs(params).finish();
    format!("{path}?{query}")
}
