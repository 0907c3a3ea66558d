//! HTTP adapter for the notes backend

use std::sync::Arc;

use async_trait::async_trait;
use caliber_core::NoteApi;
use caliber_domain::{Note, Result};
use tracing::instrument;

use super::rest::{get_list, post, RestClient};

/// [`NoteApi`] over the portal REST endpoints
pub struct HttpNoteApi {
    client: Arc<dyn RestClient>,
}

impl HttpNoteApi {
    pub fn new(client: Arc<dyn RestClient>) -> Self {
        Self { client }
    }

    async fn list(&self, path: String) -> Result<Vec<Note>> {
        Ok(get_list(self.client.as_ref(), &path).await?)
    }
}

#[async_trait]
impl NoteApi for HttpNoteApi {
    async fn batch_notes_by_week(&self, batch_id: i64, week: u32) -> Result<Vec<Note>> {
        self.list(format!("trainer/note/batch/{batch_id}/{week}")).await
    }

    async fn trainee_notes_by_week(&self, batch_id: i64, week: u32) -> Result<Vec<Note>> {
        self.list(format!("trainer/note/trainee/{batch_id}/{week}")).await
    }

    async fn qc_batch_notes_by_week(&self, batch_id: i64, week: u32) -> Result<Vec<Note>> {
        self.list(format!("qc/note/batch/{batch_id}/{week}")).await
    }

    async fn qc_trainee_notes_by_week(&self, batch_id: i64, week: u32) -> Result<Vec<Note>> {
        self.list(format!("qc/note/trainee/{batch_id}/{week}")).await
    }

    async fn notes_by_trainee(&self, trainee_id: i64) -> Result<Vec<Note>> {
        self.list(format!("all/notes/trainee/{trainee_id}")).await
    }

    #[instrument(skip(self, note), fields(week = note.week))]
    async fn create(&self, note: &Note) -> Result<Note> {
        Ok(post(self.client.as_ref(), "note/create", note).await?)
    }

    #[instrument(skip(self, note), fields(note_id = ?note.note_id))]
    async fn update(&self, note: &Note) -> Result<Note> {
        Ok(post(self.client.as_ref(), "note/update", note).await?)
    }
}
