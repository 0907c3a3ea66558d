//! Port interface for the notes backend

use async_trait::async_trait;
use caliber_domain::{Note, Result};

/// Remote note operations
///
/// Each weekly fetch hits a separate backend endpoint; the feed merges them.
#[async_trait]
pub trait NoteApi: Send + Sync {
    /// Batch notes entered by the trainer.
    async fn batch_notes_by_week(&self, batch_id: i64, week: u32) -> Result<Vec<Note>>;

    /// Trainee notes entered by the trainer.
    async fn trainee_notes_by_week(&self, batch_id: i64, week: u32) -> Result<Vec<Note>>;

    /// Batch notes entered by quality control.
    async fn qc_batch_notes_by_week(&self, batch_id: i64, week: u32) -> Result<Vec<Note>>;

    /// Trainee notes entered by quality control.
    async fn qc_trainee_notes_by_week(&self, batch_id: i64, week: u32) -> Result<Vec<Note>>;

    /// Every note about one trainee.
    async fn notes_by_trainee(&self, trainee_id: i64) -> Result<Vec<Note>>;

    /// Store a new note, returning it as saved.
    async fn create(&self, note: &Note) -> Result<Note>;

    /// Update an existing note, returning it as saved.
    async fn update(&self, note: &Note) -> Result<Note>;
}
