//! Note feed service - merges note sources and publishes results

use std::sync::Arc;

use caliber_domain::{Batch, Note, Result, Trainee};
use tokio::sync::broadcast;
use tracing::{debug, instrument};

use super::ports::NoteApi;
use crate::sync::{ListPublisher, Publisher};

/// Note feed for one portal view
///
/// Lists go out on the list publisher, saved notes on the saved publisher.
pub struct NoteFeed {
    api: Arc<dyn NoteApi>,
    list: ListPublisher<Note>,
    saved: Publisher<Note>,
}

impl NoteFeed {
    /// Create a new note feed
    pub fn new(api: Arc<dyn NoteApi>) -> Self {
        Self { api, list: Publisher::new(), saved: Publisher::new() }
    }

    /// Subscribe to published note lists.
    pub fn subscribe_list(&self) -> broadcast::Receiver<Vec<Note>> {
        self.list.subscribe()
    }

    /// Subscribe to saved notes.
    pub fn subscribe_saved(&self) -> broadcast::Receiver<Note> {
        self.saved.subscribe()
    }

    /// Fetch every note for a batch and week and publish the merged list.
    ///
    /// Queries the trainer batch, trainer trainee, QC batch and QC trainee
    /// sources concurrently. A failing source is left out of the list; the
    /// list is published once, after all four have answered.
    #[instrument(skip(self))]
    pub async fn fetch_by_batch_id_by_week(&self, batch_id: i64, week: u32) -> Vec<Note> {
        let sources = vec![
            self.api.batch_notes_by_week(batch_id, week),
            self.api.trainee_notes_by_week(batch_id, week),
            self.api.qc_batch_notes_by_week(batch_id, week),
            self.api.qc_trainee_notes_by_week(batch_id, week),
        ];

        let notes = self.list.publish_aggregate(sources).await;
        debug!(count = notes.len(), "published weekly notes");
        notes
    }

    /// Fetch every note about a trainee. Nothing is published.
    pub async fn fetch_by_trainee(&self, trainee: &Trainee) -> Result<Vec<Note>> {
        self.api.notes_by_trainee(trainee.trainee_id).await
    }

    /// Publish QC trainee notes for a batch and week.
    ///
    /// An empty list is published first so consumers drop stale notes while
    /// the request is in flight.
    pub async fn fetch_qc_trainee_notes(&self, batch: &Batch, week: u32) -> Result<Vec<Note>> {
        self.list.publish(Vec::new());
        let notes = self.api.qc_trainee_notes_by_week(batch.batch_id, week).await?;
        self.list.publish(notes.clone());
        Ok(notes)
    }

    /// Publish the QC batch notes for a batch and week, clearing first.
    pub async fn fetch_qc_batch_notes(&self, batch: &Batch, week: u32) -> Result<Vec<Note>> {
        self.list.publish(Vec::new());
        let notes = self.api.qc_batch_notes_by_week(batch.batch_id, week).await?;
        self.list.publish(notes.clone());
        Ok(notes)
    }

    /// Create a note and publish the saved copy.
    #[instrument(skip(self, note), fields(week = note.week))]
    pub async fn create(&self, note: &Note) -> Result<Note> {
        let saved = self.api.create(note).await?;
        self.saved.publish(saved.clone());
        Ok(saved)
    }

    /// Update a note and publish the saved copy.
    #[instrument(skip(self, note), fields(note_id = ?note.note_id))]
    pub async fn update(&self, note: &Note) -> Result<Note> {
        let saved = self.api.update(note).await?;
        self.saved.publish(saved.clone());
        Ok(saved)
    }
}
