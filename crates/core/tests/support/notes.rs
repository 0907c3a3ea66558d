use std::sync::Mutex;

use async_trait::async_trait;
use caliber_core::NoteApi;
use caliber_domain::{CaliberError, Note, NoteType, Result as DomainResult};

/// Build a note of the given type for week `week` of batch 2201.
pub fn note(id: i64, note_type: NoteType, week: u32) -> Note {
    Note {
        note_id: Some(id),
        content: format!("note {id}"),
        week,
        batch_id: Some(2201),
        trainee_id: matches!(note_type, NoteType::Trainee | NoteType::QcTrainee).then_some(7),
        note_type,
        qc_status: None,
        qc_feedback: note_type.is_qc(),
        max_visibility: None,
    }
}

/// In-memory `NoteApi` with a canned answer per source.
pub struct MockNoteApi {
    batch: DomainResult<Vec<Note>>,
    trainee: DomainResult<Vec<Note>>,
    qc_batch: DomainResult<Vec<Note>>,
    qc_trainee: DomainResult<Vec<Note>>,
    fail_writes: bool,
    calls: Mutex<Vec<String>>,
}

impl Default for MockNoteApi {
    fn default() -> Self {
        Self {
            batch: Ok(Vec::new()),
            trainee: Ok(Vec::new()),
            qc_batch: Ok(Vec::new()),
            qc_trainee: Ok(Vec::new()),
            fail_writes: false,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockNoteApi {
    pub fn with_source(mut self, source: NoteType, answer: DomainResult<Vec<Note>>) -> Self {
        match source {
            NoteType::Batch => self.batch = answer,
            NoteType::Trainee => self.trainee = answer,
            NoteType::QcBatch => self.qc_batch = answer,
            NoteType::QcTrainee => self.qc_trainee = answer,
        }
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn write(&self, note: &Note, id: i64) -> DomainResult<Note> {
        if self.fail_writes {
            return Err(CaliberError::Network("write rejected".into()));
        }
        let mut saved = note.clone();
        saved.note_id.get_or_insert(id);
        Ok(saved)
    }
}

#[async_trait]
impl NoteApi for MockNoteApi {
    async fn batch_notes_by_week(&self, batch_id: i64, week: u32) -> DomainResult<Vec<Note>> {
        self.record(format!("batch/{batch_id}/{week}"));
        self.batch.clone()
    }

    async fn trainee_notes_by_week(&self, batch_id: i64, week: u32) -> DomainResult<Vec<Note>> {
        self.record(format!("trainee/{batch_id}/{week}"));
        self.trainee.clone()
    }

    async fn qc_batch_notes_by_week(&self, batch_id: i64, week: u32) -> DomainResult<Vec<Note>> {
        self.record(format!("qc/batch/{batch_id}/{week}"));
        self.qc_batch.clone()
    }

    async fn qc_trainee_notes_by_week(
        &self,
        batch_id: i64,
        week: u32,
    ) -> DomainResult<Vec<Note>> {
        self.record(format!("qc/trainee/{batch_id}/{week}"));
        self.qc_trainee.clone()
    }

    async fn notes_by_trainee(&self, trainee_id: i64) -> DomainResult<Vec<Note>> {
        self.record(format!("all/trainee/{trainee_id}"));
        let mut all = Vec::new();
        for source in [&self.trainee, &self.qc_trainee] {
            if let Ok(notes) = source {
                all.extend(notes.iter().filter(|n| n.trainee_id == Some(trainee_id)).cloned());
            }
        }
        Ok(all)
    }

    async fn create(&self, note: &Note) -> DomainResult<Note> {
        self.record("create".into());
        self.write(note, 1000)
    }

    async fn update(&self, note: &Note) -> DomainResult<Note> {
        self.record("update".into());
        self.write(note, 2000)
    }
}
