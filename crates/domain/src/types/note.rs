//! Notes written by trainers and quality control

use serde::{Deserialize, Serialize};

use crate::impl_wire_name_conversions;

/// Who a note is about and who wrote it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoteType {
    Batch,
    Trainee,
    QcBatch,
    QcTrainee,
}

impl_wire_name_conversions!(NoteType {
    Batch => "BATCH",
    Trainee => "TRAINEE",
    QcBatch => "QC_BATCH",
    QcTrainee => "QC_TRAINEE",
});

impl NoteType {
    /// Whether the note was entered by quality control.
    pub fn is_qc(&self) -> bool {
        matches!(self, Self::QcBatch | Self::QcTrainee)
    }
}

/// Quality-control rating attached to QC notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QcStatus {
    Superstar,
    Good,
    Average,
    Poor,
    Undefined,
}

/// A weekly note on a batch or a trainee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Absent until the backend has stored the note.
    #[serde(default)]
    pub note_id: Option<i64>,
    pub content: String,
    pub week: u32,
    #[serde(default)]
    pub batch_id: Option<i64>,
    #[serde(default)]
    pub trainee_id: Option<i64>,
    #[serde(rename = "type")]
    pub note_type: NoteType,
    #[serde(default)]
    pub qc_status: Option<QcStatus>,
    #[serde(default)]
    pub qc_feedback: bool,
    #[serde(default)]
    pub max_visibility: Option<String>,
}
