//! Curriculum subtopics and their calendar representation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{CaliberError, Result};
use crate::impl_wire_name_conversions;

/// Progress of a scheduled subtopic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubtopicStatus {
    Pending,
    Completed,
    Missed,
    Canceled,
}

impl_wire_name_conversions!(SubtopicStatus {
    Pending => "Pending",
    Completed => "Completed",
    Missed => "Missed",
    Canceled => "Canceled",
});

/// Name record of a subtopic as the backend nests it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtopicName {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

/// Status record of a subtopic as the backend nests it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtopicStatusRef {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

/// A curriculum subtopic scheduled for a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtopic {
    pub subtopic_id: i64,
    pub subtopic_name: SubtopicName,
    /// Scheduled date, milliseconds since the Unix epoch.
    pub subtopic_date: i64,
    pub status: SubtopicStatusRef,
    #[serde(default)]
    pub batch_id: Option<i64>,
}

impl Subtopic {
    /// Parsed status of this subtopic.
    pub fn status(&self) -> Result<SubtopicStatus> {
        self.status.name.parse().map_err(CaliberError::InvalidInput)
    }

    /// Scheduled date as a UTC timestamp.
    pub fn scheduled_at(&self) -> Result<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.subtopic_date).ok_or_else(|| {
            CaliberError::InvalidInput(format!(
                "subtopic {} has out-of-range date {}",
                self.subtopic_id, self.subtopic_date
            ))
        })
    }
}

/// A subtopic as placed on the batch calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub subtopic_id: i64,
    pub title: String,
    pub start: DateTime<Utc>,
    pub status: SubtopicStatus,
    pub color: String,
}
