//! Batches and the trainees enrolled in them

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::impl_wire_name_conversions;

/// A training batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub batch_id: i64,
    pub training_name: String,
    #[serde(default)]
    pub trainer_name: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Number of weeks the batch has run so far.
    #[serde(default)]
    pub weeks: u32,
}

/// Enrolment status of a trainee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingStatus {
    Training,
    Marketing,
    Employed,
    Dropped,
    Signed,
}

impl_wire_name_conversions!(TrainingStatus {
    Training => "Training",
    Marketing => "Marketing",
    Employed => "Employed",
    Dropped => "Dropped",
    Signed => "Signed",
});

/// A trainee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trainee {
    pub trainee_id: i64,
    pub name: String,
    pub email: String,
    pub training_status: TrainingStatus,
}
