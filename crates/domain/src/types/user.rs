//! Portal user profile
//!
//! The attendance portal keeps the signed-in user in its session context.
//! Credentials never leave the backend, so no password fields exist here.

use serde::{Deserialize, Serialize};

/// A portal user (trainer, QC, or admin)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BamUser {
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "fName")]
    pub first_name: String,
    #[serde(rename = "mName", default)]
    pub middle_name: Option<String>,
    #[serde(rename = "lName")]
    pub last_name: String,
    pub email: String,
    pub role: i32,
    #[serde(default)]
    pub batch: Option<i64>,
    pub phone: String,
    #[serde(default)]
    pub phone2: Option<String>,
    #[serde(default)]
    pub skype: Option<String>,
    #[serde(rename = "minervaID", default)]
    pub minerva_id: Option<i64>,
}
