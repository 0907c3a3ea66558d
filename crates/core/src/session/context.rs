//! Session snapshot kept between portal runs

use caliber_domain::{BamUser, Batch};
use serde::{Deserialize, Serialize};

/// What a portal session knows about its user
///
/// Persisted as one document through a
/// [`SessionStore`](super::ports::SessionStore).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    #[serde(default)]
    pub user: Option<BamUser>,
    #[serde(default)]
    pub selected_batch: Option<Batch>,
}

impl SessionContext {
    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.selected_batch.is_none()
    }
}
