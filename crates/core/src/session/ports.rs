//! Port interfaces for session persistence and the user backend

use async_trait::async_trait;
use caliber_domain::{BamUser, Result};

use super::context::SessionContext;

/// Load/save contract for the session context
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the stored context. A store with nothing saved yields an empty
    /// context, not an error.
    async fn load(&self) -> Result<SessionContext>;

    /// Replace the stored context.
    async fn save(&self, context: &SessionContext) -> Result<()>;
}

/// Remote user operations
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Push the user's profile to the backend, returning it as stored.
    async fn update_user(&self, user: &BamUser) -> Result<BamUser>;
}
