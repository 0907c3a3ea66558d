//! HTTP adapter for the user backend

use std::sync::Arc;

use async_trait::async_trait;
use caliber_core::UserApi;
use caliber_domain::{BamUser, Result};
use tracing::instrument;

use super::rest::{post, RestClient};

/// [`UserApi`] over the portal REST endpoints
pub struct HttpUserApi {
    client: Arc<dyn RestClient>,
}

impl HttpUserApi {
    pub fn new(client: Arc<dyn RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    #[instrument(skip(self, user), fields(user_id = user.user_id))]
    async fn update_user(&self, user: &BamUser) -> Result<BamUser> {
        Ok(post(self.client.as_ref(), "bam/users/update", user).await?)
    }
}
