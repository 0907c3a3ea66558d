//! Session service - owns the session context and keeps it persisted

use std::sync::Arc;

use caliber_domain::{BamUser, Batch, Result};
use tokio::sync::{watch, RwLock};
use tracing::{debug, info, instrument};

use super::context::SessionContext;
use super::ports::{SessionStore, UserApi};

/// Session service
///
/// Every change is saved through the store before it is announced.
pub struct SessionService {
    store: Arc<dyn SessionStore>,
    users: Arc<dyn UserApi>,
    context: RwLock<SessionContext>,
    selected_batch: watch::Sender<Option<Batch>>,
}

impl SessionService {
    /// Load the stored context and start a session from it.
    pub async fn load(store: Arc<dyn SessionStore>, users: Arc<dyn UserApi>) -> Result<Self> {
        let context = store.load().await?;
        debug!(empty = context.is_empty(), "session loaded");

        let (selected_batch, _) = watch::channel(context.selected_batch.clone());
        Ok(Self { store, users, context: RwLock::new(context), selected_batch })
    }

    /// Snapshot of the whole context.
    pub async fn context(&self) -> SessionContext {
        self.context.read().await.clone()
    }

    pub async fn user(&self) -> Option<BamUser> {
        self.context.read().await.user.clone()
    }

    pub async fn selected_batch(&self) -> Option<Batch> {
        self.context.read().await.selected_batch.clone()
    }

    /// Watch the selected batch. The receiver starts at the current value.
    pub fn watch_selected_batch(&self) -> watch::Receiver<Option<Batch>> {
        self.selected_batch.subscribe()
    }

    /// Push `user` to the backend, then keep the stored copy in the session.
    ///
    /// The session only changes once the store accepted the new context.
    #[instrument(skip(self, user), fields(user_id = user.user_id))]
    pub async fn put_user_in_session(&self, user: &BamUser) -> Result<BamUser> {
        let stored = self.users.update_user(user).await?;

        let mut context = self.context.write().await;
        let mut next = context.clone();
        next.user = Some(stored.clone());
        self.store.save(&next).await?;
        *context = next;

        info!("user stored in session");
        Ok(stored)
    }

    /// Select a batch, save it, and notify watchers.
    ///
    /// On a failed save the previous selection stays in place everywhere.
    #[instrument(skip(self, batch), fields(batch_id = batch.batch_id))]
    pub async fn put_selected_batch(&self, batch: Batch) -> Result<()> {
        let mut context = self.context.write().await;
        let mut next = context.clone();
        next.selected_batch = Some(batch.clone());
        self.store.save(&next).await?;
        *context = next;

        self.selected_batch.send_replace(Some(batch));
        Ok(())
    }

    /// Forget the user and batch and save the empty context.
    pub async fn clear(&self) -> Result<()> {
        let mut context = self.context.write().await;
        self.store.save(&SessionContext::default()).await?;
        *context = SessionContext::default();

        self.selected_batch.send_replace(None);
        Ok(())
    }
}
