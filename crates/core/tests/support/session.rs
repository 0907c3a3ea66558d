use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use caliber_core::{SessionContext, SessionStore, UserApi};
use caliber_domain::{BamUser, Batch, CaliberError, Result as DomainResult};

pub fn user() -> BamUser {
    BamUser {
        user_id: 3,
        first_name: "Ryan".into(),
        middle_name: None,
        last_name: "Lessley".into(),
        email: "rl@example.com".into(),
        role: 2,
        batch: None,
        phone: "1234567890".into(),
        phone2: Some("8675309".into()),
        skype: Some("rl_skype".into()),
        minerva_id: None,
    }
}

pub fn batch(id: i64) -> Batch {
    Batch {
        batch_id: id,
        training_name: format!("1712-dec10-java-{id}"),
        trainer_name: Some("Steve".into()),
        start_date: None,
        end_date: None,
        weeks: 10,
    }
}

/// Session store that keeps the last saved context in memory.
#[derive(Default)]
pub struct MemorySessionStore {
    saved: Mutex<Option<SessionContext>>,
    saves: AtomicUsize,
    reject_saves: bool,
}

impl MemorySessionStore {
    pub fn seeded(context: SessionContext) -> Self {
        Self { saved: Mutex::new(Some(context)), ..Self::default() }
    }

    /// Store whose every save fails with a storage error.
    pub fn read_only(context: SessionContext) -> Self {
        Self { saved: Mutex::new(Some(context)), reject_saves: true, ..Self::default() }
    }

    pub fn saved(&self) -> Option<SessionContext> {
        self.saved.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> DomainResult<SessionContext> {
        Ok(self.saved.lock().unwrap().clone().unwrap_or_default())
    }

    async fn save(&self, context: &SessionContext) -> DomainResult<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.reject_saves {
            return Err(CaliberError::Storage("disk full".into()));
        }
        *self.saved.lock().unwrap() = Some(context.clone());
        Ok(())
    }
}

/// User backend that stamps a Minerva id on the stored copy.
#[derive(Default)]
pub struct StampingUserApi {
    pub fail: bool,
}

#[async_trait]
impl UserApi for StampingUserApi {
    async fn update_user(&self, user: &BamUser) -> DomainResult<BamUser> {
        if self.fail {
            return Err(CaliberError::Auth("session expired".into()));
        }
        let mut stored = user.clone();
        stored.minerva_id = Some(9);
        Ok(stored)
    }
}
