//! Session service: explicit context with load/save at the boundaries.

mod support;

use std::sync::Arc;

use caliber_core::{SessionContext, SessionService};
use caliber_domain::CaliberError;
use support::session::{batch, user, MemorySessionStore, StampingUserApi};

#[tokio::test]
async fn empty_store_starts_empty_session() {
    let service = SessionService::load(
        Arc::new(MemorySessionStore::default()),
        Arc::new(StampingUserApi::default()),
    )
    .await
    .unwrap();

    assert!(service.context().await.is_empty());
    assert!(service.watch_selected_batch().borrow().is_none());
}

#[tokio::test]
async fn stored_context_is_restored() {
    let store = MemorySessionStore::seeded(SessionContext {
        user: Some(user()),
        selected_batch: Some(batch(22506)),
    });
    let service =
        SessionService::load(Arc::new(store), Arc::new(StampingUserApi::default())).await.unwrap();

    assert_eq!(service.user().await.unwrap().user_id, 3);
    assert_eq!(service.selected_batch().await.unwrap().batch_id, 22506);
    assert_eq!(service.watch_selected_batch().borrow().as_ref().unwrap().batch_id, 22506);
}

#[tokio::test]
async fn put_user_stores_backend_copy() {
    let store = Arc::new(MemorySessionStore::default());
    let service =
        SessionService::load(store.clone(), Arc::new(StampingUserApi::default())).await.unwrap();

    let stored = service.put_user_in_session(&user()).await.unwrap();

    assert_eq!(stored.minerva_id, Some(9));
    assert_eq!(service.user().await, Some(stored.clone()));
    assert_eq!(store.saved().unwrap().user, Some(stored));
}

#[tokio::test]
async fn rejected_user_update_leaves_session_untouched() {
    let store = Arc::new(MemorySessionStore::default());
    let service =
        SessionService::load(store.clone(), Arc::new(StampingUserApi { fail: true })).await.unwrap();

    let result = service.put_user_in_session(&user()).await;

    assert!(matches!(result, Err(CaliberError::Auth(_))));
    assert!(service.user().await.is_none());
    assert_eq!(store.save_count(), 0);
}

#[tokio::test]
async fn selecting_batch_saves_and_notifies() {
    let store = Arc::new(MemorySessionStore::default());
    let service =
        SessionService::load(store.clone(), Arc::new(StampingUserApi::default())).await.unwrap();
    let mut watcher = service.watch_selected_batch();

    service.put_selected_batch(batch(41)).await.unwrap();

    watcher.changed().await.unwrap();
    assert_eq!(watcher.borrow().as_ref().unwrap().batch_id, 41);
    assert_eq!(store.saved().unwrap().selected_batch.unwrap().batch_id, 41);
}

#[tokio::test]
async fn clear_forgets_everything() {
    let store = Arc::new(MemorySessionStore::seeded(SessionContext {
        user: Some(user()),
        selected_batch: Some(batch(1)),
    }));
    let service =
        SessionService::load(store.clone(), Arc::new(StampingUserApi::default())).await.unwrap();

    service.clear().await.unwrap();

    assert!(service.context().await.is_empty());
    assert!(store.saved().unwrap().is_empty());
    assert!(service.watch_selected_batch().borrow().is_none());
}

#[tokio::test]
async fn failed_save_keeps_previous_batch_everywhere() {
    let store = Arc::new(MemorySessionStore::read_only(SessionContext {
        user: None,
        selected_batch: Some(batch(3)),
    }));
    let service =
        SessionService::load(store.clone(), Arc::new(StampingUserApi::default())).await.unwrap();
    let watcher = service.watch_selected_batch();

    let result = service.put_selected_batch(batch(7)).await;

    assert!(matches!(result, Err(CaliberError::Storage(_))));
    assert_eq!(service.selected_batch().await.map(|b| b.batch_id), Some(3));
    assert!(!watcher.has_changed().unwrap());
    assert_eq!(watcher.borrow().as_ref().map(|b| b.batch_id), Some(3));
    assert_eq!(store.saved().unwrap().selected_batch.map(|b| b.batch_id), Some(3));
}

#[tokio::test]
async fn failed_save_does_not_keep_user() {
    let store = Arc::new(MemorySessionStore::read_only(SessionContext::default()));
    let service =
        SessionService::load(store.clone(), Arc::new(StampingUserApi::default())).await.unwrap();

    let result = service.put_user_in_session(&user()).await;

    assert!(matches!(result, Err(CaliberError::Storage(_))));
    assert!(service.user().await.is_none());
    assert_eq!(store.save_count(), 1);
}

#[tokio::test]
async fn failed_clear_keeps_session() {
    let store = Arc::new(MemorySessionStore::read_only(SessionContext {
        user: Some(user()),
        selected_batch: Some(batch(5)),
    }));
    let service =
        SessionService::load(store.clone(), Arc::new(StampingUserApi::default())).await.unwrap();

    assert!(service.clear().await.is_err());

    assert!(service.user().await.is_some());
    assert_eq!(service.watch_selected_batch().borrow().as_ref().map(|b| b.batch_id), Some(5));
}
