//! Integration tests for the observable project store.

use std::sync::Arc;
use std::time::Duration;

use folio_catalog::{LoadOptions, ProjectStore, LOAD_FAILED_MESSAGE};
use folio_core::Error;

use crate::common::{portfolio, BrokenDocumentSource, SlowSource, SwitchableSource};

#[tokio::test]
async fn test_failed_reload_keeps_previous_catalog() {
    let source = SwitchableSource::new(portfolio());
    let store = ProjectStore::from_shared(source.clone(), LoadOptions::default());

    store.load_projects().await.expect("first load should succeed");
    let before = store.catalog();
    assert_eq!(before.len(), 3);

    source.set_failing(true);
    let err = store.load_projects().await.unwrap_err();
    assert!(matches!(err, Error::SourceUnavailable { .. }));

    let state = store.state();
    assert!(Arc::ptr_eq(&before, &state.catalog));
    assert_eq!(state.error.as_deref(), Some(LOAD_FAILED_MESSAGE));
    assert!(!state.loading);

    source.set_failing(false);
    store.load_projects().await.expect("recovery load should succeed");
    assert!(store.error().is_none());
    assert_eq!(store.catalog().len(), 3);
}

#[tokio::test]
async fn test_fetch_failure_on_fresh_store_leaves_it_empty() {
    let store = ProjectStore::new(BrokenDocumentSource::new(portfolio(), "weather"));

    assert!(store.load_projects().await.is_err());

    let state = store.state();
    assert!(state.projects().is_empty());
    assert_eq!(state.error.as_deref(), Some(LOAD_FAILED_MESSAGE));
    assert!(!state.loading);
}

#[tokio::test]
async fn test_wait_idle_observes_concurrent_load() {
    let source = SlowSource::new(portfolio(), Duration::from_millis(50));
    let store = ProjectStore::from_shared(source, LoadOptions::default());
    let mut rx = store.subscribe();

    let loader = store.clone();
    let handle = tokio::spawn(async move { loader.load_projects().await });

    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().loading);

    let state = store
        .wait_idle(Duration::from_secs(5))
        .await
        .expect("load should finish in time");
    assert!(!state.loading);
    assert_eq!(state.projects().len(), 3);

    let stats = handle.await.unwrap().unwrap();
    assert_eq!(stats.loaded, 3);
}

#[tokio::test]
async fn test_wait_idle_times_out() {
    let source = SlowSource::new(portfolio(), Duration::from_millis(300));
    let store = ProjectStore::from_shared(source, LoadOptions::default().without_timeout());
    let mut rx = store.subscribe();

    let loader = store.clone();
    let handle = tokio::spawn(async move { loader.load_projects().await });
    rx.changed().await.unwrap();

    let err = store
        .wait_idle(Duration::from_millis(10))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout { .. }));

    handle.await.unwrap().unwrap();
    assert!(!store.is_loading());
}

#[tokio::test]
async fn test_cancelled_load_clears_loading_flag() {
    let source = SlowSource::new(portfolio(), Duration::from_secs(30));
    let store = ProjectStore::from_shared(source, LoadOptions::default().without_timeout());
    let mut rx = store.subscribe();

    let loader = store.clone();
    let handle = tokio::spawn(async move { loader.load_projects().await });
    rx.changed().await.unwrap();
    assert!(store.is_loading());

    handle.abort();
    assert!(handle.await.unwrap_err().is_cancelled());

    assert!(!store.is_loading());
    assert!(store.error().is_none());
    assert!(store.catalog().is_empty());
}

#[tokio::test]
async fn test_subscriber_sees_final_state() {
    let store = ProjectStore::new(portfolio());
    let mut rx = store.subscribe();

    store.load_projects().await.unwrap();

    rx.changed().await.unwrap();
    let state = rx.borrow_and_update().clone();
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.projects()[0].id, "portfolio");
}
