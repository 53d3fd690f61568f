use super::*;

fn seeded() -> QueryCache {
    let mut cache = QueryCache::new(1_000.0, 10_000.0);
    cache.insert("/api/patients?page=1", serde_json::json!({"total": 3}), 0.0);
    cache.insert("/api/patients/p1", serde_json::json!({"id": "p1"}), 0.0);
    cache.insert("/api/patients/p1/exams", serde_json::json!([]), 0.0);
    cache.insert("/api/patients/p10", serde_json::json!({"id": "p10"}), 0.0);
    cache.insert("/api/users/me", serde_json::json!({"id": "u1"}), 0.0);
    cache
}

#[test]
fn fresh_entries_are_returned() {
    let cache = seeded();
    assert_eq!(cache.get("/api/patients/p1", 999.0), Some(&serde_json::json!({"id": "p1"})));
}

#[test]
fn stale_entries_are_hidden() {
    let cache = seeded();
    assert!(cache.get("/api/patients/p1", 1_000.0).is_none());
    assert_eq!(cache.len(), 5);
}

#[test]
fn insert_purges_entries_past_gc_window() {
    let mut cache = seeded();
    cache.insert("/api/patients/p2", serde_json::json!({"id": "p2"}), 10_500.0);
    assert_eq!(cache.len(), 1);
    assert!(cache.get("/api/patients/p2", 10_600.0).is_some());
}

#[test]
fn invalidate_prefix_respects_path_boundaries() {
    let mut cache = seeded();
    let removed = cache.invalidate_prefix("/api/patients/p1");
    assert_eq!(removed, 2);
    assert!(cache.get("/api/patients/p10", 1.0).is_some());
    assert!(cache.get("/api/patients/p1/exams", 1.0).is_none());
}

#[test]
fn invalidate_patients_drops_feed_pages_and_details() {
    let mut cache = seeded();
    assert_eq!(cache.invalidate_prefix("/api/patients"), 4);
    assert_eq!(cache.len(), 1);
    assert!(cache.get("/api/users/me", 1.0).is_some());
}

#[test]
fn invalidate_and_clear() {
    let mut cache = seeded();
    cache.invalidate("/api/users/me");
    assert!(cache.get("/api/users/me", 1.0).is_none());
    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn gc_window_never_shorter_than_stale_window() {
    let mut cache = QueryCache::new(5_000.0, 1_000.0);
    cache.insert("a", serde_json::json!(1), 0.0);
    cache.insert("b", serde_json::json!(2), 2_000.0);
    assert!(cache.get("a", 2_000.0).is_some());
}

// =============================================================================
// cached
// =============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::util::clock::now_ms;

fn counted(calls: &Rc<Cell<u32>>, result: Result<u32, ApiError>) -> impl FnOnce() -> std::future::Ready<Result<u32, ApiError>> {
    let calls = Rc::clone(calls);
    move || {
        calls.set(calls.get() + 1);
        std::future::ready(result)
    }
}

#[tokio::test]
async fn cached_fresh_hit_skips_fetch() {
    let owner = Owner::new();
    owner.set();
    let cache = RwSignal::new(QueryCache::default());
    cache.update(|c| c.insert("/api/patients/p1/weight", serde_json::json!(12), now_ms()));
    let calls = Rc::new(Cell::new(0));

    let value = cached(cache, "/api/patients/p1/weight".into(), counted(&calls, Ok(99))).await.unwrap();

    assert_eq!(value, 12);
    assert_eq!(calls.get(), 0);
}

#[tokio::test]
async fn cached_stale_entry_is_refetched_and_replaced() {
    let owner = Owner::new();
    owner.set();
    let cache = RwSignal::new(QueryCache::default());
    let key = "/api/patients/p1/weight";
    cache.update(|c| c.insert(key, serde_json::json!(12), now_ms() - DEFAULT_STALE_MS - 1_000.0));
    let calls = Rc::new(Cell::new(0));

    let value = cached(cache, key.into(), counted(&calls, Ok(14))).await.unwrap();

    assert_eq!(value, 14);
    assert_eq!(calls.get(), 1);
    assert_eq!(cache.with_untracked(|c| c.get(key, now_ms()).cloned()), Some(serde_json::json!(14)));
}

#[tokio::test]
async fn cached_value_of_wrong_shape_falls_through_to_fetch() {
    let owner = Owner::new();
    owner.set();
    let cache = RwSignal::new(QueryCache::default());
    let key = "/api/patients/p1/weight";
    cache.update(|c| c.insert(key, serde_json::json!({"kg": "twelve"}), now_ms()));
    let calls = Rc::new(Cell::new(0));

    let value = cached(cache, key.into(), counted(&calls, Ok(12))).await.unwrap();

    assert_eq!(value, 12);
    assert_eq!(calls.get(), 1);
    assert_eq!(cache.with_untracked(|c| c.get(key, now_ms()).cloned()), Some(serde_json::json!(12)));
}

#[tokio::test]
async fn cached_errors_are_not_stored() {
    let owner = Owner::new();
    owner.set();
    let cache = RwSignal::new(QueryCache::default());
    let calls = Rc::new(Cell::new(0));

    let err = cached(cache, "/api/patients/nope".into(), counted(&calls, Err(ApiError::NotFound)))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
    assert!(cache.with_untracked(QueryCache::is_empty));

    let value = cached(cache, "/api/patients/nope".into(), counted(&calls, Ok(1))).await.unwrap();
    assert_eq!(value, 1);
    assert_eq!(calls.get(), 2);
}
