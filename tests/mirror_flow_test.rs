mod common;

use std::sync::Arc;

use admin_mirror::services::{MirrorOutcome, MirrorService};
use admin_mirror::types::internal::snapshot::UserSnapshot;
use admin_mirror::AppData;
use serde_json::json;

async fn setup() -> (Arc<AppData>, MirrorService) {
    let app_data = common::setup_app_data().await;
    let service = MirrorService::new(app_data.clone());
    (app_data, service)
}

fn snapshot(value: serde_json::Value) -> UserSnapshot {
    UserSnapshot::from_value(&value)
}

#[tokio::test]
async fn promotion_mirrors_projected_fields() {
    // Concrete scenario from the sync contract: user u1 becomes admin
    let (app_data, service) = setup().await;

    let previous = snapshot(json!({"isAdmin": false, "email": "a@x.com"}));
    let new = snapshot(json!({
        "isAdmin": true,
        "email": "a@x.com",
        "school_id": "S1",
        "full_name": "A B",
        "is_mentor": false
    }));

    let outcome = service.apply_user_change("u1", &previous, &new).await.unwrap();
    assert_eq!(outcome, MirrorOutcome::Upserted);

    let row = app_data.admin_store.find_by_id("u1").await.unwrap().unwrap();
    assert_eq!(row.email.as_deref(), Some("a@x.com"));
    assert_eq!(row.school_id.as_deref(), Some("S1"));
    assert_eq!(row.school_name, None);
    assert_eq!(row.full_name.as_deref(), Some("A B"));
    assert_eq!(row.is_mentor, Some(false));
}

#[tokio::test]
async fn demotion_removes_the_admin_record() {
    // Concrete scenario: user u2 loses the admin flag
    let (app_data, service) = setup().await;

    let grant_before = snapshot(json!({"isAdmin": false}));
    let grant_after = snapshot(json!({"isAdmin": true, "email": "b@x.com"}));
    service.apply_user_change("u2", &grant_before, &grant_after).await.unwrap();
    assert!(app_data.admin_store.find_by_id("u2").await.unwrap().is_some());

    let previous = snapshot(json!({"isAdmin": true, "email": "b@x.com"}));
    let new = snapshot(json!({"isAdmin": false, "email": "b@x.com"}));

    let outcome = service.apply_user_change("u2", &previous, &new).await.unwrap();
    assert_eq!(outcome, MirrorOutcome::Deleted);
    assert!(app_data.admin_store.find_by_id("u2").await.unwrap().is_none());
}

#[tokio::test]
async fn profile_change_while_admin_updates_the_record() {
    let (app_data, service) = setup().await;

    let grant_before = snapshot(json!({"isAdmin": false}));
    let grant_after = snapshot(json!({
        "isAdmin": true,
        "email": "c@x.com",
        "school_name": "Northside"
    }));
    service.apply_user_change("u3", &grant_before, &grant_after).await.unwrap();

    let previous = grant_after.clone();
    let new = snapshot(json!({
        "isAdmin": true,
        "email": "c@x.com",
        "school_name": "Southside"
    }));

    let outcome = service.apply_user_change("u3", &previous, &new).await.unwrap();
    assert_eq!(outcome, MirrorOutcome::Upserted);

    let row = app_data.admin_store.find_by_id("u3").await.unwrap().unwrap();
    assert_eq!(row.school_name.as_deref(), Some("Southside"));
}

#[tokio::test]
async fn non_admin_changes_never_touch_the_collection() {
    let (app_data, service) = setup().await;

    let previous = snapshot(json!({"isAdmin": false, "email": "d@x.com"}));
    let new = snapshot(json!({"isAdmin": 0, "email": "changed@x.com", "full_name": "D"}));

    let outcome = service.apply_user_change("u4", &previous, &new).await.unwrap();
    assert_eq!(outcome, MirrorOutcome::Skipped);
    assert!(app_data.admin_store.find_by_id("u4").await.unwrap().is_none());
}

#[tokio::test]
async fn unchanged_admin_with_unchanged_projection_is_skipped() {
    let (app_data, service) = setup().await;

    let grant_before = snapshot(json!({"isAdmin": false}));
    let grant_after = snapshot(json!({"isAdmin": true, "email": "e@x.com"}));
    service.apply_user_change("u5", &grant_before, &grant_after).await.unwrap();
    let before_row = app_data.admin_store.find_by_id("u5").await.unwrap().unwrap();

    // Only fields outside the projection change
    let previous = snapshot(json!({"isAdmin": true, "email": "e@x.com", "last_seen": 10}));
    let new = snapshot(json!({"isAdmin": true, "email": "e@x.com", "last_seen": 99}));

    let outcome = service.apply_user_change("u5", &previous, &new).await.unwrap();
    assert_eq!(outcome, MirrorOutcome::Skipped);

    let after_row = app_data.admin_store.find_by_id("u5").await.unwrap().unwrap();
    assert_eq!(before_row, after_row);
}

#[tokio::test]
async fn redelivered_event_converges_to_the_same_state() {
    // At-least-once delivery: the same (previous, new) pair may arrive twice
    let (app_data, service) = setup().await;

    let previous = snapshot(json!({"isAdmin": false}));
    let new = snapshot(json!({"isAdmin": true, "email": "f@x.com", "is_mentor": true}));

    service.apply_user_change("u6", &previous, &new).await.unwrap();
    let first = app_data.admin_store.find_by_id("u6").await.unwrap().unwrap();

    service.apply_user_change("u6", &previous, &new).await.unwrap();
    let second = app_data.admin_store.find_by_id("u6").await.unwrap().unwrap();

    assert_eq!(first.email, second.email);
    assert_eq!(first.is_mentor, second.is_mentor);
    assert_eq!(first.created_at, second.created_at);

    // Redelivered demotions converge too
    let demote_prev = snapshot(json!({"isAdmin": true, "email": "f@x.com"}));
    let demote_new = snapshot(json!({"isAdmin": false, "email": "f@x.com"}));
    service.apply_user_change("u6", &demote_prev, &demote_new).await.unwrap();
    service.apply_user_change("u6", &demote_prev, &demote_new).await.unwrap();
    assert!(app_data.admin_store.find_by_id("u6").await.unwrap().is_none());
}

#[tokio::test]
async fn truthy_string_flag_counts_as_admin() {
    let (app_data, service) = setup().await;

    let previous = snapshot(json!({"isAdmin": ""}));
    let new = snapshot(json!({"isAdmin": "yes", "email": "g@x.com"}));

    let outcome = service.apply_user_change("u7", &previous, &new).await.unwrap();
    assert_eq!(outcome, MirrorOutcome::Upserted);
    assert!(app_data.admin_store.find_by_id("u7").await.unwrap().is_some());
}
