// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore integration tests.
//!
//! These tests require the Firestore emulator to be running and
//! FIRESTORE_EMULATOR_HOST to point at it. They are skipped otherwise.
//!
//! The emulator keeps state between tests, so every test uses fresh IDs.

use chrono::{Duration, TimeZone, Utc};
use postboard::db::DocumentStore;
use postboard::models::{Post, User};

mod common;
use common::test_db;

fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.com", prefix, uuid::Uuid::new_v4())
}

// ═══════════════════════════════════════════════════════════════════════════
// USER TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_user_round_trip() {
    require_emulator!();

    let db = test_db().await;
    let email = unique_email("roundtrip");
    let user = User::new(email.clone(), "Round Trip".to_string(), "hash".to_string());

    assert!(db.get_user(&user.id).await.unwrap().is_none());
    db.upsert_user(&user).await.unwrap();

    let fetched = db.get_user(&user.id).await.unwrap().expect("user stored");
    assert_eq!(fetched.email, email);
    assert_eq!(fetched.status, "I am new!");
    assert!(fetched.posts.is_empty());
    assert!(fetched.refresh_token.is_none());
    // Firestore timestamps keep microseconds.
    assert_eq!(
        fetched.created_at.timestamp_micros(),
        user.created_at.timestamp_micros()
    );

    let by_email = db.find_user_by_email(&email).await.unwrap().expect("found by email");
    assert_eq!(by_email.id, user.id);
}

#[tokio::test]
async fn test_refresh_token_lookup_follows_rotation() {
    require_emulator!();

    let db = test_db().await;
    let mut user = User::new(unique_email("rotate"), "Rotator".to_string(), "hash".to_string());
    let first = format!("first-{}", uuid::Uuid::new_v4());
    let second = format!("second-{}", uuid::Uuid::new_v4());

    user.refresh_token = Some(first.clone());
    db.upsert_user(&user).await.unwrap();
    let found = db.find_user_by_refresh_token(&first).await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(user.id.clone()));

    user.refresh_token = Some(second.clone());
    db.upsert_user(&user).await.unwrap();
    assert!(db.find_user_by_refresh_token(&first).await.unwrap().is_none());
    assert!(db.find_user_by_refresh_token(&second).await.unwrap().is_some());
}

// ═══════════════════════════════════════════════════════════════════════════
// POST TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_post_upsert_and_delete() {
    require_emulator!();

    let db = test_db().await;
    let post = Post::new(
        "Emulator post".to_string(),
        "Stored in the emulator".to_string(),
        "images/emulator.png".to_string(),
        "creator-1".to_string(),
    );

    db.upsert_post(&post).await.unwrap();
    let fetched = db.get_post(&post.id).await.unwrap().expect("post stored");
    assert_eq!(fetched.title, "Emulator post");
    assert_eq!(fetched.creator, "creator-1");

    db.delete_post(&post.id).await.unwrap();
    assert!(db.get_post(&post.id).await.unwrap().is_none());

    // Deleting twice is not an error.
    db.delete_post(&post.id).await.unwrap();
}

#[tokio::test]
async fn test_post_listing_is_newest_first() {
    require_emulator!();

    let db = test_db().await;

    // Far in the future so these sort ahead of anything else in the emulator.
    let base = Utc.with_ymd_and_hms(2999, 1, 1, 0, 0, 0).unwrap();
    let mut ids = Vec::new();
    for i in 0..3 {
        let mut post = Post::new(
            format!("Listing {}", i),
            "Body".to_string(),
            "images/list.png".to_string(),
            "creator-2".to_string(),
        );
        post.created_at = base + Duration::seconds(i);
        post.updated_at = post.created_at;
        db.upsert_post(&post).await.unwrap();
        ids.push(post.id);
    }

    // Other tests write to the same collection concurrently.
    assert!(db.count_posts().await.unwrap() >= 3);

    let page = db.list_posts(1, 2).await.unwrap();
    let listed: Vec<&str> = page.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(listed, vec![ids[1].as_str(), ids[0].as_str()]);

    for id in &ids {
        db.delete_post(id).await.unwrap();
    }
}
