// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Document store layer.
//!
//! Services only see [`DocumentStore`]; Firestore backs production and
//! [`MemoryDb`] backs local development and tests.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryDb;

use crate::error::AppError;
use crate::models::{Post, User};
use async_trait::async_trait;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const POSTS: &str = "posts";
}

/// Typed document operations the resolvers depend on.
///
/// Writes are whole-document upserts; there are no transactions, so the
/// last writer wins.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Find the user whose stored refresh token equals `token` exactly.
    async fn find_user_by_refresh_token(&self, token: &str) -> Result<Option<User>, AppError>;

    async fn upsert_user(&self, user: &User) -> Result<(), AppError>;

    async fn get_post(&self, post_id: &str) -> Result<Option<Post>, AppError>;

    async fn upsert_post(&self, post: &Post) -> Result<(), AppError>;

    async fn delete_post(&self, post_id: &str) -> Result<(), AppError>;

    async fn count_posts(&self) -> Result<u64, AppError>;

    /// Posts ordered newest first (`created_at` desc, then `id` desc).
    async fn list_posts(&self, offset: u32, limit: u32) -> Result<Vec<Post>, AppError>;
}
