// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User model for storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status assigned to freshly registered accounts.
pub const DEFAULT_STATUS: &str = "I am new!";

/// User account stored in the document store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Generated ID (also used as document ID)
    pub id: String,
    pub email: String,
    pub name: String,
    /// Argon2 PHC string; never the plaintext
    pub password_hash: String,
    pub status: String,
    /// IDs of posts this user created, oldest first
    #[serde(default)]
    pub posts: Vec<String>,
    /// The only refresh token currently accepted for this user
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(with = "firestore::serialize_as_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "firestore::serialize_as_timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a new account with a fresh ID and the default status.
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email,
            name,
            password_hash,
            status: DEFAULT_STATUS.to_string(),
            posts: Vec::new(),
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }
}
