// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Blog post model for storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post stored in the document store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Generated ID (also used as document ID)
    pub id: String,
    pub title: String,
    pub content: String,
    /// Stored image path, relative to the image root
    pub image_url: String,
    /// ID of the owning user
    pub creator: String,
    #[serde(with = "firestore::serialize_as_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "firestore::serialize_as_timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(title: String, content: String, image_url: String, creator: String) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            content,
            image_url,
            creator,
            created_at: now,
            updated_at: now,
        }
    }
}
