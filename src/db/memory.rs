// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process document store.

use crate::db::DocumentStore;
use crate::error::AppError;
use crate::models::{Post, User};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Document store kept in concurrent maps. Clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryDb {
    users: Arc<DashMap<String, User>>,
    posts: Arc<DashMap<String, Post>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    fn find_user(&self, pred: impl Fn(&User) -> bool) -> Option<User> {
        self.users
            .iter()
            .find(|entry| pred(entry.value()))
            .map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl DocumentStore for MemoryDb {
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.get(user_id).map(|u| u.clone()))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.find_user(|u| u.email == email))
    }

    async fn find_user_by_refresh_token(&self, token: &str) -> Result<Option<User>, AppError> {
        Ok(self.find_user(|u| u.refresh_token.as_deref() == Some(token)))
    }

    async fn upsert_user(&self, user: &User) -> Result<(), AppError> {
        self.users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn get_post(&self, post_id: &str) -> Result<Option<Post>, AppError> {
        Ok(self.posts.get(post_id).map(|p| p.clone()))
    }

    async fn upsert_post(&self, post: &Post) -> Result<(), AppError> {
        self.posts.insert(post.id.clone(), post.clone());
        Ok(())
    }

    async fn delete_post(&self, post_id: &str) -> Result<(), AppError> {
        self.posts.remove(post_id);
        Ok(())
    }

    async fn count_posts(&self) -> Result<u64, AppError> {
        Ok(self.posts.len() as u64)
    }

    async fn list_posts(&self, offset: u32, limit: u32) -> Result<Vec<Post>, AppError> {
        let mut posts: Vec<Post> = self.posts.iter().map(|p| p.value().clone()).collect();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(posts
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn post_at(id: &str, minutes: i64) -> Post {
        let at = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap() + Duration::minutes(minutes);
        Post {
            id: id.to_string(),
            title: format!("Title {}", id),
            content: "Some content".to_string(),
            image_url: "images/a.png".to_string(),
            creator: "u1".to_string(),
            created_at: at,
            updated_at: at,
        }
    }

    #[tokio::test]
    async fn test_list_posts_newest_first_with_offset() {
        let db = MemoryDb::new();
        for (i, id) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            db.upsert_post(&post_at(id, i as i64)).await.unwrap();
        }

        let page: Vec<String> = db
            .list_posts(2, 2)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(page, vec!["c", "b"]);
        assert_eq!(db.count_posts().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_refresh_token_lookup_is_exact() {
        let db = MemoryDb::new();
        let mut user = User::new("a@b.com".into(), "A".into(), "hash".into());
        user.refresh_token = Some("current".into());
        db.upsert_user(&user).await.unwrap();

        assert!(db
            .find_user_by_refresh_token("current")
            .await
            .unwrap()
            .is_some());
        assert!(db
            .find_user_by_refresh_token("curren")
            .await
            .unwrap()
            .is_none());
    }
}
