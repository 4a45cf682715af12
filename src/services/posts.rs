// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Post CRUD with authentication and ownership checks.

use crate::db::DocumentStore;
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthContext;
use crate::models::Post;
use crate::services::images::ImageStore;
use crate::services::validation::{self, PostInput};
use std::sync::Arc;

/// Fixed page size for post listings.
pub const POSTS_PER_PAGE: u32 = 2;

/// Sentinel image URL meaning "keep the stored image".
const KEEP_IMAGE: &str = "undefined";

/// One page of posts plus the overall count.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub total_posts: u64,
}

/// Post operations over the document store.
#[derive(Clone)]
pub struct PostService {
    db: Arc<dyn DocumentStore>,
    images: ImageStore,
}

impl PostService {
    pub fn new(db: Arc<dyn DocumentStore>, images: ImageStore) -> Self {
        Self { db, images }
    }

    pub async fn create(&self, auth: &AuthContext, input: PostInput) -> Result<Post> {
        let identity = auth.require()?;
        validation::check(&input)?;

        let mut user = self
            .db
            .get_user(&identity.user_id)
            .await?
            .ok_or_else(AppError::user_not_found)?;

        let post = Post::new(input.title, input.content, input.image_url, user.id.clone());
        self.db.upsert_post(&post).await?;

        user.posts.push(post.id.clone());
        self.db.upsert_user(&user).await?;

        tracing::info!(user_id = %user.id, post_id = %post.id, "Post created");
        Ok(post)
    }

    /// Newest-first page of all posts. Pages start at 1; anything lower
    /// is treated as the first page.
    pub async fn list(&self, auth: &AuthContext, page: Option<i32>) -> Result<PostPage> {
        auth.require()?;

        let page = page.filter(|p| *p >= 1).unwrap_or(1) as u32;
        // i32::MAX pages of two still fit in u32.
        let offset = (page - 1) * POSTS_PER_PAGE;

        let total_posts = self.db.count_posts().await?;
        let posts = self.db.list_posts(offset, POSTS_PER_PAGE).await?;

        tracing::debug!(page, returned = posts.len(), total_posts, "Listed posts");
        Ok(PostPage { posts, total_posts })
    }

    pub async fn get(&self, auth: &AuthContext, post_id: &str) -> Result<Post> {
        auth.require()?;
        self.db
            .get_post(post_id)
            .await?
            .ok_or_else(AppError::no_such_post)
    }

    /// Replace title, content and (unless the sentinel is sent) image URL.
    pub async fn update(&self, auth: &AuthContext, post_id: &str, input: PostInput) -> Result<Post> {
        let identity = auth.require()?;
        validation::check(&input)?;

        let mut post = self
            .db
            .get_post(post_id)
            .await?
            .ok_or_else(AppError::post_not_found)?;
        identity.require_owner(&post.creator)?;

        post.title = input.title;
        if input.image_url != KEEP_IMAGE {
            post.image_url = input.image_url;
        }
        post.content = input.content;
        post.updated_at = chrono::Utc::now();
        self.db.upsert_post(&post).await?;

        tracing::info!(post_id = %post.id, "Post updated");
        Ok(post)
    }

    /// Remove a post, its image and the creator's back-reference.
    pub async fn delete(&self, auth: &AuthContext, post_id: &str) -> Result<bool> {
        let identity = auth.require()?;

        let post = self
            .db
            .get_post(post_id)
            .await?
            .ok_or_else(AppError::post_not_found)?;
        identity.require_owner(&post.creator)?;

        // Not awaited; a failed removal is only logged.
        self.images.clear_image(&post.image_url);

        self.db.delete_post(&post.id).await?;

        if let Some(mut user) = self.db.get_user(&identity.user_id).await? {
            user.posts.retain(|id| id != &post.id);
            self.db.upsert_user(&user).await?;
        } else {
            tracing::warn!(user_id = %identity.user_id, "Creator missing while deleting post");
        }

        tracing::info!(post_id = %post.id, "Post deleted");
        Ok(true)
    }
}
