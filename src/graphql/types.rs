// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GraphQL object and input types.
//!
//! Type and field names follow the published wire contract (`_id`,
//! `postData`, `authData`, ...).

use crate::error::AppError;
use crate::models::{Post, User};
use crate::services::validation::{PostInput, UserInput};
use crate::services::{PostPage, Session};
use crate::time_utils::format_utc_iso8601;
use async_graphql::{ComplexObject, Context, InputObject, SimpleObject, ID};

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex, name = "Post")]
pub struct PostObject {
    #[graphql(name = "_id")]
    pub id: ID,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub created_at: String,
    pub updated_at: String,
    #[graphql(skip)]
    pub creator_id: String,
}

#[ComplexObject]
impl PostObject {
    /// The post's author, loaded from the document store.
    async fn creator(&self, ctx: &Context<'_>) -> async_graphql::Result<UserObject> {
        let state = super::state(ctx)?;
        let user = super::gql(state.db.get_user(&self.creator_id).await)?;
        super::gql(user.ok_or_else(AppError::user_not_found)).map(Into::into)
    }
}

impl From<Post> for PostObject {
    fn from(post: Post) -> Self {
        Self {
            id: ID(post.id),
            title: post.title,
            content: post.content,
            image_url: post.image_url,
            created_at: format_utc_iso8601(post.created_at),
            updated_at: format_utc_iso8601(post.updated_at),
            creator_id: post.creator,
        }
    }
}

/// Public view of an account. The password hash and refresh token are not
/// exposed.
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex, name = "User")]
pub struct UserObject {
    #[graphql(name = "_id")]
    pub id: ID,
    pub name: String,
    pub email: String,
    pub status: String,
    #[graphql(skip)]
    pub post_ids: Vec<String>,
}

#[ComplexObject]
impl UserObject {
    /// Posts created by this user. Dangling references are skipped.
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<PostObject>> {
        let state = super::state(ctx)?;
        let mut posts = Vec::with_capacity(self.post_ids.len());
        for post_id in &self.post_ids {
            if let Some(post) = super::gql(state.db.get_post(post_id).await)? {
                posts.push(post.into());
            }
        }
        Ok(posts)
    }
}

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self {
            id: ID(user.id),
            name: user.name,
            email: user.email,
            status: user.status,
            post_ids: user.posts,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "postData")]
pub struct PostData {
    pub posts: Vec<PostObject>,
    pub total_posts: i32,
}

impl From<PostPage> for PostData {
    fn from(page: PostPage) -> Self {
        Self {
            posts: page.posts.into_iter().map(PostObject::from).collect(),
            total_posts: i32::try_from(page.total_posts).unwrap_or(i32::MAX),
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "authData")]
pub struct AuthData {
    pub token: String,
    pub expires_in: String,
    pub refresh_token: String,
    pub user_id: String,
}

impl From<Session> for AuthData {
    fn from(session: Session) -> Self {
        Self {
            token: session.token,
            expires_in: session.expires_in,
            refresh_token: session.refresh_token,
            user_id: session.user_id,
        }
    }
}

/// Registration payload. A missing payload validates as empty fields.
#[derive(InputObject, Clone, Debug, Default)]
#[graphql(name = "userInputData")]
pub struct UserInputData {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl From<UserInputData> for UserInput {
    fn from(input: UserInputData) -> Self {
        Self {
            email: input.email,
            name: input.name,
            password: input.password,
        }
    }
}

#[derive(InputObject, Clone, Debug, Default)]
#[graphql(name = "postInputData")]
pub struct PostInputData {
    pub title: String,
    pub image_url: String,
    pub content: String,
}

impl From<PostInputData> for PostInput {
    fn from(input: PostInputData) -> Self {
        Self {
            title: input.title,
            image_url: input.image_url,
            content: input.content,
        }
    }
}
