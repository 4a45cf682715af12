// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Query root.

use super::types::{AuthData, PostData, PostObject, UserObject};
use super::{auth, gql, state};
use async_graphql::{Context, Object, ID};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Exchange email and password for an access/refresh token pair.
    async fn login(
        &self,
        ctx: &Context<'_>,
        email: String,
        password: String,
    ) -> async_graphql::Result<AuthData> {
        let state = state(ctx)?;
        gql(state.accounts.login(&email, &password).await).map(Into::into)
    }

    /// Exchange the current refresh token for a new token pair.
    async fn relogin(
        &self,
        ctx: &Context<'_>,
        refresh_token: String,
    ) -> async_graphql::Result<AuthData> {
        let state = state(ctx)?;
        gql(state.accounts.relogin(&refresh_token).await).map(Into::into)
    }

    async fn posts(&self, ctx: &Context<'_>, page: Option<i32>) -> async_graphql::Result<PostData> {
        let state = state(ctx)?;
        gql(state.posts.list(&auth(ctx), page).await).map(Into::into)
    }

    async fn single_post(
        &self,
        ctx: &Context<'_>,
        post_id: ID,
    ) -> async_graphql::Result<PostObject> {
        let state = state(ctx)?;
        gql(state.posts.get(&auth(ctx), &post_id).await).map(Into::into)
    }

    async fn get_status(&self, ctx: &Context<'_>) -> async_graphql::Result<UserObject> {
        let state = state(ctx)?;
        gql(state.accounts.status(&auth(ctx)).await).map(Into::into)
    }
}
