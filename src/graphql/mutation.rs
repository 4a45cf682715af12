// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mutation root.

use super::types::{PostInputData, PostObject, UserInputData, UserObject};
use super::{auth, gql, state};
use async_graphql::{Context, Object, ID};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        user_input: Option<UserInputData>,
    ) -> async_graphql::Result<UserObject> {
        let state = state(ctx)?;
        let input = user_input.unwrap_or_default().into();
        gql(state.accounts.register(input).await).map(Into::into)
    }

    async fn create_post(
        &self,
        ctx: &Context<'_>,
        post_input: Option<PostInputData>,
    ) -> async_graphql::Result<PostObject> {
        let state = state(ctx)?;
        let input = post_input.unwrap_or_default().into();
        gql(state.posts.create(&auth(ctx), input).await).map(Into::into)
    }

    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: ID,
        post_input: PostInputData,
    ) -> async_graphql::Result<PostObject> {
        let state = state(ctx)?;
        gql(state.posts.update(&auth(ctx), &id, post_input.into()).await).map(Into::into)
    }

    async fn update_status(
        &self,
        ctx: &Context<'_>,
        status: String,
    ) -> async_graphql::Result<UserObject> {
        let state = state(ctx)?;
        gql(state.accounts.update_status(&auth(ctx), status).await).map(Into::into)
    }

    async fn delete_post(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<bool> {
        let state = state(ctx)?;
        gql(state.posts.delete(&auth(ctx), &id).await)
    }
}
