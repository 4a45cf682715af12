// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GraphQL schema: the client-facing contract over the services.

pub mod mutation;
pub mod query;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use crate::error::AppError;
use crate::middleware::auth::AuthContext;
use crate::AppState;
use async_graphql::{Context, EmptySubscription, ErrorExtensions, Schema};
use std::sync::Arc;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema. The per-request [`AuthContext`] is attached
/// by the HTTP handler.
pub fn build_schema(state: Arc<AppState>) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

fn state<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<AppState>> {
    ctx.data::<Arc<AppState>>()
}

/// Caller identity for this request; anonymous when none was attached.
fn auth(ctx: &Context<'_>) -> AuthContext {
    ctx.data_opt::<AuthContext>().cloned().unwrap_or_default()
}

/// Convert a service result into a GraphQL result with error extensions.
fn gql<T>(result: Result<T, AppError>) -> async_graphql::Result<T> {
    result.map_err(|e| e.extend())
}
