// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GraphQL endpoint.

use crate::graphql::AppSchema;
use crate::middleware::auth::AuthContext;
use crate::AppState;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{routing::post, Extension, Router};
use std::sync::Arc;

/// GraphQL routes. Identity resolution is applied in routes/mod.rs.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/graphql", post(graphql_handler))
}

/// Execute one GraphQL request with the caller's identity attached.
async fn graphql_handler(
    Extension(schema): Extension<AppSchema>,
    Extension(auth): Extension<AuthContext>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    tracing::debug!(is_auth = auth.is_auth(), "Executing GraphQL request");
    schema.execute(request.into_inner().data(auth)).await.into()
}
