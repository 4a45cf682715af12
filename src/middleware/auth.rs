// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Access-token middleware and the per-operation authorization gate.
//!
//! The middleware never rejects a request. It attaches an [`AuthContext`]
//! and each resolver decides whether anonymous callers are acceptable.

use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Identity claims carried by a verified access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub email: String,
}

/// Best-effort caller identity attached to every request.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    identity: Option<Identity>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    pub fn authenticated(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    pub fn is_auth(&self) -> bool {
        self.identity.is_some()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Authentication check: the caller must present a valid access token.
    pub fn require(&self) -> Result<&Identity, AppError> {
        self.identity.as_ref().ok_or(AppError::Unauthenticated)
    }
}

impl Identity {
    /// Ownership check: only the creator may mutate a resource.
    pub fn require_owner(&self, creator_id: &str) -> Result<(), AppError> {
        if self.user_id == creator_id {
            Ok(())
        } else {
            tracing::warn!(
                user_id = %self.user_id,
                owner_id = %creator_id,
                "Rejected mutation by non-owner"
            );
            Err(AppError::Forbidden)
        }
    }
}

/// Middleware that verifies the bearer access token, if any, and stores the
/// resulting [`AuthContext`] in the request extensions.
pub async fn resolve_identity(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let auth = state.tokens.verify_access(auth_header);
    request.extensions_mut().insert(auth);

    next.run(request).await
}
