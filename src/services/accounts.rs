// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account lifecycle: registration, login, refresh-token rotation and the
//! user status string.

use crate::db::DocumentStore;
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthContext;
use crate::models::User;
use crate::services::password::{hash_password, verify_password};
use crate::services::tokens::{TokenService, ACCESS_TOKEN_EXPIRES_IN};
use crate::services::validation::{self, UserInput};
use std::sync::Arc;

/// Credentials returned by login and relogin.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub expires_in: String,
    pub refresh_token: String,
    pub user_id: String,
}

/// Account operations over the document store.
#[derive(Clone)]
pub struct AccountService {
    db: Arc<dyn DocumentStore>,
    tokens: TokenService,
}

impl AccountService {
    pub fn new(db: Arc<dyn DocumentStore>, tokens: TokenService) -> Self {
        Self { db, tokens }
    }

    /// Create an account. All input rules are checked before the email
    /// uniqueness lookup.
    pub async fn register(&self, input: UserInput) -> Result<User> {
        validation::check(&input)?;

        if self.db.find_user_by_email(&input.email).await?.is_some() {
            return Err(AppError::Conflict("User already exists!".to_string()));
        }

        let password_hash = hash_password(input.password).await?;
        let user = User::new(input.email, input.name, password_hash);
        self.db.upsert_user(&user).await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Check credentials and start a session. The new refresh token replaces
    /// whatever was stored before.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let user = self
            .db
            .find_user_by_email(email)
            .await?
            .ok_or_else(AppError::account_not_found)?;

        if !verify_password(password.to_string(), user.password_hash.clone()).await? {
            tracing::info!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AppError::InvalidCredential);
        }

        let session = self.start_session(user).await?;
        tracing::info!(user_id = %session.user_id, "User logged in");
        Ok(session)
    }

    /// Exchange the current refresh token for a new token pair, rotating the
    /// stored refresh token.
    ///
    /// Any token that is not the one currently stored is rejected as
    /// unauthenticated. A stored token must still verify and name its owner.
    pub async fn relogin(&self, refresh_token: &str) -> Result<Session> {
        let user = self
            .db
            .find_user_by_refresh_token(refresh_token)
            .await?
            .ok_or(AppError::Unauthenticated)?;

        let claimed_user_id = self.tokens.verify_refresh(refresh_token)?;
        if user.id != claimed_user_id {
            tracing::warn!(
                user_id = %user.id,
                claimed_user_id = %claimed_user_id,
                "Refresh token subject does not match its owner"
            );
            return Err(AppError::Unauthenticated);
        }

        let session = self.start_session(user).await?;
        tracing::info!(user_id = %session.user_id, "Refresh token rotated");
        Ok(session)
    }

    async fn start_session(&self, mut user: User) -> Result<Session> {
        let token = self.tokens.issue_access_token(&user.id, &user.email)?;
        let refresh_token = self.tokens.issue_refresh_token(&user.id, &user.email)?;

        user.refresh_token = Some(refresh_token.clone());
        user.updated_at = chrono::Utc::now();
        self.db.upsert_user(&user).await?;

        Ok(Session {
            token,
            expires_in: ACCESS_TOKEN_EXPIRES_IN.to_string(),
            refresh_token,
            user_id: user.id,
        })
    }

    /// The caller's own account.
    pub async fn status(&self, auth: &AuthContext) -> Result<User> {
        let identity = auth.require()?;
        self.db
            .get_user(&identity.user_id)
            .await?
            .ok_or_else(AppError::user_not_found)
    }

    /// Replace the caller's status string.
    pub async fn update_status(&self, auth: &AuthContext, status: String) -> Result<User> {
        let identity = auth.require()?;
        let mut user = self
            .db
            .get_user(&identity.user_id)
            .await?
            .ok_or_else(AppError::user_not_found)?;

        user.status = status;
        user.updated_at = chrono::Utc::now();
        self.db.upsert_user(&user).await?;

        tracing::debug!(user_id = %user.id, "Status updated");
        Ok(user)
    }
}
