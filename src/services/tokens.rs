// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Access and refresh token issuance and verification.
//!
//! Both token kinds are HS256 JWTs carrying the same identity claims but
//! signed with independent secrets. Access tokens expire after
//! [`ACCESS_TOKEN_TTL_SECS`]; refresh tokens carry no expiry and are only
//! honoured while they match the value stored on the user record.

use crate::error::AppError;
use crate::middleware::auth::{AuthContext, Identity};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Access token lifetime.
pub const ACCESS_TOKEN_TTL_SECS: u64 = 1800;

/// Lifetime descriptor returned to clients alongside the access token.
pub const ACCESS_TOKEN_EXPIRES_IN: &str = "1800s";

/// Access token claims.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AccessClaims {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Refresh token claims. No `exp`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RefreshClaims {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub email: String,
    pub iat: u64,
    /// Unique per issuance so a rotated token never equals its predecessor.
    pub jti: String,
}

/// Signs and verifies both token kinds.
#[derive(Clone)]
pub struct TokenService {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
}

impl TokenService {
    pub fn new(access_key: &[u8], refresh_key: &[u8]) -> Self {
        Self {
            access_encoding: EncodingKey::from_secret(access_key),
            access_decoding: DecodingKey::from_secret(access_key),
            refresh_encoding: EncodingKey::from_secret(refresh_key),
            refresh_decoding: DecodingKey::from_secret(refresh_key),
        }
    }

    /// Sign a short-lived access token for the given identity.
    pub fn issue_access_token(&self, user_id: &str, email: &str) -> Result<String, AppError> {
        self.issue_access_token_at(user_id, email, unix_now()?)
    }

    fn issue_access_token_at(
        &self,
        user_id: &str,
        email: &str,
        issued_at: u64,
    ) -> Result<String, AppError> {
        let claims = AccessClaims {
            user_id: user_id.to_string(),
            email: email.to_string(),
            iat: issued_at,
            exp: issued_at + ACCESS_TOKEN_TTL_SECS,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.access_encoding)
            .map_err(AppError::Signing)
    }

    /// Sign a non-expiring refresh token for the given identity.
    pub fn issue_refresh_token(&self, user_id: &str, email: &str) -> Result<String, AppError> {
        let claims = RefreshClaims {
            user_id: user_id.to_string(),
            email: email.to_string(),
            iat: unix_now()?,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.refresh_encoding)
            .map_err(AppError::Signing)
    }

    /// Resolve an `Authorization` header value into an auth context.
    ///
    /// Never fails: a missing header, a malformed value, a bad signature or
    /// an expired token all yield an anonymous context.
    pub fn verify_access(&self, header_value: Option<&str>) -> AuthContext {
        let Some(token) = header_value.and_then(bearer_token) else {
            return AuthContext::anonymous();
        };

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        match decode::<AccessClaims>(token, &self.access_decoding, &validation) {
            Ok(data) => AuthContext::authenticated(Identity {
                user_id: data.claims.user_id,
                email: data.claims.email,
            }),
            Err(e) => {
                tracing::debug!(error = %e, "Access token rejected");
                AuthContext::anonymous()
            }
        }
    }

    /// Verify a refresh token signature and return the user ID it names.
    pub fn verify_refresh(&self, token: &str) -> Result<String, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<RefreshClaims>(token, &self.refresh_decoding, &validation)
            .map(|data| data.claims.user_id)
            .map_err(|e| {
                tracing::debug!(error = %e, "Refresh token rejected");
                AppError::InvalidToken
            })
    }
}

/// Extract the credential from `Bearer <token>`.
fn bearer_token(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

fn unix_now() -> Result<u64, AppError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("System time error: {}", e)))
}
