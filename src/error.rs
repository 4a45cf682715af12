// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent GraphQL error extensions.

use async_graphql::ErrorExtensions;
use axum::http::StatusCode;
use serde::Serialize;

/// A single failed input check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Application error type. Every variant maps to an HTTP-equivalent status
/// which is reported to GraphQL clients as `extensions.code`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid Input!")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    Conflict(String),

    #[error("Not authenticated!")]
    Unauthenticated,

    #[error("Password is incorrect!")]
    InvalidCredential,

    #[error("Not authorized!")]
    Forbidden,

    /// Missing resource. The status differs per operation (401 or 404).
    #[error("{message}")]
    NotFound {
        message: &'static str,
        status: StatusCode,
    },

    #[error("Validation failed/ Refresh token must have Expired!")]
    InvalidToken,

    #[error("Internal Server Error!")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Login with an email nobody registered.
    pub fn account_not_found() -> Self {
        AppError::NotFound {
            message: "User not found!",
            status: StatusCode::UNAUTHORIZED,
        }
    }

    /// The authenticated user's own record has disappeared.
    pub fn user_not_found() -> Self {
        AppError::NotFound {
            message: "User not found!",
            status: StatusCode::NOT_FOUND,
        }
    }

    /// Single post lookup miss.
    pub fn no_such_post() -> Self {
        AppError::NotFound {
            message: "No such post found!",
            status: StatusCode::UNAUTHORIZED,
        }
    }

    /// Post lookup miss while mutating.
    pub fn post_not_found() -> Self {
        AppError::NotFound {
            message: "Post not found!",
            status: StatusCode::NOT_FOUND,
        }
    }

    /// HTTP-equivalent status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) | AppError::InvalidToken => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Unauthenticated | AppError::InvalidCredential => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound { status, .. } => *status,
            AppError::Signing(_) | AppError::Database(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        // Internal details stay in the logs.
        let message = match self {
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "Database error");
                "Internal Server Error!".to_string()
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                "Internal Server Error!".to_string()
            }
            AppError::Signing(err) => {
                tracing::error!(error = %err, "Token signing failed");
                self.to_string()
            }
            _ => self.to_string(),
        };

        async_graphql::Error::new(message).extend_with(|_, e| {
            e.set("code", self.status().as_u16());
            if let AppError::Validation(errors) = self {
                if let Ok(data) = async_graphql::to_value(errors) {
                    e.set("data", data);
                }
            }
        })
    }
}

/// Result type alias for services and resolvers.
pub type Result<T> = std::result::Result<T, AppError>;
