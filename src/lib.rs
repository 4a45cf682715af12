// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Postboard: GraphQL backend for user accounts and blog posts
//!
//! This crate provides registration, access/refresh token sessions and
//! owner-checked CRUD over posts, backed by a document store.

pub mod config;
pub mod db;
pub mod error;
pub mod graphql;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::DocumentStore;
use services::{AccountService, ImageStore, PostService, TokenService};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Arc<dyn DocumentStore>,
    pub tokens: TokenService,
    pub accounts: AccountService,
    pub posts: PostService,
}

impl AppState {
    /// Wire services from configuration and a document store.
    pub fn new(config: Config, db: Arc<dyn DocumentStore>) -> Self {
        let tokens = TokenService::new(&config.access_token_key, &config.refresh_token_key);
        let images = ImageStore::new(config.image_root.clone());

        Self {
            accounts: AccountService::new(db.clone(), tokens.clone()),
            posts: PostService::new(db.clone(), images),
            tokens,
            db,
            config,
        }
    }
}
