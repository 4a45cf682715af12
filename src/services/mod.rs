// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod accounts;
pub mod images;
pub mod password;
pub mod posts;
pub mod tokens;
pub mod validation;

pub use accounts::{AccountService, Session};
pub use images::ImageStore;
pub use posts::{PostPage, PostService};
pub use tokens::TokenService;
