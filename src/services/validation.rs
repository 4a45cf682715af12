// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Input validation for registration and post payloads.
//!
//! Every rule is evaluated and all violations are reported together.

use crate::error::{AppError, FieldError};
use validator::{Validate, ValidateEmail, ValidationError};

/// Inputs whose violations are reported in rule order rather than map order.
pub trait RuleOrder {
    /// Field names (as declared) in the order their rules run.
    const FIELDS: &'static [&'static str];
}

/// Registration input.
#[derive(Debug, Clone, Validate)]
pub struct UserInput {
    #[validate(custom(function = "email_with_tld", message = "Email is invalid!"))]
    pub email: String,
    #[validate(length(min = 1, message = "Name cannot be empty!"))]
    pub name: String,
    #[validate(length(min = 5, message = "Invalid Password!"))]
    pub password: String,
}

impl RuleOrder for UserInput {
    const FIELDS: &'static [&'static str] = &["email", "name", "password"];
}

/// Post create/update input.
#[derive(Debug, Clone, Validate)]
pub struct PostInput {
    #[validate(length(min = 5, message = "Invalid title!"))]
    pub title: String,
    #[validate(length(min = 1, message = "Invalid imageUrl!"))]
    pub image_url: String,
    #[validate(length(min = 5, message = "Invalid content!"))]
    pub content: String,
}

impl RuleOrder for PostInput {
    const FIELDS: &'static [&'static str] = &["title", "image_url", "content"];
}

/// Email address whose domain is dotted and ends in an alphabetic TLD of at
/// least two letters. `a@b` and `x@y.z` are rejected.
fn email_with_tld(email: &str) -> Result<(), ValidationError> {
    let has_tld = email
        .rsplit_once('@')
        .and_then(|(_, domain)| domain.rsplit_once('.'))
        .is_some_and(|(_, tld)| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));

    if email.validate_email() && has_tld {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}

/// Run all rules on `input`, collecting every violation into one error.
pub fn check<T: Validate + RuleOrder>(input: &T) -> Result<(), AppError> {
    let Err(errors) = input.validate() else {
        return Ok(());
    };

    let by_field = errors.field_errors();
    let fields: Vec<FieldError> = T::FIELDS
        .iter()
        .filter_map(|name| by_field.get(*name).map(|errs| (to_camel_case(name), errs)))
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.clone(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            })
        })
        .collect();

    Err(AppError::Validation(fields))
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
