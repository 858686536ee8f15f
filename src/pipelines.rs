// Copyright 2025 Cowboy AI, LLC.

//! Small pipelines composed from the containers
//!
//! Each pipeline starts at the decode adapter, threads the result through
//! `bind`/`map`, and ends with a total reducer (`cata` or `value_or`), so
//! both outcomes are always handled.

use serde::Deserialize;

use crate::decode::parse_json;
use crate::either::Either;
use crate::errors::DomainError;
use crate::fp_monad::Monad;
use crate::maybe::Maybe;

/// A price quote as returned by the rates service
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
    /// Price shown to the customer
    #[serde(default)]
    pub customer_price: Option<f64>,
    /// Quote identifier
    #[serde(default)]
    pub id: Option<String>,
}

/// A user record
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact address
    pub email: String,
}

/// The subset of a character record the pipelines read
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Character {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Height in centimetres, as text
    #[serde(default)]
    pub height: Option<String>,
    /// Mass in kilograms, as text
    #[serde(default)]
    pub mass: Option<String>,
}

/// Pull `customerPrice` out of a rates response
///
/// Any failure, whether malformed text or a missing field, is erased to `()`
/// because the caller only needs to know that no price was found.
pub fn customer_price_from_response(raw: &str) -> Either<(), f64> {
    parse_json::<Rate>(raw)
        .map_failure(DomainError::from)
        .bind(|rate| {
            Maybe::from(rate.customer_price).ok_or(DomainError::missing_field("customerPrice"))
        })
        .cata(|_| Either::failure(()), Either::success)
}

/// Pull the email address out of a user record
pub fn user_email_from_json(raw: &str) -> Either<DomainError, String> {
    parse_json::<User>(raw).cata(
        |_| Either::failure(DomainError::generic("No data in user")),
        |user| Either::success(user.email),
    )
}

/// Read a character's height as a number
///
/// A decode failure is carried through unchanged. A missing or empty
/// `height` gives [`DomainError::MissingField`], and non-numeric text gives
/// [`DomainError::ValidationError`].
pub fn character_height(raw: &str) -> Either<DomainError, u32> {
    parse_json::<Character>(raw)
        .map_failure(DomainError::from)
        .bind(|character| {
            Maybe::from(character.height)
                .filter(|h| !h.trim().is_empty())
                .ok_or(DomainError::missing_field("height"))
        })
        .bind(|height| {
            Either::from(height.trim().parse::<u32>().map_err(|e| {
                DomainError::ValidationError(format!("height {height:?} is not a number: {e}"))
            }))
        })
}

/// Apply a markup rate to an optional price, defaulting to zero
pub fn price_with_markup(price: Maybe<f64>, rate: f64) -> f64 {
    price.map(|p| p * rate).value_or(0.0)
}
