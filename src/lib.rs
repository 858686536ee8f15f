//! # CIM FP
//!
//! Composable containers for values that may be absent and computations that
//! may fail, in the functional style used across the Composable Information
//! Machine.
//!
//! This crate provides:
//! - **Monad**: The `bind`/`map` capability contract shared by every container
//! - **Maybe**: Zero or one value, with short-circuiting and default extraction
//! - **Either**: A failure (`Left`) or a success (`Right`), biased to success
//! - **Decode adapter**: Turns a JSON decoder error into an `Either` failure
//! - **Pipelines**: Small compositions that exercise the containers end to end
//!
//! ## Design Principles
//!
//! 1. **Immutability**: Containers are values; every stage builds a new one
//! 2. **Short-circuit**: Absence and failure skip later callbacks
//! 3. **Failures as values**: Nothing is raised past the decode adapter
//! 4. **Total reduction**: Pipelines end with `cata` or `value_or`
//!
//! ## Example
//!
//! ```rust
//! use cim_fp::{customer_price_from_response, Maybe, Monad};
//!
//! let price = customer_price_from_response(r#"{"customerPrice":69,"id":"x"}"#);
//! assert_eq!(price.right(), 69.0);
//!
//! let marked_up = Maybe::present(100.0).map(|p| p * 2.0).value_or(0.0);
//! assert_eq!(marked_up, 200.0);
//! ```

#![warn(missing_docs)]

mod decode;
mod either;
mod errors;
mod fetch;
mod maybe;
mod pipelines;
pub mod fp_monad;

// Re-export core types
pub use decode::{parse_json, parse_json_with, try_decode, DecodeConfig, DecodeError};
pub use either::Either;
pub use errors::{Branch, DomainError, WrongBranch};
pub use fetch::{fetch_character_height, InMemoryResponseSource, ResponseSource};
pub use fp_monad::{kleisli, KleisliArrow, Monad};
pub use maybe::Maybe;
pub use pipelines::{
    character_height, customer_price_from_response, price_with_markup, user_email_from_json,
    Character, Rate, User,
};

/// Glob-importable set of the container types and their contract
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::fp_monad::Monad;
    pub use crate::maybe::Maybe;
}
