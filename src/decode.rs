// Copyright 2025 Cowboy AI, LLC.

//! Decode adapter: the boundary where a decoder error becomes a value
//!
//! The external decoder (`serde_json`) reports malformed input as an error.
//! This module catches that error and places it, unmodified, in the failure
//! branch of an [`Either`]. Downstream stages see failures only through
//! `bind`/`map` short-circuiting.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::either::Either;

const UTF8_BOM: char = '\u{feff}';

/// Failure produced by the decode adapter
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The decoder rejected the input; the message is the decoder's own
    #[error(transparent)]
    Malformed(#[from] serde_json::Error),

    /// The input exceeded the configured size limit and was not decoded
    #[error("input of {len} bytes exceeds the {limit} byte limit")]
    TooLarge {
        /// Size of the rejected input in bytes
        len: usize,
        /// Configured limit in bytes
        limit: usize,
    },
}

impl DecodeError {
    /// One-based line of the decoder diagnostic, if the decoder reported one
    pub fn line(&self) -> Option<usize> {
        match self {
            DecodeError::Malformed(err) => Some(err.line()),
            DecodeError::TooLarge { .. } => None,
        }
    }

    /// One-based column of the decoder diagnostic, if the decoder reported one
    pub fn column(&self) -> Option<usize> {
        match self {
            DecodeError::Malformed(err) => Some(err.column()),
            DecodeError::TooLarge { .. } => None,
        }
    }

    /// Check if the input was not syntactically valid JSON
    pub fn is_syntax(&self) -> bool {
        matches!(self, DecodeError::Malformed(err) if err.is_syntax())
    }
}

/// Configuration for [`parse_json_with`]
///
/// The default configuration hands the text to the decoder untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// Reject inputs larger than this many bytes without decoding them
    pub max_input_bytes: Option<usize>,
    /// Drop a leading UTF-8 byte order mark before decoding
    pub strip_bom: bool,
}

impl DecodeConfig {
    /// Set the input size limit
    pub fn with_max_input_bytes(mut self, limit: usize) -> Self {
        self.max_input_bytes = Some(limit);
        self
    }

    /// Strip a leading byte order mark before decoding
    pub fn stripping_bom(mut self) -> Self {
        self.strip_bom = true;
        self
    }
}

/// Run a fallible decode operation and capture its outcome as an `Either`
///
/// The operation runs exactly once. `Err(e)` becomes `failure(e)` and
/// `Ok(v)` becomes `success(v)`.
pub fn try_decode<T, E, F>(op: F) -> Either<E, T>
where
    F: FnOnce() -> Result<T, E>,
{
    Either::from(op())
}

/// Decode JSON text into `T` with the default configuration
///
/// # Example
/// ```rust
/// use cim_fp::{parse_json, Monad};
///
/// let doubled = parse_json::<u32>("21").map(|n| n * 2);
/// assert_eq!(doubled.right(), 42);
///
/// assert!(parse_json::<u32>("not json").is_failure());
/// ```
pub fn parse_json<T>(raw: &str) -> Either<DecodeError, T>
where
    T: DeserializeOwned,
{
    parse_json_with(&DecodeConfig::default(), raw)
}

/// Decode JSON text into `T` under `config`
pub fn parse_json_with<T>(config: &DecodeConfig, raw: &str) -> Either<DecodeError, T>
where
    T: DeserializeOwned,
{
    let input = if config.strip_bom {
        raw.strip_prefix(UTF8_BOM).unwrap_or(raw)
    } else {
        raw
    };

    if let Some(limit) = config.max_input_bytes {
        if input.len() > limit {
            warn!(len = input.len(), limit, "Rejecting oversized JSON input");
            return Either::failure(DecodeError::TooLarge {
                len: input.len(),
                limit,
            });
        }
    }

    try_decode(|| serde_json::from_str::<T>(input)).map_failure(|err| {
        debug!(
            line = err.line(),
            column = err.column(),
            "JSON decode failed: {}",
            err
        );
        DecodeError::Malformed(err)
    })
}
