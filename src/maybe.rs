// Copyright (c) 2025 - Cowboy AI, LLC.

//! Maybe: an optional container holding zero or one value
//!
//! `Maybe<A>` is an explicit two-variant sum type. It is either `Present(A)`
//! or the single canonical `Absent` state. It never holds a nullable field,
//! so presence is decided by the variant alone. Zero, the empty string and
//! `false` are all present values.
//!
//! Absence is not an error. It propagates silently through `bind` and `map`,
//! and a pipeline is usually finished with [`Maybe::value_or`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::either::Either;
use crate::fp_monad::Monad;

/// A slot holding zero or one value of type `A`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "value")]
pub enum Maybe<A> {
    /// Holds a value
    Present(A),
    /// Holds nothing
    Absent,
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<A> Maybe<A> {
    /// Construct a container holding `value`.
    pub fn present(value: A) -> Self {
        Maybe::Present(value)
    }

    /// Construct the canonical empty container.
    pub fn absent() -> Self {
        Maybe::Absent
    }

    /// Construct from an `Option`; `None` collapses to `Absent`.
    pub fn from_option(value: Option<A>) -> Self {
        match value {
            Some(v) => Maybe::Present(v),
            None => Maybe::Absent,
        }
    }

    /// True when a value is held.
    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// True when nothing is held.
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// The wrapped value, or `default` when absent.
    ///
    /// This is the only extraction path that needs no callback.
    pub fn value_or(self, default: A) -> A {
        match self {
            Maybe::Present(v) => v,
            Maybe::Absent => default,
        }
    }

    /// The wrapped value, or the result of `default` when absent.
    ///
    /// `default` is only called for an absent container.
    pub fn value_or_else<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Maybe::Present(v) => v,
            Maybe::Absent => default(),
        }
    }

    /// Keep the value only if `predicate` holds for it.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        if let Maybe::Present(v) = self {
            if predicate(&v) {
                return Maybe::Present(v);
            }
        }
        Maybe::Absent
    }

    /// Borrow the wrapped value without consuming the container.
    pub fn as_ref(&self) -> Maybe<&A> {
        match self {
            Maybe::Present(v) => Maybe::Present(v),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Convert into a standard `Option`.
    pub fn into_option(self) -> Option<A> {
        match self {
            Maybe::Present(v) => Some(v),
            Maybe::Absent => None,
        }
    }

    /// Turn absence into a typed failure.
    ///
    /// `Present(v)` becomes `success(v)`; `Absent` becomes `failure(error)`.
    pub fn ok_or<L>(self, error: L) -> Either<L, A> {
        match self {
            Maybe::Present(v) => Either::Right(v),
            Maybe::Absent => Either::Left(error),
        }
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(value: Option<A>) -> Self {
        Maybe::from_option(value)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(value: Maybe<A>) -> Self {
        value.into_option()
    }
}

impl<A> Monad for Maybe<A> {
    type Value = A;
    type Wrapped<B> = Maybe<B>;

    fn pure(value: A) -> Self {
        Maybe::Present(value)
    }

    fn bind<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Maybe::Present(v) => f(v),
            Maybe::Absent => Maybe::Absent,
        }
    }

    fn map<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Maybe::Present(v) => Maybe::Present(f(v)),
            Maybe::Absent => Maybe::Absent,
        }
    }
}
