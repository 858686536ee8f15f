// Copyright (c) 2025 - Cowboy AI, LLC.

//! Either: a disjoint result container
//!
//! `Either<L, R>` holds exactly one of a failure value (`Left(L)`) or a
//! success value (`Right(R)`). It is right-biased. `bind` and `map` operate on
//! the success branch and carry a failure through untouched.
//!
//! Pipelines should end with the total reducer [`Either::cata`], which forces
//! the caller to handle both branches. The partial extractors
//! [`Either::left`] and [`Either::right`] are for contexts where the branch is
//! already established, such as after a test has asserted success.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{Branch, WrongBranch};
use crate::fp_monad::Monad;
use crate::maybe::Maybe;

/// A standard Either ADT: Left(L) or Right(R).
///
/// `Left` holds the failure value and `Right` holds the success value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "value")]
pub enum Either<L, R> {
    /// Failure branch
    Left(L),
    /// Success branch
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Construct the failure branch.
    pub fn failure(value: L) -> Self {
        Either::Left(value)
    }

    /// Construct the success branch.
    pub fn success(value: R) -> Self {
        Either::Right(value)
    }

    /// True when the failure branch is populated.
    pub fn is_failure(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// True when the success branch is populated.
    pub fn is_success(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Total reducer: apply exactly one of the two functions.
    ///
    /// # Example
    /// ```rust
    /// use cim_fp::Either;
    ///
    /// let parsed: Either<String, u32> = Either::success(69);
    /// let text = parsed.cata(|e| format!("error: {e}"), |price| format!("price: {price}"));
    /// assert_eq!(text, "price: 69");
    /// ```
    pub fn cata<X, FL, FR>(self, on_failure: FL, on_success: FR) -> X
    where
        FL: FnOnce(L) -> X,
        FR: FnOnce(R) -> X,
    {
        match self {
            Either::Left(l) => on_failure(l),
            Either::Right(r) => on_success(r),
        }
    }

    /// Map over the Left value, leaving a success untouched.
    pub fn map_failure<T, F>(self, f: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Exchange the two branches.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// Keep the success value, forgetting why a failure happened.
    pub fn to_maybe(self) -> Maybe<R> {
        match self {
            Either::Left(_) => Maybe::Absent,
            Either::Right(r) => Maybe::Present(r),
        }
    }

    /// Convert into a standard `Result`.
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }

    /// Get a reference to the Left value if present.
    pub fn as_left(&self) -> Option<&L> {
        match self {
            Either::Left(l) => Some(l),
            _ => None,
        }
    }

    /// Get a reference to the Right value if present.
    pub fn as_right(&self) -> Option<&R> {
        match self {
            Either::Right(r) => Some(r),
            _ => None,
        }
    }

    /// Take the Left value, or report which branch was actually populated.
    pub fn try_left(self) -> Result<L, WrongBranch> {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(_) => Err(WrongBranch {
                expected: Branch::Left,
                found: Branch::Right,
            }),
        }
    }

    /// Take the Right value, or report which branch was actually populated.
    pub fn try_right(self) -> Result<R, WrongBranch> {
        match self {
            Either::Right(r) => Ok(r),
            Either::Left(_) => Err(WrongBranch {
                expected: Branch::Right,
                found: Branch::Left,
            }),
        }
    }

    /// Take the Left value.
    ///
    /// # Panics
    ///
    /// Panics with a [`WrongBranch`] message if the container holds a success.
    #[track_caller]
    pub fn left(self) -> L {
        match self.try_left() {
            Ok(l) => l,
            Err(e) => panic!("{e}"),
        }
    }

    /// Take the Right value.
    ///
    /// # Panics
    ///
    /// Panics with a [`WrongBranch`] message if the container holds a failure.
    #[track_caller]
    pub fn right(self) -> R {
        match self.try_right() {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(value: Result<R, L>) -> Self {
        match value {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(value: Either<L, R>) -> Self {
        value.into_result()
    }
}

impl<L, R> Monad for Either<L, R> {
    type Value = R;
    type Wrapped<B> = Either<L, B>;

    fn pure(value: R) -> Self {
        Either::Right(value)
    }

    fn bind<B, F>(self, f: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    fn map<B, F>(self, f: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }
}
