// Copyright (c) 2025 - Cowboy AI, LLC.

//! The capability contract shared by every container in this crate
//!
//! A container M wraps a value A as M(A). The contract is one trait,
//! [`Monad`], implemented by [`Maybe`](crate::Maybe) and
//! [`Either`](crate::Either). A generic associated type names "the same
//! container kind wrapping B", so the contract is written once instead of
//! once per variant.
//!
//! # Mathematical Foundation
//!
//! A container forms a monad with:
//! - `pure` (return): Lifts a value into the container
//! - `bind` (>>=): Chains dependent computations that return containers
//! - `map`: Functor operation on the wrapped value
//!
//! # Monad Laws
//!
//! 1. Left Identity: `pure a >>= f ≡ f a`
//! 2. Right Identity: `m >>= pure ≡ m`
//! 3. Associativity: `(m >>= f) >>= g ≡ m >>= (λx. f x >>= g)`
//!
//! # Functor Laws
//!
//! 1. Identity: `map id ≡ id`
//! 2. Composition: `map (g ∘ f) ≡ map g ∘ map f`
//!
//! # Short-circuiting
//!
//! Containers can be in a short-circuited state (absence, or the failure
//! branch). In that state `bind` and `map` must not invoke their callback.
//! They return the same state re-typed to the target.

/// The `bind`/`map` capability every container supports
///
/// `Value` is the wrapped type A, and `Wrapped<B>` is the same container kind
/// wrapping B. For `Maybe<A>` that is `Maybe<B>`. For `Either<L, R>` it is
/// `Either<L, B>`, which keeps the failure type fixed.
pub trait Monad: Sized {
    /// The wrapped value type
    type Value;

    /// The same container kind wrapping a different value type
    type Wrapped<B>;

    /// return/pure: Lift a value into the container
    ///
    /// For `Maybe` this is the present constructor. For `Either` it is the
    /// success constructor.
    fn pure(value: Self::Value) -> Self;

    /// bind/flatMap: M(A) -> (A -> M(B)) -> M(B)
    ///
    /// Sequences a dependent computation. `f` runs at most once, and never
    /// when the receiver is short-circuited.
    fn bind<B, F>(self, f: F) -> Self::Wrapped<B>
    where
        F: FnOnce(Self::Value) -> Self::Wrapped<B>;

    /// map: M(A) -> (A -> B) -> M(B)
    ///
    /// Applies a pure transformation to the wrapped value. A short-circuited
    /// receiver propagates unchanged.
    fn map<B, F>(self, f: F) -> Self::Wrapped<B>
    where
        F: FnOnce(Self::Value) -> B;
}

/// Kleisli arrow: A → M(B)
///
/// Functions that return containers, used for composing dependent
/// computations.
pub trait KleisliArrow<M: Monad, B>: Fn(M::Value) -> M::Wrapped<B> {}

impl<M, B, F> KleisliArrow<M, B> for F
where
    M: Monad,
    F: Fn(M::Value) -> M::Wrapped<B>,
{
}

/// Compose two Kleisli arrows left-to-right: `x -> f(x) >>= g`
///
/// If `f` short-circuits, the result short-circuits and `g` is never run.
pub fn kleisli<A, N, C, F, G>(f: F, g: G) -> impl Fn(A) -> N::Wrapped<C>
where
    N: Monad,
    F: Fn(A) -> N,
    G: Fn(N::Value) -> N::Wrapped<C>,
{
    move |a| f(a).bind(&g)
}
