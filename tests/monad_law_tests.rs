// Copyright (c) 2025 - Cowboy AI, LLC.

use std::cell::Cell;

use cim_fp::prelude::*;
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    proptest::option::of(any::<i32>()).prop_map(Maybe::from)
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<i32>().prop_map(Either::<String, i32>::success),
        "[a-z]{0,8}".prop_map(Either::<String, i32>::failure),
    ]
}

fn maybe_f(x: i32) -> Maybe<i32> {
    if x % 3 == 0 {
        Maybe::absent()
    } else {
        Maybe::present(x.wrapping_add(1))
    }
}

fn maybe_g(x: i32) -> Maybe<i32> {
    if x < 0 {
        Maybe::absent()
    } else {
        Maybe::present(x.wrapping_mul(2))
    }
}

fn either_f(x: i32) -> Either<String, i32> {
    if x % 3 == 0 {
        Either::failure(format!("{x} is divisible by 3"))
    } else {
        Either::success(x.wrapping_add(1))
    }
}

fn either_g(x: i32) -> Either<String, i32> {
    if x < 0 {
        Either::failure(format!("{x} is negative"))
    } else {
        Either::success(x.wrapping_mul(2))
    }
}

proptest! {
    #[test]
    fn maybe_left_identity(x in any::<i32>()) {
        prop_assert_eq!(Maybe::<i32>::pure(x).bind(maybe_f), maybe_f(x));
    }

    #[test]
    fn maybe_right_identity(m in maybe_strategy()) {
        prop_assert_eq!(m.bind(Maybe::present), m);
    }

    #[test]
    fn maybe_associativity(m in maybe_strategy()) {
        let left = m.bind(maybe_f).bind(maybe_g);
        let right = m.bind(|x| maybe_f(x).bind(maybe_g));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn maybe_functor_identity(m in maybe_strategy()) {
        prop_assert_eq!(m.map(|x| x), m);
    }

    #[test]
    fn maybe_functor_composition(m in maybe_strategy()) {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| x.to_string();
        prop_assert_eq!(m.map(f).map(g), m.map(|x| g(f(x))));
    }

    #[test]
    fn maybe_present_map_applies_function(v in any::<i32>()) {
        prop_assert_eq!(
            Maybe::present(v).map(|x| x.wrapping_sub(7)),
            Maybe::present(v.wrapping_sub(7))
        );
    }

    #[test]
    fn maybe_value_or_default(v in any::<i32>(), d in any::<i32>()) {
        prop_assert_eq!(Maybe::<i32>::absent().value_or(d), d);
        prop_assert_eq!(Maybe::present(v).value_or(d), v);
    }

    #[test]
    fn either_left_identity(x in any::<i32>()) {
        prop_assert_eq!(Either::<String, i32>::pure(x).bind(either_f), either_f(x));
    }

    #[test]
    fn either_right_identity(m in either_strategy()) {
        prop_assert_eq!(m.clone().bind(Either::success), m);
    }

    #[test]
    fn either_associativity(m in either_strategy()) {
        let left = m.clone().bind(either_f).bind(either_g);
        let right = m.bind(|x| either_f(x).bind(either_g));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn either_functor_identity(m in either_strategy()) {
        prop_assert_eq!(m.clone().map(|x| x), m);
    }

    #[test]
    fn either_functor_composition(m in either_strategy()) {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| x.to_string();
        prop_assert_eq!(m.clone().map(f).map(g), m.map(|x| g(f(x))));
    }

    #[test]
    fn failure_is_untouched_by_bind_and_map(e in "[a-z]{0,8}") {
        let failed = Either::<String, i32>::failure(e.clone());
        prop_assert_eq!(failed.clone().bind(either_f), Either::failure(e.clone()));
        prop_assert_eq!(failed.map(|x| x.wrapping_add(1)), Either::failure(e));
    }

    #[test]
    fn success_bind_is_application(r in any::<i32>()) {
        prop_assert_eq!(Either::<String, i32>::success(r).bind(either_f), either_f(r));
    }
}

#[test]
fn absent_never_invokes_callbacks() {
    let calls = Cell::new(0);

    let mapped = Maybe::<i32>::absent().map(|x| {
        calls.set(calls.get() + 1);
        x
    });
    let bound = Maybe::<i32>::absent().bind(|x| {
        calls.set(calls.get() + 1);
        Maybe::present(x)
    });

    assert_eq!(mapped, Maybe::absent());
    assert_eq!(bound, Maybe::absent());
    assert_eq!(calls.get(), 0);
}

#[test]
fn callbacks_run_exactly_once_on_present() {
    let calls = Cell::new(0);

    let result = Maybe::present(2)
        .map(|x| {
            calls.set(calls.get() + 1);
            x + 1
        })
        .bind(|x| {
            calls.set(calls.get() + 1);
            Maybe::present(x * 10)
        });

    assert_eq!(result, Maybe::present(30));
    assert_eq!(calls.get(), 2);
}
