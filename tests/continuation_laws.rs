//! Property-based tests for Continuation<R, A> laws.
//!
//! This module verifies that Continuation satisfies:
//!
//! - **Functor Laws**: identity and composition
//! - **Monad Laws**: left identity, right identity, associativity
//! - **Referential transparency** for pure consumers

#![cfg(feature = "control")]

use monadish::control::{ContinueWith, Continuation};
use proptest::prelude::*;

// =============================================================================
// Helper Functions for Tests
// =============================================================================

fn add_one(n: i32) -> i32 {
    n.wrapping_add(1)
}

fn multiply_two(n: i32) -> i32 {
    n.wrapping_mul(2)
}

fn cont_add_one(n: i32) -> Continuation<i32, i32> {
    Continuation::pure(n.wrapping_add(1))
}

fn cont_multiply_two(n: i32) -> Continuation<i32, i32> {
    Continuation::pure(n.wrapping_mul(2))
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Functor Identity: cont.map(|x| x).run(k) == cont.run(k)
    #[test]
    fn prop_functor_identity(value in any::<i32>()) {
        let left = Continuation::<i32, i32>::pure(value).map(|x| x).run(|x| x);
        let right = Continuation::<i32, i32>::pure(value).run(|x| x);

        prop_assert_eq!(left, right);
    }
}

proptest! {
    /// Functor Composition:
    /// cont.map(f).map(g).run(k) == cont.map(|x| g(f(x))).run(k)
    #[test]
    fn prop_functor_composition(value in any::<i32>()) {
        let left = Continuation::<i32, i32>::pure(value)
            .map(add_one)
            .map(multiply_two)
            .run(|x| x);
        let right = Continuation::<i32, i32>::pure(value)
            .map(|x| multiply_two(add_one(x)))
            .run(|x| x);

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left Identity: Continuation::pure(a).flat_map(f).run(k) == f(a).run(k)
    #[test]
    fn prop_monad_left_identity(value in any::<i32>()) {
        let left = Continuation::pure(value).flat_map(cont_multiply_two).run(|x| x);
        let right = cont_multiply_two(value).run(|x| x);

        prop_assert_eq!(left, right);
    }
}

proptest! {
    /// Right Identity: m.flat_map(Continuation::pure).run(k) == m.run(k)
    #[test]
    fn prop_monad_right_identity(value in any::<i32>()) {
        let left = Continuation::<i32, i32>::pure(value)
            .flat_map(Continuation::pure)
            .run(|x| x);
        let right = Continuation::<i32, i32>::pure(value).run(|x| x);

        prop_assert_eq!(left, right);
    }
}

proptest! {
    /// Associativity:
    /// m.flat_map(f).flat_map(g).run(k) == m.flat_map(|x| f(x).flat_map(g)).run(k)
    #[test]
    fn prop_monad_associativity(value in any::<i32>()) {
        let left = Continuation::<i32, i32>::pure(value)
            .flat_map(cont_add_one)
            .flat_map(cont_multiply_two)
            .run(|x| x);
        let right = Continuation::<i32, i32>::pure(value)
            .flat_map(|x| cont_add_one(x).flat_map(cont_multiply_two))
            .run(|x| x);

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// select_many agrees with flat_map + map
// =============================================================================

proptest! {
    /// m.select_many(f, combine).run(k) ==
    /// m.flat_map(|a| f(a).map(|b| combine(a, b))).run(k)
    #[test]
    fn prop_select_many_desugars_to_bind(value in any::<i32>()) {
        let left = Continuation::<i32, i32>::pure(value)
            .select_many(cont_add_one, |a, b| a.wrapping_add(b))
            .run(|x| x);
        let right = Continuation::<i32, i32>::pure(value)
            .flat_map(|a| cont_add_one(a).map(move |b| a.wrapping_add(b)))
            .run(|x| x);

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Referential transparency
// =============================================================================

proptest! {
    /// Building the same chain twice and running it with pure consumers
    /// yields the same result.
    #[test]
    fn prop_pure_chains_are_referentially_transparent(value in any::<i32>()) {
        let build = |input: i32| {
            Continuation::<i32, i32>::pure(input)
                .map(add_one)
                .flat_map(cont_multiply_two)
        };

        prop_assert_eq!(build(value).run(|x| x), build(value).run(|x| x));
    }
}

// =============================================================================
// Staged-function composition laws
// =============================================================================

proptest! {
    /// continue_with is ordinary left-to-right composition:
    /// f.continue_with(g)(x) == g(f(x))
    #[test]
    fn prop_continue_with_is_composition(value in any::<i32>()) {
        let chained = add_one.continue_with(multiply_two);
        prop_assert_eq!(chained(value), multiply_two(add_one(value)));
    }
}

proptest! {
    /// Staged select_many evaluates both stages against the same input.
    #[test]
    fn prop_staged_select_many_shares_the_input(value in any::<i32>()) {
        let combined = (|x: i32| x.wrapping_add(x))
            .select_many(|_| |x: i32| x.wrapping_mul(x), |a, b| a.wrapping_add(b));
        let expected = value.wrapping_add(value).wrapping_add(value.wrapping_mul(value));
        prop_assert_eq!(combined(value), expected);
    }
}
