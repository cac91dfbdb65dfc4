//! Property-based tests for the combinator laws.
//!
//! ## Composition Laws
//! - **Associativity**: `f.compose(g).compose(h) == f.compose(|x| g(h(x)))`
//! - **Left Identity**: `f.and_then(identity) == f`
//! - **Right Identity**: `f.compose(identity) == f`
//!
//! ## Currying / Partial Application Laws
//! - **Round-trip**: `f.curried().apply(a).apply(b) == f.apply(a, b)`
//! - **Prefix**: `f.apply_partially(a).apply(b, c) == f.apply(a, b, c)`
//!
//! ## Reversal Laws
//! - **Definition**: `f.reversed().apply(a, b) == f.apply(b, a)`
//! - **Double Reversal**: `f.reversed().reversed() == f`
//!
//! ## Memoization Law
//! - **Transparency**: `f.memoized().apply(x) == f.apply(x)`
//!
//! Using proptest, we generate random inputs to verify these laws across a
//! wide range of values.

use funcomb::function::{Function1, Function2, Function3, constant, flip, identity};
use proptest::prelude::*;

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    /// Right Identity Law: f.compose(identity).apply(x) == f.apply(x)
    #[test]
    fn prop_compose_right_identity(x in any::<i32>()) {
        let function = Function1::new(|n: i32| n.wrapping_mul(2));

        let composed = function.clone().compose(identity);

        prop_assert_eq!(composed.apply(x), function.apply(x));
    }

    /// Left Identity Law: f.and_then(identity).apply(x) == f.apply(x)
    #[test]
    fn prop_and_then_left_identity(x in any::<i32>()) {
        let function = Function1::new(|n: i32| n.wrapping_mul(2));

        let composed = function.clone().and_then(identity);

        prop_assert_eq!(composed.apply(x), function.apply(x));
    }

    /// Associativity: f.compose(g).compose(h) == f.compose(|x| g(h(x)))
    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let inner = |n: i32| n.wrapping_add(1);
        let middle = |n: i32| n.wrapping_mul(2);
        let outer = Function1::new(|n: i32| n.wrapping_sub(3));

        let stepwise = outer.clone().compose(middle).compose(inner);
        let fused = outer.compose(move |n: i32| middle(inner(n)));

        prop_assert_eq!(stepwise.apply(x), fused.apply(x));
    }

    /// Per-argument compose then and_then matches direct evaluation.
    #[test]
    fn prop_compose_and_then_matches_direct(x in any::<i16>(), y in any::<i16>()) {
        let add = Function2::new(|a: i32, b: i32| a.wrapping_add(b));
        let pipeline = add
            .compose(|x: i16| i32::from(x).wrapping_mul(2), |y: i16| i32::from(y).wrapping_add(1))
            .and_then(|r| r.to_string());

        let expected = (i32::from(x).wrapping_mul(2))
            .wrapping_add(i32::from(y).wrapping_add(1))
            .to_string();

        prop_assert_eq!(pipeline.apply(x, y), expected);
    }

    /// constant(k) composed before any function pins its result.
    #[test]
    fn prop_constant_pins_the_argument(k in any::<i32>(), x in any::<i32>()) {
        let function = Function1::new(|n: i32| n.wrapping_mul(3));
        let pinned = function.clone().compose(constant(k));

        prop_assert_eq!(pinned.apply(x), function.apply(k));
    }
}

// =============================================================================
// Currying / Partial Application Laws
// =============================================================================

proptest! {
    /// curried(f)(a)(b) == f(a, b)
    #[test]
    fn prop_curry2_round_trip(a in any::<i32>(), b in any::<i32>()) {
        let function = Function2::new(|a: i32, b: i32| a.wrapping_sub(b));

        prop_assert_eq!(
            function.clone().curried().apply(a).apply(b),
            function.apply(a, b)
        );
    }

    /// curried(f)(a)(b)(c) == f(a, b, c)
    #[test]
    fn prop_curry3_round_trip(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let function = Function3::new(|a: i32, b: i32, c: i32| {
            a.wrapping_mul(100).wrapping_add(b.wrapping_mul(10)).wrapping_add(c)
        });

        prop_assert_eq!(
            function.clone().curried().apply(a).apply(b).apply(c),
            function.apply(a, b, c)
        );
    }

    /// apply_partially fixes a prefix without changing the result.
    #[test]
    fn prop_partial_application_prefix(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let function = Function3::new(|a: i32, b: i32, c: i32| {
            a.wrapping_mul(100).wrapping_add(b.wrapping_mul(10)).wrapping_add(c)
        });

        prop_assert_eq!(
            function.clone().apply_partially(a).apply(b, c),
            function.apply(a, b, c)
        );
        prop_assert_eq!(
            function.clone().apply_partially2(a, b).apply(c),
            function.apply(a, b, c)
        );
    }
}

// =============================================================================
// Reversal and Tupling Laws
// =============================================================================

proptest! {
    /// reversed(f)(a, b) == f(b, a), and flip agrees on the plain closure.
    #[test]
    fn prop_reversal_definition(a in any::<i32>(), b in any::<i32>()) {
        fn subtract(a: i32, b: i32) -> i32 {
            a.wrapping_sub(b)
        }

        let function = Function2::new(subtract);
        let reversed = function.clone().reversed();
        let flipped = flip(subtract);

        prop_assert_eq!(reversed.apply(a, b), function.apply(b, a));
        prop_assert_eq!(reversed.apply(a, b), flipped(a, b));
    }

    /// Double reversal restores the original behavior.
    #[test]
    fn prop_double_reversal_is_identity(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let function = Function3::new(|a: i32, b: i32, c: i32| {
            a.wrapping_mul(100).wrapping_add(b.wrapping_mul(10)).wrapping_add(c)
        });

        prop_assert_eq!(
            function.clone().reversed().reversed().apply(a, b, c),
            function.apply(a, b, c)
        );
    }

    /// tupled(f)((a, b)) == f(a, b)
    #[test]
    fn prop_tupled_forwards_elementwise(a in any::<i32>(), b in any::<i32>()) {
        let function = Function2::new(|a: i32, b: i32| a.wrapping_add(b));

        prop_assert_eq!(
            function.clone().tupled().apply((a, b)),
            function.apply(a, b)
        );
    }
}

// =============================================================================
// Memoization Transparency
// =============================================================================

proptest! {
    /// memoized(f)(x) == f(x) for pure f, over fresh and repeated keys.
    #[test]
    fn prop_memoized_is_transparent(inputs in proptest::collection::vec(any::<i16>(), 1..32)) {
        let function = Function1::new(|x: i16| i32::from(x).wrapping_mul(7));
        let memoized = function.clone().memoized();

        for x in inputs {
            prop_assert_eq!(memoized.apply(x), function.apply(x));
            // A second call hits the cache and must agree as well.
            prop_assert_eq!(memoized.apply(x), function.apply(x));
        }
    }
}
