//! Arity-specific callable types and their combinators.
//!
//! This module provides [`Function1`], [`Function2`] and [`Function3`]:
//! immutable wrappers around `Fn` closures of arity one, two and three.
//! Each type carries the same family of combinators, every one of which
//! returns a fresh callable:
//!
//! - [`Function2::compose`]: apply per-argument transforms before invocation
//! - [`Function2::and_then`]: apply a transform to the result
//! - [`Function2::curried`]: convert into a chain of unary callables
//! - [`Function2::apply_partially`]: fix a prefix of arguments
//! - [`Function2::reversed`]: reverse the argument order
//! - [`Function2::tupled`]: take the arguments as one tuple
//! - [`Function2::memoized`]: cache results per distinct argument tuple
//!
//! # Helper Functions
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: a function that always returns the same value
//! - [`flip`]: swaps the arguments of a plain binary closure
//!
//! # Examples
//!
//! ```rust
//! use funcomb::function::Function3;
//!
//! let weigh = Function3::new(|a: i32, b: i32, c: i32| a * 100 + b * 10 + c);
//!
//! // Currying round-trip: curried(f)(1)(2)(3) == f(1, 2, 3)
//! let curried = weigh.clone().curried();
//! assert_eq!(curried.apply(1).apply(2).apply(3), 123);
//!
//! // Reversal: reversed(f)(1, 2, 3) == f(3, 2, 1)
//! assert_eq!(weigh.reversed().apply(1, 2, 3), 321);
//! ```
//!
//! # Laws
//!
//! ## Composition Laws
//!
//! - **Associativity**: `f.compose(g).compose(h) == f.compose(|x| g(h(x)))`
//! - **Left Identity**: `f.and_then(identity) == f`
//! - **Right Identity**: `f.compose(identity) == f`
//!
//! ## Currying Laws
//!
//! - **Round-trip**: `f.curried().apply(a).apply(b) == f.apply(a, b)`
//!
//! ## Reversal Laws
//!
//! - **Double Reversal**: `f.reversed().reversed() == f`
//!
//! ## Memoization Laws
//!
//! - **Transparency**: `f.memoized().apply(args) == f.apply(args)`
//! - **At-most-once**: the wrapped closure runs at most once per distinct
//!   argument tuple, for the lifetime of the memoized callable
//! - **Idempotence**: `f.memoized().memoized() == f.memoized()` (no second
//!   cache layer is ever stacked)

mod binary;
mod memo;
mod ternary;
mod unary;
mod utils;

pub use binary::Function2;
pub use ternary::Function3;
pub use unary::Function1;
pub use utils::{constant, flip, identity};
