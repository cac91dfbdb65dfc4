//! # funcomb
//!
//! N-ary function combinators for Rust: composition, currying, partial
//! application, reversal, and thread-safe memoization.
//!
//! ## Overview
//!
//! The crate is built around three arity-specific callable types —
//! [`Function1`](function::Function1), [`Function2`](function::Function2) and
//! [`Function3`](function::Function3) — each an immutable, cheaply cloneable
//! wrapper around a plain closure. Every combinator produces a new callable
//! and leaves its input untouched:
//!
//! - **Composition**: per-argument pre-transforms (`compose`) and a result
//!   post-transform (`and_then`)
//! - **Currying**: conversion into a chain of unary callables
//! - **Partial application**: fixing a prefix of arguments
//! - **Reversal** and **tupling** of the argument list
//! - **Memoization**: a cache keyed by the full argument tuple, guaranteeing
//!   at-most-one execution per distinct input even under concurrent access
//!
//! The `adapter` module (enabled by default) converts consumers, predicates,
//! suppliers, maps and partial functions into the callable types.
//!
//! ## Feature Flags
//!
//! - `adapter`: adapters for consumers, predicates, suppliers, map lookup and
//!   partial-function lifting (enabled by default)
//!
//! ## Example
//!
//! ```rust
//! use funcomb::function::Function2;
//!
//! let add = Function2::new(|a: i32, b: i32| a + b);
//!
//! // Combinators build new callables; the memoized one caches per (a, b).
//! let described = add.clone().and_then(|sum| format!("sum = {sum}"));
//! assert_eq!(described.apply(2, 3), "sum = 5");
//!
//! let cached = add.memoized();
//! assert_eq!(cached.apply(2, 3), 5);
//! assert_eq!(cached.apply(2, 3), 5); // served from the cache
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the callable types, the helper combinators and (with the
/// `adapter` feature) the adapter constructors.
///
/// # Usage
///
/// ```rust
/// use funcomb::prelude::*;
/// ```
pub mod prelude {
    pub use crate::function::*;

    #[cfg(feature = "adapter")]
    pub use crate::adapter::*;
}

pub mod function;

#[cfg(feature = "adapter")]
pub mod adapter;
