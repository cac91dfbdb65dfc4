//! Adapters that convert other shapes of computation into callables.
//!
//! Each adapter produces a [`Function1`] so the result can be fed through
//! the whole combinator family (composition, memoization, ...):
//!
//! - [`for_consumer`]: a side effect, returning the unit "no value" sentinel
//! - [`for_predicate`]: a boolean test
//! - [`for_supplier`]: a zero-argument producer that ignores its input
//! - [`for_map`] and friends: key lookup in a map, with a choice of
//!   miss policies
//! - [`lift`]: a partial function made total by returning an [`Option`]
//!
//! # Map Miss Policies
//!
//! A lookup can miss; the caller picks what happens:
//!
//! | constructor | on miss |
//! |---|---|
//! | [`for_map`] | panics with a fixed "no value for key" message |
//! | [`for_map_with_message`] | panics with a caller-supplied message |
//! | [`for_map_with_message_fn`] | panics with a lazily computed message |
//! | [`for_map_or_default`] | returns a caller-supplied default |
//! | [`try_for_map`] | returns `Err(KeyNotFoundError)` |

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::function::Function1;

/// Error returned by [`try_for_map`] lookups when the key is absent.
///
/// Carries the `Debug` rendering of the missing key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyNotFoundError {
    key: String,
}

impl KeyNotFoundError {
    /// The `Debug` rendering of the key that was not found.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for KeyNotFoundError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "no value for key {}", self.key)
    }
}

impl std::error::Error for KeyNotFoundError {}

/// Converts a side-effecting operation into a callable returning `()`.
///
/// The unit result is the "no value" sentinel that lets a pure side effect
/// be treated uniformly as a callable.
///
/// # Examples
///
/// ```rust
/// use funcomb::adapter::for_consumer;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let seen = Arc::new(AtomicUsize::new(0));
/// let sink = Arc::clone(&seen);
/// let record = for_consumer(move |value: usize| {
///     sink.fetch_add(value, Ordering::SeqCst);
/// });
///
/// record.apply(3);
/// record.apply(4);
/// assert_eq!(seen.load(Ordering::SeqCst), 7);
/// ```
pub fn for_consumer<A, F>(consumer: F) -> Function1<A, ()>
where
    A: 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Function1::new(move |input| consumer(input))
}

/// Converts a boolean test into a callable returning its result unchanged.
pub fn for_predicate<A, F>(predicate: F) -> Function1<A, bool>
where
    A: 'static,
    F: Fn(A) -> bool + Send + Sync + 'static,
{
    Function1::new(predicate)
}

/// Converts a zero-argument producer into a callable that ignores its input.
///
/// # Examples
///
/// ```rust
/// use funcomb::adapter::for_supplier;
///
/// let answer = for_supplier::<&str, _, _>(|| 42);
/// assert_eq!(answer.apply("ignored"), 42);
/// ```
pub fn for_supplier<A, R, F>(supplier: F) -> Function1<A, R>
where
    A: 'static,
    R: 'static,
    F: Fn() -> R + Send + Sync + 'static,
{
    Function1::new(move |_| supplier())
}

/// Converts a map into a lookup callable that panics on a miss.
///
/// # Panics
///
/// The returned callable panics with `no value for key {key:?}` when the
/// key is absent. Use [`for_map_or_default`] or [`try_for_map`] for
/// non-panicking policies.
///
/// # Examples
///
/// ```rust
/// use funcomb::adapter::for_map;
/// use std::collections::HashMap;
///
/// let lookup = for_map(HashMap::from([("a", 1)]));
/// assert_eq!(lookup.apply("a"), 1);
/// ```
pub fn for_map<K, V>(map: HashMap<K, V>) -> Function1<K, V>
where
    K: Eq + Hash + fmt::Debug + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    for_map_with_message_fn(map, |key| format!("no value for key {key:?}"))
}

/// Converts a map into a lookup callable that panics with a fixed,
/// caller-supplied message on a miss.
///
/// # Panics
///
/// The returned callable panics with `message` when the key is absent.
pub fn for_map_with_message<K, V>(map: HashMap<K, V>, message: impl Into<String>) -> Function1<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    let message = message.into();
    for_map_with_message_fn(map, move |_| message.clone())
}

/// Converts a map into a lookup callable that panics with a lazily computed
/// message on a miss.
///
/// `message` runs only when a lookup actually misses, so it may be as
/// expensive as it likes.
///
/// # Panics
///
/// The returned callable panics with `message(&key)` when the key is absent.
pub fn for_map_with_message_fn<K, V, F>(map: HashMap<K, V>, message: F) -> Function1<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
    F: Fn(&K) -> String + Send + Sync + 'static,
{
    Function1::new(move |key| {
        map.get(&key).map_or_else(|| panic!("{}", message(&key)), Clone::clone)
    })
}

/// Converts a map into a lookup callable that returns `default` on a miss.
///
/// # Examples
///
/// ```rust
/// use funcomb::adapter::for_map_or_default;
/// use std::collections::HashMap;
///
/// let lookup = for_map_or_default(HashMap::from([("a", 1)]), 0);
/// assert_eq!(lookup.apply("a"), 1);
/// assert_eq!(lookup.apply("b"), 0);
/// ```
pub fn for_map_or_default<K, V>(map: HashMap<K, V>, default: V) -> Function1<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    Function1::new(move |key| map.get(&key).cloned().unwrap_or_else(|| default.clone()))
}

/// Converts a map into a fallible lookup callable.
///
/// A miss yields `Err(KeyNotFoundError)` instead of panicking; this is the
/// `Result`-idiom rendering of the raising policies.
///
/// # Examples
///
/// ```rust
/// use funcomb::adapter::try_for_map;
/// use std::collections::HashMap;
///
/// let lookup = try_for_map(HashMap::from([("a", 1)]));
/// assert_eq!(lookup.apply("a"), Ok(1));
/// assert!(lookup.apply("b").is_err());
/// ```
pub fn try_for_map<K, V>(map: HashMap<K, V>) -> Function1<K, Result<V, KeyNotFoundError>>
where
    K: Eq + Hash + fmt::Debug + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    Function1::new(move |key| {
        map.get(&key).cloned().ok_or_else(|| KeyNotFoundError {
            key: format!("{key:?}"),
        })
    })
}

/// Lifts a partial function into a total callable returning an [`Option`].
///
/// The result is `None` exactly when the partial function itself yields
/// `None`. Panics are not converted: they still propagate to the caller.
///
/// # Examples
///
/// ```rust
/// use funcomb::adapter::lift;
///
/// let halve = lift(|x: i32| if x % 2 == 0 { Some(x / 2) } else { None });
/// assert_eq!(halve.apply(10), Some(5));
/// assert_eq!(halve.apply(5), None);
/// ```
pub fn lift<A, R, F>(partial: F) -> Function1<A, Option<R>>
where
    A: 'static,
    R: 'static,
    F: Fn(A) -> Option<R> + Send + Sync + 'static,
{
    Function1::new(partial)
}
