//! Helper combinators used alongside the callable types.
//!
//! - [`identity`]: the identity function (I combinator)
//! - [`constant`]: a function that always returns the same value (K combinator)
//! - [`flip`]: swaps the arguments of a plain binary closure (C combinator)
//!
//! [`flip`] is the free-function counterpart of
//! [`Function2::reversed`](super::Function2::reversed) for closures that have
//! not been wrapped in a callable type.

/// Returns the value unchanged.
///
/// The identity function is the unit of composition:
/// `f.compose(identity)` and `f.and_then(identity)` both behave as `f`.
///
/// # Examples
///
/// ```
/// use funcomb::function::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its
/// input.
///
/// # Examples
///
/// ```
/// use funcomb::function::constant;
///
/// let always_five = constant::<_, i32>(5);
/// assert_eq!(always_five(100), 5);
///
/// let values: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(values, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary closure.
///
/// `flip(f)(a, b) == f(b, a)`, and `flip(flip(f))` behaves as `f`.
///
/// # Examples
///
/// ```
/// use funcomb::function::flip;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let flipped = flip(divide);
/// assert!((flipped(2.0, 10.0) - 5.0).abs() < f64::EPSILON);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}
