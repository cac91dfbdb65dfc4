//! The unary callable type [`Function1`].

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use super::memo::MemoCache;

type DynFn1<A, R> = Arc<dyn Fn(A) -> R + Send + Sync>;

/// A callable from one argument to one result.
///
/// `Function1<A, R>` wraps an `Fn(A) -> R` closure behind an [`Arc`], so
/// clones are cheap and share the same underlying closure. The type is
/// immutable: every combinator returns a new callable and leaves `self`
/// untouched (combinators consume `self`; clone first if you need to keep
/// the original).
///
/// Identity is reference-based — two behaviorally identical callables are
/// not comparable, and no `PartialEq` is provided.
///
/// # Thread Safety
///
/// The wrapped closure must be `Send + Sync`, so a `Function1` (memoized or
/// not) can be shared freely between threads.
///
/// # Examples
///
/// ## Composition
///
/// ```rust
/// use funcomb::function::Function1;
///
/// let double = Function1::new(|x: i32| x * 2);
///
/// // compose runs the transform *before* the callable,
/// // and_then runs it *after*.
/// let shifted = double.compose(|x: i32| x + 1).and_then(|r| r.to_string());
/// assert_eq!(shifted.apply(4), "10"); // ((4 + 1) * 2).to_string()
/// ```
///
/// ## Memoization
///
/// ```rust
/// use funcomb::function::Function1;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counted = Arc::clone(&calls);
/// let slow_square = Function1::new(move |x: i64| {
///     counted.fetch_add(1, Ordering::SeqCst);
///     x * x
/// })
/// .memoized();
///
/// assert_eq!(slow_square.apply(12), 144);
/// assert_eq!(slow_square.apply(12), 144);
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// ```
pub struct Function1<A, R> {
    inner: Inner1<A, R>,
}

/// The explicit plain-vs-memoized tag.
///
/// `memoized()` inspects this tag to return an already-memoized callable
/// unchanged instead of stacking a second cache on top of the first.
enum Inner1<A, R> {
    Plain(DynFn1<A, R>),
    Memoized(DynFn1<A, R>),
}

impl<A: 'static, R: 'static> Function1<A, R> {
    /// Wraps a closure as a unary callable.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self {
            inner: Inner1::Plain(Arc::new(function)),
        }
    }

    /// Invokes the callable.
    ///
    /// Combinator layers never catch or translate failures: a panic raised
    /// by the wrapped closure propagates to the caller unchanged.
    pub fn apply(&self, input: A) -> R {
        match &self.inner {
            Inner1::Plain(function) | Inner1::Memoized(function) => function(input),
        }
    }

    /// Returns `true` if this callable already carries a memo cache.
    pub const fn is_memoized(&self) -> bool {
        matches!(self.inner, Inner1::Memoized(_))
    }

    /// Applies `before` to the argument before invoking this callable.
    ///
    /// `f.compose(g).apply(x) == f.apply(g(x))`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcomb::function::Function1;
    ///
    /// let double = Function1::new(|x: i32| x * 2);
    /// let double_len = double.compose(|s: &str| s.len() as i32);
    /// assert_eq!(double_len.apply("four"), 8);
    /// ```
    pub fn compose<X, F>(self, before: F) -> Function1<X, R>
    where
        X: 'static,
        F: Fn(X) -> A + Send + Sync + 'static,
    {
        Function1::new(move |input| self.apply(before(input)))
    }

    /// Applies `after` to the result of this callable.
    ///
    /// `f.and_then(g).apply(x) == g(f.apply(x))`
    pub fn and_then<S, F>(self, after: F) -> Function1<A, S>
    where
        S: 'static,
        F: Fn(R) -> S + Send + Sync + 'static,
    {
        Function1::new(move |input| after(self.apply(input)))
    }

    /// Reverses the argument order.
    ///
    /// A unary callable has nothing to reverse; this returns the callable
    /// unchanged and exists for uniformity with the higher arities.
    pub fn reversed(self) -> Self {
        self
    }

    /// Wraps this callable with a cache keyed by its argument.
    ///
    /// The returned callable computes each distinct input at most once and
    /// serves every later (or concurrently racing) call for that input from
    /// the cache. The cache is unbounded, lives as long as the callable, and
    /// is shared by its clones.
    ///
    /// Calling `memoized` on an already-memoized callable returns it
    /// unchanged — caches are never stacked.
    ///
    /// The internal lock is held across the wrapped computation, so while
    /// any input is being computed, invocations for other inputs wait. See
    /// the crate-level docs for the rationale behind this tradeoff.
    ///
    /// If the wrapped closure panics, the panic propagates and nothing is
    /// cached for that input; the next call with the same input re-attempts
    /// the computation.
    pub fn memoized(self) -> Self
    where
        A: Clone + Eq + Hash + Send,
        R: Clone + Send,
    {
        match self.inner {
            Inner1::Memoized(_) => self,
            Inner1::Plain(function) => {
                let cache = MemoCache::new();
                let call =
                    move |input: A| cache.get_or_compute(input, |key| function(key.clone()));
                Self {
                    inner: Inner1::Memoized(Arc::new(call)),
                }
            }
        }
    }
}

impl<A, R> Clone for Function1<A, R> {
    fn clone(&self) -> Self {
        let inner = match &self.inner {
            Inner1::Plain(function) => Inner1::Plain(Arc::clone(function)),
            Inner1::Memoized(function) => Inner1::Memoized(Arc::clone(function)),
        };
        Self { inner }
    }
}

impl<A, R> fmt::Debug for Function1<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.inner {
            Inner1::Plain(_) => "plain",
            Inner1::Memoized(_) => "memoized",
        };
        formatter.debug_tuple("Function1").field(&tag).finish()
    }
}
