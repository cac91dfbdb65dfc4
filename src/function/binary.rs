//! The binary callable type [`Function2`].

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use super::memo::MemoCache;
use super::unary::Function1;

type DynFn2<A, B, R> = Arc<dyn Fn(A, B) -> R + Send + Sync>;

/// A callable from two arguments to one result.
///
/// Like [`Function1`], this is an immutable `Arc`-backed wrapper: clones are
/// cheap and share the underlying closure (and, once memoized, the cache).
///
/// # Examples
///
/// ```rust
/// use funcomb::function::Function2;
///
/// let add = Function2::new(|a: i32, b: i32| a + b);
///
/// // compose transforms each argument before invocation.
/// let scaled = add
///     .clone()
///     .compose(|x: i32| x * 2, |y: i32| y + 1)
///     .and_then(|r| r.to_string());
/// assert_eq!(scaled.apply(3, 4), "11"); // (3 * 2) + (4 + 1)
///
/// // Currying: curried(f)(a)(b) == f(a, b)
/// assert_eq!(add.curried().apply(3).apply(4), 7);
/// ```
pub struct Function2<A, B, R> {
    inner: Inner2<A, B, R>,
}

enum Inner2<A, B, R> {
    Plain(DynFn2<A, B, R>),
    Memoized(DynFn2<A, B, R>),
}

impl<A: 'static, B: 'static, R: 'static> Function2<A, B, R> {
    /// Wraps a closure as a binary callable.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A, B) -> R + Send + Sync + 'static,
    {
        Self {
            inner: Inner2::Plain(Arc::new(function)),
        }
    }

    /// Invokes the callable. Panics from the wrapped closure propagate
    /// unchanged.
    pub fn apply(&self, first: A, second: B) -> R {
        match &self.inner {
            Inner2::Plain(function) | Inner2::Memoized(function) => function(first, second),
        }
    }

    /// Returns `true` if this callable already carries a memo cache.
    pub const fn is_memoized(&self) -> bool {
        matches!(self.inner, Inner2::Memoized(_))
    }

    /// Applies one transform per argument before invoking this callable.
    ///
    /// `f.compose(g, h).apply(x, y) == f.apply(g(x), h(y))`
    pub fn compose<X, Y, F, G>(self, before_first: F, before_second: G) -> Function2<X, Y, R>
    where
        X: 'static,
        Y: 'static,
        F: Fn(X) -> A + Send + Sync + 'static,
        G: Fn(Y) -> B + Send + Sync + 'static,
    {
        Function2::new(move |first, second| self.apply(before_first(first), before_second(second)))
    }

    /// Applies `after` to the result of this callable.
    ///
    /// `f.and_then(g).apply(x, y) == g(f.apply(x, y))`
    pub fn and_then<S, F>(self, after: F) -> Function2<A, B, S>
    where
        S: 'static,
        F: Fn(R) -> S + Send + Sync + 'static,
    {
        Function2::new(move |first, second| after(self.apply(first, second)))
    }

    /// Converts this callable into a chain of unary callables.
    ///
    /// The intermediate stage is freely reusable: applying it several times
    /// with different second arguments yields independent results, because
    /// the fixed argument is cloned per application rather than shared
    /// mutably.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcomb::function::Function2;
    ///
    /// let multiply = Function2::new(|a: i32, b: i32| a * b);
    /// let curried = multiply.curried();
    ///
    /// let double = curried.apply(2);
    /// assert_eq!(double.apply(5), 10);
    /// assert_eq!(double.apply(7), 14);
    /// ```
    pub fn curried(self) -> Function1<A, Function1<B, R>>
    where
        A: Clone + Send + Sync,
    {
        Function1::new(move |first: A| {
            let function = self.clone();
            Function1::new(move |second| function.apply(first.clone(), second))
        })
    }

    /// Fixes the first argument, producing a unary callable.
    ///
    /// `f.apply_partially(a).apply(b) == f.apply(a, b)`
    pub fn apply_partially(self, first: A) -> Function1<B, R>
    where
        A: Clone + Send + Sync,
    {
        Function1::new(move |second| self.apply(first.clone(), second))
    }

    /// Reverses the argument order.
    ///
    /// `f.reversed().apply(x, y) == f.apply(y, x)`
    pub fn reversed(self) -> Function2<B, A, R> {
        Function2::new(move |second, first| self.apply(first, second))
    }

    /// Converts this callable into a unary callable over one pair.
    ///
    /// `f.tupled().apply((x, y)) == f.apply(x, y)`
    pub fn tupled(self) -> Function1<(A, B), R> {
        Function1::new(move |(first, second)| self.apply(first, second))
    }

    /// Wraps this callable with a cache keyed by the `(A, B)` argument pair.
    ///
    /// Semantics are identical to [`Function1::memoized`]: at most one
    /// execution per distinct pair (even under concurrent invocation), an
    /// unbounded caller-lifetime cache shared by clones, no stacking when
    /// called on an already-memoized callable, and no caching of panicked
    /// computations.
    pub fn memoized(self) -> Self
    where
        A: Clone + Eq + Hash + Send,
        B: Clone + Eq + Hash + Send,
        R: Clone + Send,
    {
        match self.inner {
            Inner2::Memoized(_) => self,
            Inner2::Plain(function) => {
                let cache = MemoCache::new();
                let call = move |first: A, second: B| {
                    cache.get_or_compute((first, second), |key| {
                        function(key.0.clone(), key.1.clone())
                    })
                };
                Self {
                    inner: Inner2::Memoized(Arc::new(call)),
                }
            }
        }
    }
}

impl<A, B, R> Clone for Function2<A, B, R> {
    fn clone(&self) -> Self {
        let inner = match &self.inner {
            Inner2::Plain(function) => Inner2::Plain(Arc::clone(function)),
            Inner2::Memoized(function) => Inner2::Memoized(Arc::clone(function)),
        };
        Self { inner }
    }
}

impl<A, B, R> fmt::Debug for Function2<A, B, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.inner {
            Inner2::Plain(_) => "plain",
            Inner2::Memoized(_) => "memoized",
        };
        formatter.debug_tuple("Function2").field(&tag).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subtract() -> Function2<i32, i32, i32> {
        Function2::new(|a, b| a - b)
    }

    #[test]
    fn apply_invokes_the_closure() {
        assert_eq!(subtract().apply(10, 3), 7);
    }

    #[test]
    fn reversed_swaps_the_arguments() {
        assert_eq!(subtract().reversed().apply(10, 3), -7);
    }

    #[test]
    fn curried_stage_is_reusable() {
        let from_ten = subtract().curried().apply(10);
        assert_eq!(from_ten.apply(3), 7);
        assert_eq!(from_ten.apply(4), 6);
    }

    #[test]
    fn tupled_forwards_elementwise() {
        assert_eq!(subtract().tupled().apply((10, 3)), 7);
    }
}
