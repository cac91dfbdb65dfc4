//! The ternary callable type [`Function3`].

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use super::binary::Function2;
use super::memo::MemoCache;
use super::unary::Function1;

type DynFn3<A, B, C, R> = Arc<dyn Fn(A, B, C) -> R + Send + Sync>;

/// A callable from three arguments to one result.
///
/// Carries the same combinator family as [`Function1`] and [`Function2`];
/// see those types for the detailed semantics.
///
/// # Examples
///
/// ```rust
/// use funcomb::function::Function3;
///
/// let weigh = Function3::new(|a: i32, b: i32, c: i32| a * 100 + b * 10 + c);
///
/// assert_eq!(weigh.clone().apply_partially2(1, 2).apply(3), 123);
/// assert_eq!(weigh.tupled().apply((1, 2, 3)), 123);
/// ```
pub struct Function3<A, B, C, R> {
    inner: Inner3<A, B, C, R>,
}

enum Inner3<A, B, C, R> {
    Plain(DynFn3<A, B, C, R>),
    Memoized(DynFn3<A, B, C, R>),
}

impl<A: 'static, B: 'static, C: 'static, R: 'static> Function3<A, B, C, R> {
    /// Wraps a closure as a ternary callable.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A, B, C) -> R + Send + Sync + 'static,
    {
        Self {
            inner: Inner3::Plain(Arc::new(function)),
        }
    }

    /// Invokes the callable. Panics from the wrapped closure propagate
    /// unchanged.
    pub fn apply(&self, first: A, second: B, third: C) -> R {
        match &self.inner {
            Inner3::Plain(function) | Inner3::Memoized(function) => function(first, second, third),
        }
    }

    /// Returns `true` if this callable already carries a memo cache.
    pub const fn is_memoized(&self) -> bool {
        matches!(self.inner, Inner3::Memoized(_))
    }

    /// Applies one transform per argument before invoking this callable.
    ///
    /// `f.compose(g, h, k).apply(x, y, z) == f.apply(g(x), h(y), k(z))`
    pub fn compose<X, Y, Z, F, G, H>(
        self,
        before_first: F,
        before_second: G,
        before_third: H,
    ) -> Function3<X, Y, Z, R>
    where
        X: 'static,
        Y: 'static,
        Z: 'static,
        F: Fn(X) -> A + Send + Sync + 'static,
        G: Fn(Y) -> B + Send + Sync + 'static,
        H: Fn(Z) -> C + Send + Sync + 'static,
    {
        Function3::new(move |first, second, third| {
            self.apply(before_first(first), before_second(second), before_third(third))
        })
    }

    /// Applies `after` to the result of this callable.
    pub fn and_then<S, F>(self, after: F) -> Function3<A, B, C, S>
    where
        S: 'static,
        F: Fn(R) -> S + Send + Sync + 'static,
    {
        Function3::new(move |first, second, third| after(self.apply(first, second, third)))
    }

    /// Converts this callable into a chain of three unary callables.
    ///
    /// `f.curried().apply(a).apply(b).apply(c) == f.apply(a, b, c)`, and
    /// every intermediate stage is reusable with different later arguments.
    pub fn curried(self) -> Function1<A, Function1<B, Function1<C, R>>>
    where
        A: Clone + Send + Sync,
        B: Clone + Send + Sync,
    {
        Function1::new(move |first: A| {
            let function = self.clone();
            Function1::new(move |second: B| {
                let function = function.clone();
                let first = first.clone();
                Function1::new(move |third| function.apply(first.clone(), second.clone(), third))
            })
        })
    }

    /// Fixes the first argument, producing a binary callable.
    pub fn apply_partially(self, first: A) -> Function2<B, C, R>
    where
        A: Clone + Send + Sync,
    {
        Function2::new(move |second, third| self.apply(first.clone(), second, third))
    }

    /// Fixes the first two arguments, producing a unary callable.
    pub fn apply_partially2(self, first: A, second: B) -> Function1<C, R>
    where
        A: Clone + Send + Sync,
        B: Clone + Send + Sync,
    {
        Function1::new(move |third| self.apply(first.clone(), second.clone(), third))
    }

    /// Reverses the argument order.
    ///
    /// `f.reversed().apply(x, y, z) == f.apply(z, y, x)`
    pub fn reversed(self) -> Function3<C, B, A, R> {
        Function3::new(move |third, second, first| self.apply(first, second, third))
    }

    /// Converts this callable into a unary callable over one triple.
    pub fn tupled(self) -> Function1<(A, B, C), R> {
        Function1::new(move |(first, second, third)| self.apply(first, second, third))
    }

    /// Wraps this callable with a cache keyed by the `(A, B, C)` triple.
    ///
    /// Semantics are identical to [`Function1::memoized`].
    pub fn memoized(self) -> Self
    where
        A: Clone + Eq + Hash + Send,
        B: Clone + Eq + Hash + Send,
        C: Clone + Eq + Hash + Send,
        R: Clone + Send,
    {
        match self.inner {
            Inner3::Memoized(_) => self,
            Inner3::Plain(function) => {
                let cache = MemoCache::new();
                let call = move |first: A, second: B, third: C| {
                    cache.get_or_compute((first, second, third), |key| {
                        function(key.0.clone(), key.1.clone(), key.2.clone())
                    })
                };
                Self {
                    inner: Inner3::Memoized(Arc::new(call)),
                }
            }
        }
    }
}

impl<A, B, C, R> Clone for Function3<A, B, C, R> {
    fn clone(&self) -> Self {
        let inner = match &self.inner {
            Inner3::Plain(function) => Inner3::Plain(Arc::clone(function)),
            Inner3::Memoized(function) => Inner3::Memoized(Arc::clone(function)),
        };
        Self { inner }
    }
}

impl<A, B, C, R> fmt::Debug for Function3<A, B, C, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.inner {
            Inner3::Plain(_) => "plain",
            Inner3::Memoized(_) => "memoized",
        };
        formatter.debug_tuple("Function3").field(&tag).finish()
    }
}
