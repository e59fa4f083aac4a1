//! Alternative type class - left-biased choice with a failure value.
//!
//! This module provides the [`Alternative`] trait for `Option` and the
//! [`AlternativeVec`] extension trait for `Vec`, adding on top of
//! [`Applicative`](super::applicative::Applicative):
//!
//! - A failure or empty computation (`empty`)
//! - Left-biased choice between alternatives (`alt`, `alt_else`)
//! - Conditional filtering (`guard`)
//! - First-success selection over many candidates (`choice`)
//!
//! The lazy form [`alt_else`](Alternative::alt_else) is the recovery
//! mechanism for absence: the fallback is supplied as a thunk and is invoked
//! at most once, and only when the left-hand side is absent. That
//! non-evaluation guarantee is part of the contract, not an optimization.
//!
//! # Laws
//!
//! All implementations must satisfy:
//!
//! ## Left Identity Law
//!
//! ```text
//! empty.alt(x) == x
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! x.alt(empty) == x
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! (x.alt(y)).alt(z) == x.alt(y.alt(z))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optpipe::typeclass::Alternative;
//!
//! let first: Option<i32> = None;
//! assert_eq!(first.alt_else(|| Some(42)), Some(42));
//!
//! // A present left side returns unchanged and the thunk never runs
//! let present = Some(1);
//! assert_eq!(present.alt_else(|| unreachable!()), Some(1));
//! ```

use super::applicative::Applicative;

/// A type class for applicative functors with a monoid structure.
///
/// `Alternative` extends `Applicative` with the ability to represent failure
/// and combine computations with left-biased choice.
///
/// # Laws
///
/// ## Left Identity
///
/// ```text
/// empty.alt(x) == x
/// ```
///
/// ## Right Identity
///
/// ```text
/// x.alt(empty) == x
/// ```
///
/// ## Associativity
///
/// ```text
/// (x.alt(y)).alt(z) == x.alt(y.alt(z))
/// ```
///
/// # Examples
///
/// ```rust
/// use optpipe::typeclass::Alternative;
///
/// let first: Option<i32> = None;
/// assert_eq!(first.alt(Some(42)), Some(42));
///
/// let first = Some(1);
/// assert_eq!(first.alt(Some(2)), Some(1));
/// ```
pub trait Alternative: Applicative {
    /// Returns the identity element for `alt`.
    ///
    /// Represents a failed or empty computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optpipe::typeclass::Alternative;
    ///
    /// let empty: Option<i32> = <Option<()>>::empty();
    /// assert_eq!(empty, None);
    /// ```
    fn empty<B>() -> Self::WithType<B>;

    /// Combines two alternatives eagerly, returning the first success.
    ///
    /// Both sides are already evaluated by the time `alt` runs. When the
    /// fallback is expensive or has observable side effects, use
    /// [`alt_else`](Alternative::alt_else) so it is only computed on demand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optpipe::typeclass::Alternative;
    ///
    /// let first: Option<i32> = None;
    /// assert_eq!(first.alt(Some(42)), Some(42));
    ///
    /// // Already successful, alternative is ignored
    /// assert_eq!(Some(1).alt(Some(2)), Some(1));
    /// ```
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Combines with a lazily produced alternative, returning the first
    /// success.
    ///
    /// If `self` is present it is returned unchanged and `alternative` is
    /// **never invoked** - side effects inside the thunk are observably
    /// skipped. If `self` is absent, the thunk runs exactly once and its
    /// result is returned. Chains are left-associative: each later thunk runs
    /// only if everything before it was absent.
    ///
    /// # Arguments
    ///
    /// * `alternative` - A zero-argument thunk producing the fallback
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optpipe::typeclass::Alternative;
    ///
    /// let absent: Option<i32> = None;
    /// let result = absent.alt_else(|| None).alt_else(|| Some(5));
    /// assert_eq!(result, Some(5));
    ///
    /// // The thunk is skipped entirely when the left side is present
    /// let mut invocations = 0;
    /// let present = Some(1).alt_else(|| {
    ///     invocations += 1;
    ///     Some(2)
    /// });
    /// assert_eq!(present, Some(1));
    /// assert_eq!(invocations, 0);
    /// ```
    #[must_use]
    fn alt_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self;

    /// Conditionally succeeds with `()` or fails.
    ///
    /// Returns `pure(())` if the condition is true, otherwise `empty`.
    /// Useful for conditional filtering in monadic chains.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optpipe::typeclass::{Alternative, Functor};
    ///
    /// fn filter_positive(n: i32) -> Option<i32> {
    ///     <Option<()>>::guard(n > 0).fmap(move |_| n)
    /// }
    ///
    /// assert_eq!(filter_positive(5), Some(5));
    /// assert_eq!(filter_positive(-3), None);
    /// ```
    #[inline]
    #[must_use]
    fn guard(condition: bool) -> Self::WithType<()>
    where
        Self: Sized,
    {
        if condition {
            Self::pure(())
        } else {
            Self::empty()
        }
    }

    /// Chooses from multiple alternatives, returning the first success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optpipe::typeclass::Alternative;
    ///
    /// let alternatives = vec![None, Some(1), Some(2)];
    /// assert_eq!(Option::choice(alternatives), Some(1));
    ///
    /// let all_none: Vec<Option<i32>> = vec![None, None];
    /// assert_eq!(Option::choice(all_none), None);
    /// ```
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized;
}

impl<A> Alternative for Option<A> {
    #[inline]
    fn empty<B>() -> Option<B> {
        None
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.or(alternative)
    }

    #[inline]
    fn alt_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        self.or_else(alternative)
    }

    #[inline]
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives.into_iter().find(Self::is_some).flatten()
    }
}

/// Extension trait giving `Vec` its alternative operations.
///
/// The `Vec` instance represents non-deterministic choice: `alt` concatenates
/// the two vectors, combining all possibilities, and the empty vector is the
/// identity.
pub trait AlternativeVec: Sized {
    /// The element type of the Vec.
    type VecInner;

    /// Returns the identity element for `alt` (the empty vector).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optpipe::typeclass::AlternativeVec;
    ///
    /// let empty: Vec<i32> = Vec::<()>::empty();
    /// assert!(empty.is_empty());
    /// ```
    #[must_use]
    fn empty<B>() -> Vec<B> {
        Vec::new()
    }

    /// Combines two vectors by concatenation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optpipe::typeclass::AlternativeVec;
    ///
    /// assert_eq!(vec![1, 2].alt(vec![3]), vec![1, 2, 3]);
    /// ```
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Conditionally yields a singleton `()` or the empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optpipe::typeclass::AlternativeVec;
    ///
    /// assert_eq!(Vec::<()>::guard(true), vec![()]);
    /// assert!(Vec::<()>::guard(false).is_empty());
    /// ```
    #[must_use]
    fn guard(condition: bool) -> Vec<()> {
        if condition { vec![()] } else { Vec::new() }
    }
}

impl<A> AlternativeVec for Vec<A> {
    type VecInner = A;

    #[inline]
    fn alt(mut self, alternative: Self) -> Self {
        self.extend(alternative);
        self
    }
}
