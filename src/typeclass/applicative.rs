//! Applicative type class - applying functions within contexts.
//!
//! This module provides the [`Applicative`] trait for `Option` and the
//! [`ApplicativeVec`] extension trait for `Vec`. Both add, on top of mapping:
//!
//! - Lifting pure values into the container (`pure`)
//! - Combining two independent containers with a function (`map2`, `product`)
//! - Applying a contained function to a contained value (`apply`)
//!
//! For `Option`, `apply` is absorbing: if either the function or the value is
//! absent, the result is absent. For `Vec`, `apply` is the full cross-product
//! in outer-major order: every function, in order, applied to every value, in
//! order.
//!
//! # Laws
//!
//! All implementations must satisfy:
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optpipe::typeclass::{Applicative, ApplicativeVec};
//!
//! let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
//! assert_eq!(function.apply(Some(5)), Some(6));
//!
//! // Cross-product over sequences, outer-major
//! let functions: Vec<fn(i32) -> i32> = vec![|x| x * 2, |x| x + 3];
//! assert_eq!(functions.apply(vec![1, 2]), vec![2, 4, 4, 5]);
//! ```

use super::functor::Functor;

/// A type class for containers that support lifting and combined application.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// pure(|x| x).apply(v) == v
/// ```
///
/// ## Homomorphism Law
///
/// ```text
/// pure(f).apply(pure(x)) == pure(f(x))
/// ```
///
/// # Examples
///
/// ```rust
/// use optpipe::typeclass::Applicative;
///
/// let x: Option<i32> = <Option<()>>::pure(42);
/// assert_eq!(x, Some(42));
///
/// let sum = Some(3).map2(Some(4), |x, y| x + y);
/// assert_eq!(sum, Some(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optpipe::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either side represents absence, the result is absent.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative value
    /// * `function` - A function combining both inner values
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optpipe::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
    ///
    /// let absent: Option<i32> = None;
    /// assert_eq!(Some(1).map2(absent, |x, y| x + y), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        Self: Sized,
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    ///
    /// Equivalent to `map2(other, |a, b| (a, b))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optpipe::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product(Some("hello")), Some((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// Available when `Self` contains a function type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optpipe::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// assert_eq!(function.apply(Some(5)), Some(6));
    ///
    /// let absent: Option<fn(i32) -> i32> = None;
    /// assert_eq!(absent.apply(Some(5)), None);
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Some(function), Some(b)) => Some(function(b)),
            _ => None,
        }
    }
}

// =============================================================================
// Vec<A> Implementation
//
// Vec needs FnMut and Clone bounds because combining iterates the cartesian
// product of all elements, so this lives in a separate extension trait.
// =============================================================================

/// Extension trait giving `Vec` its applicative operations.
///
/// The `Vec` instance represents non-deterministic computation: combining two
/// vectors produces every pairing, ordered outer-major (the left/function
/// vector is the outer loop).
///
/// # Examples
///
/// ```rust
/// use optpipe::typeclass::ApplicativeVec;
///
/// let functions: Vec<fn(i32) -> i32> = vec![|x| x * 2, |x| x + 3];
/// let result = functions.apply(vec![1, 2]);
/// assert_eq!(result, vec![2, 4, 4, 5]);
/// ```
pub trait ApplicativeVec: Sized {
    /// The element type of the Vec.
    type VecInner;

    /// Lifts a pure value into a singleton Vec.
    fn pure<B>(value: B) -> Vec<B> {
        vec![value]
    }

    /// Combines two Vecs using a binary function (cartesian product).
    ///
    /// The result has `self.len() * other.len()` elements, with `self`
    /// iterated as the outer loop.
    fn map2<B: Clone, C, F>(self, other: Vec<B>, function: F) -> Vec<C>
    where
        Self::VecInner: Clone,
        F: FnMut(Self::VecInner, B) -> C;

    /// Creates the cartesian product of two Vecs as tuples.
    fn product<B: Clone>(self, other: Vec<B>) -> Vec<(Self::VecInner, B)>
    where
        Self::VecInner: Clone;

    /// Applies every function in this Vec to every value in another Vec.
    ///
    /// The result length is `self.len() * other.len()`; ordering is
    /// outer-major, so all applications of the first function come before any
    /// application of the second.
    fn apply<B: Clone, Output>(self, other: Vec<B>) -> Vec<Output>
    where
        Self::VecInner: FnMut(B) -> Output;
}

impl<A> ApplicativeVec for Vec<A> {
    type VecInner = A;

    #[inline]
    fn map2<B: Clone, C, F>(self, other: Vec<B>, mut function: F) -> Vec<C>
    where
        A: Clone,
        F: FnMut(A, B) -> C,
    {
        let capacity = self.len().saturating_mul(other.len());
        let mut result = Vec::with_capacity(capacity);
        for a in &self {
            for b in &other {
                result.push(function(a.clone(), b.clone()));
            }
        }
        result
    }

    #[inline]
    fn product<B: Clone>(self, other: Vec<B>) -> Vec<(A, B)>
    where
        A: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }

    #[inline]
    fn apply<B: Clone, Output>(self, other: Vec<B>) -> Vec<Output>
    where
        A: FnMut(B) -> Output,
    {
        let capacity = self.len().saturating_mul(other.len());
        let mut result = Vec::with_capacity(capacity);
        for mut function in self {
            for b in &other {
                result.push(function(b.clone()));
            }
        }
        result
    }
}
