//! # optpipe
//!
//! Piping and combinator operators for `Option` and `Vec` pipelines.
//!
//! ## Overview
//!
//! This library packages the small set of combinators that turn `Option` and
//! `Vec` into pipeline-friendly containers:
//!
//! - **Type Classes**: [`Functor`](typeclass::Functor),
//!   [`Applicative`](typeclass::Applicative), [`Monad`](typeclass::Monad),
//!   and [`Alternative`](typeclass::Alternative) for `Option`, with
//!   [`FunctorVec`](typeclass::FunctorVec),
//!   [`ApplicativeVec`](typeclass::ApplicativeVec),
//!   [`MonadVec`](typeclass::MonadVec), and
//!   [`AlternativeVec`](typeclass::AlternativeVec) as the `Vec` instances
//! - **Threading**: `thread_first!`, `thread_last!`, and `thread_as!` macros
//!   for left-to-right value pipelines
//! - **Composition**: the `compose!` macro and Kleisli composition via
//!   [`compose_option`](compose::compose_option()) / `compose_option!`
//!
//! ## Evaluation order
//!
//! Rust has no user-definable infix operators, so this library exposes each
//! combinator as a method or macro and relies on chaining for associativity.
//! Method chains and thread macros both evaluate strictly left to right, and
//! every step is applied eagerly before the next one runs:
//!
//! ```rust
//! use optpipe::typeclass::{Alternative, Functor, Monad};
//!
//! fn half(n: i32) -> Option<i32> {
//!     if n % 2 == 0 { Some(n / 2) } else { None }
//! }
//!
//! // The bind applies before the alternative: half(10) succeeds, so the
//! // fallback thunk is never run.
//! let result = Some(10).flat_map(half).fmap(|n| n + 1).alt_else(|| Some(0));
//! assert_eq!(result, Some(6));
//! ```
//!
//! Where an infix rendition would need a precedence table to disambiguate a
//! chain mixing bind, alternative, and application, the method form makes the
//! order syntactically explicit: whatever is written leftmost happens first.
//! The sole deferred computation in the library is the thunk passed to
//! [`alt_else`](typeclass::Alternative::alt_else), which is invoked at most
//! once and only when the left-hand side is absent.
//!
//! ## Feature Flags
//!
//! - `typeclass`: container combinator traits (Functor, Monad, etc.)
//! - `compose`: threading macros and Kleisli composition
//!
//! ## Example
//!
//! ```rust
//! use optpipe::thread_first;
//! use optpipe::typeclass::{Functor, Monad};
//!
//! fn parse(input: &str) -> Option<i32> {
//!     input.parse().ok()
//! }
//!
//! let shouted = thread_first!("42", parse)
//!     .flat_map(|n| if n > 0 { Some(n) } else { None })
//!     .fmap(|n| format!("{n}!"));
//! assert_eq!(shouted, Some("42!".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use optpipe::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;
