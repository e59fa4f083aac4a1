//! Type class traits for the container combinators.
//!
//! This module provides the traits that give `Option` and `Vec` their
//! pipeline operations:
//!
//! - [`Functor`] / [`FunctorVec`]: mapping over container values
//! - [`Applicative`] / [`ApplicativeVec`]: applying functions within
//!   containers
//! - [`Monad`] / [`MonadVec`]: sequencing computations with dependency
//! - [`Alternative`] / [`AlternativeVec`]: left-biased choice with a failure
//!   value
//!
//! The free functions [`bind`] and [`bind_flip`] expose the bind operator in
//! both argument orders, and [`wrap_with`] injects a bare value through a
//! wrapping constructor.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types, so the `Option` traits are generic
//! over [`TypeConstructor`], a Generic-Associated-Type emulation that lets a
//! trait talk about "the same container with a different element type".
//! `Vec` needs `FnMut` and `Clone` bounds to visit every element, so its
//! instances live in separate `*Vec` extension traits.
//!
//! # Examples
//!
//! ```rust
//! use optpipe::typeclass::{Alternative, Functor, Monad};
//!
//! fn parse(input: &str) -> Option<i32> {
//!     input.parse().ok()
//! }
//!
//! let result = Some("41")
//!     .flat_map(parse)
//!     .fmap(|n| n + 1)
//!     .alt_else(|| Some(0));
//! assert_eq!(result, Some(42));
//! ```

mod alternative;
mod applicative;
mod functor;
mod higher;
mod monad;

pub use alternative::{Alternative, AlternativeVec};
pub use applicative::{Applicative, ApplicativeVec};
pub use functor::{Functor, FunctorVec, wrap_with};
pub use higher::TypeConstructor;
pub use monad::{Monad, MonadVec, bind, bind_flip};
