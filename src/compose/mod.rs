//! Threading macros and function composition utilities.
//!
//! This module provides the pipeline-building half of the library:
//!
//! - `thread_first!`: left-to-right value threading, with `.field` accessor
//!   segments
//! - `thread_last!`: the trailing-position thread; identical chaining for
//!   unary functions, with [`thread_last_partial`] covering the curried case
//! - `thread_as!`: threading with an explicitly named binding per step
//! - `compose!`: right-to-left function composition (the point-free
//!   complement of threading)
//! - [`compose_option()`](compose_option()) / `compose_option!`: Kleisli composition of
//!   `Option`-returning functions, short-circuiting on absence
//!
//! # Helper Functions
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: a function that always returns the same value
//! - [`flip`]: swaps the arguments of a binary function
//! - [`thread_last_partial`]: binds the trailing argument of a curried
//!   function
//!
//! # Examples
//!
//! ## Threading (left-to-right)
//!
//! ```
//! use optpipe::thread_first;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // thread_first!(x, f, g) = g(f(x))
//! let result = thread_first!(5, double, add_one);
//! assert_eq!(result, 11);
//! ```
//!
//! ## Kleisli composition
//!
//! ```
//! use optpipe::compose::compose_option;
//!
//! fn parse(input: &str) -> Option<i32> {
//!     input.parse().ok()
//! }
//!
//! fn half(n: i32) -> Option<i32> {
//!     if n % 2 == 0 { Some(n / 2) } else { None }
//! }
//!
//! let parse_and_half = compose_option(parse, half);
//! assert_eq!(parse_and_half("42"), Some(21));
//! assert_eq!(parse_and_half("7"), None);
//! ```
//!
//! # Evaluation order
//!
//! Thread macros expand to nested eager calls: every segment runs before the
//! one to its right, and the whole chain is just function application - no
//! segment is deferred. The composition forms (`compose!`,
//! [`compose_option()`](compose_option())) build a function without running anything until it is
//! called.

mod compose_macro;
mod kleisli;
mod thread_as_macro;
mod thread_first_macro;
mod thread_last_macro;
mod utils;

// Re-export helper functions
pub use kleisli::compose_option;
pub use utils::{constant, flip, identity, thread_last_partial};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::compose_option;
pub use crate::thread_as;
pub use crate::thread_first;
pub use crate::thread_last;
