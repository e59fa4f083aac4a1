//! The `thread_last!` macro for trailing-position value threading.
//!
//! This module provides the [`thread_last!`] macro. For unary functions,
//! threading a value into first or last position is the same operation, so
//! the chaining behavior here matches
//! [`thread_first!`](crate::thread_first); the difference appears with
//! curried two-argument functions, covered by
//! [`thread_last_partial`](crate::compose::thread_last_partial).

/// Threads a value through a series of unary functions from left to right.
///
/// `thread_last!(x, f, g)` is equivalent to `g(f(x))`. For functions of
/// arity 1 the first- and last-position threads coincide; use
/// [`thread_last_partial`](crate::compose::thread_last_partial) to bind the
/// trailing argument of a curried two-argument function and obtain a
/// function awaiting the leading one.
///
/// # Syntax
///
/// - `thread_last!(x)` - Returns `x` unchanged
/// - `thread_last!(x, f)` - Returns `f(x)`
/// - `thread_last!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use optpipe::thread_last;
///
/// fn sum(values: Vec<i32>) -> i32 { values.into_iter().sum() }
/// fn keep_even(values: Vec<i32>) -> Vec<i32> {
///     values.into_iter().filter(|n| n % 2 == 0).collect()
/// }
///
/// let result = thread_last!(vec![1, 2, 3, 4], keep_even, sum);
/// assert_eq!(result, 6);
/// ```
///
/// ## Agreement with thread_first for unary functions
///
/// ```
/// use optpipe::{thread_first, thread_last};
///
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// assert_eq!(
///     thread_last!(5, double, add_one),
///     thread_first!(5, double, add_one),
/// );
/// ```
#[macro_export]
macro_rules! thread_last {
    // Value only: return as is
    ($value:expr) => {
        $value
    };

    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // Multiple functions: apply left to right recursively
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::thread_last!($function($value), $($remaining_functions),+)
    };
}
