//! The `thread_first!` macro for left-to-right value threading.
//!
//! This module provides the [`thread_first!`] macro which pipes a value
//! through a series of functions or field accessors from left to right.

/// Threads a value through a series of functions from left to right.
///
/// `thread_first!(x, f, g)` is equivalent to `g(f(x))`: the value flows
/// through the transformations in the order they are written, each step
/// applied eagerly before the next one runs.
///
/// A segment may also be a field accessor written as `.field`, which projects
/// the named field from the accumulated value - `thread_first!(value, .field)`
/// is `value.field`. Passing a plain accessor closure (`|v| v.field`) is
/// equivalent; the `.field` form is only shorthand.
///
/// # Syntax
///
/// - `thread_first!(x)` - Returns `x` unchanged
/// - `thread_first!(x, f)` - Returns `f(x)`
/// - `thread_first!(x, f, g)` - Returns `g(f(x))`
/// - `thread_first!(x, .field, f)` - Returns `f(x.field)`
///
/// # Type Requirements
///
/// Each function segment only needs to implement [`FnOnce`], since each is
/// called exactly once. Errors raised by a segment propagate unmodified; the
/// macro adds no handling of its own.
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use optpipe::thread_first;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // thread_first!(x, f, g) = g(f(x)) = add_one(double(5)) = 11
/// let result = thread_first!(5, double, add_one);
/// assert_eq!(result, 11);
/// ```
///
/// ## Field accessor segments
///
/// ```
/// use optpipe::thread_first;
///
/// struct User {
///     name: String,
/// }
///
/// let user = User { name: "ada".to_string() };
/// let length = thread_first!(user, .name, |name: String| name.len());
/// assert_eq!(length, 3);
/// ```
///
/// ## Accessor closures work identically
///
/// ```
/// use optpipe::thread_first;
///
/// struct User {
///     name: String,
/// }
///
/// let user = User { name: "ada".to_string() };
/// let name = thread_first!(user, |u: User| u.name);
/// assert_eq!(name, "ada");
/// ```
///
/// ## Type conversion through the pipeline
///
/// ```
/// use optpipe::thread_first;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let result = thread_first!(12345, to_string, get_length);
/// assert_eq!(result, 5);
/// ```
#[macro_export]
macro_rules! thread_first {
    // Value only: return as is
    ($value:expr $(,)?) => {
        $value
    };

    // Field accessor segment: project and continue
    ($value:expr, .$field:ident $(, $($rest:tt)*)?) => {
        $crate::thread_first!($value.$field $(, $($rest)*)?)
    };

    // Function segment: apply and continue
    ($value:expr, $function:expr $(, $($rest:tt)*)?) => {
        $crate::thread_first!($function($value) $(, $($rest)*)?)
    };
}
