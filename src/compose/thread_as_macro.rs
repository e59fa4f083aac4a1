//! The `thread_as!` macro for named-binding value threading.
//!
//! This module provides the [`thread_as!`] macro, which behaves exactly like
//! [`thread_first!`](crate::thread_first) but lets each step name the value
//! it receives. The explicit binding exists purely for call-site readability.

/// Threads a value through a series of named transformations.
///
/// Each segment is written `name => expression`: the accumulated value is
/// bound to `name` for the duration of that segment's body, and the body's
/// result becomes the input of the next segment. Semantically this is
/// identical to threading through closures; the named form only makes the
/// bound variable visible at the call site.
///
/// # Syntax
///
/// - `thread_as!(x)` - Returns `x` unchanged
/// - `thread_as!(x, n => body)` - Returns `body` with `n` bound to `x`
/// - `thread_as!(x, n => body1, m => body2)` - Feeds `body1` into `body2`
///
/// # Examples
///
/// ## Naming intermediate values
///
/// ```
/// use optpipe::thread_as;
///
/// let result = thread_as!(
///     5,
///     n => n * 2,
///     doubled => doubled + 1,
/// );
/// assert_eq!(result, 11);
/// ```
///
/// ## Placing the value anywhere in the step
///
/// ```
/// use optpipe::thread_as;
///
/// let result = thread_as!(
///     "world",
///     name => format!("hello, {name}"),
///     greeting => greeting.len(),
/// );
/// assert_eq!(result, 12);
/// ```
#[macro_export]
macro_rules! thread_as {
    // Value only: return as is
    ($value:expr $(,)?) => {
        $value
    };

    // Single binding: evaluate the body with the value bound
    ($value:expr, $name:ident => $body:expr $(,)?) => {{
        let $name = $value;
        $body
    }};

    // Multiple bindings: fold left to right
    ($value:expr, $name:ident => $body:expr, $($rest:tt)+) => {
        $crate::thread_as!(
            {
                let $name = $value;
                $body
            },
            $($rest)+
        )
    };
}
