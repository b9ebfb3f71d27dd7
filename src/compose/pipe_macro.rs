//! The `pipe!` and `pipe_right!` macros.
//!
//! Both macros borrow their stages, so named function values can be reused
//! after the call.

/// Pipes a value through function values from left to right.
///
/// `pipe!(x, f, g, h)` evaluates `h(g(f(x)))` and returns
/// [`Result<Value>`](crate::Result), exactly like
/// [`compose::pipe`](crate::compose::pipe).
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `Ok(x)`
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Examples
///
/// ```
/// use pointfree::{numbers, pipe, Value};
///
/// let double = numbers::mul().bind([Value::from(2)]);
/// let add_one = numbers::add().bind([Value::from(1)]);
///
/// // double(5) = 10, add_one(10) = 11
/// assert_eq!(pipe!(5, double, add_one).unwrap(), Value::from(11));
/// // the stages are still available
/// assert_eq!(pipe!(1, add_one, double).unwrap(), Value::from(4));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $crate::compose::pipe($value, &[])
    };

    ($value:expr, $($stage:expr),+ $(,)?) => {
        $crate::compose::pipe($value, &[$(::core::clone::Clone::clone(&$stage)),+])
    };
}

/// Pipes a value through function values from right to left.
///
/// `pipe_right!(f, g, h; x)` evaluates `f(g(h(x)))`, exactly like
/// [`compose::pipe_right`](crate::compose::pipe_right).
///
/// # Examples
///
/// ```
/// use pointfree::{numbers, pipe_right, Value};
///
/// let double = numbers::mul().bind([Value::from(2)]);
/// let add_one = numbers::add().bind([Value::from(1)]);
///
/// // add_one(5) = 6, double(6) = 12
/// assert_eq!(pipe_right!(double, add_one; 5).unwrap(), Value::from(12));
/// ```
#[macro_export]
macro_rules! pipe_right {
    (; $value:expr) => {
        $crate::compose::pipe_right(&[], $value)
    };

    ($($stage:expr),+ $(,)? ; $value:expr) => {
        $crate::compose::pipe_right(&[$(::core::clone::Clone::clone(&$stage)),+], $value)
    };
}
