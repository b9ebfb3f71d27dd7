//! The `partial!` macro for partial application of function values.

/// Partially applies arguments to a function value.
///
/// Use `__` (double underscore) for slots filled at the call site. Every
/// other argument is converted with
/// [`Argument::from`](crate::function::Argument), so plain literals work.
/// The result is the same as [`Function::bind`](crate::function::Function::bind)
/// with the corresponding argument list, including the rule that a single
/// concrete argument fills the **second** slot.
///
/// `__` is matched as a literal token; importing
/// [`function::__`](crate::function::__) is not needed but does no harm.
///
/// # Syntax
///
/// - `partial!(f)` - A copy of `f`
/// - `partial!(f, value, __)` - `|b| f(value, b)`
/// - `partial!(f, __, value)` - `|a| f(a, value)`
/// - `partial!(f, v1, v2)` - `|| f(v1, v2)` (thunk)
///
/// # Examples
///
/// ```
/// use pointfree::function::{call, eval};
/// use pointfree::{numbers, partial, Value};
///
/// let ten_minus = partial!(numbers::sub(), 10, __);
/// assert_eq!(call(&ten_minus, 3).unwrap(), Value::from(7));
///
/// let minus_ten = partial!(numbers::sub(), __, 10);
/// assert_eq!(call(&minus_ten, 3).unwrap(), Value::from(-7));
///
/// let thunk = partial!(numbers::mul(), 6, 7);
/// assert_eq!(eval(&thunk).unwrap(), Value::from(42));
/// ```
#[macro_export]
macro_rules! partial {
    (@collect $function:expr; [$($done:tt)*]) => {
        $crate::function::Function::bind(&$function, [$($done)*])
    };

    (@collect $function:expr; [$($done:tt)*] __ $(, $($rest:tt)*)?) => {
        $crate::partial!(
            @collect $function;
            [$($done)* $crate::function::Argument::Placeholder,]
            $($($rest)*)?
        )
    };

    (@collect $function:expr; [$($done:tt)*] $argument:expr $(, $($rest:tt)*)?) => {
        $crate::partial!(
            @collect $function;
            [$($done)* $crate::function::Argument::from($argument),]
            $($($rest)*)?
        )
    };

    ($function:expr $(,)?) => {
        ::core::clone::Clone::clone(&$function)
    };

    ($function:expr, $($arguments:tt)+) => {
        $crate::partial!(@collect $function; [] $($arguments)+)
    };
}
