//! Elementary function values for building compositions.
//!
//! - [`identity`]: returns its first argument (I combinator)
//! - [`constant`]: ignores its arguments (K combinator)
//! - [`flip`]: swaps the first two arguments (C combinator)

use crate::function::{Arguments, Function};
use crate::value::Value;

/// Returns its first argument unchanged.
///
/// The unit of composition: `compose([identity(), f])` behaves like `f`.
///
/// # Examples
///
/// ```rust
/// use pointfree::compose::identity;
/// use pointfree::function::call;
/// use pointfree::Value;
///
/// assert_eq!(call(&identity(), 42).unwrap(), Value::from(42));
/// ```
pub fn identity() -> Function {
    Function::from_fn("Identity", |arguments| Ok(arguments.get(0).clone()))
}

/// Returns `value` whatever the arguments.
///
/// # Examples
///
/// ```rust
/// use pointfree::compose::constant;
/// use pointfree::function::{call, eval};
/// use pointfree::Value;
///
/// let always_five = constant(5);
/// assert_eq!(call(&always_five, "ignored").unwrap(), Value::from(5));
/// assert_eq!(eval(&always_five).unwrap(), Value::from(5));
/// ```
pub fn constant(value: impl Into<Value>) -> Function {
    let value = value.into();
    Function::from_fn("Constant", move |_| Ok(value.clone()))
}

/// Swaps the first two arguments of `function`.
///
/// Further arguments are passed through in place. `flip(flip(f))` behaves
/// like `f`.
///
/// # Examples
///
/// ```rust
/// use pointfree::compose::flip;
/// use pointfree::function::call2;
/// use pointfree::{numbers, Value};
///
/// let flipped_sub = flip(numbers::sub());
/// assert_eq!(call2(&flipped_sub, 1, 10).unwrap(), Value::from(9));
/// ```
pub fn flip(function: Function) -> Function {
    Function::from_fn("Flip", move |arguments| {
        let mut reordered: Vec<Value> = arguments.into_iter().collect();
        if reordered.len() >= 2 {
            reordered.swap(0, 1);
        } else if reordered.len() == 1 {
            reordered.insert(0, Value::Absent);
        }
        function.invoke(Arguments::from(reordered))
    })
}
