//! Boolean leaf combinators.
//!
//! # Examples
//!
//! ```rust
//! use pointfree::function::{call, call2, eval};
//! use pointfree::{booleans, Value};
//!
//! assert_eq!(call2(&booleans::and(), true, false).unwrap(), Value::Bool(false));
//! assert_eq!(call(&booleans::or().bind([Value::Bool(true)]), false).unwrap(), Value::Bool(true));
//! assert_eq!(
//!     eval(&booleans::xor().bind([Value::Bool(true), Value::Bool(true)])).unwrap(),
//!     Value::Bool(false)
//! );
//! ```

use crate::error::{Error, Result};
use crate::function::Function;
use crate::value::Value;

fn operand(value: &Value, combinator: &'static str) -> Result<Option<bool>> {
    match value {
        Value::Bool(boolean) => Ok(Some(*boolean)),
        Value::Absent => Ok(None),
        other => Err(Error::type_mismatch(combinator, "a boolean", other)),
    }
}

fn logical(name: &'static str, operation: fn(bool, bool) -> bool) -> Function {
    Function::from_fn(name, move |arguments| {
        let left = operand(arguments.get(0), name)?;
        let right = operand(arguments.get(1), name)?;
        Ok(left
            .zip(right)
            .map_or(Value::Absent, |(left, right)| Value::Bool(operation(left, right))))
    })
}

/// `(a, b) -> a && b`
pub fn and() -> Function {
    logical("And", |left, right| left && right)
}

/// `(a, b) -> a || b`
pub fn or() -> Function {
    logical("Or", |left, right| left || right)
}

/// `(a, b) -> a != b` over booleans.
pub fn xor() -> Function {
    logical("XOr", |left, right| left ^ right)
}

/// `a -> !a`
pub fn not() -> Function {
    Function::from_fn("Not", |arguments| {
        Ok(operand(arguments.get(0), "Not")?.map_or(Value::Absent, |boolean| Value::Bool(!boolean)))
    })
}

/// `(a, b) -> a == b`, by structural equality over any values.
pub fn equals() -> Function {
    Function::from_fn("Equals", |arguments| {
        Ok(Value::Bool(arguments.get(0) == arguments.get(1)))
    })
}

/// `(a, b) -> a != b`, by structural equality over any values.
pub fn not_equals() -> Function {
    Function::from_fn("NotEquals", |arguments| {
        Ok(Value::Bool(arguments.get(0) != arguments.get(1)))
    })
}
