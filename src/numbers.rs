//! Numeric leaf combinators.
//!
//! Every combinator here is a plain function value over [`Number`]s and can
//! be partially applied with [`Function::bind`]. Binary combinators bound
//! with a single argument receive it in the second slot, so
//! `sub().bind([1])` subtracts one and `less_than().bind([5])` tests
//! `x < 5`.
//!
//! An absent operand yields [`Value::Absent`]; any other non-number raises
//! [`Error::TypeMismatch`].
//!
//! # Examples
//!
//! ```rust
//! use pointfree::function::{call, call2, __};
//! use pointfree::{numbers, Value};
//!
//! assert_eq!(call2(&numbers::add(), 1, 2).unwrap(), Value::from(3));
//! assert_eq!(call(&numbers::div().bind([__, 2.into()]), 10).unwrap(), Value::from(5));
//! assert_eq!(call(&numbers::power().bind([Value::from(2)]), 3).unwrap(), Value::from(9));
//! ```

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::function::{Arguments, Function};
use crate::value::{Number, Value};

type BinaryOperation = fn(Number, Number, &'static str) -> Result<Number>;

fn operand(value: &Value, combinator: &'static str) -> Result<Option<Number>> {
    match value {
        Value::Number(number) => Ok(Some(*number)),
        Value::Absent => Ok(None),
        other => Err(Error::type_mismatch(combinator, "a number", other)),
    }
}

fn operands(arguments: &Arguments, combinator: &'static str) -> Result<Option<(Number, Number)>> {
    let left = operand(arguments.get(0), combinator)?;
    let right = operand(arguments.get(1), combinator)?;
    Ok(left.zip(right))
}

fn arithmetic(name: &'static str, operation: BinaryOperation) -> Function {
    Function::from_fn(name, move |arguments| {
        Ok(match operands(&arguments, name)? {
            Some((left, right)) => Value::Number(operation(left, right, name)?),
            None => Value::Absent,
        })
    })
}

fn comparison(name: &'static str, accept: fn(Ordering) -> bool) -> Function {
    Function::from_fn(name, move |arguments| {
        Ok(match operands(&arguments, name)? {
            Some((left, right)) => Value::Bool(accept(left.total_cmp(&right))),
            None => Value::Absent,
        })
    })
}

/// Adds two values numerically. Used by [`sum`](crate::sequences::sum).
pub(crate) fn add_values(left: &Value, right: &Value) -> Result<Value> {
    Ok(match (operand(left, "Add")?, operand(right, "Add")?) {
        (Some(left), Some(right)) => Value::Number(left.checked_add(right, "Add")?),
        _ => Value::Absent,
    })
}

/// `(a, b) -> a + b`
pub fn add() -> Function {
    arithmetic("Add", Number::checked_add)
}

/// `(a, b) -> a - b`
pub fn sub() -> Function {
    arithmetic("Sub", Number::checked_sub)
}

/// `(a, b) -> a * b`
pub fn mul() -> Function {
    arithmetic("Mul", Number::checked_mul)
}

/// `(a, b) -> a / b`
///
/// Integer division stays exact when `b` divides `a`, and yields a float
/// otherwise. Dividing by zero raises [`Error::DivisionByZero`].
pub fn div() -> Function {
    arithmetic("Div", Number::checked_div)
}

/// `(a, b) -> a % b`, with the sign of `a`.
pub fn modulo() -> Function {
    arithmetic("Mod", Number::checked_rem)
}

/// `(a, b) -> a ^ b`
pub fn power() -> Function {
    arithmetic("Power", Number::checked_pow)
}

/// `a -> -a`
pub fn negate() -> Function {
    Function::from_fn("Negate", |arguments| {
        Ok(match operand(arguments.get(0), "Negate")? {
            Some(number) => Value::Number(number.checked_neg("Negate")?),
            None => Value::Absent,
        })
    })
}

/// `a -> |a|`
pub fn abs() -> Function {
    Function::from_fn("Abs", |arguments| {
        Ok(match operand(arguments.get(0), "Abs")? {
            Some(number) => Value::Number(number.checked_abs("Abs")?),
            None => Value::Absent,
        })
    })
}

/// `(a, b) -> -1 | 0 | 1` depending on how `a` orders against `b`.
pub fn compare() -> Function {
    Function::from_fn("Compare", |arguments| {
        Ok(match operands(&arguments, "Compare")? {
            Some((left, right)) => Value::from(match left.total_cmp(&right) {
                Ordering::Less => -1,
                Ordering::Equal => 0,
                Ordering::Greater => 1,
            }),
            None => Value::Absent,
        })
    })
}

/// `(a, b) -> a < b`
pub fn less_than() -> Function {
    comparison("LessThan", Ordering::is_lt)
}

/// `(a, b) -> a <= b`
///
/// The default comparator of [`sort`](crate::sequences::sort).
pub fn less_than_or_equal() -> Function {
    comparison("LessThanOrEqual", Ordering::is_le)
}

/// `(a, b) -> a > b`
pub fn greater_than() -> Function {
    comparison("GreaterThan", Ordering::is_gt)
}

/// `(a, b) -> a >= b`
pub fn greater_than_or_equal() -> Function {
    comparison("GreaterThanOrEqual", Ordering::is_ge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{__, Argument, call, call2, eval};
    use rstest::rstest;

    #[rstest]
    #[case(add(), 7, 3, Value::from(10))]
    #[case(sub(), 7, 3, Value::from(4))]
    #[case(mul(), 7, 3, Value::from(21))]
    #[case(div(), 6, 3, Value::from(2))]
    #[case(div(), 7, 2, Value::from(3.5))]
    #[case(modulo(), 7, 3, Value::from(1))]
    #[case(power(), 2, 10, Value::from(1024))]
    #[case(compare(), 1, 2, Value::from(-1))]
    #[case(compare(), 2, 2, Value::from(0))]
    #[case(less_than(), 1, 2, Value::Bool(true))]
    #[case(less_than_or_equal(), 2, 2, Value::Bool(true))]
    #[case(greater_than(), 1, 2, Value::Bool(false))]
    #[case(greater_than_or_equal(), 2, 2, Value::Bool(true))]
    fn test_binary_without_partials(
        #[case] function: Function,
        #[case] left: i32,
        #[case] right: i32,
        #[case] expected: Value,
    ) {
        assert_eq!(call2(&function, left, right).unwrap(), expected);
    }

    #[test]
    fn test_single_partial_fills_second_slot() {
        assert_eq!(call(&sub().bind([Value::from(1)]), 10).unwrap(), Value::from(9));
        assert_eq!(
            call(&greater_than().bind([Value::from(5)]), 10).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn test_placeholder_first_slot() {
        assert_eq!(call(&sub().bind([Argument::from(Value::from(10)), __.clone()]), 1).unwrap(), Value::from(9));
    }

    #[test]
    fn test_fully_bound() {
        assert_eq!(eval(&add().bind([Value::from(2), Value::from(3)])).unwrap(), Value::from(5));
    }

    #[test]
    fn test_unary() {
        assert_eq!(call(&negate(), 3).unwrap(), Value::from(-3));
        assert_eq!(call(&abs(), -3.5).unwrap(), Value::from(3.5));
    }

    #[test]
    fn test_absent_operand_is_absent() {
        assert_eq!(call(&add(), 1).unwrap(), Value::Absent);
        assert_eq!(eval(&negate()).unwrap(), Value::Absent);
    }

    #[test]
    fn test_non_number_is_rejected() {
        assert_eq!(
            call2(&add(), "1", 2),
            Err(Error::TypeMismatch {
                combinator: "Add",
                expected: "a number",
                found: "string",
            })
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            call2(&div(), 1, 0),
            Err(Error::DivisionByZero { combinator: "Div" })
        );
    }
}
