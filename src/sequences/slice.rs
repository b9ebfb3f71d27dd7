//! Positional access, searching and slicing.

use super::fold::{elements, over_elements};
use crate::error::{Error, Result};
use crate::function::{call2, Function};
use crate::value::Value;

/// The first element, or absent for an empty sequence.
pub fn head() -> Function {
    over_elements("Head", |items| Ok(items.first().cloned().unwrap_or_default()))
}

/// The last element, or absent for an empty sequence.
pub fn last() -> Function {
    over_elements("Last", |items| Ok(items.last().cloned().unwrap_or_default()))
}

/// Every element but the first; empty for an empty sequence.
pub fn tail() -> Function {
    over_elements("Tail", |items| {
        Ok(Value::from(items.iter().skip(1).cloned().collect::<Vec<_>>()))
    })
}

fn clamp(count: i64, length: usize) -> usize {
    usize::try_from(count).map_or(0, |count| count.min(length))
}

/// The first `count` elements.
///
/// A count of zero or less yields an empty sequence, a count past the end
/// the whole sequence.
pub fn take(count: i64) -> Function {
    over_elements("Take", move |items| {
        Ok(Value::from(items[..clamp(count, items.len())].to_vec()))
    })
}

/// Every element after the first `count`.
///
/// A count of zero or less keeps the whole sequence, a count past the end
/// yields an empty sequence.
pub fn drop(count: i64) -> Function {
    over_elements("Drop", move |items| {
        Ok(Value::from(items[clamp(count, items.len())..].to_vec()))
    })
}

/// The longest prefix whose elements satisfy `predicate(x, index)`.
///
/// Elements after the first failure are excluded even if they would satisfy
/// the predicate.
pub fn take_while(predicate: Function) -> Function {
    over_elements("TakeWhile", move |items| {
        let mut output = Vec::new();
        for (index, item) in items.iter().enumerate() {
            if !call2(&predicate, item.clone(), index)?.is_true() {
                break;
            }
            output.push(item.clone());
        }
        Ok(Value::from(output))
    })
}

/// The first element satisfying `predicate(x, index)`, or absent.
///
/// # Examples
///
/// ```rust
/// use pointfree::function::call;
/// use pointfree::{numbers, sequences, Value};
///
/// let first_big = sequences::find(numbers::greater_than().bind([Value::from(2)]));
/// assert_eq!(call(&first_big, Value::sequence([1, 5, 3])).unwrap(), Value::from(5));
/// assert_eq!(call(&first_big, Value::sequence([1, 2])).unwrap(), Value::Absent);
/// ```
pub fn find(predicate: Function) -> Function {
    over_elements("Find", move |items| {
        for (index, item) in items.iter().enumerate() {
            if call2(&predicate, item.clone(), index)?.is_true() {
                return Ok(item.clone());
            }
        }
        Ok(Value::Absent)
    })
}

/// `true` if `predicate(x)` is exactly `true` for some element.
pub fn some(predicate: Function) -> Function {
    over_elements("Some", move |items| {
        for item in items {
            if predicate.call(item.clone())?.is_true() {
                return Ok(Value::Bool(true));
            }
        }
        Ok(Value::Bool(false))
    })
}

/// `true` if `predicate(x)` is exactly `true` for every element.
pub fn every(predicate: Function) -> Function {
    over_elements("Every", move |items| {
        for item in items {
            if !predicate.call(item.clone())?.is_true() {
                return Ok(Value::Bool(false));
            }
        }
        Ok(Value::Bool(true))
    })
}

/// Longest sequence [`range`] builds.
pub const MAX_RANGE: usize = 1 << 24;

/// `n -> [0, 1, ..., n - 1]`
///
/// Counts above [`MAX_RANGE`] raise [`Error::Overflow`].
pub fn range() -> Function {
    Function::from_fn("Range", |arguments| match arguments.get(0) {
        Value::Absent => Ok(Value::Absent),
        Value::Number(number) => {
            let count = number.as_integer().unwrap_or_default().max(0);
            let count = usize::try_from(count)
                .ok()
                .filter(|count| *count <= MAX_RANGE)
                .ok_or(Error::Overflow { combinator: "Range" })?;
            Ok(Value::sequence((0..count).map(Value::from)))
        }
        other => Err(Error::type_mismatch("Range", "a number", other)),
    })
}

/// Number of elements.
pub fn length() -> Function {
    over_elements("Length", |items| Ok(Value::from(items.len())))
}

/// Returns `true` if `value` is a sequence containing `item`.
pub(crate) fn contains(value: &Value, item: &Value) -> Result<bool> {
    Ok(elements(value, "Includes")?.is_some_and(|items| items.contains(item)))
}

/// `(sequence, item) -> true` if the sequence contains `item`.
pub fn includes() -> Function {
    Function::from_fn("Includes", |arguments| {
        contains(arguments.get(0), arguments.get(1)).map(Value::Bool)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::call;
    use crate::numbers;
    use rstest::rstest;

    fn ints(items: &[i32]) -> Value {
        Value::sequence(items.iter().copied())
    }

    #[rstest]
    #[case(head(), ints(&[1, 2, 3]), Value::from(1))]
    #[case(head(), ints(&[]), Value::Absent)]
    #[case(last(), ints(&[1, 2, 3]), Value::from(3))]
    #[case(last(), ints(&[]), Value::Absent)]
    #[case(tail(), ints(&[1, 2, 3]), ints(&[2, 3]))]
    #[case(tail(), ints(&[]), ints(&[]))]
    fn test_positional(#[case] function: Function, #[case] input: Value, #[case] expected: Value) {
        assert_eq!(call(&function, input).unwrap(), expected);
    }

    #[rstest]
    #[case(2, &[1, 2], &[3, 4])]
    #[case(0, &[], &[1, 2, 3, 4])]
    #[case(-3, &[], &[1, 2, 3, 4])]
    #[case(10, &[1, 2, 3, 4], &[])]
    fn test_take_and_drop_clamp(#[case] count: i64, #[case] taken: &[i32], #[case] dropped: &[i32]) {
        let input = ints(&[1, 2, 3, 4]);
        assert_eq!(call(&take(count), input.clone()).unwrap(), ints(taken));
        assert_eq!(call(&drop(count), input).unwrap(), ints(dropped));
    }

    #[test]
    fn test_take_while_stops_at_first_failure() {
        let small = numbers::less_than().bind([Value::from(3)]);
        assert_eq!(
            call(&take_while(small), ints(&[1, 2, 5, 1])).unwrap(),
            ints(&[1, 2])
        );
    }

    #[test]
    fn test_find_passes_index() {
        let at_index_two = Function::from_fn("AtIndexTwo", |arguments| {
            Ok(Value::Bool(arguments.get(1) == &Value::from(2)))
        });
        assert_eq!(
            call(&find(at_index_two), Value::sequence(["a", "b", "c"])).unwrap(),
            Value::from("c")
        );
    }

    #[test]
    fn test_find_not_found_is_absent_not_default() {
        let never = Function::from_fn("Never", |_| Ok(Value::Bool(false)));
        let result = call(&find(never), Value::sequence([0, 0])).unwrap();
        assert_eq!(result, Value::Absent);
        assert_ne!(result, Value::from(0));
    }

    #[test]
    fn test_some_and_every() {
        let positive = numbers::greater_than().bind([Value::from(0)]);
        assert_eq!(call(&some(positive.clone()), ints(&[-1, 2])).unwrap(), Value::Bool(true));
        assert_eq!(call(&every(positive.clone()), ints(&[-1, 2])).unwrap(), Value::Bool(false));
        assert_eq!(call(&some(positive.clone()), ints(&[])).unwrap(), Value::Bool(false));
        assert_eq!(call(&every(positive), ints(&[])).unwrap(), Value::Bool(true));
    }

    #[rstest]
    #[case(Value::from(3), ints(&[0, 1, 2]))]
    #[case(Value::from(0), ints(&[]))]
    #[case(Value::from(-2), ints(&[]))]
    fn test_range(#[case] count: Value, #[case] expected: Value) {
        assert_eq!(call(&range(), count).unwrap(), expected);
    }

    #[rstest]
    #[case(Value::from(i128::MAX))]
    #[case(Value::from(10_000_000_000_i64))]
    fn test_range_too_long_is_overflow(#[case] count: Value) {
        assert_eq!(
            call(&range(), count),
            Err(Error::Overflow { combinator: "Range" })
        );
    }

    #[test]
    fn test_length_and_includes() {
        assert_eq!(call(&length(), ints(&[4, 5])).unwrap(), Value::from(2));
        assert_eq!(
            crate::function::call2(&includes(), ints(&[4, 5]), 5).unwrap(),
            Value::Bool(true)
        );
    }
}
