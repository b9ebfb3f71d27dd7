//! Union-algebra leaf combinators.
//!
//! A non-union input is treated as a union with a single alternative, and
//! every result goes back through [`Value::union`], so an empty result is
//! [`Value::Absent`] and a single survivor is the survivor itself.
//!
//! # Examples
//!
//! ```rust
//! use pointfree::function::call;
//! use pointfree::{unions, Value};
//!
//! let union = Value::union([Value::from("a"), Value::from("b"), Value::from(1)]);
//! let without_a = unions::exclude().bind([Value::from("a")]);
//! assert_eq!(
//!     call(&without_a, union).unwrap(),
//!     Value::union([Value::from("b"), Value::from(1)])
//! );
//! ```

use crate::error::Result;
use crate::function::Function;
use crate::value::Value;

fn keep_where<F>(union: &Value, mut keep: F) -> Result<Value>
where
    F: FnMut(&Value) -> Result<bool>,
{
    let mut survivors = Vec::with_capacity(union.alternatives().len());
    for alternative in union.alternatives() {
        if keep(alternative)? {
            survivors.push(alternative.clone());
        }
    }
    Ok(Value::union(survivors))
}

/// `(union, keep) -> alternatives of union that are also alternatives of keep`
pub fn extract() -> Function {
    Function::from_fn("Extract", |arguments| {
        let selection = arguments.get(1).alternatives();
        keep_where(arguments.get(0), |alternative| Ok(selection.contains(alternative)))
    })
}

/// `(union, drop) -> alternatives of union that are not alternatives of drop`
pub fn exclude() -> Function {
    Function::from_fn("Exclude", |arguments| {
        let selection = arguments.get(1).alternatives();
        keep_where(arguments.get(0), |alternative| Ok(!selection.contains(alternative)))
    })
}

/// `union -> alternatives satisfying predicate`
pub fn extract_by(predicate: Function) -> Function {
    Function::from_fn("ExtractBy", move |arguments| {
        keep_where(arguments.get(0), |alternative| {
            Ok(predicate.call(alternative.clone())?.is_true())
        })
    })
}

/// `union -> alternatives not satisfying predicate`
pub fn exclude_by(predicate: Function) -> Function {
    Function::from_fn("ExcludeBy", move |arguments| {
        keep_where(arguments.get(0), |alternative| {
            Ok(!predicate.call(alternative.clone())?.is_true())
        })
    })
}

/// `union -> union of f(alternative)`
pub fn map(function: Function) -> Function {
    Function::from_fn("UnionMap", move |arguments| {
        let mapped = arguments
            .get(0)
            .alternatives()
            .iter()
            .map(|alternative| function.call(alternative.clone()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Value::union(mapped))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{call, call2};
    use crate::numbers;

    fn letters() -> Value {
        Value::union([Value::from("a"), Value::from("b"), Value::from("c")])
    }

    #[test]
    fn test_extract() {
        let keep = Value::union([Value::from("a"), Value::from("c"), Value::from("z")]);
        assert_eq!(
            call2(&extract(), letters(), keep).unwrap(),
            Value::union([Value::from("a"), Value::from("c")])
        );
    }

    #[test]
    fn test_exclude_everything_is_absent() {
        assert_eq!(call2(&exclude(), letters(), letters()).unwrap(), Value::Absent);
    }

    #[test]
    fn test_extract_by_predicate() {
        let numbers = Value::union([Value::from(1), Value::from(5), Value::from(10)]);
        let greater_than_four = numbers::greater_than().bind([Value::from(4)]);
        assert_eq!(
            call(&extract_by(greater_than_four.clone()), numbers.clone()).unwrap(),
            Value::union([Value::from(5), Value::from(10)])
        );
        assert_eq!(
            call(&exclude_by(greater_than_four), numbers).unwrap(),
            Value::from(1)
        );
    }

    #[test]
    fn test_map_merges_duplicates() {
        let union = Value::union([Value::from(-1), Value::from(1)]);
        assert_eq!(call(&map(numbers::abs()), union).unwrap(), Value::from(1));
    }

    #[test]
    fn test_plain_value_is_single_alternative() {
        assert_eq!(call2(&exclude(), "a", "b").unwrap(), Value::from("a"));
    }
}
