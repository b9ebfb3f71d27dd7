//! Bucketing sequence elements by a computed key.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use super::fold::{over_elements, reduce_left};
use crate::error::Error;
use crate::function::Function;
use crate::value::{Fields, Value};

/// Groups elements into a record keyed by `key_function(x)`.
///
/// The first element producing a key fixes that key's position; each bucket
/// keeps input order. Keys must be strings or numbers (numbers are
/// stringified), anything else raises [`Error::InvalidKey`].
///
/// # Examples
///
/// ```rust
/// use pointfree::function::{call, Function};
/// use pointfree::{sequences, Value};
///
/// let parity = Function::from_fn("Parity", |arguments| {
///     let even = arguments.get(0).as_number().and_then(|n| n.as_integer()).is_some_and(|n| n % 2 == 0);
///     Ok(Value::from(if even { "even" } else { "odd" }))
/// });
/// let grouped = call(&sequences::group_by(parity), Value::sequence([1, 2, 3])).unwrap();
/// assert_eq!(
///     grouped,
///     Value::record([("odd", Value::sequence([1, 3])), ("even", Value::sequence([2]))])
/// );
/// ```
pub fn group_by(key_function: Function) -> Function {
    over_elements("GroupBy", move |items| {
        let buckets = reduce_left(
            items,
            IndexMap::<Arc<str>, Vec<Value>, FxBuildHasher>::default(),
            |mut buckets, item, index| {
                let key = key_function.call(item.clone())?;
                let Some(key) = key.to_key() else {
                    return Err(Error::InvalidKey {
                        combinator: "GroupBy",
                        path: format!("[{index}]"),
                        found: key.kind(),
                    });
                };
                buckets.entry(key).or_default().push(item.clone());
                Ok(buckets)
            },
        )?;
        let fields: Fields = buckets
            .into_iter()
            .map(|(key, bucket)| (key, Value::from(bucket)))
            .collect();
        Ok(Value::from(fields))
    })
}
