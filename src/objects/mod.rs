//! Record combinators and the path accessor.
//!
//! Records are [`Value::Record`]s: string keys in insertion order. Every
//! combinator here follows the same conventions as the sequence
//! combinators: an absent input yields [`Value::Absent`], any other input
//! of the wrong shape raises [`Error::TypeMismatch`], and the input is never
//! modified.
//!
//! # Overview
//!
//! - [`get`], [`update`], [`all_paths`]: reading and writing through
//!   [`Path`]s like `a.b[0].c`
//! - [`create`] and [`Template`]: building records from call arguments
//! - [`keys`], [`values`], [`entries`], [`from_entries`]
//! - [`pick`], [`omit`], [`pick_by`], [`omit_by`], [`assign`], [`record`]
//! - [`map_values`], [`map_keys`], [`map_keys_deep`] and the key-casing
//!   shorthands ([`camel_case`], [`snake_case_deep`], ...)
//!
//! # Examples
//!
//! ```rust
//! use pointfree::prelude::*;
//!
//! let user = Value::record([
//!     ("userName", Value::from("ada")),
//!     ("password", Value::from("secret")),
//! ]);
//! let public = pipe!(
//!     user,
//!     objects::omit().bind([Value::from("password")]),
//!     objects::snake_case()
//! );
//! assert_eq!(public.unwrap(), Value::record([("user_name", "ada")]));
//! ```

mod case;
mod create;
mod path;

pub use case::{
    camel_case, camel_case_deep, kebab_case, kebab_case_deep, map_keys_deep, snake_case,
    snake_case_deep,
};
pub use create::{create, create_from_argument, Template};
pub use path::{all_paths, all_paths_of, get, get_path, update, update_path, Path, MAX_PADDING, WILDCARD};

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::function::{call2, Function};
use crate::value::{Fields, Value};

/// Extracts the fields of a record argument.
///
/// `Ok(None)` means the input was absent.
fn fields<'a>(value: &'a Value, combinator: &'static str) -> Result<Option<&'a Fields>> {
    match value {
        Value::Record(fields) => Ok(Some(fields)),
        Value::Absent => Ok(None),
        other => Err(Error::type_mismatch(combinator, "a record", other)),
    }
}

/// Builds a unary record combinator from a rule over the fields.
fn over_fields<F>(name: &'static str, rule: F) -> Function
where
    F: Fn(&Fields) -> Result<Value> + Send + Sync + 'static,
{
    Function::from_fn(name, move |arguments| match fields(arguments.get(0), name)? {
        Some(fields) => rule(fields),
        None => Ok(Value::Absent),
    })
}

/// Reads a key set: a key, a union of keys or a sequence of keys.
fn key_set(value: &Value, combinator: &'static str) -> Result<Vec<Arc<str>>> {
    let candidates = match value {
        Value::Sequence(items) => items.as_slice(),
        other => other.alternatives(),
    };
    candidates
        .iter()
        .map(|candidate| {
            candidate.to_key().ok_or_else(|| {
                Error::type_mismatch(combinator, "a key, a union of keys or a sequence of keys", candidate)
            })
        })
        .collect()
}

// =============================================================================
// Keys, values and entries
// =============================================================================

/// The keys of a record, or the indices of a sequence.
pub fn keys() -> Function {
    Function::from_fn("Keys", |arguments| match arguments.get(0) {
        Value::Absent => Ok(Value::Absent),
        Value::Sequence(items) => Ok(Value::sequence(0..items.len())),
        other => Ok(Value::sequence(
            fields(other, "Keys")?
                .into_iter()
                .flat_map(|fields| fields.keys().cloned()),
        )),
    })
}

/// The values of a record, or the elements of a sequence.
pub fn values() -> Function {
    Function::from_fn("Values", |arguments| match arguments.get(0) {
        Value::Absent => Ok(Value::Absent),
        sequence @ Value::Sequence(_) => Ok(sequence.clone()),
        other => Ok(Value::sequence(
            fields(other, "Values")?
                .into_iter()
                .flat_map(|fields| fields.values().cloned()),
        )),
    })
}

/// `record -> [[key, value], ...]`
///
/// A sequence yields `[index, element]` pairs.
pub fn entries() -> Function {
    Function::from_fn("Entries", |arguments| {
        let pairs = match arguments.get(0) {
            Value::Absent => return Ok(Value::Absent),
            Value::Sequence(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| Value::sequence([Value::from(index), item.clone()]))
                .collect::<Vec<_>>(),
            other => fields(other, "Entries")?
                .into_iter()
                .flat_map(|fields| fields.iter())
                .map(|(key, value)| Value::sequence([Value::from(Arc::clone(key)), value.clone()]))
                .collect(),
        };
        Ok(Value::from(pairs))
    })
}

/// `[[key, value], ...] -> record`
///
/// A repeated key keeps its first position and its last value.
///
/// # Errors
///
/// Raises [`Error::TypeMismatch`] for an element that is not a pair and
/// [`Error::InvalidKey`] for a key that is neither a string nor a number.
pub fn from_entries() -> Function {
    Function::from_fn("FromEntries", |arguments| {
        let pairs = match arguments.get(0) {
            Value::Absent => return Ok(Value::Absent),
            Value::Sequence(pairs) => pairs,
            other => return Err(Error::type_mismatch("FromEntries", "a sequence of pairs", other)),
        };
        let mut output = Fields::with_capacity_and_hasher(pairs.len(), Default::default());
        for (index, pair) in pairs.iter().enumerate() {
            let [key, value] = pair.as_sequence().unwrap_or_default() else {
                return Err(Error::type_mismatch("FromEntries", "a [key, value] pair", pair));
            };
            let Some(key) = key.to_key() else {
                return Err(Error::InvalidKey {
                    combinator: "FromEntries",
                    path: format!("[{index}][0]"),
                    found: key.kind(),
                });
            };
            output.insert(key, value.clone());
        }
        Ok(Value::from(output))
    })
}

// =============================================================================
// Transforming fields
// =============================================================================

/// `record -> record with every value replaced by f(value, key)`
///
/// # Examples
///
/// ```rust
/// use pointfree::function::call;
/// use pointfree::{objects, strings, Value};
///
/// let input = Value::record([("a", Value::from(1)), ("b", Value::from(true))]);
/// assert_eq!(
///     call(&objects::map_values(strings::to_string()), input).unwrap(),
///     Value::record([("a", "1"), ("b", "true")])
/// );
/// ```
pub fn map_values(function: Function) -> Function {
    over_fields("MapValues", move |fields| {
        let mut output = Fields::with_capacity_and_hasher(fields.len(), Default::default());
        for (key, value) in fields {
            let mapped = call2(&function, value.clone(), Arc::clone(key))?;
            output.insert(Arc::clone(key), mapped);
        }
        Ok(Value::from(output))
    })
}

/// `record -> record with every top-level key replaced by f(key)`
///
/// Keys that collide after renaming keep the last value.
///
/// # Errors
///
/// Raises [`Error::InvalidKey`] when `f` yields neither a string nor a
/// number.
pub fn map_keys(function: Function) -> Function {
    over_fields("MapKeys", move |fields| {
        let mut output = Fields::with_capacity_and_hasher(fields.len(), Default::default());
        for (key, value) in fields {
            let renamed = case::rename(&function, key, "MapKeys", || Path::from_segments([Arc::clone(key)]))?;
            output.insert(renamed, value.clone());
        }
        Ok(Value::from(output))
    })
}

// =============================================================================
// Selecting fields
// =============================================================================

fn select_keys(name: &'static str, keep: bool) -> Function {
    Function::from_fn(name, move |arguments| {
        let Some(fields) = fields(arguments.get(0), name)? else {
            return Ok(Value::Absent);
        };
        let selected = key_set(arguments.get(1), name)?;
        Ok(Value::from(
            fields
                .iter()
                .filter(|(key, _)| selected.contains(key) == keep)
                .map(|(key, value)| (Arc::clone(key), value.clone()))
                .collect::<Fields>(),
        ))
    })
}

fn select_by(name: &'static str, predicate: Function, keep: bool) -> Function {
    over_fields(name, move |fields| {
        let mut output = Fields::default();
        for (key, value) in fields {
            if call2(&predicate, value.clone(), Arc::clone(key))?.is_true() == keep {
                output.insert(Arc::clone(key), value.clone());
            }
        }
        Ok(Value::from(output))
    })
}

/// `(record, keys) -> record with only the given keys`
///
/// Binding the keys alone fills the second slot:
///
/// ```rust
/// use pointfree::function::call;
/// use pointfree::{objects, Value};
///
/// let input = Value::record([("a", 1), ("b", 2), ("c", 3)]);
/// let keys = Value::union([Value::from("a"), Value::from("c")]);
/// assert_eq!(
///     call(&objects::pick().bind([keys]), input).unwrap(),
///     Value::record([("a", 1), ("c", 3)])
/// );
/// ```
pub fn pick() -> Function {
    select_keys("Pick", true)
}

/// `(record, keys) -> record without the given keys`
pub fn omit() -> Function {
    select_keys("Omit", false)
}

/// Keeps the fields for which `predicate(value, key)` is exactly `true`.
pub fn pick_by(predicate: Function) -> Function {
    select_by("PickBy", predicate, true)
}

/// Drops the fields for which `predicate(value, key)` is exactly `true`.
pub fn omit_by(predicate: Function) -> Function {
    select_by("OmitBy", predicate, false)
}

// =============================================================================
// Building records
// =============================================================================

/// `(record, ...) -> merged record`
///
/// Later records override the values of earlier keys; a key keeps the
/// position of its first occurrence. Absent arguments are skipped, so with
/// no record at all the result is the empty record.
///
/// # Examples
///
/// ```rust
/// use pointfree::function::call;
/// use pointfree::{objects, sequences, Value};
///
/// let merged = sequences::reduce(objects::assign(), Value::empty_record());
/// let input = Value::sequence([
///     Value::record([("a", 1)]),
///     Value::record([("b", true)]),
///     Value::record([("a", 2)]),
/// ]);
/// assert_eq!(
///     call(&merged, input).unwrap(),
///     Value::record([("a", Value::from(2)), ("b", Value::from(true))])
/// );
/// ```
pub fn assign() -> Function {
    Function::from_fn("Assign", |arguments| {
        let mut output = Fields::default();
        for argument in &arguments {
            if let Some(fields) = fields(argument, "Assign")? {
                output.extend(fields.iter().map(|(key, value)| (Arc::clone(key), value.clone())));
            }
        }
        Ok(Value::from(output))
    })
}

/// `(keys, value) -> record mapping every key to value`
///
/// To fix the keys and receive the value later, bind with a trailing
/// placeholder:
///
/// ```rust
/// use pointfree::function::{call, __};
/// use pointfree::{objects, Value};
///
/// let keys = Value::union([Value::from("a"), Value::from("b")]);
/// let both = objects::record().bind([keys.into(), __]);
/// assert_eq!(call(&both, 0).unwrap(), Value::record([("a", 0), ("b", 0)]));
/// ```
pub fn record() -> Function {
    Function::from_fn("Record", |arguments| {
        if arguments.get(0).is_absent() {
            return Ok(Value::Absent);
        }
        let keys = key_set(arguments.get(0), "Record")?;
        let value = arguments.get(1);
        Ok(Value::from(
            keys.into_iter()
                .map(|key| (key, value.clone()))
                .collect::<Fields>(),
        ))
    })
}
