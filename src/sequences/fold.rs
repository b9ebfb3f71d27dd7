//! The left-fold primitive and the combinators derived directly from it.

use crate::error::{Error, Result};
use crate::function::{call2, Function};
use crate::numbers::add_values;
use crate::strings::stringify;
use crate::value::Value;

/// Extracts the elements of a sequence argument.
///
/// `Ok(None)` means the input was absent and the combinator should yield
/// absent in turn.
pub(crate) fn elements<'a>(value: &'a Value, combinator: &'static str) -> Result<Option<&'a [Value]>> {
    match value {
        Value::Sequence(items) => Ok(Some(items)),
        Value::Absent => Ok(None),
        other => Err(Error::type_mismatch(combinator, "a sequence", other)),
    }
}

/// Builds a unary sequence combinator from a rule over the elements.
pub(crate) fn over_elements<F>(name: &'static str, rule: F) -> Function
where
    F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
{
    Function::from_fn(name, move |arguments| match elements(arguments.get(0), name)? {
        Some(items) => rule(items),
        None => Ok(Value::Absent),
    })
}

/// Folds `step(accumulator, item, index)` over `items` from index 0.
///
/// Every sequence combinator is expressed with this primitive.
///
/// # Errors
///
/// Returns the first error raised by `step`.
///
/// # Examples
///
/// ```rust
/// use pointfree::sequences::reduce_left;
/// use pointfree::Value;
///
/// let items = [Value::from("a"), Value::from("b")];
/// let joined = reduce_left(&items, String::new(), |mut text, item, _| {
///     text.push_str(item.as_str().unwrap_or_default());
///     Ok(text)
/// });
/// assert_eq!(joined.unwrap(), "ab");
/// ```
pub fn reduce_left<A, F>(items: &[Value], initial: A, mut step: F) -> Result<A>
where
    F: FnMut(A, &Value, usize) -> Result<A>,
{
    let mut accumulator = initial;
    for (index, item) in items.iter().enumerate() {
        accumulator = step(accumulator, item, index)?;
    }
    Ok(accumulator)
}

/// `[x, ...] -> [f(x), ...]`
///
/// # Examples
///
/// ```rust
/// use pointfree::function::call;
/// use pointfree::{numbers, sequences, Value};
///
/// let add_three = sequences::map(numbers::add().bind([Value::from(3)]));
/// assert_eq!(call(&add_three, Value::sequence([1, 2])).unwrap(), Value::sequence([4, 5]));
/// ```
pub fn map(function: Function) -> Function {
    over_elements("Map", move |items| {
        reduce_left(items, Vec::with_capacity(items.len()), |mut output, item, _| {
            output.push(function.call(item.clone())?);
            Ok(output)
        })
        .map(Value::from)
    })
}

/// Keeps the elements for which `predicate(x)` is exactly `true`.
pub fn filter(predicate: Function) -> Function {
    over_elements("Filter", move |items| {
        reduce_left(items, Vec::new(), |mut output, item, _| {
            if predicate.call(item.clone())?.is_true() {
                output.push(item.clone());
            }
            Ok(output)
        })
        .map(Value::from)
    })
}

/// Splices the elements of every `f(x)` that is a sequence; other results
/// are dropped.
pub fn flat_map(function: Function) -> Function {
    over_elements("FlatMap", move |items| {
        reduce_left(items, Vec::new(), |mut output, item, _| {
            if let Value::Sequence(spliced) = function.call(item.clone())? {
                output.extend(spliced.iter().cloned());
            }
            Ok(output)
        })
        .map(Value::from)
    })
}

/// `[x1, ..., xn] -> step(...step(step(initial, x1), x2)..., xn)`
///
/// # Examples
///
/// ```rust
/// use pointfree::function::call;
/// use pointfree::{numbers, sequences, Value};
///
/// let total = sequences::reduce(numbers::add(), 0);
/// assert_eq!(call(&total, Value::sequence([1, 2, 3])).unwrap(), Value::from(6));
/// ```
pub fn reduce(step: Function, initial: impl Into<Value>) -> Function {
    let initial = initial.into();
    over_elements("Reduce", move |items| {
        reduce_left(items, initial.clone(), |accumulator, item, _| {
            call2(&step, accumulator, item.clone())
        })
    })
}

/// Like [`reduce`], starting from the last element.
///
/// For a non-associative `step` the two folds differ:
///
/// ```rust
/// use pointfree::function::{call, Function};
/// use pointfree::{sequences, Value};
///
/// let wrap = Function::from_fn("Wrap", |arguments| {
///     let mut items = arguments.get(0).as_sequence().unwrap_or_default().to_vec();
///     items.push(Value::sequence([arguments.get(1).clone()]));
///     Ok(Value::from(items))
/// });
/// let numbers = Value::sequence([1, 2, 3]);
/// assert_eq!(
///     call(&sequences::reduce_right(wrap.clone(), Value::sequence(Vec::<Value>::new())), numbers.clone()).unwrap(),
///     Value::sequence([Value::sequence([3]), Value::sequence([2]), Value::sequence([1])])
/// );
/// assert_eq!(
///     call(&sequences::reduce(wrap, Value::sequence(Vec::<Value>::new())), numbers).unwrap(),
///     Value::sequence([Value::sequence([1]), Value::sequence([2]), Value::sequence([3])])
/// );
/// ```
pub fn reduce_right(step: Function, initial: impl Into<Value>) -> Function {
    let initial = initial.into();
    over_elements("ReduceRight", move |items| {
        let reversed: Vec<Value> = items.iter().rev().cloned().collect();
        reduce_left(&reversed, initial.clone(), |accumulator, item, _| {
            call2(&step, accumulator, item.clone())
        })
    })
}

/// Adds up the elements, starting from `0`.
pub fn sum() -> Function {
    over_elements("Sum", |items| {
        reduce_left(items, Value::from(0), |total, item, _| add_values(&total, item))
    })
}

/// Concatenates the stringified elements, inserting `separator` before
/// each element once the text built so far is non-empty.
///
/// Leading empty strings therefore contribute nothing, not even a
/// separator: `["", "a"]` joins to `"a"`.
///
/// Strings, numbers, booleans and `null` can be joined; any other element
/// raises [`Error::TypeMismatch`].
pub fn join(separator: impl Into<String>) -> Function {
    let separator = separator.into();
    over_elements("Join", move |items| {
        reduce_left(items, String::new(), |mut text, item, _| {
            if !text.is_empty() {
                text.push_str(&separator);
            }
            text.push_str(&stringify(item, "Join")?);
            Ok(text)
        })
        .map(Value::from)
    })
}
