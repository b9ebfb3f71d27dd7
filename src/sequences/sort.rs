//! Partition sort driven by a comparator function value.
//!
//! The head element is the pivot; the tail is partitioned into the elements
//! for which `comparator(x, pivot)` is exactly `true` and the rest, both in
//! input order, and the result is `sort(low) ++ [pivot] ++ sort(high)`.
//! Partitions are processed from an explicit work stack, so the depth of
//! the recursion never depends on the input.

use super::fold::over_elements;
use crate::error::Result;
use crate::function::{call2, Function};
use crate::numbers;
use crate::value::Value;

enum Task {
    Sort(Vec<Value>),
    Emit(Value),
}

fn partition_sort(items: &[Value], comparator: &Function) -> Result<Vec<Value>> {
    let mut output = Vec::with_capacity(items.len());
    let mut stack = vec![Task::Sort(items.to_vec())];

    while let Some(task) = stack.pop() {
        match task {
            Task::Emit(value) => output.push(value),
            Task::Sort(partition) => {
                let mut remaining = partition.into_iter();
                let Some(pivot) = remaining.next() else {
                    continue;
                };
                let mut low = Vec::new();
                let mut high = Vec::new();
                for item in remaining {
                    if call2(comparator, item.clone(), pivot.clone())?.is_true() {
                        low.push(item);
                    } else {
                        high.push(item);
                    }
                }
                // popped in reverse: low, pivot, high
                stack.push(Task::Sort(high));
                stack.push(Task::Emit(pivot));
                stack.push(Task::Sort(low));
            }
        }
    }

    Ok(output)
}

/// Sorts numbers in ascending order.
///
/// Same as [`sort_by`] with [`numbers::less_than_or_equal`].
///
/// # Examples
///
/// ```rust
/// use pointfree::function::call;
/// use pointfree::{sequences, Value};
///
/// assert_eq!(
///     call(&sequences::sort(), Value::sequence([3, 1, 2])).unwrap(),
///     Value::sequence([1, 2, 3])
/// );
/// ```
pub fn sort() -> Function {
    sort_by(numbers::less_than_or_equal())
}

/// Sorts with `comparator(x, pivot)`, which answers "does `x` go before the
/// pivot".
///
/// With a comparator that accepts equality (`<=`), elements equal to the
/// pivot land before it. Order is kept within each partition, but the sort
/// as a whole is not stable.
///
/// # Examples
///
/// ```rust
/// use pointfree::function::call;
/// use pointfree::{sequences, strings, Value};
///
/// let sorted = call(&sequences::sort_by(strings::less_than()), Value::sequence(["b", "c", "a"]));
/// assert_eq!(sorted.unwrap(), Value::sequence(["a", "b", "c"]));
/// ```
pub fn sort_by(comparator: Function) -> Function {
    over_elements("Sort", move |items| {
        partition_sort(items, &comparator).map(Value::from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::call;

    #[test]
    fn test_sort_numbers() {
        assert_eq!(
            call(&sort(), Value::sequence([5, 3, 8, 1, 9, 2, 2])).unwrap(),
            Value::sequence([1, 2, 2, 3, 5, 8, 9])
        );
    }

    #[test]
    fn test_sort_empty_and_single() {
        let empty = Value::sequence(Vec::<Value>::new());
        assert_eq!(call(&sort(), empty.clone()).unwrap(), empty);
        assert_eq!(call(&sort(), Value::sequence([7])).unwrap(), Value::sequence([7]));
    }

    #[test]
    fn test_equal_elements_land_before_pivot() {
        let by_rank = Function::from_fn("ByRank", |arguments| {
            let rank = |value: &Value| value.field("rank").cloned().unwrap_or_default();
            numbers::less_than_or_equal().call2(rank(arguments.get(0)), rank(arguments.get(1)))
        });
        let item = |rank: i32, name: &str| {
            Value::record([("rank", Value::from(rank)), ("name", Value::from(name))])
        };
        let input = Value::sequence([item(2, "a"), item(1, "b"), item(2, "c"), item(1, "d")]);
        let names: Vec<Value> = call(&sort_by(by_rank), input)
            .unwrap()
            .as_sequence()
            .unwrap()
            .iter()
            .map(|item| item.field("name").cloned().unwrap_or_default())
            .collect();
        assert_eq!(
            names,
            vec![Value::from("d"), Value::from("b"), Value::from("c"), Value::from("a")]
        );
    }

    #[test]
    fn test_sort_deep_unbalanced_input() {
        let descending: Vec<Value> = (0..2_000).rev().map(Value::from).collect();
        let sorted = call(&sort(), Value::from(descending)).unwrap();
        let items = sorted.as_sequence().unwrap();
        assert_eq!(items.len(), 2_000);
        assert_eq!(items[0], Value::from(0));
        assert_eq!(items[1_999], Value::from(1_999));
    }

    #[test]
    fn test_sort_absent_is_absent() {
        assert_eq!(call(&sort(), Value::Absent).unwrap(), Value::Absent);
    }
}
