//! Merging bound partial arguments with call-site arguments.
//!
//! Every function value stores the partial arguments it was bound with. At
//! call time they are merged with the supplied input arguments:
//!
//! ```text
//! partial: [10, __, "x"]     input: [1, 2]
//!             |   |    |               |  |
//! output:  [10, 1, "x", 2]
//! ```
//!
//! - A concrete partial argument is copied into its slot.
//! - A placeholder takes the next input argument.
//! - Once the partial arguments run out, the remaining input arguments are
//!   appended.
//! - Once the input arguments run out, the remaining placeholders vanish and
//!   the remaining concrete partial arguments are still appended.
//!
//! # Normalization
//!
//! Before merging, [`Argument::Unset`] slots become placeholders, and a
//! single concrete partial argument `[a]` is rewritten to `[__, a]`. The
//! second rule lets binary combinators read naturally when bound with one
//! argument: `greater_than().bind([5])` called with `10` evaluates `10 > 5`.
//! It applies to every function value bound with exactly one argument, so
//! bind a leading value explicitly with `[a, __]` when the first slot is
//! meant.

use super::arguments::{Argument, Arguments};
use crate::value::Value;

/// Rewrites partial arguments into the shape the merge expects.
fn normalize(partial: &[Argument]) -> Vec<Argument> {
    match partial {
        [Argument::Value(single)] => vec![Argument::Placeholder, Argument::Value(single.clone())],
        _ => partial
            .iter()
            .map(|argument| match argument {
                Argument::Unset => Argument::Placeholder,
                other => other.clone(),
            })
            .collect(),
    }
}

/// Merges call-site `input` arguments into the bound `partial` arguments.
///
/// The result never contains a placeholder: slots that cannot be filled are
/// dropped.
///
/// # Examples
///
/// ```rust
/// use pointfree::function::{merge_arguments, Argument, __};
/// use pointfree::Value;
///
/// // Placeholders are filled in order, leftovers are appended.
/// let merged = merge_arguments([Value::from(1), Value::from(2)], &[__, Argument::from("x")]);
/// assert_eq!(merged.as_slice(), &[Value::from(1), Value::from("x"), Value::from(2)]);
///
/// // Unfilled placeholders vanish, concrete partial arguments stay.
/// let merged = merge_arguments([], &[__, Argument::from("x")]);
/// assert_eq!(merged.as_slice(), &[Value::from("x")]);
/// ```
pub fn merge_arguments<I>(input: I, partial: &[Argument]) -> Arguments
where
    I: IntoIterator<Item = Value>,
{
    let mut input = input.into_iter();
    let normalized = normalize(partial);
    let mut output = Arguments::with_capacity(normalized.len());
    let mut slots = normalized.into_iter();

    while let Some(slot) = slots.next() {
        match slot {
            Argument::Value(value) => output.push(value),
            Argument::Placeholder | Argument::Unset => {
                if let Some(value) = input.next() {
                    output.push(value);
                } else {
                    output.extend(slots.filter_map(|rest| match rest {
                        Argument::Value(value) => Some(value),
                        Argument::Placeholder | Argument::Unset => None,
                    }));
                    return output;
                }
            }
        }
    }

    output.extend(input);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::__;
    use rstest::rstest;

    fn values(items: &[i32]) -> Vec<Value> {
        items.iter().copied().map(Value::from).collect()
    }

    #[test]
    fn test_no_partial_arguments_is_identity() {
        let merged = merge_arguments(values(&[1, 2, 3]), &[]);
        assert_eq!(merged.as_slice(), values(&[1, 2, 3]).as_slice());
    }

    #[test]
    fn test_excess_placeholders_vanish() {
        let merged = merge_arguments(values(&[1]), &[__, __, Argument::from(9), __]);
        assert_eq!(merged.as_slice(), values(&[1, 9]).as_slice());
    }

    #[test]
    fn test_extra_concrete_partials_are_appended() {
        let merged = merge_arguments(values(&[1]), &[__, Argument::from(2), Argument::from(3)]);
        assert_eq!(merged.as_slice(), values(&[1, 2, 3]).as_slice());
    }

    #[test]
    fn test_single_partial_binds_second_slot() {
        let merged = merge_arguments(values(&[10]), &[Argument::from(5)]);
        assert_eq!(merged.as_slice(), values(&[10, 5]).as_slice());
    }

    #[test]
    fn test_single_placeholder_is_not_rewritten() {
        let merged = merge_arguments(values(&[10, 5]), &[__]);
        assert_eq!(merged.as_slice(), values(&[10, 5]).as_slice());
    }

    #[rstest]
    #[case(vec![Argument::Unset, Argument::from(2)], vec![1, 2])]
    #[case(vec![Argument::Unset], vec![1])]
    #[case(vec![Argument::Unset, Argument::Unset], vec![1])]
    fn test_unset_behaves_like_placeholder(#[case] partial: Vec<Argument>, #[case] expected: Vec<i32>) {
        let merged = merge_arguments(values(&[1]), &partial);
        assert_eq!(merged.as_slice(), values(&expected).as_slice());
    }

    #[test]
    fn test_leading_concrete_partial() {
        let merged = merge_arguments(values(&[3]), &[Argument::from(10), __]);
        assert_eq!(merged.as_slice(), values(&[10, 3]).as_slice());
    }
}
