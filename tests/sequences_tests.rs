#![cfg(feature = "collections")]
//! Integration tests for the sequence combinators.

use pointfree::prelude::*;
use rstest::rstest;

fn ints(items: &[i32]) -> Value {
    Value::sequence(items.iter().copied())
}

fn empty() -> Value {
    Value::sequence(Vec::<Value>::new())
}

fn wrap_each() -> Function {
    Function::from_fn("WrapEach", |arguments| {
        let mut items = arguments.get(0).as_sequence().unwrap_or_default().to_vec();
        items.push(Value::sequence([arguments.get(1).clone()]));
        Ok(Value::from(items))
    })
}

#[test]
fn test_map_to_phrase() {
    let phrase = strings::prepend().bind([Value::from("number is ")]);
    assert_eq!(
        call(&sequences::map(phrase), ints(&[1, 2, 3])).unwrap(),
        Value::sequence(["number is 1", "number is 2", "number is 3"])
    );
}

#[test]
fn test_filter_numbers() {
    let is_number = Function::from_fn("IsNumber", |arguments| {
        Ok(Value::Bool(arguments.get(0).as_number().is_some()))
    });
    let input = Value::sequence([Value::from(1), Value::from(2), Value::from("oops"), Value::from(3)]);
    assert_eq!(call(&sequences::filter(is_number), input).unwrap(), ints(&[1, 2, 3]));
}

#[test]
fn test_fold_direction() {
    let input = ints(&[1, 2, 3]);
    assert_eq!(
        call(&sequences::reduce(wrap_each(), empty()), input.clone()).unwrap(),
        Value::sequence([ints(&[1]), ints(&[2]), ints(&[3])])
    );
    assert_eq!(
        call(&sequences::reduce_right(wrap_each(), empty()), input).unwrap(),
        Value::sequence([ints(&[3]), ints(&[2]), ints(&[1])])
    );
}

#[rstest]
#[case(ints(&[3, 1, 2]), sequences::sort(), ints(&[1, 2, 3]))]
#[case(
    Value::sequence(["b", "c", "a"]),
    sequences::sort_by(strings::less_than()),
    Value::sequence(["a", "b", "c"])
)]
#[case(ints(&[5, 3, 5, 1]), sequences::sort(), ints(&[1, 3, 5, 5]))]
fn test_sort(#[case] input: Value, #[case] sort: Function, #[case] expected: Value) {
    assert_eq!(call(&sort, input).unwrap(), expected);
}

#[test]
fn test_find_absent_is_distinct_from_null() {
    let is_null = booleans::equals().bind([Value::Null]);
    assert_eq!(
        call(&sequences::find(is_null.clone()), Value::sequence([Value::from(0), Value::Null])).unwrap(),
        Value::Null
    );
    assert_eq!(
        call(&sequences::find(is_null), ints(&[0])).unwrap(),
        Value::Absent
    );
}

#[test]
fn test_range_sum() {
    let total = pipe!(10, sequences::range(), sequences::sum());
    assert_eq!(total.unwrap(), Value::from(45));
}

#[test]
fn test_flat_map_and_length() {
    let twice = Function::from_fn("Twice", |arguments| {
        let item = arguments.get(0).clone();
        Ok(Value::sequence([item.clone(), item]))
    });
    let result = pipe!(ints(&[1, 2, 3]), sequences::flat_map(twice), sequences::length());
    assert_eq!(result.unwrap(), Value::from(6));
}

#[test]
fn test_some_every_includes() {
    let negative = numbers::less_than().bind([Value::from(0)]);
    assert_eq!(call(&sequences::some(negative.clone()), ints(&[1, -1])).unwrap(), Value::Bool(true));
    assert_eq!(call(&sequences::every(negative), ints(&[1, -1])).unwrap(), Value::Bool(false));
    assert_eq!(call2(&sequences::includes(), ints(&[1, 2]), 3).unwrap(), Value::Bool(false));
}

#[test]
fn test_take_while_and_drop() {
    let small = numbers::less_than().bind([Value::from(3)]);
    let result = pipe!(
        ints(&[0, 1, 2, 3, 0]),
        sequences::take_while(small),
        sequences::drop(1)
    );
    assert_eq!(result.unwrap(), ints(&[1, 2]));
}

#[test]
fn test_head_tail_last() {
    let input = ints(&[1, 2, 3]);
    assert_eq!(call(&sequences::head(), input.clone()).unwrap(), Value::from(1));
    assert_eq!(call(&sequences::tail(), input.clone()).unwrap(), ints(&[2, 3]));
    assert_eq!(call(&sequences::last(), input).unwrap(), Value::from(3));
    assert_eq!(call(&sequences::head(), empty()).unwrap(), Value::Absent);
}

#[test]
fn test_non_sequence_is_rejected() {
    assert_eq!(
        call(&sequences::head(), "text"),
        Err(Error::TypeMismatch {
            combinator: "Head",
            expected: "a sequence",
            found: "string",
        })
    );
}
