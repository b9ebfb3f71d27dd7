#![cfg(feature = "collections")]
//! End-to-end pipelines mixing leaf, sequence and function combinators.

use pointfree::prelude::*;
use rstest::rstest;

fn add(amount: i64) -> Function {
    numbers::add().bind([Value::from(amount)])
}

/// `+3`, stringify and re-split on dots, parse, `+10`, `-1`, sum.
fn round_trip_stages() -> Vec<Function> {
    vec![
        sequences::map(add(3)),
        sequences::join("."),
        strings::split().bind([Value::from(".")]),
        sequences::map(strings::to_number()),
        sequences::map(add(10)),
        sequences::map(numbers::sub().bind([__, Argument::from(1)])),
        sequences::sum(),
    ]
}

#[test]
fn test_pipe_through_string_round_trip() {
    let input = Value::sequence([1, 2, 3, 4, 3, 4]);
    assert_eq!(pipe(input, &round_trip_stages()).unwrap(), Value::from(89));
}

#[test]
fn test_pipe_with_large_integers() {
    let big: i128 = 124_678_765_435_897_587_654_478_964_568_576;
    let input = Value::sequence([
        Value::from(1),
        Value::from(2),
        Value::from(3),
        Value::from(4),
        Value::from(3),
        Value::from(4),
        Value::from(big),
    ]);
    assert_eq!(
        pipe(input, &round_trip_stages()).unwrap(),
        Value::from(124_678_765_435_897_587_654_478_964_568_677_i128)
    );
}

#[test]
fn test_pipe_right_runs_last_stage_first() {
    let result = pipe_right!(
        sequences::sum(),
        sequences::map(add(10)),
        sequences::map(strings::to_number()),
        strings::split().bind([Value::from(".")]),
        sequences::join("."),
        sequences::map(add(3));
        Value::sequence([1, 2, 3, 4, 3, 4])
    );
    assert_eq!(result.unwrap(), Value::from(95));
}

#[test]
fn test_pipe_macro_matches_function() {
    let stages = round_trip_stages();
    let input = Value::sequence([5, 6]);
    let by_macro = pipe!(
        input.clone(),
        stages[0],
        stages[1],
        stages[2],
        stages[3],
        stages[4],
        stages[5],
        stages[6]
    );
    assert_eq!(by_macro.unwrap(), pipe(input, &stages).unwrap());
}

#[test]
fn test_pipeline_stops_at_first_absent() {
    let never = Function::from_fn("Never", |_| Ok(Value::Bool(false)));
    let explode = Function::from_fn("Explode", |_| Err(Error::DivisionByZero { combinator: "Explode" }));
    let result = pipe!(Value::sequence([1, 2]), sequences::find(never), explode);
    assert_eq!(result.unwrap(), Value::Absent);
}

#[test]
fn test_pipeline_propagates_first_error() {
    let result = pipe!(
        Value::sequence([1, 0]),
        sequences::map(numbers::div().bind([Argument::from(10), __])),
        sequences::sum()
    );
    assert_eq!(result, Err(Error::DivisionByZero { combinator: "Div" }));
}

#[rstest]
#[case(Value::from(1))]
#[case(Value::Null)]
#[case(Value::sequence(["a"]))]
#[case(Value::record([("k", 1)]))]
fn test_empty_pipelines_are_identity(#[case] input: Value) {
    assert_eq!(pipe!(input.clone()).unwrap(), input);
    assert_eq!(pipe_right!(; input.clone()).unwrap(), input);
}

#[test]
fn test_partial_macro_in_pipeline() {
    let minus_one = partial!(numbers::sub(), __, 1);
    let ten_minus = partial!(numbers::sub(), 10, __);
    assert_eq!(pipe!(5, minus_one, ten_minus).unwrap(), Value::from(6));
}

#[test]
fn test_compose_as_stage() {
    let increment_all = sequences::map(add(1));
    let total_after_increment = compose!(sequences::sum(), increment_all);
    let result = pipe!(
        Value::sequence([Value::sequence([1, 2]), Value::sequence([3])]),
        sequences::map(total_after_increment)
    );
    assert_eq!(result.unwrap(), Value::sequence([5, 4]));
}

#[test]
fn test_flip_and_constant() {
    let flipped = flip(numbers::sub());
    assert_eq!(call2(&flipped, 1, 10).unwrap(), Value::from(9));
    assert_eq!(pipe!(42, constant("fixed")).unwrap(), Value::from("fixed"));
}

#[test]
fn test_sort_then_take() {
    let result = pipe!(
        Value::sequence([9, 4, 7, 1]),
        sequences::sort(),
        sequences::take(2),
        sequences::join(",")
    );
    assert_eq!(result.unwrap(), Value::from("1,4"));
}
