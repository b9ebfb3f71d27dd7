#![cfg(all(feature = "serde", feature = "objects"))]
//! JSON interchange for values flowing through pipelines.

use pointfree::prelude::*;

#[test]
fn test_transform_json_document() {
    let document: Value = serde_json::from_str(
        r#"{"currentUser":{"userName":"ada","loginCount":3},"friendList":[{"firstName":"alan"}]}"#,
    )
    .unwrap();
    let transformed = pipe!(
        document,
        objects::snake_case_deep(),
        objects::update("current_user.login_count", numbers::add().bind([Value::from(1)]))
    )
    .unwrap();
    assert_eq!(
        serde_json::to_string(&transformed).unwrap(),
        r#"{"current_user":{"user_name":"ada","login_count":4},"friend_list":[{"first_name":"alan"}]}"#
    );
}

#[test]
fn test_absent_serializes_as_null() {
    let missing = call(&objects::get("nowhere"), Value::empty_record()).unwrap();
    assert_eq!(serde_json::to_string(&missing).unwrap(), "null");
}

#[test]
fn test_function_values_do_not_serialize() {
    let value = Value::record([("callback", Value::from(numbers::negate()))]);
    assert!(serde_json::to_string(&value).is_err());
}

#[test]
fn test_large_integers_survive() {
    let big: i128 = 124_678_765_435_897_587_654_478_964_568_677;
    let json = serde_json::to_string(&Value::from(big)).unwrap();
    assert_eq!(json, "124678765435897587654478964568677");
}
