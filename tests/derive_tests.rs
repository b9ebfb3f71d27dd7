#![cfg(all(feature = "derive", feature = "objects"))]
//! Tests for `#[derive(IntoRecord)]`.

use pointfree::prelude::*;

#[derive(IntoRecord)]
struct User {
    user_name: String,
    age: u32,
    admin: bool,
}

#[derive(IntoRecord)]
struct Post {
    #[record(rename = "postTitle")]
    title: String,
    tags: Vec<Value>,
    #[record(skip)]
    #[allow(dead_code)]
    draft: bool,
}

#[derive(IntoRecord)]
struct Labelled<T> {
    label: &'static str,
    value: T,
}

#[test]
fn test_fields_become_keys_in_declaration_order() {
    let user = Value::from(User {
        user_name: "ada".to_string(),
        age: 36,
        admin: true,
    });
    let keys = call(&objects::keys(), user.clone()).unwrap();
    assert_eq!(keys, Value::sequence(["user_name", "age", "admin"]));
    assert_eq!(user.field("age"), Some(&Value::from(36)));
}

#[test]
fn test_rename_and_skip() {
    let post = Value::from(Post {
        title: "Hello".to_string(),
        tags: vec![Value::from("intro")],
        draft: true,
    });
    assert_eq!(
        post,
        Value::record([
            ("postTitle", Value::from("Hello")),
            ("tags", Value::sequence(["intro"])),
        ])
    );
}

#[test]
fn test_generic_struct() {
    let labelled = Value::from(Labelled { label: "answer", value: 42_i64 });
    assert_eq!(
        labelled,
        Value::record([("label", Value::from("answer")), ("value", Value::from(42))])
    );
}

#[test]
fn test_derived_records_flow_through_pipelines() {
    let users = Value::sequence([
        User { user_name: "ada".to_string(), age: 36, admin: true },
        User { user_name: "alan".to_string(), age: 41, admin: false },
    ]);
    let admins = pipe!(
        users,
        sequences::filter(objects::get("admin")),
        sequences::map(objects::camel_case()),
        sequences::map(objects::get("userName"))
    );
    assert_eq!(admins.unwrap(), Value::sequence(["ada"]));
}
