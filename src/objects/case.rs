//! Key renaming, shallow and deep, and the key-casing shorthands.

use std::sync::Arc;

use super::path::Path;
use crate::error::{Error, Result};
use crate::function::Function;
use crate::strings;
use crate::value::{Fields, Value};

/// Renames one key with `function`, which must produce a string or a number.
pub(crate) fn rename(
    function: &Function,
    key: &Arc<str>,
    combinator: &'static str,
    location: impl FnOnce() -> Path,
) -> Result<Arc<str>> {
    let renamed = function.call(Arc::clone(key))?;
    renamed.to_key().ok_or_else(|| Error::InvalidKey {
        combinator,
        path: location().to_string(),
        found: renamed.kind(),
    })
}

fn rename_deep(value: &Value, function: &Function, visited: &mut Vec<Arc<str>>) -> Result<Value> {
    match value {
        Value::Record(fields) => {
            let mut renamed = Fields::with_capacity_and_hasher(fields.len(), Default::default());
            for (key, child) in fields.iter() {
                let new_key = rename(function, key, "MapKeysDeep", || {
                    Path::from_segments(visited.iter().cloned().chain([Arc::clone(key)]))
                })?;
                visited.push(Arc::clone(key));
                let child = rename_deep(child, function, visited)?;
                visited.pop();
                renamed.insert(new_key, child);
            }
            Ok(Value::from(renamed))
        }
        Value::Sequence(items) => {
            let mut output = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                visited.push(Arc::from(index.to_string()));
                output.push(rename_deep(item, function, visited)?);
                visited.pop();
            }
            Ok(Value::from(output))
        }
        Value::Union(alternatives) => alternatives
            .iter()
            .map(|alternative| rename_deep(alternative, function, visited))
            .collect::<Result<Vec<_>>>()
            .map(Value::union),
        other => Ok(other.clone()),
    }
}

/// Renames the keys of every record nested in the input with `function`.
///
/// Records inside sequences are renamed too; primitives are left as they
/// are. A renamed key that is neither a string nor a number raises
/// [`Error::InvalidKey`] carrying the path of the offending key.
///
/// # Examples
///
/// ```rust
/// use pointfree::function::call;
/// use pointfree::{objects, strings, Value};
///
/// let input = Value::record([("a", Value::record([("b", 1)]))]);
/// let prefixed = objects::map_keys_deep(strings::prepend().bind([Value::from("x_")]));
/// assert_eq!(
///     call(&prefixed, input).unwrap(),
///     Value::record([("x_a", Value::record([("x_b", 1)]))])
/// );
/// ```
pub fn map_keys_deep(function: Function) -> Function {
    Function::from_fn("MapKeysDeep", move |arguments| {
        rename_deep(arguments.get(0), &function, &mut Vec::new())
    })
}

macro_rules! key_casing {
    ($($case:ident => $shallow:literal, $deep:literal;)+) => {
        paste::paste! {
            $(
                #[doc = $shallow]
                pub fn [<$case _case>]() -> Function {
                    super::map_keys(strings::[<$case _case>]())
                }

                #[doc = $deep]
                pub fn [<$case _case_deep>]() -> Function {
                    map_keys_deep(strings::[<$case _case>]())
                }
            )+
        }
    };
}

key_casing! {
    camel => "Converts the top-level keys of a record to `camelCase`.",
             "Converts the keys of every nested record to `camelCase`.";
    snake => "Converts the top-level keys of a record to `snake_case`.",
             "Converts the keys of every nested record to `snake_case`.";
    kebab => "Converts the top-level keys of a record to `kebab-case`.",
             "Converts the keys of every nested record to `kebab-case`.";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::call;

    fn profile() -> Value {
        Value::record([
            ("helloWorld", Value::from("hello")),
            (
                "currentUser",
                Value::record([
                    ("userName", Value::from("n")),
                    ("isOnline", Value::from(true)),
                ]),
            ),
            (
                "friends",
                Value::sequence([
                    Value::record([("firstName", "a")]),
                    Value::record([("firstName", "b")]),
                ]),
            ),
            ("tags", Value::sequence(["keepMe"])),
        ])
    }

    #[test]
    fn test_snake_case_deep() {
        assert_eq!(
            call(&snake_case_deep(), profile()).unwrap(),
            Value::record([
                ("hello_world", Value::from("hello")),
                (
                    "current_user",
                    Value::record([
                        ("user_name", Value::from("n")),
                        ("is_online", Value::from(true)),
                    ]),
                ),
                (
                    "friends",
                    Value::sequence([
                        Value::record([("first_name", "a")]),
                        Value::record([("first_name", "b")]),
                    ]),
                ),
                ("tags", Value::sequence(["keepMe"])),
            ])
        );
    }

    #[test]
    fn test_shallow_conversion_leaves_nested_keys() {
        let converted = call(&kebab_case(), profile()).unwrap();
        assert_eq!(
            converted.field("current-user"),
            Some(&Value::record([
                ("userName", Value::from("n")),
                ("isOnline", Value::from(true)),
            ]))
        );
        assert!(converted.field("hello-world").is_some());
    }

    #[test]
    fn test_camel_case_deep_round_trip() {
        let snake = call(&snake_case_deep(), profile()).unwrap();
        assert_eq!(call(&camel_case_deep(), snake).unwrap(), profile());
    }

    #[test]
    fn test_primitives_pass_through() {
        assert_eq!(call(&camel_case_deep(), 3).unwrap(), Value::from(3));
        assert_eq!(call(&camel_case_deep(), Value::Absent).unwrap(), Value::Absent);
    }

    #[test]
    fn test_invalid_key_reports_path() {
        let nothing = Function::from_fn("Nothing", |arguments| {
            Ok(if arguments.get(0) == &Value::from("deep") {
                Value::Null
            } else {
                arguments.get(0).clone()
            })
        });
        let input = Value::record([(
            "a",
            Value::sequence([Value::record([("deep", 1)])]),
        )]);
        assert_eq!(
            call(&map_keys_deep(nothing), input),
            Err(Error::InvalidKey {
                combinator: "MapKeysDeep",
                path: "a[0].deep".to_string(),
                found: "null",
            })
        );
    }
}
