//! String leaf combinators and single-token case conversion.
//!
//! Binary and ternary combinators take the text first, so binding the
//! configuration alone reads naturally: `split().bind(["."])` splits on dots.

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::function::Function;
use crate::value::{Number, Value};

fn text<'a>(value: &'a Value, combinator: &'static str) -> Result<Option<&'a str>> {
    match value {
        Value::String(text) => Ok(Some(text)),
        Value::Absent => Ok(None),
        other => Err(Error::type_mismatch(combinator, "a string", other)),
    }
}

/// Renders a primitive as text.
///
/// Strings are used verbatim; numbers, booleans and `null` use their display
/// form. Anything else raises [`Error::TypeMismatch`].
pub(crate) fn stringify(value: &Value, combinator: &'static str) -> Result<String> {
    match value {
        Value::String(text) => Ok(text.to_string()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(boolean) => Ok(boolean.to_string()),
        Value::Null => Ok("null".to_owned()),
        other => Err(Error::type_mismatch(
            combinator,
            "a string, number, boolean or null",
            other,
        )),
    }
}

// =============================================================================
// Case conversion
// =============================================================================

/// Converts `snake_case` or `kebab-case` to `camelCase`.
///
/// Every `_` or `-` is dropped and the character after it is uppercased.
///
/// # Examples
///
/// ```rust
/// use pointfree::strings::to_camel_case;
///
/// assert_eq!(to_camel_case("user_name"), "userName");
/// assert_eq!(to_camel_case("created-at"), "createdAt");
/// ```
pub fn to_camel_case(token: &str) -> String {
    let mut output = String::with_capacity(token.len());
    let mut capitalize = false;
    for character in token.chars() {
        if character == '_' || character == '-' {
            capitalize = true;
        } else if capitalize {
            output.extend(character.to_uppercase());
            capitalize = false;
        } else {
            output.push(character);
        }
    }
    output
}

fn separate_words(token: &str, separator: char, other: char) -> String {
    let mut output = String::with_capacity(token.len() + 4);
    for character in token.chars() {
        if character.is_ascii_uppercase() {
            output.push(separator);
            output.push(character.to_ascii_lowercase());
        } else if character == other {
            output.push(separator);
        } else {
            output.push(character);
        }
    }
    output
}

/// Converts `camelCase` or `kebab-case` to `snake_case`.
///
/// Every uppercase ASCII letter becomes `_` followed by its lowercase form,
/// and `-` becomes `_`.
///
/// # Examples
///
/// ```rust
/// use pointfree::strings::to_snake_case;
///
/// assert_eq!(to_snake_case("userName"), "user_name");
/// assert_eq!(to_snake_case("created-at"), "created_at");
/// ```
pub fn to_snake_case(token: &str) -> String {
    separate_words(token, '_', '-')
}

/// Converts `camelCase` or `snake_case` to `kebab-case`.
///
/// # Examples
///
/// ```rust
/// use pointfree::strings::to_kebab_case;
///
/// assert_eq!(to_kebab_case("userName"), "user-name");
/// assert_eq!(to_kebab_case("created_at"), "created-at");
/// ```
pub fn to_kebab_case(token: &str) -> String {
    separate_words(token, '-', '_')
}

fn case_conversion(name: &'static str, convert: fn(&str) -> String) -> Function {
    Function::from_fn(name, move |arguments| {
        Ok(match text(arguments.get(0), name)? {
            Some(token) => Value::from(convert(token)),
            None => Value::Absent,
        })
    })
}

/// `text -> camelCase(text)`
pub fn camel_case() -> Function {
    case_conversion("CamelCase", to_camel_case)
}

/// `text -> snake_case(text)`
pub fn snake_case() -> Function {
    case_conversion("SnakeCase", to_snake_case)
}

/// `text -> kebab-case(text)`
pub fn kebab_case() -> Function {
    case_conversion("KebabCase", to_kebab_case)
}

// =============================================================================
// Text operations
// =============================================================================

/// `(text, separator) -> [piece, ...]`
///
/// An empty separator splits into single characters.
///
/// # Examples
///
/// ```rust
/// use pointfree::function::call;
/// use pointfree::{strings, Value};
///
/// let split_on_dots = strings::split().bind([Value::from(".")]);
/// assert_eq!(call(&split_on_dots, "a.b").unwrap(), Value::sequence(["a", "b"]));
/// ```
pub fn split() -> Function {
    Function::from_fn("Split", |arguments| {
        let source = text(arguments.get(0), "Split")?;
        let separator = text(arguments.get(1), "Split")?;
        Ok(match (source, separator) {
            (Some(source), Some("")) => {
                Value::sequence(source.chars().map(|character| Value::from(character.to_string())))
            }
            (Some(source), Some(separator)) => Value::sequence(source.split(separator)),
            _ => Value::Absent,
        })
    })
}

/// `(text, from, to) -> text` with every occurrence of `from` replaced.
///
/// An empty `from` leaves the text unchanged.
pub fn replace() -> Function {
    Function::from_fn("Replace", |arguments| {
        let source = text(arguments.get(0), "Replace")?;
        let from = text(arguments.get(1), "Replace")?;
        let to = text(arguments.get(2), "Replace")?;
        Ok(match (source, from, to) {
            (Some(source), Some(""), Some(_)) => Value::from(source),
            (Some(source), Some(from), Some(to)) => Value::from(source.replace(from, to)),
            _ => Value::Absent,
        })
    })
}

fn printable(value: &Value, combinator: &'static str) -> Result<Option<String>> {
    match value {
        Value::Absent => Ok(None),
        other => stringify(other, combinator).map(Some),
    }
}

/// `(text, prefix) -> prefix + text`
///
/// Numbers, booleans and `null` are stringified first.
pub fn prepend() -> Function {
    Function::from_fn("Prepend", |arguments| {
        let source = printable(arguments.get(0), "Prepend")?;
        let prefix = printable(arguments.get(1), "Prepend")?;
        Ok(match (source, prefix) {
            (Some(source), Some(prefix)) => Value::from(prefix + &source),
            _ => Value::Absent,
        })
    })
}

/// `(text, suffix) -> text + suffix`
///
/// Numbers, booleans and `null` are stringified first.
pub fn append() -> Function {
    Function::from_fn("Append", |arguments| {
        let source = printable(arguments.get(0), "Append")?;
        let suffix = printable(arguments.get(1), "Append")?;
        Ok(match (source, suffix) {
            (Some(source), Some(suffix)) => Value::from(source + &suffix),
            _ => Value::Absent,
        })
    })
}

/// `text -> number`, or absent when the text is not a numeric literal.
///
/// Numbers pass through unchanged.
pub fn to_number() -> Function {
    Function::from_fn("ToNumber", |arguments| match arguments.get(0) {
        Value::Number(number) => Ok(Value::Number(*number)),
        other => Ok(text(other, "ToNumber")?
            .and_then(Number::parse)
            .map_or(Value::Absent, Value::Number)),
    })
}

/// `primitive -> text`
pub fn to_string() -> Function {
    Function::from_fn("ToString", |arguments| match arguments.get(0) {
        Value::Absent => Ok(Value::Absent),
        other => stringify(other, "ToString").map(Value::from),
    })
}

/// `(a, b) -> a < b`, comparing strings lexicographically.
pub fn less_than() -> Function {
    Function::from_fn("StringLessThan", |arguments| {
        let left = text(arguments.get(0), "StringLessThan")?;
        let right = text(arguments.get(1), "StringLessThan")?;
        Ok(match (left, right) {
            (Some(left), Some(right)) => Value::Bool(left.cmp(right) == Ordering::Less),
            _ => Value::Absent,
        })
    })
}
