//! Path strings and the recursive get/update walks.
//!
//! # Grammar
//!
//! ```text
//! path    ::= segment ("." segment)*
//! segment ::= key | key "[" index "]"
//! ```
//!
//! `.`, `[` and `]` are boundaries and empty segments are dropped, so
//! `a.b[0].c` is `["a", "b", "0", "c"]`. A bracket that is never closed
//! makes the rest of the path one literal key. A numeric path is a single
//! index segment.
//!
//! # Walking
//!
//! Each segment is first looked up as a record key. Failing that, over a
//! sequence, a numeric segment indexes it and the segment `number`
//! addresses every element. Anything else misses: [`get`] yields
//! [`Value::Absent`], [`update`] leaves the value unchanged. Unions are
//! walked alternative by alternative.
//!
//! [`update`] pads a sequence with `null` to reach an index past its end,
//! up to [`MAX_PADDING`] elements.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use crate::error::Result;
use crate::function::Function;
use crate::value::Value;

/// The segment addressing every element of a sequence.
pub const WILDCARD: &str = "number";

/// Largest number of `null` elements an update may insert to reach an index
/// past the end of a sequence. Indexes further out leave the sequence as is.
pub const MAX_PADDING: usize = 1 << 16;

/// A parsed path.
///
/// # Examples
///
/// ```rust
/// use pointfree::objects::Path;
///
/// let path = Path::parse("users[0].name");
/// let segments: Vec<&str> = path.segments().iter().map(|segment| &**segment).collect();
/// assert_eq!(segments, ["users", "0", "name"]);
/// assert_eq!(path.to_string(), "users[0].name");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Arc<str>>,
}

impl Path {
    /// Parses a path string.
    pub fn parse(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut characters = text.char_indices();

        while let Some((position, character)) = characters.next() {
            match character {
                '.' | ']' => flush(&mut segments, &mut current),
                '[' => {
                    let rest = &text[position + 1..];
                    if let Some(end) = rest.find(']') {
                        flush(&mut segments, &mut current);
                        current.push_str(&rest[..end]);
                        flush(&mut segments, &mut current);
                        for _ in rest[..=end].chars() {
                            characters.next();
                        }
                    } else {
                        tracing::debug!(path = text, "unclosed bracket, keeping the rest as one key");
                        current.push_str(&text[position..]);
                        break;
                    }
                }
                other => current.push(other),
            }
        }
        flush(&mut segments, &mut current);

        Self { segments }
    }

    /// Builds a path from already separated segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        Self {
            segments: segments
                .into_iter()
                .map(Into::into)
                .filter(|segment: &Arc<str>| !segment.is_empty())
                .collect(),
        }
    }

    /// The segments, in walking order.
    pub fn segments(&self) -> &[Arc<str>] {
        &self.segments
    }

    /// Returns `true` for the empty path, which addresses the value itself.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns `true` if some segment is the `number` wildcard.
    pub fn has_wildcard(&self) -> bool {
        self.segments.iter().any(|segment| &**segment == WILDCARD)
    }

    /// Appends a segment.
    #[must_use]
    pub fn join(&self, segment: impl Into<Arc<str>>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }
}

fn flush(segments: &mut Vec<Arc<str>>, current: &mut String) {
    if !current.is_empty() {
        segments.push(Arc::from(current.as_str()));
        current.clear();
    }
}

fn is_index(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit())
}

fn as_index(segment: &str) -> Option<usize> {
    if is_index(segment) {
        segment.parse().ok()
    } else {
        None
    }
}

impl fmt::Display for Path {
    /// Renders index segments in brackets and keys after dots.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            if is_index(segment) {
                write!(formatter, "[{segment}]")?;
            } else if position == 0 {
                formatter.write_str(segment)?;
            } else {
                write!(formatter, ".{segment}")?;
            }
        }
        Ok(())
    }
}

impl From<&str> for Path {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for Path {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<usize> for Path {
    fn from(index: usize) -> Self {
        Self {
            segments: vec![Arc::from(index.to_string())],
        }
    }
}

impl From<i32> for Path {
    fn from(index: i32) -> Self {
        Self {
            segments: vec![Arc::from(index.to_string())],
        }
    }
}

// =============================================================================
// Get
// =============================================================================

/// Reads the value at `path`, or [`Value::Absent`] if the walk misses.
///
/// Over a union, the walk is distributed and the result is the union of
/// the outcomes, absent included.
pub fn get_path(value: &Value, path: &Path) -> Value {
    get_segments(value, path.segments())
}

fn get_segments(value: &Value, segments: &[Arc<str>]) -> Value {
    let Some((segment, rest)) = segments.split_first() else {
        return value.clone();
    };

    match value {
        Value::Union(alternatives) => {
            tracing::debug!(alternatives = alternatives.len(), "distributing get over union");
            Value::union(
                alternatives
                    .iter()
                    .map(|alternative| get_segments(alternative, segments)),
            )
        }
        Value::Record(fields) => fields
            .get(&**segment)
            .map_or(Value::Absent, |child| get_segments(child, rest)),
        Value::Sequence(items) if &**segment == WILDCARD => {
            tracing::debug!(elements = items.len(), "reading wildcard segment");
            Value::union(items.iter().map(|item| get_segments(item, rest)))
        }
        Value::Sequence(items) => as_index(segment)
            .and_then(|index| items.get(index))
            .map_or(Value::Absent, |child| get_segments(child, rest)),
        _ => Value::Absent,
    }
}

// =============================================================================
// Update
// =============================================================================

/// Writes at `path`, replacing the value or, when `operation` is a function
/// value, applying it to the current value.
///
/// Missing record keys are created along the walk. An index past the end of
/// a sequence pads it with `null`. Walking into a primitive leaves the
/// primitive unchanged.
///
/// # Errors
///
/// Propagates the error raised by a function value `operation`.
pub fn update_path(value: &Value, path: &Path, operation: &Value) -> Result<Value> {
    update_segments(value, path.segments(), operation)
}

fn apply(current: &Value, operation: &Value) -> Result<Value> {
    match operation {
        Value::Function(function) => function.call(current.clone()),
        replacement => Ok(replacement.clone()),
    }
}

/// The starting point for a location that does not exist yet.
fn vivified(rest: &[Arc<str>]) -> Value {
    if rest.is_empty() {
        Value::Absent
    } else {
        Value::empty_record()
    }
}

fn update_segments(value: &Value, segments: &[Arc<str>], operation: &Value) -> Result<Value> {
    let Some((segment, rest)) = segments.split_first() else {
        return apply(value, operation);
    };

    match value {
        Value::Union(alternatives) => {
            tracing::debug!(alternatives = alternatives.len(), "distributing update over union");
            let updated = alternatives
                .iter()
                .map(|alternative| update_segments(alternative, segments, operation))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::union(updated))
        }
        Value::Record(fields) => {
            let child = match fields.get(&**segment) {
                Some(existing) => update_segments(existing, rest, operation)?,
                None => {
                    tracing::debug!(key = &**segment, "creating missing key");
                    update_segments(&vivified(rest), rest, operation)?
                }
            };
            let mut fields = Arc::clone(fields);
            Arc::make_mut(&mut fields).insert(Arc::clone(segment), child);
            Ok(Value::Record(fields))
        }
        Value::Sequence(items) if &**segment == WILDCARD => {
            tracing::debug!(elements = items.len(), "updating wildcard segment");
            let updated = items
                .iter()
                .map(|item| update_segments(item, rest, operation))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::from(updated))
        }
        Value::Sequence(items) => {
            let Some(index) = as_index(segment) else {
                return Ok(value.clone());
            };
            if index.saturating_sub(items.len()) > MAX_PADDING {
                tracing::debug!(index, elements = items.len(), "index too far past the end, leaving sequence unchanged");
                return Ok(value.clone());
            }
            let mut items = Arc::clone(items);
            let elements = Arc::make_mut(&mut items);
            if index < elements.len() {
                elements[index] = update_segments(&elements[index], rest, operation)?;
            } else {
                elements.resize(index, Value::Null);
                elements.push(update_segments(&vivified(rest), rest, operation)?);
            }
            Ok(Value::Sequence(items))
        }
        _ => Ok(value.clone()),
    }
}

// =============================================================================
// All paths
// =============================================================================

/// Lists every addressable path of `value` in pre-order.
///
/// The alternatives of a union contribute their paths once each.
pub fn all_paths_of(value: &Value) -> Vec<Path> {
    let mut paths: IndexSet<Path, FxBuildHasher> = IndexSet::default();
    let mut stack = vec![(Path::default(), value)];

    while let Some((prefix, current)) = stack.pop() {
        if !prefix.is_empty() {
            paths.insert(prefix.clone());
        }
        // pushed in reverse so that siblings pop in order
        match current {
            Value::Record(fields) => stack.extend(
                fields
                    .iter()
                    .rev()
                    .map(|(key, child)| (prefix.join(Arc::clone(key)), child)),
            ),
            Value::Sequence(items) => stack.extend(
                items
                    .iter()
                    .enumerate()
                    .rev()
                    .map(|(index, child)| (prefix.join(index.to_string()), child)),
            ),
            Value::Union(alternatives) => stack.extend(
                alternatives
                    .iter()
                    .rev()
                    .map(|alternative| (prefix.clone(), alternative)),
            ),
            _ => {}
        }
    }

    paths.into_iter().collect()
}

// =============================================================================
// Function values
// =============================================================================

/// `value -> value at path`
///
/// # Examples
///
/// ```rust
/// use pointfree::function::call;
/// use pointfree::{objects, Value};
///
/// let input = Value::record([(
///     "a",
///     Value::record([("b", Value::sequence([Value::record([("d", "x")]), Value::from("y")]))]),
/// )]);
/// assert_eq!(call(&objects::get("a.b[0].d"), input.clone()).unwrap(), Value::from("x"));
/// assert_eq!(call(&objects::get("a.b[1]"), input.clone()).unwrap(), Value::from("y"));
/// assert_eq!(call(&objects::get("a.c"), input).unwrap(), Value::Absent);
/// ```
pub fn get(path: impl Into<Path>) -> Function {
    let path = path.into();
    Function::from_fn("Get", move |arguments| Ok(get_path(arguments.get(0), &path)))
}

/// `value -> value with the location at path replaced or transformed`
///
/// `operation` is either the replacement value or a function value applied
/// to the current value (absent when the location does not exist yet).
///
/// # Examples
///
/// ```rust
/// use pointfree::function::call;
/// use pointfree::{numbers, objects, Value};
///
/// let input = Value::record([("a", Value::record([("e", 1)]))]);
/// assert_eq!(
///     call(&objects::update("a.b.c.d", 2), input).unwrap(),
///     Value::record([(
///         "a",
///         Value::record([
///             ("e", Value::from(1)),
///             ("b", Value::record([("c", Value::record([("d", 2)]))])),
///         ]),
///     )])
/// );
///
/// let counter = Value::record([("count", 1)]);
/// let increment = objects::update("count", numbers::add().bind([Value::from(1)]));
/// assert_eq!(call(&increment, counter).unwrap(), Value::record([("count", 2)]));
/// ```
pub fn update(path: impl Into<Path>, operation: impl Into<Value>) -> Function {
    let path = path.into();
    let operation = operation.into();
    Function::from_fn("Update", move |arguments| {
        update_path(arguments.get(0), &path, &operation)
    })
}

/// `value -> [path, ...]` as path strings, in pre-order.
pub fn all_paths() -> Function {
    Function::from_fn("AllPaths", |arguments| {
        Ok(Value::sequence(
            all_paths_of(arguments.get(0))
                .iter()
                .map(|path| Value::from(path.to_string())),
        ))
    })
}
