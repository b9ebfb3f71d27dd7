//! The structured data that function values transform.
//!
//! [`Value`] is an immutable, cheaply clonable sum type: containers are
//! shared behind [`Arc`], so passing a value through a pipeline never copies
//! its contents. Every combinator returns a new value instead of mutating
//! its input.
//!
//! # Shapes
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | [`Value::Absent`] | Explicit "no value" (missing path, failed search) |
//! | [`Value::Null`] | The null literal, a regular domain value |
//! | [`Value::Bool`], [`Value::Number`], [`Value::String`] | Primitives |
//! | [`Value::Sequence`] | Ordered heterogeneous sequence |
//! | [`Value::Record`] | String-keyed record in insertion order |
//! | [`Value::Union`] | Alternative of several values |
//! | [`Value::Function`] | A function value carried as data |
//!
//! # Examples
//!
//! ```rust
//! use pointfree::Value;
//!
//! let user = Value::record([("name", Value::from("Ada")), ("age", Value::from(36))]);
//! assert_eq!(user.field("name"), Some(&Value::from("Ada")));
//! assert_eq!(user.to_string(), r#"{"name": "Ada", "age": 36}"#);
//! ```

mod number;
#[cfg(feature = "serde")]
mod serde_impl;

pub use number::Number;

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};
use smallvec::SmallVec;

use crate::function::Function;

/// Insertion-ordered fields of a [`Value::Record`].
pub type Fields = IndexMap<Arc<str>, Value, FxBuildHasher>;

/// A structured, immutable value.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// Explicit absence, distinct from every domain value including `Null`.
    #[default]
    Absent,
    /// The null literal.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(Number),
    /// A string.
    String(Arc<str>),
    /// An ordered sequence.
    Sequence(Arc<Vec<Value>>),
    /// A record with string keys in insertion order.
    Record(Arc<Fields>),
    /// An alternative of values. Build it with [`Value::union`].
    Union(Arc<Vec<Value>>),
    /// A function value embedded in data.
    Function(Function),
}

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);

// =============================================================================
// Construction
// =============================================================================

impl Value {
    /// Creates a string value.
    pub fn string(text: impl Into<Arc<str>>) -> Self {
        Self::String(text.into())
    }

    /// Creates a sequence from any iterable of values.
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::Sequence(Arc::new(items.into_iter().map(Into::into).collect()))
    }

    /// Creates a record from `(key, value)` pairs.
    ///
    /// A repeated key keeps its first position and its last value.
    pub fn record<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Arc<str>>,
        V: Into<Self>,
    {
        Self::Record(Arc::new(
            fields
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        ))
    }

    /// Creates an empty record.
    pub fn empty_record() -> Self {
        Self::Record(Arc::new(Fields::default()))
    }

    /// Creates an alternative of values.
    ///
    /// Nested unions are flattened, duplicates are dropped (the first
    /// occurrence keeps its position), a single alternative collapses to
    /// itself and no alternative at all yields [`Value::Absent`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointfree::Value;
    ///
    /// let union = Value::union([Value::from("a"), Value::from("b"), Value::from("a")]);
    /// assert_eq!(union.alternatives().len(), 2);
    ///
    /// assert_eq!(Value::union([Value::from(1)]), Value::from(1));
    /// assert_eq!(Value::union(Vec::<Value>::new()), Value::Absent);
    /// ```
    pub fn union<I>(alternatives: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        let mut flattened = Alternatives::default();
        for alternative in alternatives {
            match alternative.into() {
                Self::Union(nested) => nested.iter().cloned().for_each(|inner| flattened.push(inner)),
                other => flattened.push(other),
            }
        }
        let mut flattened = flattened.values;
        match flattened.len() {
            0 => Self::Absent,
            1 => flattened.swap_remove(0),
            _ => Self::Union(Arc::new(flattened)),
        }
    }
}

/// Order-preserving deduplication for [`Value::union`].
///
/// Alternatives are bucketed by a key that structurally equal values always
/// share, so only same-bucket candidates are compared. Sequences, records
/// and functions share one bucket.
#[derive(Default)]
struct Alternatives {
    values: Vec<Value>,
    buckets: FxHashMap<Bucket, SmallVec<[usize; 1]>>,
}

impl Alternatives {
    fn push(&mut self, value: Value) {
        let indices = self.buckets.entry(Bucket::of(&value)).or_default();
        if indices.iter().any(|&index| self.values[index] == value) {
            return;
        }
        indices.push(self.values.len());
        self.values.push(value);
    }
}

#[derive(PartialEq, Eq, Hash)]
enum Bucket {
    Absent,
    Null,
    Bool(bool),
    Number(u64),
    String(Arc<str>),
    Composite,
}

impl Bucket {
    fn of(value: &Value) -> Self {
        match value {
            Value::Absent => Self::Absent,
            Value::Null => Self::Null,
            Value::Bool(boolean) => Self::Bool(*boolean),
            // numbers compare through f64 across representations; -0.0 == 0.0
            Value::Number(number) => {
                let float = number.as_f64();
                Self::Number(if float == 0.0 { 0 } else { float.to_bits() })
            }
            Value::String(text) => Self::String(Arc::clone(text)),
            Value::Sequence(_) | Value::Record(_) | Value::Union(_) | Value::Function(_) => {
                Self::Composite
            }
        }
    }
}

// =============================================================================
// Inspection
// =============================================================================

impl Value {
    /// Short lowercase name of the variant, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Record(_) => "record",
            Self::Union(_) => "union",
            Self::Function(_) => "function",
        }
    }

    /// Returns `true` for [`Value::Absent`].
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` only for `Bool(true)`.
    ///
    /// Predicates are satisfied by exactly `true`; every other value,
    /// including non-boolean results, counts as falsy.
    #[inline]
    pub const fn is_true(&self) -> bool {
        matches!(self, Self::Bool(true))
    }

    /// Returns the boolean, if this is one.
    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(boolean) => Some(*boolean),
            _ => None,
        }
    }

    /// Returns the number, if this is one.
    #[inline]
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a string.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the elements, if this is a sequence.
    #[inline]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the fields, if this is a record.
    #[inline]
    pub fn as_record(&self) -> Option<&Fields> {
        match self {
            Self::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// Returns the function value, if this is one.
    #[inline]
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Looks up a record field.
    pub fn field(&self, key: &str) -> Option<&Self> {
        self.as_record().and_then(|fields| fields.get(key))
    }

    /// The alternatives of a union, or the value itself as a single alternative.
    pub fn alternatives(&self) -> &[Self] {
        match self {
            Self::Union(alternatives) => alternatives,
            other => std::slice::from_ref(other),
        }
    }

    /// Converts the value into a record key.
    ///
    /// Strings are used as is and numbers are rendered in decimal; no other
    /// value can name a key.
    pub fn to_key(&self) -> Option<Arc<str>> {
        match self {
            Self::String(text) => Some(Arc::clone(text)),
            Self::Number(number) => Some(Arc::from(number.to_string())),
            _ => None,
        }
    }
}

// =============================================================================
// Equality
// =============================================================================

impl PartialEq for Value {
    /// Structural equality.
    ///
    /// Records compare field by field regardless of order, unions compare as
    /// sets of alternatives and functions compare by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Absent, Self::Absent) | (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Number(left), Self::Number(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Sequence(left), Self::Sequence(right)) => left == right,
            (Self::Record(left), Self::Record(right)) => left == right,
            (Self::Union(left), Self::Union(right)) => {
                left.len() == right.len()
                    && left.iter().all(|alternative| right.contains(alternative))
            }
            (Self::Function(left), Self::Function(right)) => left.same_as(right),
            _ => false,
        }
    }
}

// =============================================================================
// Display
// =============================================================================

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Bool(boolean) => write!(formatter, "{boolean}"),
            Self::Number(number) => write!(formatter, "{number}"),
            Self::String(text) => write!(formatter, "{text:?}"),
            Self::Sequence(items) => {
                formatter.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                formatter.write_str("]")
            }
            Self::Record(fields) => {
                formatter.write_str("{")?;
                for (index, (key, value)) in fields.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{key:?}: {value}")?;
                }
                formatter.write_str("}")
            }
            Self::Union(alternatives) => {
                for (index, alternative) in alternatives.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(" | ")?;
                    }
                    write!(formatter, "{alternative}")?;
                }
                Ok(())
            }
            Self::Function(function) => write!(formatter, "<fn {}>", function.name()),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(boolean: bool) -> Self {
        Self::Bool(boolean)
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

macro_rules! impl_from_integer {
    ($($integer:ty),*) => {
        $(
            impl From<$integer> for Value {
                fn from(integer: $integer) -> Self {
                    Self::Number(Number::Integer(i128::from(integer)))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, i128);

impl From<usize> for Value {
    fn from(integer: usize) -> Self {
        // usize is at most 64 bits on supported targets
        Self::Number(Number::Integer(integer as i128))
    }
}

impl From<f64> for Value {
    fn from(float: f64) -> Self {
        Self::Number(Number::Float(float))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(Arc::from(text))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(Arc::from(text))
    }
}

impl From<Arc<str>> for Value {
    fn from(text: Arc<str>) -> Self {
        Self::String(text)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::Sequence(Arc::new(items))
    }
}

impl From<Fields> for Value {
    fn from(fields: Fields) -> Self {
        Self::Record(Arc::new(fields))
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    /// `None` becomes [`Value::Absent`].
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Absent, Into::into)
    }
}
