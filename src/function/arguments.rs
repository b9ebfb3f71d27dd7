//! Argument lists: the partial arguments bound into a function value and the
//! final list handed to its evaluation rule.

use smallvec::SmallVec;

use crate::value::{Number, Value};

static ABSENT: Value = Value::Absent;

/// A partial argument bound into a [`Function`](super::Function).
///
/// Only this type can express a placeholder, so a placeholder can never be
/// built from, or confused with, domain data.
///
/// # Examples
///
/// ```rust
/// use pointfree::function::{Argument, __};
/// use pointfree::Value;
///
/// assert_eq!(__, Argument::Placeholder);
/// assert_eq!(Argument::from(3), Argument::Value(Value::from(3)));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Argument {
    /// Fill this slot from the next call-site argument.
    Placeholder,
    /// An argument that was never supplied; merges exactly like a placeholder.
    #[default]
    Unset,
    /// A concrete bound value.
    Value(Value),
}

/// The placeholder token for partial application.
///
/// Named `__` (double underscore) so it can also be matched as a literal
/// token by [`partial!`](crate::partial).
///
/// # Examples
///
/// ```rust
/// use pointfree::function::{call, __};
/// use pointfree::{numbers, Value};
///
/// let minus_one = numbers::sub().bind([__, 1.into()]);
/// assert_eq!(call(&minus_one, 10).unwrap(), Value::from(9));
/// ```
#[allow(non_upper_case_globals)]
pub const __: Argument = Argument::Placeholder;

impl Argument {
    /// Returns `true` for slots that are filled from call-site arguments.
    #[inline]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder | Self::Unset)
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

macro_rules! impl_argument_from {
    ($($source:ty),*) => {
        $(
            impl From<$source> for Argument {
                fn from(value: $source) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

impl_argument_from!(
    bool, i8, i16, i32, i64, u8, u16, u32, u64, i128, usize, f64, Number, &str, String,
    Vec<Value>, super::Function
);

/// The merged argument list received by an evaluation rule.
///
/// Reading past the end yields [`Value::Absent`]: a combinator called with
/// fewer arguments than it reads sees the missing ones as absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arguments(SmallVec<[Value; 4]>);

impl Arguments {
    /// Creates an empty argument list.
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Creates an empty argument list with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(SmallVec::with_capacity(capacity))
    }

    /// The argument at `index`, or [`Value::Absent`] past the end.
    #[inline]
    pub fn get(&self, index: usize) -> &Value {
        self.0.get(index).unwrap_or(&ABSENT)
    }

    /// Number of supplied arguments.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no argument was supplied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The arguments as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    /// Iterates over the arguments.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    pub(crate) fn push(&mut self, value: Value) {
        self.0.push(value);
    }
}

impl FromIterator<Value> for Arguments {
    fn from_iter<I: IntoIterator<Item = Value>>(iterator: I) -> Self {
        Self(iterator.into_iter().collect())
    }
}

impl Extend<Value> for Arguments {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iterator: I) {
        self.0.extend(iterator);
    }
}

impl IntoIterator for Arguments {
    type Item = Value;
    type IntoIter = smallvec::IntoIter<[Value; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Value>> for Arguments {
    fn from(values: Vec<Value>) -> Self {
        Self(SmallVec::from_vec(values))
    }
}
