//! Sequence combinators.
//!
//! Every combinator in this module is built on [`reduce_left`], a left fold
//! over the elements, and is returned as a [`Function`](crate::Function) so
//! it can take part in pipelines.
//!
//! # Overview
//!
//! - Transforming: [`map`], [`filter`], [`flat_map`], [`sort`], [`sort_by`]
//! - Folding: [`reduce`], [`reduce_right`], [`sum`], [`join`], [`group_by`]
//! - Searching: [`find`], [`some`], [`every`], [`includes`]
//! - Slicing: [`head`], [`last`], [`tail`], [`take`], [`drop`], [`take_while`]
//! - Building: [`range`], [`length`]
//!
//! Predicates are satisfied only by exactly `true`. [`find`] and
//! [`take_while`] pass the element index as a second argument.
//!
//! An absent input yields [`Value::Absent`](crate::Value::Absent); any other
//! input that is not a sequence raises
//! [`Error::TypeMismatch`](crate::Error::TypeMismatch).
//!
//! # Examples
//!
//! ```rust
//! use pointfree::{numbers, pipe, sequences, strings, Value};
//!
//! let result = pipe!(
//!     Value::sequence([1, 2, 3, 4, 3, 4]),
//!     sequences::map(numbers::add().bind([Value::from(3)])),
//!     sequences::join("."),
//!     strings::split().bind([Value::from(".")]),
//!     sequences::map(strings::to_number()),
//!     sequences::map(numbers::add().bind([Value::from(10)])),
//!     sequences::map(numbers::sub().bind([Value::from(1)])),
//!     sequences::sum(),
//! );
//! assert_eq!(result.unwrap(), Value::from(89));
//! ```

mod fold;
mod group;
mod slice;
mod sort;

pub use fold::{filter, flat_map, join, map, reduce, reduce_left, reduce_right, sum};
pub use group::group_by;
pub use slice::{
    drop, every, find, head, includes, last, length, range, some, tail, take, take_while, MAX_RANGE,
};
pub use sort::{sort, sort_by};

pub(crate) use fold::elements;
