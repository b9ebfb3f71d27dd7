//! # pointfree
//!
//! Point-free combinators over immutable structured data.
//!
//! ## Overview
//!
//! Every operation in this library is a [`Function`]: an immutable value
//! that can be partially applied, composed, stored inside data and passed
//! around. Pipelines thread a [`Value`] through a list of function values
//! without mutating anything. It includes:
//!
//! - **Function Values**: partial application with `__` placeholders and a
//!   single, generic argument-merging rule
//! - **Pipelines**: `pipe!`, `pipe_right!`, `compose!`, `partial!`
//! - **Sequences**: map/filter/reduce family, take/drop, sort, join, group-by
//! - **Records**: path-based get/update, templates, deep key casing
//! - **Leaf Combinators**: numbers, strings, booleans, unions
//!
//! ## Feature Flags
//!
//! - `compose`: Pipelines, composition and the macros
//! - `collections`: Sequence combinators (implies `compose`)
//! - `objects`: Record combinators and the path accessor (implies `collections`)
//! - `serde`: `Serialize`/`Deserialize` for [`Value`]
//! - `derive`: `#[derive(IntoRecord)]`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use pointfree::prelude::*;
//!
//! let scores = Value::sequence([3, 1, 2]);
//! let result = pipe!(
//!     scores,
//!     sequences::map(numbers::mul().bind([Value::from(10)])),
//!     sequences::sort(),
//!     sequences::join(", "),
//! );
//! assert_eq!(result.unwrap(), Value::from("10, 20, 30"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::module_name_repetitions)]

/// Prelude module for convenient imports.
///
/// Re-exports the core types, the evaluators and the combinator modules.
///
/// # Usage
///
/// ```rust
/// use pointfree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::function::{Argument, Function, __, apply, call, call2, call3, eval};
    pub use crate::value::{Number, Value};
    pub use crate::{booleans, numbers, strings, unions};

    #[cfg(feature = "compose")]
    pub use crate::compose::{
        compose, compose_left, constant, flip, identity, partial, pipe, pipe_right,
    };

    #[cfg(feature = "collections")]
    pub use crate::sequences;

    #[cfg(feature = "objects")]
    pub use crate::objects;

    #[cfg(feature = "derive")]
    pub use crate::IntoRecord;
}

pub mod booleans;
pub mod error;
pub mod function;
pub mod numbers;
pub mod strings;
pub mod unions;
pub mod value;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "collections")]
pub mod sequences;

#[cfg(feature = "objects")]
pub mod objects;

pub use error::{Error, Result};
pub use function::Function;
pub use value::Value;

#[cfg(feature = "derive")]
pub use pointfree_derive::IntoRecord;
