//! Pipelines and composition of function values.
//!
//! # Overview
//!
//! - [`pipe`] / [`pipe!`]: thread a value through stages left to right
//! - [`pipe_right`] / [`pipe_right!`]: thread a value through stages right to left
//! - [`compose`] / [`compose!`]: build a function value, right to left
//! - [`compose_left`]: build a function value, left to right
//! - [`partial!`]: partial application with `__` placeholders
//!
//! # Helper Functions
//!
//! - [`identity`]: returns its first argument
//! - [`constant`]: always returns the same value
//! - [`flip`]: swaps the first two arguments
//!
//! # Examples
//!
//! ## Pipeline (left-to-right)
//!
//! ```
//! use pointfree::{numbers, pipe, Value};
//!
//! let double = numbers::mul().bind([Value::from(2)]);
//! let add_one = numbers::add().bind([Value::from(1)]);
//!
//! // add_one(double(5)) = 11
//! assert_eq!(pipe!(5, double, add_one).unwrap(), Value::from(11));
//! ```
//!
//! ## Function Composition (right-to-left)
//!
//! ```
//! use pointfree::function::call;
//! use pointfree::{compose, numbers, Value};
//!
//! let double = numbers::mul().bind([Value::from(2)]);
//! let add_one = numbers::add().bind([Value::from(1)]);
//!
//! // compose!(f, g)(x) = f(g(x))
//! let composed = compose!(add_one, double);
//! assert_eq!(call(&composed, 5).unwrap(), Value::from(11));
//! ```
//!
//! ## Partial Application
//!
//! ```
//! use pointfree::function::call;
//! use pointfree::{numbers, partial, Value};
//!
//! let ten_minus = partial!(numbers::sub(), 10, __);
//! assert_eq!(call(&ten_minus, 3).unwrap(), Value::from(7));
//! ```
//!
//! # Short-circuiting
//!
//! Pipelines stop at the first stage that raises an error and at the first
//! stage that produces [`Value::Absent`](crate::Value::Absent); later stages
//! never observe a missing value.
//!
//! # Laws
//!
//! - **Identity**: `pipe(x, [])` and `pipe_right([], x)` are `x`
//! - **Associativity**: `compose!(f, compose!(g, h))` behaves like `compose!(compose!(f, g), h)`
//! - **Double Flip Identity**: `flip(flip(f))` behaves like `f`

mod compose_macro;
mod partial_macro;
mod pipe_macro;
mod pipeline;
mod utils;

pub use pipeline::{compose, compose_left, pipe, pipe_right};
pub use utils::{constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::partial;
pub use crate::pipe;
pub use crate::pipe_right;
