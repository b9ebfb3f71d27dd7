//! Derive macros for pointfree record values.
//!
//! # Available Derive Macros
//!
//! - [`IntoRecord`]: converts a struct with named fields into a record
//!   `pointfree::Value`
//!
//! # Example
//!
//! ```rust,ignore
//! use pointfree::{IntoRecord, Value};
//!
//! #[derive(IntoRecord)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! let user = Value::from(User { name: "Ada".to_string(), age: 36 });
//! assert_eq!(user.field("name"), Some(&Value::from("Ada")));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod records;

use proc_macro::TokenStream;

/// Derive macro generating `impl From<Struct> for pointfree::Value`.
///
/// The record has one key per field, in declaration order, holding
/// `Value::from(field)`. Every field type must therefore convert into a
/// `Value`.
///
/// # Field Attributes
///
/// - `#[record(rename = "key")]`: use `key` instead of the field name
/// - `#[record(skip)]`: leave the field out of the record
///
/// # Generated Code
///
/// ```rust,ignore
/// impl From<StructName> for ::pointfree::Value {
///     fn from(source: StructName) -> Self {
///         ::pointfree::Value::record(vec![("field", ::pointfree::Value::from(source.field)), ...])
///     }
/// }
/// ```
///
/// # Example
///
/// ```rust,ignore
/// use pointfree::{IntoRecord, Value};
///
/// #[derive(IntoRecord)]
/// struct Post {
///     #[record(rename = "postTitle")]
///     title: String,
///     #[record(skip)]
///     draft: bool,
/// }
///
/// let post = Value::from(Post { title: "Hello".to_string(), draft: true });
/// assert_eq!(post, Value::record([("postTitle", "Hello")]));
/// ```
///
/// # Rejected Shapes
///
/// Tuple structs, unit structs, enums and unions have no field names to
/// use as keys and are rejected with a compile error.
#[proc_macro_derive(IntoRecord, attributes(record))]
pub fn derive_into_record(input: TokenStream) -> TokenStream {
    records::derive_into_record_impl(input)
}
