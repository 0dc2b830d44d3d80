//! Listpick - pick one element out of a heterogeneous collection.
//!
//! Given a slice of records, maps or plain scalars, listpick finds the first
//! element whose named attribute equals a target string. It supports:
//!
//! - Records with named, typed fields (via `#[derive(FieldAccessible)]`)
//! - Maps with string keys, including JSON objects
//! - Scalars (strings, numbers, booleans, characters) matched by their text
//! - Positional lookup with the reserved names `index` and `i`
//! - Several OR-ed targets, given as a list or a delimited string
//!
//! # Quick Start
//!
//! ```rust
//! use listpick::{select_from_list, select_object_from_list, FieldAccessible};
//!
//! #[derive(FieldAccessible)]
//! struct Student {
//!     name: String,
//!     age: i32,
//!     #[pick(rename = "isGraduated")]
//!     is_graduated: bool,
//! }
//!
//! let students = vec![
//!     Student { name: "John".into(), age: 1, is_graduated: false },
//!     Student { name: "Jane".into(), age: 2, is_graduated: true },
//!     Student { name: "Alice".into(), age: 4, is_graduated: true },
//! ];
//!
//! assert_eq!(select_from_list(&students, "name", "john").unwrap().age, 1);
//! assert_eq!(select_from_list(&students, "AGE", "2").unwrap().name, "Jane");
//! assert_eq!(select_from_list(&students, "index", "2").unwrap().name, "Alice");
//!
//! let found = select_object_from_list(&students, ",", "name", "Bob,Alice").unwrap();
//! assert_eq!(found.name, "Alice");
//! ```
//!
//! # Matching Semantics
//!
//! The collection is classified once, from its first non-absent element:
//!
//! | Shape | Attribute | Single target | Several targets |
//! |-------|-----------|---------------|-----------------|
//! | Mapping | value under the key, as text | ignore case | exact |
//! | Scalar | the element's text | exact | exact |
//! | Record, string field | field text | ignore case | exact |
//! | Record, other field | target coerced to the field type | equal | equal |
//!
//! The first matching element in iteration order wins. Nothing is ever
//! returned as an error from [`select_from_list`] or
//! [`select_object_from_list`]; use [`Query::locate`] to learn why a lookup
//! missed.

mod coerce;
mod error;
mod field;
mod json;
mod matcher;
mod query;
mod select;
mod shape;
mod value;

// Re-export public API
pub use coerce::{coerce, Coerced, Comparison};
pub use error::{PickError, Result};
pub use field::{eq_ignore_case, resolve, FieldAccessible, FieldDescriptor, FieldType};
pub use matcher::{Attribute, Matcher};
pub use query::{select_index, MatchMode, Query};
pub use select::{select_from_list, select_object_from_list};
pub use shape::{classify, Classification, ElementKind, Mapping, Selectable, Shape};
pub use value::{AsValue, Number, Value};

#[cfg(feature = "derive")]
pub use listpick_macros::FieldAccessible;
