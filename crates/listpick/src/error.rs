//! Error types for the listpick crate.
//!
//! None of these ever escape [`select_from_list`](crate::select_from_list) or
//! [`select_object_from_list`](crate::select_object_from_list); they exist so
//! that [`Query::locate`](crate::Query::locate) can explain a miss.

use thiserror::Error;

use crate::field::FieldType;

/// Reasons a query found nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickError {
    /// The collection is empty or holds only absent elements.
    #[error("collection is empty or holds only absent elements")]
    EmptyCollection,

    /// The first usable element is neither a mapping, a scalar nor a record.
    #[error("elements of this shape cannot be matched")]
    UnsupportedShape,

    /// No declared record field matches the requested name.
    #[error("record has no field named '{0}'")]
    UnknownField(String),

    /// The index value is not a base-10 integer.
    #[error("invalid index '{0}'")]
    InvalidIndex(String),

    /// The parsed index lies outside `0..len`.
    #[error("index {index} is out of range for {len} elements")]
    IndexOutOfRange { index: i64, len: usize },

    /// A target string could not be converted to the field's declared type.
    #[error("cannot coerce '{input}' into {ty}")]
    Coercion { input: String, ty: FieldType },

    /// Every element was examined and none matched.
    #[error("no element matched")]
    NoMatch,
}

/// Result type for listpick operations.
pub type Result<T> = std::result::Result<T, PickError>;
