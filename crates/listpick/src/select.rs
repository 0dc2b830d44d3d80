//! The two classic entry points.
//!
//! Both are thin wrappers over [`Query`] and never fail: every miss,
//! including an empty collection, an unknown attribute or a bad index, is
//! `None`.

use crate::query::Query;
use crate::shape::Selectable;

/// Selects the first element whose `attribute_or_key` equals `value`.
///
/// - Records: the attribute is resolved ignoring case; string attributes
///   compare ignoring case, other attributes compare after converting
///   `value` to the attribute's declared type.
/// - Mappings: the value under `attribute_or_key` compares ignoring case.
/// - Scalars: the element compares exactly; `attribute_or_key` is ignored.
/// - `"index"` or `"i"` (any case) selects `items[value]`.
///
/// ```
/// use listpick::select_from_list;
///
/// let names = ["John", "Alice", "Bob", "Charlie"];
/// assert_eq!(select_from_list(&names, "", "John"), Some(&"John"));
/// assert_eq!(select_from_list(&names, "i", "3"), Some(&"Charlie"));
/// assert_eq!(select_from_list(&names, "index", "-1"), None);
/// ```
pub fn select_from_list<'a, T: Selectable>(
    items: &'a [T],
    attribute_or_key: &str,
    value: &str,
) -> Option<&'a T> {
    Query::new(attribute_or_key).eq(value).select(items)
}

/// Selects the first element whose `key_or_field` equals any of `values`.
///
/// When `values` contains `delimiter` it is split into several targets;
/// otherwise it is a single target. Every comparison is exact. Positional
/// lookup works as in [`select_from_list`].
///
/// ```
/// use listpick::select_object_from_list;
///
/// let names = ["John", "Alice", "Bob"];
/// assert_eq!(select_object_from_list(&names, ",", "", "Bob,Alice"), Some(&"Alice"));
/// assert_eq!(select_object_from_list(&names, ",", "", "alice"), None);
/// ```
pub fn select_object_from_list<'a, T: Selectable>(
    items: &'a [T],
    delimiter: &str,
    key_or_field: &str,
    values: &str,
) -> Option<&'a T> {
    Query::new(key_or_field).split(values, delimiter).select(items)
}
