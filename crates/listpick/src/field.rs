//! Record attribute access.
//!
//! Records expose their attributes through the [`FieldAccessible`] trait: an
//! ordered table of [`FieldDescriptor`]s plus a getter keyed by descriptor
//! name. The trait is usually derived with `#[derive(FieldAccessible)]`, but
//! can also be implemented by hand.

use std::fmt;

use crate::value::Value;

/// Declared type of a record attribute.
///
/// This is the closed set of types that target strings can be coerced into.
/// [`FieldType::Char`] falls back to textual comparison and
/// [`FieldType::Opaque`] is never coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Text, compared as a string.
    Text,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    /// Floating point.
    Float,
    /// Boolean, `true` or `false` ignoring case.
    Bool,
    /// Single character.
    Char,
    /// Anything else. Has a textual form but no coercion.
    Opaque,
}

impl FieldType {
    /// Lowercase name of the type, as used in messages.
    pub fn name(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Int => "int",
            FieldType::Long => "long",
            FieldType::Float => "float",
            FieldType::Bool => "bool",
            FieldType::Char => "char",
            FieldType::Opaque => "opaque",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name and declared type of one record attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Attribute name as exposed to queries.
    pub name: &'static str,
    /// Declared type, used for coercion.
    pub ty: FieldType,
}

impl FieldDescriptor {
    /// Creates a new descriptor.
    pub const fn new(name: &'static str, ty: FieldType) -> Self {
        FieldDescriptor { name, ty }
    }
}

/// Trait for records whose attributes can be looked up by name.
///
/// # Derive Usage
///
/// ```
/// use listpick::{FieldAccessible, select_from_list};
///
/// #[derive(FieldAccessible)]
/// struct Student {
///     name: String,
///     age: i32,
///     #[pick(rename = "isGraduated")]
///     is_graduated: bool,
/// }
///
/// let students = vec![
///     Student { name: "John".into(), age: 1, is_graduated: false },
///     Student { name: "Jane".into(), age: 2, is_graduated: true },
/// ];
///
/// let found = select_from_list(&students, "ISGRADUATED", "true").unwrap();
/// assert_eq!(found.name, "Jane");
/// ```
///
/// # Manual Implementation
///
/// ```
/// use listpick::{FieldAccessible, FieldDescriptor, FieldType, Value, Number};
///
/// struct Track {
///     title: String,
///     length: u32,
/// }
///
/// impl FieldAccessible for Track {
///     fn field_descriptors(&self) -> &'static [FieldDescriptor] {
///         const FIELDS: &[FieldDescriptor] = &[
///             FieldDescriptor::new("title", FieldType::Text),
///             FieldDescriptor::new("length", FieldType::Long),
///         ];
///         FIELDS
///     }
///
///     fn field_value(&self, name: &str) -> Value<'_> {
///         match name {
///             "title" => Value::String(&self.title),
///             "length" => Value::Number(Number::from(self.length)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
///
/// A manual record also needs a [`Selectable`](crate::Selectable) impl
/// returning [`Shape::Record`](crate::Shape::Record) to be used in a query;
/// the derive generates both.
pub trait FieldAccessible {
    /// Returns the declared attributes of this record type, in declaration
    /// order.
    fn field_descriptors(&self) -> &'static [FieldDescriptor];

    /// Returns the value of the attribute with the exact descriptor `name`,
    /// or [`Value::None`] if the attribute is absent or unknown.
    fn field_value(&self, name: &str) -> Value<'_>;
}

/// Finds the first declared attribute whose name equals `name` ignoring case.
///
/// Declaration order breaks ties, so a record declaring both `Name` and
/// `name` always resolves to the earlier one.
pub fn resolve<'d>(descriptors: &'d [FieldDescriptor], name: &str) -> Option<&'d FieldDescriptor> {
    descriptors
        .iter()
        .find(|descriptor| eq_ignore_case(descriptor.name, name))
}

/// Case-insensitive string equality, one character at a time.
///
/// Two characters are equal when they are identical, when their uppercase
/// forms are, or when the lowercase forms of those are. Only single-char
/// case mappings take part, so `"ß"` never equals `"SS"`, while dotted `"İ"`
/// equals `"i"`. Strings of different character counts are never equal.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.len() == b.len() && a.eq_ignore_ascii_case(b) {
        return true;
    }
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| chars_eq_ignore_case(x, y))
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (upper_a, upper_b) = (simple_upper(a), simple_upper(b));
    upper_a == upper_b || simple_lower(upper_a) == simple_lower(upper_b)
}

fn simple_upper(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(upper), None) => upper,
        _ => c,
    }
}

// `İ` is the only character whose lowercase expands; its first char is the
// single-char mapping.
fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    struct Song {
        title: String,
        plays: i64,
    }

    impl FieldAccessible for Song {
        fn field_descriptors(&self) -> &'static [FieldDescriptor] {
            const FIELDS: &[FieldDescriptor] = &[
                FieldDescriptor::new("title", FieldType::Text),
                FieldDescriptor::new("plays", FieldType::Long),
            ];
            FIELDS
        }

        fn field_value(&self, name: &str) -> Value<'_> {
            match name {
                "title" => Value::String(&self.title),
                "plays" => Value::Number(Number::I64(self.plays)),
                _ => Value::None,
            }
        }
    }

    #[test]
    fn resolves_ignoring_case() {
        let song = Song {
            title: "Intro".to_string(),
            plays: 3,
        };
        let found = resolve(song.field_descriptors(), "TITLE").unwrap();
        assert_eq!(found.name, "title");
        assert_eq!(found.ty, FieldType::Text);
        assert_eq!(song.field_value(found.name), Value::String("Intro"));
        assert_eq!(song.field_value("plays"), Value::Number(Number::I64(3)));
    }

    #[test]
    fn unknown_name_is_none() {
        let song = Song {
            title: String::new(),
            plays: 0,
        };
        assert!(resolve(song.field_descriptors(), "artist").is_none());
        assert_eq!(song.field_value("artist"), Value::None);
    }

    #[test]
    fn declaration_order_breaks_ties() {
        const FIELDS: &[FieldDescriptor] = &[
            FieldDescriptor::new("Name", FieldType::Text),
            FieldDescriptor::new("name", FieldType::Int),
        ];
        assert_eq!(resolve(FIELDS, "name").unwrap().ty, FieldType::Text);
    }

    #[test]
    fn unicode_case_folding() {
        assert!(eq_ignore_case("ÉCOLE", "école"));
        assert!(eq_ignore_case("John", "jOHN"));
        assert!(!eq_ignore_case("John", "Johnny"));
    }

    #[test]
    fn case_folding_is_per_character() {
        assert!(eq_ignore_case("İ", "i"));
        assert!(eq_ignore_case("İstanbul", "ISTANBUL"));
        assert!(eq_ignore_case("ΣΟΦΟΣ", "σοφος"));
        assert!(!eq_ignore_case("ß", "SS"));
        assert!(!eq_ignore_case("ß", "s"));
        assert!(eq_ignore_case("", ""));
    }
}
