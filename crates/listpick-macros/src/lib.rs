//! Proc macros for listpick.
//!
//! - [`FieldAccessible`] - Generate the attribute table and getter that let
//!   listpick look up record fields by name

mod field;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `FieldAccessible` and `Selectable` for a struct with named fields.
///
/// Every named field, private ones included, becomes a queryable attribute
/// in declaration order. The declared type is inferred from the Rust type:
///
/// | Rust type | Declared type |
/// |-----------|---------------|
/// | `String`, `&str`, `Cow<str>` | `Text` |
/// | `i8`, `i16`, `i32`, `u8`, `u16` | `Int` |
/// | `i64`, `isize`, `u32`, `u64`, `usize` | `Long` |
/// | `f32`, `f64` | `Float` |
/// | `bool` | `Bool` |
/// | `char` | `Char` |
///
/// `Option<T>`, `Box<T>` and references use the type of `T`. Fields of any
/// other type are left out unless given an explicit type.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `Text`, `Int`, `Long`, `Float`, `Bool`, `Char` | Explicit declared type; the field type must implement `AsValue` |
/// | `Opaque` | Exposes the field's `Display` text; never coerced, so never matched |
/// | `ty = "..."` | Same as above, as a string |
/// | `rename = "..."` | Attribute name used by queries |
/// | `skip` | Leave the field out |
///
/// # Generated Code
///
/// 1. A `&'static str` constant per attribute (`Student::NAME`)
/// 2. `FieldAccessible::field_descriptors()` and `field_value()`
/// 3. `Selectable::shape()` returning `Shape::Record`
///
/// # Example
///
/// ```ignore
/// use listpick::{select_from_list, FieldAccessible};
///
/// #[derive(FieldAccessible)]
/// struct Student {
///     name: String,
///     age: i32,
///     #[pick(rename = "isGraduated")]
///     is_graduated: bool,
///     #[pick(skip)]
///     notes: String,
/// }
///
/// let found = select_from_list(&students, Student::AGE, "2");
/// ```
#[proc_macro_derive(FieldAccessible, attributes(pick))]
pub fn field_accessible_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    field::field_accessible_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
