//! Runtime value types for attribute comparison.
//!
//! The [`Value`] enum represents the runtime value of an attribute, a map
//! entry or a scalar element. Every variant except [`Value::None`] has a
//! canonical textual form, which is what mapping and scalar matching compare
//! against.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Runtime value for comparison, borrowed from the source element.
///
/// # Example
///
/// ```
/// use listpick::{Number, Value};
///
/// assert_eq!(Value::String("John").text().as_deref(), Some("John"));
/// assert_eq!(Value::Number(Number::I64(2)).text().as_deref(), Some("2"));
/// assert_eq!(Value::Bool(true).text().as_deref(), Some("true"));
/// assert_eq!(Value::None.text(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(Number),
    /// Boolean value.
    Bool(bool),
    /// Single character.
    Char(char),
    /// Canonical text of a value that is not a scalar (nested maps, lists,
    /// user types). Never coerced, only compared textually in mappings.
    Opaque(Cow<'a, str>),
    /// Attribute not present, null, or unsupported.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns `true` if this is a `String` value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the canonical textual form, or `None` for [`Value::None`].
    ///
    /// Strings and opaque values are returned without allocating.
    pub fn text(&self) -> Option<Cow<'a, str>> {
        match self {
            Value::String(s) => Some(Cow::Borrowed(*s)),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Value::Char(c) => Some(Cow::Owned(c.to_string())),
            Value::Opaque(text) => Some(text.clone()),
            Value::None => None,
        }
    }

    /// Short name of the variant, used in log output.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::Opaque(_) => "opaque",
            Value::None => "none",
        }
    }
}

/// Numeric value supporting all common numeric types.
///
/// Numbers are stored in one of four variants to preserve precision:
/// - `I64` for signed integers
/// - `U64` for unsigned integers
/// - `F32` for single-precision floats
/// - `F64` for double-precision floats
///
/// `F32` keeps its own width so that `0.1f32` prints as `0.1` and equals a
/// target parsed from `"0.1"`. When the two float widths meet, the wider
/// side is narrowed to `f32` first.
///
/// The derived `PartialEq` is structural; use [`Number::equals`] to compare
/// across variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 32-bit floating point.
    F32(f32),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F32(n) => f64::from(n),
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed types.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F32(a), Number::F32(b)) => a.partial_cmp(&b),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),

            (Number::F32(a), Number::F64(b)) => a.partial_cmp(&(b as f32)),
            (Number::F64(a), Number::F32(b)) => (a as f32).partial_cmp(&b),

            // Integers of mixed signedness compare exactly
            (Number::I64(a), Number::U64(b)) => Some(match u64::try_from(a) {
                Ok(a) => a.cmp(&b),
                Err(_) => Ordering::Less,
            }),
            (Number::U64(a), Number::I64(b)) => Some(match u64::try_from(b) {
                Ok(b) => a.cmp(&b),
                Err(_) => Ordering::Greater,
            }),

            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }

    /// Numeric equality across variants. `NaN` equals nothing.
    pub fn equals(self, other: Number) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{n}"),
            Number::U64(n) => write!(f, "{n}"),
            Number::F32(n) => write!(f, "{n}"),
            Number::F64(n) => write!(f, "{n}"),
        }
    }
}

macro_rules! number_from {
    ($variant:ident($target:ty): $($source:ty),*) => {
        $(
            impl From<$source> for Number {
                fn from(n: $source) -> Self {
                    Number::$variant(n as $target)
                }
            }
        )*
    };
}

number_from!(I64(i64): i8, i16, i32, i64, isize);
number_from!(U64(u64): u8, u16, u32, u64, usize);
number_from!(F32(f32): f32);
number_from!(F64(f64): f64);

/// Conversion of a borrowed Rust value into a [`Value`].
///
/// Implemented for the scalar primitives, strings, `Option`, `Box` and
/// references. Map values and derived record fields go through this trait.
pub trait AsValue {
    /// Returns the runtime value of `self`.
    fn as_value(&self) -> Value<'_>;
}

impl AsValue for str {
    fn as_value(&self) -> Value<'_> {
        Value::String(self)
    }
}

impl AsValue for String {
    fn as_value(&self) -> Value<'_> {
        Value::String(self)
    }
}

impl AsValue for Cow<'_, str> {
    fn as_value(&self) -> Value<'_> {
        Value::String(self)
    }
}

impl AsValue for bool {
    fn as_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl AsValue for char {
    fn as_value(&self) -> Value<'_> {
        Value::Char(*self)
    }
}

macro_rules! number_as_value {
    ($($ty:ty),*) => {
        $(
            impl AsValue for $ty {
                fn as_value(&self) -> Value<'_> {
                    Value::Number(Number::from(*self))
                }
            }
        )*
    };
}

number_as_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: AsValue> AsValue for Option<T> {
    fn as_value(&self) -> Value<'_> {
        match self {
            Some(inner) => inner.as_value(),
            None => Value::None,
        }
    }
}

impl<T: AsValue + ?Sized> AsValue for &T {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl<T: AsValue + ?Sized> AsValue for Box<T> {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl AsValue for Value<'_> {
    fn as_value(&self) -> Value<'_> {
        self.clone()
    }
}
