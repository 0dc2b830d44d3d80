//! Coercion of target strings into declared attribute types.

use crate::error::{PickError, Result};
use crate::field::{eq_ignore_case, FieldType};
use crate::value::{Number, Value};

/// How two strings are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Comparison {
    /// Equal ignoring case.
    #[default]
    IgnoreCase,
    /// Byte-for-byte equal.
    Exact,
}

impl Comparison {
    /// Compares `actual` against `target` under this rule.
    pub fn text_eq(self, actual: &str, target: &str) -> bool {
        match self {
            Comparison::IgnoreCase => eq_ignore_case(actual, target),
            Comparison::Exact => actual == target,
        }
    }
}

/// A target string converted into a declared attribute type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coerced<'t> {
    Text(&'t str),
    Number(Number),
    Bool(bool),
}

impl Coerced<'_> {
    /// Tests whether `actual` equals this coerced target.
    ///
    /// Text targets compare against the textual form of `actual` using
    /// `comparison`; numbers compare numerically across integer and float
    /// representations; booleans compare only with booleans.
    pub fn matches(&self, actual: &Value<'_>, comparison: Comparison) -> bool {
        match self {
            Coerced::Text(target) => actual
                .text()
                .is_some_and(|text| comparison.text_eq(&text, target)),
            Coerced::Number(target) => actual
                .as_number()
                .is_some_and(|number| number.equals(*target)),
            Coerced::Bool(target) => actual.as_bool() == Some(*target),
        }
    }
}

/// Parses `input` into `ty`.
///
/// Integers are base-10 with an optional sign. A [`FieldType::Long`] too
/// large for `i64` is read as `u64`, so unsigned attributes can still match
/// their own decimal text. Booleans accept `true` and
/// `false` in any case. [`FieldType::Char`] and [`FieldType::Opaque`] have
/// no coercion and always fail.
pub fn coerce(ty: FieldType, input: &str) -> Result<Coerced<'_>> {
    let failed = || PickError::Coercion {
        input: input.to_string(),
        ty,
    };

    match ty {
        FieldType::Text => Ok(Coerced::Text(input)),
        FieldType::Int => input
            .parse::<i32>()
            .map(|n| Coerced::Number(Number::from(n)))
            .map_err(|_| failed()),
        FieldType::Long => input
            .parse::<i64>()
            .map(Number::from)
            .or_else(|_| input.parse::<u64>().map(Number::from))
            .map(Coerced::Number)
            .map_err(|_| failed()),
        FieldType::Float => input
            .parse::<f64>()
            .map(|n| Coerced::Number(Number::from(n)))
            .map_err(|_| failed()),
        FieldType::Bool => {
            if eq_ignore_case(input, "true") {
                Ok(Coerced::Bool(true))
            } else if eq_ignore_case(input, "false") {
                Ok(Coerced::Bool(false))
            } else {
                Err(failed())
            }
        }
        FieldType::Char | FieldType::Opaque => Err(failed()),
    }
}
