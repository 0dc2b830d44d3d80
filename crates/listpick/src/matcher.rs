//! Per-element equality between an attribute and the query targets.

use tracing::trace;

use crate::coerce::{coerce, Comparison};
use crate::field::{FieldAccessible, FieldDescriptor};
use crate::shape::{Mapping, Shape};
use crate::value::Value;

/// What each element is matched on. Fixed once per query, after
/// classification and attribute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute<'q> {
    /// A mapping key.
    Key(&'q str),
    /// The scalar element itself.
    Itself,
    /// A resolved record attribute.
    Field(&'static FieldDescriptor),
}

/// Tests elements against one or more target strings.
///
/// A matcher holds two comparison rules: `comparison` for mapping values and
/// string-valued record attributes, `scalar_comparison` for scalar elements.
/// Any one target matching is enough.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'q> {
    targets: &'q [String],
    comparison: Comparison,
    scalar_comparison: Comparison,
}

impl<'q> Matcher<'q> {
    /// Creates a matcher over `targets`.
    pub fn new(targets: &'q [String], comparison: Comparison, scalar_comparison: Comparison) -> Self {
        Matcher {
            targets,
            comparison,
            scalar_comparison,
        }
    }

    /// Tests one element.
    ///
    /// An element whose shape does not fit `attribute` (a scalar in a
    /// collection classified as records, say) never matches.
    pub fn matches(&self, shape: &Shape<'_>, attribute: Attribute<'_>) -> bool {
        match (shape, attribute) {
            (Shape::Mapping(map), Attribute::Key(key)) => self.mapping(*map, key),
            (Shape::Scalar(value), Attribute::Itself) => self.scalar(value),
            (Shape::Record(record), Attribute::Field(field)) => self.record(*record, field),
            _ => false,
        }
    }

    fn mapping(&self, map: &dyn Mapping, key: &str) -> bool {
        match map.lookup(key).text() {
            Some(text) => self.any_text(&text, self.comparison),
            None => false,
        }
    }

    fn scalar(&self, value: &Value<'_>) -> bool {
        match value.text() {
            Some(text) => self.any_text(&text, self.scalar_comparison),
            None => false,
        }
    }

    fn record(&self, record: &dyn FieldAccessible, field: &FieldDescriptor) -> bool {
        let value = record.field_value(field.name);
        match &value {
            Value::None => false,
            Value::String(text) => self.any_text(text, self.comparison),
            Value::Char(c) => self.any_text(&c.to_string(), self.comparison),
            Value::Opaque(_) => {
                trace!(field = field.name, "opaque attribute is never compared");
                false
            }
            Value::Number(_) | Value::Bool(_) => self.targets.iter().any(|target| {
                match coerce(field.ty, target) {
                    Ok(coerced) => coerced.matches(&value, self.comparison),
                    Err(err) => {
                        trace!(
                            field = field.name,
                            actual = value.type_name(),
                            %err,
                            "skipping target"
                        );
                        false
                    }
                }
            }),
        }
    }

    fn any_text(&self, actual: &str, comparison: Comparison) -> bool {
        self.targets
            .iter()
            .any(|target| comparison.text_eq(actual, target))
    }
}
