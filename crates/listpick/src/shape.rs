//! Element shapes and the shape classifier.
//!
//! Every element type used in a query implements [`Selectable`], which
//! reports one of the [`Shape`]s the matcher knows how to handle. The
//! collection as a whole is classified once, from its first usable element.

use std::borrow::{Borrow, Cow};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::field::FieldAccessible;
use crate::value::{AsValue, Value};

/// The shape of a single element, borrowed from it.
pub enum Shape<'a> {
    /// Null or missing element. Skipped during matching.
    Absent,
    /// Key/value pairs.
    Mapping(&'a dyn Mapping),
    /// A string, number, boolean or character compared by its textual form.
    Scalar(Value<'a>),
    /// A structured record with named attributes.
    Record(&'a dyn FieldAccessible),
    /// Anything else (lists, opaque values). Never matches.
    Unsupported,
}

impl Shape<'_> {
    /// Returns the element kind, or `None` for absent and unsupported shapes.
    pub fn kind(&self) -> Option<ElementKind> {
        match self {
            Shape::Mapping(_) => Some(ElementKind::Mapping),
            Shape::Scalar(_) => Some(ElementKind::Scalar),
            Shape::Record(_) => Some(ElementKind::Record),
            Shape::Absent | Shape::Unsupported => None,
        }
    }
}

/// Trait for collection elements.
///
/// Implemented for the scalar primitives, strings, maps with string keys,
/// JSON values, and wrappers (`Option`, `Box`, references). Records get an
/// implementation from `#[derive(FieldAccessible)]`.
pub trait Selectable {
    /// Reports how this element should be matched.
    fn shape(&self) -> Shape<'_>;
}

/// Key lookup on a mapping element.
pub trait Mapping {
    /// Returns the value stored under `key`, or [`Value::None`] if the key
    /// is missing.
    fn lookup(&self, key: &str) -> Value<'_>;
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsValue,
    S: BuildHasher,
{
    fn lookup(&self, key: &str) -> Value<'_> {
        self.get(key).map_or(Value::None, AsValue::as_value)
    }
}

impl<K, V> Mapping for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsValue,
{
    fn lookup(&self, key: &str) -> Value<'_> {
        self.get(key).map_or(Value::None, AsValue::as_value)
    }
}

impl<K, V, S> Selectable for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsValue,
    S: BuildHasher,
{
    fn shape(&self) -> Shape<'_> {
        Shape::Mapping(self)
    }
}

impl<K, V> Selectable for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsValue,
{
    fn shape(&self) -> Shape<'_> {
        Shape::Mapping(self)
    }
}

macro_rules! scalar_selectable {
    ($($ty:ty),*) => {
        $(
            impl Selectable for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Scalar(self.as_value())
                }
            }
        )*
    };
}

scalar_selectable!(
    str, String, bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64
);

impl Selectable for Cow<'_, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Value::String(self))
    }
}

impl Selectable for Value<'_> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Value::None => Shape::Absent,
            Value::Opaque(_) => Shape::Unsupported,
            other => Shape::Scalar(other.clone()),
        }
    }
}

impl<T: Selectable> Selectable for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(inner) => inner.shape(),
            None => Shape::Absent,
        }
    }
}

impl<T: Selectable + ?Sized> Selectable for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Selectable + ?Sized> Selectable for Box<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

/// The three element kinds a collection can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Mapping,
    Scalar,
    Record,
}

/// Result of classifying a collection.
pub enum Classification<'a> {
    /// No usable element: the collection is empty, holds only absent
    /// elements, or its first usable element has an unsupported shape.
    Empty,
    /// Elements are mappings.
    Mapping,
    /// Elements are scalars.
    Scalar,
    /// Elements are records; `sample` is the first usable one, whose
    /// descriptor table drives attribute resolution.
    Record { sample: &'a dyn FieldAccessible },
}

impl Classification<'_> {
    /// Returns the element kind, or `None` for [`Classification::Empty`].
    pub fn kind(&self) -> Option<ElementKind> {
        match self {
            Classification::Empty => None,
            Classification::Mapping => Some(ElementKind::Mapping),
            Classification::Scalar => Some(ElementKind::Scalar),
            Classification::Record { .. } => Some(ElementKind::Record),
        }
    }
}

/// Classifies a collection by its first non-absent element.
///
/// Only that first sample is inspected. Later elements with a different
/// shape are treated as non-matches by the matcher.
pub fn classify<T: Selectable>(items: &[T]) -> Classification<'_> {
    let sample = items
        .iter()
        .map(Selectable::shape)
        .find(|shape| !matches!(shape, Shape::Absent));

    match sample {
        Some(Shape::Mapping(_)) => Classification::Mapping,
        Some(Shape::Scalar(_)) => Classification::Scalar,
        Some(Shape::Record(sample)) => Classification::Record { sample },
        Some(Shape::Absent) | Some(Shape::Unsupported) | None => Classification::Empty,
    }
}
