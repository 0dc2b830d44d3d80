//! Query builder and executor.
//!
//! A [`Query`] names an attribute (record field, map key, or anything for
//! scalar collections) and one or more target strings. Executing it against
//! a slice returns the first matching element.

use tracing::debug;

use crate::coerce::Comparison;
use crate::error::{PickError, Result};
use crate::field::{eq_ignore_case, resolve};
use crate::matcher::{Attribute, Matcher};
use crate::shape::{classify, Classification, Selectable, Shape};

/// Reserved attribute names that select by position.
const INDEX_NAMES: [&str; 2] = ["index", "i"];

/// How the targets of a query were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    /// One target. Mapping values and record strings compare ignoring case,
    /// scalars compare exactly.
    #[default]
    Single,
    /// Several targets, any of which may match. Everything compares exactly.
    AnyOf,
}

impl MatchMode {
    fn comparison(self) -> Comparison {
        match self {
            MatchMode::Single => Comparison::IgnoreCase,
            MatchMode::AnyOf => Comparison::Exact,
        }
    }

    fn scalar_comparison(self) -> Comparison {
        Comparison::Exact
    }
}

/// A single-element lookup.
///
/// # Example
///
/// ```
/// use listpick::Query;
///
/// let names = vec!["John", "Alice", "Bob", "Charlie"];
///
/// assert_eq!(Query::new("").eq("Bob").select(&names), Some(&"Bob"));
/// assert_eq!(Query::new("index").eq("3").select(&names), Some(&"Charlie"));
/// assert_eq!(
///     Query::new("").split("Zed,Alice", ",").position(&names),
///     Some(1)
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    field: String,
    raw: String,
    targets: Vec<String>,
    mode: MatchMode,
    comparison: Option<Comparison>,
    scalar_comparison: Option<Comparison>,
}

impl Query {
    /// Creates a query on `field`.
    ///
    /// `field` is a record attribute name, a map key, or `"index"`/`"i"` for
    /// positional lookup. It is ignored for scalar collections.
    pub fn new(field: impl Into<String>) -> Self {
        Query {
            field: field.into(),
            ..Query::default()
        }
    }

    /// Matches a single target.
    pub fn eq(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.raw = value.clone();
        self.targets = vec![value];
        self.mode = MatchMode::Single;
        self
    }

    /// Matches any of several targets.
    pub fn any_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets = values.into_iter().map(Into::into).collect();
        self.raw = self.targets.join(",");
        self.mode = MatchMode::AnyOf;
        self
    }

    /// Matches any of the pieces of `values` split on `delimiter`.
    ///
    /// A `values` string without the delimiter is a single target. An empty
    /// delimiter never splits. Trailing empty pieces are dropped, so
    /// `"Bob,"` is the single target `"Bob"`. Positional lookups parse the
    /// unsplit string.
    pub fn split(mut self, values: &str, delimiter: &str) -> Self {
        self.raw = values.to_string();
        self.targets = split_targets(values, delimiter);
        self.mode = MatchMode::AnyOf;
        self
    }

    /// Overrides the comparison used for mapping values and string-valued
    /// record attributes.
    pub fn comparison(mut self, comparison: Comparison) -> Self {
        self.comparison = Some(comparison);
        self
    }

    /// Overrides the comparison used for scalar elements.
    pub fn scalar_comparison(mut self, comparison: Comparison) -> Self {
        self.scalar_comparison = Some(comparison);
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the attribute name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the targets.
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Returns the match mode.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns `true` if this query selects by position.
    pub fn is_index(&self) -> bool {
        INDEX_NAMES
            .iter()
            .any(|name| eq_ignore_case(name, &self.field))
    }

    /// Comparison in effect for mapping values and record strings.
    pub fn effective_comparison(&self) -> Comparison {
        self.comparison.unwrap_or_else(|| self.mode.comparison())
    }

    /// Comparison in effect for scalar elements.
    pub fn effective_scalar_comparison(&self) -> Comparison {
        self.scalar_comparison
            .unwrap_or_else(|| self.mode.scalar_comparison())
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Finds the first matching element.
    pub fn select<'a, T: Selectable>(&self, items: &'a [T]) -> Option<&'a T> {
        self.position(items).and_then(|index| items.get(index))
    }

    /// Finds the index of the first matching element.
    pub fn position<T: Selectable>(&self, items: &[T]) -> Option<usize> {
        self.locate(items).ok()
    }

    /// Finds the index of the first matching element, or explains the miss.
    ///
    /// Never panics. [`PickError::Coercion`] is not returned here: targets
    /// that fail to coerce are skipped per element.
    pub fn locate<T: Selectable>(&self, items: &[T]) -> Result<usize> {
        let outcome = self.locate_inner(items);
        match &outcome {
            Ok(index) => debug!(field = %self.field, index, "element selected"),
            Err(err) => debug!(field = %self.field, %err, "nothing selected"),
        }
        outcome
    }

    fn locate_inner<T: Selectable>(&self, items: &[T]) -> Result<usize> {
        if items.is_empty() {
            return Err(PickError::EmptyCollection);
        }

        if self.is_index() {
            return select_index(items.len(), &self.raw);
        }

        let attribute = match classify(items) {
            Classification::Empty => return Err(empty_reason(items)),
            Classification::Mapping => Attribute::Key(&self.field),
            Classification::Scalar => Attribute::Itself,
            Classification::Record { sample } => {
                let field = resolve(sample.field_descriptors(), &self.field)
                    .ok_or_else(|| PickError::UnknownField(self.field.clone()))?;
                Attribute::Field(field)
            }
        };

        let matcher = Matcher::new(
            &self.targets,
            self.effective_comparison(),
            self.effective_scalar_comparison(),
        );

        items
            .iter()
            .position(|item| matcher.matches(&item.shape(), attribute))
            .ok_or(PickError::NoMatch)
    }
}

/// Parses `value` as a position in a collection of `len` elements.
pub fn select_index(len: usize, value: &str) -> Result<usize> {
    let index: i64 = value
        .parse()
        .map_err(|_| PickError::InvalidIndex(value.to_string()))?;

    usize::try_from(index)
        .ok()
        .filter(|index| *index < len)
        .ok_or(PickError::IndexOutOfRange { index, len })
}

fn split_targets(values: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() || !values.contains(delimiter) {
        return vec![values.to_string()];
    }

    let mut targets: Vec<String> = values.split(delimiter).map(str::to_string).collect();
    while targets.last().is_some_and(|last| last.is_empty()) {
        targets.pop();
    }
    targets
}

fn empty_reason<T: Selectable>(items: &[T]) -> PickError {
    let any_present = items
        .iter()
        .any(|item| !matches!(item.shape(), Shape::Absent));

    if any_present {
        PickError::UnsupportedShape
    } else {
        PickError::EmptyCollection
    }
}
