//! Field model for the Drive filter-expression grammar.
//!
//! The `q` parameter of the files.list endpoint is a comma-joined list of
//! predicates. Every predicate the builder recognizes is declared once in the
//! static registry with its provider-side key and kind; a [`FieldSet`]
//! instantiates that table per builder and holds the values assigned through
//! [`DriveQuery::equal`](crate::query::DriveQuery::equal).
//!
//! The two field kinds serialize differently:
//!
//! - Scalar: `name="Report"`, `trashed!="true"`
//! - Collection: `"folder123" in parents`

use crate::errors::{QueryError, QueryResult};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;
use tracing::trace;

/// Comparison operator in the provider query grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Scalar equality, rendered `=`.
    Equal,
    /// Scalar inequality, rendered `!=`.
    NotEqual,
    /// Collection membership, rendered `in`.
    In,
}

impl Operator {
    /// The raw symbol the provider grammar expects.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::In => "in",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Distinguishes how a field serializes into the filter expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Equality predicate, rendered `<key><op>"<value>"`.
    Scalar,
    /// Membership predicate, rendered `"<value>" in <key>`.
    Collection,
}

impl FieldKind {
    /// Operator assigned at registration time.
    fn default_operator(self) -> Operator {
        match self {
            FieldKind::Scalar => Operator::Equal,
            FieldKind::Collection => Operator::In,
        }
    }
}

/// A value assigned to a filter field.
///
/// Covers the scalar shapes the endpoint accepts in predicates. All variants
/// render into the quoted position of the filter expression.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Plain string value, rendered verbatim.
    Text(String),
    /// Boolean value, rendered lowercase (`true` / `false`).
    Bool(bool),
    /// Timestamp value, rendered RFC 3339 (`2024-01-15T12:00:00Z`).
    Timestamp(DateTime<Utc>),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Timestamp(t) => {
                f.write_str(&t.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

/// One row of the field registry.
struct Registration {
    /// Predicate name callers use.
    name: &'static str,
    /// Provider-side key emitted into the filter expression.
    key: &'static str,
    kind: FieldKind,
}

/// The fixed set of recognized filter predicates.
///
/// Table order is registration order and therefore serialization order in
/// [`FieldSet::serialize`]. Membership never changes at runtime.
const REGISTRY: &[Registration] = &[
    Registration { name: "trashed", key: "trashed", kind: FieldKind::Scalar },
    Registration { name: "name", key: "name", kind: FieldKind::Scalar },
    Registration { name: "fullText", key: "fullText", kind: FieldKind::Scalar },
    Registration { name: "mimeType", key: "mimeType", kind: FieldKind::Scalar },
    Registration { name: "modifiedTime", key: "modifiedTime", kind: FieldKind::Scalar },
    Registration { name: "viewedByMeTime", key: "viewedByMeTime", kind: FieldKind::Scalar },
    Registration { name: "starred", key: "starred", kind: FieldKind::Scalar },
    Registration { name: "sharedWithMe", key: "sharedWithMe", kind: FieldKind::Scalar },
    Registration { name: "parents", key: "parents", kind: FieldKind::Collection },
    Registration { name: "owners", key: "owners", kind: FieldKind::Collection },
    Registration { name: "writers", key: "writers", kind: FieldKind::Collection },
    Registration { name: "readers", key: "readers", kind: FieldKind::Collection },
];

/// A registered filter predicate and its current assignment.
#[derive(Debug, Clone)]
pub struct FilterField {
    key: &'static str,
    kind: FieldKind,
    operator: Operator,
    value: Option<FieldValue>,
}

impl FilterField {
    fn new(key: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            kind,
            operator: kind.default_operator(),
            value: None,
        }
    }

    /// The provider-side key emitted into the filter expression.
    pub fn key(&self) -> &str {
        self.key
    }

    /// The field's kind.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The operator currently in effect.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The assigned value, if any.
    pub fn value(&self) -> Option<&FieldValue> {
        self.value.as_ref()
    }

    /// Renders this field's fragment of the filter expression, or `None`
    /// when no value was assigned.
    fn fragment(&self) -> Option<String> {
        let value = self.value.as_ref()?;
        Some(match self.kind {
            FieldKind::Scalar => format!("{}{}\"{}\"", self.key, self.operator, value),
            FieldKind::Collection => format!("\"{}\" {} {}", value, self.operator, self.key),
        })
    }
}

/// The per-builder collection of filter fields.
///
/// Construction instantiates every registry row with an unset value. The set
/// of valid names is exactly the registry's names; nothing can be added
/// afterwards.
#[derive(Debug, Clone)]
pub struct FieldSet {
    // Parallel to REGISTRY, preserving registration order.
    fields: Vec<FilterField>,
}

impl FieldSet {
    /// Creates a field set with every registered field unset.
    pub(crate) fn new() -> Self {
        Self {
            fields: REGISTRY
                .iter()
                .map(|r| FilterField::new(r.key, r.kind))
                .collect(),
        }
    }

    fn index_of(name: &str) -> Option<usize> {
        REGISTRY.iter().position(|r| r.name == name)
    }

    /// Looks up a field by its registered predicate name.
    pub fn get(&self, name: &str) -> Option<&FilterField> {
        Self::index_of(name).map(|i| &self.fields[i])
    }

    /// The assigned value of a named field, if any.
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.get(name).and_then(FilterField::value)
    }

    /// Assigns a value, and optionally an operator override, to a named field.
    ///
    /// # Errors
    ///
    /// - [`QueryError::UnknownField`] when `name` is not registered.
    /// - [`QueryError::UnsupportedOperator`] when the field is
    ///   collection-kind and the effective operator is not `in`. The field is
    ///   left untouched in that case.
    pub(crate) fn set_value(
        &mut self,
        name: &str,
        value: FieldValue,
        operator: Option<Operator>,
    ) -> QueryResult<()> {
        let index = Self::index_of(name).ok_or_else(|| QueryError::unknown_field(name))?;
        let field = &mut self.fields[index];

        let effective = operator.unwrap_or(field.operator);
        if field.kind == FieldKind::Collection && effective != Operator::In {
            return Err(QueryError::unsupported_operator(name, effective.symbol()));
        }

        field.operator = effective;
        field.value = Some(value);
        Ok(())
    }

    /// Serializes all assigned fields into the provider filter expression.
    ///
    /// Fields are emitted in registration order, unset fields are skipped,
    /// and fragments are joined with `,` (no surrounding spaces). Returns the
    /// empty string when nothing was assigned.
    pub fn serialize(&self) -> String {
        let fragments: Vec<String> = self
            .fields
            .iter()
            .filter_map(FilterField::fragment)
            .collect();
        trace!(fragments = fragments.len(), "serialized filter expression");
        fragments.join(",")
    }
}

impl Default for FieldSet {
    fn default() -> Self {
        Self::new()
    }
}
