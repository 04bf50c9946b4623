//! Error types for the Drive query builder.

use thiserror::Error;

/// Result type for query builder operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while assembling a query.
///
/// Every variant signals a mistake at the offending call site: an
/// unregistered predicate name, an operator a field cannot carry, or a value
/// outside a fixed enumeration. None of them is transient, and
/// [`DriveQuery::compile`](crate::query::DriveQuery::compile) itself never
/// fails because it only reads already-validated state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A predicate name that is not in the field registry.
    #[error("no filter field named \"{name}\"")]
    UnknownField {
        /// The name the caller supplied.
        name: String,
    },

    /// An operator other than `in` applied to a collection field.
    #[error("collection field \"{field}\" only supports the \"in\" operator (got \"{operator}\")")]
    UnsupportedOperator {
        /// The collection field that rejected the operator.
        field: String,
        /// The operator that was supplied.
        operator: String,
    },

    /// A value outside a parameter's fixed enumeration.
    #[error("\"{value}\" is not a valid {parameter} value; valid values are: {valid}")]
    InvalidEnumValue {
        /// The parameter being set (`corpus`, `orderBy` or `spaces`).
        parameter: &'static str,
        /// The rejected value.
        value: String,
        /// Comma-separated list of accepted values.
        valid: String,
    },
}

impl QueryError {
    /// Creates an unknown-field error.
    pub(crate) fn unknown_field(name: impl Into<String>) -> Self {
        QueryError::UnknownField { name: name.into() }
    }

    /// Creates an unsupported-operator error.
    pub(crate) fn unsupported_operator(
        field: impl Into<String>,
        operator: impl Into<String>,
    ) -> Self {
        QueryError::UnsupportedOperator {
            field: field.into(),
            operator: operator.into(),
        }
    }

    /// Creates an invalid-enum-value error listing the accepted values.
    pub(crate) fn invalid_enum(
        parameter: &'static str,
        value: impl Into<String>,
        valid: &[&str],
    ) -> Self {
        QueryError::InvalidEnumValue {
            parameter,
            value: value.into(),
            valid: valid.join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_message() {
        let error = QueryError::unknown_field("bogus");
        assert_eq!(error.to_string(), "no filter field named \"bogus\"");
    }

    #[test]
    fn test_unsupported_operator_message() {
        let error = QueryError::unsupported_operator("parents", "=");
        assert_eq!(
            error.to_string(),
            "collection field \"parents\" only supports the \"in\" operator (got \"=\")"
        );
    }

    #[test]
    fn test_invalid_enum_message_lists_valid_values() {
        let error = QueryError::invalid_enum("corpus", "bogus", &["domain", "user"]);
        assert_eq!(
            error.to_string(),
            "\"bogus\" is not a valid corpus value; valid values are: domain, user"
        );
    }
}
