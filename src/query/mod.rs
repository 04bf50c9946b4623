//! Fluent query builder for the files.list endpoint.
//!
//! [`DriveQuery`] accumulates filter predicates and request parameters
//! through chainable setters and projects them into a wire-ready
//! [`ListFilesParams`] with [`DriveQuery::compile`]. Setters that validate
//! against a fixed enumeration fail fast at the call site; `compile` itself
//! never fails and may be invoked repeatedly, e.g. with a fresh page token
//! between paginated requests.

use crate::errors::{QueryError, QueryResult};
use crate::fields::{FieldSet, FieldValue, Operator};
use crate::params::ListFilesParams;
use tracing::debug;

/// Valid `corpus` values.
const VALID_CORPUS: &[&str] = &["domain", "user"];

/// Valid `orderBy` sort keys.
const VALID_ORDER_BY: &[&str] = &[
    "createdTime",
    "folder",
    "modifiedByMeTime",
    "modifiedTime",
    "name",
    "quotaBytesUsed",
    "recency",
    "sharedWithMeTime",
    "starred",
    "viewedByMeTime",
];

/// Valid `spaces` values.
const VALID_SPACES: &[&str] = &["drive", "appDataFolder", "photos"];

/// Sort direction for [`DriveQuery::order_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending, the provider default; the sort key is emitted bare.
    #[default]
    Ascending,
    /// Descending, emitted as a trailing ` desc` on the sort key.
    Descending,
}

/// Argument to [`DriveQuery::fields`]: a single response field path or an
/// ordered sequence of them.
#[derive(Debug, Clone)]
pub enum FieldPaths {
    /// One field path.
    One(String),
    /// Several field paths, appended in order.
    Many(Vec<String>),
}

impl From<&str> for FieldPaths {
    fn from(value: &str) -> Self {
        FieldPaths::One(value.to_string())
    }
}

impl From<String> for FieldPaths {
    fn from(value: String) -> Self {
        FieldPaths::One(value)
    }
}

impl From<Vec<String>> for FieldPaths {
    fn from(value: Vec<String>) -> Self {
        FieldPaths::Many(value)
    }
}

impl From<Vec<&str>> for FieldPaths {
    fn from(value: Vec<&str>) -> Self {
        FieldPaths::Many(value.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for FieldPaths {
    fn from(value: &[&str]) -> Self {
        FieldPaths::Many(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FieldPaths {
    fn from(value: [&str; N]) -> Self {
        FieldPaths::Many(value.iter().map(|s| s.to_string()).collect())
    }
}

/// Fluent builder for the parameter set of a "list files" request.
///
/// All setters mutate in place and return the builder for chaining; the ones
/// that validate input return [`QueryResult`] and leave the builder unchanged
/// on failure.
///
/// # Example
///
/// ```
/// use drive_query::{DriveQuery, OrderDirection};
///
/// # fn main() -> drive_query::QueryResult<()> {
/// let mut query = DriveQuery::new();
/// query
///     .equal("trashed", false)?
///     .equal("name", "Report")?
///     .order_by("modifiedTime", OrderDirection::Descending)?
///     .limit(50);
///
/// let params = query.compile();
/// assert_eq!(params.q.as_deref(), Some("trashed=\"false\",name=\"Report\""));
/// assert_eq!(params.order_by.as_deref(), Some("modifiedTime desc"));
/// assert_eq!(params.page_size, Some(50));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DriveQuery {
    filter: FieldSet,
    corpus: Option<String>,
    fields: Vec<String>,
    file_id: Option<String>,
    limit: Option<i32>,
    order_by: Vec<String>,
    spaces: Vec<String>,
    page_token: Option<String>,
}

impl DriveQuery {
    /// Creates an empty query. Compiling it yields a parameter object with
    /// every field unset.
    pub fn new() -> Self {
        Self {
            filter: FieldSet::new(),
            corpus: None,
            fields: Vec::new(),
            file_id: None,
            limit: None,
            order_by: Vec::new(),
            spaces: Vec::new(),
            page_token: None,
        }
    }

    /// Restricts the search scope to a corpus (`domain` or `user`).
    ///
    /// Repeated calls overwrite (last write wins).
    ///
    /// # Errors
    ///
    /// [`QueryError::InvalidEnumValue`] when `key` is not a valid corpus.
    pub fn corpus(&mut self, key: &str) -> QueryResult<&mut Self> {
        if !VALID_CORPUS.contains(&key) {
            return Err(QueryError::invalid_enum("corpus", key, VALID_CORPUS));
        }
        self.corpus = Some(key.to_string());
        Ok(self)
    }

    /// Adds an equality predicate on a registered filter field.
    ///
    /// Scalar fields compare with `=`; collection fields always test
    /// membership with `in`. Reassigning a field overwrites its value.
    ///
    /// # Errors
    ///
    /// [`QueryError::UnknownField`] when `name` is not a registered field.
    pub fn equal(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> QueryResult<&mut Self> {
        self.filter.set_value(name, value.into(), None)?;
        Ok(self)
    }

    /// Adds a predicate with an explicit comparison operator.
    ///
    /// # Errors
    ///
    /// [`QueryError::UnknownField`] for unregistered names;
    /// [`QueryError::UnsupportedOperator`] when anything other than
    /// [`Operator::In`] is applied to a collection field.
    pub fn equal_with(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
        operator: Operator,
    ) -> QueryResult<&mut Self> {
        self.filter.set_value(name, value.into(), Some(operator))?;
        Ok(self)
    }

    /// Starts a negated predicate: `query.not().equal("trashed", true)` emits
    /// `trashed!="true"`. Subject to the same collection-field restriction as
    /// [`DriveQuery::equal_with`].
    pub fn not(&mut self) -> NotClause<'_> {
        NotClause { query: self }
    }

    /// Appends response field paths to request from the endpoint.
    ///
    /// Accepts a single path or a sequence; repeated calls and repeated names
    /// are both kept, in call order, without deduplication.
    pub fn fields(&mut self, value: impl Into<FieldPaths>) -> &mut Self {
        match value.into() {
            FieldPaths::One(path) => self.fields.push(path),
            FieldPaths::Many(paths) => self.fields.extend(paths),
        }
        self
    }

    /// Sets the target file ID. Last write wins.
    pub fn file_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.file_id = Some(id.into());
        self
    }

    /// Sets the page size. Last write wins.
    ///
    /// The value is forwarded as-is: no range validation is performed, so
    /// non-positive values reach the endpoint unchanged.
    pub fn limit(&mut self, n: i32) -> &mut Self {
        self.limit = Some(n);
        self
    }

    /// Appends a sort key. Multiple calls accumulate in call order.
    ///
    /// Descending keys get a trailing ` desc`; ascending keys are emitted
    /// bare.
    ///
    /// # Errors
    ///
    /// [`QueryError::InvalidEnumValue`] when `key` is not a sortable field.
    pub fn order_by(&mut self, key: &str, direction: OrderDirection) -> QueryResult<&mut Self> {
        if !VALID_ORDER_BY.contains(&key) {
            return Err(QueryError::invalid_enum("orderBy", key, VALID_ORDER_BY));
        }
        let clause = match direction {
            OrderDirection::Ascending => key.to_string(),
            OrderDirection::Descending => format!("{} desc", key),
        };
        self.order_by.push(clause);
        Ok(self)
    }

    /// Appends a storage space to search. Multiple calls accumulate, without
    /// deduplication.
    ///
    /// # Errors
    ///
    /// [`QueryError::InvalidEnumValue`] when `key` is not a valid space.
    pub fn spaces(&mut self, key: &str) -> QueryResult<&mut Self> {
        if !VALID_SPACES.contains(&key) {
            return Err(QueryError::invalid_enum("spaces", key, VALID_SPACES));
        }
        self.spaces.push(key.to_string());
        Ok(self)
    }

    /// Sets the pagination cursor for the next request.
    ///
    /// Intended for the paging collaborator: after a response carries a
    /// continuation token, set it here and call [`DriveQuery::compile`]
    /// again.
    pub fn set_page_token(&mut self, token: impl Into<String>) {
        self.page_token = Some(token.into());
    }

    /// Projects the accumulated state into the wire-ready parameter object.
    ///
    /// Pure read: builder state is not modified and the method may be called
    /// any number of times. Each output field is present only when its
    /// accumulator was set.
    pub fn compile(&self) -> ListFilesParams {
        let q = self.filter.serialize();

        let params = ListFilesParams {
            q: (!q.is_empty()).then_some(q),
            corpus: self.corpus.clone(),
            fields: (!self.fields.is_empty()).then(|| self.fields.join(",")),
            file_id: self.file_id.clone(),
            page_size: self.limit,
            page_token: self.page_token.clone(),
            order_by: (!self.order_by.is_empty()).then(|| self.order_by.join(",")),
            spaces: (!self.spaces.is_empty()).then(|| self.spaces.join(",")),
        };
        debug!(
            q = params.q.as_deref().unwrap_or(""),
            page_token = params.page_token.is_some(),
            "compiled list-files parameters"
        );
        params
    }
}

impl Default for DriveQuery {
    fn default() -> Self {
        Self::new()
    }
}

/// Negation clause returned by [`DriveQuery::not`].
#[derive(Debug)]
pub struct NotClause<'a> {
    query: &'a mut DriveQuery,
}

impl<'a> NotClause<'a> {
    /// Adds an inequality predicate, rendered `<key>!="<value>"`.
    ///
    /// # Errors
    ///
    /// Same as [`DriveQuery::equal_with`] with [`Operator::NotEqual`];
    /// collection fields reject negation.
    pub fn equal(
        self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> QueryResult<&'a mut DriveQuery> {
        self.query.equal_with(name, value, Operator::NotEqual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_builder_compiles_to_empty_params() {
        let params = DriveQuery::new().compile();
        assert!(params.is_empty());
        assert_eq!(serde_json::to_value(&params).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn test_scalar_equal_and_not_equal() {
        let mut query = DriveQuery::new();
        query.equal("name", "Report").unwrap();
        assert_eq!(query.compile().q.as_deref(), Some("name=\"Report\""));

        let mut query = DriveQuery::new();
        query.not().equal("name", "Report").unwrap();
        assert_eq!(query.compile().q.as_deref(), Some("name!=\"Report\""));
    }

    #[test]
    fn test_collection_membership() {
        let mut query = DriveQuery::new();
        query.equal("parents", "folder123").unwrap();
        assert_eq!(
            query.compile().q.as_deref(),
            Some("\"folder123\" in parents")
        );
    }

    #[test]
    fn test_collection_rejects_negation() {
        let mut query = DriveQuery::new();
        let err = query.not().equal("parents", "folder123").unwrap_err();
        assert!(matches!(err, QueryError::UnsupportedOperator { .. }));

        let err = query
            .equal_with("parents", "folder123", Operator::Equal)
            .unwrap_err();
        assert!(matches!(err, QueryError::UnsupportedOperator { .. }));
    }

    #[test]
    fn test_corpus_last_write_wins() {
        let mut query = DriveQuery::new();
        query.corpus("domain").unwrap();
        query.corpus("user").unwrap();
        assert_eq!(query.compile().corpus.as_deref(), Some("user"));
    }

    #[test]
    fn test_order_by_accumulates_in_call_order() {
        let mut query = DriveQuery::new();
        query.order_by("name", OrderDirection::Ascending).unwrap();
        query.order_by("starred", OrderDirection::Ascending).unwrap();
        assert_eq!(query.compile().order_by.as_deref(), Some("name,starred"));
    }

    #[test]
    fn test_invalid_enums_rejected_and_state_unchanged() {
        let mut query = DriveQuery::new();
        query.corpus("user").unwrap();
        query.spaces("drive").unwrap();
        query.order_by("name", OrderDirection::Ascending).unwrap();

        assert!(matches!(
            query.corpus("bogus").unwrap_err(),
            QueryError::InvalidEnumValue { parameter: "corpus", .. }
        ));
        assert!(matches!(
            query.spaces("bogus").unwrap_err(),
            QueryError::InvalidEnumValue { parameter: "spaces", .. }
        ));
        assert!(matches!(
            query.order_by("bogus", OrderDirection::Descending).unwrap_err(),
            QueryError::InvalidEnumValue { parameter: "orderBy", .. }
        ));

        let params = query.compile();
        assert_eq!(params.corpus.as_deref(), Some("user"));
        assert_eq!(params.spaces.as_deref(), Some("drive"));
        assert_eq!(params.order_by.as_deref(), Some("name"));
    }

    #[test]
    fn test_invalid_enum_message_enumerates_valid_set() {
        let mut query = DriveQuery::new();
        let err = query.spaces("attic").unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"attic\" is not a valid spaces value; valid values are: drive, appDataFolder, photos"
        );
    }

    #[test]
    fn test_fields_accumulate_without_dedup() {
        let mut query = DriveQuery::new();
        query.fields(["id", "name"]).fields("mimeType");
        assert_eq!(query.compile().fields.as_deref(), Some("id,name,mimeType"));

        // Repeats are preserved.
        query.fields("id");
        assert_eq!(
            query.compile().fields.as_deref(),
            Some("id,name,mimeType,id")
        );
    }

    #[test]
    fn test_file_id_and_limit_last_write_wins() {
        let mut query = DriveQuery::new();
        query.file_id("first").file_id("second").limit(10).limit(25);
        let params = query.compile();
        assert_eq!(params.file_id.as_deref(), Some("second"));
        assert_eq!(params.page_size, Some(25));
    }

    #[test]
    fn test_limit_is_pass_through() {
        let mut query = DriveQuery::new();
        query.limit(-5);
        assert_eq!(query.compile().page_size, Some(-5));
    }

    #[test]
    fn test_spaces_accumulate() {
        let mut query = DriveQuery::new();
        query.spaces("drive").unwrap();
        query.spaces("appDataFolder").unwrap();
        query.spaces("drive").unwrap();
        assert_eq!(
            query.compile().spaces.as_deref(),
            Some("drive,appDataFolder,drive")
        );
    }

    #[test]
    fn test_page_token_between_compiles() {
        let mut query = DriveQuery::new();
        query.equal("trashed", false).unwrap();

        let first = query.compile();
        assert!(first.page_token.is_none());

        query.set_page_token("cursor-1");
        let second = query.compile();
        assert_eq!(second.page_token.as_deref(), Some("cursor-1"));
        // The rest of the state is untouched by compile.
        assert_eq!(second.q, first.q);
    }

    #[test]
    fn test_full_scenario_exact_output() {
        let mut query = DriveQuery::new();
        query
            .equal("trashed", false)
            .unwrap()
            .equal("name", "Report")
            .unwrap()
            .order_by("modifiedTime", OrderDirection::Descending)
            .unwrap()
            .limit(50);

        let params = query.compile();
        assert_eq!(
            params.q.as_deref(),
            Some("trashed=\"false\",name=\"Report\"")
        );
        assert_eq!(params.order_by.as_deref(), Some("modifiedTime desc"));
        assert_eq!(params.page_size, Some(50));
        assert!(params.corpus.is_none());
        assert!(params.fields.is_none());
        assert!(params.file_id.is_none());
        assert!(params.page_token.is_none());
        assert!(params.spaces.is_none());
    }

    #[test]
    fn test_every_sort_key_accepted() {
        for key in VALID_ORDER_BY.iter().copied() {
            let mut query = DriveQuery::new();
            query.order_by(key, OrderDirection::Descending).unwrap();
            assert_eq!(
                query.compile().order_by,
                Some(format!("{} desc", key))
            );
        }
    }

    #[test]
    fn test_compile_does_not_mutate_builder() {
        let mut query = DriveQuery::new();
        query.equal("starred", true).unwrap();
        let a = query.compile();
        let b = query.compile();
        assert_eq!(a, b);
    }
}
