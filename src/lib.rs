//! Fluent Query Builder for Drive-style File Listing
//!
//! This crate translates typed, chainable configuration into the parameter
//! set of a Google Drive-style `files.list` endpoint: filter predicates and
//! collection-membership tests become the provider's `q` filter expression,
//! and scope, paging, sorting and projection options become the flat
//! parameter object sent with the request.
//!
//! # Features
//!
//! - **Filter predicates**: typed equality/inequality on registered scalar
//!   fields, membership tests on collection fields, exact provider grammar
//! - **Request shaping**: corpus, response field projection, sort keys,
//!   storage spaces, page size, target file ID
//! - **Pagination support**: a cursor setter for the paging collaborator so
//!   one builder can drive successive requests
//! - **Fail-fast validation**: unknown fields, unsupported operators and
//!   out-of-enumeration values are rejected at the call site
//! - **Wire-ready output**: compiled parameters serialize to JSON or an
//!   URL-encoded query string with unset parameters omitted entirely
//!
//! # Example
//!
//! ```
//! use drive_query::{DriveQuery, OrderDirection};
//!
//! # fn main() -> drive_query::QueryResult<()> {
//! let mut query = DriveQuery::new();
//! query
//!     .equal("trashed", false)?
//!     .equal("parents", "folder123")?
//!     .corpus("user")?
//!     .order_by("modifiedTime", OrderDirection::Descending)?
//!     .fields(["id", "name"])
//!     .limit(100);
//!
//! let params = query.compile();
//! assert_eq!(
//!     params.q.as_deref(),
//!     Some("trashed=\"false\",\"folder123\" in parents"),
//! );
//!
//! // Between paginated requests the transport feeds the cursor back in:
//! query.set_page_token("next-cursor");
//! let next_page = query.compile();
//! assert_eq!(next_page.page_token.as_deref(), Some("next-cursor"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod errors;
pub mod fields;
pub mod params;
pub mod query;

// Re-exports for convenience
pub use errors::{QueryError, QueryResult};
pub use fields::{FieldKind, FieldValue, FilterField, Operator};
pub use params::ListFilesParams;
pub use query::{DriveQuery, OrderDirection};

/// Prelude module with commonly used types.
///
/// ```
/// use drive_query::prelude::*;
/// ```
pub mod prelude {
    // Builder
    pub use crate::query::{DriveQuery, FieldPaths, NotClause, OrderDirection};

    // Field model
    pub use crate::fields::{FieldKind, FieldSet, FieldValue, FilterField, Operator};

    // Compiled parameters
    pub use crate::params::ListFilesParams;

    // Errors
    pub use crate::errors::{QueryError, QueryResult};
}
