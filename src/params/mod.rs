//! The compiled parameter object for the files.list endpoint.

use serde::{Deserialize, Serialize};

/// Flat parameter set for a "list files" request.
///
/// Produced by [`DriveQuery::compile`](crate::query::DriveQuery::compile).
/// Wire names follow the provider contract verbatim (`fileId`, `pageSize`,
/// `pageToken`, `orderBy`); unset parameters are omitted from serialized
/// output entirely so the transport never sends empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFilesParams {
    /// Filter expression in the provider query grammar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,

    /// Search scope, `domain` or `user`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corpus: Option<String>,

    /// Comma-joined response field paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Target file ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,

    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,

    /// Pagination cursor from a previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,

    /// Comma-joined sort keys, each optionally suffixed with ` desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,

    /// Comma-joined storage spaces to search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spaces: Option<String>,
}

impl ListFilesParams {
    /// Returns true when no parameter is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Encodes the set parameters as an `application/x-www-form-urlencoded`
    /// string, ready to append to the request path.
    ///
    /// Unset parameters do not appear in the output.
    pub fn to_query_string(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(ListFilesParams::default().is_empty());
    }

    #[test]
    fn test_unset_parameters_omitted_from_json() {
        let json = serde_json::to_value(ListFilesParams::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let params = ListFilesParams {
            file_id: Some("abc".to_string()),
            page_size: Some(50),
            page_token: Some("tok".to_string()),
            order_by: Some("name desc".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "fileId": "abc",
                "pageSize": 50,
                "pageToken": "tok",
                "orderBy": "name desc",
            })
        );
    }

    #[test]
    fn test_query_string_encoding() {
        let params = ListFilesParams {
            q: Some("name=\"Report\"".to_string()),
            page_size: Some(10),
            ..Default::default()
        };
        assert_eq!(
            params.to_query_string().unwrap(),
            "q=name%3D%22Report%22&pageSize=10"
        );
    }

    #[test]
    fn test_query_string_empty_when_nothing_set() {
        assert_eq!(ListFilesParams::default().to_query_string().unwrap(), "");
    }
}
