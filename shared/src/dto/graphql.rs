//! GraphQL request/response envelope.
//!
//! Every call to the catalog server is a POST of a [`GraphqlRequest`] to
//! `<base>/graphql`; the body that comes back is a [`GraphqlResponse`] whose
//! `data` payload is operation-specific. Server-side failures arrive as
//! entries in `errors` with a 200 status, so callers must check both.

use serde::{Deserialize, Serialize};

/// Outgoing GraphQL operation: a query document plus its variables.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
}

impl GraphqlRequest {
    pub fn new(query: impl Into<String>, variables: serde_json::Value) -> Self {
        Self {
            query: query.into(),
            variables: Some(variables),
        }
    }

    /// A query without variables (e.g. stats, version).
    pub fn bare(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
        }
    }
}

/// Incoming GraphQL envelope. `data` is `None` when the operation failed
/// outright; partial failures carry both `data` and `errors`.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

/// A single server-reported error.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

impl<T> GraphqlResponse<T> {
    /// Collapse the envelope into the payload or the first error message.
    pub fn into_result(self) -> Result<T, String> {
        if let Some(err) = self.errors.first() {
            return Err(format!("GraphQL error: {}", err.message));
        }
        self.data
            .ok_or_else(|| "GraphQL error: response carried no data".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_result_with_data() {
        let resp: GraphqlResponse<i32> = serde_json::from_str(r#"{"data": 7}"#)
            .expect("valid envelope");
        assert_eq!(resp.into_result(), Ok(7));
    }

    #[test]
    fn test_into_result_prefers_errors() {
        let resp: GraphqlResponse<i32> = serde_json::from_str(
            r#"{"data": 7, "errors": [{"message": "must be admin"}]}"#,
        )
        .expect("valid envelope");
        assert_eq!(
            resp.into_result(),
            Err("GraphQL error: must be admin".to_string())
        );
    }

    #[test]
    fn test_into_result_missing_data() {
        let resp: GraphqlResponse<i32> =
            serde_json::from_str(r#"{}"#).expect("valid envelope");
        assert!(resp.into_result().is_err());
    }

    #[test]
    fn test_request_serializes_without_null_variables() {
        let req = GraphqlRequest::bare("query { version { version } }");
        let json = serde_json::to_string(&req).expect("serializable");
        assert!(!json.contains("variables"));
    }
}
