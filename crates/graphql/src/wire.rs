//! Request/response envelopes as sent over HTTP (`application/json`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::{GraphQlQuery, QueryDocument};
use crate::error::QueryError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<V> {
    pub query: String,
    pub operation_name: &'static str,
    pub variables: V,
}

impl<V: Serialize> GraphQlRequest<V> {
    pub fn new(document: &QueryDocument, variables: V) -> Self {
        Self {
            query: document.render(),
            operation_name: document.operation_name(),
            variables,
        }
    }

    pub fn for_query<Q: GraphQlQuery<Variables = V>>(variables: V) -> Self {
        Self::new(Q::document(), variables)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<T> GraphQlResponse<T> {
    /// Any server error wins over partial data.
    pub fn into_result(self) -> Result<T, QueryError> {
        if !self.errors.is_empty() {
            return Err(QueryError::Server(
                self.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        self.data.ok_or(QueryError::MissingData)
    }
}

/// Decode a raw response body for `Q`, checking the data shape before typing it.
pub fn decode_response<Q: GraphQlQuery>(body: &[u8]) -> Result<Q::Data, QueryError> {
    let envelope: GraphQlResponse<Value> =
        serde_json::from_slice(body).map_err(|e| QueryError::Decode(e.to_string()))?;
    let data = envelope.into_result()?;

    let document = Q::document();
    if let Err(e) = document.check_response(&data) {
        tracing::warn!(operation = document.operation_name(), error = %e, "response does not match query document");
        return Err(e);
    }

    serde_json::from_value(data).map_err(|e| QueryError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::customer_me::{CUSTOMER_ME, CustomerMe};
    use crate::document::NoVariables;

    #[test]
    fn request_carries_rendered_document() {
        let request = GraphQlRequest::for_query::<CustomerMe>(NoVariables {});
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["operationName"], "CustomerMe");
        assert_eq!(body["query"], CUSTOMER_ME.render());
        assert_eq!(body["variables"], json!({}));
    }

    #[test]
    fn server_errors_take_precedence() {
        let body = json!({
            "data": { "customerMe": null },
            "errors": [{ "message": "session expired", "path": ["customerMe"] }]
        });
        let err = decode_response::<CustomerMe>(body.to_string().as_bytes()).unwrap_err();
        assert_eq!(err, QueryError::Server(vec!["session expired".to_string()]));
    }

    #[test]
    fn null_data_is_missing() {
        let err = decode_response::<CustomerMe>(br#"{"data":null}"#).unwrap_err();
        assert_eq!(err, QueryError::MissingData);
    }

    #[test]
    fn anonymous_session_decodes_to_none() {
        let data = decode_response::<CustomerMe>(br#"{"data":{"customerMe":null}}"#).unwrap();
        assert_eq!(data.customer_me, None);
    }

    #[test]
    fn shape_mismatch_is_reported_before_typing() {
        let body = br#"{"data":{"customerMe":{"id":"x"}}}"#;
        assert!(matches!(
            decode_response::<CustomerMe>(body),
            Err(QueryError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        assert!(matches!(
            decode_response::<CustomerMe>(b"<html>"),
            Err(QueryError::Decode(_))
        ));
    }
}
