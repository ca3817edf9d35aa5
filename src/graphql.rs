//! Persisted-query GraphQL requests and response unwrapping.
//!
//! The marketplace only accepts allow-listed queries: instead of query text a
//! request names the operation and carries the SHA-256 hash the server knows
//! it by. `variables` and `extensions` travel as JSON-encoded strings.

use http::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, ORIGIN};
use http::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};
use crate::transport::Transport;

/// An allow-listed operation and its persisted-query hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistedOperation {
    /// Operation name; also the field under `data` holding the result.
    pub name: &'static str,
    pub sha256_hash: &'static str,
}

/// A user's listings.
pub const ITEMS: PersistedOperation = PersistedOperation {
    name: "items",
    sha256_hash: "d79d6e2921fea03c5f1515a8925fbb816eacaa7bcafe03eb47a40425ef49601e",
};

/// Reviews left for a user.
pub const TESTIMONIALS: PersistedOperation = PersistedOperation {
    name: "testimonials",
    sha256_hash: "bd4f2f6b77502701689193a1ab4cee28b683fc66164c54fba96fd01873b08a01",
};

/// Path of the GraphQL endpoint relative to the base URL.
pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Extensions {
    persisted_query: PersistedQuery,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistedQuery {
    version: u8,
    sha256_hash: &'static str,
}

/// Request payload for a persisted operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub operation_name: String,
    /// JSON-encoded variables object.
    pub variables: String,
    /// JSON-encoded `{"persistedQuery": {...}}` object.
    pub extensions: String,
}

impl GraphqlRequest {
    /// Encode `variables` for `operation`.
    pub fn persisted<V: Serialize>(operation: &PersistedOperation, variables: &V) -> ApiResult<Self> {
        let extensions = Extensions {
            persisted_query: PersistedQuery {
                version: 1,
                sha256_hash: operation.sha256_hash,
            },
        };
        Ok(Self {
            operation_name: operation.name.to_string(),
            variables: serde_json::to_string(variables)?,
            extensions: serde_json::to_string(&extensions)?,
        })
    }

    pub fn to_value(&self) -> ApiResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// GraphQL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraphqlPathSegment {
    /// Field name.
    Key(String),
    /// Array index.
    Index(i64),
}

/// Error entry of a GraphQL response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default)]
    pub path: Vec<GraphqlPathSegment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

/// GraphQL response container.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl GraphqlResponse {
    /// Parse a raw response body.
    pub fn from_value(raw: Value) -> ApiResult<Self> {
        serde_json::from_value(raw)
            .map_err(|e| ApiError::Decode(format!("invalid GraphQL response: {}", e)))
    }

    /// Take `data.<field>`, failing on GraphQL errors or a missing field.
    pub fn into_field(self, field: &str) -> ApiResult<Value> {
        if !self.errors.is_empty() {
            return Err(ApiError::Graphql(self.errors));
        }
        let mut data = match self.data {
            Some(Value::Object(data)) => data,
            Some(other) => {
                return Err(ApiError::Decode(format!(
                    "expected `data` to be an object, got {}",
                    json_kind(&other)
                )))
            }
            None => return Err(ApiError::Decode("response has no `data`".to_string())),
        };
        match data.remove(field) {
            Some(Value::Null) | None => Err(ApiError::Decode(format!(
                "response has no `data.{}`",
                field
            ))),
            Some(value) => Ok(value),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Headers sent with every query; the API checks `Origin`.
pub fn default_headers(base_url: &str) -> ApiResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    let origin = HeaderValue::from_str(base_url)
        .map_err(|e| ApiError::Config(format!("base URL is not a valid Origin header: {}", e)))?;
    headers.insert(ORIGIN, origin);
    Ok(headers)
}

/// Run a persisted query through `transport` and return `data.<operation>`.
///
/// One request, no retries. Transport errors are returned unchanged.
pub async fn execute<T, V>(
    transport: &T,
    operation: &PersistedOperation,
    variables: &V,
) -> ApiResult<Value>
where
    T: Transport + ?Sized,
    V: Serialize,
{
    let base_url = transport.base_url();
    let url = format!("{}{}", base_url, GRAPHQL_PATH);
    let headers = default_headers(base_url)?;
    let payload = GraphqlRequest::persisted(operation, variables)?.to_value()?;

    debug!("dispatching persisted query `{}` to {}", operation.name, url);
    let raw = transport
        .request(Method::GET, &url, headers, &payload)
        .await
        .map_err(ApiError::Transport)?;

    let response = GraphqlResponse::from_value(raw)?;
    if !response.errors.is_empty() {
        warn!(
            "query `{}` returned {} GraphQL error(s)",
            operation.name,
            response.errors.len()
        );
    }
    response.into_field(operation.name)
}
