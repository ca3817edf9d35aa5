//! Transport seam between the query accessors and the network.
//!
//! Accessors never own a connection: they receive something implementing
//! [`Transport`] (the signed-in account context) and hand it a fully built
//! request. [`HttpTransport`] is the default reqwest-backed implementation.

use async_trait::async_trait;
use http::{HeaderMap, Method};
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult, BoxError};

/// Something that can perform a request against the marketplace API.
///
/// Implementations must be safe to share between concurrent accessor calls.
#[async_trait]
pub trait Transport: Send + Sync {
    /// API origin, e.g. `https://playerok.com`, without a trailing slash.
    fn base_url(&self) -> &str;

    /// Send `payload` to `url` and return the decoded JSON response body.
    async fn request(
        &self,
        method: Method,
        url: &str,
        headers: HeaderMap,
        payload: &Value,
    ) -> Result<Value, BoxError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn base_url(&self) -> &str {
        (**self).base_url()
    }

    async fn request(
        &self,
        method: Method,
        url: &str,
        headers: HeaderMap,
        payload: &Value,
    ) -> Result<Value, BoxError> {
        (**self).request(method, url, headers, payload).await
    }
}

/// Errors raised by [`HttpTransport`]
#[derive(Error, Debug)]
pub enum HttpTransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} with body: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Unsupported payload: {0}")]
    Payload(String),
}

/// reqwest-backed [`Transport`].
///
/// GET payloads are sent as query-string parameters (string values verbatim,
/// anything else JSON-encoded); other methods send the payload as a JSON body.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport from client configuration
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(http, config.base_url.clone()))
    }

    /// Wrap an existing reqwest client
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        headers: HeaderMap,
        payload: &Value,
    ) -> Result<Value, HttpTransportError> {
        let builder = if method == Method::GET {
            self.http.get(url).query(&query_pairs(payload)?)
        } else {
            self.http.request(method, url).json(payload)
        };

        let response = builder.headers(headers).send().await?;
        let status = response.status();
        if !status.is_success() {
            let bytes = response.bytes().await?;
            return Err(HttpTransportError::Status {
                status,
                body: truncate_body(&bytes),
            });
        }

        debug!("{} -> {}", url, status);
        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn request(
        &self,
        method: Method,
        url: &str,
        headers: HeaderMap,
        payload: &Value,
    ) -> Result<Value, BoxError> {
        self.send(method, url, headers, payload)
            .await
            .map_err(|e| Box::new(e) as BoxError)
    }
}

fn query_pairs(payload: &Value) -> Result<Vec<(String, String)>, HttpTransportError> {
    let object = payload.as_object().ok_or_else(|| {
        HttpTransportError::Payload("GET payload must be a JSON object".to_string())
    })?;
    Ok(object
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), value)
        })
        .collect())
}

fn truncate_body(bytes: &[u8]) -> String {
    const MAX_LEN: usize = 4096;
    let mut body = String::from_utf8_lossy(bytes).to_string();
    if body.len() > MAX_LEN {
        let mut cut = MAX_LEN;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
        body.push('…');
    }
    body
}
