use crate::graphql::GraphqlError;
use thiserror::Error;

/// Boxed error returned by a [`Transport`](crate::transport::Transport).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Client-level error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// A record in the response is missing a required field or has the wrong shape
    #[error("Validation error: {0}")]
    Validation(String),

    /// The response does not match the expected GraphQL/connection shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// The server answered with GraphQL errors
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    Graphql(Vec<GraphqlError>),

    /// Transport failure, passed through untouched
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request payload could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for client errors
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Check if error came from the transport
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    /// Check if the response shape was rejected
    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::Decode(_))
    }

    /// Check if a record failed validation
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }

    /// Borrow the transport error, if this is one.
    pub fn transport_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            ApiError::Transport(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

fn format_graphql_errors(errors: &[GraphqlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
