//! Errors raised by the content access layer

use serde::Deserialize;
use thiserror::Error;

/// Result type for content operations
pub type Result<T> = std::result::Result<T, ContentError>;

/// A content operation failure
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("GraphQL endpoint is not configured (set content.endpoint or GRAPHCMS_ENDPOINT)")]
    MissingEndpoint,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Content API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("GraphQL error: {}", join_messages(.0))]
    GraphQL(Vec<GraphQLError>),

    #[error("Content API returned neither data nor errors")]
    EmptyResponse,

    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A single entry of a GraphQL `errors` array
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

fn join_messages(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
