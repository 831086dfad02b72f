//! Minimal GraphQL-over-HTTP transport

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::queries::Query;
use crate::error::{ContentError, GraphQLError, Result};

/// Request body sent for every query
#[derive(Debug, Serialize)]
struct GraphQLRequest<'a, V> {
    query: &'a str,
    #[serde(rename = "operationName")]
    operation_name: &'a str,
    variables: V,
}

/// Response envelope. `data` stays untyped until `errors` has been checked,
/// since a failed field can come back as `null` next to the error.
#[derive(Debug, Deserialize)]
struct GraphQLResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQLError>>,
}

/// Posts GraphQL documents to a single endpoint
#[derive(Debug, Clone)]
pub struct GraphQLClient {
    http: Client,
    endpoint: String,
}

impl GraphQLClient {
    pub fn new(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `query` with `variables` and decode `data` into `T`
    pub async fn request<V, T>(&self, query: &Query, variables: V) -> Result<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        if self.endpoint.trim().is_empty() {
            return Err(ContentError::MissingEndpoint);
        }

        tracing::debug!("GraphQL {} -> {}", query.name, self.endpoint);

        let body = GraphQLRequest {
            query: query.document,
            operation_name: query.name,
            variables,
        };

        let response = self.http.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContentError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        let envelope: GraphQLResponse = serde_json::from_slice(&bytes)?;

        let errors = envelope.errors.unwrap_or_default();
        if !errors.is_empty() {
            return Err(ContentError::GraphQL(errors));
        }

        let data = envelope.data.ok_or(ContentError::EmptyResponse)?;
        Ok(serde_json::from_value(data)?)
    }
}
