// ghcommit-rs: Verified GitHub Commits from CI
//
// SPDX-FileCopyrightText: 2026 The ghcommit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! GraphQL transport.
//!
//! ```text
//! execute(query, variables)
//!        |
//!        v
//!   POST endpoint  (Bearer token, JSON body)
//!        |
//!   non-2xx -----------------------> HttpError
//!        |
//!   { data, errors }
//!        |
//!   errors[] non-empty --> error! each message
//!        |                 debug! query + variables (once)
//!        |                 Response { first message }
//!        v
//!   data --> T
//! ```

use bon::Builder;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use tracing::{debug, error, trace};

use crate::error::GraphQlError;

/// Public GitHub GraphQL endpoint.
pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// Shared HTTP client - connection pool reused by every request.
fn shared_http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT
        .get_or_init(|| {
            Client::builder()
                .user_agent(format!("ghcommit-rs/{}", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_else(|_| Client::new())
        })
        .clone()
}

/// Authenticated GitHub GraphQL client.
#[derive(Clone, Builder)]
pub struct GraphQlClient {
    #[builder(into, setters(name = with_endpoint), default = DEFAULT_GRAPHQL_URL.to_string())]
    endpoint: String,
    #[builder(into, setters(name = with_token))]
    token: String,
    #[builder(setters(name = with_http_client), default = shared_http_client())]
    http: Client,
}

impl fmt::Debug for GraphQlClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphQlClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"[hidden]")
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct GraphQlRequest<'a, V: ?Sized> {
    query: &'a str,
    variables: &'a V,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

impl GraphQlClient {
    /// The endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one query or mutation and decode its `data`.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `GraphQlError::Reqwest` if the request cannot be sent.
    /// - `GraphQlError::HttpError` for a non-success status.
    /// - `GraphQlError::Response` carrying the first message of a non-empty
    ///   `errors` array.
    /// - `GraphQlError::MalformedResponse` if `data` is missing or does not
    ///   decode into `T`.
    pub async fn execute<V, T>(&self, query: &str, variables: &V) -> Result<T, GraphQlError>
    where
        V: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        trace!(endpoint = %self.endpoint, "sending GraphQL request");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GraphQlError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GraphQlResponse = response
            .json()
            .await
            .map_err(|e| GraphQlError::MalformedResponse(e.to_string()))?;

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            for entry in &errors {
                error!(message = %entry.message, "GraphQL request failed");
            }
            let variables = serde_json::to_string(variables).unwrap_or_default();
            debug!(query, variables = %variables, "failed GraphQL request");

            let message = errors
                .into_iter()
                .next()
                .map(|entry| entry.message)
                .unwrap_or_default();
            return Err(GraphQlError::Response { message });
        }

        let data = envelope.data.ok_or_else(|| {
            GraphQlError::MalformedResponse("response carries neither data nor errors".to_string())
        })?;
        serde_json::from_value(data).map_err(|e| GraphQlError::MalformedResponse(e.to_string()))
    }
}
