use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::QueryError;

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    #[serde(rename = "userID")]
    user_id: &'a str,
    phrase: &'a str,
}

// Anything besides `completion` is ignored.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    completion: Option<String>,
}

/// `ApiClient` sends a phrase to the completion service and hands back its answer.
///
/// The user key travels in the JSON body rather than in a header, and exactly one
/// request is made per call with no retries.
pub struct ApiClient {
    client: Client,

    // The full URL the request is POSTed to
    endpoint: String,

    // The credential identifying the user to the service
    user_key: String,
}

impl ApiClient {
    pub fn new(
        client: Client,
        endpoint: impl Into<String>,
        user_key: impl Into<String>,
    ) -> Self {
        ApiClient {
            client,
            endpoint: endpoint.into(),
            user_key: user_key.into(),
        }
    }

    /// Sends `phrase` to the completion service and returns the completion text.
    ///
    /// # Returns:
    /// - `Ok(String)` with the completion when the service answered 200 with a
    ///   JSON body carrying a `completion` string.
    /// - `Err(QueryError)` for a failed connection, any status other than 200,
    ///   an unreadable or non-JSON body, or a body without a completion.
    pub async fn complete(&self, phrase: &str) -> Result<String, QueryError> {
        let body = build_request_body(&self.user_key, phrase);

        tracing::debug!(endpoint = %self.endpoint, "sending phrase to completion service");
        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!(%status, "completion service rejected the request");
            return Err(QueryError::Status(status));
        }

        let response_text = response.text().await.map_err(QueryError::Body)?;
        process_response(&response_text)
    }
}

fn build_request_body<'a>(user_key: &'a str, phrase: &'a str) -> QueryRequest<'a> {
    QueryRequest {
        user_id: user_key,
        phrase,
    }
}

fn process_response(response_text: &str) -> Result<String, QueryError> {
    let parsed: QueryResponse = serde_json::from_str(response_text).map_err(|e| {
        tracing::debug!(error = %e, raw = response_text, "response was not the expected JSON");
        QueryError::from(e)
    })?;
    parsed.completion.ok_or(QueryError::MissingCompletion)
}
