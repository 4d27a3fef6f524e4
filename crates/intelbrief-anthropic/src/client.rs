//! HTTP client for the Anthropic Messages API.
//!
//! Wraps `reqwest` with API key management and typed response
//! deserialization. API-level failures arrive as a JSON error envelope and
//! are surfaced as [`AnthropicError::Api`].

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::error::AnthropicError;
use crate::types::{MessagesRequest, MessagesResponse};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(rename = "type")]
    error_type: String,
    message: String,
}

/// Client for the Anthropic Messages API.
///
/// Manages the HTTP client, API key, and base URL. Use [`AnthropicClient::new`]
/// for production or [`AnthropicClient::with_base_url`] to point at a mock
/// server in tests.
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl AnthropicClient {
    /// Creates a new client pointed at the production Anthropic API.
    ///
    /// # Errors
    ///
    /// Returns [`AnthropicError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, AnthropicError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`AnthropicError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`AnthropicError::Api`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, AnthropicError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("intelbrief/0.1 (competitor-intelligence)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() appends the endpoint path rather than replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| AnthropicError::Api {
            error_type: "invalid_base_url".to_string(),
            message: format!("invalid base URL '{base_url}': {e}"),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Sends one request to `POST /v1/messages` and returns the parsed
    /// response.
    ///
    /// One outbound call per invocation, billed per call; nothing is cached
    /// or retried.
    ///
    /// # Errors
    ///
    /// - [`AnthropicError::Api`] if the API returns an error envelope.
    /// - [`AnthropicError::Http`] on network failure or an unexplained
    ///   non-2xx status.
    /// - [`AnthropicError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn create_message(
        &self,
        request: &MessagesRequest,
    ) -> Result<MessagesResponse, AnthropicError> {
        let url = self.messages_url();

        tracing::debug!(model = %request.model, max_tokens = request.max_tokens, "calling messages API");

        let response = self
            .client
            .post(url.clone())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::api_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| AnthropicError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    fn messages_url(&self) -> Url {
        // base_url always ends with '/', so join cannot fail for this path.
        self.base_url
            .join("v1/messages")
            .unwrap_or_else(|_| self.base_url.clone())
    }

    /// Map a non-2xx response to a typed error, preferring the API's own
    /// error envelope when the body parses as one.
    fn api_error(status: StatusCode, body: &str) -> AnthropicError {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => AnthropicError::Api {
                error_type: envelope.error.error_type,
                message: envelope.error.message,
            },
            Err(_) => AnthropicError::UnexpectedStatus {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            },
        }
    }
}
