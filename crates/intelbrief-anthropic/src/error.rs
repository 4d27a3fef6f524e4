use thiserror::Error;

/// Errors returned by the Anthropic Messages API client.
#[derive(Debug, Error)]
pub enum AnthropicError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a `{"type": "error"}` envelope.
    #[error("Anthropic API error ({error_type}): {message}")]
    Api { error_type: String, message: String },

    /// A non-2xx status whose body was not an Anthropic error envelope
    /// (gateway HTML, truncated proxy responses).
    #[error("unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response carried no text content block to use as the output.
    #[error("response contained no text content")]
    EmptyResponse,
}
