use thiserror::Error;

/// All errors that can occur when using the Cappasity SDK.
#[derive(Error, Debug)]
pub enum CappasityError {
    /// The bearer token is missing, empty, or unusable at construction time.
    /// Raised before any network request is attempted.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// The subject (model URL or SKU) passed to an embed call was empty.
    /// Raised before any network request is attempted.
    #[error("invalid subject: {message}")]
    InvalidSubject { message: String },

    /// No model is associated with the given URL or SKU (HTTP 404).
    #[error("not found: {message}")]
    NotFound { message: String },

    /// Any other non-2xx API response, with the HTTP status code and the
    /// parsed response body for diagnostics.
    #[error("API error {status_code}: {message}")]
    Api {
        status_code: u16,
        message: String,
        body: Option<serde_json::Value>,
    },

    /// A transport-level HTTP error from reqwest (DNS, connection reset,
    /// timeout). Never retried by the client.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx response whose body is not JSON or lacks the fields the called
    /// endpoint is expected to return.
    #[error("malformed response: {message}")]
    MalformedResponse { message: String },
}

/// A convenience alias for `Result<T, CappasityError>`.
pub type Result<T> = std::result::Result<T, CappasityError>;
