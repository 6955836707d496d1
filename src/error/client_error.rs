use thiserror::Error;

/// HTTP client and network errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The underlying HTTP request failed (network, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The client could not be constructed or the URL is invalid.
    #[error("connection error: {0}")]
    Connection(String),

    /// The service returned a non-success status. The body is relayed
    /// verbatim; this layer does not interpret it.
    #[error("HTTP status {status}: {message}")]
    HttpStatus { status: u16, message: String },
}
