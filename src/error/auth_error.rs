use thiserror::Error;

/// Authentication and authorization errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The service rejected the bearer token (HTTP 401).
    #[error("API authentication failed: {message}")]
    AuthenticationFailed { message: String },

    /// The token lacks permission for the operation (HTTP 403).
    #[error("insufficient permissions for operation `{operation}`")]
    InsufficientPermissions { operation: String },

    /// The configured token cannot be encoded as a header value.
    #[error("API key has an invalid format")]
    InvalidKeyFormat,

    /// A required credential environment variable is unset or empty.
    #[error("missing credentials: environment variable `{variable}` is not set")]
    MissingCredentials { variable: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = AuthError::InsufficientPermissions {
            operation: "connectors_put".to_string(),
        };
        assert!(err.to_string().contains("connectors_put"));

        let err = AuthError::MissingCredentials {
            variable: "BUDGEA_TOKEN".to_string(),
        };
        assert!(err.to_string().contains("BUDGEA_TOKEN"));
    }
}
