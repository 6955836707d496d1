use thiserror::Error;

use super::{AuthError, ClientError, ParamError, ValidationError};

/// Top-level error type for all API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A parameter failed validation before any network I/O.
    #[error(transparent)]
    Param(#[from] ParamError),

    /// Authentication or authorization failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The HTTP exchange itself failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The response body could not be decoded.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_error_converts() {
        let err: ApiError = ParamError::Missing {
            parameter: "name",
            endpoint: "banks_categories_post",
        }
        .into();
        assert!(matches!(err, ApiError::Param(_)));
    }

    #[test]
    fn transparent_message() {
        let err: ApiError = ParamError::Unexpected {
            parameter: "wrding".to_string(),
            endpoint: "banks_get",
        }
        .into();
        assert_eq!(
            err.to_string(),
            "unexpected parameter `wrding` for endpoint `banks_get`"
        );
    }
}
