//! Layered error types for the client.
//!
//! The error hierarchy is structured for actionable diagnostics:
//! - [`ApiError`] - Top-level error type for all API operations
//! - [`ParamError`] - Pre-network parameter validation failures
//! - [`AuthError`] - Authentication and authorization errors
//! - [`ClientError`] - HTTP client and network errors
//! - [`ValidationError`] - Response parsing errors

mod api_error;
mod auth_error;
mod client_error;
mod param_error;
mod validation_error;

pub use api_error::ApiError;
pub use auth_error::AuthError;
pub use client_error::ClientError;
pub use param_error::ParamError;
pub use validation_error::ValidationError;
