//! Response handling module.
//!
//! This module provides the [`ResponseFormat`] trait for type-safe response
//! decoding, the formats the aggregation API needs, and the
//! [`ApiResponse`] triple returned by the `*_with_http_info` entry points.

mod format;

pub use format::{JsonFormat, RawFormat, ResponseFormat};

/// Full view of a response: status, headers and the decoded data.
///
/// The data-only convenience entry points unwrap [`data`](Self::data) from
/// this triple; nothing else differs between the two surfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Consumes the response, keeping only the decoded data.
    pub fn into_data(self) -> T {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_data_drops_envelope() {
        let resp = ApiResponse {
            status: 200,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            data: 42u32,
        };
        assert_eq!(resp.into_data(), 42);
    }
}
