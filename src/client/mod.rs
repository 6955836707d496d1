//! The transport seam and the shared dispatch helper.
//!
//! Endpoint groups never talk HTTP themselves: they shape a
//! [`RequestPlan`](crate::request::RequestPlan) and hand it to an injected
//! [`Transport`]. The production implementation is the reqwest-backed
//! [`HttpTransport`]; tests substitute recording doubles behind the same
//! trait.

mod executor;

pub use executor::{HttpTransport, HttpTransportBuilder};

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::ApiError;
use crate::request::RequestPlan;
use crate::response::{ApiResponse, ResponseFormat};

/// Per-call knobs, forwarded verbatim to the transport.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Overrides the transport's default request timeout for this call.
    pub timeout: Option<Duration>,
}

impl CallOptions {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// An exchange result before decoding.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

/// Capability to perform one described HTTP exchange.
///
/// The sole side-effecting operation in the crate. Implementations own
/// auth-header injection, connection handling and non-success status
/// mapping; they are expected to be `Send + Sync` so one instance can be
/// shared across all endpoint groups.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn exchange(
        &self,
        plan: RequestPlan,
        call: &CallOptions,
    ) -> Result<RawResponse, ApiError>;
}

/// Performs the exchange and decodes the body through `F`.
///
/// Every endpoint method funnels through this one helper; it is the only
/// place a response body is decoded.
pub async fn call_api<F>(
    transport: &dyn Transport,
    plan: RequestPlan,
    call: &CallOptions,
) -> Result<ApiResponse<F::Output>, ApiError>
where
    F: ResponseFormat,
{
    let raw = transport.exchange(plan, call).await?;
    let data = F::parse(raw.body)?;
    Ok(ApiResponse {
        status: raw.status,
        headers: raw.headers,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{EndpointSpec, ParamSpec};
    use crate::method::HttpMethod;
    use crate::request::RequestBuilder;
    use crate::response::JsonFormat;
    use std::sync::atomic::{AtomicU32, Ordering};

    static PING: EndpointSpec =
        EndpointSpec::new("ping_get", HttpMethod::Get, "/ping", &[ParamSpec::query("expand")]);

    struct CannedTransport {
        calls: AtomicU32,
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn exchange(
            &self,
            _plan: RequestPlan,
            _call: &CallOptions,
        ) -> Result<RawResponse, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(RawResponse {
                status: 200,
                headers: vec![],
                body: Bytes::from_static(br#"{"pong": true}"#),
            })
        }
    }

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Pong {
        pong: bool,
    }

    #[tokio::test]
    async fn call_api_decodes_through_format() {
        let transport = CannedTransport {
            calls: AtomicU32::new(0),
        };
        let plan = RequestBuilder::new(&PING).build().unwrap();
        let resp = call_api::<JsonFormat<Pong>>(&transport, plan, &CallOptions::default())
            .await
            .unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(resp.data, Pong { pong: true });
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn call_options_timeout() {
        let call = CallOptions::with_timeout(Duration::from_secs(5));
        assert_eq!(call.timeout, Some(Duration::from_secs(5)));
        assert_eq!(CallOptions::default().timeout, None);
    }
}
