//! Request execution with tracing instrumentation.
//!
//! This module provides the reqwest-backed [`HttpTransport`]: connection
//! pooling, bearer-token injection, per-call timeout override, multipart
//! form assembly and non-success status mapping.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};
use tracing::{instrument, Span};
use url::Url;

use crate::auth::AuthScheme;
use crate::client::{CallOptions, RawResponse, Transport};
use crate::error::{ApiError, AuthError, ClientError};
use crate::request::RequestPlan;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the versioned base URL of the domain,
/// e.g. `https://demo.biapi.pro/2.0`.
const BASE_URL_VAR: &str = "BUDGEA_BASE_URL";

/// Environment variable holding the bearer token.
const TOKEN_VAR: &str = "BUDGEA_TOKEN";

/// Builder for configuring an [`HttpTransport`].
#[derive(Debug)]
pub struct HttpTransportBuilder {
    base_url: Url,
    timeout: Duration,
    default_headers: HeaderMap,
    auth: Option<(AuthScheme, String)>,
}

impl HttpTransportBuilder {
    fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
            auth: None,
        }
    }

    /// Sets the default request timeout. Individual calls may override it
    /// through [`CallOptions`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a default header to all requests.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| ClientError::Connection(format!("invalid header name: {e}")))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| ClientError::Connection(format!("invalid header value: {e}")))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the authentication scheme and token.
    pub fn auth(mut self, scheme: AuthScheme, token: impl Into<String>) -> Self {
        self.auth = Some((scheme, token.into()));
        self
    }

    /// Builds the [`HttpTransport`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<HttpTransport, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(self.default_headers)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;

        Ok(HttpTransport {
            client,
            base_url: self.base_url,
            auth: self.auth,
        })
    }
}

/// Async HTTP transport for the aggregation API.
///
/// Wraps `reqwest::Client` with connection pooling and performs the
/// exchanges described by [`RequestPlan`]s. One instance is created (or
/// injected) and shared across all endpoint groups.
///
/// ## Examples
///
/// ```rust,no_run
/// use budgea_client::{AuthScheme, HttpTransport};
/// use url::Url;
///
/// # fn main() -> Result<(), budgea_client::ApiError> {
/// let base_url = Url::parse("https://demo.biapi.pro/2.0").unwrap();
/// let transport = HttpTransport::builder(base_url)
///     .auth(AuthScheme::Bearer, "my-token")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    auth: Option<(AuthScheme, String)>,
}

impl HttpTransport {
    /// Creates a new builder for configuring a transport.
    pub fn builder(base_url: Url) -> HttpTransportBuilder {
        HttpTransportBuilder::new(base_url)
    }

    /// Creates a new transport with default settings and no authentication.
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        Self::builder(base_url).build()
    }

    /// Creates a bearer-authenticated transport from `BUDGEA_BASE_URL` and
    /// `BUDGEA_TOKEN`.
    ///
    /// ## Errors
    ///
    /// Returns [`AuthError::MissingCredentials`] when either variable is
    /// unset or empty.
    pub fn from_env() -> Result<Self, ApiError> {
        let base = env_var(BASE_URL_VAR)?;
        let token = env_var(TOKEN_VAR)?;
        let base_url = Url::parse(&base)
            .map_err(|e| ClientError::Connection(format!("invalid base URL: {e}")))?;
        Self::builder(base_url).auth(AuthScheme::Bearer, token).build()
    }

    /// Returns the base URL for this transport.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins the base URL and a plan path without discarding the versioned
    /// prefix the base URL may carry.
    fn full_url(&self, path: &str) -> Result<Url, ApiError> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined)
            .map_err(|e| ClientError::Connection(format!("invalid URL: {e}")).into())
    }

    /// Applies the configured authentication to a request builder.
    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let Some((scheme, token)) = &self.auth else {
            return request;
        };

        match scheme {
            AuthScheme::Bearer => request.header(AUTHORIZATION, format!("Bearer {token}")),
            AuthScheme::None => request,
        }
    }
}

fn env_var(name: &str) -> Result<String, ApiError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| {
            AuthError::MissingCredentials {
                variable: name.to_string(),
            }
            .into()
        })
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(
        name = "api_request",
        skip(self, plan, call),
        fields(
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    async fn exchange(
        &self,
        plan: RequestPlan,
        call: &CallOptions,
    ) -> Result<RawResponse, ApiError> {
        Span::current().record("http.method", plan.method.to_string().as_str());

        let mut full_url = self.full_url(&plan.path)?;
        if !plan.query.is_empty() {
            let mut pairs = full_url.query_pairs_mut();
            for (key, value) in &plan.query {
                pairs.append_pair(key, value);
            }
        }

        Span::current().record("http.url", full_url.as_str());

        let mut request = self
            .client
            .request(plan.method.to_reqwest(), full_url)
            .header(ACCEPT, plan.accept);

        if let Some(timeout) = call.timeout {
            request = request.timeout(timeout);
        }

        request = self.apply_auth(request);

        // The declared request media type is always multipart/form-data on
        // this API; reqwest supplies the boundary-carrying header itself.
        if plan.content_type.is_some() {
            let mut form = reqwest::multipart::Form::new();
            for (key, value) in plan.form {
                form = form.text(key, value);
            }
            for (key, file) in plan.files {
                let part = reqwest::multipart::Part::bytes(file.content.to_vec())
                    .file_name(file.file_name);
                form = form.part(key, part);
            }
            request = request.multipart(form);
        }

        let response = request.send().await.map_err(ClientError::Request)?;

        let status = response.status();
        let status_code = status.as_u16();

        Span::current().record("http.status_code", status_code);

        if !status.is_success() {
            // Relay whatever error body the service returned
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());

            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);

            if status_code == 401 {
                return Err(AuthError::AuthenticationFailed { message }.into());
            }
            if status_code == 403 {
                return Err(AuthError::InsufficientPermissions {
                    operation: plan.endpoint.to_string(),
                }
                .into());
            }

            return Err(ClientError::HttpStatus {
                status: status_code,
                message,
            }
            .into());
        }

        Span::current().record("otel.status_code", "OK");

        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        let body = response.bytes().await.map_err(ClientError::Request)?;

        Ok(RawResponse {
            status: status_code,
            headers,
            body,
        })
    }
}
