//! Rust client for the Budgea bank-data-aggregation REST API.
//!
//! The client shapes requests and delegates every exchange to a single
//! injected transport: each endpoint is described by a static declarative
//! descriptor, required parameters are checked before any network I/O, and
//! supplied values are routed into the path, query or multipart form of the
//! request. It implements none of the service's aggregation semantics.
//!
//! # Usage
//!
//! Build a transport against the versioned base URL of your domain and hand
//! it to [`BudgeaClient`]:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use budgea_client::apis::{ExpandOptions, TransactionsListOptions};
//! use budgea_client::{AuthScheme, BudgeaClient, HttpTransport, UserScope};
//! use url::Url;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), budgea_client::ApiError> {
//! let base_url = Url::parse("https://demo.biapi.pro/2.0").unwrap();
//! let transport = HttpTransport::builder(base_url)
//!     .auth(AuthScheme::Bearer, "my-token")
//!     .build()?;
//! let client = BudgeaClient::new(Arc::new(transport));
//!
//! let banks = client.banks.list(&ExpandOptions::expand("fields")).await?;
//! println!("{} connectors available", banks.banks.len());
//!
//! let opts = TransactionsListOptions {
//!     min_date: Some("2024-01-01".to_string()),
//!     max_date: Some("2024-01-31".to_string()),
//!     ..Default::default()
//! };
//! let transactions = client.transactions.list(UserScope::Me, 17, &opts).await?;
//! for transaction in &transactions.transactions {
//!     println!("{:?} {:?}", transaction.date, transaction.value);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Every endpoint also has a `*_with_http_info` form exposing the response
//! status and headers together with per-call knobs:
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! # use std::time::Duration;
//! # use budgea_client::apis::ExpandOptions;
//! # use budgea_client::{BudgeaClient, CallOptions};
//! # #[tokio::main]
//! # async fn main() -> Result<(), budgea_client::ApiError> {
//! # let client: BudgeaClient = unreachable!();
//! let response = client
//!     .banks
//!     .list_with_http_info(
//!         &ExpandOptions::default(),
//!         &CallOptions::with_timeout(Duration::from_secs(5)),
//!     )
//!     .await?;
//! println!("status {} with {} headers", response.status, response.headers.len());
//! # Ok(())
//! # }
//! ```

pub mod apis;
pub mod auth;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod method;
pub mod models;
pub mod request;
pub mod response;
pub mod user_scope;

pub use auth::AuthScheme;
pub use client::{CallOptions, HttpTransport, HttpTransportBuilder, RawResponse, Transport};
pub use endpoint::{EndpointSpec, ParamLocation, ParamSpec};
pub use error::ApiError;
pub use method::HttpMethod;
pub use request::{FilePart, RequestBuilder, RequestPlan};
pub use response::ApiResponse;
pub use user_scope::UserScope;

use std::sync::Arc;

use apis::{
    AccountTypesApi, AccountsApi, BanksApi, ConnectionsApi, ConnectorsApi, PlatformApi,
    TransactionsApi,
};

/// Entry point grouping every endpoint family behind one shared transport.
#[derive(Clone)]
pub struct BudgeaClient {
    pub banks: BanksApi,
    pub account_types: AccountTypesApi,
    pub connectors: ConnectorsApi,
    pub connections: ConnectionsApi,
    pub accounts: AccountsApi,
    pub transactions: TransactionsApi,
    pub platform: PlatformApi,
}

impl BudgeaClient {
    /// Creates a client over an injected transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            banks: BanksApi::new(transport.clone()),
            account_types: AccountTypesApi::new(transport.clone()),
            connectors: ConnectorsApi::new(transport.clone()),
            connections: ConnectionsApi::new(transport.clone()),
            accounts: AccountsApi::new(transport.clone()),
            transactions: TransactionsApi::new(transport.clone()),
            platform: PlatformApi::new(transport),
        }
    }

    /// Creates a client from `BUDGEA_BASE_URL` and `BUDGEA_TOKEN`.
    pub fn from_env() -> Result<Self, ApiError> {
        Ok(Self::new(Arc::new(HttpTransport::from_env()?)))
    }
}
