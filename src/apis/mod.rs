//! Endpoint groups of the aggregation API.
//!
//! Each group owns the static [`EndpointSpec`](crate::endpoint::EndpointSpec)
//! descriptors for its endpoints and exposes two entry points per endpoint:
//! a data-only convenience method, and a `*_with_http_info` form returning
//! the (status, headers, data) triple together with the per-call transport
//! knobs. The convenience form delegates to the full form and unwraps the
//! data; the two produce identical requests.

mod account_types;
mod accounts;
mod banks;
mod connections;
mod connectors;
mod platform;
mod transactions;

pub use account_types::AccountTypesApi;
pub use accounts::{AccountCreateOptions, AccountUpdateOptions, AccountsApi};
pub use banks::BanksApi;
pub use connections::{
    ConnectionCreateOptions, ConnectionLogsOptions, ConnectionsApi, CredentialsOptions,
};
pub use connectors::{
    ConnectorCreateOptions, ConnectorUpdateOptions, ConnectorsApi, ConnectorsBulkOptions,
};
pub use platform::{InvoicingOptions, LogsOptions, PlatformApi};
pub use transactions::{
    ClusterCreateOptions, ClusterUpdateOptions, TransactionCreateOptions, TransactionsApi,
    TransactionsListOptions, TransactionUpdateOptions,
};

use crate::error::ParamError;
use crate::request::RequestBuilder;

/// The optional `expand` hint accepted by most read endpoints.
///
/// The service inlines the named sub-resources in the response; several
/// names are joined with commas on the wire.
#[derive(Debug, Clone, Default)]
pub struct ExpandOptions {
    pub expand: Option<String>,
}

impl ExpandOptions {
    /// Shorthand for a populated `expand` hint.
    pub fn expand(value: impl Into<String>) -> Self {
        Self {
            expand: Some(value.into()),
        }
    }

    pub(crate) fn apply(&self, req: &mut RequestBuilder) -> Result<(), ParamError> {
        if let Some(expand) = &self.expand {
            req.set("expand", expand)?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{EndpointSpec, ParamSpec};
    use crate::method::HttpMethod;

    static LIST: EndpointSpec = EndpointSpec::new(
        "things_get",
        HttpMethod::Get,
        "/things",
        &[ParamSpec::query("expand")],
    );

    #[test]
    fn expand_options_route_to_query() {
        let mut req = RequestBuilder::new(&LIST);
        ExpandOptions::expand("fields").apply(&mut req).unwrap();
        let plan = req.build().unwrap();
        assert_eq!(plan.query, vec![("expand", "fields".to_string())]);
    }

    #[test]
    fn default_expand_options_add_nothing() {
        let mut req = RequestBuilder::new(&LIST);
        ExpandOptions::default().apply(&mut req).unwrap();
        let plan = req.build().unwrap();
        assert!(plan.query.is_empty());
    }
}
