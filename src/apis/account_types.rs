//! Account type reference data.

use std::sync::Arc;

use crate::client::{call_api, CallOptions, Transport};
use crate::endpoint::{EndpointSpec, ParamSpec};
use crate::error::ApiError;
use crate::method::HttpMethod;
use crate::models::{AccountType, AccountTypesList};
use crate::request::RequestBuilder;
use crate::response::{ApiResponse, JsonFormat};

use super::ExpandOptions;

static LIST: EndpointSpec = EndpointSpec::new(
    "account_types_get",
    HttpMethod::Get,
    "/account_types",
    &[ParamSpec::query("expand")],
);

static GET: EndpointSpec = EndpointSpec::new(
    "account_types_id_account_type_get",
    HttpMethod::Get,
    "/account_types/{id_account_type}",
    &[ParamSpec::path("id_account_type"), ParamSpec::query("expand")],
);

/// `/account_types` endpoints.
#[derive(Clone)]
pub struct AccountTypesApi {
    transport: Arc<dyn Transport>,
}

impl AccountTypesApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Lists the known account types.
    pub async fn list(&self, opts: &ExpandOptions) -> Result<AccountTypesList, ApiError> {
        Ok(self
            .list_with_http_info(opts, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn list_with_http_info(
        &self,
        opts: &ExpandOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<AccountTypesList>, ApiError> {
        let mut req = RequestBuilder::new(&LIST);
        opts.apply(&mut req)?;
        call_api::<JsonFormat<AccountTypesList>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Describes one account type.
    pub async fn get(
        &self,
        id_account_type: u64,
        opts: &ExpandOptions,
    ) -> Result<AccountType, ApiError> {
        Ok(self
            .get_with_http_info(id_account_type, opts, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn get_with_http_info(
        &self,
        id_account_type: u64,
        opts: &ExpandOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<AccountType>, ApiError> {
        let mut req = RequestBuilder::new(&GET);
        req.set("id_account_type", id_account_type)?;
        opts.apply(&mut req)?;
        call_api::<JsonFormat<AccountType>>(self.transport.as_ref(), req.build()?, call).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::testing::RecordingTransport;

    #[tokio::test]
    async fn get_substitutes_documented_template() {
        let transport = Arc::new(RecordingTransport::with_json(
            r#"{"id": 42, "name": "checking"}"#,
        ));
        let api = AccountTypesApi::new(transport.clone());

        let account_type = api.get(42, &ExpandOptions::default()).await.unwrap();
        assert_eq!(account_type.id, 42);

        let plan = transport.last_plan();
        assert_eq!(plan.method, HttpMethod::Get);
        assert_eq!(plan.path, "/account_types/42");
        assert!(plan.query.is_empty());
    }

    #[tokio::test]
    async fn list_decodes_envelope() {
        let transport = Arc::new(RecordingTransport::with_json(
            r#"{"accounttypes": [{"id": 1, "name": "checking"}], "total": 1}"#,
        ));
        let api = AccountTypesApi::new(transport.clone());

        let list = api.list(&ExpandOptions::default()).await.unwrap();
        assert_eq!(list.account_types.len(), 1);
        assert_eq!(transport.last_plan().path, "/account_types");
    }
}
