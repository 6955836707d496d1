//! Bank connectors and the bank category taxonomy.

use std::sync::Arc;

use crate::client::{call_api, CallOptions, Transport};
use crate::endpoint::{EndpointSpec, ParamSpec};
use crate::error::ApiError;
use crate::method::HttpMethod;
use crate::models::{BanksList, Category, Connector};
use crate::request::RequestBuilder;
use crate::response::{ApiResponse, JsonFormat};

use super::ExpandOptions;

static LIST: EndpointSpec = EndpointSpec::new(
    "banks_get",
    HttpMethod::Get,
    "/banks",
    &[ParamSpec::query("expand")],
);

static GET: EndpointSpec = EndpointSpec::new(
    "banks_id_connector_get",
    HttpMethod::Get,
    "/banks/{id_connector}",
    &[ParamSpec::path("id_connector"), ParamSpec::query("expand")],
);

static CATEGORY_CREATE: EndpointSpec = EndpointSpec::new(
    "banks_categories_post",
    HttpMethod::Post,
    "/banks/categories",
    &[ParamSpec::form("name").required()],
)
.with_form_body();

static CATEGORY_UPDATE: EndpointSpec = EndpointSpec::new(
    "banks_categories_id_category_post",
    HttpMethod::Post,
    "/banks/categories/{id_category}",
    &[ParamSpec::path("id_category"), ParamSpec::form("name").required()],
)
.with_form_body();

static CATEGORY_DELETE: EndpointSpec = EndpointSpec::new(
    "banks_categories_id_category_delete",
    HttpMethod::Delete,
    "/banks/categories/{id_category}",
    &[ParamSpec::path("id_category")],
);

/// `/banks` endpoints: available bank connectors and the category taxonomy.
#[derive(Clone)]
pub struct BanksApi {
    transport: Arc<dyn Transport>,
}

impl BanksApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Lists the available bank connectors.
    pub async fn list(&self, opts: &ExpandOptions) -> Result<BanksList, ApiError> {
        Ok(self
            .list_with_http_info(opts, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn list_with_http_info(
        &self,
        opts: &ExpandOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<BanksList>, ApiError> {
        let mut req = RequestBuilder::new(&LIST);
        opts.apply(&mut req)?;
        call_api::<JsonFormat<BanksList>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Describes one bank connector.
    pub async fn get(&self, id_connector: u64, opts: &ExpandOptions) -> Result<Connector, ApiError> {
        Ok(self
            .get_with_http_info(id_connector, opts, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn get_with_http_info(
        &self,
        id_connector: u64,
        opts: &ExpandOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<Connector>, ApiError> {
        let mut req = RequestBuilder::new(&GET);
        req.set("id_connector", id_connector)?;
        opts.apply(&mut req)?;
        call_api::<JsonFormat<Connector>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Creates a category in the bank taxonomy.
    pub async fn create_category(&self, name: &str) -> Result<Category, ApiError> {
        Ok(self
            .create_category_with_http_info(name, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn create_category_with_http_info(
        &self,
        name: &str,
        call: &CallOptions,
    ) -> Result<ApiResponse<Category>, ApiError> {
        let mut req = RequestBuilder::new(&CATEGORY_CREATE);
        req.set("name", name)?;
        call_api::<JsonFormat<Category>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Renames a category of the bank taxonomy.
    pub async fn update_category(&self, id_category: u64, name: &str) -> Result<Category, ApiError> {
        Ok(self
            .update_category_with_http_info(id_category, name, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn update_category_with_http_info(
        &self,
        id_category: u64,
        name: &str,
        call: &CallOptions,
    ) -> Result<ApiResponse<Category>, ApiError> {
        let mut req = RequestBuilder::new(&CATEGORY_UPDATE);
        req.set("id_category", id_category)?;
        req.set("name", name)?;
        call_api::<JsonFormat<Category>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Deletes a category of the bank taxonomy.
    pub async fn delete_category(&self, id_category: u64) -> Result<Category, ApiError> {
        Ok(self
            .delete_category_with_http_info(id_category, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn delete_category_with_http_info(
        &self,
        id_category: u64,
        call: &CallOptions,
    ) -> Result<ApiResponse<Category>, ApiError> {
        let mut req = RequestBuilder::new(&CATEGORY_DELETE);
        req.set("id_category", id_category)?;
        call_api::<JsonFormat<Category>>(self.transport.as_ref(), req.build()?, call).await
    }
}
