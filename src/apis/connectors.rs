//! Connector management and logo assets.

use std::sync::Arc;

use crate::client::{call_api, CallOptions, Transport};
use crate::endpoint::{EndpointSpec, ParamSpec};
use crate::error::{ApiError, ParamError};
use crate::method::HttpMethod;
use crate::models::{Connector, ConnectorLogo, ConnectorsList, LogosList};
use crate::request::{FilePart, RequestBuilder};
use crate::response::{ApiResponse, JsonFormat};

use super::ExpandOptions;

static LIST: EndpointSpec = EndpointSpec::new(
    "connectors_get",
    HttpMethod::Get,
    "/connectors",
    &[ParamSpec::query("expand")],
);

static CREATE: EndpointSpec = EndpointSpec::new(
    "connectors_post",
    HttpMethod::Post,
    "/connectors",
    &[
        ParamSpec::form("name").required(),
        ParamSpec::form("login"),
        ParamSpec::form("password"),
        ParamSpec::form("types"),
        ParamSpec::form("comment"),
    ],
)
.with_form_body();

static BULK_UPDATE: EndpointSpec = EndpointSpec::new(
    "connectors_put",
    HttpMethod::Put,
    "/connectors",
    &[ParamSpec::form("hidden")],
)
.with_form_body();

static UPDATE: EndpointSpec = EndpointSpec::new(
    "connectors_id_connector_put",
    HttpMethod::Put,
    "/connectors/{id_connector}",
    &[
        ParamSpec::path("id_connector"),
        ParamSpec::form("hidden"),
        ParamSpec::form("sync_frequency"),
        ParamSpec::form("auth_mechanism"),
    ],
)
.with_form_body();

static LOGOS_LIST: EndpointSpec = EndpointSpec::new(
    "connectors_id_connector_logos_get",
    HttpMethod::Get,
    "/connectors/{id_connector}/logos",
    &[ParamSpec::path("id_connector")],
);

static LOGO_CREATE: EndpointSpec = EndpointSpec::new(
    "connectors_id_connector_logos_post",
    HttpMethod::Post,
    "/connectors/{id_connector}/logos",
    &[
        ParamSpec::path("id_connector"),
        ParamSpec::file("img_content").required(),
    ],
)
.with_form_body();

static LOGO_UPDATE: EndpointSpec = EndpointSpec::new(
    "connectors_id_connector_logos_id_logo_put",
    HttpMethod::Put,
    "/connectors/{id_connector}/logos/{id_logo}",
    &[
        ParamSpec::path("id_connector"),
        ParamSpec::path("id_logo"),
        ParamSpec::file("img_content").required(),
    ],
)
.with_form_body();

static LOGO_DELETE: EndpointSpec = EndpointSpec::new(
    "connectors_id_connector_logos_id_logo_delete",
    HttpMethod::Delete,
    "/connectors/{id_connector}/logos/{id_logo}",
    &[ParamSpec::path("id_connector"), ParamSpec::path("id_logo")],
);

/// Optional fields when registering a connector.
#[derive(Debug, Clone, Default)]
pub struct ConnectorCreateOptions {
    pub login: Option<String>,
    pub password: Option<String>,
    pub types: Option<String>,
    pub comment: Option<String>,
}

impl ConnectorCreateOptions {
    fn apply(&self, req: &mut RequestBuilder) -> Result<(), ParamError> {
        if let Some(login) = &self.login {
            req.set("login", login)?;
        }
        if let Some(password) = &self.password {
            req.set("password", password)?;
        }
        if let Some(types) = &self.types {
            req.set("types", types)?;
        }
        if let Some(comment) = &self.comment {
            req.set("comment", comment)?;
        }
        Ok(())
    }
}

/// Fields of the bulk connector toggle.
#[derive(Debug, Clone, Default)]
pub struct ConnectorsBulkOptions {
    pub hidden: Option<bool>,
}

impl ConnectorsBulkOptions {
    fn apply(&self, req: &mut RequestBuilder) -> Result<(), ParamError> {
        if let Some(hidden) = self.hidden {
            req.set("hidden", hidden)?;
        }
        Ok(())
    }
}

/// Mutable fields of one connector.
#[derive(Debug, Clone, Default)]
pub struct ConnectorUpdateOptions {
    pub hidden: Option<bool>,
    pub sync_frequency: Option<f64>,
    pub auth_mechanism: Option<String>,
}

impl ConnectorUpdateOptions {
    fn apply(&self, req: &mut RequestBuilder) -> Result<(), ParamError> {
        if let Some(hidden) = self.hidden {
            req.set("hidden", hidden)?;
        }
        if let Some(sync_frequency) = self.sync_frequency {
            req.set("sync_frequency", sync_frequency)?;
        }
        if let Some(auth_mechanism) = &self.auth_mechanism {
            req.set("auth_mechanism", auth_mechanism)?;
        }
        Ok(())
    }
}

/// `/connectors` endpoints.
#[derive(Clone)]
pub struct ConnectorsApi {
    transport: Arc<dyn Transport>,
}

impl ConnectorsApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Lists the registered connectors.
    pub async fn list(&self, opts: &ExpandOptions) -> Result<ConnectorsList, ApiError> {
        Ok(self
            .list_with_http_info(opts, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn list_with_http_info(
        &self,
        opts: &ExpandOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<ConnectorsList>, ApiError> {
        let mut req = RequestBuilder::new(&LIST);
        opts.apply(&mut req)?;
        call_api::<JsonFormat<ConnectorsList>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Registers a new connector.
    pub async fn create(
        &self,
        name: &str,
        opts: &ConnectorCreateOptions,
    ) -> Result<Connector, ApiError> {
        Ok(self
            .create_with_http_info(name, opts, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn create_with_http_info(
        &self,
        name: &str,
        opts: &ConnectorCreateOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<Connector>, ApiError> {
        let mut req = RequestBuilder::new(&CREATE);
        req.set("name", name)?;
        opts.apply(&mut req)?;
        call_api::<JsonFormat<Connector>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Toggles every connector at once.
    pub async fn bulk_update(
        &self,
        opts: &ConnectorsBulkOptions,
    ) -> Result<ConnectorsList, ApiError> {
        Ok(self
            .bulk_update_with_http_info(opts, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn bulk_update_with_http_info(
        &self,
        opts: &ConnectorsBulkOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<ConnectorsList>, ApiError> {
        let mut req = RequestBuilder::new(&BULK_UPDATE);
        opts.apply(&mut req)?;
        call_api::<JsonFormat<ConnectorsList>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Updates one connector.
    pub async fn update(
        &self,
        id_connector: u64,
        opts: &ConnectorUpdateOptions,
    ) -> Result<Connector, ApiError> {
        Ok(self
            .update_with_http_info(id_connector, opts, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn update_with_http_info(
        &self,
        id_connector: u64,
        opts: &ConnectorUpdateOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<Connector>, ApiError> {
        let mut req = RequestBuilder::new(&UPDATE);
        req.set("id_connector", id_connector)?;
        opts.apply(&mut req)?;
        call_api::<JsonFormat<Connector>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Lists the logo assets of a connector.
    pub async fn list_logos(&self, id_connector: u64) -> Result<LogosList, ApiError> {
        Ok(self
            .list_logos_with_http_info(id_connector, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn list_logos_with_http_info(
        &self,
        id_connector: u64,
        call: &CallOptions,
    ) -> Result<ApiResponse<LogosList>, ApiError> {
        let mut req = RequestBuilder::new(&LOGOS_LIST);
        req.set("id_connector", id_connector)?;
        call_api::<JsonFormat<LogosList>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Attaches a logo to a connector.
    pub async fn create_logo(
        &self,
        id_connector: u64,
        img_content: FilePart,
    ) -> Result<ConnectorLogo, ApiError> {
        Ok(self
            .create_logo_with_http_info(id_connector, img_content, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn create_logo_with_http_info(
        &self,
        id_connector: u64,
        img_content: FilePart,
        call: &CallOptions,
    ) -> Result<ApiResponse<ConnectorLogo>, ApiError> {
        let mut req = RequestBuilder::new(&LOGO_CREATE);
        req.set("id_connector", id_connector)?;
        req.attach("img_content", img_content)?;
        call_api::<JsonFormat<ConnectorLogo>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Replaces one logo asset.
    pub async fn update_logo(
        &self,
        id_connector: u64,
        id_logo: u64,
        img_content: FilePart,
    ) -> Result<ConnectorLogo, ApiError> {
        Ok(self
            .update_logo_with_http_info(id_connector, id_logo, img_content, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn update_logo_with_http_info(
        &self,
        id_connector: u64,
        id_logo: u64,
        img_content: FilePart,
        call: &CallOptions,
    ) -> Result<ApiResponse<ConnectorLogo>, ApiError> {
        let mut req = RequestBuilder::new(&LOGO_UPDATE);
        req.set("id_connector", id_connector)?;
        req.set("id_logo", id_logo)?;
        req.attach("img_content", img_content)?;
        call_api::<JsonFormat<ConnectorLogo>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Removes one logo asset.
    pub async fn delete_logo(
        &self,
        id_connector: u64,
        id_logo: u64,
    ) -> Result<ConnectorLogo, ApiError> {
        Ok(self
            .delete_logo_with_http_info(id_connector, id_logo, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn delete_logo_with_http_info(
        &self,
        id_connector: u64,
        id_logo: u64,
        call: &CallOptions,
    ) -> Result<ApiResponse<ConnectorLogo>, ApiError> {
        let mut req = RequestBuilder::new(&LOGO_DELETE);
        req.set("id_connector", id_connector)?;
        req.set("id_logo", id_logo)?;
        call_api::<JsonFormat<ConnectorLogo>>(self.transport.as_ref(), req.build()?, call).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::testing::RecordingTransport;
    use crate::endpoint::MEDIA_MULTIPART;

    const CONNECTOR_BODY: &str = r#"{"id": 3, "name": "Connecteur de test"}"#;

    #[tokio::test]
    async fn update_without_options_sends_empty_form() {
        let transport = Arc::new(RecordingTransport::with_json(CONNECTOR_BODY));
        let api = ConnectorsApi::new(transport.clone());

        api.update(3, &ConnectorUpdateOptions::default()).await.unwrap();

        let plan = transport.last_plan();
        assert_eq!(plan.method, HttpMethod::Put);
        assert_eq!(plan.path, "/connectors/3");
        assert!(plan.form.is_empty());
        assert!(plan.query.is_empty());
        // the body is still declared: the endpoint accepts a form
        assert_eq!(plan.content_type, Some(MEDIA_MULTIPART));
    }

    #[tokio::test]
    async fn update_routes_fields_to_form() {
        let transport = Arc::new(RecordingTransport::with_json(CONNECTOR_BODY));
        let api = ConnectorsApi::new(transport.clone());

        let opts = ConnectorUpdateOptions {
            hidden: Some(true),
            sync_frequency: Some(21600.0),
            auth_mechanism: None,
        };
        api.update(3, &opts).await.unwrap();

        let plan = transport.last_plan();
        assert_eq!(
            plan.form,
            vec![
                ("hidden", "true".to_string()),
                ("sync_frequency", "21600".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn create_requires_name() {
        let transport = Arc::new(RecordingTransport::with_json(CONNECTOR_BODY));
        let api = ConnectorsApi::new(transport.clone());

        let err = api
            .create("", &ConnectorCreateOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Param(ParamError::Missing { .. })));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn logo_upload_carries_file_part() {
        let transport = Arc::new(RecordingTransport::with_json(r#"{"id": 11}"#));
        let api = ConnectorsApi::new(transport.clone());

        api.create_logo(3, FilePart::new("logo.png", &b"\x89PNG"[..]))
            .await
            .unwrap();

        let plan = transport.last_plan();
        assert_eq!(plan.path, "/connectors/3/logos");
        assert_eq!(plan.files.len(), 1);
        assert_eq!(plan.files[0].0, "img_content");
        assert_eq!(plan.content_type, Some(MEDIA_MULTIPART));
    }

    #[tokio::test]
    async fn missing_logo_file_fails_before_transport() {
        let transport = Arc::new(RecordingTransport::with_json(r#"{"id": 11}"#));
        let api = ConnectorsApi::new(transport.clone());

        // drive the descriptor directly: the typed surface cannot omit the file
        let mut req = RequestBuilder::new(&LOGO_CREATE);
        req.set("id_connector", 3).unwrap();
        let err = req.build().unwrap_err();
        assert_eq!(
            err,
            ParamError::Missing {
                parameter: "img_content",
                endpoint: "connectors_id_connector_logos_post",
            }
        );
        assert_eq!(transport.calls(), 0);
    }
}
