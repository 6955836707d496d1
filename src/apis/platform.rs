//! Operational introspection: logs, billing, stateless categorization.

use std::sync::Arc;

use crate::client::{call_api, CallOptions, Transport};
use crate::endpoint::{EndpointSpec, ParamSpec};
use crate::error::{ApiError, ParamError};
use crate::method::HttpMethod;
use crate::models::{CategorizedTransaction, Invoicing, LogsList};
use crate::request::RequestBuilder;
use crate::response::{ApiResponse, JsonFormat};

static LOGS: EndpointSpec = EndpointSpec::new(
    "logs_get",
    HttpMethod::Get,
    "/logs",
    &[
        ParamSpec::query("limit"),
        ParamSpec::query("offset"),
        ParamSpec::query("min_date"),
        ParamSpec::query("max_date"),
        ParamSpec::query("id_user"),
        ParamSpec::query("id_connection"),
        ParamSpec::query("id_connector"),
    ],
);

static INVOICING: EndpointSpec = EndpointSpec::new(
    "invoicing_get",
    HttpMethod::Get,
    "/invoicing",
    &[
        ParamSpec::query("min_date"),
        ParamSpec::query("max_date"),
        ParamSpec::query("all"),
    ],
);

static CATEGORIZE: EndpointSpec = EndpointSpec::new(
    "categorize_post",
    HttpMethod::Post,
    "/categorize",
    &[
        ParamSpec::form("type").required(),
        ParamSpec::form("value").required(),
        ParamSpec::form("wording").required(),
    ],
)
.with_form_body();

/// Filters for the domain-wide log listing.
#[derive(Debug, Clone, Default)]
pub struct LogsOptions {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    pub id_user: Option<u64>,
    pub id_connection: Option<u64>,
    pub id_connector: Option<u64>,
}

impl LogsOptions {
    fn apply(&self, req: &mut RequestBuilder) -> Result<(), ParamError> {
        if let Some(limit) = self.limit {
            req.set("limit", limit)?;
        }
        if let Some(offset) = self.offset {
            req.set("offset", offset)?;
        }
        if let Some(min_date) = &self.min_date {
            req.set("min_date", min_date)?;
        }
        if let Some(max_date) = &self.max_date {
            req.set("max_date", max_date)?;
        }
        if let Some(id_user) = self.id_user {
            req.set("id_user", id_user)?;
        }
        if let Some(id_connection) = self.id_connection {
            req.set("id_connection", id_connection)?;
        }
        if let Some(id_connector) = self.id_connector {
            req.set("id_connector", id_connector)?;
        }
        Ok(())
    }
}

/// Filters for the billing counters.
#[derive(Debug, Clone, Default)]
pub struct InvoicingOptions {
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    /// Include counters for every client application.
    pub all: Option<bool>,
}

impl InvoicingOptions {
    fn apply(&self, req: &mut RequestBuilder) -> Result<(), ParamError> {
        if let Some(min_date) = &self.min_date {
            req.set("min_date", min_date)?;
        }
        if let Some(max_date) = &self.max_date {
            req.set("max_date", max_date)?;
        }
        if let Some(all) = self.all {
            req.set("all", all)?;
        }
        Ok(())
    }
}

/// Domain-level endpoints: `/logs`, `/invoicing` and `/categorize`.
#[derive(Clone)]
pub struct PlatformApi {
    transport: Arc<dyn Transport>,
}

impl PlatformApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Lists the domain's synchronization logs.
    pub async fn logs(&self, opts: &LogsOptions) -> Result<LogsList, ApiError> {
        Ok(self
            .logs_with_http_info(opts, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn logs_with_http_info(
        &self,
        opts: &LogsOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<LogsList>, ApiError> {
        let mut req = RequestBuilder::new(&LOGS);
        opts.apply(&mut req)?;
        call_api::<JsonFormat<LogsList>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Fetches the billing counters.
    pub async fn invoicing(&self, opts: &InvoicingOptions) -> Result<Invoicing, ApiError> {
        Ok(self
            .invoicing_with_http_info(opts, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn invoicing_with_http_info(
        &self,
        opts: &InvoicingOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<Invoicing>, ApiError> {
        let mut req = RequestBuilder::new(&INVOICING);
        opts.apply(&mut req)?;
        call_api::<JsonFormat<Invoicing>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Categorizes one transaction triple without storing anything.
    pub async fn categorize(
        &self,
        kind: &str,
        value: f64,
        wording: &str,
    ) -> Result<CategorizedTransaction, ApiError> {
        Ok(self
            .categorize_with_http_info(kind, value, wording, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn categorize_with_http_info(
        &self,
        kind: &str,
        value: f64,
        wording: &str,
        call: &CallOptions,
    ) -> Result<ApiResponse<CategorizedTransaction>, ApiError> {
        let mut req = RequestBuilder::new(&CATEGORIZE);
        req.set("type", kind)?;
        req.set("value", value)?;
        req.set("wording", wording)?;
        call_api::<JsonFormat<CategorizedTransaction>>(self.transport.as_ref(), req.build()?, call)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::testing::RecordingTransport;

    #[tokio::test]
    async fn logs_forwards_filters() {
        let transport = Arc::new(RecordingTransport::with_json(r#"{"logs": []}"#));
        let api = PlatformApi::new(transport.clone());

        let opts = LogsOptions {
            limit: Some(100),
            id_connector: Some(3),
            ..Default::default()
        };
        api.logs(&opts).await.unwrap();

        let plan = transport.last_plan();
        assert_eq!(plan.path, "/logs");
        assert_eq!(
            plan.query,
            vec![
                ("limit", "100".to_string()),
                ("id_connector", "3".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn categorize_routes_triple_to_form() {
        let transport = Arc::new(RecordingTransport::with_json(
            r#"{"id_category": 9998, "type": "card"}"#,
        ));
        let api = PlatformApi::new(transport.clone());

        let result = api.categorize("card", -23.5, "CB MONOPRIX").await.unwrap();
        assert_eq!(result.id_category, Some(9998));

        let plan = transport.last_plan();
        assert_eq!(plan.method, HttpMethod::Post);
        assert_eq!(plan.path, "/categorize");
        assert_eq!(
            plan.form,
            vec![
                ("type", "card".to_string()),
                ("value", "-23.5".to_string()),
                ("wording", "CB MONOPRIX".to_string()),
            ]
        );
        assert!(plan.query.is_empty());
    }

    #[tokio::test]
    async fn categorize_requires_wording() {
        let transport = Arc::new(RecordingTransport::with_json("{}"));
        let api = PlatformApi::new(transport.clone());

        let err = api.categorize("card", -23.5, "").await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Param(ParamError::Missing {
                parameter: "wording",
                endpoint: "categorize_post",
            })
        ));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn invoicing_defaults_to_bare_get() {
        let transport = Arc::new(RecordingTransport::with_json(r#"{"users_synced": 128}"#));
        let api = PlatformApi::new(transport.clone());

        let invoicing = api.invoicing(&InvoicingOptions::default()).await.unwrap();
        assert!(invoicing.metrics.contains_key("users_synced"));

        let plan = transport.last_plan();
        assert_eq!(plan.path, "/invoicing");
        assert!(plan.query.is_empty());
        assert_eq!(plan.content_type, None);
    }
}
