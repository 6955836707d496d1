//! The connection lifecycle: linking end-users to connectors.

use std::sync::Arc;

use crate::client::{call_api, CallOptions, Transport};
use crate::endpoint::{EndpointSpec, ParamSpec};
use crate::error::{ApiError, ParamError};
use crate::method::HttpMethod;
use crate::models::{Connection, ConnectionsList, LogsList};
use crate::request::RequestBuilder;
use crate::response::{ApiResponse, JsonFormat};
use crate::user_scope::UserScope;

use super::ExpandOptions;

static LIST: EndpointSpec = EndpointSpec::new(
    "users_id_user_connections_get",
    HttpMethod::Get,
    "/users/{id_user}/connections",
    &[ParamSpec::path("id_user"), ParamSpec::query("expand")],
);

static CREATE: EndpointSpec = EndpointSpec::new(
    "users_id_user_connections_post",
    HttpMethod::Post,
    "/users/{id_user}/connections",
    &[
        ParamSpec::path("id_user"),
        ParamSpec::form("id_connector"),
        ParamSpec::form("login"),
        ParamSpec::form("password"),
        ParamSpec::form("birthday"),
    ],
)
.with_form_body();

static SYNCHRONIZE: EndpointSpec = EndpointSpec::new(
    "users_id_user_connections_id_connection_put",
    HttpMethod::Put,
    "/users/{id_user}/connections/{id_connection}",
    &[
        ParamSpec::path("id_user"),
        ParamSpec::path("id_connection"),
        ParamSpec::query("expand"),
    ],
);

static UPDATE_CREDENTIALS: EndpointSpec = EndpointSpec::new(
    "users_id_user_connections_id_connection_post",
    HttpMethod::Post,
    "/users/{id_user}/connections/{id_connection}",
    &[
        ParamSpec::path("id_user"),
        ParamSpec::path("id_connection"),
        ParamSpec::form("login"),
        ParamSpec::form("password"),
    ],
)
.with_form_body();

static DELETE: EndpointSpec = EndpointSpec::new(
    "users_id_user_connections_id_connection_delete",
    HttpMethod::Delete,
    "/users/{id_user}/connections/{id_connection}",
    &[ParamSpec::path("id_user"), ParamSpec::path("id_connection")],
);

// The `id_connection2` argument filters by another connection; it is sent
// under the query key `id_connection`, which the path parameter already
// uses as a name.
static LOGS: EndpointSpec = EndpointSpec::new(
    "users_id_user_connections_id_connection_logs_get",
    HttpMethod::Get,
    "/users/{id_user}/connections/{id_connection}/logs",
    &[
        ParamSpec::path("id_user"),
        ParamSpec::path("id_connection"),
        ParamSpec::query("limit"),
        ParamSpec::query("offset"),
        ParamSpec::query("min_date"),
        ParamSpec::query("max_date"),
        ParamSpec::query("id_connection2").wire("id_connection"),
    ],
);

/// Initial credentials when creating a connection.
#[derive(Debug, Clone, Default)]
pub struct ConnectionCreateOptions {
    pub id_connector: Option<u64>,
    pub login: Option<String>,
    pub password: Option<String>,
    pub birthday: Option<String>,
}

impl ConnectionCreateOptions {
    fn apply(&self, req: &mut RequestBuilder) -> Result<(), ParamError> {
        if let Some(id_connector) = self.id_connector {
            req.set("id_connector", id_connector)?;
        }
        if let Some(login) = &self.login {
            req.set("login", login)?;
        }
        if let Some(password) = &self.password {
            req.set("password", password)?;
        }
        if let Some(birthday) = &self.birthday {
            req.set("birthday", birthday)?;
        }
        Ok(())
    }
}

/// Replacement credentials for an existing connection.
#[derive(Debug, Clone, Default)]
pub struct CredentialsOptions {
    pub login: Option<String>,
    pub password: Option<String>,
}

impl CredentialsOptions {
    fn apply(&self, req: &mut RequestBuilder) -> Result<(), ParamError> {
        if let Some(login) = &self.login {
            req.set("login", login)?;
        }
        if let Some(password) = &self.password {
            req.set("password", password)?;
        }
        Ok(())
    }
}

/// Filters for a connection's synchronization logs.
#[derive(Debug, Clone, Default)]
pub struct ConnectionLogsOptions {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    /// Filter by another connection id. Sent as the `id_connection` query
    /// key; the argument keeps the `2` suffix because the path already has
    /// an `id_connection` parameter.
    pub id_connection2: Option<u64>,
}

impl ConnectionLogsOptions {
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
        if let Some(id_connection2) = self.id_connection2 {
            req.set("id_connection2", id_connection2)?;
        }
        Ok(())
    }
}

/// `/users/{id_user}/connections` endpoints.
#[derive(Clone)]
pub struct ConnectionsApi {
    transport: Arc<dyn Transport>,
}

impl ConnectionsApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Lists a user's connections.
    pub async fn list(
        &self,
        user: UserScope,
        opts: &ExpandOptions,
    ) -> Result<ConnectionsList, ApiError> {
        Ok(self
            .list_with_http_info(user, opts, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn list_with_http_info(
        &self,
        user: UserScope,
        opts: &ExpandOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<ConnectionsList>, ApiError> {
        let mut req = RequestBuilder::new(&LIST);
        req.set("id_user", user)?;
        opts.apply(&mut req)?;
        call_api::<JsonFormat<ConnectionsList>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Creates a connection to a connector.
    pub async fn create(
        &self,
        user: UserScope,
        opts: &ConnectionCreateOptions,
    ) -> Result<Connection, ApiError> {
        Ok(self
            .create_with_http_info(user, opts, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn create_with_http_info(
        &self,
        user: UserScope,
        opts: &ConnectionCreateOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<Connection>, ApiError> {
        let mut req = RequestBuilder::new(&CREATE);
        req.set("id_user", user)?;
        opts.apply(&mut req)?;
        call_api::<JsonFormat<Connection>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Triggers a synchronization of the connection.
    pub async fn synchronize(
        &self,
        user: UserScope,
        id_connection: u64,
        opts: &ExpandOptions,
    ) -> Result<Connection, ApiError> {
        Ok(self
            .synchronize_with_http_info(user, id_connection, opts, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn synchronize_with_http_info(
        &self,
        user: UserScope,
        id_connection: u64,
        opts: &ExpandOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<Connection>, ApiError> {
        let mut req = RequestBuilder::new(&SYNCHRONIZE);
        req.set("id_user", user)?;
        req.set("id_connection", id_connection)?;
        opts.apply(&mut req)?;
        call_api::<JsonFormat<Connection>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Updates the stored credentials of a connection.
    pub async fn update_credentials(
        &self,
        user: UserScope,
        id_connection: u64,
        opts: &CredentialsOptions,
    ) -> Result<Connection, ApiError> {
        Ok(self
            .update_credentials_with_http_info(user, id_connection, opts, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn update_credentials_with_http_info(
        &self,
        user: UserScope,
        id_connection: u64,
        opts: &CredentialsOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<Connection>, ApiError> {
        let mut req = RequestBuilder::new(&UPDATE_CREDENTIALS);
        req.set("id_user", user)?;
        req.set("id_connection", id_connection)?;
        opts.apply(&mut req)?;
        call_api::<JsonFormat<Connection>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Deletes a connection.
    pub async fn delete(&self, user: UserScope, id_connection: u64) -> Result<Connection, ApiError> {
        Ok(self
            .delete_with_http_info(user, id_connection, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn delete_with_http_info(
        &self,
        user: UserScope,
        id_connection: u64,
        call: &CallOptions,
    ) -> Result<ApiResponse<Connection>, ApiError> {
        let mut req = RequestBuilder::new(&DELETE);
        req.set("id_user", user)?;
        req.set("id_connection", id_connection)?;
        call_api::<JsonFormat<Connection>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Lists the synchronization logs of a connection.
    pub async fn logs(
        &self,
        user: UserScope,
        id_connection: u64,
        opts: &ConnectionLogsOptions,
    ) -> Result<LogsList, ApiError> {
        Ok(self
            .logs_with_http_info(user, id_connection, opts, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn logs_with_http_info(
        &self,
        user: UserScope,
        id_connection: u64,
        opts: &ConnectionLogsOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<LogsList>, ApiError> {
        let mut req = RequestBuilder::new(&LOGS);
        req.set("id_user", user)?;
        req.set("id_connection", id_connection)?;
        opts.apply(&mut req)?;
        call_api::<JsonFormat<LogsList>>(self.transport.as_ref(), req.build()?, call).await
    }
}
