//! Bank accounts under a user's connections.

use std::sync::Arc;

use crate::client::{call_api, CallOptions, Transport};
use crate::endpoint::{EndpointSpec, ParamSpec};
use crate::error::{ApiError, ParamError};
use crate::method::HttpMethod;
use crate::models::{Account, AccountsList};
use crate::request::RequestBuilder;
use crate::response::{ApiResponse, JsonFormat};
use crate::user_scope::UserScope;

use super::ExpandOptions;

static LIST: EndpointSpec = EndpointSpec::new(
    "users_id_user_accounts_get",
    HttpMethod::Get,
    "/users/{id_user}/accounts",
    &[ParamSpec::path("id_user"), ParamSpec::query("expand")],
);

static LIST_FOR_CONNECTION: EndpointSpec = EndpointSpec::new(
    "users_id_user_connections_id_connection_accounts_get",
    HttpMethod::Get,
    "/users/{id_user}/connections/{id_connection}/accounts",
    &[
        ParamSpec::path("id_user"),
        ParamSpec::path("id_connection"),
        ParamSpec::query("expand"),
    ],
);

static UPDATE: EndpointSpec = EndpointSpec::new(
    "users_id_user_accounts_id_account_put",
    HttpMethod::Put,
    "/users/{id_user}/accounts/{id_account}",
    &[
        ParamSpec::path("id_user"),
        ParamSpec::path("id_account"),
        ParamSpec::form("display"),
        ParamSpec::form("disabled"),
        ParamSpec::form("bookmarked"),
        ParamSpec::form("usage"),
    ],
)
.with_form_body();

static DELETE: EndpointSpec = EndpointSpec::new(
    "users_id_user_accounts_id_account_delete",
    HttpMethod::Delete,
    "/users/{id_user}/accounts/{id_account}",
    &[ParamSpec::path("id_user"), ParamSpec::path("id_account")],
);

// The API reference also lists `id_connection` among this endpoint's
// optional fields; the path parameter is the only source of the value here.
static CREATE: EndpointSpec = EndpointSpec::new(
    "users_id_user_connections_id_connection_accounts_post",
    HttpMethod::Post,
    "/users/{id_user}/connections/{id_connection}/accounts",
    &[
        ParamSpec::path("id_user"),
        ParamSpec::path("id_connection"),
        ParamSpec::form("name"),
        ParamSpec::form("balance"),
        ParamSpec::form("number"),
        ParamSpec::form("iban"),
        ParamSpec::form("usage"),
    ],
)
.with_form_body();

/// Mutable fields of one account.
#[derive(Debug, Clone, Default)]
pub struct AccountUpdateOptions {
    pub display: Option<bool>,
    /// Disabling timestamp, or `false`-like empty to re-enable.
    pub disabled: Option<bool>,
    pub bookmarked: Option<bool>,
    pub usage: Option<String>,
}

impl AccountUpdateOptions {
    fn apply(&self, req: &mut RequestBuilder) -> Result<(), ParamError> {
        if let Some(display) = self.display {
            req.set("display", display)?;
        }
        if let Some(disabled) = self.disabled {
            req.set("disabled", disabled)?;
        }
        if let Some(bookmarked) = self.bookmarked {
            req.set("bookmarked", bookmarked)?;
        }
        if let Some(usage) = &self.usage {
            req.set("usage", usage)?;
        }
        Ok(())
    }
}

/// Fields of a manually declared account.
#[derive(Debug, Clone, Default)]
pub struct AccountCreateOptions {
    pub name: Option<String>,
    pub balance: Option<f64>,
    pub number: Option<String>,
    pub iban: Option<String>,
    pub usage: Option<String>,
}

impl AccountCreateOptions {
    fn apply(&self, req: &mut RequestBuilder) -> Result<(), ParamError> {
        if let Some(name) = &self.name {
            req.set("name", name)?;
        }
        if let Some(balance) = self.balance {
            req.set("balance", balance)?;
        }
        if let Some(number) = &self.number {
            req.set("number", number)?;
        }
        if let Some(iban) = &self.iban {
            req.set("iban", iban)?;
        }
        if let Some(usage) = &self.usage {
            req.set("usage", usage)?;
        }
        Ok(())
    }
}

/// Account endpoints under `/users/{id_user}`.
#[derive(Clone)]
pub struct AccountsApi {
    transport: Arc<dyn Transport>,
}

impl AccountsApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Lists every account of a user.
    pub async fn list(&self, user: UserScope, opts: &ExpandOptions) -> Result<AccountsList, ApiError> {
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
    ) -> Result<ApiResponse<AccountsList>, ApiError> {
        let mut req = RequestBuilder::new(&LIST);
        req.set("id_user", user)?;
        opts.apply(&mut req)?;
        call_api::<JsonFormat<AccountsList>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Lists the accounts under one connection.
    pub async fn list_for_connection(
        &self,
        user: UserScope,
        id_connection: u64,
        opts: &ExpandOptions,
    ) -> Result<AccountsList, ApiError> {
        Ok(self
            .list_for_connection_with_http_info(user, id_connection, opts, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn list_for_connection_with_http_info(
        &self,
        user: UserScope,
        id_connection: u64,
        opts: &ExpandOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<AccountsList>, ApiError> {
        let mut req = RequestBuilder::new(&LIST_FOR_CONNECTION);
        req.set("id_user", user)?;
        req.set("id_connection", id_connection)?;
        opts.apply(&mut req)?;
        call_api::<JsonFormat<AccountsList>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Updates one account.
    pub async fn update(
        &self,
        user: UserScope,
        id_account: u64,
        opts: &AccountUpdateOptions,
    ) -> Result<Account, ApiError> {
        Ok(self
            .update_with_http_info(user, id_account, opts, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn update_with_http_info(
        &self,
        user: UserScope,
        id_account: u64,
        opts: &AccountUpdateOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<Account>, ApiError> {
        let mut req = RequestBuilder::new(&UPDATE);
        req.set("id_user", user)?;
        req.set("id_account", id_account)?;
        opts.apply(&mut req)?;
        call_api::<JsonFormat<Account>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Deletes one account.
    pub async fn delete(&self, user: UserScope, id_account: u64) -> Result<Account, ApiError> {
        Ok(self
            .delete_with_http_info(user, id_account, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn delete_with_http_info(
        &self,
        user: UserScope,
        id_account: u64,
        call: &CallOptions,
    ) -> Result<ApiResponse<Account>, ApiError> {
        let mut req = RequestBuilder::new(&DELETE);
        req.set("id_user", user)?;
        req.set("id_account", id_account)?;
        call_api::<JsonFormat<Account>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Declares an account manually under a connection.
    pub async fn create(
        &self,
        user: UserScope,
        id_connection: u64,
        opts: &AccountCreateOptions,
    ) -> Result<Account, ApiError> {
        Ok(self
            .create_with_http_info(user, id_connection, opts, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn create_with_http_info(
        &self,
        user: UserScope,
        id_connection: u64,
        opts: &AccountCreateOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<Account>, ApiError> {
        let mut req = RequestBuilder::new(&CREATE);
        req.set("id_user", user)?;
        req.set("id_connection", id_connection)?;
        opts.apply(&mut req)?;
        call_api::<JsonFormat<Account>>(self.transport.as_ref(), req.build()?, call).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::testing::RecordingTransport;

    const ACCOUNT_BODY: &str = r#"{"id": 17, "name": "Compte courant", "balance": 502.23}"#;

    #[tokio::test]
    async fn create_takes_connection_from_the_path_only() {
        let transport = Arc::new(RecordingTransport::with_json(ACCOUNT_BODY));
        let api = AccountsApi::new(transport.clone());

        let opts = AccountCreateOptions {
            name: Some("Livret A".to_string()),
            balance: Some(1500.0),
            ..Default::default()
        };
        api.create(UserScope::Me, 83, &opts).await.unwrap();

        let plan = transport.last_plan();
        assert_eq!(plan.path, "/users/me/connections/83/accounts");
        // the connection id travels in the path, never in the form
        assert!(plan.form.iter().all(|(key, _)| *key != "id_connection"));
        assert_eq!(
            plan.form,
            vec![
                ("name", "Livret A".to_string()),
                ("balance", "1500".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn create_rejects_a_duplicate_connection_field() {
        let transport = Arc::new(RecordingTransport::with_json(ACCOUNT_BODY));
        let _api = AccountsApi::new(transport.clone());

        let mut req = RequestBuilder::new(&CREATE);
        req.set("id_user", "me").unwrap();
        req.set("id_connection", 83).unwrap();
        // a second supply replaces the path value instead of forking it
        req.set("id_connection", 84).unwrap();
        let plan = req.build().unwrap();
        assert_eq!(plan.path, "/users/me/connections/84/accounts");
        assert!(plan.form.is_empty());
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn update_routes_flags_to_form() {
        let transport = Arc::new(RecordingTransport::with_json(ACCOUNT_BODY));
        let api = AccountsApi::new(transport.clone());

        let opts = AccountUpdateOptions {
            display: Some(false),
            bookmarked: Some(true),
            ..Default::default()
        };
        api.update(UserScope::Id(12), 17, &opts).await.unwrap();

        let plan = transport.last_plan();
        assert_eq!(plan.method, HttpMethod::Put);
        assert_eq!(plan.path, "/users/12/accounts/17");
        assert_eq!(
            plan.form,
            vec![
                ("display", "false".to_string()),
                ("bookmarked", "true".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn delete_has_no_body() {
        let transport = Arc::new(RecordingTransport::with_json(ACCOUNT_BODY));
        let api = AccountsApi::new(transport.clone());

        api.delete(UserScope::Me, 17).await.unwrap();

        let plan = transport.last_plan();
        assert_eq!(plan.method, HttpMethod::Delete);
        assert_eq!(plan.path, "/users/me/accounts/17");
        assert_eq!(plan.content_type, None);
        assert!(plan.form.is_empty());
    }
}
