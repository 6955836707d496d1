//! Transactions, recurring clusters and per-transaction annotations.

use std::sync::Arc;

use crate::client::{call_api, CallOptions, Transport};
use crate::endpoint::{EndpointSpec, ParamSpec};
use crate::error::{ApiError, ParamError};
use crate::method::HttpMethod;
use crate::models::{
    ClustersList, Transaction, TransactionInformationsList, TransactionsCluster, TransactionsList,
};
use crate::request::RequestBuilder;
use crate::response::{ApiResponse, JsonFormat};
use crate::user_scope::UserScope;

const LIST_FILTERS: [ParamSpec; 10] = [
    ParamSpec::query("expand"),
    ParamSpec::query("limit"),
    ParamSpec::query("offset"),
    ParamSpec::query("min_date"),
    ParamSpec::query("max_date"),
    ParamSpec::query("min_value"),
    ParamSpec::query("max_value"),
    ParamSpec::query("income"),
    ParamSpec::query("deleted"),
    ParamSpec::query("last_update"),
];

static LIST: EndpointSpec = EndpointSpec::new(
    "users_id_user_accounts_id_account_transactions_get",
    HttpMethod::Get,
    "/users/{id_user}/accounts/{id_account}/transactions",
    &[
        ParamSpec::path("id_user"),
        ParamSpec::path("id_account"),
        LIST_FILTERS[0],
        LIST_FILTERS[1],
        LIST_FILTERS[2],
        LIST_FILTERS[3],
        LIST_FILTERS[4],
        LIST_FILTERS[5],
        LIST_FILTERS[6],
        LIST_FILTERS[7],
        LIST_FILTERS[8],
        LIST_FILTERS[9],
    ],
);

static LIST_FOR_USER: EndpointSpec = EndpointSpec::new(
    "users_id_user_transactions_get",
    HttpMethod::Get,
    "/users/{id_user}/transactions",
    &[
        ParamSpec::path("id_user"),
        LIST_FILTERS[0],
        LIST_FILTERS[1],
        LIST_FILTERS[2],
        LIST_FILTERS[3],
        LIST_FILTERS[4],
        LIST_FILTERS[5],
        LIST_FILTERS[6],
        LIST_FILTERS[7],
        LIST_FILTERS[8],
        LIST_FILTERS[9],
    ],
);

static CREATE: EndpointSpec = EndpointSpec::new(
    "users_id_user_accounts_id_account_transactions_post",
    HttpMethod::Post,
    "/users/{id_user}/accounts/{id_account}/transactions",
    &[
        ParamSpec::path("id_user"),
        ParamSpec::path("id_account"),
        ParamSpec::form("original_wording").required(),
        ParamSpec::form("value").required(),
        ParamSpec::form("date").required(),
        ParamSpec::form("type"),
        ParamSpec::form("state"),
    ],
)
.with_form_body();

static UPDATE: EndpointSpec = EndpointSpec::new(
    "users_id_user_accounts_id_account_transactions_id_transaction_put",
    HttpMethod::Put,
    "/users/{id_user}/accounts/{id_account}/transactions/{id_transaction}",
    &[
        ParamSpec::path("id_user"),
        ParamSpec::path("id_account"),
        ParamSpec::path("id_transaction"),
        ParamSpec::form("wording"),
        ParamSpec::form("id_category"),
        ParamSpec::form("comment"),
    ],
)
.with_form_body();

static DELETE: EndpointSpec = EndpointSpec::new(
    "users_id_user_accounts_id_account_transactions_id_transaction_delete",
    HttpMethod::Delete,
    "/users/{id_user}/accounts/{id_account}/transactions/{id_transaction}",
    &[
        ParamSpec::path("id_user"),
        ParamSpec::path("id_account"),
        ParamSpec::path("id_transaction"),
    ],
);

static INFORMATIONS_GET: EndpointSpec = EndpointSpec::new(
    "users_id_user_accounts_id_account_transactions_id_transaction_informations_get",
    HttpMethod::Get,
    "/users/{id_user}/accounts/{id_account}/transactions/{id_transaction}/informations",
    &[
        ParamSpec::path("id_user"),
        ParamSpec::path("id_account"),
        ParamSpec::path("id_transaction"),
    ],
);

static INFORMATIONS_PUT: EndpointSpec = EndpointSpec::new(
    "users_id_user_accounts_id_account_transactions_id_transaction_informations_put",
    HttpMethod::Put,
    "/users/{id_user}/accounts/{id_account}/transactions/{id_transaction}/informations",
    &[
        ParamSpec::path("id_user"),
        ParamSpec::path("id_account"),
        ParamSpec::path("id_transaction"),
        ParamSpec::form("key").required(),
        ParamSpec::form("value").required(),
    ],
)
.with_form_body();

static INFORMATIONS_DELETE: EndpointSpec = EndpointSpec::new(
    "users_id_user_accounts_id_account_transactions_id_transaction_informations_delete",
    HttpMethod::Delete,
    "/users/{id_user}/accounts/{id_account}/transactions/{id_transaction}/informations",
    &[
        ParamSpec::path("id_user"),
        ParamSpec::path("id_account"),
        ParamSpec::path("id_transaction"),
    ],
);

static CLUSTERS_LIST: EndpointSpec = EndpointSpec::new(
    "users_id_user_accounts_id_account_transactionsclusters_get",
    HttpMethod::Get,
    "/users/{id_user}/accounts/{id_account}/transactionsclusters",
    &[ParamSpec::path("id_user"), ParamSpec::path("id_account")],
);

static CLUSTER_CREATE: EndpointSpec = EndpointSpec::new(
    "users_id_user_accounts_id_account_transactionsclusters_post",
    HttpMethod::Post,
    "/users/{id_user}/accounts/{id_account}/transactionsclusters",
    &[
        ParamSpec::path("id_user"),
        ParamSpec::path("id_account"),
        ParamSpec::form("mean_amount").required(),
        ParamSpec::form("wording").required(),
        ParamSpec::form("median_increment"),
        ParamSpec::form("id_category"),
        ParamSpec::form("next_date"),
    ],
)
.with_form_body();

static CLUSTER_UPDATE: EndpointSpec = EndpointSpec::new(
    "users_id_user_accounts_id_account_transactionsclusters_id_transactionscluster_put",
    HttpMethod::Put,
    "/users/{id_user}/accounts/{id_account}/transactionsclusters/{id_transactionscluster}",
    &[
        ParamSpec::path("id_user"),
        ParamSpec::path("id_account"),
        ParamSpec::path("id_transactionscluster"),
        ParamSpec::form("mean_amount"),
        ParamSpec::form("wording"),
        ParamSpec::form("median_increment"),
        ParamSpec::form("id_category"),
        ParamSpec::form("next_date"),
        ParamSpec::form("enabled"),
    ],
)
.with_form_body();

static CLUSTER_DELETE: EndpointSpec = EndpointSpec::new(
    "users_id_user_accounts_id_account_transactionsclusters_id_transactionscluster_delete",
    HttpMethod::Delete,
    "/users/{id_user}/accounts/{id_account}/transactionsclusters/{id_transactionscluster}",
    &[
        ParamSpec::path("id_user"),
        ParamSpec::path("id_account"),
        ParamSpec::path("id_transactionscluster"),
    ],
);

/// Filters common to the transaction list endpoints.
#[derive(Debug, Clone, Default)]
pub struct TransactionsListOptions {
    pub expand: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub income: Option<bool>,
    pub deleted: Option<bool>,
    pub last_update: Option<String>,
}

impl TransactionsListOptions {
    fn apply(&self, req: &mut RequestBuilder) -> Result<(), ParamError> {
        if let Some(expand) = &self.expand {
            req.set("expand", expand)?;
        }
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
        if let Some(min_value) = self.min_value {
            req.set("min_value", min_value)?;
        }
        if let Some(max_value) = self.max_value {
            req.set("max_value", max_value)?;
        }
        if let Some(income) = self.income {
            req.set("income", income)?;
        }
        if let Some(deleted) = self.deleted {
            req.set("deleted", deleted)?;
        }
        if let Some(last_update) = &self.last_update {
            req.set("last_update", last_update)?;
        }
        Ok(())
    }
}

/// Optional fields of a manually declared transaction.
#[derive(Debug, Clone, Default)]
pub struct TransactionCreateOptions {
    pub transaction_type: Option<String>,
    pub state: Option<String>,
}

impl TransactionCreateOptions {
    fn apply(&self, req: &mut RequestBuilder) -> Result<(), ParamError> {
        if let Some(transaction_type) = &self.transaction_type {
            req.set("type", transaction_type)?;
        }
        if let Some(state) = &self.state {
            req.set("state", state)?;
        }
        Ok(())
    }
}

/// Mutable fields of one transaction.
#[derive(Debug, Clone, Default)]
pub struct TransactionUpdateOptions {
    pub wording: Option<String>,
    pub id_category: Option<u64>,
    pub comment: Option<String>,
}

impl TransactionUpdateOptions {
    fn apply(&self, req: &mut RequestBuilder) -> Result<(), ParamError> {
        if let Some(wording) = &self.wording {
            req.set("wording", wording)?;
        }
        if let Some(id_category) = self.id_category {
            req.set("id_category", id_category)?;
        }
        if let Some(comment) = &self.comment {
            req.set("comment", comment)?;
        }
        Ok(())
    }
}

/// Optional fields when declaring a recurring cluster.
#[derive(Debug, Clone, Default)]
pub struct ClusterCreateOptions {
    pub median_increment: Option<i64>,
    pub id_category: Option<u64>,
    pub next_date: Option<String>,
}

impl ClusterCreateOptions {
    fn apply(&self, req: &mut RequestBuilder) -> Result<(), ParamError> {
        if let Some(median_increment) = self.median_increment {
            req.set("median_increment", median_increment)?;
        }
        if let Some(id_category) = self.id_category {
            req.set("id_category", id_category)?;
        }
        if let Some(next_date) = &self.next_date {
            req.set("next_date", next_date)?;
        }
        Ok(())
    }
}

/// Mutable fields of one recurring cluster.
#[derive(Debug, Clone, Default)]
pub struct ClusterUpdateOptions {
    pub mean_amount: Option<f64>,
    pub wording: Option<String>,
    pub median_increment: Option<i64>,
    pub id_category: Option<u64>,
    pub next_date: Option<String>,
    pub enabled: Option<bool>,
}

impl ClusterUpdateOptions {
    fn apply(&self, req: &mut RequestBuilder) -> Result<(), ParamError> {
        if let Some(mean_amount) = self.mean_amount {
            req.set("mean_amount", mean_amount)?;
        }
        if let Some(wording) = &self.wording {
            req.set("wording", wording)?;
        }
        if let Some(median_increment) = self.median_increment {
            req.set("median_increment", median_increment)?;
        }
        if let Some(id_category) = self.id_category {
            req.set("id_category", id_category)?;
        }
        if let Some(next_date) = &self.next_date {
            req.set("next_date", next_date)?;
        }
        if let Some(enabled) = self.enabled {
            req.set("enabled", enabled)?;
        }
        Ok(())
    }
}

/// Transaction endpoints under `/users/{id_user}`.
#[derive(Clone)]
pub struct TransactionsApi {
    transport: Arc<dyn Transport>,
}

impl TransactionsApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Lists the transactions of one account.
    pub async fn list(
        &self,
        user: UserScope,
        id_account: u64,
        opts: &TransactionsListOptions,
    ) -> Result<TransactionsList, ApiError> {
        Ok(self
            .list_with_http_info(user, id_account, opts, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn list_with_http_info(
        &self,
        user: UserScope,
        id_account: u64,
        opts: &TransactionsListOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<TransactionsList>, ApiError> {
        let mut req = RequestBuilder::new(&LIST);
        req.set("id_user", user)?;
        req.set("id_account", id_account)?;
        opts.apply(&mut req)?;
        call_api::<JsonFormat<TransactionsList>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Lists the transactions across all of a user's accounts.
    pub async fn list_for_user(
        &self,
        user: UserScope,
        opts: &TransactionsListOptions,
    ) -> Result<TransactionsList, ApiError> {
        Ok(self
            .list_for_user_with_http_info(user, opts, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn list_for_user_with_http_info(
        &self,
        user: UserScope,
        opts: &TransactionsListOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<TransactionsList>, ApiError> {
        let mut req = RequestBuilder::new(&LIST_FOR_USER);
        req.set("id_user", user)?;
        opts.apply(&mut req)?;
        call_api::<JsonFormat<TransactionsList>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Declares a transaction manually on an account.
    pub async fn create(
        &self,
        user: UserScope,
        id_account: u64,
        original_wording: &str,
        value: f64,
        date: &str,
        opts: &TransactionCreateOptions,
    ) -> Result<Transaction, ApiError> {
        Ok(self
            .create_with_http_info(
                user,
                id_account,
                original_wording,
                value,
                date,
                opts,
                &CallOptions::default(),
            )
            .await?
            .data)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_with_http_info(
        &self,
        user: UserScope,
        id_account: u64,
        original_wording: &str,
        value: f64,
        date: &str,
        opts: &TransactionCreateOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<Transaction>, ApiError> {
        let mut req = RequestBuilder::new(&CREATE);
        req.set("id_user", user)?;
        req.set("id_account", id_account)?;
        req.set("original_wording", original_wording)?;
        req.set("value", value)?;
        req.set("date", date)?;
        opts.apply(&mut req)?;
        call_api::<JsonFormat<Transaction>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Updates one transaction.
    pub async fn update(
        &self,
        user: UserScope,
        id_account: u64,
        id_transaction: u64,
        opts: &TransactionUpdateOptions,
    ) -> Result<Transaction, ApiError> {
        Ok(self
            .update_with_http_info(user, id_account, id_transaction, opts, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn update_with_http_info(
        &self,
        user: UserScope,
        id_account: u64,
        id_transaction: u64,
        opts: &TransactionUpdateOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<Transaction>, ApiError> {
        let mut req = RequestBuilder::new(&UPDATE);
        req.set("id_user", user)?;
        req.set("id_account", id_account)?;
        req.set("id_transaction", id_transaction)?;
        opts.apply(&mut req)?;
        call_api::<JsonFormat<Transaction>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Deletes one transaction.
    pub async fn delete(
        &self,
        user: UserScope,
        id_account: u64,
        id_transaction: u64,
    ) -> Result<Transaction, ApiError> {
        Ok(self
            .delete_with_http_info(user, id_account, id_transaction, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn delete_with_http_info(
        &self,
        user: UserScope,
        id_account: u64,
        id_transaction: u64,
        call: &CallOptions,
    ) -> Result<ApiResponse<Transaction>, ApiError> {
        let mut req = RequestBuilder::new(&DELETE);
        req.set("id_user", user)?;
        req.set("id_account", id_account)?;
        req.set("id_transaction", id_transaction)?;
        call_api::<JsonFormat<Transaction>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Lists the annotations attached to a transaction.
    pub async fn informations(
        &self,
        user: UserScope,
        id_account: u64,
        id_transaction: u64,
    ) -> Result<TransactionInformationsList, ApiError> {
        Ok(self
            .informations_with_http_info(user, id_account, id_transaction, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn informations_with_http_info(
        &self,
        user: UserScope,
        id_account: u64,
        id_transaction: u64,
        call: &CallOptions,
    ) -> Result<ApiResponse<TransactionInformationsList>, ApiError> {
        let mut req = RequestBuilder::new(&INFORMATIONS_GET);
        req.set("id_user", user)?;
        req.set("id_account", id_account)?;
        req.set("id_transaction", id_transaction)?;
        call_api::<JsonFormat<TransactionInformationsList>>(
            self.transport.as_ref(),
            req.build()?,
            call,
        )
        .await
    }

    /// Sets one key/value annotation on a transaction.
    pub async fn set_information(
        &self,
        user: UserScope,
        id_account: u64,
        id_transaction: u64,
        key: &str,
        value: &str,
    ) -> Result<TransactionInformationsList, ApiError> {
        Ok(self
            .set_information_with_http_info(
                user,
                id_account,
                id_transaction,
                key,
                value,
                &CallOptions::default(),
            )
            .await?
            .data)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn set_information_with_http_info(
        &self,
        user: UserScope,
        id_account: u64,
        id_transaction: u64,
        key: &str,
        value: &str,
        call: &CallOptions,
    ) -> Result<ApiResponse<TransactionInformationsList>, ApiError> {
        let mut req = RequestBuilder::new(&INFORMATIONS_PUT);
        req.set("id_user", user)?;
        req.set("id_account", id_account)?;
        req.set("id_transaction", id_transaction)?;
        req.set("key", key)?;
        req.set("value", value)?;
        call_api::<JsonFormat<TransactionInformationsList>>(
            self.transport.as_ref(),
            req.build()?,
            call,
        )
        .await
    }

    /// Clears the annotations of a transaction.
    pub async fn delete_informations(
        &self,
        user: UserScope,
        id_account: u64,
        id_transaction: u64,
    ) -> Result<TransactionInformationsList, ApiError> {
        Ok(self
            .delete_informations_with_http_info(
                user,
                id_account,
                id_transaction,
                &CallOptions::default(),
            )
            .await?
            .data)
    }

    pub async fn delete_informations_with_http_info(
        &self,
        user: UserScope,
        id_account: u64,
        id_transaction: u64,
        call: &CallOptions,
    ) -> Result<ApiResponse<TransactionInformationsList>, ApiError> {
        let mut req = RequestBuilder::new(&INFORMATIONS_DELETE);
        req.set("id_user", user)?;
        req.set("id_account", id_account)?;
        req.set("id_transaction", id_transaction)?;
        call_api::<JsonFormat<TransactionInformationsList>>(
            self.transport.as_ref(),
            req.build()?,
            call,
        )
        .await
    }

    /// Lists the recurring clusters of an account.
    pub async fn list_clusters(
        &self,
        user: UserScope,
        id_account: u64,
    ) -> Result<ClustersList, ApiError> {
        Ok(self
            .list_clusters_with_http_info(user, id_account, &CallOptions::default())
            .await?
            .data)
    }

    pub async fn list_clusters_with_http_info(
        &self,
        user: UserScope,
        id_account: u64,
        call: &CallOptions,
    ) -> Result<ApiResponse<ClustersList>, ApiError> {
        let mut req = RequestBuilder::new(&CLUSTERS_LIST);
        req.set("id_user", user)?;
        req.set("id_account", id_account)?;
        call_api::<JsonFormat<ClustersList>>(self.transport.as_ref(), req.build()?, call).await
    }

    /// Declares a recurring cluster on an account.
    pub async fn create_cluster(
        &self,
        user: UserScope,
        id_account: u64,
        mean_amount: f64,
        wording: &str,
        opts: &ClusterCreateOptions,
    ) -> Result<TransactionsCluster, ApiError> {
        Ok(self
            .create_cluster_with_http_info(
                user,
                id_account,
                mean_amount,
                wording,
                opts,
                &CallOptions::default(),
            )
            .await?
            .data)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_cluster_with_http_info(
        &self,
        user: UserScope,
        id_account: u64,
        mean_amount: f64,
        wording: &str,
        opts: &ClusterCreateOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<TransactionsCluster>, ApiError> {
        let mut req = RequestBuilder::new(&CLUSTER_CREATE);
        req.set("id_user", user)?;
        req.set("id_account", id_account)?;
        req.set("mean_amount", mean_amount)?;
        req.set("wording", wording)?;
        opts.apply(&mut req)?;
        call_api::<JsonFormat<TransactionsCluster>>(self.transport.as_ref(), req.build()?, call)
            .await
    }

    /// Updates one recurring cluster.
    pub async fn update_cluster(
        &self,
        user: UserScope,
        id_account: u64,
        id_transactionscluster: u64,
        opts: &ClusterUpdateOptions,
    ) -> Result<TransactionsCluster, ApiError> {
        Ok(self
            .update_cluster_with_http_info(
                user,
                id_account,
                id_transactionscluster,
                opts,
                &CallOptions::default(),
            )
            .await?
            .data)
    }

    pub async fn update_cluster_with_http_info(
        &self,
        user: UserScope,
        id_account: u64,
        id_transactionscluster: u64,
        opts: &ClusterUpdateOptions,
        call: &CallOptions,
    ) -> Result<ApiResponse<TransactionsCluster>, ApiError> {
        let mut req = RequestBuilder::new(&CLUSTER_UPDATE);
        req.set("id_user", user)?;
        req.set("id_account", id_account)?;
        req.set("id_transactionscluster", id_transactionscluster)?;
        opts.apply(&mut req)?;
        call_api::<JsonFormat<TransactionsCluster>>(self.transport.as_ref(), req.build()?, call)
            .await
    }

    /// Deletes one recurring cluster.
    pub async fn delete_cluster(
        &self,
        user: UserScope,
        id_account: u64,
        id_transactionscluster: u64,
    ) -> Result<TransactionsCluster, ApiError> {
        Ok(self
            .delete_cluster_with_http_info(
                user,
                id_account,
                id_transactionscluster,
                &CallOptions::default(),
            )
            .await?
            .data)
    }

    pub async fn delete_cluster_with_http_info(
        &self,
        user: UserScope,
        id_account: u64,
        id_transactionscluster: u64,
        call: &CallOptions,
    ) -> Result<ApiResponse<TransactionsCluster>, ApiError> {
        let mut req = RequestBuilder::new(&CLUSTER_DELETE);
        req.set("id_user", user)?;
        req.set("id_account", id_account)?;
        req.set("id_transactionscluster", id_transactionscluster)?;
        call_api::<JsonFormat<TransactionsCluster>>(self.transport.as_ref(), req.build()?, call)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::testing::RecordingTransport;

    const TRANSACTION_BODY: &str =
        r#"{"id": 309, "id_account": 17, "value": -23.5, "wording": "Monoprix"}"#;
    const LIST_BODY: &str = r#"{"transactions": [], "total": 0}"#;

    #[tokio::test]
    async fn list_forwards_date_range_only() {
        let transport = Arc::new(RecordingTransport::with_json(LIST_BODY));
        let api = TransactionsApi::new(transport.clone());

        let opts = TransactionsListOptions {
            min_date: Some("2024-01-01".to_string()),
            max_date: Some("2024-01-31".to_string()),
            ..Default::default()
        };
        api.list(UserScope::Me, 17, &opts).await.unwrap();

        let plan = transport.last_plan();
        assert_eq!(plan.method, HttpMethod::Get);
        assert_eq!(plan.path, "/users/me/accounts/17/transactions");
        assert_eq!(
            plan.query,
            vec![
                ("min_date", "2024-01-01".to_string()),
                ("max_date", "2024-01-31".to_string()),
            ]
        );
        assert!(plan.form.is_empty());
    }

    #[tokio::test]
    async fn default_options_produce_no_query() {
        let transport = Arc::new(RecordingTransport::with_json(LIST_BODY));
        let api = TransactionsApi::new(transport.clone());

        api.list(UserScope::Me, 17, &TransactionsListOptions::default())
            .await
            .unwrap();

        let plan = transport.last_plan();
        assert!(plan.query.is_empty());
    }

    #[tokio::test]
    async fn convenience_and_full_forms_send_identical_requests() {
        let transport = Arc::new(RecordingTransport::with_json(LIST_BODY));
        let api = TransactionsApi::new(transport.clone());

        let opts = TransactionsListOptions {
            limit: Some(50),
            income: Some(true),
            ..Default::default()
        };
        api.list(UserScope::Id(12), 17, &opts).await.unwrap();
        let data_only = transport.last_plan();

        let full = api
            .list_with_http_info(UserScope::Id(12), 17, &opts, &CallOptions::default())
            .await
            .unwrap();
        let with_info = transport.last_plan();

        assert_eq!(data_only.method, with_info.method);
        assert_eq!(data_only.path, with_info.path);
        assert_eq!(data_only.query, with_info.query);
        assert_eq!(data_only.form, with_info.form);
        assert_eq!(full.status, 200);
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn create_routes_required_fields_to_form() {
        let transport = Arc::new(RecordingTransport::with_json(TRANSACTION_BODY));
        let api = TransactionsApi::new(transport.clone());

        api.create(
            UserScope::Me,
            17,
            "CB MONOPRIX",
            -23.5,
            "2024-01-12",
            &TransactionCreateOptions::default(),
        )
        .await
        .unwrap();

        let plan = transport.last_plan();
        assert_eq!(plan.method, HttpMethod::Post);
        assert_eq!(plan.path, "/users/me/accounts/17/transactions");
        assert_eq!(
            plan.form,
            vec![
                ("original_wording", "CB MONOPRIX".to_string()),
                ("value", "-23.5".to_string()),
                ("date", "2024-01-12".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn create_requires_original_wording() {
        let transport = Arc::new(RecordingTransport::with_json(TRANSACTION_BODY));
        let api = TransactionsApi::new(transport.clone());

        let err = api
            .create(
                UserScope::Me,
                17,
                "",
                -23.5,
                "2024-01-12",
                &TransactionCreateOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Param(ParamError::Missing {
                parameter: "original_wording",
                ..
            })
        ));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn information_key_value_land_in_form() {
        let transport = Arc::new(RecordingTransport::with_json(r#"{"informations": []}"#));
        let api = TransactionsApi::new(transport.clone());

        api.set_information(UserScope::Me, 17, 309, "note", "shared")
            .await
            .unwrap();

        let plan = transport.last_plan();
        assert_eq!(plan.method, HttpMethod::Put);
        assert_eq!(
            plan.path,
            "/users/me/accounts/17/transactions/309/informations"
        );
        assert_eq!(
            plan.form,
            vec![
                ("key", "note".to_string()),
                ("value", "shared".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn cluster_create_mixes_required_and_optional_fields() {
        let transport = Arc::new(RecordingTransport::with_json(
            r#"{"id": 4, "mean_amount": -42.0}"#,
        ));
        let api = TransactionsApi::new(transport.clone());

        let opts = ClusterCreateOptions {
            next_date: Some("2024-02-15".to_string()),
            ..Default::default()
        };
        api.create_cluster(UserScope::Me, 17, -42.0, "Netflix", &opts)
            .await
            .unwrap();

        let plan = transport.last_plan();
        assert_eq!(plan.path, "/users/me/accounts/17/transactionsclusters");
        assert_eq!(
            plan.form,
            vec![
                ("mean_amount", "-42".to_string()),
                ("wording", "Netflix".to_string()),
                ("next_date", "2024-02-15".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn cluster_delete_substitutes_every_segment() {
        let transport = Arc::new(RecordingTransport::with_json(r#"{"id": 4}"#));
        let api = TransactionsApi::new(transport.clone());

        api.delete_cluster(UserScope::Id(12), 17, 4).await.unwrap();

        let plan = transport.last_plan();
        assert_eq!(plan.method, HttpMethod::Delete);
        assert_eq!(plan.path, "/users/12/accounts/17/transactionsclusters/4");
    }
}
