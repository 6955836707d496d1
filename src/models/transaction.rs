use serde::{Deserialize, Serialize};

/// A bank transaction on an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub id_account: Option<u64>,
    pub id_category: Option<u64>,
    /// Debit date.
    pub date: Option<String>,
    /// Real date of the operation, when it differs from the debit date.
    pub rdate: Option<String>,
    pub value: Option<f64>,
    pub gross_value: Option<f64>,
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    pub original_wording: Option<String>,
    pub simplified_wording: Option<String>,
    pub wording: Option<String>,
    pub comment: Option<String>,
    pub state: Option<String>,
    pub coming: Option<bool>,
    pub active: Option<bool>,
    /// Deletion timestamp; the service soft-deletes transactions.
    pub deleted: Option<String>,
    pub last_update: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsList {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub total: Option<u64>,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

/// A recurring-transaction cluster detected or declared on an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsCluster {
    pub id: u64,
    pub id_account: Option<u64>,
    pub id_category: Option<u64>,
    pub mean_amount: Option<f64>,
    pub median_increment: Option<i64>,
    pub next_date: Option<String>,
    pub wording: Option<String>,
    pub enabled: Option<bool>,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClustersList {
    #[serde(default, rename = "transactionsclusters")]
    pub clusters: Vec<TransactionsCluster>,
    pub total: Option<u64>,
}

/// One key/value annotation attached to a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInformation {
    pub id: Option<u64>,
    pub id_transaction: Option<u64>,
    pub key: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInformationsList {
    #[serde(default)]
    pub informations: Vec<TransactionInformation>,
    pub total: Option<u64>,
}
