use serde::{Deserialize, Serialize};

use super::Transaction;

/// A bank account under a connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    pub id_connection: Option<u64>,
    pub id_user: Option<u64>,
    pub id_parent: Option<u64>,
    pub name: Option<String>,
    pub number: Option<String>,
    pub iban: Option<String>,
    pub balance: Option<f64>,
    pub coming: Option<f64>,
    pub display: Option<bool>,
    pub bookmarked: Option<bool>,
    /// Deletion timestamp; the service soft-deletes accounts.
    pub deleted: Option<String>,
    /// Disabling timestamp.
    pub disabled: Option<String>,
    pub usage: Option<String>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    pub last_update: Option<String>,
    /// Inlined when `expand=transactions` is requested.
    pub transactions: Option<Vec<Transaction>>,
}

/// A kind of bank account (checking, savings, market...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountType {
    pub id: u64,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub is_invest: Option<bool>,
    pub weboob_type_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountsList {
    #[serde(default)]
    pub accounts: Vec<Account>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountTypesList {
    #[serde(default, rename = "accounttypes")]
    pub account_types: Vec<AccountType>,
    pub total: Option<u64>,
}
