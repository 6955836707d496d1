use serde::{Deserialize, Serialize};

use super::Account;

/// An end-user's authenticated link to one connector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: u64,
    pub id_user: Option<u64>,
    pub id_connector: Option<u64>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_message: Option<String>,
    pub active: Option<bool>,
    pub created: Option<String>,
    pub last_update: Option<String>,
    pub next_try: Option<String>,
    /// Inlined when `expand=accounts` is requested.
    pub accounts: Option<Vec<Account>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionsList {
    #[serde(default)]
    pub connections: Vec<Connection>,
    pub total: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_connection_with_error_state() {
        let body = r#"{
            "id": 83,
            "id_user": 12,
            "id_connector": 3,
            "state": "wrongpass",
            "error": "wrongpass",
            "error_message": "Wrong password",
            "active": true
        }"#;
        let connection: Connection = serde_json::from_str(body).unwrap();
        assert_eq!(connection.id, 83);
        assert_eq!(connection.error.as_deref(), Some("wrongpass"));
        assert!(connection.accounts.is_none());
    }

    #[test]
    fn decodes_expanded_accounts() {
        let body = r#"{
            "id": 83,
            "accounts": [{"id": 17, "name": "Compte courant", "balance": 502.23}]
        }"#;
        let connection: Connection = serde_json::from_str(body).unwrap();
        let accounts = connection.accounts.unwrap();
        assert_eq!(accounts[0].id, 17);
        assert_eq!(accounts[0].balance, Some(502.23));
    }
}
