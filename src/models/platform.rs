use serde::{Deserialize, Serialize};

/// One synchronization/operational log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    pub id: u64,
    pub id_user: Option<u64>,
    pub id_connection: Option<u64>,
    pub id_connector: Option<u64>,
    pub timestamp: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogsList {
    #[serde(default)]
    pub logs: Vec<Log>,
    pub total: Option<u64>,
}

/// Billing counters. The service evolves these freely, so the metrics are
/// kept as an open map rather than a fixed field set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoicing {
    #[serde(flatten)]
    pub metrics: serde_json::Map<String, serde_json::Value>,
}
