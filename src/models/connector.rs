use serde::{Deserialize, Serialize};

/// A supported bank or data-provider integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    pub id: u64,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub hidden: Option<bool>,
    pub charged: Option<bool>,
    pub code: Option<String>,
    pub beta: Option<bool>,
    pub color: Option<String>,
    pub sync_frequency: Option<f64>,
    pub months_to_fetch: Option<u32>,
    pub auth_mechanism: Option<String>,
    /// Credential fields, inlined when `expand=fields` is requested.
    pub fields: Option<Vec<ConnectorField>>,
}

/// One credential field a connector prompts for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorField {
    pub name: Option<String>,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    pub required: Option<bool>,
    pub regex: Option<String>,
}

/// A logo asset attached to a connector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorLogo {
    pub id: u64,
    pub id_connector: Option<u64>,
    pub id_file: Option<u64>,
    #[serde(rename = "type")]
    pub logo_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BanksList {
    #[serde(default)]
    pub banks: Vec<Connector>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorsList {
    #[serde(default)]
    pub connectors: Vec<Connector>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogosList {
    #[serde(default)]
    pub logos: Vec<ConnectorLogo>,
    pub total: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_bank_list_envelope() {
        let body = r#"{
            "banks": [
                {"id": 3, "name": "Connecteur de test", "slug": "EXA", "beta": false}
            ],
            "total": 1
        }"#;
        let list: BanksList = serde_json::from_str(body).unwrap();
        assert_eq!(list.total, Some(1));
        assert_eq!(list.banks[0].id, 3);
        assert_eq!(list.banks[0].slug.as_deref(), Some("EXA"));
        assert!(list.banks[0].fields.is_none());
    }

    #[test]
    fn decodes_expanded_fields() {
        let body = r#"{
            "id": 3,
            "fields": [{"name": "login", "type": "text", "required": true}]
        }"#;
        let connector: Connector = serde_json::from_str(body).unwrap();
        let fields = connector.fields.unwrap();
        assert_eq!(fields[0].field_type.as_deref(), Some("text"));
        assert_eq!(fields[0].required, Some(true));
    }

    #[test]
    fn missing_list_defaults_empty() {
        let list: LogosList = serde_json::from_str("{}").unwrap();
        assert!(list.logos.is_empty());
        assert_eq!(list.total, None);
    }
}
