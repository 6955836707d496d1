use serde::{Deserialize, Serialize};

/// A node of the bank category taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub id_parent: Option<u64>,
    pub name: Option<String>,
    pub color: Option<String>,
    pub income: Option<bool>,
    pub refundable: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoriesList {
    #[serde(default)]
    pub categories: Vec<Category>,
    pub total: Option<u64>,
}

/// Result of the stateless categorization of one transaction triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizedTransaction {
    pub id_category: Option<u64>,
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    pub value: Option<f64>,
    pub wording: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_category() {
        let body = r#"{"id": 9998, "id_parent": 9999, "name": "Groceries", "income": false}"#;
        let category: Category = serde_json::from_str(body).unwrap();
        assert_eq!(category.id, 9998);
        assert_eq!(category.name.as_deref(), Some("Groceries"));
        assert_eq!(category.income, Some(false));
    }

    #[test]
    fn decodes_categorization_result() {
        let body = r#"{"id_category": 9998, "type": "card", "value": -23.5, "wording": "CB MONOPRIX"}"#;
        let result: CategorizedTransaction = serde_json::from_str(body).unwrap();
        assert_eq!(result.id_category, Some(9998));
        assert_eq!(result.transaction_type.as_deref(), Some("card"));
    }
}
