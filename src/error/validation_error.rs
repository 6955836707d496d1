use thiserror::Error;

/// Response parsing errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The response body is not the JSON the endpoint declares.
    #[error("JSON parsing failed: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_parse_converts() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ValidationError = parse_err.into();
        assert!(matches!(err, ValidationError::JsonParse(_)));
    }
}
