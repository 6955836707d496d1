use thiserror::Error;

/// Pre-network parameter validation failures.
///
/// Both variants are raised while shaping the request, before the transport
/// is invoked, and both name the offending parameter and the endpoint.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    /// A declared-required parameter was absent or empty.
    #[error("missing required parameter `{parameter}` for endpoint `{endpoint}`")]
    Missing {
        parameter: &'static str,
        endpoint: &'static str,
    },

    /// A supplied name is not in the endpoint's declared parameter set.
    #[error("unexpected parameter `{parameter}` for endpoint `{endpoint}`")]
    Unexpected {
        parameter: String,
        endpoint: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_message_names_both() {
        let err = ParamError::Missing {
            parameter: "name",
            endpoint: "banks_categories_post",
        };
        let msg = err.to_string();
        assert!(msg.contains("`name`"));
        assert!(msg.contains("`banks_categories_post`"));
    }

    #[test]
    fn unexpected_message_names_both() {
        let err = ParamError::Unexpected {
            parameter: "limitt".to_string(),
            endpoint: "logs_get",
        };
        let msg = err.to_string();
        assert!(msg.contains("`limitt`"));
        assert!(msg.contains("`logs_get`"));
    }
}
