//! HTTP method types for the aggregation API.

use strum::{Display, EnumIter, EnumString};

/// HTTP methods used by the aggregation API endpoints.
///
/// ## Examples
///
/// ```rust
/// use budgea_client::HttpMethod;
///
/// let method = HttpMethod::Get;
/// assert!(!method.has_body());
/// assert!(method.is_idempotent());
///
/// // Parse from string
/// let parsed: HttpMethod = "POST".parse().unwrap();
/// assert_eq!(parsed, HttpMethod::Post);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP GET - Retrieve a resource.
    Get,
    /// HTTP POST - Create a resource or trigger an action.
    Post,
    /// HTTP PUT - Replace or synchronize a resource.
    Put,
    /// HTTP DELETE - Remove a resource.
    Delete,
}

impl HttpMethod {
    /// Returns `true` if this method carries a request body on this API.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    /// Returns `true` if this method is idempotent.
    pub fn is_idempotent(&self) -> bool {
        !matches!(self, Self::Post)
    }

    /// Returns `true` if this method is safe (read-only).
    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Get)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        method.to_reqwest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_parse() {
        assert_eq!("GET".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("PUT".parse::<HttpMethod>().unwrap(), HttpMethod::Put);
        assert!("TRACE".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_has_body() {
        assert!(!HttpMethod::Get.has_body());
        assert!(HttpMethod::Post.has_body());
        assert!(HttpMethod::Put.has_body());
        assert!(!HttpMethod::Delete.has_body());
    }

    #[test]
    fn test_is_idempotent() {
        assert!(HttpMethod::Get.is_idempotent());
        assert!(!HttpMethod::Post.is_idempotent());
        assert!(HttpMethod::Put.is_idempotent());
        assert!(HttpMethod::Delete.is_idempotent());
    }

    #[test]
    fn test_enum_iteration() {
        let methods: Vec<_> = HttpMethod::iter().collect();
        assert_eq!(methods.len(), 4);
    }

    #[test]
    fn test_to_reqwest() {
        assert_eq!(HttpMethod::Get.to_reqwest(), reqwest::Method::GET);
        assert_eq!(HttpMethod::Delete.to_reqwest(), reqwest::Method::DELETE);
    }
}
