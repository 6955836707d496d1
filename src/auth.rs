//! Authentication schemes applied by the transport.

/// How the transport authenticates outgoing requests.
///
/// The aggregation API documents a single scheme: a bearer token carried in
/// the `Authorization` header. `None` is kept for unauthenticated test
/// transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthScheme {
    /// `Authorization: Bearer <token>`.
    #[default]
    Bearer,
    /// No authentication header.
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_bearer() {
        assert_eq!(AuthScheme::default(), AuthScheme::Bearer);
    }
}
