use std::fmt;
use std::str::FromStr;

/// Path value for the `id_user` segment.
///
/// The service resolves the literals `me` (the user owning the bearer token)
/// and `all` (every user the token can see) in addition to numeric ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserScope {
    /// The user the bearer token belongs to.
    Me,
    /// Every user visible to the bearer token.
    All,
    /// A specific user id.
    Id(u64),
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseUserScopeError(String);

impl fmt::Display for ParseUserScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid user scope: '{}' (expected 'me', 'all' or a numeric id)", self.0)
    }
}

impl std::error::Error for ParseUserScopeError {}

impl fmt::Display for UserScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Me => write!(f, "me"),
            Self::All => write!(f, "all"),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

impl From<u64> for UserScope {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl FromStr for UserScope {
    type Err = ParseUserScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "me" => Ok(Self::Me),
            "all" => Ok(Self::All),
            other => other
                .parse::<u64>()
                .map(Self::Id)
                .map_err(|_| ParseUserScopeError(other.to_string())),
        }
    }
}
