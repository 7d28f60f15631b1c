//! Player identities.

use alloc::string::String;
use core::fmt;

/// Opaque token identifying one player across requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for PlayerId {
    fn from(token: String) -> Self {
        Self(token)
    }
}
