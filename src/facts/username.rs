use crate::Result;
use core::fmt::{Display, Formatter};
use ohno::bail;

/// A GitHub login, the sole key used to look up a developer profile.
///
/// The value is kept exactly as given since the upstream API decides how to match it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Wrap a login, rejecting an empty or whitespace-only value.
    pub fn new(login: impl Into<String>) -> Result<Self> {
        let login = login.into();
        if login.trim().is_empty() {
            bail!("a username is required");
        }

        Ok(Self(login))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Username {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
