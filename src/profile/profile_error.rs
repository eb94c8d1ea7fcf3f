use core::fmt::{Display, Formatter};

/// Shown to users when a username does not exist on GitHub
pub const NOT_FOUND_MESSAGE: &str = "Oops! Looks like this username doesn't exist on GitHub. Did you type it correctly?";

/// Image shown alongside [`NOT_FOUND_MESSAGE`]
pub const NOT_FOUND_ASSET: &str = "https://github.githubassets.com/images/modules/logos_page/Octocat.png";

/// Why a profile could not be produced
#[derive(Debug)]
pub enum ProfileError {
    /// The username does not resolve to a GitHub account
    NotFound { username: String },

    /// Any other failure while talking to GitHub
    Upstream(ohno::AppError),
}

impl ProfileError {
    /// The user-facing message for a missing user, if this is one
    #[must_use]
    pub const fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { .. } => Some(NOT_FOUND_MESSAGE),
            Self::Upstream(_) => None,
        }
    }
}

impl Display for ProfileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound { username } => write!(f, "GitHub user '{username}' not found"),
            Self::Upstream(e) => write!(f, "GitHub API error: {e:#}"),
        }
    }
}

impl core::error::Error for ProfileError {}
