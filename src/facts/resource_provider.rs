use super::{Event, PullRequestItem, Repository, User};
use core::fmt::{Display, Formatter};
use ohno::app_err;

/// Why a request to the resource provider did not produce data.
#[derive(Debug)]
pub enum FetchError {
    /// The requested resource does not exist (HTTP 404).
    NotFound,

    /// Any other failure: transport, unexpected status, rate limiting or a malformed payload.
    Failed(ohno::AppError),
}

pub type FetchResult<T> = Result<T, FetchError>;

impl FetchError {
    /// Demote a `NotFound` into a plain failure.
    ///
    /// Only the user lookup is allowed to report a missing user; a 404 anywhere else is an
    /// upstream inconsistency.
    #[must_use]
    pub fn into_upstream(self, resource: &str) -> Self {
        match self {
            Self::NotFound => Self::Failed(app_err!("{resource} not found")),
            failed @ Self::Failed(_) => failed,
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "resource not found"),
            Self::Failed(e) => write!(f, "{e:#}"),
        }
    }
}

impl From<ohno::AppError> for FetchError {
    fn from(e: ohno::AppError) -> Self {
        Self::Failed(e)
    }
}

/// Source of the raw GitHub resources a profile is built from.
///
/// The HTTP implementation is [`super::Client`]; tests substitute in-memory providers.
pub trait ResourceProvider {
    /// Fetch the public profile of a user.
    fn get_user(&self, username: &str) -> impl Future<Output = FetchResult<User>> + Send;

    /// Fetch one page (1-based) of the user's public repositories.
    fn list_repos(&self, username: &str, page: u32, per_page: u32) -> impl Future<Output = FetchResult<Vec<Repository>>> + Send;

    /// Fetch the most recent public events of the user.
    fn list_events(&self, username: &str, per_page: u32) -> impl Future<Output = FetchResult<Vec<Event>>> + Send;

    /// Run an issue search and return only its total match count.
    fn search_issues(&self, query: &str) -> impl Future<Output = FetchResult<u64>> + Send;

    /// Fetch one page (1-based) of a pull request search, oldest first.
    fn search_prs(&self, query: &str, page: u32, per_page: u32) -> impl Future<Output = FetchResult<Vec<PullRequestItem>>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_upstream_demotes_not_found() {
        let err = FetchError::NotFound.into_upstream("repositories for 'octocat'");
        match err {
            FetchError::Failed(e) => assert!(format!("{e:#}").contains("repositories for 'octocat' not found")),
            FetchError::NotFound => panic!("expected Failed"),
        }
    }

    #[test]
    fn test_into_upstream_keeps_failures() {
        let err = FetchError::Failed(app_err!("boom")).into_upstream("events");
        assert!(matches!(err, FetchError::Failed(e) if format!("{e:#}").contains("boom")));
    }

    #[test]
    fn test_display() {
        assert_eq!(FetchError::NotFound.to_string(), "resource not found");
        assert!(FetchError::from(app_err!("timed out")).to_string().contains("timed out"));
    }
}
