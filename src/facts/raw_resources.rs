use super::{Event, PullRequestItem, Repository, User};

/// Everything fetched for one user in a single profile request.
///
/// A snapshot is consumed by aggregation and never kept across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResourceSet {
    pub user: User,
    pub repositories: Vec<Repository>,
    /// Most recent public events, newest first
    pub events: Vec<Event>,
    /// Total match count reported by the issue search
    pub issue_total: u64,
    /// Every pull request authored by the user, oldest first
    pub pull_requests: Vec<PullRequestItem>,
}
