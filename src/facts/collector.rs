use super::{FetchResult, Paginator, RawResourceSet, ResourceProvider, Username};

const LOG_TARGET: &str = " collector";

/// Number of recent events requested; the events endpoint is not paginated here.
pub const EVENTS_PAGE_SIZE: u32 = 100;

/// Gathers the raw resources for one user from a [`ResourceProvider`].
///
/// The user profile, repository list, recent events and issue count are fetched concurrently.
/// All four settle before any failure is reported, and the user lookup's outcome takes precedence.
/// The pull request list is fetched afterwards, only when the first four succeeded.
#[derive(Debug, Clone)]
pub struct Collector<P> {
    provider: P,
    paginator: Paginator,
}

impl<P: ResourceProvider> Collector<P> {
    #[must_use]
    pub const fn new(provider: P, paginator: Paginator) -> Self {
        Self { provider, paginator }
    }

    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Fetch a complete snapshot for `username`.
    ///
    /// Only the user lookup may fail with [`super::FetchError::NotFound`]; a 404 from any other
    /// resource is reported as a failure since the user is known to exist at that point.
    pub async fn collect(&self, username: &Username) -> FetchResult<RawResourceSet> {
        let login = username.as_str();
        let issues = issue_query(login);

        log::debug!(target: LOG_TARGET, "Fetching profile, repositories, events and issue count for '{username}'");

        let (user, repositories, events, issue_total) = tokio::join!(
            self.provider.get_user(login),
            upstream(format!("repositories of '{username}'"), self.collect_repos(login)),
            upstream(
                format!("events of '{username}'"),
                self.provider.list_events(login, EVENTS_PAGE_SIZE)
            ),
            upstream(
                format!("issue search for '{username}'"),
                self.provider.search_issues(&issues)
            ),
        );

        // the user lookup decides first, so a missing user is never masked by a sibling's failure
        let user = user?;
        let repositories = repositories?;
        let events = events?;
        let issue_total = issue_total?;

        log::debug!(target: LOG_TARGET, "Fetching pull requests for '{username}'");

        let pull_requests = upstream(format!("pull request search for '{username}'"), self.collect_prs(login)).await?;

        log::debug!(
            target: LOG_TARGET,
            "Collected {} repositories, {} events and {} pull requests for '{username}'",
            repositories.len(),
            events.len(),
            pull_requests.len()
        );

        Ok(RawResourceSet {
            user,
            repositories,
            events,
            issue_total,
            pull_requests,
        })
    }

    async fn collect_repos(&self, login: &str) -> FetchResult<Vec<super::Repository>> {
        self.paginator
            .collect("repositories", |page, per_page| self.provider.list_repos(login, page, per_page))
            .await
    }

    async fn collect_prs(&self, login: &str) -> FetchResult<Vec<super::PullRequestItem>> {
        let query = pr_query(login);
        self.paginator
            .collect("pull requests", |page, per_page| self.provider.search_prs(&query, page, per_page))
            .await
    }
}

async fn upstream<T>(resource: String, fetch: impl Future<Output = FetchResult<T>>) -> FetchResult<T> {
    fetch.await.map_err(|e| e.into_upstream(&resource))
}

/// Search query matching the issues opened by `login`
#[must_use]
pub fn issue_query(login: &str) -> String {
    format!("author:{login} type:issue")
}

/// Search query matching the pull requests opened by `login`
#[must_use]
pub fn pr_query(login: &str) -> String {
    format!("author:{login} type:pr")
}
