use super::{AggregatedMetrics, FirstPullRequest};
use crate::facts::{Event, PullRequestItem, RawResourceSet, Repository};
use chrono::{DateTime, Datelike, Utc};
use std::collections::HashMap;

/// How many languages are reported
pub const TOP_LANGUAGE_COUNT: usize = 3;

/// Reduce a snapshot to its summary metrics.
///
/// `now` only feeds the account age, so the same snapshot and instant always produce the same
/// metrics.
#[must_use]
pub fn aggregate(raw: &RawResourceSet, now: DateTime<Utc>) -> AggregatedMetrics {
    AggregatedMetrics {
        account_age: account_age(raw.user.created_at, now),
        total_repos: raw.repositories.len() as u64,
        total_stars: total_stars(&raw.repositories),
        top_languages: top_languages(&raw.repositories, TOP_LANGUAGE_COUNT),
        total_issues_created: raw.issue_total,
        total_prs_created: raw.pull_requests.len() as u64,
        total_commits: total_commits(&raw.events),
        first_pr: raw.pull_requests.first().map(first_pull_request),
    }
}

/// Difference between the calendar years of `now` and `created_at`.
///
/// Only the year components are compared, so an account created on Dec 31st is one year old
/// the next day. A creation date in the future counts as zero.
#[must_use]
pub fn account_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    u32::try_from(now.year() - created_at.year()).unwrap_or(0)
}

#[must_use]
pub fn total_stars(repositories: &[Repository]) -> u64 {
    repositories.iter().map(|r| r.stargazers_count).sum()
}

/// The most common repository languages, ties broken by first appearance.
#[must_use]
pub fn top_languages(repositories: &[Repository], limit: usize) -> Vec<String> {
    let mut counts: Vec<(&str, u64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for language in repositories.iter().filter_map(|r| r.language.as_deref()) {
        match index.get(language) {
            Some(&i) => counts[i].1 += 1,
            None => {
                let _ = index.insert(language, counts.len());
                counts.push((language, 1));
            }
        }
    }

    // stable, so equal counts keep first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts.into_iter().take(limit).map(|(language, _)| language.to_string()).collect()
}

/// Commits carried by push events; other events and pushes without a commit list add nothing.
#[must_use]
pub fn total_commits(events: &[Event]) -> u64 {
    events
        .iter()
        .filter(|e| e.is_push())
        .map(|e| e.payload.commits.as_ref().map_or(0, Vec::len) as u64)
        .sum()
}

#[must_use]
pub fn first_pull_request(pr: &PullRequestItem) -> FirstPullRequest {
    FirstPullRequest {
        title: pr.title.clone(),
        url: pr.html_url.clone(),
        repo_name: repo_name_from_url(&pr.repository_url).to_string(),
        state: pr.state.clone(),
        created_at: pr.created_at,
    }
}

/// Last path segment of a repository URL, e.g. `rust` for `https://api.github.com/repos/rust-lang/rust`.
#[must_use]
pub fn repo_name_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
