use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary numbers derived from one snapshot of a user's GitHub activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedMetrics {
    /// Calendar years since the account was created
    pub account_age: u32,
    pub total_repos: u64,
    pub total_stars: u64,
    /// Up to three languages, most used first
    pub top_languages: Vec<String>,
    /// Total count reported by the issue search
    pub total_issues_created: u64,
    /// Length of the full pull request list
    #[serde(rename = "totalPRsCreated")]
    pub total_prs_created: u64,
    /// Commits pushed within the recent event window
    pub total_commits: u64,
    #[serde(rename = "firstPR")]
    pub first_pr: Option<FirstPullRequest>,
}

/// The oldest pull request authored by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstPullRequest {
    pub title: String,
    pub url: String,
    pub repo_name: String,
    pub state: String,
    pub created_at: DateTime<Utc>,
}
