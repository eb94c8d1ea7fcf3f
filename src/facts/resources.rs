//! Wire types for the GitHub REST resources a profile is built from
//!
//! Only the fields the aggregation needs are modelled; everything else in the payloads is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The event type whose payload carries pushed commits.
pub const PUSH_EVENT: &str = "PushEvent";

/// Public profile of a user (`GET /users/{username}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub avatar_url: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One entry of `GET /users/{username}/repos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub stargazers_count: u64,
    pub language: Option<String>,
}

/// One entry of `GET /users/{username}/events`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: EventPayload,
}

impl Event {
    #[must_use]
    pub fn is_push(&self) -> bool {
        self.kind == PUSH_EVENT
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPayload {
    /// Present on push events only
    #[serde(default)]
    pub commits: Option<Vec<PushedCommit>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushedCommit {
    #[serde(default)]
    pub sha: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope of `GET /search/issues`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults<T> {
    pub total_count: u64,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// A pull request as returned by the issue search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestItem {
    pub title: String,
    pub html_url: String,
    /// API URL of the repository the pull request was opened against
    pub repository_url: String,
    pub state: String,
    pub created_at: DateTime<Utc>,
}
