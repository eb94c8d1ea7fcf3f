use crate::facts::User;
use crate::metrics::AggregatedMetrics;
use crate::scoring::ScoreResult;
use serde::Serialize;

/// Shown when the user has not set a display name
pub const DEFAULT_NAME: &str = "No name";

/// Shown when the user has not written a bio
pub const DEFAULT_BIO: &str = "No bio available";

/// Everything known about a developer, ready for rendering.
///
/// Serializes to a flat camelCase object: the identity fields, every aggregated metric, the
/// level and tier, and the contributions chart link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub username: String,
    pub avatar: String,
    pub name: String,
    pub bio: String,
    #[serde(flatten)]
    pub metrics: AggregatedMetrics,
    #[serde(flatten)]
    pub score: ScoreResult,
    pub contributions_chart: String,
}

impl Profile {
    /// Combine the user's identity with their computed metrics and score.
    ///
    /// The chart link uses the username as it was queried, the remaining identity fields come
    /// from the fetched profile.
    #[must_use]
    pub fn new(queried: &str, user: &User, metrics: AggregatedMetrics, score: ScoreResult) -> Self {
        Self {
            username: user.login.clone(),
            avatar: user.avatar_url.clone(),
            name: non_empty_or(user.name.as_deref(), DEFAULT_NAME),
            bio: non_empty_or(user.bio.as_deref(), DEFAULT_BIO),
            metrics,
            score,
            contributions_chart: contributions_chart_url(queried),
        }
    }
}

#[must_use]
pub fn contributions_chart_url(username: &str) -> String {
    format!("https://github.com/users/{username}/contributions")
}

fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or(fallback).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::FirstPullRequest;
    use crate::scoring::Tier;
    use chrono::{TimeZone, Utc};

    fn user(name: Option<&str>, bio: Option<&str>) -> User {
        User {
            login: "octocat".to_string(),
            avatar_url: "https://avatars.githubusercontent.com/u/583231".to_string(),
            name: name.map(ToString::to_string),
            bio: bio.map(ToString::to_string),
            created_at: Utc.with_ymd_and_hms(2011, 1, 25, 18, 44, 36).unwrap(),
        }
    }

    fn score() -> ScoreResult {
        ScoreResult {
            level: 42,
            tier: Tier::Veteran,
        }
    }

    #[test]
    fn test_defaults_for_missing_identity() {
        let profile = Profile::new("octocat", &user(None, Some("")), AggregatedMetrics::default(), score());
        assert_eq!(profile.name, DEFAULT_NAME);
        assert_eq!(profile.bio, DEFAULT_BIO);
    }

    #[test]
    fn test_identity_is_passed_through() {
        let profile = Profile::new("octocat", &user(Some("The Octocat"), Some("Mascot")), AggregatedMetrics::default(), score());
        assert_eq!(profile.username, "octocat");
        assert_eq!(profile.name, "The Octocat");
        assert_eq!(profile.bio, "Mascot");
        assert_eq!(profile.contributions_chart, "https://github.com/users/octocat/contributions");
    }

    #[test]
    fn test_serialized_shape() {
        let metrics = AggregatedMetrics {
            account_age: 13,
            total_repos: 8,
            total_stars: 120,
            top_languages: vec!["Ruby".to_string(), "C".to_string()],
            total_issues_created: 4,
            total_prs_created: 6,
            total_commits: 11,
            first_pr: Some(FirstPullRequest {
                title: "Fix typo".to_string(),
                url: "https://github.com/git/git/pull/1".to_string(),
                repo_name: "git".to_string(),
                state: "closed".to_string(),
                created_at: Utc.with_ymd_and_hms(2012, 3, 4, 5, 6, 7).unwrap(),
            }),
        };

        let profile = Profile::new("octocat", &user(None, None), metrics, score());
        let value = serde_json::to_value(&profile).unwrap();

        assert_eq!(value["username"], "octocat");
        assert_eq!(value["avatar"], "https://avatars.githubusercontent.com/u/583231");
        assert_eq!(value["name"], "No name");
        assert_eq!(value["bio"], "No bio available");
        assert_eq!(value["accountAge"], 13);
        assert_eq!(value["totalRepos"], 8);
        assert_eq!(value["totalStars"], 120);
        assert_eq!(value["topLanguages"], serde_json::json!(["Ruby", "C"]));
        assert_eq!(value["totalIssuesCreated"], 4);
        assert_eq!(value["totalPRsCreated"], 6);
        assert_eq!(value["totalCommits"], 11);
        assert_eq!(value["firstPR"]["repoName"], "git");
        assert_eq!(value["firstPR"]["createdAt"], "2012-03-04T05:06:07Z");
        assert_eq!(value["level"], 42);
        assert_eq!(value["tier"], "Veteran");
        assert_eq!(value["contributionsChart"], "https://github.com/users/octocat/contributions");
    }

    #[test]
    fn test_missing_first_pr_is_null() {
        let profile = Profile::new("octocat", &user(None, None), AggregatedMetrics::default(), score());
        let value = serde_json::to_value(&profile).unwrap();
        assert!(value["firstPR"].is_null());
    }
}
