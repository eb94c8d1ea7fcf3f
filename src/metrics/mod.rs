//! Aggregation of raw GitHub resources into profile metrics
//!
//! [`aggregate`] is a pure function of a [`crate::facts::RawResourceSet`] and the current
//! instant. It derives star and repository totals, the most used languages, the number of
//! recently pushed commits, the issue and pull request counts, the account age in calendar
//! years and the details of the oldest pull request.

mod aggregated_metrics;
mod aggregator;

pub use aggregated_metrics::{AggregatedMetrics, FirstPullRequest};
pub use aggregator::{
    TOP_LANGUAGE_COUNT, account_age, aggregate, first_pull_request, repo_name_from_url, top_languages, total_commits, total_stars,
};
