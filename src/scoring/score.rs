use super::{Tier, level_for};
use crate::metrics::AggregatedMetrics;
use serde::{Deserialize, Serialize};

pub const STAR_WEIGHT: f64 = 0.03;
pub const ISSUE_WEIGHT: f64 = 0.15;
pub const PR_WEIGHT: f64 = 0.35;
pub const COMMIT_WEIGHT: f64 = 0.08;

/// Subtracted per year of account age
pub const ACCOUNT_AGE_PENALTY: f64 = 1.2;

/// Level and tier computed for a set of metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub level: u8,
    pub tier: Tier,
}

/// Weighted sum of the activity metrics, before it is mapped onto the level curve.
///
/// Old accounts with little activity produce a negative value.
#[must_use]
#[expect(clippy::cast_precision_loss, reason = "counts far beyond 2^52 are not realistic")]
#[expect(clippy::suboptimal_flops, reason = "levels are floored, so the sum must round term by term from left to right")]
pub fn base_value(metrics: &AggregatedMetrics) -> f64 {
    metrics.total_stars as f64 * STAR_WEIGHT
        + metrics.total_issues_created as f64 * ISSUE_WEIGHT
        + metrics.total_prs_created as f64 * PR_WEIGHT
        + metrics.total_commits as f64 * COMMIT_WEIGHT
        - f64::from(metrics.account_age) * ACCOUNT_AGE_PENALTY
}

/// Compute the level and tier for `metrics`.
///
/// This is a pure function: the level always lies in `0..=100` and grows with every activity
/// metric.
#[must_use]
pub fn score(metrics: &AggregatedMetrics) -> ScoreResult {
    let level = level_for(base_value(metrics));

    ScoreResult {
        level,
        tier: Tier::from_level(level),
    }
}
