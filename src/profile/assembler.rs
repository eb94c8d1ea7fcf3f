use super::{Profile, ProfileError};
use crate::facts::{Collector, FetchError, ResourceProvider, Username};
use crate::metrics::aggregate;
use crate::scoring::score;
use chrono::{DateTime, Utc};

const LOG_TARGET: &str = "   profile";

/// Build the full profile for `username`.
///
/// Collects the raw resources, aggregates them with `now` as the reference instant and scores
/// the result. Nothing is retried and nothing partial is returned: a missing user yields
/// [`ProfileError::NotFound`], every other failure [`ProfileError::Upstream`].
pub async fn get_profile<P: ResourceProvider>(
    collector: &Collector<P>,
    username: &Username,
    now: DateTime<Utc>,
) -> Result<Profile, ProfileError> {
    log::info!(target: LOG_TARGET, "Building profile for '{username}'");

    let raw = collector.collect(username).await.map_err(|e| match e {
        FetchError::NotFound => ProfileError::NotFound {
            username: username.to_string(),
        },
        FetchError::Failed(e) => ProfileError::Upstream(e),
    })?;

    let metrics = aggregate(&raw, now);
    let score = score(&metrics);

    log::info!(
        target: LOG_TARGET,
        "Profile for '{username}' is level {} ({})",
        score.level,
        score.tier
    );

    Ok(Profile::new(username.as_str(), &raw.user, metrics, score))
}
