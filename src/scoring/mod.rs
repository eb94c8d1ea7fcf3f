//! Turning metrics into a level and a tier
//!
//! Scoring happens in three steps. A weighted sum of the activity metrics, penalized by account
//! age, yields a continuous base value. The base value is mapped through an ordered table of
//! [`Band`]s, each rescaling its input range linearly and capping the floored result, which
//! produces a saturating level in `0..=100`. Finally the level is bucketed into a [`Tier`].

mod band;
mod score;
mod tier;

pub use band::{BANDS, Band, MAX_LEVEL, band_for, level_for};
pub use score::{ACCOUNT_AGE_PENALTY, COMMIT_WEIGHT, ISSUE_WEIGHT, PR_WEIGHT, STAR_WEIGHT, ScoreResult, base_value, score};
pub use tier::Tier;
