//! Assembly of the developer profile
//!
//! [`get_profile`] is the entry point of the library. It runs the whole pipeline for one
//! username: collection through a [`crate::facts::Collector`], aggregation into
//! [`crate::metrics::AggregatedMetrics`] and scoring into a [`crate::scoring::ScoreResult`].
//! The outcome is a flat [`Profile`] or a [`ProfileError`] telling a missing user apart from
//! any other failure.

mod assembler;
mod developer_profile;
mod profile_error;

pub use assembler::get_profile;
pub use developer_profile::{DEFAULT_BIO, DEFAULT_NAME, Profile, contributions_chart_url};
pub use profile_error::{NOT_FOUND_ASSET, NOT_FOUND_MESSAGE, ProfileError};
