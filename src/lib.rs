#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! devlevel crate
//!
//! Computes a gamified developer profile from a GitHub user's public activity. The pipeline
//! collects the user's profile, repositories, recent events, issue count and pull requests,
//! aggregates them into summary metrics and maps those onto a level between 0 and 100 with a
//! named tier.
//!
//! # Module Organization
//!
//! - [`facts`]: Data collection from the GitHub API
//! - [`metrics`]: Aggregation of raw resources into summary metrics
//! - [`scoring`]: Level and tier computation
//! - [`profile`]: Assembly of the final profile
//! - [`reports`]: Console and JSON rendering
//! - [`commands`]: Command-line interface and orchestration

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod commands;
pub mod facts;
pub mod metrics;
pub mod profile;
pub mod reports;
pub mod scoring;

pub use crate::commands::{Host, run};
