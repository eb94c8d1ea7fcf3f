//! Raw data collection from GitHub
//!
//! This module is responsible for fetching everything a developer profile is derived from:
//! the user's public profile, their repositories, their recent public events, the number of
//! issues they opened and the full list of pull requests they authored.
//!
//! # Implementation Model
//!
//! The [`ResourceProvider`] trait is the seam to the outside world. [`Client`] implements it
//! over the GitHub REST API; tests implement it in memory. Every request either produces data or
//! a [`FetchError`], which separates a missing resource (`NotFound`) from every other failure.
//!
//! The [`Collector`] drives a provider for one [`Username`]. The four independent fetches run
//! concurrently and the pull request search runs afterwards. Repository and pull request lists
//! are walked page by page with a [`Paginator`]. The result is a [`RawResourceSet`] snapshot
//! that is handed to aggregation and then dropped.

mod client;
mod collector;
mod paginator;
mod raw_resources;
mod resource_provider;
mod resources;
mod username;

pub use client::Client;
pub use collector::{Collector, EVENTS_PAGE_SIZE, issue_query, pr_query};
pub use paginator::{DEFAULT_MAX_PAGES, PAGE_SIZE, Paginator};
pub use raw_resources::RawResourceSet;
pub use resource_provider::{FetchError, FetchResult, ResourceProvider};
pub use resources::{Event, EventPayload, PUSH_EVENT, PullRequestItem, PushedCommit, Repository, SearchResults, User};
pub use username::Username;
