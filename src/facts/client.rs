//! GitHub API client
//!
//! Minimal GitHub REST client for the user, repository, event and search resources.

use super::{Event, FetchError, FetchResult, PullRequestItem, Repository, ResourceProvider, SearchResults, User};
use crate::Result;
use chrono::{DateTime, Utc};
use core::time::Duration;
use ohno::{EnrichableExt, app_err};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::{DeserializeOwned, IgnoredAny};
use url::Url;

const LOG_TARGET: &str = "    client";

/// Rate limit information from response headers
#[derive(Debug, Clone, Copy)]
pub struct RateLimitInfo {
    pub remaining: usize,
    pub reset_at: DateTime<Utc>,
}

/// GitHub API client
#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// Create a new client with an optional authentication token.
    pub fn new(token: Option<&str>, base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| app_err!("invalid API URL '{base_url}': {e}"))?;
        if base_url.cannot_be_a_base() {
            return Err(app_err!("API URL '{base_url}' cannot be used as a base URL"));
        }

        let mut headers = HeaderMap::new();
        let _ = headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        if let Some(t) = token {
            let mut auth_val = HeaderValue::from_str(&format!("Bearer {t}"))?;
            auth_val.set_sensitive(true);
            let _ = headers.insert(AUTHORIZATION, auth_val);
        }

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL for this client
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL from path segments and query parameters.
    ///
    /// Segments are percent-encoded, so user-supplied names cannot escape their path position.
    fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| app_err!("API URL '{}' cannot be used as a base URL", self.base_url))?;
            let _ = path.pop_if_empty().extend(segments);
        }

        if !query.is_empty() {
            let _ = url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    /// Make an API call and classify the result
    async fn api_call(&self, url: Url) -> FetchResult<reqwest::Response> {
        log::debug!(target: LOG_TARGET, "GET {url}");

        let resp = match self.client.get(url.clone()).send().await {
            Ok(r) => r,
            Err(e) => return Err(FetchError::Failed(ohno::AppError::from(e).enrich_with(|| format!("requesting '{url}'")))),
        };

        let rate_limit = extract_rate_limit_from_headers(resp.headers());
        if let Some(rl) = &rate_limit {
            log::debug!(target: LOG_TARGET, "{} request(s) left until {}", rl.remaining, rl.reset_at.format("%T"));
        }

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }

        // Rate limiting shows up as 403 or 429; there is no waiting, the request just fails
        if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
            let reset = rate_limit.map_or_else(|| "an unknown time".to_string(), |rl| rl.reset_at.to_rfc3339());
            log::warn!(target: LOG_TARGET, "GitHub refused '{url}' with status {status}");
            return Err(FetchError::Failed(app_err!(
                "GitHub API rate limit exceeded or access denied (status {status}) for '{url}', resets at {reset}"
            )));
        }

        let error = resp
            .error_for_status()
            .err()
            .map_or_else(|| app_err!("unexpected status {status}"), ohno::AppError::from);
        Err(FetchError::Failed(error.enrich_with(|| format!("requesting '{url}'"))))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> FetchResult<T> {
        let resp = self.api_call(url.clone()).await?;
        resp.json::<T>()
            .await
            .map_err(|e| FetchError::Failed(ohno::AppError::from(e).enrich_with(|| format!("decoding response from '{url}'"))))
    }
}

impl ResourceProvider for Client {
    async fn get_user(&self, username: &str) -> FetchResult<User> {
        let url = self.endpoint(&["users", username], &[])?;
        self.get_json(url).await
    }

    async fn list_repos(&self, username: &str, page: u32, per_page: u32) -> FetchResult<Vec<Repository>> {
        let page = page.to_string();
        let per_page = per_page.to_string();
        let url = self.endpoint(&["users", username, "repos"], &[("per_page", per_page.as_str()), ("page", page.as_str())])?;
        self.get_json(url).await
    }

    async fn list_events(&self, username: &str, per_page: u32) -> FetchResult<Vec<Event>> {
        let per_page = per_page.to_string();
        let url = self.endpoint(&["users", username, "events"], &[("per_page", per_page.as_str())])?;
        self.get_json(url).await
    }

    async fn search_issues(&self, query: &str) -> FetchResult<u64> {
        let url = self.endpoint(&["search", "issues"], &[("q", query)])?;
        let results: SearchResults<IgnoredAny> = self.get_json(url).await?;
        Ok(results.total_count)
    }

    async fn search_prs(&self, query: &str, page: u32, per_page: u32) -> FetchResult<Vec<PullRequestItem>> {
        let page = page.to_string();
        let per_page = per_page.to_string();
        let url = self.endpoint(
            &["search", "issues"],
            &[("q", query), ("sort", "created"), ("order", "asc"), ("page", page.as_str()), ("per_page", per_page.as_str())],
        )?;
        let results: SearchResults<PullRequestItem> = self.get_json(url).await?;
        Ok(results.items)
    }
}

/// Extract rate limit information from API response headers
fn extract_rate_limit_from_headers(headers: &HeaderMap) -> Option<RateLimitInfo> {
    let remaining = headers.get("x-ratelimit-remaining")?.to_str().ok()?.parse::<usize>().ok()?;

    let reset_timestamp = headers.get("x-ratelimit-reset")?.to_str().ok()?.parse::<i64>().ok()?;

    let reset_at = DateTime::from_timestamp(reset_timestamp, 0)?;

    Some(RateLimitInfo { remaining, reset_at })
}
