use std::future::Future;
use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tokio::time::sleep;

use crate::config::ApiConfig;
use crate::tmdb::error::FetchError;
use crate::tmdb::types::MoviePage;

const POPULAR_PATH: &str = "movie/popular";

/// Anything that can produce a page of popular movies.
///
/// The coordinator depends on this rather than on [`TmdbClient`] so screens
/// can be driven by an in-memory source in tests.
pub trait MovieSource: Send + Sync + 'static {
    fn popular_movies(
        &self,
        api_key: &str,
    ) -> impl Future<Output = Result<MoviePage, FetchError>> + Send;
}

/// Bounded exponential backoff. One attempt means no retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff_base: Duration,
}

impl RetryPolicy {
    pub fn single_attempt() -> Self {
        Self {
            max_attempts: 1,
            backoff_base: Duration::ZERO,
        }
    }

    /// Delay before attempt `attempt + 1`, where `attempt` starts at 1.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.backoff_base.saturating_mul(1u32 << exponent)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::single_attempt()
    }
}

impl From<&ApiConfig> for RetryPolicy {
    fn from(api: &ApiConfig) -> Self {
        Self {
            max_attempts: api.max_attempts.max(1),
            backoff_base: Duration::from_millis(api.retry_backoff_base_ms),
        }
    }
}

/// Error body the API sends alongside non-success statuses.
#[derive(Deserialize)]
struct StatusBody {
    status_message: String,
}

/// HTTP client for the movie database API.
///
/// Certificates are validated by the TLS stack; there is no switch to
/// disable that.
pub struct TmdbClient {
    client: Client,
    popular_url: Url,
    retry: RetryPolicy,
}

impl TmdbClient {
    pub fn new(api: &ApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(api.timeout_seconds.into()))
            .user_agent(concat!("marquee/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Transport)?;

        Ok(Self {
            client,
            popular_url: popular_url(&api.base_url)?,
            retry: RetryPolicy::from(api),
        })
    }

    /// Fetches page one of the popular movies list.
    pub async fn fetch_popular_movies(&self, api_key: &str) -> Result<MoviePage, FetchError> {
        let mut attempt = 1;
        loop {
            match self.fetch_once(api_key).await {
                Ok(page) => return Ok(page),
                Err(err) if err.is_retryable() && attempt < self.retry.max_attempts => {
                    let delay = self.retry.backoff(attempt);
                    tracing::info!(
                        attempt,
                        max_attempts = self.retry.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "Retrying popular movies fetch"
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    tracing::warn!(attempt, kind = err.kind(), error = %err, "Popular movies fetch failed");
                    return Err(err);
                }
            }
        }
    }

    async fn fetch_once(&self, api_key: &str) -> Result<MoviePage, FetchError> {
        let mut url = self.popular_url.clone();
        url.query_pairs_mut().append_pair("api_key", api_key);

        tracing::debug!(endpoint = %self.popular_url, "GET popular movies");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(FetchError::Server {
                status: status.as_u16(),
                message: status_message(status, &body),
            });
        }

        let page: MoviePage = serde_json::from_slice(&body).map_err(FetchError::Decode)?;
        tracing::debug!(
            page = page.page,
            results = page.results.len(),
            total_results = page.total_results,
            "Decoded popular movies page"
        );
        Ok(page)
    }
}

impl MovieSource for TmdbClient {
    fn popular_movies(
        &self,
        api_key: &str,
    ) -> impl Future<Output = Result<MoviePage, FetchError>> + Send {
        self.fetch_popular_movies(api_key)
    }
}

fn popular_url(base_url: &str) -> Result<Url, FetchError> {
    let joined = format!("{}/{}", base_url.trim_end_matches('/'), POPULAR_PATH);
    Url::parse(&joined).map_err(|e| FetchError::InvalidBaseUrl {
        url: base_url.to_string(),
        message: e.to_string(),
    })
}

/// The request URL carries the API key, so it never reaches error text.
fn transport_error(err: reqwest::Error) -> FetchError {
    FetchError::Transport(err.without_url())
}

fn status_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<StatusBody>(body)
        .map(|b| b.status_message)
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or("error").to_string())
}
