//! HTTP client with optional rate limiting and exponential-backoff retries
//!
//! Every source adapter goes through this client, so retry behavior is the
//! same for AniList, Jikan, TMDB and Trakt.

use super::retry_policy::{is_retryable_status, RetryPolicy};
use super::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::shared::errors::{AppError, AppResult};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter as GovernorRateLimiter};
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Longest body excerpt carried in an error message
const ERROR_BODY_LIMIT: usize = 200;

/// Retrying client shared by the source adapters
#[derive(Clone)]
pub struct RateLimitClient {
    transport: Arc<dyn HttpTransport>,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
    retry_policy: RetryPolicy,
    provider_name: String,
}

impl RateLimitClient {
    pub fn new(
        provider_name: &str,
        transport: Arc<dyn HttpTransport>,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            transport,
            rate_limiter: None,
            retry_policy,
            provider_name: provider_name.to_string(),
        }
    }

    /// Throttle attempts to `requests_per_second`. Zero disables throttling.
    pub fn with_rate_limit(mut self, requests_per_second: u32) -> Self {
        self.rate_limiter = NonZeroU32::new(requests_per_second)
            .map(|rps| Arc::new(GovernorRateLimiter::direct(Quota::per_second(rps))));
        self
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    /// Send `request`, retrying on 429, 5xx and network failures.
    ///
    /// Any other non-2xx status fails immediately. When retries run out the
    /// error of the last attempt is returned.
    pub async fn execute(&self, request: HttpRequest) -> AppResult<HttpResponse> {
        let max_attempts = self.retry_policy.max_attempts();
        let mut attempt = 0;

        loop {
            if let Some(limiter) = &self.rate_limiter {
                limiter.until_ready().await;
            }

            debug!(
                "{} request {} {} (attempt {}/{})",
                self.provider_name,
                request.method,
                request.url,
                attempt + 1,
                max_attempts
            );

            let error = match self.transport.send(request.clone()).await {
                Ok(response) if response.is_success() => return Ok(response),
                Ok(response) => {
                    let error = self.status_error(&response);
                    if !is_retryable_status(response.status) {
                        return Err(error);
                    }
                    error
                }
                Err(error) if error.is_retryable() => error,
                Err(error) => return Err(error),
            };

            if attempt >= self.retry_policy.max_retries {
                warn!(
                    "{} request to {} failed after {} attempts: {}",
                    self.provider_name, request.url, max_attempts, error
                );
                return Err(error);
            }

            let delay = self.retry_policy.delay_for(attempt);
            warn!(
                "{} request failed (attempt {}/{}): {}. Retrying in {:?}",
                self.provider_name,
                attempt + 1,
                max_attempts,
                error,
                delay
            );
            sleep(delay).await;
            attempt += 1;
        }
    }

    /// `execute` then decode the body. Decoding failures are not retried.
    pub async fn request_json<T>(&self, request: HttpRequest) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.execute(request).await?;
        serde_json::from_slice(&response.body).map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}",
                self.provider_name, e
            ))
        })
    }

    fn status_error(&self, response: &HttpResponse) -> AppError {
        let mut body = response.text();
        if body.len() > ERROR_BODY_LIMIT {
            let cut = (0..=ERROR_BODY_LIMIT)
                .rev()
                .find(|i| body.is_char_boundary(*i))
                .unwrap_or(0);
            body.truncate(cut);
        }

        AppError::HttpStatus {
            status: response.status,
            message: format!("{} {} {}", self.provider_name, response.reason(), body)
                .trim_end()
                .to_string(),
        }
    }
}
