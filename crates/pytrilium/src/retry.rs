//! Automatic retry policy for transient server failures.

use std::time::Duration;

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Method, StatusCode};

/// Default number of retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Default backoff multiplier.
pub const DEFAULT_BACKOFF_FACTOR: Duration = Duration::from_secs(1);

/// Upper bound for any single backoff sleep.
pub const DEFAULT_BACKOFF_MAX: Duration = Duration::from_secs(120);

/// Status codes retried by default: bad gateway, service unavailable and
/// gateway timeout.
pub const DEFAULT_STATUS_FORCELIST: [u16; 3] = [502, 503, 504];

/// Bounded retry policy applied to every request the session sends.
///
/// Status-based retries only happen for idempotent methods. Connection
/// failures are retried for every method because the request never reached
/// the server.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use pytrilium::RetryPolicy;
///
/// let policy = RetryPolicy::default()
///     .max_retries(2)
///     .backoff_factor(Duration::from_millis(50));
///
/// assert_eq!(policy.backoff(1), Duration::ZERO);
/// assert_eq!(policy.backoff(2), Duration::from_millis(100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    backoff_factor: Duration,
    backoff_max: Duration,
    status_forcelist: Vec<u16>,
}

impl RetryPolicy {
    /// Policy that never retries.
    pub fn none() -> Self {
        Self::default().max_retries(0)
    }

    /// Set the number of retries after the first attempt.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the backoff multiplier.
    pub fn backoff_factor(mut self, factor: Duration) -> Self {
        self.backoff_factor = factor;
        self
    }

    /// Set the cap for a single backoff sleep.
    pub fn backoff_max(mut self, max: Duration) -> Self {
        self.backoff_max = max;
        self
    }

    /// Replace the set of status codes eligible for retry.
    pub fn status_forcelist(mut self, statuses: impl IntoIterator<Item = u16>) -> Self {
        self.status_forcelist = statuses.into_iter().collect();
        self
    }

    /// Number of retries after the first attempt.
    pub fn retries(&self) -> u32 {
        self.max_retries
    }

    /// Total number of attempts this policy allows.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Whether a response status is worth another attempt for `method`.
    pub fn should_retry_status(&self, method: &Method, status: StatusCode) -> bool {
        is_idempotent(method) && self.status_forcelist.contains(&status.as_u16())
    }

    /// Whether a transport failure is worth another attempt for `method`.
    pub fn should_retry_error(&self, method: &Method, error: &reqwest::Error) -> bool {
        if error.is_connect() {
            return true;
        }
        error.is_timeout() && is_idempotent(method)
    }

    /// Sleep before retry number `retry` (1-based).
    ///
    /// The first retry happens immediately; later ones wait
    /// `backoff_factor * 2^(retry - 1)`, capped at `backoff_max`.
    pub fn backoff(&self, retry: u32) -> Duration {
        if retry <= 1 {
            return Duration::ZERO;
        }
        let multiplier = 2u32.saturating_pow(retry - 1);
        self.backoff_factor
            .checked_mul(multiplier)
            .unwrap_or(self.backoff_max)
            .min(self.backoff_max)
    }

    /// Delay requested by a `Retry-After` header on a 503, capped at
    /// `backoff_max`. Only the delta-seconds form is understood.
    pub fn retry_after(&self, status: StatusCode, headers: &HeaderMap) -> Option<Duration> {
        if status != StatusCode::SERVICE_UNAVAILABLE {
            return None;
        }
        let seconds: u64 = headers.get(RETRY_AFTER)?.to_str().ok()?.trim().parse().ok()?;
        Some(Duration::from_secs(seconds).min(self.backoff_max))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
            backoff_max: DEFAULT_BACKOFF_MAX,
            status_forcelist: DEFAULT_STATUS_FORCELIST.to_vec(),
        }
    }
}

fn is_idempotent(method: &Method) -> bool {
    [
        Method::GET,
        Method::HEAD,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
        Method::TRACE,
    ]
    .contains(method)
}
