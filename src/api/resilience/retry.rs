//! Fixed-delay retry policy
//!
//! Re-invokes an async operation when it fails with an error whose class is in
//! the configured transient set. Between attempts the policy sleeps a fixed
//! delay. The last attempt is made unguarded and its outcome is returned as-is.

use std::collections::HashSet;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use log::{debug, info, warn};

/// Configuration for retry behavior
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Total number of calls, including the first one. Values below 1 are treated as 1.
    pub max_attempts: u32,
    /// Fixed pause after each caught transient failure
    pub delay: Duration,
    /// Error classes that are worth another attempt
    pub transient: HashSet<ErrorClass>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(5),
            transient: HashSet::from([ErrorClass::Protocol]),
        }
    }
}

impl RetryConfig {
    /// Single attempt, no delay
    pub fn disabled() -> Self {
        Self {
            max_attempts: 1,
            delay: Duration::ZERO,
            transient: HashSet::new(),
        }
    }

    /// Add an error class to the transient set
    pub fn retry_on(mut self, class: ErrorClass) -> Self {
        self.transient.insert(class);
        self
    }
}

/// Coarse failure classes used to decide whether a call is retried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// Connection-level breakage: refused, reset, aborted mid-request or mid-body
    Protocol,
    /// Request or read timeout
    Timeout,
    /// HTTP 429
    RateLimited,
    /// HTTP 5xx
    ServerError,
    /// HTTP 4xx other than auth, timeout and rate-limit statuses
    ClientError,
    /// Rejected or missing credentials
    Auth,
    /// Payload could not be used: malformed JSON, GraphQL errors, missing data
    Response,
    /// Local configuration problem
    Configuration,
    Unknown,
}

impl ErrorClass {
    /// Classify an HTTP status code
    pub fn from_status_code(status: u16) -> Self {
        match status {
            401 | 403 => ErrorClass::Auth,
            408 => ErrorClass::Timeout,
            429 => ErrorClass::RateLimited,
            400..=499 => ErrorClass::ClientError,
            500..=599 => ErrorClass::ServerError,
            _ => ErrorClass::Unknown,
        }
    }

    /// Classify a reqwest error
    pub fn from_reqwest_error(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            ErrorClass::Timeout
        } else if error.is_connect() || error.is_request() || error.is_body() {
            ErrorClass::Protocol
        } else if let Some(status) = error.status() {
            Self::from_status_code(status.as_u16())
        } else if error.is_decode() {
            ErrorClass::Response
        } else {
            ErrorClass::Unknown
        }
    }
}

/// Errors that can report their [`ErrorClass`]
pub trait Classify {
    fn classify(&self) -> ErrorClass;
}

/// Retry policy with a fixed delay between attempts
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(RetryConfig::default())
    }
}

impl RetryPolicy {
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    fn max_attempts(&self) -> u32 {
        self.config.max_attempts.max(1)
    }

    fn is_transient<E: Classify>(&self, error: &E) -> bool {
        self.config.transient.contains(&error.classify())
    }

    /// Execute `operation`, retrying transient failures
    ///
    /// `label` names the operation in log lines.
    pub async fn execute<F, Fut, T, E>(&self, label: &str, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Classify + Display,
    {
        let max_attempts = self.max_attempts();

        for attempt in 1..max_attempts {
            match operation().await {
                Ok(value) => {
                    if attempt > 1 {
                        info!("{} succeeded on try {}/{}", label, attempt, max_attempts);
                    }
                    return Ok(value);
                }
                Err(error) if self.is_transient(&error) => {
                    warn!("{} failed, try {}/{}: {}", label, attempt, max_attempts, error);
                    debug!("Waiting {:?} before retry", self.config.delay);
                    tokio::time::sleep(self.config.delay).await;
                }
                Err(error) => {
                    warn!("{} failed permanently on try {}/{}: {}", label, attempt, max_attempts, error);
                    return Err(error);
                }
            }
        }

        if max_attempts > 1 {
            warn!("{}: last try ({}/{})", label, max_attempts, max_attempts);
        }
        operation().await
    }
}
