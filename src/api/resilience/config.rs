//! Resilience configuration with builder pattern
//!
//! Bundles the retry policy with the fixed pacing delay that is observed
//! before every GraphQL request.

use super::retry::{ErrorClass, RetryConfig};
use std::time::Duration;

/// LeetCode rate-limits aggressively; every request waits this long first
pub const DEFAULT_PACING: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq)]
pub struct ResilienceConfig {
    pub retry: RetryConfig,
    /// Sleep before each request, including each retry attempt
    pub pacing: Duration,
}

impl Default for ResilienceConfig {
    fn default() -> Self {
        Self {
            retry: RetryConfig::default(),
            pacing: DEFAULT_PACING,
        }
    }
}

impl ResilienceConfig {
    pub fn builder() -> ResilienceConfigBuilder {
        ResilienceConfigBuilder::new()
    }

    /// No retries and no pacing
    pub fn disabled() -> Self {
        Self {
            retry: RetryConfig::disabled(),
            pacing: Duration::ZERO,
        }
    }
}

#[derive(Debug)]
pub struct ResilienceConfigBuilder {
    config: ResilienceConfig,
}

impl ResilienceConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ResilienceConfig::default(),
        }
    }

    pub fn retry_config(mut self, retry: RetryConfig) -> Self {
        self.config.retry = retry;
        self
    }

    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.config.retry.max_attempts = attempts;
        self
    }

    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.config.retry.delay = delay;
        self
    }

    /// Also retry failures of this class
    pub fn retry_on(mut self, class: ErrorClass) -> Self {
        self.config.retry.transient.insert(class);
        self
    }

    pub fn pacing(mut self, pacing: Duration) -> Self {
        self.config.pacing = pacing;
        self
    }

    pub fn build(self) -> ResilienceConfig {
        self.config
    }
}

impl Default for ResilienceConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
