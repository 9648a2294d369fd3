//! Retry and request pacing for calls against the LeetCode API

pub mod config;
pub mod retry;

pub use config::{ResilienceConfig, ResilienceConfigBuilder};
pub use retry::{Classify, ErrorClass, RetryConfig, RetryPolicy};
