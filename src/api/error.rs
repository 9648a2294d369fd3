//! Error types for the LeetCode API layer

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use super::resilience::{Classify, ErrorClass};

/// A single entry from a GraphQL `errors` array
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The session credential was not supplied by the environment
    #[error("environment variable {var} is not set; export your LeetCode session cookie first")]
    MissingCredential { var: &'static str },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("page size must be a positive integer")]
    InvalidPageSize,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("no csrftoken cookie in response from {url}; the session may be invalid")]
    MissingCsrfToken { url: String },

    #[error("GraphQL request returned errors: {}", join_messages(.0))]
    GraphQl(Vec<GraphQlError>),

    #[error("GraphQL response for {operation} contained no data")]
    MissingData { operation: &'static str },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

fn join_messages(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl Classify for ApiError {
    fn classify(&self) -> ErrorClass {
        match self {
            ApiError::MissingCredential { .. } | ApiError::InvalidConfig(_) | ApiError::InvalidPageSize => {
                ErrorClass::Configuration
            }
            ApiError::Http(error) => ErrorClass::from_reqwest_error(error),
            ApiError::Status { status, .. } => ErrorClass::from_status_code(status.as_u16()),
            ApiError::MissingCsrfToken { .. } => ErrorClass::Auth,
            ApiError::GraphQl(_) | ApiError::MissingData { .. } | ApiError::Decode(_) => ErrorClass::Response,
        }
    }
}
