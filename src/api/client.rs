use log::{debug, info};
use reqwest::header::{CONTENT_TYPE, COOKIE, HeaderMap, HeaderName, HeaderValue, ORIGIN, REFERER};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::auth::{self, truncate_body};
use super::constants::{self, cookies, headers};
use super::error::{ApiError, GraphQlError};
use super::query::GraphQlRequest;
use super::resilience::RetryPolicy;
use crate::config::Config;

/// Authenticated LeetCode GraphQL client
///
/// Built once per run and shared by reference with every fetch.
#[derive(Debug, Clone)]
pub struct LeetCodeClient {
    endpoint: String,
    http_client: reqwest::Client,
    retry_policy: RetryPolicy,
    pacing: Duration,
}

#[derive(Debug, Deserialize)]
struct GraphQlEnvelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

impl LeetCodeClient {
    /// Derive a CSRF token for the configured session and build the client
    ///
    /// The token round-trip runs under the same retry policy as the fetches.
    pub async fn connect(config: &Config) -> Result<Self, ApiError> {
        let bootstrap = http_builder(HeaderMap::new()).build()?;
        let retry_policy = RetryPolicy::new(config.resilience.retry.clone());

        let csrf_token = retry_policy
            .execute("csrf token", || {
                auth::fetch_csrf_token(&bootstrap, &config.base_url, &config.session)
            })
            .await?;

        Self::with_csrf_token(config, &csrf_token)
    }

    /// Build the client from an already known CSRF token
    pub fn with_csrf_token(config: &Config, csrf_token: &str) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim_end_matches('/');
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static(headers::CONTENT_TYPE_JSON));
        default_headers.insert(
            HeaderName::from_static(headers::CSRF_TOKEN),
            header_value(csrf_token, "csrf token")?,
        );
        default_headers.insert(
            COOKIE,
            header_value(
                &format!(
                    "{}={}; {}={}",
                    cookies::CSRF,
                    csrf_token,
                    cookies::SESSION,
                    config.session.expose()
                ),
                "session cookie",
            )?,
        );
        default_headers.insert(REFERER, header_value(base_url, "base URL")?);
        default_headers.insert(ORIGIN, header_value(base_url, "base URL")?);

        let http_client = http_builder(default_headers).build()?;
        info!("Built LeetCode client for {}", base_url);

        Ok(Self {
            endpoint: constants::graphql_endpoint(base_url),
            http_client,
            retry_policy: RetryPolicy::new(config.resilience.retry.clone()),
            pacing: config.resilience.pacing,
        })
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Wait out the fixed pacing delay before a request
    pub(crate) async fn pace(&self) {
        if !self.pacing.is_zero() {
            debug!("Pacing {:?} before request", self.pacing);
            tokio::time::sleep(self.pacing).await;
        }
    }

    /// POST a GraphQL request and return its `data`
    ///
    /// GraphQL-level errors and a missing `data` field are reported as errors.
    pub async fn graphql<V, R>(&self, request: &GraphQlRequest<V>) -> Result<R, ApiError>
    where
        V: Serialize,
        R: DeserializeOwned,
    {
        let response = self.http_client.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        debug!("{} response status: {}", request.operation_name, status);

        let bytes = response.bytes().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                url: self.endpoint.clone(),
                status,
                body: truncate_body(&String::from_utf8_lossy(&bytes)),
            });
        }

        let envelope: GraphQlEnvelope<R> = serde_json::from_slice(&bytes)?;
        if !envelope.errors.is_empty() {
            return Err(ApiError::GraphQl(envelope.errors));
        }
        envelope.data.ok_or(ApiError::MissingData {
            operation: request.operation_name,
        })
    }
}

fn http_builder(default_headers: HeaderMap) -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .default_headers(default_headers)
        .timeout(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(concat!("leetcode-export/", env!("CARGO_PKG_VERSION")))
}

fn header_value(value: &str, what: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(value)
        .map_err(|_| ApiError::InvalidConfig(format!("{} contains characters not allowed in HTTP headers", what)))
}
