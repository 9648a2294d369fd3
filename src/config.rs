use log::info;

use crate::api::constants::DEFAULT_BASE_URL;
use crate::api::error::ApiError;
use crate::api::resilience::ResilienceConfig;
use crate::auth::SessionCredential;

/// Optional override for the service URL, e.g. a mirror or a local mock
pub const BASE_URL_ENV: &str = "LEETCODE_BASE_URL";

/// Everything a run needs to talk to the service
#[derive(Debug, Clone)]
pub struct Config {
    pub session: SessionCredential,
    pub base_url: String,
    pub resilience: ResilienceConfig,
}

impl Config {
    /// Defaults for everything but the credential
    pub fn new(session: SessionCredential) -> Self {
        Self {
            session,
            base_url: DEFAULT_BASE_URL.to_string(),
            resilience: ResilienceConfig::default(),
        }
    }

    /// Load from a key lookup, normally `|key| std::env::var(key).ok()`
    ///
    /// Fails with [`ApiError::MissingCredential`] before anything touches the network.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let session = SessionCredential::from_lookup(&lookup)?;
        let mut config = Self::new(session);

        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            info!("Using base URL override {}", base_url);
            config = config.with_base_url(base_url);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_resilience(mut self, resilience: ResilienceConfig) -> Self {
        self.resilience = resilience;
        self
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ApiError::InvalidConfig(format!(
                "{} must be an http(s) URL, got '{}'",
                BASE_URL_ENV, self.base_url
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::credentials::SESSION_ENV;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[(SESSION_ENV, "abc")])).unwrap();

        assert_eq!(config.session.expose(), "abc");
        assert_eq!(config.base_url, "https://leetcode.com");
        assert_eq!(config.resilience, ResilienceConfig::default());
    }

    #[test]
    fn test_base_url_override() {
        let config = Config::from_lookup(lookup(&[
            (SESSION_ENV, "abc"),
            (BASE_URL_ENV, "https://leetcode.cn/"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://leetcode.cn");
    }

    #[test]
    fn test_missing_session_fails() {
        let result = Config::from_lookup(lookup(&[(BASE_URL_ENV, "https://leetcode.cn")]));
        assert!(matches!(result, Err(ApiError::MissingCredential { .. })));
    }

    #[test]
    fn test_invalid_base_url_fails() {
        let result = Config::from_lookup(lookup(&[(SESSION_ENV, "abc"), (BASE_URL_ENV, "leetcode.com")]));
        assert!(matches!(result, Err(ApiError::InvalidConfig(_))));
    }
}
