use std::fmt;

use log::debug;

use crate::api::error::ApiError;

/// Environment variable holding the `LEETCODE_SESSION` cookie value
pub const SESSION_ENV: &str = "LEETCODE_SESSION_ID";

/// Opaque LeetCode session cookie
///
/// The value never appears in `Debug` output or logs.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCredential(String);

impl SessionCredential {
    /// Wrap a session value; blank values count as missing
    pub fn new(value: impl Into<String>) -> Result<Self, ApiError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(ApiError::MissingCredential { var: SESSION_ENV });
        }
        Ok(Self(value))
    }

    /// Read the credential through `lookup`, e.g. `std::env::var`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = lookup(SESSION_ENV).ok_or(ApiError::MissingCredential { var: SESSION_ENV })?;
        debug!("Read session credential from {}", SESSION_ENV);
        Self::new(value)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionCredential(***)")
    }
}
