//! CSRF token derivation for an authenticated LeetCode session

use log::{debug, info};
use reqwest::header::COOKIE;

use super::constants::{self, cookies};
use super::error::ApiError;
use crate::auth::SessionCredential;

/// Exchange a session cookie for the site's `csrftoken` cookie
///
/// One GET against the site root; the token arrives as a `Set-Cookie`.
pub async fn fetch_csrf_token(
    http: &reqwest::Client,
    base_url: &str,
    session: &SessionCredential,
) -> Result<String, ApiError> {
    let url = constants::csrf_endpoint(base_url);
    info!("Requesting CSRF token from {}", url);

    let response = http
        .get(&url)
        .header(COOKIE, format!("{}={}", cookies::SESSION, session.expose()))
        .send()
        .await?;

    let status = response.status();
    debug!("CSRF request status: {}", status);

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            url,
            status,
            body: truncate_body(&body),
        });
    }

    response
        .cookies()
        .find(|cookie| cookie.name() == cookies::CSRF && !cookie.value().is_empty())
        .map(|cookie| cookie.value().to_string())
        .ok_or(ApiError::MissingCsrfToken { url })
}

/// Keep error messages readable when the server returns an HTML page
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX_LEN: usize = 512;
    if body.len() <= MAX_LEN {
        return body.to_string();
    }
    let mut end = MAX_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &body[..end])
}
