//! API constants for the LeetCode GraphQL endpoint

/// Public LeetCode site; also used as Referer and Origin
pub const DEFAULT_BASE_URL: &str = "https://leetcode.com";

/// GraphQL endpoint path, relative to the base URL
pub const GRAPHQL_PATH: &str = "/graphql";

/// Name of the GraphQL operation used for both count and page queries
pub const PROBLEMSET_OPERATION: &str = "problemsetQuestionList";

/// Cookie names used for authentication
pub mod cookies {
    /// Session cookie copied from a logged-in browser
    pub const SESSION: &str = "LEETCODE_SESSION";

    /// Anti-forgery cookie handed out by the site root
    pub const CSRF: &str = "csrftoken";
}

/// Header names required by the GraphQL endpoint
pub mod headers {
    /// Anti-forgery token echoed as a header
    pub const CSRF_TOKEN: &str = "x-csrftoken";

    pub const CONTENT_TYPE_JSON: &str = "application/json";
}

/// Build the GraphQL endpoint URL
pub fn graphql_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), GRAPHQL_PATH)
}

/// Build the URL that hands out the csrftoken cookie
pub fn csrf_endpoint(base_url: &str) -> String {
    format!("{}/", base_url.trim_end_matches('/'))
}
