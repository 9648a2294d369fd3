//! LeetCode GraphQL API
//!
//! Authenticated client, the `problemsetQuestionList` count and page fetchers,
//! the retry policy wrapped around them, and the pagination driver that
//! stitches pages into one ordered list.

pub mod auth;
pub mod client;
pub mod constants;
pub mod error;
pub mod models;
pub mod pagination;
pub mod problemset;
pub mod query;
pub mod resilience;

pub use client::LeetCodeClient;
pub use error::{ApiError, GraphQlError};
pub use models::{CompanyTag, CompanyTagStats, Question, TopicTag};
pub use pagination::{FetchProgress, PagePlan, PageWindow, fetch_all_problems};
pub use problemset::ProblemSource;
pub use query::{GraphQlRequest, QuestionListFilters, QuestionListVariables};
pub use resilience::{Classify, ErrorClass, ResilienceConfig, RetryConfig, RetryPolicy};
