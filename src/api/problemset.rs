//! Count and page fetchers for the problem catalog

use async_trait::async_trait;
use log::debug;

use super::client::LeetCodeClient;
use super::error::ApiError;
use super::models::Question;
use super::query::{GraphQlRequest, ProblemsetData};

/// A paged source of problem metadata
#[async_trait]
pub trait ProblemSource: Send + Sync {
    /// Total number of problems in the catalog; 0 when the service reports none
    async fn problem_count(&self) -> Result<u64, ApiError>;

    /// Problems in the window starting at `offset + page * page_size`
    ///
    /// Returns at most `page_size` items, and none past the end of the catalog.
    async fn problem_page(&self, offset: u64, page_size: u64, page: u64) -> Result<Vec<Question>, ApiError>;
}

#[async_trait]
impl ProblemSource for LeetCodeClient {
    async fn problem_count(&self) -> Result<u64, ApiError> {
        self.retry_policy()
            .execute("problem count", || async move {
                self.pace().await;
                let data: ProblemsetData = self.graphql(&GraphQlRequest::problem_count()).await?;
                let total = data
                    .problemset_question_list
                    .and_then(|list| list.total_num)
                    .unwrap_or(0);
                debug!("Service reports {} problems", total);
                Ok::<_, ApiError>(total)
            })
            .await
    }

    async fn problem_page(&self, offset: u64, page_size: u64, page: u64) -> Result<Vec<Question>, ApiError> {
        if page_size == 0 {
            return Err(ApiError::InvalidPageSize);
        }
        let skip = offset + page * page_size;
        let label = format!("problem page {} (skip {})", page, skip);

        self.retry_policy()
            .execute(&label, || async move {
                self.pace().await;
                let data: ProblemsetData = self
                    .graphql(&GraphQlRequest::problem_page(page_size, skip))
                    .await?;
                let questions = data
                    .problemset_question_list
                    .and_then(|list| list.questions)
                    .unwrap_or_default();
                Ok::<_, ApiError>(questions)
            })
            .await
    }
}
