//! GraphQL documents and variables for the `problemsetQuestionList` operation

use serde::{Deserialize, Serialize};

use super::constants::PROBLEMSET_OPERATION;
use super::models::Question;

/// Fetches only the total number of problems
pub const COUNT_QUERY: &str = r#"
query problemsetQuestionList($categorySlug: String, $limit: Int, $skip: Int, $filters: QuestionListFilterInput) {
  problemsetQuestionList: questionList(
    categorySlug: $categorySlug
    limit: $limit
    skip: $skip
    filters: $filters
  ) {
    totalNum
  }
}
"#;

/// Fetches one page of problem metadata
pub const PAGE_QUERY: &str = r#"
query problemsetQuestionList($categorySlug: String, $limit: Int, $skip: Int, $filters: QuestionListFilterInput) {
  problemsetQuestionList: questionList(
    categorySlug: $categorySlug
    limit: $limit
    skip: $skip
    filters: $filters
  ) {
    questions: data {
      questionFrontendId
      title
      titleSlug
      categoryTitle
      frequency
      isPaidOnly
      topicTags {
        name
        slug
      }
      companyTagStats
    }
  }
}
"#;

/// Request body POSTed to the GraphQL endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<V> {
    pub query: &'static str,
    pub variables: V,
    pub operation_name: &'static str,
}

impl GraphQlRequest<QuestionListVariables> {
    /// Count query: `limit = 1`, `skip = 0`, no filters
    pub fn problem_count() -> Self {
        Self {
            query: COUNT_QUERY,
            variables: QuestionListVariables::window(1, 0),
            operation_name: PROBLEMSET_OPERATION,
        }
    }

    /// Page query for the window `[skip, skip + limit)`
    pub fn problem_page(limit: u64, skip: u64) -> Self {
        Self {
            query: PAGE_QUERY,
            variables: QuestionListVariables::window(limit, skip),
            operation_name: PROBLEMSET_OPERATION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListVariables {
    /// Empty string selects every category
    pub category_slug: String,
    pub limit: u64,
    pub skip: u64,
    pub filters: QuestionListFilters,
}

impl QuestionListVariables {
    pub fn window(limit: u64, skip: u64) -> Self {
        Self {
            category_slug: String::new(),
            limit,
            skip,
            filters: QuestionListFilters::default(),
        }
    }
}

/// `QuestionListFilterInput`; unset fields are left out of the request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_only: Option<bool>,
}

/// `data` of a `problemsetQuestionList` response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemsetData {
    pub problemset_question_list: Option<QuestionList>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionList {
    #[serde(default)]
    pub total_num: Option<u64>,
    #[serde(default)]
    pub questions: Option<Vec<Question>>,
}
