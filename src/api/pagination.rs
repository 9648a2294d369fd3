//! Offset pagination over the whole problem catalog

use log::{debug, info};

use super::error::ApiError;
use super::models::Question;
use super::problemset::ProblemSource;

/// One request's slice of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub skip: u64,
    pub limit: u64,
}

/// How a catalog of `total` problems is split into pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePlan {
    pub start: u64,
    pub total: u64,
    pub page_size: u64,
}

impl PagePlan {
    pub fn new(total: u64, page_size: u64) -> Result<Self, ApiError> {
        if page_size == 0 {
            return Err(ApiError::InvalidPageSize);
        }
        Ok(Self {
            start: 0,
            total,
            page_size,
        })
    }

    /// Problems the plan covers: `total - start + 1`
    ///
    /// The `+ 1` overshoots by one item, so a catalog that is an exact multiple
    /// of the page size gets one extra (empty) page. Kept so the request
    /// sequence matches what the service has always seen from this tool.
    pub fn expected(&self) -> u64 {
        self.total.saturating_sub(self.start).saturating_add(1)
    }

    pub fn page_count(&self) -> u64 {
        self.expected().div_ceil(self.page_size)
    }

    pub fn window(&self, page: u64) -> PageWindow {
        PageWindow {
            page,
            skip: self.start + page * self.page_size,
            limit: self.page_size,
        }
    }

    /// Contiguous, non-overlapping windows in page order
    pub fn windows(&self) -> impl Iterator<Item = PageWindow> {
        let plan = *self;
        (0..plan.page_count()).map(move |page| plan.window(page))
    }
}

/// Progress after each fetched page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchProgress {
    pub pages_done: u64,
    pub page_count: u64,
    /// Problems received so far
    pub fetched: usize,
    /// Problems the plan expects in total
    pub expected: u64,
}

/// Fetch every problem, page by page, in server order
///
/// Calls `on_progress` after each page. Any error, including a page whose
/// retries ran out, aborts the whole fetch; nothing partial is returned.
pub async fn fetch_all_problems<S, F>(
    source: &S,
    page_size: u64,
    mut on_progress: F,
) -> Result<Vec<Question>, ApiError>
where
    S: ProblemSource + ?Sized,
    F: FnMut(&FetchProgress),
{
    if page_size == 0 {
        return Err(ApiError::InvalidPageSize);
    }

    let total = source.problem_count().await?;
    let plan = PagePlan::new(total, page_size)?;
    info!("Fetching {} problems {} per page", plan.expected(), page_size);

    let mut problems = Vec::new();
    let page_count = plan.page_count();

    for window in plan.windows() {
        let page = source.problem_page(plan.start, plan.page_size, window.page).await?;
        debug!(
            "Page {}/{} (skip {}) returned {} problems",
            window.page + 1,
            page_count,
            window.skip,
            page.len()
        );
        problems.extend(page);

        on_progress(&FetchProgress {
            pages_done: window.page + 1,
            page_count,
            fetched: problems.len(),
            expected: plan.expected(),
        });
    }

    info!("Fetched {} problems in {} pages", problems.len(), page_count);
    Ok(problems)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn question(id: u64) -> Question {
        Question {
            question_frontend_id: id.to_string(),
            title: format!("Problem {}", id),
            title_slug: format!("problem-{}", id),
            category_title: Some("Algorithms".to_string()),
            frequency: None,
            is_paid_only: false,
            topic_tags: vec![],
            company_tag_stats: None,
        }
    }

    /// In-memory catalog that records every call
    struct MockSource {
        total: Option<u64>,
        catalog: Vec<Question>,
        fail_on_page: Option<u64>,
        count_calls: Mutex<u32>,
        page_calls: Mutex<Vec<(u64, u64, u64)>>,
    }

    impl MockSource {
        fn with_catalog(len: u64) -> Self {
            Self {
                total: Some(len),
                catalog: (1..=len).map(question).collect(),
                fail_on_page: None,
                count_calls: Mutex::new(0),
                page_calls: Mutex::new(Vec::new()),
            }
        }

        fn page_calls(&self) -> Vec<(u64, u64, u64)> {
            self.page_calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ProblemSource for MockSource {
        async fn problem_count(&self) -> Result<u64, ApiError> {
            *self.count_calls.lock().unwrap() += 1;
            Ok(self.total.unwrap_or(0))
        }

        async fn problem_page(&self, offset: u64, page_size: u64, page: u64) -> Result<Vec<Question>, ApiError> {
            self.page_calls.lock().unwrap().push((offset, page_size, page));
            if self.fail_on_page == Some(page) {
                return Err(ApiError::MissingData {
                    operation: "problemsetQuestionList",
                });
            }
            let skip = (offset + page * page_size) as usize;
            Ok(self
                .catalog
                .iter()
                .skip(skip)
                .take(page_size as usize)
                .cloned()
                .collect())
        }
    }

    #[test]
    fn test_page_count_formula() {
        let cases = [
            (0, 300, 1),
            (1, 300, 1),
            (299, 300, 1),
            (300, 300, 2),
            (301, 300, 2),
            (599, 300, 2),
            (600, 300, 3),
            (3021, 300, 11),
            (10, 1, 11),
            (7, 3, 3),
        ];
        for (total, page_size, pages) in cases {
            let plan = PagePlan::new(total, page_size).unwrap();
            assert_eq!(plan.page_count(), pages, "total={} page_size={}", total, page_size);
            assert_eq!(plan.page_count(), (total + 1).div_ceil(page_size));
        }
    }

    #[test]
    fn test_windows_are_contiguous() {
        let plan = PagePlan::new(1000, 300).unwrap();
        let windows: Vec<_> = plan.windows().collect();

        assert_eq!(windows.len(), 4);
        for (i, window) in windows.iter().enumerate() {
            assert_eq!(window.page, i as u64);
            assert_eq!(window.limit, 300);
            assert_eq!(window.skip, i as u64 * 300);
        }
        for pair in windows.windows(2) {
            assert_eq!(pair[0].skip + pair[0].limit, pair[1].skip);
        }
    }

    #[test]
    fn test_huge_total_does_not_overflow() {
        let plan = PagePlan::new(u64::MAX, 1000).unwrap();

        assert_eq!(plan.expected(), u64::MAX);
        assert_eq!(plan.page_count(), u64::MAX.div_ceil(1000));
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        assert!(matches!(PagePlan::new(10, 0), Err(ApiError::InvalidPageSize)));
    }

    #[tokio::test]
    async fn test_page_calls_match_formula() {
        for (total, page_size) in [(0, 5), (4, 5), (5, 5), (9, 5), (12, 5), (12, 1), (2, 300)] {
            let source = MockSource::with_catalog(total);

            fetch_all_problems(&source, page_size, |_| {}).await.unwrap();

            let calls = source.page_calls();
            assert_eq!(calls.len() as u64, (total + 1).div_ceil(page_size));
            let pages: Vec<u64> = calls.iter().map(|(_, _, page)| *page).collect();
            let expected: Vec<u64> = (0..calls.len() as u64).collect();
            assert_eq!(pages, expected);
            assert!(calls.iter().all(|(offset, size, _)| *offset == 0 && *size == page_size));
            assert_eq!(*source.count_calls.lock().unwrap(), 1);
        }
    }

    #[tokio::test]
    async fn test_results_preserve_server_order() {
        let source = MockSource::with_catalog(23);

        let problems = fetch_all_problems(&source, 5, |_| {}).await.unwrap();

        let ids: Vec<String> = problems.iter().map(|q| q.question_frontend_id.clone()).collect();
        let expected: Vec<String> = (1..=23).map(|id: u64| id.to_string()).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_progress_is_reported_per_page() {
        let source = MockSource::with_catalog(12);
        let mut seen = Vec::new();

        fetch_all_problems(&source, 5, |progress| seen.push(*progress)).await.unwrap();

        assert_eq!(
            seen,
            vec![
                FetchProgress { pages_done: 1, page_count: 3, fetched: 5, expected: 13 },
                FetchProgress { pages_done: 2, page_count: 3, fetched: 10, expected: 13 },
                FetchProgress { pages_done: 3, page_count: 3, fetched: 12, expected: 13 },
            ]
        );
    }

    #[tokio::test]
    async fn test_null_count_still_fetches_first_page() {
        let mut source = MockSource::with_catalog(0);
        source.total = None;

        let problems = fetch_all_problems(&source, 300, |_| {}).await.unwrap();

        assert!(problems.is_empty());
        assert_eq!(source.page_calls(), vec![(0, 300, 0)]);
    }

    #[tokio::test]
    async fn test_failed_page_aborts_fetch() {
        let mut source = MockSource::with_catalog(20);
        source.fail_on_page = Some(1);
        let mut progress_calls = 0;

        let result = fetch_all_problems(&source, 5, |_| progress_calls += 1).await;

        assert!(matches!(result, Err(ApiError::MissingData { .. })));
        assert_eq!(source.page_calls().len(), 2);
        assert_eq!(progress_calls, 1);
    }

    #[tokio::test]
    async fn test_zero_page_size_makes_no_calls() {
        let source = MockSource::with_catalog(3);

        let result = fetch_all_problems(&source, 0, |_| {}).await;

        assert!(matches!(result, Err(ApiError::InvalidPageSize)));
        assert_eq!(*source.count_calls.lock().unwrap(), 0);
    }
}
