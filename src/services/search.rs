//! Drives the product search workflow: one logical "current search",
//! fed by the search button and the paginator.

use crate::api::{ApiResult, ProductReader};
use crate::domain::search::{PageRequest, ResultPage, SearchCriteria, SearchParams};
use crate::shell::{ErrorMessages, LoadingOverlay};

/// User events that cause a page of results to be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTrigger {
    /// The search button was pressed; the current page request is reused.
    Search,
    /// The paginator moved to another slice.
    Page(PageRequest),
}

/// Fetch lifecycle of the executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Loading,
}

/// Token handed out when a request starts.
///
/// Applying a response requires the token, which ties the response to the
/// request epoch it belongs to.
#[derive(Debug)]
pub struct PendingSearch {
    epoch: u64,
    /// Query snapshot taken when the request started.
    pub params: SearchParams,
}

/// State machine behind the product listing table.
///
/// Both triggers funnel through `&mut self`, which serializes them into a
/// single ordered stream. Every request gets a fresh epoch; a response
/// whose epoch is no longer current is discarded, so a slow response can
/// never overwrite the outcome of a newer request.
#[derive(Debug)]
pub struct SearchExecutor {
    page: PageRequest,
    results: ResultPage,
    phase: SearchPhase,
    epoch: u64,
}

impl Default for SearchExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchExecutor {
    pub fn new() -> Self {
        Self {
            page: PageRequest::default(),
            results: ResultPage::empty(),
            phase: SearchPhase::Idle,
            epoch: 0,
        }
    }

    /// Pagination cursor currently shown to the user.
    pub fn page(&self) -> PageRequest {
        self.page
    }

    /// Last applied page of results.
    pub fn results(&self) -> &ResultPage {
        &self.results
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Handle a user trigger end to end: build the query, fetch, apply.
    pub async fn handle<A, S>(
        &mut self,
        api: &A,
        shell: &S,
        criteria: &SearchCriteria,
        trigger: SearchTrigger,
    ) -> &ResultPage
    where
        A: ProductReader + ?Sized,
        S: LoadingOverlay + ErrorMessages + ?Sized,
    {
        if let SearchTrigger::Page(page) = trigger {
            self.page = page;
        }

        let pending = self.begin(shell, criteria);
        let outcome = api.search_products(pending.params.clone()).await;
        self.apply(shell, pending, outcome);
        &self.results
    }

    /// Enter `Loading` and snapshot the query under a new request epoch.
    pub fn begin<S>(&mut self, shell: &S, criteria: &SearchCriteria) -> PendingSearch
    where
        S: LoadingOverlay + ?Sized,
    {
        self.epoch += 1;
        self.phase = SearchPhase::Loading;
        shell.start_loading();
        PendingSearch {
            epoch: self.epoch,
            params: SearchParams::new(criteria, self.page),
        }
    }

    /// Apply a finished request.
    ///
    /// The loading overlay is stopped for every token, keeping its counter
    /// balanced. State is only touched when the token's epoch is still
    /// current; a superseded token's outcome is discarded wholesale.
    pub fn apply<S>(&mut self, shell: &S, pending: PendingSearch, outcome: ApiResult<ResultPage>)
    where
        S: LoadingOverlay + ErrorMessages + ?Sized,
    {
        shell.stop_loading();
        if pending.epoch != self.epoch {
            return;
        }
        self.phase = SearchPhase::Idle;

        match outcome {
            Ok(page) => {
                // The server clamps out-of-range requests; its index wins.
                if page.page_index != self.page.page_index {
                    self.page.page_index = page.page_index;
                }
                self.results = page;
            }
            Err(error) => {
                shell.set_page_error(&error);
                self.results = ResultPage {
                    page_index: self.page.page_index,
                    ..ResultPage::empty()
                };
            }
        }
    }

    /// Drop the results and reset pagination without issuing a request.
    ///
    /// Bumps the epoch so a response still in flight cannot repopulate
    /// the cleared table.
    pub fn clear(&mut self) {
        self.epoch += 1;
        self.phase = SearchPhase::Idle;
        self.page = PageRequest::default();
        self.results = ResultPage::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_PAGE_SIZE;
    use crate::api::ApiError;
    use crate::api::mock::MockProductReader;
    use crate::domain::product::ProductSummary;
    use crate::shell::mock::{MockErrorMessages, MockLoadingOverlay};
    use crate::shell::{ErrorMessages, LoadingOverlay};

    fn sample_row(code: &str) -> ProductSummary {
        ProductSummary {
            product_name: format!("Product {code}"),
            product_code: code.to_string(),
            product_genre: "1".to_string(),
            product_image: None,
            product_size_standard: "S/M/L".to_string(),
            product_color: "Navy".to_string(),
            product_unit_price: 28000,
            product_stock_quantity: 5,
            end_of_sale: false,
        }
    }

    fn page_with(code: &str, total_count: u64, page_index: usize) -> ResultPage {
        ResultPage {
            rows: vec![sample_row(code)],
            total_count,
            page_index,
        }
    }

    struct FakeShell {
        loading: MockLoadingOverlay,
        errors: MockErrorMessages,
    }

    impl FakeShell {
        fn new() -> Self {
            Self {
                loading: MockLoadingOverlay::new(),
                errors: MockErrorMessages::new(),
            }
        }

        /// Shell that tolerates any number of balanced loading calls and
        /// expects no error banner.
        fn quiet() -> Self {
            let mut shell = Self::new();
            shell.loading.expect_start_loading().returning(|| ());
            shell.loading.expect_stop_loading().returning(|| ());
            shell.errors.expect_set_page_error().times(0);
            shell
        }
    }

    impl LoadingOverlay for FakeShell {
        fn start_loading(&self) {
            self.loading.start_loading()
        }

        fn stop_loading(&self) {
            self.loading.stop_loading()
        }
    }

    impl ErrorMessages for FakeShell {
        fn clear_message(&self) {
            self.errors.clear_message()
        }

        fn set_page_error(&self, error: &ApiError) {
            self.errors.set_page_error(error)
        }
    }

    #[tokio::test]
    async fn search_applies_the_result_page() {
        let mut api = MockProductReader::new();
        api.expect_search_products()
            .times(1)
            .withf(|params| {
                assert_eq!(params.product_name, "down");
                assert_eq!(params.page_index, 0);
                assert_eq!(params.page_size, DEFAULT_PAGE_SIZE);
                true
            })
            .returning(|_| Ok(page_with("A00001", 1, 0)));

        let mut shell = FakeShell::new();
        shell.loading.expect_start_loading().times(1).returning(|| ());
        shell.loading.expect_stop_loading().times(1).returning(|| ());
        shell.errors.expect_set_page_error().times(0);

        let criteria = SearchCriteria::new().product_name("down");
        let mut executor = SearchExecutor::new();

        let results = executor
            .handle(&api, &shell, &criteria, SearchTrigger::Search)
            .await;

        assert_eq!(results.rows.len(), 1);
        assert_eq!(results.total_count, 1);
        assert_eq!(executor.phase(), SearchPhase::Idle);
    }

    #[tokio::test]
    async fn page_trigger_moves_the_cursor_before_fetching() {
        let mut api = MockProductReader::new();
        api.expect_search_products()
            .times(1)
            .withf(|params| {
                assert_eq!(params.page_index, 3);
                assert_eq!(params.page_size, 25);
                true
            })
            .returning(|_| Ok(page_with("A00001", 80, 3)));

        let shell = FakeShell::quiet();
        let mut executor = SearchExecutor::new();

        executor
            .handle(
                &api,
                &shell,
                &SearchCriteria::default(),
                SearchTrigger::Page(PageRequest::new(3, 25)),
            )
            .await;

        assert_eq!(executor.page(), PageRequest::new(3, 25));
    }

    #[tokio::test]
    async fn server_page_index_overwrites_the_local_one() {
        let mut api = MockProductReader::new();
        // Request page 5, server clamps to its last page, 2.
        api.expect_search_products()
            .times(1)
            .returning(|_| Ok(page_with("A00001", 121, 2)));

        let shell = FakeShell::quiet();
        let mut executor = SearchExecutor::new();

        executor
            .handle(
                &api,
                &shell,
                &SearchCriteria::default(),
                SearchTrigger::Page(PageRequest::new(5, 50)),
            )
            .await;

        assert_eq!(executor.page().page_index, 2);
        assert_eq!(executor.results().page_index, 2);
    }

    #[tokio::test]
    async fn failure_yields_an_empty_page_and_one_error_banner() {
        let mut api = MockProductReader::new();
        api.expect_search_products().times(1).returning(|_| {
            Err(ApiError::Status {
                status: 500,
                body: String::new(),
            })
        });

        let mut shell = FakeShell::new();
        shell.loading.expect_start_loading().times(1).returning(|| ());
        shell.loading.expect_stop_loading().times(1).returning(|| ());
        shell
            .errors
            .expect_set_page_error()
            .times(1)
            .returning(|_| ());

        let mut executor = SearchExecutor::new();
        executor
            .handle(&api, &shell, &SearchCriteria::default(), SearchTrigger::Search)
            .await;

        assert!(executor.results().rows.is_empty());
        assert_eq!(executor.results().total_count, 0);
        assert_eq!(executor.phase(), SearchPhase::Idle);
    }

    #[test]
    fn stale_epoch_response_is_discarded() {
        let shell = FakeShell::quiet();
        let criteria = SearchCriteria::default();
        let mut executor = SearchExecutor::new();

        let first = executor.begin(&shell, &criteria);
        let second = executor.begin(&shell, &criteria);

        // The newer request completes first.
        executor.apply(&shell, second, Ok(page_with("NEW00001", 1, 0)));
        // The superseded response arrives late and must not be applied.
        executor.apply(&shell, first, Ok(page_with("OLD00001", 9, 4)));

        assert_eq!(executor.results().rows[0].product_code, "NEW00001");
        assert_eq!(executor.results().total_count, 1);
        assert_eq!(executor.page().page_index, 0);
    }

    #[test]
    fn clear_resets_pagination_and_results() {
        let shell = FakeShell::quiet();
        let mut executor = SearchExecutor::new();

        let pending = executor.begin(&shell, &SearchCriteria::default());
        executor.apply(&shell, pending, Ok(page_with("A00001", 121, 0)));
        executor.page = PageRequest::new(5, 25);

        executor.clear();

        assert_eq!(executor.page(), PageRequest::default());
        assert!(executor.results().rows.is_empty());
        assert_eq!(executor.results().total_count, 0);
    }

    #[test]
    fn clear_supersedes_an_in_flight_request() {
        let shell = FakeShell::quiet();
        let mut executor = SearchExecutor::new();

        let pending = executor.begin(&shell, &SearchCriteria::default());
        executor.clear();
        executor.apply(&shell, pending, Ok(page_with("A00001", 121, 0)));

        assert!(executor.results().rows.is_empty());
        assert_eq!(executor.results().total_count, 0);
    }
}
