//! Product listing screen: search form, result table and paginator.

use serde::Serialize;

use crate::api::{GenreReader, ProductReader};
use crate::domain::search::{PageRequest, ResultPage, SearchCriteria};
use crate::services::search::{SearchExecutor, SearchTrigger};
use crate::services::{products, setup_language};
use crate::shell::{
    ErrorMessages, LoadingOverlay, Navigator, Session, SuccessMessages, TitleBar, Translator,
};
use crate::{PATH_PRODUCT_LISTING, PATH_PRODUCT_REGISTERING, PATH_PRODUCT_REGISTERING_NEW};

/// Table contents derived from a result page.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ProductTable {
    pub rows: Vec<ProductRow>,
    /// Total number of matching products across all pages, for the
    /// paginator.
    pub total_count: u64,
}

/// One rendered row of the listing table.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ProductRow {
    /// 1-based position within the page.
    pub no: usize,
    pub product_name: String,
    pub product_code: String,
    pub product_genre: String,
    pub product_image: Option<String>,
    pub product_size_standard: String,
    pub product_color: String,
    /// Unit price with thousands separators.
    pub product_unit_price: String,
    /// Stock quantity with thousands separators.
    pub product_stock_quantity: String,
    pub end_of_sale: bool,
}

/// Map a result page to display rows and the paginator total.
///
/// Pure function of its input: mapping the same page twice yields the same
/// table.
pub fn present(page: &ResultPage) -> ProductTable {
    let rows = page
        .rows
        .iter()
        .enumerate()
        .map(|(index, product)| ProductRow {
            no: index + 1,
            product_name: product.product_name.clone(),
            product_code: product.product_code.clone(),
            product_genre: product.product_genre.clone(),
            product_image: product.product_image.clone(),
            product_size_standard: product.product_size_standard.clone(),
            product_color: product.product_color.clone(),
            product_unit_price: group_digits(product.product_unit_price),
            product_stock_quantity: group_digits(product.product_stock_quantity),
            end_of_sale: product.end_of_sale,
        })
        .collect();

    ProductTable {
        rows,
        total_count: page.total_count,
    }
}

fn group_digits(value: i64) -> String {
    let raw = value.to_string();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (offset, ch) in digits.chars().enumerate() {
        if offset > 0 && (digits.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}

/// Form and display state of the product listing screen.
#[derive(Debug, Default)]
pub struct ListingPage {
    /// Filter values bound to the search form.
    pub criteria: SearchCriteria,
    /// Genre facet values for the genre select.
    pub genres: Vec<String>,
    executor: SearchExecutor,
}

impl ListingPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the genre facet and apply the user's language.
    pub async fn on_init<A, S>(&mut self, api: &A, shell: &S)
    where
        A: GenreReader + ?Sized,
        S: Session + Translator + SuccessMessages + ErrorMessages + ?Sized,
    {
        self.genres = products::get_genres(api, shell).await;
        setup_language(shell);
    }

    /// Refresh the window title once the view is in place.
    pub fn on_view_ready<S>(&self, shell: &S)
    where
        S: TitleBar + ?Sized,
    {
        shell.set_title(PATH_PRODUCT_LISTING);
    }

    /// Search button: run the current criteria through the executor.
    pub async fn submit_search<A, S>(&mut self, api: &A, shell: &S) -> ProductTable
    where
        A: ProductReader + ?Sized,
        S: LoadingOverlay + ErrorMessages + ?Sized,
    {
        self.executor
            .handle(api, shell, &self.criteria, SearchTrigger::Search)
            .await;
        self.table()
    }

    /// Paginator control: fetch another slice of the current search.
    pub async fn change_page<A, S>(&mut self, api: &A, shell: &S, page: PageRequest) -> ProductTable
    where
        A: ProductReader + ?Sized,
        S: LoadingOverlay + ErrorMessages + ?Sized,
    {
        self.executor
            .handle(api, shell, &self.criteria, SearchTrigger::Page(page))
            .await;
        self.table()
    }

    /// Clear button: reset filters and drop results without a request.
    pub fn clear(&mut self) {
        self.criteria.clear();
        self.executor.clear();
    }

    /// New button: jump to the blank registering screen.
    pub fn open_new_product<S>(&self, shell: &S)
    where
        S: Navigator + ?Sized,
    {
        shell.navigate(PATH_PRODUCT_REGISTERING_NEW);
    }

    /// Row click: jump to the registering screen for `product_code`.
    pub fn open_product<S>(&self, shell: &S, product_code: &str)
    where
        S: Navigator + ?Sized,
    {
        shell.navigate(&format!("{PATH_PRODUCT_REGISTERING}/{product_code}"));
    }

    /// Drop the genre filter (the select's clear affordance).
    pub fn clear_genre(&mut self) {
        self.criteria.product_genre.clear();
    }

    /// Pagination cursor currently shown to the user.
    pub fn page(&self) -> PageRequest {
        self.executor.page()
    }

    /// Current table contents.
    pub fn table(&self) -> ProductTable {
        present(self.executor.results())
    }
}
