use serde::{Deserialize, Serialize};

use crate::DEFAULT_PAGE_SIZE;
use crate::domain::product::ProductSummary;

/// Filter values entered in the product search form.
///
/// Every field defaults to "no filter"; the backend interprets empty
/// strings and `false` accordingly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub product_name: String,
    pub product_code: String,
    pub product_genre: String,
    pub end_of_sale: bool,
}

impl SearchCriteria {
    /// Construct criteria with every filter at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by product name.
    pub fn product_name(mut self, value: impl Into<String>) -> Self {
        self.product_name = value.into();
        self
    }

    /// Filter by product code.
    pub fn product_code(mut self, value: impl Into<String>) -> Self {
        self.product_code = value.into();
        self
    }

    /// Filter by genre code.
    pub fn product_genre(mut self, value: impl Into<String>) -> Self {
        self.product_genre = value.into();
        self
    }

    /// Include discontinued products in the results.
    pub fn end_of_sale(mut self, value: bool) -> Self {
        self.end_of_sale = value;
        self
    }

    /// Reset every filter to its default value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Slice of the result set requested from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 0-based page index.
    pub page_index: usize,
    /// Number of rows per page; always greater than zero.
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size,
        }
    }
}

/// Flat parameter set sent to the product search endpoint.
///
/// Every field is always serialized: the backend expects empty strings and
/// `false` rather than omitted keys.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub product_name: String,
    pub product_code: String,
    pub product_genre: String,
    pub end_of_sale: bool,
    pub page_size: usize,
    pub page_index: usize,
}

impl SearchParams {
    /// Combine the form criteria and the pagination cursor.
    pub fn new(criteria: &SearchCriteria, page: PageRequest) -> Self {
        Self {
            product_name: criteria.product_name.clone(),
            product_code: criteria.product_code.clone(),
            product_genre: criteria.product_genre.clone(),
            end_of_sale: criteria.end_of_sale,
            page_size: page.page_size,
            page_index: page.page_index,
        }
    }

    /// Encode the parameters as a GET query string.
    pub fn to_query_string(&self) -> Result<String, serde_qs::Error> {
        serde_qs::to_string(self)
    }
}

/// One page of search results as confirmed by the server.
///
/// Replaced wholesale on every successful fetch; never partially mutated.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    /// Rows of the current page, in server order.
    #[serde(rename = "productSearchResponseDtos")]
    pub rows: Vec<ProductSummary>,
    /// Total number of matching products across all pages.
    #[serde(rename = "resultsLength")]
    pub total_count: u64,
    /// Page index the server actually served, which may differ from the
    /// requested one when the request was out of range.
    pub page_index: usize,
}

impl ResultPage {
    /// Page with no rows, shown before the first search and after errors.
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total_count: 0,
            page_index: 0,
        }
    }
}

impl Default for ResultPage {
    fn default() -> Self {
        Self::empty()
    }
}
