use serde::{Deserialize, Serialize};

/// One row of the product search results.
///
/// Owned by the backend; the UI never mutates it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    /// Human-readable name of the product.
    pub product_name: String,
    /// Unique product code.
    pub product_code: String,
    /// Genre code used as a filter facet.
    pub product_genre: String,
    /// Optional image reference (a URL or data URL).
    pub product_image: Option<String>,
    /// Size standard, e.g. a garment size.
    pub product_size_standard: String,
    /// Color name.
    pub product_color: String,
    /// Unit price in the smallest currency unit.
    pub product_unit_price: i64,
    /// Quantity currently in stock.
    pub product_stock_quantity: i64,
    /// Whether the product has been discontinued.
    pub end_of_sale: bool,
}

/// Full product record exchanged with the register/edit endpoints.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend sequence number; `None` until the product is first saved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_seq: Option<i64>,
    pub product_code: String,
    pub product_name: String,
    pub product_genre: String,
    pub product_image: Option<String>,
    pub product_size_standard: String,
    pub product_color: String,
    /// Unit price in the smallest currency unit.
    pub product_unit_price: i64,
    pub product_stock_quantity: i64,
    pub end_of_sale: bool,
}
