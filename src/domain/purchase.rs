use serde::{Deserialize, Serialize};

/// Payload posted to record a product purchase.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub product_code: String,
    /// Name of the purchaser.
    pub product_purchase_name: String,
    /// Stock quantity the purchaser saw when submitting.
    pub product_stock_quantity: i64,
    /// Number of units purchased.
    pub product_purchase_quantity: i64,
}

/// Purchase detail returned by the purchase endpoints.
///
/// After a successful purchase the stock quantity reflects the new value.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseDetail {
    pub product_code: String,
    pub product_name: String,
    pub product_genre: String,
    pub product_image: Option<String>,
    pub product_size_standard: String,
    pub product_color: String,
    /// Unit price applied to purchases, in the smallest currency unit.
    pub product_purchase_unit_price: i64,
    pub product_stock_quantity: i64,
}
