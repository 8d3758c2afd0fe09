use serde::Deserialize;
use validator::Validate;

use super::{FieldErrors, PRODUCT_CODE_RE, field_error_codes, trimmed};
use crate::domain::product::Product;

/// Maximum allowed length for a product name.
const NAME_MAX_LEN: u64 = 50;
/// Maximum allowed length for a product code.
const CODE_MAX_LEN: u64 = 20;

/// State of the product registering form.
///
/// Field constraints mirror the backend's: they are checked before any
/// request is issued.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    #[validate(
        length(min = 1, max = CODE_MAX_LEN),
        regex(path = *PRODUCT_CODE_RE)
    )]
    pub product_code: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub product_name: String,
    /// Genre code chosen from the facet list.
    #[validate(length(min = 1))]
    pub product_genre: String,
    /// Optional image as a data URL.
    pub product_image: Option<String>,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub product_size_standard: String,
    #[validate(length(max = NAME_MAX_LEN))]
    pub product_color: String,
    #[validate(range(min = 1, max = 99_999_999))]
    pub product_unit_price: i64,
    #[validate(range(min = 0, max = 99_999_999))]
    pub product_stock_quantity: i64,
    pub end_of_sale: bool,
}

impl ProductForm {
    /// Populate the form from an existing product (edit mode).
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_code: product.product_code.clone(),
            product_name: product.product_name.clone(),
            product_genre: product.product_genre.clone(),
            product_image: product.product_image.clone(),
            product_size_standard: product.product_size_standard.clone(),
            product_color: product.product_color.clone(),
            product_unit_price: product.product_unit_price,
            product_stock_quantity: product.product_stock_quantity,
            end_of_sale: product.end_of_sale,
        }
    }

    /// Validate and convert into the save payload.
    ///
    /// `product_seq` is `None` for a create and the backend sequence
    /// number for an update.
    pub fn into_product(self, product_seq: Option<i64>) -> Result<Product, FieldErrors> {
        let form = self.sanitized();
        if let Err(errors) = form.validate() {
            return Err(field_error_codes(&errors));
        }

        Ok(Product {
            product_seq,
            product_code: form.product_code,
            product_name: form.product_name,
            product_genre: form.product_genre,
            product_image: form.product_image,
            product_size_standard: form.product_size_standard,
            product_color: form.product_color,
            product_unit_price: form.product_unit_price,
            product_stock_quantity: form.product_stock_quantity,
            end_of_sale: form.end_of_sale,
        })
    }

    fn sanitized(mut self) -> Self {
        self.product_code = trimmed(&self.product_code);
        self.product_name = trimmed(&self.product_name);
        self.product_genre = trimmed(&self.product_genre);
        self.product_size_standard = trimmed(&self.product_size_standard);
        self.product_color = trimmed(&self.product_color);
        self
    }
}
