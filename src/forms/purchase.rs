use serde::Deserialize;
use validator::Validate;

use super::{FieldErrors, PRODUCT_CODE_RE, field_error_codes, trimmed};
use crate::domain::purchase::PurchaseRequest;

const NAME_MAX_LEN: u64 = 50;
const CODE_MAX_LEN: u64 = 20;

/// State of the purchase form on the purchasing screen.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseForm {
    #[validate(
        length(min = 1, max = CODE_MAX_LEN),
        regex(path = *PRODUCT_CODE_RE)
    )]
    pub product_code: String,
    /// Name of the purchaser.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub product_purchase_name: String,
    /// Stock quantity shown to the user; the cross-field ceiling for the
    /// purchase quantity.
    #[validate(range(min = 0, max = 99_999_999))]
    pub product_stock_quantity: i64,
    #[validate(range(min = 1, max = 99_999_999))]
    pub product_purchase_quantity: i64,
}

impl PurchaseForm {
    /// Validate and convert into the purchase payload.
    ///
    /// Besides the field constraints, the purchase quantity must not
    /// exceed the displayed stock; a violation is reported under
    /// `product_purchase_quantity` with the code `exceeds_stock`.
    pub fn into_request(self) -> Result<PurchaseRequest, FieldErrors> {
        let form = self.sanitized();

        let mut errors = match form.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => field_error_codes(&errors),
        };
        if form.product_purchase_quantity > form.product_stock_quantity {
            errors
                .entry("product_purchase_quantity".to_string())
                .or_default()
                .push("exceeds_stock".to_string());
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(PurchaseRequest {
            product_code: form.product_code,
            product_purchase_name: form.product_purchase_name,
            product_stock_quantity: form.product_stock_quantity,
            product_purchase_quantity: form.product_purchase_quantity,
        })
    }

    fn sanitized(mut self) -> Self {
        self.product_code = trimmed(&self.product_code);
        self.product_purchase_name = trimmed(&self.product_purchase_name);
        self
    }
}
