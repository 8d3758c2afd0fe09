//! Purchase endpoints wrapped with the page banner contract.

use crate::api::{PurchaseReader, PurchaseWriter};
use crate::domain::purchase::{PurchaseDetail, PurchaseRequest};
use crate::services::clear_messages;
use crate::shell::{ErrorMessages, SuccessMessages};

/// Translation key shown after a purchase is recorded.
pub const MSG_PURCHASE_COMPLETED: &str = "message.purchase-completed";

/// Fetch the purchase detail for a product.
///
/// Any failure, a 404 included, resolves to `None` after exactly one
/// error-banner call.
pub async fn get_product_purchase<A, S>(
    api: &A,
    shell: &S,
    product_code: &str,
) -> Option<PurchaseDetail>
where
    A: PurchaseReader + ?Sized,
    S: SuccessMessages + ErrorMessages + ?Sized,
{
    clear_messages(shell);
    match api.get_purchase(product_code).await {
        Ok(detail) => Some(detail),
        Err(error) => {
            shell.set_page_error(&error);
            None
        }
    }
}

/// Record a purchase; success raises the completed banner.
pub async fn create_product_purchase<A, S>(
    api: &A,
    shell: &S,
    request: &PurchaseRequest,
) -> Option<PurchaseDetail>
where
    A: PurchaseWriter + ?Sized,
    S: SuccessMessages + ErrorMessages + ?Sized,
{
    clear_messages(shell);
    match api.create_purchase(request).await {
        Ok(detail) => {
            shell.set_message(MSG_PURCHASE_COMPLETED);
            Some(detail)
        }
        Err(error) => {
            shell.set_page_error(&error);
            None
        }
    }
}
