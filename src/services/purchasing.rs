//! Product purchasing screen.

use crate::api::{PurchaseReader, PurchaseWriter};
use crate::domain::purchase::PurchaseDetail;
use crate::forms::FieldErrors;
use crate::forms::purchase::PurchaseForm;
use crate::services::{purchases, setup_language};
use crate::shell::{ErrorMessages, Session, SuccessMessages, TitleBar, Translator};
use crate::PATH_PRODUCT_PURCHASING;

/// Result of a purchase submission.
#[derive(Debug, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Validation failed; nothing was sent to the backend.
    Invalid(FieldErrors),
    /// The backend rejected the purchase; the error banner carries the
    /// detail.
    Failed,
    /// The purchase was recorded; the detail reflects the new stock.
    Completed(PurchaseDetail),
}

/// Form and display state of the purchasing screen.
#[derive(Debug, Default)]
pub struct PurchasingPage {
    /// Detail of the product being purchased, once loaded.
    pub detail: Option<PurchaseDetail>,
    pub form: PurchaseForm,
}

impl PurchasingPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the purchase detail and prefill the form.
    ///
    /// A failed load (product unknown, backend down) leaves the page
    /// empty; the error banner already carries the reason.
    pub async fn on_init<A, S>(&mut self, api: &A, shell: &S, product_code: &str)
    where
        A: PurchaseReader + ?Sized,
        S: Session + Translator + SuccessMessages + ErrorMessages + ?Sized,
    {
        if let Some(detail) = purchases::get_product_purchase(api, shell, product_code).await {
            self.form = PurchaseForm {
                product_code: detail.product_code.clone(),
                product_purchase_name: String::new(),
                product_stock_quantity: detail.product_stock_quantity,
                product_purchase_quantity: 0,
            };
            self.detail = Some(detail);
        }
        setup_language(shell);
    }

    /// Refresh the window title once the view is in place.
    pub fn on_view_ready<S>(&self, shell: &S)
    where
        S: TitleBar + ?Sized,
    {
        shell.set_title(PATH_PRODUCT_PURCHASING);
    }

    /// Validate and record the purchase.
    pub async fn submit<A, S>(&mut self, api: &A, shell: &S) -> PurchaseOutcome
    where
        A: PurchaseWriter + ?Sized,
        S: SuccessMessages + ErrorMessages + ?Sized,
    {
        let request = match self.form.clone().into_request() {
            Ok(request) => request,
            Err(errors) => return PurchaseOutcome::Invalid(errors),
        };

        match purchases::create_product_purchase(api, shell, &request).await {
            Some(detail) => {
                // The backend's stock count after the purchase becomes the
                // new ceiling for the next one.
                self.form.product_stock_quantity = detail.product_stock_quantity;
                self.form.product_purchase_quantity = 0;
                self.detail = Some(detail.clone());
                PurchaseOutcome::Completed(detail)
            }
            None => PurchaseOutcome::Failed,
        }
    }
}
