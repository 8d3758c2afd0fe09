//! Product registering screen, in "new" and "edit" modes.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::api::{GenreReader, ProductReader, ProductWriter};
use crate::domain::product::Product;
use crate::forms::FieldErrors;
use crate::forms::product::ProductForm;
use crate::services::{ServiceError, ServiceResult, products, setup_language};
use crate::shell::{
    ErrorMessages, Navigator, Session, SuccessMessages, TitleBar, Translator,
};
use crate::{PATH_PRODUCT_LISTING, PATH_PRODUCT_REGISTERING};

/// Result of a save attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Validation failed; nothing was sent to the backend.
    Invalid(FieldErrors),
    /// The backend rejected the save; the error banner carries the detail.
    Failed,
    /// The product was saved and the shell navigated back to the listing.
    Saved(Product),
}

/// Form and display state of the registering screen.
#[derive(Debug, Default)]
pub struct RegisteringPage {
    /// Backend sequence number of the product being edited; `None` in
    /// "new" mode.
    product_seq: Option<i64>,
    pub form: ProductForm,
    /// Genre facet values for the genre select.
    pub genres: Vec<String>,
}

impl RegisteringPage {
    /// Blank form for registering a new product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the page edits an existing product.
    pub fn is_edit(&self) -> bool {
        self.product_seq.is_some()
    }

    /// Load the genre facet, and in edit mode the product itself.
    ///
    /// A failed product load leaves the form blank; the error banner
    /// already carries the reason.
    pub async fn on_init<A, S>(&mut self, api: &A, shell: &S, product_code: Option<&str>)
    where
        A: GenreReader + ProductReader + ?Sized,
        S: Session + Translator + SuccessMessages + ErrorMessages + ?Sized,
    {
        self.genres = products::get_genres(api, shell).await;
        if let Some(code) = product_code {
            if let Some(product) = products::get_product(api, shell, code).await {
                self.product_seq = product.product_seq;
                self.form = ProductForm::from_product(&product);
            }
        }
        setup_language(shell);
    }

    /// Refresh the window title once the view is in place.
    pub fn on_view_ready<S>(&self, shell: &S)
    where
        S: TitleBar + ?Sized,
    {
        shell.set_title(PATH_PRODUCT_REGISTERING);
    }

    /// Validate and save the form, creating or updating as appropriate.
    pub async fn save<A, S>(&mut self, api: &A, shell: &S) -> SaveOutcome
    where
        A: ProductWriter + ?Sized,
        S: Navigator + SuccessMessages + ErrorMessages + ?Sized,
    {
        let payload = match self.form.clone().into_product(self.product_seq) {
            Ok(product) => product,
            Err(errors) => return SaveOutcome::Invalid(errors),
        };

        let saved = match self.product_seq {
            Some(_) => products::update_product(api, shell, &payload).await,
            None => products::create_product(api, shell, &payload).await,
        };

        match saved {
            Some(product) => {
                self.product_seq = product.product_seq;
                shell.navigate(PATH_PRODUCT_LISTING);
                SaveOutcome::Saved(product)
            }
            None => SaveOutcome::Failed,
        }
    }

    /// Read an image file into the form's image field as a data URL.
    pub async fn attach_image(&mut self, path: &Path) -> ServiceResult<()> {
        self.form.product_image = Some(read_image_data_url(path).await?);
        Ok(())
    }
}

/// Read an image file and encode it as a `data:` URL.
pub async fn read_image_data_url(path: &Path) -> ServiceResult<String> {
    let mime = mime_guess::from_path(path)
        .first()
        .filter(|mime| mime.type_() == mime_guess::mime::IMAGE)
        .ok_or_else(|| ServiceError::NotAnImage(path.display().to_string()))?;

    let bytes = tokio::fs::read(path).await?;
    Ok(format!(
        "data:{};base64,{}",
        mime.essence_str(),
        BASE64.encode(bytes)
    ))
}
