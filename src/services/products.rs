//! Product endpoints wrapped with the page banner contract: both banners
//! are cleared before each call and any failure lands in the error banner.

use crate::api::{GenreReader, ProductReader, ProductWriter};
use crate::domain::product::Product;
use crate::services::clear_messages;
use crate::shell::{ErrorMessages, SuccessMessages};

/// Translation key shown after a successful create or update.
pub const MSG_PRODUCT_SAVED: &str = "message.product-saved";

/// Fetch the genre facet values; failures resolve to an empty list.
pub async fn get_genres<A, S>(api: &A, shell: &S) -> Vec<String>
where
    A: GenreReader + ?Sized,
    S: SuccessMessages + ErrorMessages + ?Sized,
{
    clear_messages(shell);
    match api.list_genres().await {
        Ok(genres) => genres,
        Err(error) => {
            shell.set_page_error(&error);
            Vec::new()
        }
    }
}

/// Fetch a product by code; any failure resolves to `None`.
pub async fn get_product<A, S>(api: &A, shell: &S, product_code: &str) -> Option<Product>
where
    A: ProductReader + ?Sized,
    S: SuccessMessages + ErrorMessages + ?Sized,
{
    clear_messages(shell);
    match api.get_product(product_code).await {
        Ok(product) => Some(product),
        Err(error) => {
            shell.set_page_error(&error);
            None
        }
    }
}

/// Register a new product; success raises the saved banner.
pub async fn create_product<A, S>(api: &A, shell: &S, product: &Product) -> Option<Product>
where
    A: ProductWriter + ?Sized,
    S: SuccessMessages + ErrorMessages + ?Sized,
{
    clear_messages(shell);
    match api.create_product(product).await {
        Ok(saved) => {
            shell.set_message(MSG_PRODUCT_SAVED);
            Some(saved)
        }
        Err(error) => {
            shell.set_page_error(&error);
            None
        }
    }
}

/// Update an existing product; success raises the saved banner.
pub async fn update_product<A, S>(api: &A, shell: &S, product: &Product) -> Option<Product>
where
    A: ProductWriter + ?Sized,
    S: SuccessMessages + ErrorMessages + ?Sized,
{
    clear_messages(shell);
    match api.update_product(product).await {
        Ok(saved) => {
            shell.set_message(MSG_PRODUCT_SAVED);
            Some(saved)
        }
        Err(error) => {
            shell.set_page_error(&error);
            None
        }
    }
}
