use thiserror::Error;

use crate::shell::{ErrorMessages, Session, SuccessMessages, Translator};

pub mod listing;
pub mod products;
pub mod purchases;
pub mod purchasing;
pub mod registering;
pub mod search;

/// Result type returned by fallible page operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced directly to the caller rather than through the shell's
/// banners.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The selected file could not be read.
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    /// The selected file is not a recognized image type.
    #[error("`{0}` is not a recognized image file")]
    NotAnImage(String),
}

/// Apply the signed-in user's language to the translator.
pub fn setup_language<S>(shell: &S)
where
    S: Session + Translator + ?Sized,
{
    let user = shell.current_user();
    shell.set_default_language(&user.user_language);
    shell.use_language(&user.user_language);
}

/// Clear both page banners ahead of a backend call.
pub(crate) fn clear_messages<S>(shell: &S)
where
    S: SuccessMessages + ErrorMessages + ?Sized,
{
    SuccessMessages::clear_message(shell);
    ErrorMessages::clear_message(shell);
}
