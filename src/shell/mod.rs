//! Capability traits for the UI shell that surrounds the pages.
//!
//! The pages never reach into a service registry: every collaborator is
//! passed explicitly as a trait-bound parameter, and a single shell value
//! usually implements the whole set.

use crate::api::ApiError;
use crate::domain::user::UserProfile;

pub mod term;

#[cfg(test)]
pub mod mock;

pub use term::TermShell;

/// Access to the signed-in user's account attributes.
pub trait Session {
    fn current_user(&self) -> UserProfile;
}

/// Full-screen progress indicator shown while a request is in flight.
///
/// Calls are counted: every `start_loading` is balanced by exactly one
/// `stop_loading`.
pub trait LoadingOverlay {
    fn start_loading(&self);
    fn stop_loading(&self);
}

/// Moves the shell to another screen.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Window or page title derived from the current navigation path.
pub trait TitleBar {
    fn set_title(&self, path: &str);
}

/// Localized string lookup.
pub trait Translator {
    /// Language used when the active one has no entry for a key.
    fn set_default_language(&self, language: &str);
    /// Switch the active language.
    fn use_language(&self, language: &str);
    /// Resolve a translation key to a display string.
    fn translate(&self, key: &str) -> String;
}

/// Page-level success banner.
pub trait SuccessMessages {
    fn clear_message(&self);
    /// Show the message behind the given translation key.
    fn set_message(&self, key: &str);
}

/// Page-level error banner.
pub trait ErrorMessages {
    fn clear_message(&self);
    /// Show an error derived from a failed backend call.
    fn set_page_error(&self, error: &ApiError);
}
