//! Terminal implementation of the shell collaborators, used by the
//! line-oriented front-end binary.

use std::cell::RefCell;
use std::collections::HashMap;

use super::{
    ErrorMessages, LoadingOverlay, Navigator, Session, SuccessMessages, TitleBar, Translator,
};
use crate::api::ApiError;
use crate::domain::user::UserProfile;

/// Bundled display strings. Only English is shipped with the terminal
/// front end; unknown keys fall back to the key itself.
fn bundled_strings() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("title.product-listing", "Product Listing"),
        ("title.product-registering", "Product Registering"),
        ("title.product-purchasing", "Product Purchasing"),
        ("message.product-saved", "The product has been saved."),
        ("message.purchase-completed", "The purchase has been recorded."),
    ])
}

/// Shell backed by stdout/stderr.
///
/// State lives in `RefCell`s: the front end is a single-threaded event
/// loop, mutation only ever happens between awaits.
pub struct TermShell {
    user: UserProfile,
    strings: HashMap<&'static str, &'static str>,
    language: RefCell<String>,
    loading_depth: RefCell<u32>,
    last_navigation: RefCell<Option<String>>,
    success_message: RefCell<Option<String>>,
    error_message: RefCell<Option<String>>,
}

impl TermShell {
    pub fn new() -> Self {
        Self::with_user(UserProfile::default())
    }

    pub fn with_user(user: UserProfile) -> Self {
        Self {
            user,
            strings: bundled_strings(),
            language: RefCell::new("en".to_string()),
            loading_depth: RefCell::new(0),
            last_navigation: RefCell::new(None),
            success_message: RefCell::new(None),
            error_message: RefCell::new(None),
        }
    }

    /// Pop the path requested by the last `navigate` call, if any.
    ///
    /// The event loop uses this as its router: a page asks the shell to
    /// navigate, the loop picks the path up and switches screens.
    pub fn take_navigation(&self) -> Option<String> {
        self.last_navigation.borrow_mut().take()
    }

    /// Last success banner text, if one is showing.
    pub fn success_message(&self) -> Option<String> {
        self.success_message.borrow().clone()
    }

    /// Last error banner text, if one is showing.
    pub fn error_message(&self) -> Option<String> {
        self.error_message.borrow().clone()
    }
}

impl Default for TermShell {
    fn default() -> Self {
        Self::new()
    }
}

impl Session for TermShell {
    fn current_user(&self) -> UserProfile {
        self.user.clone()
    }
}

impl LoadingOverlay for TermShell {
    fn start_loading(&self) {
        let mut depth = self.loading_depth.borrow_mut();
        *depth += 1;
        log::debug!("loading started (depth {depth})");
    }

    fn stop_loading(&self) {
        let mut depth = self.loading_depth.borrow_mut();
        *depth = depth.saturating_sub(1);
        log::debug!("loading stopped (depth {depth})");
    }
}

impl Navigator for TermShell {
    fn navigate(&self, path: &str) {
        log::debug!("navigate to {path}");
        *self.last_navigation.borrow_mut() = Some(path.to_string());
    }
}

impl TitleBar for TermShell {
    fn set_title(&self, path: &str) {
        let key = format!("title.{}", path.trim_start_matches('/'));
        println!("== {} ==", self.translate(&key));
    }
}

impl Translator for TermShell {
    fn set_default_language(&self, language: &str) {
        log::debug!("default language set to {language}");
    }

    fn use_language(&self, language: &str) {
        *self.language.borrow_mut() = language.to_string();
    }

    fn translate(&self, key: &str) -> String {
        match self.strings.get(key) {
            Some(value) => (*value).to_string(),
            None => key.to_string(),
        }
    }
}

impl SuccessMessages for TermShell {
    fn clear_message(&self) {
        *self.success_message.borrow_mut() = None;
    }

    fn set_message(&self, key: &str) {
        let text = self.translate(key);
        println!("{text}");
        *self.success_message.borrow_mut() = Some(text);
    }
}

impl ErrorMessages for TermShell {
    fn clear_message(&self) {
        *self.error_message.borrow_mut() = None;
    }

    fn set_page_error(&self, error: &ApiError) {
        let text = match error {
            ApiError::Status { status, .. } => format!("The server returned status {status}."),
            other => other.to_string(),
        };
        eprintln!("Error: {text}");
        *self.error_message.borrow_mut() = Some(text);
    }
}
