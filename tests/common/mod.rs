//! Helpers for integration tests.

use std::cell::RefCell;

use catalog_admin::api::ApiError;
use catalog_admin::domain::user::UserProfile;
use catalog_admin::shell::{
    ErrorMessages, LoadingOverlay, Navigator, Session, SuccessMessages, TitleBar, Translator,
};

/// Shell that records every collaborator call for later assertions.
#[derive(Default)]
pub struct RecordingShell {
    pub loading_starts: RefCell<u32>,
    pub loading_stops: RefCell<u32>,
    pub navigations: RefCell<Vec<String>>,
    pub titles: RefCell<Vec<String>>,
    pub languages: RefCell<Vec<String>>,
    pub success_keys: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<String>>,
}

impl RecordingShell {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Session for RecordingShell {
    fn current_user(&self) -> UserProfile {
        UserProfile::default()
    }
}

impl LoadingOverlay for RecordingShell {
    fn start_loading(&self) {
        *self.loading_starts.borrow_mut() += 1;
    }

    fn stop_loading(&self) {
        *self.loading_stops.borrow_mut() += 1;
    }
}

impl Navigator for RecordingShell {
    fn navigate(&self, path: &str) {
        self.navigations.borrow_mut().push(path.to_string());
    }
}

impl TitleBar for RecordingShell {
    fn set_title(&self, path: &str) {
        self.titles.borrow_mut().push(path.to_string());
    }
}

impl Translator for RecordingShell {
    fn set_default_language(&self, _language: &str) {}

    fn use_language(&self, language: &str) {
        self.languages.borrow_mut().push(language.to_string());
    }

    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

impl SuccessMessages for RecordingShell {
    fn clear_message(&self) {}

    fn set_message(&self, key: &str) {
        self.success_keys.borrow_mut().push(key.to_string());
    }
}

impl ErrorMessages for RecordingShell {
    fn clear_message(&self) {}

    fn set_page_error(&self, error: &ApiError) {
        self.errors.borrow_mut().push(error.to_string());
    }
}
