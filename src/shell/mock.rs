use mockall::mock;

use super::{
    ErrorMessages, LoadingOverlay, Navigator, Session, SuccessMessages, TitleBar, Translator,
};
use crate::api::ApiError;
use crate::domain::user::UserProfile;

mock! {
    pub Session {}

    impl Session for Session {
        fn current_user(&self) -> UserProfile;
    }
}

mock! {
    pub LoadingOverlay {}

    impl LoadingOverlay for LoadingOverlay {
        fn start_loading(&self);
        fn stop_loading(&self);
    }
}

mock! {
    pub Navigator {}

    impl Navigator for Navigator {
        fn navigate(&self, path: &str);
    }
}

mock! {
    pub TitleBar {}

    impl TitleBar for TitleBar {
        fn set_title(&self, path: &str);
    }
}

mock! {
    pub Translator {}

    impl Translator for Translator {
        fn set_default_language(&self, language: &str);
        fn use_language(&self, language: &str);
        fn translate(&self, key: &str) -> String;
    }
}

mock! {
    pub SuccessMessages {}

    impl SuccessMessages for SuccessMessages {
        fn clear_message(&self);
        fn set_message(&self, key: &str);
    }
}

mock! {
    pub ErrorMessages {}

    impl ErrorMessages for ErrorMessages {
        fn clear_message(&self);
        fn set_page_error(&self, error: &ApiError);
    }
}
