use serde::{Deserialize, Serialize};

/// Account attributes of the signed-in user consumed by the pages.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// ISO 639-1 language code, e.g. `en` or `ja`.
    pub user_language: String,
    /// BCP 47 locale tag, e.g. `en-US`.
    pub user_locale: String,
    /// ISO 4217 currency code, e.g. `USD`.
    pub user_currency: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            user_language: "en".to_string(),
            user_locale: "en-US".to_string(),
            user_currency: "USD".to_string(),
        }
    }
}
