use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationErrors;

pub mod product;
pub mod purchase;

lazy_static! {
    /// Product codes are upper-case ASCII alphanumeric.
    pub(crate) static ref PRODUCT_CODE_RE: Regex = Regex::new("^[A-Z0-9]+$").unwrap();
}

/// Validation failures per field: field name to the set of error codes.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Flatten `validator` output into field-level error-code sets.
///
/// Codes are the validator codes (`length`, `range`, `regex`, ...) plus
/// the form-specific codes added by the forms themselves.
pub fn field_error_codes(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, entries)| {
            let mut codes: Vec<String> = entries.iter().map(|e| e.code.to_string()).collect();
            codes.sort();
            codes.dedup();
            (field.to_string(), codes)
        })
        .collect()
}

/// Collapse user input to a single trimmed line.
pub(crate) fn trimmed(value: &str) -> String {
    value.trim().to_string()
}
