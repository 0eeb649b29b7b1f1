//! Trimming and required-text rules for free-text fields.

use crate::error::CoreError;

/// Trim a string, mapping whitespace-only input to `None`.
pub fn trim_to_option(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Trim a required text field, rejecting absent or whitespace-only input.
pub fn require_text(field: &'static str, value: Option<&str>) -> Result<String, CoreError> {
    trim_to_option(value)
        .ok_or_else(|| CoreError::Validation(format!("Campo '{field}' é obrigatório")))
}

/// `deserialize_with` adapters that trim string fields on the way in.
pub mod de {
    use serde::{Deserialize, Deserializer};

    pub fn trimmed<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Option::<String>::deserialize(d).map(|v| super::trim_to_option(v.as_deref()))
    }

    pub fn patch_trimmed<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Option<String>>, D::Error> {
        trimmed(d).map(Some)
    }
}
