//! Helpers for partial-update DTOs.
//!
//! Update DTOs model every field as `Option<Option<T>>`: the outer `None`
//! means the key was absent (leave the column alone), `Some(inner)` means the
//! key was present and `inner` is the new value, `null` included.

use serde::{Deserialize, Deserializer};

use crate::error::CoreError;

/// Deserialize any present value (including `null`) as `Some(..)`.
///
/// Pair with `#[serde(default)]` so an absent key stays `None`.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Overwrite `target` when the patch carries a value.
pub fn apply<T: Clone>(target: &mut T, patch: &Option<T>) {
    if let Some(value) = patch {
        *target = value.clone();
    }
}

/// Overwrite a NOT NULL `target`; an explicit `null` is a validation error.
pub fn apply_required<T: Clone>(
    target: &mut T,
    patch: &Option<Option<T>>,
    field: &'static str,
) -> Result<(), CoreError> {
    match patch {
        None => Ok(()),
        Some(Some(value)) => {
            *target = value.clone();
            Ok(())
        }
        Some(None) => Err(CoreError::Validation(format!(
            "Campo '{field}' não pode ser nulo"
        ))),
    }
}
