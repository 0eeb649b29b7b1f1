//! Field rules for projects.

use crate::error::CoreError;

/// Inclusive bounds of `progresso` (a percentage).
pub const PROGRESSO_MIN: i32 = 0;
pub const PROGRESSO_MAX: i32 = 100;

/// Reject a `progresso` outside 0..=100. Absent values are fine.
pub fn validate_progresso(progresso: Option<i32>) -> Result<(), CoreError> {
    match progresso {
        Some(p) if !(PROGRESSO_MIN..=PROGRESSO_MAX).contains(&p) => Err(CoreError::Validation(
            format!("Campo 'progresso' deve estar entre {PROGRESSO_MIN} e {PROGRESSO_MAX}"),
        )),
        _ => Ok(()),
    }
}
