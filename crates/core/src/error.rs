/// Domain-level failures shared by the persistence and HTTP layers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row matched the lookup key (numeric id, PDTI code or ticket number).
    #[error("{entity} '{key}' não encontrado")]
    NotFound { entity: &'static str, key: String },

    #[error("{0}")]
    Validation(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
