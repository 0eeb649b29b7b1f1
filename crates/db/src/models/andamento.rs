//! Progress entry (andamento) model and DTOs.

use painel_core::coercion::de as coerce;
use painel_core::types::{DbId, LocalTimestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `andamentos` table. Always owned by one project.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Andamento {
    pub id: DbId,
    pub projeto_id: DbId,
    pub data: LocalTimestamp,
    pub descricao: String,
}

/// DTO for creating a progress entry under `/projetos/{id}/andamentos`.
///
/// The owning project always comes from the path; any `projeto_id` in the
/// body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAndamento {
    pub descricao: Option<String>,
    /// Falls back to the insertion time when absent or unparsable.
    #[serde(default, deserialize_with = "coerce::datetime")]
    pub data: Option<LocalTimestamp>,
}

/// Only the description of an entry is mutable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAndamento {
    pub descricao: Option<String>,
}
