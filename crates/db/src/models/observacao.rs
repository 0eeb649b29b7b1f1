//! Support ticket observation model and DTOs.

use painel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `sustentacao_observacoes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Observacao {
    pub id: DbId,
    pub numero_chamado: String,
    pub texto: String,
    pub criado_em: Timestamp,
}

/// DTO for posting an observation on a ticket.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateObservacao {
    pub texto: Option<String>,
}

/// DTO for editing an observation's text.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateObservacao {
    pub texto: Option<String>,
}
