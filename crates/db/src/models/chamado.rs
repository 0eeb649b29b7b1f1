//! Support ticket (chamado de sustentação) model and DTOs.

use painel_core::coercion::de as coerce;
use painel_core::patch::apply;
use painel_core::text::de as text;
use painel_core::types::{DbId, LocalTimestamp, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `sustentacao_chamados` table.
///
/// `numero_chamado` is the public key used in every route; `id` is internal.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Chamado {
    pub id: DbId,
    pub numero_chamado: String,
    pub projeto: Option<String>,
    pub desenvolvedor: Option<String>,
    pub solicitante: Option<String>,
    pub status: Option<String>,
    pub data_chamado: Option<LocalTimestamp>,
    pub descricao: Option<String>,
    pub observacao: Option<String>,
    pub criado_em: Timestamp,
    pub atualizado_em: Timestamp,
}

/// DTO for opening a ticket. Text fields are trimmed; blank becomes `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChamado {
    #[serde(default, deserialize_with = "text::trimmed")]
    pub numero_chamado: Option<String>,
    #[serde(default, deserialize_with = "text::trimmed")]
    pub projeto: Option<String>,
    #[serde(default, deserialize_with = "text::trimmed")]
    pub desenvolvedor: Option<String>,
    #[serde(default, deserialize_with = "text::trimmed")]
    pub solicitante: Option<String>,
    #[serde(default, deserialize_with = "text::trimmed")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "coerce::datetime")]
    pub data_chamado: Option<LocalTimestamp>,
    #[serde(default, deserialize_with = "text::trimmed")]
    pub descricao: Option<String>,
    #[serde(default, deserialize_with = "text::trimmed")]
    pub observacao: Option<String>,
}

/// DTO for partially updating a ticket addressed by its number.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateChamado {
    #[serde(default, deserialize_with = "text::patch_trimmed")]
    pub projeto: Option<Option<String>>,
    #[serde(default, deserialize_with = "text::patch_trimmed")]
    pub desenvolvedor: Option<Option<String>>,
    #[serde(default, deserialize_with = "text::patch_trimmed")]
    pub solicitante: Option<Option<String>>,
    #[serde(default, deserialize_with = "text::patch_trimmed")]
    pub status: Option<Option<String>>,
    #[serde(default, deserialize_with = "coerce::patch_datetime")]
    pub data_chamado: Option<Option<LocalTimestamp>>,
    #[serde(default, deserialize_with = "text::patch_trimmed")]
    pub descricao: Option<Option<String>>,
    #[serde(default, deserialize_with = "text::patch_trimmed")]
    pub observacao: Option<Option<String>>,
}

impl UpdateChamado {
    pub fn apply_to(&self, chamado: &mut Chamado) {
        apply(&mut chamado.projeto, &self.projeto);
        apply(&mut chamado.desenvolvedor, &self.desenvolvedor);
        apply(&mut chamado.solicitante, &self.solicitante);
        apply(&mut chamado.status, &self.status);
        apply(&mut chamado.data_chamado, &self.data_chamado);
        apply(&mut chamado.descricao, &self.descricao);
        apply(&mut chamado.observacao, &self.observacao);
    }
}
