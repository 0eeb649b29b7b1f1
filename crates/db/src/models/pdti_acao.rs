//! PDTI action model and DTOs.

use chrono::NaiveDate;
use painel_core::error::CoreError;
use painel_core::patch::{apply_required, deserialize_some};
use painel_core::pdti::{data_conclusao_atualizada, data_conclusao_inicial, situacao_inicial};
use painel_core::text::require_text;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `pdti_acoes` table, keyed by its plan code (e.g. `AC.SDF.01`).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PdtiAcao {
    pub id: String,
    pub descricao: String,
    pub situacao: String,
    pub tipo: String,
    pub data_conclusao: Option<NaiveDate>,
}

/// DTO for creating a PDTI action. The `id` is chosen by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePdtiAcao {
    pub id: String,
    pub descricao: String,
    pub situacao: Option<String>,
    pub tipo: String,
}

impl CreatePdtiAcao {
    /// Resolve defaults and the derived completion date into a full row.
    pub fn into_acao(self, hoje: NaiveDate) -> Result<PdtiAcao, CoreError> {
        let id = require_text("id", Some(&self.id))?;
        let situacao = situacao_inicial(self.situacao.as_deref()).to_string();
        let data_conclusao = data_conclusao_inicial(&situacao, hoje);
        Ok(PdtiAcao {
            id,
            descricao: self.descricao,
            situacao,
            tipo: self.tipo,
            data_conclusao,
        })
    }
}

/// DTO for partially updating a PDTI action.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePdtiAcao {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub descricao: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub situacao: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub tipo: Option<Option<String>>,
}

impl UpdatePdtiAcao {
    /// Apply the patch; a present `situacao` re-derives `data_conclusao`.
    pub fn apply_to(&self, acao: &mut PdtiAcao, hoje: NaiveDate) -> Result<(), CoreError> {
        apply_required(&mut acao.descricao, &self.descricao, "descricao")?;
        apply_required(&mut acao.tipo, &self.tipo, "tipo")?;
        if self.situacao.is_some() {
            apply_required(&mut acao.situacao, &self.situacao, "situacao")?;
            acao.data_conclusao = data_conclusao_atualizada(&acao.situacao, acao.data_conclusao, hoje);
        }
        Ok(())
    }
}
