//! Project entity model and DTOs.

use chrono::NaiveDate;
use painel_core::coercion::de as coerce;
use painel_core::error::CoreError;
use painel_core::patch::{apply, apply_required, deserialize_some};
use painel_core::projeto::validate_progresso;
use painel_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projetos` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Projeto {
    pub id: DbId,
    pub nome: String,
    pub tipo: String,
    pub coordenacao: String,
    pub status: String,
    pub descricao: Option<String>,
    pub inicio: Option<NaiveDate>,
    pub fim: Option<NaiveDate>,
    pub prioridade: Option<String>,
    pub progresso: Option<i32>,
    #[serde(rename = "totalSprints")]
    pub total_sprints: Option<i32>,
    #[serde(rename = "sprintsConcluidas")]
    pub sprints_concluidas: Option<i32>,
    pub responsavel: Option<String>,
    pub orcamento: Option<f64>,
    /// Comma-separated member names, stored verbatim.
    pub equipe: Option<String>,
    pub rag: Option<String>,
    pub riscos: Option<String>,
    pub qualidade: Option<i32>,
    pub internalizacao: bool,
}

/// DTO for creating a new project. Unknown keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjeto {
    pub nome: String,
    pub tipo: String,
    pub coordenacao: String,
    pub status: String,
    pub descricao: Option<String>,
    #[serde(default, deserialize_with = "coerce::date")]
    pub inicio: Option<NaiveDate>,
    #[serde(default, deserialize_with = "coerce::date")]
    pub fim: Option<NaiveDate>,
    pub prioridade: Option<String>,
    #[serde(default, deserialize_with = "coerce::int")]
    pub progresso: Option<i32>,
    #[serde(
        default,
        rename = "totalSprints",
        alias = "total_sprints",
        deserialize_with = "coerce::int"
    )]
    pub total_sprints: Option<i32>,
    #[serde(
        default,
        rename = "sprintsConcluidas",
        alias = "sprints_concluidas",
        deserialize_with = "coerce::int"
    )]
    pub sprints_concluidas: Option<i32>,
    pub responsavel: Option<String>,
    #[serde(default, deserialize_with = "coerce::decimal")]
    pub orcamento: Option<f64>,
    pub equipe: Option<String>,
    pub rag: Option<String>,
    pub riscos: Option<String>,
    #[serde(default, deserialize_with = "coerce::int")]
    pub qualidade: Option<i32>,
    /// Defaults to `false`; accepts booleans, numbers and truthy tokens.
    #[serde(default, deserialize_with = "coerce::boolean")]
    pub internalizacao: bool,
}

impl CreateProjeto {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_progresso(self.progresso)
    }
}

/// DTO for partially updating a project.
///
/// An absent key leaves the column untouched; a present key (even `null`)
/// overwrites it. `null` on a required column is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProjeto {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub nome: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub tipo: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub coordenacao: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub status: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub descricao: Option<Option<String>>,
    #[serde(default, deserialize_with = "coerce::patch_date")]
    pub inicio: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "coerce::patch_date")]
    pub fim: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub prioridade: Option<Option<String>>,
    #[serde(default, deserialize_with = "coerce::patch_int")]
    pub progresso: Option<Option<i32>>,
    #[serde(
        default,
        rename = "totalSprints",
        alias = "total_sprints",
        deserialize_with = "coerce::patch_int"
    )]
    pub total_sprints: Option<Option<i32>>,
    #[serde(
        default,
        rename = "sprintsConcluidas",
        alias = "sprints_concluidas",
        deserialize_with = "coerce::patch_int"
    )]
    pub sprints_concluidas: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub responsavel: Option<Option<String>>,
    #[serde(default, deserialize_with = "coerce::patch_decimal")]
    pub orcamento: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub equipe: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub rag: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub riscos: Option<Option<String>>,
    #[serde(default, deserialize_with = "coerce::patch_int")]
    pub qualidade: Option<Option<i32>>,
    #[serde(default, deserialize_with = "coerce::patch_boolean")]
    pub internalizacao: Option<bool>,
}

impl UpdateProjeto {
    /// Apply the present fields onto `projeto`, then re-validate it.
    pub fn apply_to(&self, projeto: &mut Projeto) -> Result<(), CoreError> {
        apply_required(&mut projeto.nome, &self.nome, "nome")?;
        apply_required(&mut projeto.tipo, &self.tipo, "tipo")?;
        apply_required(&mut projeto.coordenacao, &self.coordenacao, "coordenacao")?;
        apply_required(&mut projeto.status, &self.status, "status")?;

        apply(&mut projeto.descricao, &self.descricao);
        apply(&mut projeto.inicio, &self.inicio);
        apply(&mut projeto.fim, &self.fim);
        apply(&mut projeto.prioridade, &self.prioridade);
        apply(&mut projeto.progresso, &self.progresso);
        apply(&mut projeto.total_sprints, &self.total_sprints);
        apply(&mut projeto.sprints_concluidas, &self.sprints_concluidas);
        apply(&mut projeto.responsavel, &self.responsavel);
        apply(&mut projeto.orcamento, &self.orcamento);
        apply(&mut projeto.equipe, &self.equipe);
        apply(&mut projeto.rag, &self.rag);
        apply(&mut projeto.riscos, &self.riscos);
        apply(&mut projeto.qualidade, &self.qualidade);
        apply(&mut projeto.internalizacao, &self.internalizacao);

        validate_progresso(projeto.progresso)
    }
}
