//! Handlers for progress entries (`/projetos/{id}/andamentos` and
//! `/andamentos/{id}`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use painel_core::error::CoreError;
use painel_core::text::require_text;
use painel_core::types::DbId;
use painel_db::models::andamento::{Andamento, CreateAndamento, UpdateAndamento};
use painel_db::repositories::AndamentoRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::MensagemResponse;
use crate::state::AppState;

/// GET /api/projetos/{id}/andamentos
///
/// An unknown project yields an empty list.
pub async fn list_by_projeto(
    State(state): State<AppState>,
    Path(projeto_id): Path<DbId>,
) -> AppResult<Json<Vec<Andamento>>> {
    let andamentos = AndamentoRepo::list_by_projeto(&state.pool, projeto_id).await?;
    Ok(Json(andamentos))
}

/// POST /api/projetos/{id}/andamentos
pub async fn create(
    State(state): State<AppState>,
    Path(projeto_id): Path<DbId>,
    AppJson(input): AppJson<CreateAndamento>,
) -> AppResult<(StatusCode, Json<Andamento>)> {
    let descricao = require_text("descricao", input.descricao.as_deref())?;

    let mut tx = state.pool.begin().await?;
    let andamento = AndamentoRepo::create(&mut tx, projeto_id, &descricao, input.data).await?;
    tx.commit().await?;

    tracing::info!(andamento_id = andamento.id, projeto_id, "Andamento registrado");
    Ok((StatusCode::CREATED, Json(andamento)))
}

/// PUT /api/andamentos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateAndamento>,
) -> AppResult<Json<Andamento>> {
    let descricao = require_text("descricao", input.descricao.as_deref())?;

    let mut tx = state.pool.begin().await?;
    let andamento = AndamentoRepo::update_descricao(&mut tx, id, &descricao)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Andamento", id)))?;
    tx.commit().await?;

    Ok(Json(andamento))
}

/// DELETE /api/andamentos/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MensagemResponse>> {
    let mut tx = state.pool.begin().await?;
    if !AndamentoRepo::delete(&mut tx, id).await? {
        return Err(AppError::Core(CoreError::not_found("Andamento", id)));
    }
    tx.commit().await?;

    tracing::info!(andamento_id = id, "Andamento excluído");
    Ok(Json(MensagemResponse::new("Andamento excluído com sucesso")))
}
