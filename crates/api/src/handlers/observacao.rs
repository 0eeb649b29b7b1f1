//! Handlers for ticket observations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use painel_core::error::CoreError;
use painel_core::text::require_text;
use painel_core::types::DbId;
use painel_db::models::observacao::{CreateObservacao, Observacao, UpdateObservacao};
use painel_db::repositories::{ChamadoRepo, ObservacaoRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// GET /api/sustentacao/{numero}/observacoes
pub async fn list_by_chamado(
    State(state): State<AppState>,
    Path(numero): Path<String>,
) -> AppResult<Json<Vec<Observacao>>> {
    if !ChamadoRepo::exists(&state.pool, &numero).await? {
        return Err(AppError::Core(CoreError::not_found("Chamado", &numero)));
    }
    let observacoes = ObservacaoRepo::list_by_chamado(&state.pool, &numero).await?;
    Ok(Json(observacoes))
}

/// POST /api/sustentacao/{numero}/observacoes
pub async fn create(
    State(state): State<AppState>,
    Path(numero): Path<String>,
    AppJson(input): AppJson<CreateObservacao>,
) -> AppResult<(StatusCode, Json<Observacao>)> {
    let mut tx = state.pool.begin().await?;
    if !ChamadoRepo::exists(&mut *tx, &numero).await? {
        return Err(AppError::Core(CoreError::not_found("Chamado", &numero)));
    }

    let texto = require_text("texto", input.texto.as_deref())?;
    let observacao = ObservacaoRepo::create(&mut tx, &numero, &texto).await?;
    tx.commit().await?;

    tracing::info!(observacao_id = observacao.id, numero_chamado = %numero, "Observação registrada");
    Ok((StatusCode::CREATED, Json(observacao)))
}

/// PUT /api/sustentacao/observacoes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateObservacao>,
) -> AppResult<Json<Observacao>> {
    let texto = require_text("texto", input.texto.as_deref())?;

    let mut tx = state.pool.begin().await?;
    let observacao = ObservacaoRepo::update_texto(&mut tx, id, &texto)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Observação", id)))?;
    tx.commit().await?;

    Ok(Json(observacao))
}

/// DELETE /api/sustentacao/observacoes/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    if !ObservacaoRepo::delete(&mut tx, id).await? {
        return Err(AppError::Core(CoreError::not_found("Observação", id)));
    }
    tx.commit().await?;

    tracing::info!(observacao_id = id, "Observação excluída");
    Ok(StatusCode::NO_CONTENT)
}
