//! Handlers for the `/pdti` resource (IT-plan actions keyed by code).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use painel_core::error::CoreError;
use painel_core::pdti::hoje;
use painel_db::models::pdti_acao::{CreatePdtiAcao, PdtiAcao, UpdatePdtiAcao};
use painel_db::repositories::PdtiAcaoRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::MensagemResponse;
use crate::state::AppState;

/// GET /api/pdti
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PdtiAcao>>> {
    let acoes = PdtiAcaoRepo::list(&state.pool).await?;
    Ok(Json(acoes))
}

/// GET /api/pdti/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<PdtiAcao>> {
    let acao = PdtiAcaoRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Ação PDTI", &id)))?;
    Ok(Json(acao))
}

/// POST /api/pdti
///
/// A duplicate code is rejected by the primary key.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePdtiAcao>,
) -> AppResult<(StatusCode, Json<PdtiAcao>)> {
    let acao = input.into_acao(hoje())?;

    let mut tx = state.pool.begin().await?;
    let acao = PdtiAcaoRepo::insert(&mut tx, &acao).await?;
    tx.commit().await?;

    tracing::info!(acao_id = %acao.id, situacao = %acao.situacao, "Ação PDTI criada");
    Ok((StatusCode::CREATED, Json(acao)))
}

/// PUT /api/pdti/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<UpdatePdtiAcao>,
) -> AppResult<Json<PdtiAcao>> {
    let mut tx = state.pool.begin().await?;
    let mut acao = PdtiAcaoRepo::find_for_update(&mut tx, &id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Ação PDTI", &id)))?;

    input.apply_to(&mut acao, hoje())?;
    let acao = PdtiAcaoRepo::save(&mut tx, &acao).await?;
    tx.commit().await?;

    tracing::info!(
        acao_id = %acao.id,
        situacao = %acao.situacao,
        data_conclusao = ?acao.data_conclusao,
        "Ação PDTI atualizada"
    );
    Ok(Json(acao))
}

/// DELETE /api/pdti/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MensagemResponse>> {
    let mut tx = state.pool.begin().await?;
    if !PdtiAcaoRepo::delete(&mut tx, &id).await? {
        return Err(AppError::Core(CoreError::not_found("Ação PDTI", &id)));
    }
    tx.commit().await?;

    tracing::info!(acao_id = %id, "Ação PDTI excluída");
    Ok(Json(MensagemResponse::new("Ação PDTI excluída com sucesso")))
}
