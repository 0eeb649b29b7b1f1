//! Handlers for support tickets, addressed by `numero_chamado`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use painel_core::error::CoreError;
use painel_core::text::require_text;
use painel_db::models::chamado::{Chamado, CreateChamado, UpdateChamado};
use painel_db::repositories::ChamadoRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::MensagemResponse;
use crate::state::AppState;

/// GET /api/sustentacao
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Chamado>>> {
    let chamados = ChamadoRepo::list(&state.pool).await?;
    Ok(Json(chamados))
}

/// GET /api/sustentacao/{numero}
pub async fn get_by_numero(
    State(state): State<AppState>,
    Path(numero): Path<String>,
) -> AppResult<Json<Chamado>> {
    let chamado = ChamadoRepo::find_by_numero(&state.pool, &numero)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Chamado", &numero)))?;
    Ok(Json(chamado))
}

/// POST /api/sustentacao
///
/// `numero_chamado` is required; a repeated number violates
/// `uq_sustentacao_chamados_numero`.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateChamado>,
) -> AppResult<(StatusCode, Json<Chamado>)> {
    let numero = require_text("numero_chamado", input.numero_chamado.as_deref())?;

    let mut tx = state.pool.begin().await?;
    let chamado = ChamadoRepo::create(&mut tx, &numero, &input).await?;
    tx.commit().await?;

    tracing::info!(chamado_id = chamado.id, numero_chamado = %numero, "Chamado aberto");
    Ok((StatusCode::CREATED, Json(chamado)))
}

/// PUT /api/sustentacao/{numero}
pub async fn update(
    State(state): State<AppState>,
    Path(numero): Path<String>,
    AppJson(input): AppJson<UpdateChamado>,
) -> AppResult<Json<Chamado>> {
    let mut tx = state.pool.begin().await?;
    let mut chamado = ChamadoRepo::find_for_update(&mut tx, &numero)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Chamado", &numero)))?;

    input.apply_to(&mut chamado);
    let chamado = ChamadoRepo::save(&mut tx, &chamado).await?;
    tx.commit().await?;

    tracing::info!(numero_chamado = %numero, status = ?chamado.status, "Chamado atualizado");
    Ok(Json(chamado))
}

/// DELETE /api/sustentacao/{numero}
///
/// Observations are removed with the ticket.
pub async fn delete(
    State(state): State<AppState>,
    Path(numero): Path<String>,
) -> AppResult<Json<MensagemResponse>> {
    let mut tx = state.pool.begin().await?;
    if !ChamadoRepo::delete_by_numero(&mut tx, &numero).await? {
        return Err(AppError::Core(CoreError::not_found("Chamado", &numero)));
    }
    tx.commit().await?;

    tracing::info!(numero_chamado = %numero, "Chamado excluído");
    Ok(Json(MensagemResponse::new("Chamado excluído com sucesso")))
}
