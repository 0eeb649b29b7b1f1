//! Handlers for the `/projetos` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use painel_core::error::CoreError;
use painel_core::types::DbId;
use painel_db::models::projeto::{CreateProjeto, Projeto, UpdateProjeto};
use painel_db::repositories::ProjetoRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::MensagemResponse;
use crate::state::AppState;

/// POST /api/projetos
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProjeto>,
) -> AppResult<(StatusCode, Json<Projeto>)> {
    input.validate()?;

    let mut tx = state.pool.begin().await?;
    let projeto = ProjetoRepo::create(&mut tx, &input).await?;
    tx.commit().await?;

    tracing::info!(projeto_id = projeto.id, nome = %projeto.nome, "Projeto criado");
    Ok((StatusCode::CREATED, Json(projeto)))
}

/// GET /api/projetos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Projeto>>> {
    let projetos = ProjetoRepo::list(&state.pool).await?;
    Ok(Json(projetos))
}

/// GET /api/projetos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Projeto>> {
    let projeto = ProjetoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Projeto", id)))?;
    Ok(Json(projeto))
}

/// PUT /api/projetos/{id}
///
/// Partial update: only keys present in the body are written.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateProjeto>,
) -> AppResult<Json<Projeto>> {
    let mut tx = state.pool.begin().await?;
    let mut projeto = ProjetoRepo::find_for_update(&mut tx, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Projeto", id)))?;

    input.apply_to(&mut projeto)?;
    let projeto = ProjetoRepo::save(&mut tx, &projeto).await?;
    tx.commit().await?;

    tracing::info!(projeto_id = id, status = %projeto.status, "Projeto atualizado");
    Ok(Json(projeto))
}

/// DELETE /api/projetos/{id}
///
/// Progress entries go with the project (`ON DELETE CASCADE`).
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MensagemResponse>> {
    let mut tx = state.pool.begin().await?;
    if !ProjetoRepo::delete(&mut tx, id).await? {
        return Err(AppError::Core(CoreError::not_found("Projeto", id)));
    }
    tx.commit().await?;

    tracing::info!(projeto_id = id, "Projeto excluído");
    Ok(Json(MensagemResponse::new("Projeto excluído com sucesso")))
}
