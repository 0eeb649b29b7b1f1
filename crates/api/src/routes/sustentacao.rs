//! Route definitions for the `/sustentacao` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{observacao, sustentacao};
use crate::state::AppState;

/// Routes mounted at `/sustentacao`.
///
/// The static `/observacoes/{id}` segment takes priority over `/{numero}`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /{numero}                -> get_by_numero
/// PUT    /{numero}                -> update
/// DELETE /{numero}                -> delete
///
/// GET    /{numero}/observacoes    -> observacao::list_by_chamado
/// POST   /{numero}/observacoes    -> observacao::create
/// PUT    /observacoes/{id}        -> observacao::update
/// DELETE /observacoes/{id}        -> observacao::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sustentacao::list).post(sustentacao::create))
        .route(
            "/observacoes/{id}",
            put(observacao::update).delete(observacao::delete),
        )
        .route(
            "/{numero}",
            get(sustentacao::get_by_numero)
                .put(sustentacao::update)
                .delete(sustentacao::delete),
        )
        .route(
            "/{numero}/observacoes",
            get(observacao::list_by_chamado).post(observacao::create),
        )
}
