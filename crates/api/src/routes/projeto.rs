//! Route definitions for the `/projetos` resource.
//!
//! Progress entries are listed and created under the owning project.

use axum::routing::get;
use axum::Router;

use crate::handlers::{andamento, projeto};
use crate::state::AppState;

/// Routes mounted at `/projetos`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
///
/// GET    /{id}/andamentos   -> andamento::list_by_projeto
/// POST   /{id}/andamentos   -> andamento::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projeto::list).post(projeto::create))
        .route(
            "/{id}",
            get(projeto::get_by_id)
                .put(projeto::update)
                .delete(projeto::delete),
        )
        .route(
            "/{id}/andamentos",
            get(andamento::list_by_projeto).post(andamento::create),
        )
}
