use axum::routing::put;
use axum::Router;

use crate::handlers::andamento;
use crate::state::AppState;

/// Routes mounted at `/andamentos`.
///
/// ```text
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", put(andamento::update).delete(andamento::delete))
}
