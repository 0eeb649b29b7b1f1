use axum::routing::get;
use axum::Router;

use crate::handlers::pdti;
use crate::state::AppState;

/// Routes mounted at `/pdti`. `{id}` is the action code, e.g. `AC.SDF.01`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pdti::list).post(pdti::create))
        .route(
            "/{id}",
            get(pdti::get_by_id).put(pdti::update).delete(pdti::delete),
        )
}
