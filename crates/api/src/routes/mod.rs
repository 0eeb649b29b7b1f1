pub mod andamento;
pub mod health;
pub mod pdti;
pub mod projeto;
pub mod sustentacao;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /projetos      projects, plus nested /{id}/andamentos
/// /andamentos    progress entry update/delete by id
/// /pdti          IT-plan actions
/// /sustentacao   support tickets and their observations
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projetos", projeto::router())
        .nest("/andamentos", andamento::router())
        .nest("/pdti", pdti::router())
        .nest("/sustentacao", sustentacao::router())
}
