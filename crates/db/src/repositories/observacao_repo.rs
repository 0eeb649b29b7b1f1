//! Repository for the `sustentacao_observacoes` table.

use painel_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::observacao::Observacao;

const COLUMNS: &str = "id, numero_chamado, texto, criado_em";

/// Provides CRUD operations for ticket observations.
pub struct ObservacaoRepo;

impl ObservacaoRepo {
    /// Attach an observation to a ticket. `texto` must already be trimmed.
    pub async fn create(
        conn: &mut PgConnection,
        numero_chamado: &str,
        texto: &str,
    ) -> Result<Observacao, sqlx::Error> {
        let query = format!(
            "INSERT INTO sustentacao_observacoes (numero_chamado, texto)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Observacao>(&query)
            .bind(numero_chamado)
            .bind(texto)
            .fetch_one(conn)
            .await
    }

    /// List a ticket's observations, newest first.
    pub async fn list_by_chamado(
        pool: &PgPool,
        numero_chamado: &str,
    ) -> Result<Vec<Observacao>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sustentacao_observacoes
             WHERE numero_chamado = $1
             ORDER BY criado_em DESC, id DESC"
        );
        sqlx::query_as::<_, Observacao>(&query)
            .bind(numero_chamado)
            .fetch_all(pool)
            .await
    }

    /// Replace an observation's text. Returns `None` if no row matched.
    pub async fn update_texto(
        conn: &mut PgConnection,
        id: DbId,
        texto: &str,
    ) -> Result<Option<Observacao>, sqlx::Error> {
        let query = format!(
            "UPDATE sustentacao_observacoes SET texto = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Observacao>(&query)
            .bind(id)
            .bind(texto)
            .fetch_optional(conn)
            .await
    }

    /// Delete an observation. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sustentacao_observacoes WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
