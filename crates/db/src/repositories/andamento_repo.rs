//! Repository for the `andamentos` table.

use painel_core::types::{DbId, LocalTimestamp};
use sqlx::{PgConnection, PgPool};

use crate::models::andamento::Andamento;

const COLUMNS: &str = "id, projeto_id, data, descricao";

/// Provides CRUD operations for project progress entries.
pub struct AndamentoRepo;

impl AndamentoRepo {
    /// Insert an entry for `projeto_id`. A `None` timestamp means "now" (UTC
    /// wall clock).
    ///
    /// The parent project is not checked here; a dangling `projeto_id`
    /// surfaces as a foreign-key violation.
    pub async fn create(
        conn: &mut PgConnection,
        projeto_id: DbId,
        descricao: &str,
        data: Option<LocalTimestamp>,
    ) -> Result<Andamento, sqlx::Error> {
        let query = format!(
            "INSERT INTO andamentos (projeto_id, descricao, data)
             VALUES ($1, $2, COALESCE($3, NOW() AT TIME ZONE 'UTC'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Andamento>(&query)
            .bind(projeto_id)
            .bind(descricao)
            .bind(data)
            .fetch_one(conn)
            .await
    }

    /// Find an entry by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Andamento>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM andamentos WHERE id = $1");
        sqlx::query_as::<_, Andamento>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's entries, most recent first.
    pub async fn list_by_projeto(
        pool: &PgPool,
        projeto_id: DbId,
    ) -> Result<Vec<Andamento>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM andamentos
             WHERE projeto_id = $1
             ORDER BY data DESC, id DESC"
        );
        sqlx::query_as::<_, Andamento>(&query)
            .bind(projeto_id)
            .fetch_all(pool)
            .await
    }

    /// Replace an entry's description. Returns `None` if no row matched.
    pub async fn update_descricao(
        conn: &mut PgConnection,
        id: DbId,
        descricao: &str,
    ) -> Result<Option<Andamento>, sqlx::Error> {
        let query = format!(
            "UPDATE andamentos SET descricao = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Andamento>(&query)
            .bind(id)
            .bind(descricao)
            .fetch_optional(conn)
            .await
    }

    /// Delete an entry by ID. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM andamentos WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
