//! Repository for the `pdti_acoes` table.

use sqlx::{PgConnection, PgPool};

use crate::models::pdti_acao::PdtiAcao;

const COLUMNS: &str = "id, descricao, situacao, tipo, data_conclusao";

/// Provides CRUD operations for PDTI actions.
pub struct PdtiAcaoRepo;

impl PdtiAcaoRepo {
    /// Insert a fully resolved action. A duplicate `id` is a unique violation.
    pub async fn insert(conn: &mut PgConnection, acao: &PdtiAcao) -> Result<PdtiAcao, sqlx::Error> {
        let query = format!(
            "INSERT INTO pdti_acoes (id, descricao, situacao, tipo, data_conclusao)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PdtiAcao>(&query)
            .bind(&acao.id)
            .bind(&acao.descricao)
            .bind(&acao.situacao)
            .bind(&acao.tipo)
            .bind(acao.data_conclusao)
            .fetch_one(conn)
            .await
    }

    /// Find an action by its plan code.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<PdtiAcao>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pdti_acoes WHERE id = $1");
        sqlx::query_as::<_, PdtiAcao>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an action and lock its row for the rest of the transaction.
    pub async fn find_for_update(
        conn: &mut PgConnection,
        id: &str,
    ) -> Result<Option<PdtiAcao>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pdti_acoes WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, PdtiAcao>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List all actions ordered by plan code.
    pub async fn list(pool: &PgPool) -> Result<Vec<PdtiAcao>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pdti_acoes ORDER BY id ASC");
        sqlx::query_as::<_, PdtiAcao>(&query).fetch_all(pool).await
    }

    /// Write the mutable columns of `acao` back to its row.
    pub async fn save(conn: &mut PgConnection, acao: &PdtiAcao) -> Result<PdtiAcao, sqlx::Error> {
        let query = format!(
            "UPDATE pdti_acoes SET
                descricao = $2,
                situacao = $3,
                tipo = $4,
                data_conclusao = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PdtiAcao>(&query)
            .bind(&acao.id)
            .bind(&acao.descricao)
            .bind(&acao.situacao)
            .bind(&acao.tipo)
            .bind(acao.data_conclusao)
            .fetch_one(conn)
            .await
    }

    /// Delete an action. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut PgConnection, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pdti_acoes WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
