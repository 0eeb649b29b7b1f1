//! Repository for the `sustentacao_chamados` table.

use sqlx::{PgConnection, PgExecutor, PgPool};

use crate::models::chamado::{Chamado, CreateChamado};

const COLUMNS: &str = "id, numero_chamado, projeto, desenvolvedor, solicitante, status, \
     data_chamado, descricao, observacao, criado_em, atualizado_em";

/// Provides CRUD operations for support tickets, addressed by `numero_chamado`.
pub struct ChamadoRepo;

impl ChamadoRepo {
    /// Open a ticket. A repeated `numero_chamado` is a unique violation.
    pub async fn create(
        conn: &mut PgConnection,
        numero_chamado: &str,
        input: &CreateChamado,
    ) -> Result<Chamado, sqlx::Error> {
        let query = format!(
            "INSERT INTO sustentacao_chamados (numero_chamado, projeto, desenvolvedor,
                 solicitante, status, data_chamado, descricao, observacao)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chamado>(&query)
            .bind(numero_chamado)
            .bind(&input.projeto)
            .bind(&input.desenvolvedor)
            .bind(&input.solicitante)
            .bind(&input.status)
            .bind(input.data_chamado)
            .bind(&input.descricao)
            .bind(&input.observacao)
            .fetch_one(conn)
            .await
    }

    /// Find a ticket by its public number.
    pub async fn find_by_numero(
        pool: &PgPool,
        numero_chamado: &str,
    ) -> Result<Option<Chamado>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sustentacao_chamados WHERE numero_chamado = $1");
        sqlx::query_as::<_, Chamado>(&query)
            .bind(numero_chamado)
            .fetch_optional(pool)
            .await
    }

    /// Find a ticket and lock its row for the rest of the transaction.
    pub async fn find_for_update(
        conn: &mut PgConnection,
        numero_chamado: &str,
    ) -> Result<Option<Chamado>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sustentacao_chamados WHERE numero_chamado = $1 FOR UPDATE"
        );
        sqlx::query_as::<_, Chamado>(&query)
            .bind(numero_chamado)
            .fetch_optional(conn)
            .await
    }

    /// Whether a ticket with this number exists.
    pub async fn exists<'e>(
        executor: impl PgExecutor<'e>,
        numero_chamado: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM sustentacao_chamados WHERE numero_chamado = $1)",
        )
        .bind(numero_chamado)
        .fetch_one(executor)
        .await
    }

    /// List all tickets, most recently opened first; undated tickets last.
    pub async fn list(pool: &PgPool) -> Result<Vec<Chamado>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sustentacao_chamados
             ORDER BY data_chamado DESC NULLS LAST, id DESC"
        );
        sqlx::query_as::<_, Chamado>(&query).fetch_all(pool).await
    }

    /// Write the mutable columns back and refresh `atualizado_em`.
    pub async fn save(conn: &mut PgConnection, chamado: &Chamado) -> Result<Chamado, sqlx::Error> {
        let query = format!(
            "UPDATE sustentacao_chamados SET
                projeto = $2,
                desenvolvedor = $3,
                solicitante = $4,
                status = $5,
                data_chamado = $6,
                descricao = $7,
                observacao = $8,
                atualizado_em = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chamado>(&query)
            .bind(chamado.id)
            .bind(&chamado.projeto)
            .bind(&chamado.desenvolvedor)
            .bind(&chamado.solicitante)
            .bind(&chamado.status)
            .bind(chamado.data_chamado)
            .bind(&chamado.descricao)
            .bind(&chamado.observacao)
            .fetch_one(conn)
            .await
    }

    /// Delete a ticket and (by cascade) its observations.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete_by_numero(
        conn: &mut PgConnection,
        numero_chamado: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sustentacao_chamados WHERE numero_chamado = $1")
            .bind(numero_chamado)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
