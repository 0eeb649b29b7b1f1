//! Repository for the `projetos` table.

use painel_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::projeto::{CreateProjeto, Projeto};

/// Column list shared across queries. `orcamento` is NUMERIC in the schema
/// and surfaced as `float8`.
const COLUMNS: &str = "id, nome, tipo, coordenacao, status, descricao, inicio, fim, \
     prioridade, progresso, total_sprints, sprints_concluidas, responsavel, \
     orcamento::float8 AS orcamento, equipe, rag, riscos, qualidade, internalizacao";

/// Provides CRUD operations for projects.
pub struct ProjetoRepo;

impl ProjetoRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateProjeto,
    ) -> Result<Projeto, sqlx::Error> {
        let query = format!(
            "INSERT INTO projetos (nome, tipo, coordenacao, status, descricao, inicio, fim,
                 prioridade, progresso, total_sprints, sprints_concluidas, responsavel,
                 orcamento, equipe, rag, riscos, qualidade, internalizacao)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                 $13::numeric, $14, $15, $16, $17, $18)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Projeto>(&query)
            .bind(&input.nome)
            .bind(&input.tipo)
            .bind(&input.coordenacao)
            .bind(&input.status)
            .bind(&input.descricao)
            .bind(input.inicio)
            .bind(input.fim)
            .bind(&input.prioridade)
            .bind(input.progresso)
            .bind(input.total_sprints)
            .bind(input.sprints_concluidas)
            .bind(&input.responsavel)
            .bind(input.orcamento)
            .bind(&input.equipe)
            .bind(&input.rag)
            .bind(&input.riscos)
            .bind(input.qualidade)
            .bind(input.internalizacao)
            .fetch_one(conn)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Projeto>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projetos WHERE id = $1");
        sqlx::query_as::<_, Projeto>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project and lock its row until the surrounding transaction ends.
    pub async fn find_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Projeto>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projetos WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Projeto>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List all projects, newest (highest id) first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Projeto>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projetos ORDER BY id DESC");
        sqlx::query_as::<_, Projeto>(&query).fetch_all(pool).await
    }

    /// Write every column of `projeto` back to its row.
    pub async fn save(conn: &mut PgConnection, projeto: &Projeto) -> Result<Projeto, sqlx::Error> {
        let query = format!(
            "UPDATE projetos SET
                nome = $2,
                tipo = $3,
                coordenacao = $4,
                status = $5,
                descricao = $6,
                inicio = $7,
                fim = $8,
                prioridade = $9,
                progresso = $10,
                total_sprints = $11,
                sprints_concluidas = $12,
                responsavel = $13,
                orcamento = $14::numeric,
                equipe = $15,
                rag = $16,
                riscos = $17,
                qualidade = $18,
                internalizacao = $19
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Projeto>(&query)
            .bind(projeto.id)
            .bind(&projeto.nome)
            .bind(&projeto.tipo)
            .bind(&projeto.coordenacao)
            .bind(&projeto.status)
            .bind(&projeto.descricao)
            .bind(projeto.inicio)
            .bind(projeto.fim)
            .bind(&projeto.prioridade)
            .bind(projeto.progresso)
            .bind(projeto.total_sprints)
            .bind(projeto.sprints_concluidas)
            .bind(&projeto.responsavel)
            .bind(projeto.orcamento)
            .bind(&projeto.equipe)
            .bind(&projeto.rag)
            .bind(&projeto.riscos)
            .bind(projeto.qualidade)
            .bind(projeto.internalizacao)
            .fetch_one(conn)
            .await
    }

    /// Delete a project; its progress entries go with it (`ON DELETE CASCADE`).
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projetos WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
