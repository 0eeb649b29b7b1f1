//! Integration tests for the repository layer against a real database:
//! - Create / list ordering for every entity
//! - Cascade delete behaviour
//! - Unique and foreign-key constraint violations
//! - Transaction rollback on failure

use painel_db::models::chamado::CreateChamado;
use painel_db::models::projeto::CreateProjeto;
use painel_db::repositories::{
    AndamentoRepo, ChamadoRepo, ObservacaoRepo, PdtiAcaoRepo, ProjetoRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_projeto(nome: &str) -> CreateProjeto {
    serde_json::from_value(serde_json::json!({
        "nome": nome,
        "tipo": "Sistema",
        "coordenacao": "CODES",
        "status": "Em andamento",
    }))
    .unwrap()
}

fn new_chamado(numero: &str) -> CreateChamado {
    serde_json::from_value(serde_json::json!({
        "numero_chamado": numero,
        "projeto": "SIGFAT",
        "status": "Aberto",
    }))
    .unwrap()
}

fn db_error_code(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Projetos
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_projetos_listed_newest_first(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let mut ids = Vec::new();
    for nome in ["P1", "P2", "P3"] {
        ids.push(ProjetoRepo::create(&mut conn, &new_projeto(nome)).await.unwrap().id);
    }

    let listed: Vec<i64> = ProjetoRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    ids.reverse();
    assert_eq!(listed, ids);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_projeto_orcamento_round_trips_numeric(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let mut input = new_projeto("Orçado");
    input.orcamento = Some(1234.56);

    let created = ProjetoRepo::create(&mut conn, &input).await.unwrap();
    assert_eq!(created.orcamento, Some(1234.56));
    assert!(!created.internalizacao);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_projeto_cascades_andamentos(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let projeto = ProjetoRepo::create(&mut conn, &new_projeto("Cascata")).await.unwrap();
    let other = ProjetoRepo::create(&mut conn, &new_projeto("Outro")).await.unwrap();

    AndamentoRepo::create(&mut conn, projeto.id, "Kickoff", None).await.unwrap();
    AndamentoRepo::create(&mut conn, projeto.id, "Sprint 1", None).await.unwrap();
    AndamentoRepo::create(&mut conn, other.id, "Intacto", None).await.unwrap();

    assert!(ProjetoRepo::delete(&mut conn, projeto.id).await.unwrap());

    let (orphans,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM andamentos WHERE projeto_id = $1")
            .bind(projeto.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(orphans, 0);
    assert_eq!(
        AndamentoRepo::list_by_projeto(&pool, other.id).await.unwrap().len(),
        1
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_projeto_returns_false(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    assert!(!ProjetoRepo::delete(&mut conn, 999_999).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_failed_transaction_rolls_back(pool: PgPool) {
    {
        let mut tx = pool.begin().await.unwrap();
        ProjetoRepo::create(&mut tx, &new_projeto("Descartado")).await.unwrap();
        let err = AndamentoRepo::create(&mut tx, 999_999, "órfão", None)
            .await
            .unwrap_err();
        assert_eq!(db_error_code(&err).as_deref(), Some("23503"));
        // Dropped without commit.
    }
    assert!(ProjetoRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Andamentos
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_andamento_for_missing_projeto_violates_fk(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let err = AndamentoRepo::create(&mut conn, 424_242, "Sem pai", None)
        .await
        .unwrap_err();
    assert_eq!(db_error_code(&err).as_deref(), Some("23503"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_andamentos_listed_by_descending_data(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let projeto = ProjetoRepo::create(&mut conn, &new_projeto("Linha do tempo")).await.unwrap();

    let at = |d: u32| {
        chrono::NaiveDate::from_ymd_opt(2025, 1, d)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
    };
    AndamentoRepo::create(&mut conn, projeto.id, "meio", at(15)).await.unwrap();
    AndamentoRepo::create(&mut conn, projeto.id, "início", at(1)).await.unwrap();
    AndamentoRepo::create(&mut conn, projeto.id, "fim", at(31)).await.unwrap();

    let descricoes: Vec<String> = AndamentoRepo::list_by_projeto(&pool, projeto.id)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.descricao)
        .collect();
    assert_eq!(descricoes, ["fim", "meio", "início"]);
}

// ---------------------------------------------------------------------------
// PDTI
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pdti_duplicate_id_violates_pk(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let acao = painel_db::models::pdti_acao::PdtiAcao {
        id: "AC.SDF.01".to_string(),
        descricao: "CNES".to_string(),
        situacao: "Não iniciada".to_string(),
        tipo: "SDF".to_string(),
        data_conclusao: None,
    };
    PdtiAcaoRepo::insert(&mut conn, &acao).await.unwrap();
    let err = PdtiAcaoRepo::insert(&mut conn, &acao).await.unwrap_err();
    assert_eq!(db_error_code(&err).as_deref(), Some("23505"));
}

// ---------------------------------------------------------------------------
// Sustentação
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_numero_chamado_violates_unique(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    ChamadoRepo::create(&mut conn, "INC-001", &new_chamado("INC-001"))
        .await
        .unwrap();
    let err = ChamadoRepo::create(&mut conn, "INC-001", &new_chamado("INC-001"))
        .await
        .unwrap_err();
    assert_eq!(db_error_code(&err).as_deref(), Some("23505"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_chamado_cascades_observacoes(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    ChamadoRepo::create(&mut conn, "INC-010", &new_chamado("INC-010"))
        .await
        .unwrap();
    ObservacaoRepo::create(&mut conn, "INC-010", "Primeira").await.unwrap();
    ObservacaoRepo::create(&mut conn, "INC-010", "Segunda").await.unwrap();

    assert!(ChamadoRepo::exists(&pool, "INC-010").await.unwrap());
    assert!(ChamadoRepo::delete_by_numero(&mut conn, "INC-010").await.unwrap());
    assert!(!ChamadoRepo::exists(&pool, "INC-010").await.unwrap());
    assert!(ObservacaoRepo::list_by_chamado(&pool, "INC-010")
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_observacao_rejected_by_schema(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    ChamadoRepo::create(&mut conn, "INC-020", &new_chamado("INC-020"))
        .await
        .unwrap();
    let err = ObservacaoRepo::create(&mut conn, "INC-020", "   ")
        .await
        .unwrap_err();
    assert_eq!(db_error_code(&err).as_deref(), Some("23514"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_save_chamado_refreshes_atualizado_em(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let mut chamado = ChamadoRepo::create(&mut conn, "INC-030", &new_chamado("INC-030"))
        .await
        .unwrap();
    let criado_em = chamado.criado_em;

    chamado.status = Some("Resolvido".to_string());
    let saved = ChamadoRepo::save(&mut conn, &chamado).await.unwrap();

    assert_eq!(saved.status.as_deref(), Some("Resolvido"));
    assert_eq!(saved.criado_em, criado_em);
    assert!(saved.atualizado_em >= chamado.atualizado_em);
}
