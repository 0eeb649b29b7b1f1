//! HTTP-level integration tests for `/api/projetos`.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_projeto, delete, get, post_json, post_raw, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_projeto_returns_201_with_coerced_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/projetos",
        json!({
            "nome": "Portal do Servidor",
            "tipo": "Sistema",
            "coordenacao": "CODES",
            "status": "Planejado",
            "inicio": "2025-03-01T10:30:00",
            "fim": "31/12/2025",
            "totalSprints": "8",
            "sprintsConcluidas": 2,
            "orcamento": 1234.56,
            "equipe": "Ana, Bruno",
            "internalizacao": "SIM",
            "ignorado": true
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["nome"], "Portal do Servidor");
    assert_eq!(json["inicio"], "2025-03-01");
    assert_eq!(json["fim"], serde_json::Value::Null);
    assert_eq!(json["totalSprints"], 8);
    assert_eq!(json["sprintsConcluidas"], 2);
    assert_eq!(json["orcamento"], 1234.56);
    assert_eq!(json["equipe"], "Ana, Bruno");
    assert_eq!(json["internalizacao"], true);
    assert!(json.get("ignorado").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_projeto_defaults_internalizacao_to_false(pool: PgPool) {
    let id = create_projeto(&pool, "Sem flag", json!({"internalizacao": null})).await;

    let json = body_json(get(common::build_test_app(pool), &format!("/api/projetos/{id}")).await).await;
    assert_eq!(json["internalizacao"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_projeto_missing_required_field_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/projetos",
        json!({"tipo": "Sistema", "coordenacao": "CODES", "status": "Planejado"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["erro"].is_string());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projetos")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_projeto_with_progresso_out_of_range_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/projetos",
        json!({
            "nome": "X", "tipo": "T", "coordenacao": "C", "status": "S",
            "progresso": 150
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_json_body_returns_400_with_erro(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(app, "/api/projetos", "{\"nome\": ").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["erro"].is_string());
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_projetos_newest_first(pool: PgPool) {
    let first = create_projeto(&pool, "Primeiro", json!({})).await;
    let second = create_projeto(&pool, "Segundo", json!({})).await;
    let third = create_projeto(&pool, "Terceiro", json!({})).await;

    let response = get(common::build_test_app(pool), "/api/projetos").await;
    assert_eq!(response.status(), StatusCode::OK);

    let ids: Vec<i64> = body_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![third, second, first]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_nonexistent_projeto_returns_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/projetos/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_json(response).await["erro"].is_string());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn status_only_update_leaves_other_fields(pool: PgPool) {
    let id = create_projeto(
        &pool,
        "Data Lake",
        json!({"descricao": "Ingestão", "progresso": 40, "inicio": "2025-01-06", "rag": "Verde"}),
    )
    .await;
    let uri = format!("/api/projetos/{id}");
    let before = body_json(get(common::build_test_app(pool.clone()), &uri).await).await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &uri,
        json!({"status": "Concluído"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let after = body_json(response).await;

    let mut expected = before;
    expected["status"] = json!("Concluído");
    assert_eq!(after, expected);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_with_explicit_null_clears_optional_field(pool: PgPool) {
    let id = create_projeto(&pool, "Limpeza", json!({"riscos": "Prazo"})).await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/projetos/{id}"),
        json!({"riscos": null}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["riscos"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_required_field_to_null_returns_400(pool: PgPool) {
    let id = create_projeto(&pool, "Obrigatório", json!({})).await;
    let uri = format!("/api/projetos/{id}");

    let response = put_json(common::build_test_app(pool.clone()), &uri, json!({"nome": null})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(get(common::build_test_app(pool), &uri).await).await;
    assert_eq!(json["nome"], "Obrigatório");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_nonexistent_projeto_returns_404(pool: PgPool) {
    let response = put_json(
        common::build_test_app(pool),
        "/api/projetos/999999",
        json!({"status": "Cancelado"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_projeto_cascades_to_andamentos(pool: PgPool) {
    let id = create_projeto(&pool, "Efêmero", json!({})).await;
    for descricao in ["Kickoff", "Sprint 1"] {
        let response = post_json(
            common::build_test_app(pool.clone()),
            &format!("/api/projetos/{id}/andamentos"),
            json!({"descricao": descricao}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = delete(common::build_test_app(pool.clone()), &format!("/api/projetos/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["mensagem"],
        "Projeto excluído com sucesso"
    );

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM andamentos WHERE projeto_id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);

    let response = get(common::build_test_app(pool), &format!("/api/projetos/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_nonexistent_projeto_returns_404(pool: PgPool) {
    let response = delete(common::build_test_app(pool), "/api/projetos/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
