//! HTTP-level integration tests for the FAQ CRUD endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_201_with_normalized_entry() {
    let (_dir, pool) = common::setup_test_db().await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/faq",
        serde_json::json!({"question": "Q1", "answer": "A1", "category": "x, y"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["id"].is_number());
    assert_eq!(json["data"]["question"], "Q1");
    assert_eq!(json["data"]["answer"], "A1");
    assert_eq!(json["data"]["category"], "x,y");
    assert_eq!(json["data"]["created_at"], json["data"]["updated_at"]);
}

#[tokio::test]
async fn create_trims_question_and_answer() {
    let (_dir, pool) = common::setup_test_db().await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/faq",
        serde_json::json!({"question": "  spaced?  ", "answer": " yes "}),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["question"], "spaced?");
    assert_eq!(json["data"]["answer"], "yes");
    assert_eq!(json["data"]["category"], "");
}

#[tokio::test]
async fn create_with_missing_answer_returns_400_and_mutates_nothing() {
    let (_dir, pool) = common::setup_test_db().await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/faq", serde_json::json!({"question": "Q"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("'answer'"));

    // The rejected request must not have touched storage.
    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/faq").await).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn create_with_whitespace_only_question_returns_400() {
    let (_dir, pool) = common::setup_test_db().await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/faq",
        serde_json::json!({"question": "   ", "answer": "A"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_returns_bare_array_in_descending_id_order() {
    let (_dir, pool) = common::setup_test_db().await;

    for q in ["A", "B", "C"] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/faq",
            serde_json::json!({"question": q, "answer": "a"}),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/faq").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let questions: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["question"].as_str().unwrap())
        .collect();
    assert_eq!(questions, ["C", "B", "A"]);
}

#[tokio::test]
async fn list_is_empty_on_fresh_database() {
    let (_dir, pool) = common::setup_test_db().await;
    let app = common::build_test_app(pool);

    let json = body_json(get(app, "/api/faq").await).await;
    assert_eq!(json, serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_replaces_fields_but_preserves_id_and_created_at() {
    let (_dir, pool) = common::setup_test_db().await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/faq",
            serde_json::json!({"question": "Q", "answer": "A", "category": "old"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    let created_at = created["data"]["created_at"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/faq/{id}"),
        serde_json::json!({"question": "Q2", "answer": "A2", "category": " new , tags "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["id"].as_i64().unwrap(), id);
    assert_eq!(json["data"]["question"], "Q2");
    assert_eq!(json["data"]["answer"], "A2");
    assert_eq!(json["data"]["category"], "new,tags");
    assert_eq!(json["data"]["created_at"], created_at.as_str());

    let updated_at = json["data"]["updated_at"].as_str().unwrap();
    assert!(updated_at >= created_at.as_str());
}

#[tokio::test]
async fn update_with_missing_fields_returns_400() {
    let (_dir, pool) = common::setup_test_db().await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/faq",
            serde_json::json!({"question": "Q", "answer": "A"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/faq/{id}"),
        serde_json::json!({"question": "only"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_nonexistent_id_returns_404() {
    let (_dir, pool) = common::setup_test_db().await;
    let app = common::build_test_app(pool);

    let response = put_json(
        app,
        "/api/faq/999999",
        serde_json::json!({"question": "Q", "answer": "A"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_returns_success_then_404_on_repeat() {
    let (_dir, pool) = common::setup_test_db().await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/faq",
            serde_json::json!({"question": "Q", "answer": "A"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/faq/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"success": true, "id": id}));

    // Further mutations on the deleted id are 404.
    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/faq/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/faq/{id}"),
        serde_json::json!({"question": "Q", "answer": "A"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_nonexistent_id_returns_404() {
    let (_dir, pool) = common::setup_test_db().await;
    let app = common::build_test_app(pool);

    let response = delete(app, "/api/faq/12345").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
