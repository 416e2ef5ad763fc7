mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use snaplink::domain::entities::NewUrlRecord;
use snaplink::domain::repositories::UrlRepository;

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_empty() {
    let (server, _repo) = common::memory_server();

    let response = server.get("/urls").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_list_returns_all_records() {
    let (server, repo) = common::memory_server();
    repo.insert(NewUrlRecord::new("one", "https://one.example"))
        .await
        .unwrap();
    repo.insert(NewUrlRecord::new("two", "https://two.example"))
        .await
        .unwrap();

    let response = server.get("/urls").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);

    let mut codes: Vec<&str> = items
        .iter()
        .map(|item| item["short_code"].as_str().unwrap())
        .collect();
    codes.sort();
    assert_eq!(codes, ["one", "two"]);

    let first = &items[0];
    for field in [
        "id",
        "long_url",
        "created_at",
        "expires_at",
        "owner_id",
        "clicks",
        "last_clicked_at",
    ] {
        assert!(first.get(field).is_some(), "missing field {field}");
    }
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_success() {
    let (server, repo) = common::memory_server();
    repo.insert(NewUrlRecord::new("promo", "https://old.example"))
        .await
        .unwrap();

    let response = server
        .put("/urls/promo")
        .json(&json!({ "long_url": "https://new.example" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["message"],
        "URL updated successfully"
    );

    server
        .get("/promo")
        .await
        .assert_status(StatusCode::MOVED_PERMANENTLY);
    let record = repo.find_by_code("promo").await.unwrap().unwrap();
    assert_eq!(record.long_url, "https://new.example");
    assert_eq!(record.clicks, 1);
}

#[tokio::test]
async fn test_update_unknown_code() {
    let (server, _repo) = common::memory_server();

    let response = server
        .put("/urls/unknown")
        .json(&json!({ "long_url": "https://x.example" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_update_same_url_is_unchanged() {
    let (server, repo) = common::memory_server();
    repo.insert(NewUrlRecord::new("same", "https://same.example"))
        .await
        .unwrap();

    let response = server
        .put("/urls/same")
        .json(&json!({ "long_url": "https://same.example" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"]["code"], "unchanged");
}

#[tokio::test]
async fn test_update_empty_url() {
    let (server, repo) = common::memory_server();
    repo.insert(NewUrlRecord::new("promo", "https://old.example"))
        .await
        .unwrap();

    let response = server
        .put("/urls/promo")
        .json(&json!({ "long_url": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Long URL cannot be empty"
    );
}

#[tokio::test]
async fn test_update_missing_url() {
    let (server, _repo) = common::memory_server();

    let response = server.put("/urls/promo").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_invalid_url() {
    let (server, repo) = common::memory_server();
    repo.insert(NewUrlRecord::new("promo", "https://old.example"))
        .await
        .unwrap();

    let response = server
        .put("/urls/promo")
        .json(&json!({ "long_url": "not a url" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let record = repo.find_by_code("promo").await.unwrap().unwrap();
    assert_eq!(record.long_url, "https://old.example");
}

#[tokio::test]
async fn test_update_rejects_control_characters() {
    let (server, repo) = common::memory_server();
    repo.insert(NewUrlRecord::new("promo", "https://old.example"))
        .await
        .unwrap();

    for long_url in ["https://example.com/a\nb", "https://example.com/\tx"] {
        let response = server
            .put("/urls/promo")
            .json(&json!({ "long_url": long_url }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    let redirect = server.get("/promo").await;
    redirect.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(redirect.header("location"), "https://old.example");
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_success() {
    let (server, repo) = common::memory_server();
    repo.insert(NewUrlRecord::new("gone", "https://example.com"))
        .await
        .unwrap();

    let response = server.delete("/urls/gone").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["message"],
        "URL deleted successfully"
    );

    server.get("/gone").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_code() {
    let (server, _repo) = common::memory_server();

    let response = server.delete("/urls/unknown").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleted_code_can_be_reused() {
    let (server, _repo) = common::memory_server();

    server
        .post("/shorten")
        .json(&json!({ "long_url": "https://a.example", "short_code": "promo" }))
        .await
        .assert_status_ok();
    server.delete("/urls/promo").await.assert_status_ok();

    let response = server
        .post("/shorten")
        .json(&json!({ "long_url": "https://b.example", "short_code": "promo" }))
        .await;

    response.assert_status_ok();

    let redirect = server.get("/promo").await;
    assert_eq!(redirect.header("location"), "https://b.example");
}
