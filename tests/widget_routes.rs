mod common;

use std::time::Duration;

use axum::http::{StatusCode, header};
use chrono::{DateTime, FixedOffset};
use serde_json::{Value, json};

use common::{TestApp, empty_request, json_request};

fn timestamp(body: &Value, field: &str) -> DateTime<FixedOffset> {
    let raw = body[field].as_str().expect("timestamp should be a string");
    DateTime::parse_from_rfc3339(raw).expect("timestamp should be RFC 3339")
}

fn field_names(body: &Value) -> Vec<String> {
    body["detail"]
        .as_array()
        .expect("validation detail should be a list")
        .iter()
        .filter_map(|entry| entry["field"].as_str().map(str::to_string))
        .collect()
}

#[tokio::test]
async fn widget_lifecycle_round_trip() {
    let app = TestApp::new().await;

    let created = app.create_widget("Super Widget", 42).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "Super Widget");
    assert_eq!(created["number_of_parts"], 42);
    assert_eq!(
        timestamp(&created, "created_at"),
        timestamp(&created, "updated_at")
    );

    let (status, fetched) = app.json(empty_request("GET", "/widgets/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    tokio::time::sleep(Duration::from_millis(20)).await;

    let (status, updated) = app
        .json(json_request(
            "PUT",
            "/widgets/1",
            &json!({ "name": "Updated", "number_of_parts": 50 }),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["name"], "Updated");
    assert_eq!(updated["number_of_parts"], 50);
    assert_eq!(updated["created_at"], created["created_at"]);
    assert!(timestamp(&updated, "updated_at") > timestamp(&created, "updated_at"));

    let response = app.send(empty_request("DELETE", "/widgets/1")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    assert!(body.is_empty());

    let (status, missing) = app.json(empty_request("GET", "/widgets/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing, json!({ "detail": "Widget not found" }));
}

#[tokio::test]
async fn created_ids_are_unique_and_never_reused() {
    let app = TestApp::new().await;

    let first = app.create_widget("First", 1).await;
    let second = app.create_widget("Second", 2).await;
    assert_ne!(first["id"], second["id"]);

    let response = app.send(empty_request("DELETE", "/widgets/2")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let third = app.create_widget("Third", 3).await;
    assert_eq!(third["id"], 3);
}

#[tokio::test]
async fn name_length_boundary() {
    let app = TestApp::new().await;

    let at_limit = "a".repeat(64);
    let created = app.create_widget(&at_limit, 1).await;
    assert_eq!(created["name"], at_limit);

    let (status, body) = app
        .json(json_request(
            "POST",
            "/widgets",
            &json!({ "name": "a".repeat(65), "number_of_parts": 1 }),
        ))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(field_names(&body), vec!["name"]);
}

#[tokio::test]
async fn surrounding_whitespace_is_trimmed() {
    let app = TestApp::new().await;

    let created = app.create_widget("  Sprocket  ", 4).await;

    assert_eq!(created["name"], "Sprocket");
}

#[tokio::test]
async fn invalid_create_bodies_are_rejected_before_persistence() {
    let app = TestApp::new().await;

    let cases = [
        json!({ "name": "   ", "number_of_parts": 1 }),
        json!({ "name": "Gear", "number_of_parts": 0 }),
        json!({ "name": "Gear", "number_of_parts": -3 }),
        json!({ "name": "Gear", "number_of_parts": "x" }),
        json!({ "name": "Gear" }),
        json!({ "number_of_parts": 2 }),
    ];

    for body in cases {
        let (status, response) = app.json(json_request("POST", "/widgets", &body)).await;
        assert_eq!(
            status,
            StatusCode::UNPROCESSABLE_ENTITY,
            "unexpected status for {body}: {response}"
        );
        assert!(response["detail"].is_array());
    }

    let (status, widgets) = app.json(empty_request("GET", "/widgets")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(widgets, json!([]));
}

#[tokio::test]
async fn all_failing_fields_are_reported() {
    let app = TestApp::new().await;

    let (status, body) = app
        .json(json_request(
            "POST",
            "/widgets",
            &json!({ "name": "", "number_of_parts": 0 }),
        ))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(field_names(&body), vec!["name", "number_of_parts"]);
}

#[tokio::test]
async fn list_paging_and_order() {
    let app = TestApp::new().await;
    for (name, parts) in [("Alpha", 1), ("Bravo", 2), ("Charlie", 3)] {
        app.create_widget(name, parts).await;
    }

    let (status, all) = app.json(empty_request("GET", "/widgets")).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = all
        .as_array()
        .expect("list should be an array")
        .iter()
        .filter_map(|widget| widget["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Alpha", "Bravo", "Charlie"]);

    let (_, page) = app
        .json(empty_request("GET", "/widgets?skip=1&limit=1"))
        .await;
    assert_eq!(page.as_array().map(Vec::len), Some(1));
    assert_eq!(page[0]["name"], "Bravo");

    let (_, empty) = app.json(empty_request("GET", "/widgets?limit=0")).await;
    assert_eq!(empty, json!([]));

    let (_, past_end) = app.json(empty_request("GET", "/widgets?skip=10")).await;
    assert_eq!(past_end, json!([]));

    let (_, descending) = app
        .json(empty_request("GET", "/widgets?order_by=name&order_desc=true"))
        .await;
    assert_eq!(descending[0]["name"], "Charlie");
}

#[tokio::test]
async fn list_with_skip_beyond_sql_range_is_empty() {
    let app = TestApp::new().await;
    app.create_widget("Only", 1).await;

    for skip in ["18446744073709551615", "9223372036854775808"] {
        let response = app
            .send(empty_request("GET", &format!("/widgets?skip={skip}")))
            .await;
        assert_eq!(response.status(), StatusCode::OK, "skip={skip}");
        assert_eq!(
            response
                .headers()
                .get("x-total-count")
                .and_then(|value| value.to_str().ok()),
            Some("1")
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body: Value = serde_json::from_slice(&bytes).expect("body should be json");
        assert_eq!(body, json!([]), "skip={skip}");
    }
}

#[tokio::test]
async fn list_reports_total_count_header() {
    let app = TestApp::new().await;
    app.create_widget("One", 1).await;
    app.create_widget("Two", 2).await;

    let response = app.send(empty_request("GET", "/widgets?limit=1")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("x-total-count")
            .and_then(|value| value.to_str().ok()),
        Some("2")
    );
}

#[tokio::test]
async fn list_rejects_bad_query_values() {
    let app = TestApp::new().await;

    for uri in [
        "/widgets?skip=-1",
        "/widgets?limit=abc",
        "/widgets?order_by=colour",
    ] {
        let (status, body) = app.json(empty_request("GET", uri)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}: {body}");
    }
}

#[tokio::test]
async fn trailing_slash_collection_route() {
    let app = TestApp::new().await;

    let (status, body) = app
        .json(json_request(
            "POST",
            "/widgets/",
            &json!({ "name": "Slash", "number_of_parts": 7 }),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");

    let (status, list) = app.json(empty_request("GET", "/widgets/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn missing_widgets_yield_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app.json(empty_request("GET", "/widgets/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Widget not found");

    let (status, _) = app
        .json(json_request(
            "PUT",
            "/widgets/99",
            &json!({ "name": "Ghost", "number_of_parts": 1 }),
        ))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .json(json_request("PATCH", "/widgets/99", &json!({ "name": "Ghost" })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    for _ in 0..2 {
        let (status, body) = app.json(empty_request("DELETE", "/widgets/99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Widget not found");
    }

    let (_, widgets) = app.json(empty_request("GET", "/widgets")).await;
    assert_eq!(widgets, json!([]));
}

#[tokio::test]
async fn update_validation_failure_leaves_row_untouched() {
    let app = TestApp::new().await;
    let created = app.create_widget("Keep", 5).await;

    let (status, _) = app
        .json(json_request(
            "PUT",
            "/widgets/1",
            &json!({ "name": "Keep", "number_of_parts": -1 }),
        ))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, fetched) = app.json(empty_request("GET", "/widgets/1")).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn patch_changes_only_supplied_fields() {
    let app = TestApp::new().await;
    let created = app.create_widget("Cog", 8).await;

    let (status, unchanged) = app
        .json(json_request("PATCH", "/widgets/1", &json!({})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unchanged, created);

    tokio::time::sleep(Duration::from_millis(20)).await;

    let (status, patched) = app
        .json(json_request(
            "PATCH",
            "/widgets/1",
            &json!({ "number_of_parts": 9 }),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["name"], "Cog");
    assert_eq!(patched["number_of_parts"], 9);
    assert_eq!(patched["created_at"], created["created_at"]);
    assert!(timestamp(&patched, "updated_at") > timestamp(&created, "updated_at"));
}

#[tokio::test]
async fn non_integer_id_is_a_validation_error() {
    let app = TestApp::new().await;

    let (status, body) = app.json(empty_request("GET", "/widgets/abc")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(field_names(&body), vec!["path"]);
}

#[tokio::test]
async fn health_and_banner() {
    let app = TestApp::new().await;

    let (status, health) = app.json(empty_request("GET", "/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        health,
        json!({ "status": "healthy", "service": "Widget CRUD API" })
    );

    let (status, banner) = app.json(empty_request("GET", "/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(banner["message"], "Welcome to Widget CRUD API");
    assert_eq!(banner["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(banner["docs"], "/docs");
}

#[tokio::test]
async fn unknown_routes_return_json_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app.json(empty_request("GET", "/gadgets")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() {
    let app = TestApp::new().await;

    let generated = app.send(empty_request("GET", "/health")).await;
    let headers = generated.headers();
    assert!(headers.contains_key("x-request-id"));
    assert_eq!(
        headers.get(header::X_CONTENT_TYPE_OPTIONS).map(|v| v.as_bytes()),
        Some(&b"nosniff"[..])
    );
    assert_eq!(
        headers.get(header::X_FRAME_OPTIONS).map(|v| v.as_bytes()),
        Some(&b"DENY"[..])
    );

    let mut request = empty_request("GET", "/health");
    request
        .headers_mut()
        .insert("x-request-id", "abc-123".parse().expect("header value"));
    let echoed = app.send(request).await;
    assert_eq!(
        echoed
            .headers()
            .get("x-request-id")
            .and_then(|value| value.to_str().ok()),
        Some("abc-123")
    );
}
