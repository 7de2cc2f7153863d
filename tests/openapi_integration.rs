use axum::http::StatusCode;
use tower::util::ServiceExt as _;

mod support;

use support::{body_json, get, make_test_router};

#[tokio::test]
async fn openapi_document_lists_every_route() {
    let resp = make_test_router()
        .oneshot(get("/api-docs/openapi.json"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["info"]["title"], "Signon API");

    let paths = json["paths"].as_object().expect("paths object");
    for path in [
        "/auth/{provider}",
        "/auth/{provider}/callback",
        "/logout/{provider}",
        "/user",
        "/avatar",
        "/health",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
    assert!(json["components"]["schemas"].get("ErrorResponse").is_some());
    assert!(json["components"]["schemas"].get("UserDto").is_some());
}

#[tokio::test]
async fn health_reports_ok() {
    let resp = make_test_router().oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!({ "status": "ok" }));
}

#[test]
fn snapshot_is_written_to_disk() {
    let dir = std::env::temp_dir().join(format!("signon-openapi-{}", std::process::id()));
    let path = dir.join("nested").join("openapi.json");

    signon_api::presentation::http::openapi::write_openapi_snapshot(&path).expect("write snapshot");

    let written: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).expect("read snapshot")).expect("json");
    assert!(written["paths"].get("/user").is_some());
    let _ = std::fs::remove_dir_all(dir);
}
