//! Health endpoint tests.

use http::{Method, StatusCode};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_reports_ok() {
    let app = TestApp::new();

    let (status, body) = app.request_json(Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}
