use crate::helpers::spawn_app;
use hyper::StatusCode;
use static_routes::*;

#[tokio::test]
async fn health_answers_ok_regardless_of_database_state() {
    let app = spawn_app().await;

    let r = app.get(routes().api.health).send().await.unwrap();

    assert_eq!(r.status(), StatusCode::OK);
    assert_eq!(r.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn readiness_reflects_the_test_stub() {
    let app = spawn_app().await;

    let r = app.get(routes().api.ready).send().await.unwrap();

    assert_eq!(r.status(), StatusCode::OK);

    let body: serde_json::Value = r.json().await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["database"], true);
}
