use crate::helpers::spawn_app;
use hyper::StatusCode;
use static_routes::*;

#[tokio::test]
async fn hello_returns_the_greeting() {
    let app = spawn_app().await;

    let r = app.get(routes().api.hello).send().await.unwrap();

    assert_eq!(r.status(), StatusCode::OK);
    assert_eq!(r.text().await.unwrap(), r#"{"message":"hello"}"#);
}

#[tokio::test]
async fn route_groups_report_unavailable_without_a_database() {
    let app = spawn_app().await;

    let r = app.get(routes().api.users.index).send().await.unwrap();
    assert_eq!(r.status(), StatusCode::SERVICE_UNAVAILABLE);

    let r = app.get(routes().api.blogs.index).send().await.unwrap();
    assert_eq!(r.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn malformed_blog_id_is_rejected() {
    let app = spawn_app().await;

    let url = format!(
        "{}/not-an-id",
        routes()
            .api
            .blogs
            .index
            .get()
            .with_base(&app.address)
            .complete()
    );
    let r = app.api_client.get(url).send().await.unwrap();

    assert_eq!(r.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = r.json().await.unwrap();
    assert_eq!(body["error"], "invalid blog id: not-an-id");
}

#[tokio::test]
async fn posting_routes_report_unavailable_without_a_database() {
    let app = spawn_app().await;

    let form = interfacing::users::SignupForm {
        name: "ada".into(),
        email: "ada@example.com".into(),
        password: "hunter2".into(),
    };

    let r = app
        .post(routes().api.users.signup)
        .json(&form)
        .send()
        .await
        .unwrap();

    assert_eq!(r.status(), StatusCode::SERVICE_UNAVAILABLE);
}
