// Route handlers
//

pub mod blogs;
pub mod users;

mod error;

pub use error::ApiError;

use crate::db::ConnState;
use crate::startup::AppState;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use hyper::StatusCode;
use serde::Serialize;

pub async fn hello() -> Json<interfacing::Hello> {
    Json(interfacing::Hello {
        message: "hello".into(),
    })
}

/// Liveness only. Readiness lives at `/health/ready`.
pub async fn health() -> &'static str {
    "OK"
}

#[derive(Serialize)]
pub struct ReadyResponse {
    status: &'static str,
    database: bool,
}

pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let (status, body) = match state.readiness.current() {
        ConnState::Ready => (
            StatusCode::OK,
            ReadyResponse {
                status: "ready",
                database: true,
            },
        ),
        ConnState::Starting => (
            StatusCode::SERVICE_UNAVAILABLE,
            ReadyResponse {
                status: "starting",
                database: false,
            },
        ),
        ConnState::Degraded(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            ReadyResponse {
                status: "degraded",
                database: false,
            },
        ),
    };

    (status, Json(body))
}
