use axum::http::StatusCode;

pub mod svc;

pub const HEALTH_PATH: &str = "/healthz";

// liveness probe for whatever sits in front of the server
async fn healthz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
