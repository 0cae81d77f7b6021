mod clip;
mod health;

use axum::http::{Method, Request, StatusCode, header};
use axum::response::IntoResponse;
use axum::{Json, Router};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Level;

use burnpin_protocol::{ErrorReply, Op};

use crate::state::AppState;

/// Monta o router completo.
///
/// - `POST /api/set`, `/api/status`, `/api/consume`: operações do clipboard
/// - `GET /api/cron/ping`: keepalive do backend
/// - `GET /health`: liveness do processo
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    // só método e caminho: o corpo carrega conteúdo
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
        tracing::span!(
            Level::INFO,
            "http_request",
            method = %request.method(),
            path = %request.uri().path(),
        )
    });

    Router::new()
        .route(Op::Put.path(), post(clip::set))
        .route(Op::Status.path(), post(clip::status))
        .route(Op::Consume.path(), post(clip::consume))
        .route("/api/cron/ping", get(health::cron_ping))
        .route("/health", get(health::health_check))
        .method_not_allowed_fallback(method_not_allowed)
        .layer(trace)
        .layer(cors)
        .with_state(state)
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorReply::new("Method not allowed")),
    )
}
