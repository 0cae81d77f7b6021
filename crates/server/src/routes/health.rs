use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::error;

use burnpin_common::ClipError;
use burnpin_protocol::{ErrorReply, PingReply};

use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Liveness do processo; não toca no backend.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Keepalive do backend, pensado para ser chamado por um agendador externo.
pub async fn cron_ping(State(state): State<AppState>) -> Response {
    let backend = state.clipboard.backend();

    match state.clipboard.ping().await {
        Ok(pong) => Json(PingReply {
            ok: true,
            message: format!("{backend} ping successful"),
            pong,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
        .into_response(),
        Err(e) => {
            let cause = match &e {
                ClipError::StoreUnavailable(cause) => cause.to_string(),
                other => other.to_string(),
            };
            error!(backend, error = %cause, "keepalive do backend falhou");

            let body = ErrorReply {
                ok: Some(false),
                error: format!("Failed to ping {backend}"),
                message: Some(cause),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
