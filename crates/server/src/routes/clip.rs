use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use tracing::debug;

use burnpin_protocol::{Command, ConsumeReply, Op, PutReply, StatusReply};

use crate::error::ApiError;
use crate::state::AppState;

type Body = Result<Json<Value>, JsonRejection>;

pub async fn set(State(state): State<AppState>, body: Body) -> Result<Response, ApiError> {
    execute(&state, Op::Put, body).await
}

pub async fn status(State(state): State<AppState>, body: Body) -> Result<Response, ApiError> {
    execute(&state, Op::Status, body).await
}

pub async fn consume(State(state): State<AppState>, body: Body) -> Result<Response, ApiError> {
    execute(&state, Op::Consume, body).await
}

/// Valida o corpo e despacha o comando para o clipboard.
async fn execute(state: &AppState, op: Op, body: Body) -> Result<Response, ApiError> {
    // corpo ausente ou JSON inválido vale como `{}`
    let body = match body {
        Ok(Json(value)) => value,
        Err(rejection) => {
            debug!(?op, "corpo rejeitado: {rejection}");
            Value::Null
        }
    };

    let cmd = Command::from_json(op, &body)?;
    debug!(?op, pin = %cmd.pin(), "comando recebido");

    let clipboard = &state.clipboard;
    let response = match cmd {
        Command::Put { pin, content } => {
            let published = clipboard.put(&pin, content).await?;
            Json(PutReply {
                ok: true,
                expires_in_seconds: published.expires_in_seconds,
            })
            .into_response()
        }
        Command::Status(pin) => {
            let status = clipboard.status(&pin).await?;
            Json(StatusReply {
                exists: status.exists,
                consumed: status.consumed,
                expires_in_seconds: status.expires_in_seconds,
            })
            .into_response()
        }
        Command::Consume(pin) => {
            let content = clipboard.consume(&pin).await?;
            Json(ConsumeReply { ok: true, content }).into_response()
        }
    };

    Ok(response)
}
