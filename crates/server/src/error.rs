use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use burnpin_common::ClipError;
use burnpin_protocol::ErrorReply;

/// Erro de um handler, convertido em `{error}` com o status HTTP adequado.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub ClipError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ClipError::InvalidPin | ClipError::InvalidContent => StatusCode::BAD_REQUEST,
            ClipError::NotFound => StatusCode::NOT_FOUND,
            ClipError::AlreadyConsumed => StatusCode::GONE,
            ClipError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ClipError::StoreUnavailable(cause) = &self.0 {
            error!(error = %cause, "falha no backend");
        }

        let body = ErrorReply::new(self.0.to_string());
        (self.status(), Json(body)).into_response()
    }
}
