//! Transporte HTTP do burnpin.
//!
//! Expõe as três operações do [`Clipboard`](burnpin_storage::Clipboard)
//! como rotas JSON, além de um keepalive do backend e um health check.

#![forbid(unsafe_code)]

mod error;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
