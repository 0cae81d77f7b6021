use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Entrada do clipboard: conteúdo, prazo absoluto e flag de consumo.
///
/// O formato JSON (`content`, `expiresAt`, `consumed`) é o mesmo gravado no
/// Redis, então entradas escritas por outras instâncias continuam legíveis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub content: String,
    /// Epoch em milissegundos.
    pub expires_at: u64,
    pub consumed: bool,
}

impl Entry {
    pub fn new(content: String, now_ms: u64, ttl: Duration) -> Self {
        Self {
            content,
            expires_at: now_ms.saturating_add(ttl.as_millis() as u64),
            consumed: false,
        }
    }

    /// Segundos restantes, arredondados para cima. Zero quando já venceu.
    pub fn expires_in_secs(&self, now_ms: u64) -> u64 {
        self.expires_at.saturating_sub(now_ms).div_ceil(1000)
    }

    /// Vencida quando o restante arredondado chega a zero, ou seja `now >= expires_at`.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.expires_in_secs(now_ms) == 0
    }
}
