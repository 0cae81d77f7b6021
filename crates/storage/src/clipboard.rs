use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use burnpin_common::{ClipError, ClipResult, ENTRY_TTL_SECS, Pin};

use crate::backend::{Consumption, KeyedTtlStore};
use crate::clock::{Clock, SystemClock};
use crate::entry::Entry;
use crate::memory::MemoryStore;

/// Resultado de `put`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Published {
    pub expires_in_seconds: u64,
}

/// Resultado de `status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinStatus {
    pub exists: bool,
    pub consumed: bool,
    pub expires_in_seconds: u64,
}

impl PinStatus {
    pub const ABSENT: PinStatus = PinStatus {
        exists: false,
        consumed: false,
        expires_in_seconds: 0,
    };
}

/// Store de leitura única indexado por PIN.
///
/// Cada entrada vive `ENTRY_TTL_SECS` segundos e entrega o conteúdo no máximo
/// uma vez. A expiração é preguiçosa: entradas vencidas são removidas quando
/// o PIN é acessado de novo.
#[derive(Clone)]
pub struct Clipboard {
    store: Arc<dyn KeyedTtlStore>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl Clipboard {
    pub fn new(store: Arc<dyn KeyedTtlStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            ttl: Duration::from_secs(ENTRY_TTL_SECS),
        }
    }

    /// Clipboard em memória com relógio do sistema.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), Arc::new(SystemClock))
    }

    pub fn backend(&self) -> &'static str {
        self.store.name()
    }

    /// Publica `content` sob `pin`, substituindo qualquer entrada anterior.
    pub async fn put(&self, pin: &Pin, content: String) -> ClipResult<Published> {
        if content.trim().is_empty() {
            return Err(ClipError::InvalidContent);
        }

        let now = self.clock.now_millis();
        let entry = Entry::new(content, now, self.ttl);
        let expires_in_seconds = entry.expires_in_secs(now);

        self.store.set(pin, entry, self.ttl).await?;
        debug!(%pin, expires_in_seconds, "conteúdo publicado");

        Ok(Published { expires_in_seconds })
    }

    /// Consulta existência e consumo sem tocar no conteúdo.
    pub async fn status(&self, pin: &Pin) -> ClipResult<PinStatus> {
        let now = self.clock.now_millis();

        let Some(entry) = self.store.get(pin).await? else {
            return Ok(PinStatus::ABSENT);
        };

        if entry.is_expired(now) {
            self.store.remove_expired(pin, now).await?;
            debug!(%pin, "entrada expirada removida");
            return Ok(PinStatus::ABSENT);
        }

        Ok(PinStatus {
            exists: true,
            consumed: entry.consumed,
            expires_in_seconds: entry.expires_in_secs(now),
        })
    }

    /// Entrega o conteúdo uma única vez.
    pub async fn consume(&self, pin: &Pin) -> ClipResult<String> {
        let now = self.clock.now_millis();

        match self.store.consume(pin, now).await? {
            Consumption::Taken(content) => {
                debug!(%pin, "conteúdo consumido");
                Ok(content)
            }
            Consumption::AlreadyConsumed => Err(ClipError::AlreadyConsumed),
            Consumption::Missing => Err(ClipError::NotFound),
        }
    }

    /// Keepalive do backend.
    pub async fn ping(&self) -> ClipResult<String> {
        Ok(self.store.ping().await?)
    }
}
