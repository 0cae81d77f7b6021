use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::task::JoinHandle;
use tracing::debug;

use burnpin_common::{Pin, StoreError};

use crate::backend::{Consumption, KeyedTtlStore};
use crate::clock::Clock;
use crate::entry::Entry;

/// Backend em memória do processo. Tudo se perde ao reiniciar.
#[derive(Clone, Default)]
pub struct MemoryStore {
    data: Arc<DashMap<Pin, Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Remove todas as entradas vencidas em `now_ms`. Retorna quantas saíram.
    pub fn sweep(&self, now_ms: u64) -> usize {
        let before = self.data.len();
        self.data.retain(|_, entry| !entry.is_expired(now_ms));
        before.saturating_sub(self.data.len())
    }

    /// Varredura periódica opcional. Só remove o que já venceu, então não muda
    /// nada observável; apenas limita a memória de PINs nunca mais acessados.
    pub fn spawn_sweeper(&self, clock: Arc<dyn Clock>, every: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let removed = store.sweep(clock.now_millis());
                if removed > 0 {
                    debug!("{removed} entradas expiradas removidas pela varredura");
                }
            }
        })
    }
}

#[async_trait]
impl KeyedTtlStore for MemoryStore {
    async fn get(&self, pin: &Pin) -> Result<Option<Entry>, StoreError> {
        Ok(self.data.get(pin).map(|entry| entry.value().clone()))
    }

    async fn set(&self, pin: &Pin, entry: Entry, _ttl: Duration) -> Result<(), StoreError> {
        self.data.insert(pin.clone(), entry);
        Ok(())
    }

    async fn remove_expired(&self, pin: &Pin, now_ms: u64) -> Result<bool, StoreError> {
        Ok(self
            .data
            .remove_if(pin, |_, entry| entry.is_expired(now_ms))
            .is_some())
    }

    async fn consume(&self, pin: &Pin, now_ms: u64) -> Result<Consumption, StoreError> {
        // get_mut segura o lock de escrita do shard durante checagem + mutação
        let mut entry = match self.data.get_mut(pin) {
            Some(e) => e,
            None => return Ok(Consumption::Missing),
        };

        if entry.is_expired(now_ms) {
            drop(entry);
            self.data.remove_if(pin, |_, e| e.is_expired(now_ms));
            return Ok(Consumption::Missing);
        }

        if entry.consumed {
            return Ok(Consumption::AlreadyConsumed);
        }

        entry.consumed = true;
        Ok(Consumption::Taken(std::mem::take(&mut entry.content)))
    }

    async fn ping(&self) -> Result<String, StoreError> {
        Ok("PONG".into())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
