use std::time::Duration;

use async_trait::async_trait;

use burnpin_common::{Pin, StoreError};

use crate::entry::Entry;

/// Resultado da tentativa atômica de consumo no backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Consumption {
    /// Conteúdo entregue; a entrada ficou marcada e com conteúdo vazio.
    Taken(String),
    AlreadyConsumed,
    /// Nunca existiu, ou estava vencida e foi removida agora.
    Missing,
}

/// Capacidade mínima de um store chave→entrada com TTL.
///
/// `consume` precisa ser atômico por chave: duas chamadas concorrentes para o
/// mesmo PIN nunca podem ambas devolver `Taken`.
#[async_trait]
pub trait KeyedTtlStore: Send + Sync {
    async fn get(&self, pin: &Pin) -> Result<Option<Entry>, StoreError>;

    /// Substitui incondicionalmente a entrada do PIN.
    async fn set(&self, pin: &Pin, entry: Entry, ttl: Duration) -> Result<(), StoreError>;

    /// Remove a entrada apenas se ela ainda estiver vencida em `now_ms`.
    /// Um `set` concorrente com entrada nova nunca é apagado.
    async fn remove_expired(&self, pin: &Pin, now_ms: u64) -> Result<bool, StoreError>;

    async fn consume(&self, pin: &Pin, now_ms: u64) -> Result<Consumption, StoreError>;

    /// Keepalive; devolve a resposta textual do backend.
    async fn ping(&self) -> Result<String, StoreError>;

    fn name(&self) -> &'static str;
}
