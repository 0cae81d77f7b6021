use anyhow::{Context, anyhow};
use reqwest::Response;
use serde::Serialize;
use serde::de::DeserializeOwned;

use burnpin_common::Pin;
use burnpin_protocol::{
    ConsumeReply, ErrorReply, Op, PinRequest, PingReply, PutReply, PutRequest, StatusReply,
};

/// Cliente HTTP do burnpin.
pub struct Client {
    http: reqwest::Client,
    base: String,
}

impl Client {
    pub fn new(base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub async fn put(&self, pin: &Pin, content: &str) -> anyhow::Result<PutReply> {
        let body = PutRequest {
            pin: pin.to_string(),
            content: content.to_string(),
        };
        self.post(Op::Put, &body).await
    }

    pub async fn status(&self, pin: &Pin) -> anyhow::Result<StatusReply> {
        let body = PinRequest {
            pin: pin.to_string(),
        };
        self.post(Op::Status, &body).await
    }

    pub async fn consume(&self, pin: &Pin) -> anyhow::Result<ConsumeReply> {
        let body = PinRequest {
            pin: pin.to_string(),
        };
        self.post(Op::Consume, &body).await
    }

    pub async fn ping(&self) -> anyhow::Result<PingReply> {
        let resp = self
            .http
            .get(format!("{}/api/cron/ping", self.base))
            .send()
            .await
            .with_context(|| format!("falha ao conectar em {}", self.base))?;
        decode(resp).await
    }

    async fn post<B, R>(&self, op: Op, body: &B) -> anyhow::Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let resp = self
            .http
            .post(format!("{}{}", self.base, op.path()))
            .json(body)
            .send()
            .await
            .with_context(|| format!("falha ao conectar em {}", self.base))?;
        decode(resp).await
    }
}

/// Sucesso vira `R`; erro vira a mensagem `error` do corpo, se houver.
async fn decode<R: DeserializeOwned>(resp: Response) -> anyhow::Result<R> {
    let status = resp.status();
    if status.is_success() {
        return resp.json().await.context("resposta inválida do servidor");
    }

    match resp.json::<ErrorReply>().await {
        Ok(reply) => Err(anyhow!(reply.error)),
        Err(_) => Err(anyhow!("HTTP {status}")),
    }
}
