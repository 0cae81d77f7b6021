use burnpin_common::{ClipError, Pin};
use serde_json::Value;

/// Operações expostas pelo transporte HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Put,
    Status,
    Consume,
}

impl Op {
    /// Rota HTTP da operação.
    pub fn path(self) -> &'static str {
        match self {
            Op::Put => "/api/set",
            Op::Status => "/api/status",
            Op::Consume => "/api/consume",
        }
    }
}

/// Comando já validado, pronto para chegar ao store.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Put { pin: Pin, content: String },
    Status(Pin),
    Consume(Pin),
}

impl Command {
    /// Valida o corpo JSON de uma requisição.
    ///
    /// O PIN é verificado antes do conteúdo. Corpo ausente ou que não seja
    /// objeto cai em `InvalidPin`, como um objeto vazio.
    pub fn from_json(op: Op, body: &Value) -> Result<Command, ClipError> {
        let pin = pin_field(body)?;

        let cmd = match op {
            Op::Put => Command::Put {
                pin,
                content: content_field(body)?,
            },
            Op::Status => Command::Status(pin),
            Op::Consume => Command::Consume(pin),
        };

        Ok(cmd)
    }

    pub fn pin(&self) -> &Pin {
        match self {
            Command::Put { pin, .. } | Command::Status(pin) | Command::Consume(pin) => pin,
        }
    }
}

fn pin_field(body: &Value) -> Result<Pin, ClipError> {
    // número (ex.: 1234) é rejeitado: o PIN precisa ser string
    body.get("pin")
        .and_then(Value::as_str)
        .ok_or(ClipError::InvalidPin)
        .and_then(Pin::parse)
}

fn content_field(body: &Value) -> Result<String, ClipError> {
    match body.get("content").and_then(Value::as_str) {
        Some(content) if !content.trim().is_empty() => Ok(content.to_string()),
        _ => Err(ClipError::InvalidContent),
    }
}
