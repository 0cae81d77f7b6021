/// Erros de parsing do protocolo RESP (respostas do backend Redis).
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("frame incompleto")]
    Incomplete,
    #[error("byte de tipo inválido: {0:#x}")]
    InvalidFrameType(u8),
    #[error("inteiro inválido: {0}")]
    InvalidInteger(String),
    #[error("comprimento de bulk inválido: {0}")]
    InvalidBulkLength(i64),
    #[error("frame excede tamanho máximo ({0} bytes)")]
    FrameTooLarge(usize),
    #[error("encoding inválido: {0}")]
    InvalidEncoding(String),
}

/// Erros de conexão TCP com o backend.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("conexão resetada pelo peer")]
    ConnectionReset,
    #[error("conexão fechada pelo servidor")]
    Closed,
    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),
}

/// Falhas do backend de armazenamento (conectividade, protocolo, serialização).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Connection(#[from] ConnectionError),
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error("resposta inesperada do backend: {0}")]
    UnexpectedReply(String),
    #[error("backend retornou erro: {0}")]
    Backend(String),
    #[error("entrada corrompida: {0}")]
    Corrupted(String),
    #[error("url de backend inválida: {0}")]
    InvalidUrl(String),
}

/// Resultado de qualquer operação do clipboard.
///
/// As mensagens de `Display` vão direto para o corpo das respostas HTTP,
/// por isso ficam no formato que os clientes já conhecem.
#[derive(Debug, thiserror::Error)]
pub enum ClipError {
    #[error("PIN must be exactly 4 digits.")]
    InvalidPin,
    #[error("Content must be a non-empty string.")]
    InvalidContent,
    #[error("Not found or expired.")]
    NotFound,
    #[error("Content already copied once.")]
    AlreadyConsumed,
    #[error("Storage unavailable.")]
    StoreUnavailable(#[from] StoreError),
}

/// Result type alias.
pub type ClipResult<T> = Result<T, ClipError>;

// io::Error → StoreError (via ConnectionError)
impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Connection(ConnectionError::Io(e))
    }
}
