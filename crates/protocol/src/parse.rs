use burnpin_common::StoreError;

use crate::Frame;

/// Cursor sobre a resposta em array de um script, extraindo os campos em ordem.
pub struct Parse {
    parts: std::vec::IntoIter<Frame>,
}

impl Parse {
    /// Cria um Parse a partir de um Frame. O frame deve ser Array.
    pub fn new(frame: Frame) -> Result<Parse, StoreError> {
        match frame {
            Frame::Array(parts) => Ok(Parse {
                parts: parts.into_iter(),
            }),
            Frame::Error(msg) => Err(StoreError::Backend(msg)),
            other => Err(StoreError::UnexpectedReply(format!(
                "esperado array, recebido {other:?}"
            ))),
        }
    }

    /// Próximo elemento como String (de Bulk ou Simple).
    pub fn next_string(&mut self) -> Result<String, StoreError> {
        match self.next()? {
            Frame::Simple(s) => Ok(s),
            Frame::Bulk(data) => String::from_utf8(data.to_vec())
                .map_err(|_| StoreError::UnexpectedReply("string UTF-8 inválida".into())),
            other => Err(StoreError::UnexpectedReply(format!(
                "esperado string, recebido {other:?}"
            ))),
        }
    }

    /// Próximo elemento como i64.
    pub fn next_int(&mut self) -> Result<i64, StoreError> {
        match self.next()? {
            Frame::Integer(n) => Ok(n),
            other => Err(StoreError::UnexpectedReply(format!(
                "esperado inteiro, recebido {other:?}"
            ))),
        }
    }

    /// Verifica se todos os elementos foram consumidos.
    pub fn finish(mut self) -> Result<(), StoreError> {
        match self.parts.next() {
            None => Ok(()),
            Some(extra) => Err(StoreError::UnexpectedReply(format!(
                "elemento extra na resposta: {extra:?}"
            ))),
        }
    }

    fn next(&mut self) -> Result<Frame, StoreError> {
        self.parts
            .next()
            .ok_or_else(|| StoreError::UnexpectedReply("resposta curta demais".into()))
    }
}
