use bytes::{Buf, BufMut, Bytes, BytesMut};
use std::io::Cursor;
use burnpin_common::{MAX_FRAME_SIZE, ProtocolError};

/// Frame RESP2 trocado com o backend Redis.
///
/// Do lado do cliente só enviamos arrays de bulk strings (comandos) e
/// recebemos qualquer um dos tipos como resposta.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Simple(String),
    Error(String),
    Integer(i64),
    Bulk(Bytes),
    Null,
    Array(Vec<Frame>),
}

impl Frame {
    /// Monta um comando (array de bulk strings) a partir dos argumentos.
    pub fn command<S: AsRef<str>>(args: &[S]) -> Frame {
        Frame::Array(
            args.iter()
                .map(|a| Frame::Bulk(Bytes::copy_from_slice(a.as_ref().as_bytes())))
                .collect(),
        )
    }

    /// Tenta decodificar um frame completo no início de `src`.
    ///
    /// `Ok(None)` indica que ainda faltam bytes. Em caso de sucesso devolve o
    /// frame e quantos bytes ele ocupava, para o chamador avançar o buffer.
    pub fn decode(src: &[u8]) -> Result<Option<(Frame, usize)>, ProtocolError> {
        let mut cursor = Cursor::new(src);
        match read_frame(&mut cursor) {
            Ok(frame) => Ok(Some((frame, cursor.position() as usize))),
            Err(ProtocolError::Incomplete) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Encoda o frame no buffer de saída.
    pub fn encode(&self, dst: &mut BytesMut) {
        match self {
            Frame::Simple(s) => {
                dst.put_u8(b'+');
                dst.put_slice(s.as_bytes());
                dst.put_slice(b"\r\n");
            }
            Frame::Error(s) => {
                dst.put_u8(b'-');
                dst.put_slice(s.as_bytes());
                dst.put_slice(b"\r\n");
            }
            Frame::Integer(n) => put_header(dst, b':', *n),
            Frame::Bulk(data) => {
                put_header(dst, b'$', data.len() as i64);
                dst.put_slice(data);
                dst.put_slice(b"\r\n");
            }
            Frame::Null => dst.put_slice(b"$-1\r\n"),
            Frame::Array(items) => {
                put_header(dst, b'*', items.len() as i64);
                for item in items {
                    item.encode(dst);
                }
            }
        }
    }

    /// Conteúdo textual de `Simple` ou `Bulk`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Frame::Simple(s) => Some(s),
            Frame::Bulk(data) => std::str::from_utf8(data).ok(),
            _ => None,
        }
    }
}

fn put_header(dst: &mut BytesMut, prefix: u8, n: i64) {
    dst.put_u8(prefix);
    dst.put_slice(n.to_string().as_bytes());
    dst.put_slice(b"\r\n");
}

fn read_frame(src: &mut Cursor<&[u8]>) -> Result<Frame, ProtocolError> {
    match get_u8(src)? {
        b'+' => Ok(Frame::Simple(get_text(src)?)),
        b'-' => Ok(Frame::Error(get_text(src)?)),
        b':' => Ok(Frame::Integer(get_decimal(src)?)),
        b'$' => {
            let len = get_decimal(src)?;
            if len == -1 {
                return Ok(Frame::Null);
            }
            let len = checked_len(len)?;
            if src.remaining() < len + 2 {
                return Err(ProtocolError::Incomplete);
            }
            let start = src.position() as usize;
            let raw = &src.get_ref()[start..start + len + 2];
            if &raw[len..] != b"\r\n" {
                return Err(ProtocolError::InvalidEncoding(
                    "bulk sem terminador CRLF".into(),
                ));
            }
            let data = Bytes::copy_from_slice(&raw[..len]);
            src.advance(len + 2);
            Ok(Frame::Bulk(data))
        }
        b'*' => {
            // *-1 é o array nulo (ex.: EXEC abortado); tratamos como Null
            let count = get_decimal(src)?;
            if count == -1 {
                return Ok(Frame::Null);
            }
            let count = checked_len(count)?;
            let mut items = Vec::with_capacity(count.min(16));
            for _ in 0..count {
                items.push(read_frame(src)?);
            }
            Ok(Frame::Array(items))
        }
        byte => Err(ProtocolError::InvalidFrameType(byte)),
    }
}

fn checked_len(len: i64) -> Result<usize, ProtocolError> {
    if len < 0 {
        return Err(ProtocolError::InvalidBulkLength(len));
    }
    let len = len as usize;
    if len > MAX_FRAME_SIZE {
        return Err(ProtocolError::FrameTooLarge(len));
    }
    Ok(len)
}

fn get_u8(src: &mut Cursor<&[u8]>) -> Result<u8, ProtocolError> {
    if !src.has_remaining() {
        return Err(ProtocolError::Incomplete);
    }
    Ok(src.get_u8())
}

fn get_line<'a>(src: &mut Cursor<&'a [u8]>) -> Result<&'a [u8], ProtocolError> {
    let buf: &'a [u8] = *src.get_ref();
    let start = src.position() as usize;

    let end = buf[start..]
        .windows(2)
        .position(|w| w == b"\r\n")
        .ok_or(ProtocolError::Incomplete)?;

    src.set_position((start + end + 2) as u64);
    Ok(&buf[start..start + end])
}

fn get_text(src: &mut Cursor<&[u8]>) -> Result<String, ProtocolError> {
    let line = get_line(src)?;
    String::from_utf8(line.to_vec()).map_err(|e| ProtocolError::InvalidEncoding(e.to_string()))
}

fn get_decimal(src: &mut Cursor<&[u8]>) -> Result<i64, ProtocolError> {
    let line = get_line(src)?;
    let s = std::str::from_utf8(line).map_err(|e| ProtocolError::InvalidInteger(e.to_string()))?;
    s.parse::<i64>()
        .map_err(|e| ProtocolError::InvalidInteger(e.to_string()))
}
