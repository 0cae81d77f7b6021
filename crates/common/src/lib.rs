#![forbid(unsafe_code)]

mod error;
mod pin;

pub use error::*;
pub use pin::Pin;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";
pub const DEFAULT_KEY_PREFIX: &str = "clip:";
pub const ENTRY_TTL_SECS: u64 = 300; // 5 minutos
pub const PIN_LEN: usize = 4;
pub const INITIAL_BUFFER_CAPACITY: usize = 4 * 1024; // 4 KB
pub const MAX_FRAME_SIZE: usize = 64 * 1024 * 1024; // 64 MB
