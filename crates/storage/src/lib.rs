#![forbid(unsafe_code)]

mod backend;
mod clipboard;
mod clock;
mod connection;
mod entry;
mod memory;
mod redis;

pub use backend::{Consumption, KeyedTtlStore};
pub use clipboard::{Clipboard, PinStatus, Published};
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::Entry;
pub use memory::MemoryStore;
pub use redis::{RedisConfig, RedisStore};
