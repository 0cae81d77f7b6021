#![forbid(unsafe_code)]

mod command;
mod frame;
mod parse;
mod wire;

pub use command::{Command, Op};
pub use frame::Frame;
pub use parse::Parse;
pub use wire::{
    ConsumeReply, ErrorReply, PingReply, PinRequest, PutReply, PutRequest, StatusReply,
};
