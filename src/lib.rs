//! Source engine server queries (A2S).
//!
//! [`codec`] turns queries into datagrams and single-packet responses into
//! typed values without touching the network. [`ServerQuery`] runs the UDP
//! exchange around it.

#[macro_use]
extern crate tracing;

pub mod codec;
mod config;
mod dns;
mod error;
mod server;

pub use codec::{Challenge, Environment, ExtraData, Player, Request, Rule, ServerInfo, ServerType, SourceTv};
pub use config::*;
pub use error::*;
pub use server::*;
