//! Error types for decoding responses and running queries.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type for codec operations.
pub type DecodeResult<T> = Result<T, ProtocolError>;

/// A response that could not be decoded.
///
/// Decoding stops at the first of these; nothing is returned for a packet
/// that produced one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Fewer bytes than the fixed response header.
    #[error("packet too short: {actual} bytes, need at least {required}")]
    TooShort { actual: usize, required: usize },

    /// Header marker `-2`, the multi-datagram response format.
    #[error("split-packet responses are not supported")]
    UnsupportedSplitPacket,

    /// Header marker other than `-1` or `-2`.
    #[error("unsupported packet header marker: {found}")]
    BadMarker { found: i32 },

    /// The type byte does not belong to the query that was sent.
    #[error("unexpected packet type: saw 0x{seen:02X}, expected 0x{expected:02X}")]
    UnexpectedType { seen: u8, expected: u8 },

    /// A field runs past the end of the payload.
    #[error("truncated payload: {needed} bytes needed at offset {offset}, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// The advertised rule count does not match the rules present.
    #[error("rule count mismatch: expected {expected}, parsed {actual}")]
    CountMismatch { expected: usize, actual: usize },

    /// A challenge payload that is not exactly four bytes.
    #[error("challenge must be 4 bytes, got {actual}")]
    InvalidChallengeLength { actual: usize },
}

/// Failures of the request/response exchange itself.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("failed to resolve {host}: {message}")]
    Resolve { host: String, message: String },

    #[error("failed to bind UDP socket: {0}")]
    Bind(#[source] std::io::Error),

    #[error("failed to send query to {addr}: {source}")]
    Send {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to receive response from {addr}: {source}")]
    Receive {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("no response from {addr} within {after:?}")]
    Timeout { addr: SocketAddr, after: Duration },
}

/// Error returned by [`ServerQuery`](crate::ServerQuery) operations.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The server kept answering with fresh challenges.
    #[error("server issued {attempts} challenges without answering the query")]
    ChallengeLoop { attempts: usize },
}

/// Errors loading a [`QueryConfig`](crate::QueryConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
