//! The `error` module defines the error types used within the `repub`
//! harness.
//!
//! Everything a publish or subscribe path can fail with is folded into
//! `BusError`, so callers retry on a single error type without inspecting
//! transport internals.

use thiserror::Error;

/// Errors surfaced by the bus endpoints and the retry wrapper.
#[derive(Debug, Error)]
pub enum BusError {
    /// The connection string could not be parsed as a URL.
    #[error("invalid connection string: {0}")]
    ConnectionString(#[from] url::ParseError),

    /// The connection string uses a scheme the transport does not speak.
    #[error("unsupported scheme '{0}': expected ws or wss")]
    UnsupportedScheme(String),

    /// Any WebSocket-level failure: connect, handshake, send, or receive.
    #[error("transport error: {0}")]
    Transport(#[from] tungstenite::Error),

    /// The broker closed the connection.
    #[error("connection closed by broker")]
    Closed,

    /// A message could not be encoded for the wire.
    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),

    /// A bounded retry policy ran out of attempts.
    #[error("gave up after {attempts} attempts: {source}")]
    RetriesExhausted {
        attempts: u64,
        #[source]
        source: Box<BusError>,
    },
}
