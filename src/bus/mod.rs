//! The `bus` module is the harness's view of the message bus.
//!
//! It defines the JSON wire frames exchanged with the broker over
//! WebSocket, the test payload type, and `Endpoint`, which owns one broker
//! connection and offers the publish and subscribe operations.

pub mod endpoint;
pub mod message;

pub use endpoint::{Endpoint, Handler};

#[cfg(test)]
mod tests;
