//! # repub
//!
//! `repub` is a diagnostic harness for a message-bus publish path. It runs
//! two bus endpoints against an external JSON-over-WebSocket broker — one
//! publisher, one subscriber — and drives a fixed sequence of payloads
//! through a retry-guarded publish that repeats failed sends after a
//! constant delay, without limit.
//!
//! ## Core Modules
//!
//! The library is structured into several modules, each with a distinct responsibility:
//!
//! - `bus`: wire frames, the test payload, and the `Endpoint` that owns a broker connection.
//! - `retry`: the retry policy and the retry-guarded publisher.
//! - `driver`: the paced loop that produces the message sequence.
//! - `config`: loading and merging harness configuration.
//! - `utils`: shared utilities, such as logging setup and error types.

pub mod bus;
pub mod config;
pub mod driver;
pub mod retry;
pub mod utils;
