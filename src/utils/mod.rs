//! The `utils` module provides shared plumbing used across the `repub`
//! harness: one-shot logging initialization and the central error types.

pub mod error;
pub mod logging;
