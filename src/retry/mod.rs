//! The `retry` module wraps the publish operation in a retry loop.
//!
//! Every failure coming back from the transport is treated as transient:
//! the wrapper logs it, waits a fixed delay, and re-attempts the same
//! payload. With the default policy the loop never gives up, so a send
//! either succeeds exactly once or blocks until the broker comes back.

use std::time::Duration;

use async_trait::async_trait;
use tracing::error;

use crate::bus::message::TestEvent;
use crate::config::RetrySettings;
use crate::utils::error::BusError;

/// The minimal transport contract the retry wrapper needs: one publish
/// attempt that either completes or fails with a `BusError`.
#[async_trait]
pub trait Publish {
    async fn publish(&mut self, topic: &str, payload: &str) -> Result<(), BusError>;
}

/// How failed publishes are re-attempted.
///
/// The delay is constant across attempts; there is no backoff. A
/// `max_attempts` of `None` retries forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub delay: Duration,
    pub max_attempts: Option<u64>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(500),
            max_attempts: None,
        }
    }
}

impl From<&RetrySettings> for RetryPolicy {
    fn from(settings: &RetrySettings) -> Self {
        Self {
            delay: Duration::from_millis(settings.delay_ms),
            max_attempts: settings.max_attempts,
        }
    }
}

/// A publisher that keeps re-sending a failed payload until the transport
/// accepts it.
///
/// The loop is iterative on purpose: sustained broker unavailability must
/// not grow the stack, however many attempts it takes.
#[derive(Debug)]
pub struct RetryPublisher<P> {
    transport: P,
    topic: String,
    policy: RetryPolicy,
}

impl<P: Publish + Send> RetryPublisher<P> {
    pub fn new(transport: P, topic: impl Into<String>, policy: RetryPolicy) -> Self {
        Self {
            transport,
            topic: topic.into(),
            policy,
        }
    }

    /// Hands `event` to the transport, retrying after each failure.
    ///
    /// The payload is serialized once and the same bytes are re-sent on
    /// every attempt; a message is never silently dropped. Returns an
    /// error only when a bounded policy runs out of attempts (or the
    /// payload cannot be encoded at all, which no retry would fix).
    pub async fn send(&mut self, event: &TestEvent) -> Result<(), BusError> {
        let payload = serde_json::to_string(event)?;
        let mut attempts: u64 = 0;
        loop {
            match self.transport.publish(&self.topic, &payload).await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    attempts += 1;
                    error!("Error, retrying: {e}");
                    if let Some(max) = self.policy.max_attempts {
                        if attempts >= max {
                            return Err(BusError::RetriesExhausted {
                                attempts,
                                source: Box::new(e),
                            });
                        }
                    }
                    tokio::time::sleep(self.policy.delay).await;
                }
            }
        }
    }
}
