//! The `driver` module produces the fixed message sequence for a test run.
//!
//! One hundred payloads by default, sent one at a time through the
//! retry-guarded publisher. The loop is strictly sequential: it does not
//! move on until the current message has been accepted by the transport.

use std::time::Duration;

use tracing::debug;

use crate::bus::message::TestEvent;
use crate::config::DriverSettings;
use crate::retry::{Publish, RetryPublisher};
use crate::utils::error::BusError;

/// Sends `message_count` sequential payloads (`test 0`, `test 1`, ...)
/// through `publisher`, pacing successful sends `pace_ms` apart.
///
/// Fails only if the publisher itself gives up, which with an unbounded
/// retry policy it never does.
pub async fn run<P: Publish + Send>(
    publisher: &mut RetryPublisher<P>,
    settings: &DriverSettings,
) -> Result<(), BusError> {
    let pace = Duration::from_millis(settings.pace_ms);
    for i in 0..settings.message_count {
        let event = TestEvent {
            data: format!("test {i}"),
        };
        publisher.send(&event).await?;
        debug!("sent message {i}");
        tokio::time::sleep(pace).await;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
