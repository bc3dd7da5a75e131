use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use super::run;
use crate::config::DriverSettings;
use crate::retry::{Publish, RetryPolicy, RetryPublisher};
use crate::utils::error::BusError;

/// Accepts every publish and records the payload and virtual send time.
struct RecordingTransport {
    sent: Arc<Mutex<Vec<(tokio::time::Instant, String)>>>,
}

#[async_trait]
impl Publish for RecordingTransport {
    async fn publish(&mut self, _topic: &str, payload: &str) -> Result<(), BusError> {
        self.sent
            .lock()
            .unwrap()
            .push((tokio::time::Instant::now(), payload.to_string()));
        Ok(())
    }
}

/// Never accepts anything.
struct DeadTransport {
    attempted: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl Publish for DeadTransport {
    async fn publish(&mut self, _topic: &str, payload: &str) -> Result<(), BusError> {
        self.attempted.lock().unwrap().push(payload.to_string());
        Err(BusError::Closed)
    }
}

#[tokio::test(start_paused = true)]
async fn test_driver_sends_each_message_exactly_once() {
    let sent = Arc::new(Mutex::new(Vec::new()));
    let transport = RecordingTransport { sent: sent.clone() };
    let mut publisher = RetryPublisher::new(transport, "test.events", RetryPolicy::default());
    let settings = DriverSettings {
        message_count: 5,
        pace_ms: 1000,
    };

    run(&mut publisher, &settings).await.expect("driver run");

    let sent = sent.lock().unwrap();
    let payloads: Vec<&str> = sent.iter().map(|(_, p)| p.as_str()).collect();
    assert_eq!(
        payloads,
        [
            r#"{"Data":"test 0"}"#,
            r#"{"Data":"test 1"}"#,
            r#"{"Data":"test 2"}"#,
            r#"{"Data":"test 3"}"#,
            r#"{"Data":"test 4"}"#,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_driver_paces_successful_sends() {
    let sent = Arc::new(Mutex::new(Vec::new()));
    let transport = RecordingTransport { sent: sent.clone() };
    let mut publisher = RetryPublisher::new(transport, "test.events", RetryPolicy::default());
    let settings = DriverSettings {
        message_count: 4,
        pace_ms: 1000,
    };

    run(&mut publisher, &settings).await.expect("driver run");

    let sent = sent.lock().unwrap();
    for pair in sent.windows(2) {
        assert_eq!(pair[1].0 - pair[0].0, Duration::from_millis(1000));
    }
}

#[tokio::test(start_paused = true)]
async fn test_driver_never_advances_past_a_failing_message() {
    let attempted = Arc::new(Mutex::new(Vec::new()));
    let transport = DeadTransport {
        attempted: attempted.clone(),
    };
    let mut publisher = RetryPublisher::new(transport, "test.events", RetryPolicy::default());
    let settings = DriverSettings {
        message_count: 3,
        pace_ms: 1000,
    };

    // with an unbounded policy the run can never finish; give it an hour
    // of virtual time and make sure only the first message was ever tried
    let outcome =
        tokio::time::timeout(Duration::from_secs(3600), run(&mut publisher, &settings)).await;
    assert!(outcome.is_err(), "driver should still be stuck");

    let attempted = attempted.lock().unwrap();
    assert!(!attempted.is_empty());
    for payload in attempted.iter() {
        assert_eq!(payload, r#"{"Data":"test 0"}"#);
    }
}
