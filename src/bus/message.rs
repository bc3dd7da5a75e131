use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The payload carried through the bus during a test run.
///
/// Serialized as `{"Data": "..."}`; the field name is part of the payload
/// contract with existing consumers. Constructed per driver iteration and
/// discarded after the send completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestEvent {
    #[serde(rename = "Data")]
    pub data: String,
}

/// Frames the harness sends to the broker.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Frame {
    #[serde(rename = "subscribe")]
    Subscribe { topic: String },

    #[serde(rename = "publish")]
    Publish {
        topic: String,
        payload: String,
        timestamp: i64,
    },
}

impl Frame {
    /// Builds a subscribe frame for `topic`.
    pub fn subscribe(topic: &str) -> Self {
        Frame::Subscribe {
            topic: topic.to_string(),
        }
    }

    /// Builds a publish frame carrying an already-serialized payload,
    /// stamped with the current Unix time in milliseconds.
    pub fn publish(topic: &str, payload: &str) -> Self {
        Frame::Publish {
            topic: topic.to_string(),
            payload: payload.to_string(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

/// A message routed back to a subscriber by the broker.
///
/// The broker forwards the publisher's payload verbatim; `payload` still
/// has to be decoded into a [`TestEvent`] by the receiving side.
#[derive(Debug, Clone, Deserialize)]
pub struct Delivery {
    pub topic: String,
    pub payload: String,
    pub timestamp: i64,
}
