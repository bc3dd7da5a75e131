use serde::Deserialize;

/// Top-level configuration settings for the harness.
///
/// Includes settings for logging, the bus connection, the retry policy and
/// the driver loop.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub log: LogSettings,
    pub bus: BusSettings,
    pub retry: RetrySettings,
    pub driver: DriverSettings,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
}

/// Connection parameters for the message bus.
///
/// `url` is the broker connection string; a `wss` scheme requests
/// transport-level encryption. Each endpoint is bound to one queue name.
#[derive(Debug, Deserialize, Clone)]
pub struct BusSettings {
    pub url: String,
    pub topic: String,
    pub publisher_queue: String,
    pub subscriber_queue: String,
}

/// Retry policy for the publish path.
///
/// `max_attempts` of `None` means the retry loop never gives up.
#[derive(Debug, Deserialize, Clone)]
pub struct RetrySettings {
    pub delay_ms: u64,
    pub max_attempts: Option<u64>,
}

/// Parameters of the driver loop: how many messages to send and how far
/// apart successful sends are paced.
#[derive(Debug, Deserialize, Clone)]
pub struct DriverSettings {
    pub message_count: u32,
    pub pace_ms: u64,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub log: Option<PartialLogSettings>,
    pub bus: Option<PartialBusSettings>,
    pub retry: Option<PartialRetrySettings>,
    pub driver: Option<PartialDriverSettings>,
}

/// Partial logging settings.
#[derive(Debug, Deserialize)]
pub struct PartialLogSettings {
    pub level: Option<String>,
}

/// Partial bus settings.
///
/// Used when loading the connection configuration from external sources
/// with optional values.
#[derive(Debug, Deserialize)]
pub struct PartialBusSettings {
    pub url: Option<String>,
    pub topic: Option<String>,
    pub publisher_queue: Option<String>,
    pub subscriber_queue: Option<String>,
}

/// Partial retry settings.
#[derive(Debug, Deserialize)]
pub struct PartialRetrySettings {
    pub delay_ms: Option<u64>,
    pub max_attempts: Option<u64>,
}

/// Partial driver settings.
#[derive(Debug, Deserialize)]
pub struct PartialDriverSettings {
    pub message_count: Option<u32>,
    pub pace_ms: Option<u64>,
}

/// Provides default values for `Settings`.
///
/// Ensures the harness has sensible defaults if no configuration is provided:
/// a local unencrypted broker, a 500 ms unbounded retry, and 100 messages
/// paced one second apart.
impl Default for Settings {
    fn default() -> Self {
        Self {
            log: LogSettings {
                level: "info".to_string(),
            },
            bus: BusSettings {
                url: "ws://127.0.0.1:8080".to_string(),
                topic: "test.events".to_string(),
                publisher_queue: "repub.publisher".to_string(),
                subscriber_queue: "repub".to_string(),
            },
            retry: RetrySettings {
                delay_ms: 500,
                max_attempts: None,
            },
            driver: DriverSettings {
                message_count: 100,
                pace_ms: 1000,
            },
        }
    }
}
