//! The `config` module handles loading and merging harness configuration.
//!
//! Configuration comes from an optional `config/default` file and the
//! process environment; anything not specified there falls back to the
//! defaults in `Settings::default()`. The broker connection string lives
//! under the `bus.url` key (environment override `BUS_URL`).

mod settings;

use crate::config::settings::PartialSettings;
use config::{Config, ConfigError, Environment, File};

pub use settings::{BusSettings, DriverSettings, LogSettings, RetrySettings, Settings};

/// Loads the configuration from the default file and environment variables
/// Merges the configuration with default values
/// Returns a `Settings` struct containing the log, bus, retry and driver
/// configurations
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default().separator("_"));

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    // Merge with defaults
    let default = Settings::default();

    Ok(Settings {
        log: LogSettings {
            level: partial
                .log
                .as_ref()
                .and_then(|l| l.level.clone())
                .unwrap_or(default.log.level),
        },
        bus: BusSettings {
            url: partial
                .bus
                .as_ref()
                .and_then(|b| b.url.clone())
                .unwrap_or(default.bus.url),
            topic: partial
                .bus
                .as_ref()
                .and_then(|b| b.topic.clone())
                .unwrap_or(default.bus.topic),
            publisher_queue: partial
                .bus
                .as_ref()
                .and_then(|b| b.publisher_queue.clone())
                .unwrap_or(default.bus.publisher_queue),
            subscriber_queue: partial
                .bus
                .as_ref()
                .and_then(|b| b.subscriber_queue.clone())
                .unwrap_or(default.bus.subscriber_queue),
        },
        retry: RetrySettings {
            delay_ms: partial
                .retry
                .as_ref()
                .and_then(|r| r.delay_ms)
                .unwrap_or(default.retry.delay_ms),
            max_attempts: partial
                .retry
                .as_ref()
                .and_then(|r| r.max_attempts)
                .or(default.retry.max_attempts),
        },
        driver: DriverSettings {
            message_count: partial
                .driver
                .as_ref()
                .and_then(|d| d.message_count)
                .unwrap_or(default.driver.message_count),
            pace_ms: partial
                .driver
                .as_ref()
                .and_then(|d| d.pace_ms)
                .unwrap_or(default.driver.pace_ms),
        },
    })
}
