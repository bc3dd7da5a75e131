use async_trait::async_trait;

use repub::bus::endpoint::{Endpoint, Handler};
use repub::bus::message::TestEvent;
use repub::config::load_config;
use repub::driver;
use repub::retry::{RetryPolicy, RetryPublisher};
use repub::utils::logging;

/// Prints every payload the broker routes back to the subscriber queue.
struct Drainer;

#[async_trait]
impl Handler for Drainer {
    async fn handle(&self, event: TestEvent) {
        println!("Received {}", event.data);
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let settings = load_config().expect("Failed to load configuration");
    logging::init(&settings.log.level);

    let mut subscriber = Endpoint::new(&settings.bus.url, &settings.bus.subscriber_queue)
        .expect("Invalid bus connection string");
    subscriber
        .connect()
        .await
        .expect("Failed to connect subscriber endpoint");
    let topic = settings.bus.topic.clone();
    tokio::spawn(async move {
        if let Err(e) = subscriber.drain(&topic, Drainer).await {
            tracing::error!("subscriber stopped: {e}");
        }
    });

    let endpoint = Endpoint::new(&settings.bus.url, &settings.bus.publisher_queue)
        .expect("Invalid bus connection string");
    let mut publisher = RetryPublisher::new(
        endpoint,
        settings.bus.topic.clone(),
        RetryPolicy::from(&settings.retry),
    );

    if let Err(e) = driver::run(&mut publisher, &settings.driver).await {
        tracing::error!("driver aborted: {e}");
    }
}
