use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{info, warn};
use tungstenite::protocol::Message as WsMessage;
use url::Url;
use uuid::Uuid;

use crate::bus::message::{Delivery, Frame, TestEvent};
use crate::retry::Publish;
use crate::utils::error::BusError;

type WsConnection = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Handles messages delivered to a subscriber endpoint.
///
/// Invoked once per delivered message by the endpoint's drain loop. The
/// same payload may arrive more than once after an ambiguous broker
/// handoff; implementations must accept duplicates.
#[async_trait]
pub trait Handler: Send {
    async fn handle(&self, event: TestEvent);
}

/// One bus endpoint: an owned WebSocket connection to the broker, bound to
/// a queue name.
///
/// The endpoint is created at startup and lives for the process lifetime.
/// The connection itself is acquired lazily: `publish` connects on first
/// use and, because a failed send drops the connection handle, reconnects
/// on the attempt after a transport failure. A `wss` connection string
/// requests TLS; anything other than `ws`/`wss` is rejected up front.
#[derive(Debug)]
pub struct Endpoint {
    url: Url,
    queue: String,
    session: Uuid,
    conn: Option<WsConnection>,
}

impl Endpoint {
    /// Validates the connection string and binds the endpoint to `queue`.
    ///
    /// No network traffic happens here; the connection is established by
    /// the first `publish` or by `drain`.
    pub fn new(url: &str, queue: &str) -> Result<Self, BusError> {
        let url = Url::parse(url)?;
        match url.scheme() {
            "ws" | "wss" => {}
            other => return Err(BusError::UnsupportedScheme(other.to_string())),
        }
        Ok(Self {
            url,
            queue: queue.to_string(),
            session: Uuid::new_v4(),
            conn: None,
        })
    }

    /// Establishes the WebSocket connection to the broker.
    pub async fn connect(&mut self) -> Result<(), BusError> {
        let (conn, _response) = connect_async(self.url.as_str()).await?;
        info!(
            queue = %self.queue,
            session = %self.session,
            tls = self.url.scheme() == "wss",
            "connected to broker"
        );
        self.conn = Some(conn);
        Ok(())
    }

    /// Attempts to hand one payload to the broker.
    ///
    /// Reconnects first if no connection is live. On any transport error
    /// the connection handle is dropped so the next attempt starts from a
    /// fresh connect; the error is returned to the caller, which decides
    /// whether to retry.
    pub async fn publish(&mut self, topic: &str, payload: &str) -> Result<(), BusError> {
        if self.conn.is_none() {
            self.connect().await?;
        }
        let frame = serde_json::to_string(&Frame::publish(topic, payload))?;
        let result = match self.conn.as_mut() {
            Some(conn) => conn.send(WsMessage::text(frame)).await,
            None => return Err(BusError::Closed),
        };
        if let Err(e) = result {
            self.conn = None;
            return Err(BusError::Transport(e));
        }
        Ok(())
    }

    /// Subscribes to `topic` and dispatches every delivered message to
    /// `handler` until the connection ends.
    ///
    /// Frames that do not decode as deliveries are broker chatter, not
    /// payload loss; they are logged and skipped. Returns `Closed` when
    /// the broker hangs up.
    pub async fn drain<H: Handler>(mut self, topic: &str, handler: H) -> Result<(), BusError> {
        if self.conn.is_none() {
            self.connect().await?;
        }
        let Some(mut conn) = self.conn.take() else {
            return Err(BusError::Closed);
        };

        let frame = serde_json::to_string(&Frame::subscribe(topic))?;
        conn.send(WsMessage::text(frame)).await?;
        info!(queue = %self.queue, topic = %topic, "subscribed");

        while let Some(msg) = conn.next().await {
            let msg = msg?;
            if !msg.is_text() {
                continue;
            }
            let text = msg.to_text()?;
            match serde_json::from_str::<Delivery>(text) {
                Ok(delivery) => match serde_json::from_str::<TestEvent>(&delivery.payload) {
                    Ok(event) => handler.handle(event).await,
                    Err(e) => {
                        warn!(topic = %delivery.topic, "undecodable payload: {e}");
                    }
                },
                Err(e) => {
                    warn!("ignoring non-delivery frame: {e}");
                }
            }
        }
        Err(BusError::Closed)
    }
}

#[async_trait]
impl Publish for Endpoint {
    async fn publish(&mut self, topic: &str, payload: &str) -> Result<(), BusError> {
        Endpoint::publish(self, topic, payload).await
    }
}
