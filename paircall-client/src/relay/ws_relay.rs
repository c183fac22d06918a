use crate::error::RelayError;
use crate::relay::RelayOutput;
use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use paircall_core::RelayMessage;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{error, info, warn};

enum Outbound {
    Message(RelayMessage),
    Shutdown,
}

/// WebSocket connection to the signaling relay. Writing goes through a
/// dedicated task so `send` never blocks the negotiation loop; reading
/// decodes frames into typed messages and drops the malformed ones.
/// `close` sends a Close frame, after which the reader task ends with the
/// relay's close reply.
pub struct WsRelay {
    out_tx: mpsc::Sender<Outbound>,
}

impl WsRelay {
    /// Connects and returns the relay handle plus the inbound message
    /// stream. The caller must take the receiver before sending anything,
    /// which keeps handler registration ahead of the first relay message.
    pub async fn connect(endpoint: &str) -> Result<(Self, mpsc::Receiver<RelayMessage>), RelayError> {
        info!(endpoint, "connecting to signaling relay");

        let (ws_stream, _) = connect_async(endpoint).await?;
        let (mut write, mut read) = ws_stream.split();

        let (out_tx, mut out_rx) = mpsc::channel::<Outbound>(64);
        let (in_tx, in_rx) = mpsc::channel::<RelayMessage>(64);

        tokio::spawn(async move {
            while let Some(out) = out_rx.recv().await {
                match out {
                    Outbound::Message(msg) => match serde_json::to_string(&msg) {
                        Ok(json) => {
                            if write.send(Message::Text(json.into())).await.is_err() {
                                error!("relay write failed, stopping writer");
                                break;
                            }
                        }
                        Err(e) => error!("failed to serialize relay message: {e}"),
                    },
                    Outbound::Shutdown => {
                        let _ = write.send(Message::Close(None)).await;
                        info!("relay link shut down");
                        break;
                    }
                }
            }
        });

        tokio::spawn(async move {
            while let Some(frame) = read.next().await {
                match frame {
                    Ok(Message::Text(text)) => match serde_json::from_str::<RelayMessage>(&text) {
                        Ok(msg) => {
                            if in_tx.send(msg).await.is_err() {
                                break;
                            }
                        }
                        Err(e) => warn!(error = %e, "malformed relay frame dropped"),
                    },
                    Ok(Message::Close(_)) => {
                        info!("relay closed the connection");
                        break;
                    }
                    Ok(_) => {}
                    Err(e) => {
                        error!(error = %e, "relay read error");
                        break;
                    }
                }
            }
        });

        Ok((Self { out_tx }, in_rx))
    }
}

#[async_trait]
impl RelayOutput for WsRelay {
    async fn send(&self, msg: RelayMessage) -> Result<(), RelayError> {
        self.out_tx
            .send(Outbound::Message(msg))
            .await
            .map_err(|_| RelayError::Closed)
    }

    async fn close(&self) -> Result<(), RelayError> {
        self.out_tx
            .send(Outbound::Shutdown)
            .await
            .map_err(|_| RelayError::Closed)
    }
}
