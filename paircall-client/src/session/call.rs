use crate::config::ClientConfig;
use crate::connectivity::{Connectivity, ConnectivityEvent, LinkState, RtcLink};
use crate::error::NegotiationError;
use crate::media::{LocalMedia, MediaSink, MediaSource};
use crate::relay::{RelayOutput, WsRelay};
use crate::session::engine::NegotiationEngine;
use crate::session::room_session::RoomSession;
use paircall_core::{RelayMessage, Role, RoomId};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::info;

/// Everything a session needs, bundled so tests can inject capturing
/// doubles where production wires the WebSocket relay and the `webrtc`
/// backend. Both inbound receivers exist before any relay message leaves,
/// so an early peer reply cannot be missed.
pub struct SessionParts {
    pub media: Arc<dyn MediaSource>,
    pub sink: Arc<dyn MediaSink>,
    pub connectivity: Arc<dyn Connectivity>,
    pub connectivity_rx: mpsc::Receiver<ConnectivityEvent>,
    pub relay: Arc<dyn RelayOutput>,
    pub relay_rx: mpsc::Receiver<RelayMessage>,
    pub config: ClientConfig,
}

impl SessionParts {
    /// Production wiring: WebSocket relay link plus `RtcLink` backend.
    pub async fn over_websocket(
        config: ClientConfig,
        media: Arc<dyn MediaSource>,
        sink: Arc<dyn MediaSink>,
    ) -> Result<Self, NegotiationError> {
        let (relay, relay_rx) = WsRelay::connect(&config.relay_endpoint).await?;

        let (event_tx, connectivity_rx) = mpsc::channel(64);
        let connectivity = RtcLink::new(&config, event_tx)
            .await
            .map_err(NegotiationError::Connectivity)?;

        Ok(Self {
            media,
            sink,
            connectivity: Arc::new(connectivity),
            connectivity_rx,
            relay: Arc::new(relay),
            relay_rx,
            config,
        })
    }
}

/// One two-party call, from room announcement to teardown. Single-use: a
/// fresh session is required to negotiate again. Dropping it aborts the
/// negotiation loop; `close` additionally shuts the connectivity object
/// down right away.
pub struct CallSession {
    room: RoomId,
    role: Role,
    local_media: LocalMedia,
    connectivity: Arc<dyn Connectivity>,
    relay: Arc<dyn RelayOutput>,
    state_rx: watch::Receiver<LinkState>,
    task: JoinHandle<()>,
}

impl CallSession {
    /// Opens a room on the relay and waits for a peer to join and send an
    /// offer. Emits exactly one `create` message.
    pub async fn create_room(
        room: impl Into<RoomId>,
        parts: SessionParts,
    ) -> Result<Self, NegotiationError> {
        Self::start(room.into(), Role::Initiator, parts).await
    }

    /// Joins an existing room and opens the negotiation with an offer.
    /// Emits exactly one `join` message, then exactly one `offer`.
    pub async fn join_room(
        room: impl Into<RoomId>,
        parts: SessionParts,
    ) -> Result<Self, NegotiationError> {
        Self::start(room.into(), Role::Responder, parts).await
    }

    async fn start(
        room: RoomId,
        role: Role,
        parts: SessionParts,
    ) -> Result<Self, NegotiationError> {
        let connectivity = parts.connectivity.clone();
        match Self::setup(room, role, parts).await {
            Ok(session) => Ok(session),
            Err(e) => {
                // Setup never reached the engine loop, so the loop's
                // close-on-exit cannot run; release the backend here.
                let _ = connectivity.close().await;
                Err(e)
            }
        }
    }

    async fn setup(
        room: RoomId,
        role: Role,
        parts: SessionParts,
    ) -> Result<Self, NegotiationError> {
        // Media first: an acquisition failure aborts the session before the
        // relay hears anything about this room.
        let local_media = parts
            .media
            .acquire()
            .await
            .map_err(NegotiationError::Media)?;

        for track in &local_media.tracks {
            parts
                .connectivity
                .attach_track(track)
                .await
                .map_err(NegotiationError::Connectivity)?;
        }

        let announce = match role {
            Role::Initiator => RelayMessage::Create { room: room.clone() },
            Role::Responder => RelayMessage::Join { room: room.clone() },
        };
        parts.relay.send(announce).await?;

        info!(room = %room, %role, "session announced to relay");

        let (state_tx, state_rx) = watch::channel(LinkState::New);
        let connectivity = parts.connectivity.clone();
        let relay = parts.relay.clone();

        let mut engine = NegotiationEngine::new(
            RoomSession::new(room.clone(), role),
            parts.connectivity,
            parts.relay,
            parts.sink,
            parts.relay_rx,
            parts.connectivity_rx,
            state_tx,
            parts.config.negotiation_timeout,
        );

        if role == Role::Responder {
            engine.send_offer().await?;
        }

        let task = tokio::spawn(engine.run());

        Ok(Self {
            room,
            role,
            local_media,
            connectivity,
            relay,
            state_rx,
            task,
        })
    }

    pub fn room(&self) -> &RoomId {
        &self.room
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn local_media(&self) -> &LocalMedia {
        &self.local_media
    }

    /// Caller-facing connectivity signal. Starts at `New` and follows the
    /// backend's state reports.
    pub fn state(&self) -> watch::Receiver<LinkState> {
        self.state_rx.clone()
    }

    pub fn is_connected(&self) -> bool {
        *self.state_rx.borrow() == LinkState::Connected
    }

    /// Ends the session: stops the negotiation loop, closes the
    /// connectivity object (releasing the media attached to it) and shuts
    /// the relay link down.
    pub async fn close(self) {
        self.task.abort();
        let _ = self.connectivity.close().await;
        let _ = self.relay.close().await;
    }
}

impl Drop for CallSession {
    fn drop(&mut self) {
        self.task.abort();
    }
}
