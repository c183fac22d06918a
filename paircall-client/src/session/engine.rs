use crate::connectivity::{Connectivity, ConnectivityEvent, LinkState};
use crate::error::NegotiationError;
use crate::media::MediaSink;
use crate::relay::RelayOutput;
use crate::session::room_session::{NegotiationPhase, RoomSession};
use crate::session::router;
use paircall_core::{IceCandidate, RelayMessage, Role, RoomId, SdpKind, SessionDescription};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tracing::{debug, info, warn};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Stop,
}

/// Drives the offer/answer/candidate exchange for one session. Inbound relay
/// messages and connectivity events are consumed on a single task; outbound
/// messages go through the relay handle owned here. All ordering invariants
/// of the exchange live in this type and `RoomSession`.
pub(crate) struct NegotiationEngine {
    session: RoomSession,
    connectivity: Arc<dyn Connectivity>,
    relay: Arc<dyn RelayOutput>,
    sink: Arc<dyn MediaSink>,
    relay_rx: mpsc::Receiver<RelayMessage>,
    connectivity_rx: mpsc::Receiver<ConnectivityEvent>,
    state_tx: watch::Sender<LinkState>,
    negotiation_timeout: Option<Duration>,
}

impl NegotiationEngine {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        session: RoomSession,
        connectivity: Arc<dyn Connectivity>,
        relay: Arc<dyn RelayOutput>,
        sink: Arc<dyn MediaSink>,
        relay_rx: mpsc::Receiver<RelayMessage>,
        connectivity_rx: mpsc::Receiver<ConnectivityEvent>,
        state_tx: watch::Sender<LinkState>,
        negotiation_timeout: Option<Duration>,
    ) -> Self {
        Self {
            session,
            connectivity,
            relay,
            sink,
            relay_rx,
            connectivity_rx,
            state_tx,
            negotiation_timeout,
        }
    }

    pub(crate) fn room(&self) -> &RoomId {
        self.session.room()
    }

    pub(crate) fn role(&self) -> Role {
        self.session.role()
    }

    /// Responder start: create the local offer, publish it, then wait for
    /// the answer. Must run before the event loop so the offer precedes any
    /// candidate this side gathers for the relay.
    pub(crate) async fn send_offer(&mut self) -> Result<(), NegotiationError> {
        let offer = self
            .connectivity
            .create_offer()
            .await
            .map_err(NegotiationError::Connectivity)?;

        self.session.record_local(SdpKind::Offer)?;
        self.connectivity
            .set_local_description(offer.clone())
            .await
            .map_err(NegotiationError::Connectivity)?;
        self.session.advance(NegotiationPhase::LocalOfferSet);

        self.relay
            .send(RelayMessage::Offer {
                room: self.session.room().clone(),
                offer,
            })
            .await?;
        self.session.advance(NegotiationPhase::AwaitingRemoteAnswer);

        info!(room = %self.session.room(), "offer sent, awaiting answer");
        Ok(())
    }

    /// Initiator: the peer's offer is the first description operation on
    /// this side. Applies it, synthesizes the answer, publishes it.
    pub(crate) async fn apply_remote_offer(
        &mut self,
        offer: SessionDescription,
    ) -> Result<(), NegotiationError> {
        self.session.record_remote(SdpKind::Offer)?;
        self.connectivity
            .set_remote_description(offer)
            .await
            .map_err(NegotiationError::Connectivity)?;

        let answer = self
            .connectivity
            .create_answer()
            .await
            .map_err(NegotiationError::Connectivity)?;

        self.session.record_local(SdpKind::Answer)?;
        self.connectivity
            .set_local_description(answer.clone())
            .await
            .map_err(NegotiationError::Connectivity)?;

        self.relay
            .send(RelayMessage::Answer {
                room: self.session.room().clone(),
                answer,
            })
            .await?;
        self.session.advance(NegotiationPhase::Connected);

        info!(room = %self.session.room(), "answer sent, descriptions exchanged");
        Ok(())
    }

    /// Responder: the peer accepted our offer.
    pub(crate) async fn apply_remote_answer(
        &mut self,
        answer: SessionDescription,
    ) -> Result<(), NegotiationError> {
        self.session.record_remote(SdpKind::Answer)?;
        self.connectivity
            .set_remote_description(answer)
            .await
            .map_err(NegotiationError::Connectivity)?;
        self.session.advance(NegotiationPhase::Connected);

        info!(room = %self.session.room(), "answer applied, descriptions exchanged");
        Ok(())
    }

    /// Candidates are only valid once the remote description exists; there
    /// is no buffering here, the producing side sends its description first.
    pub(crate) async fn apply_remote_candidate(
        &mut self,
        candidate: IceCandidate,
    ) -> Result<(), NegotiationError> {
        if !self.session.remote_description_set() {
            return Err(NegotiationError::CandidateBeforeRemoteDescription);
        }
        self.connectivity
            .add_candidate(candidate)
            .await
            .map_err(NegotiationError::Connectivity)
    }

    async fn handle_connectivity_event(&mut self, event: ConnectivityEvent) -> Flow {
        match event {
            ConnectivityEvent::CandidateGenerated(Some(candidate)) => {
                let msg = RelayMessage::Candidate {
                    room: self.session.room().clone(),
                    candidate: Some(candidate),
                };
                if let Err(e) = self.relay.send(msg).await {
                    warn!(error = %e, "failed to publish local candidate");
                }
                Flow::Continue
            }
            ConnectivityEvent::CandidateGenerated(None) => {
                debug!(room = %self.session.room(), "candidate gathering complete");
                Flow::Continue
            }
            ConnectivityEvent::TrackReceived(track) => {
                self.sink.bind(track).await;
                Flow::Continue
            }
            ConnectivityEvent::StateChanged(state) => {
                self.state_tx.send_replace(state);
                match state {
                    LinkState::Disconnected | LinkState::Failed | LinkState::Closed => {
                        info!(room = %self.session.room(), ?state, "link ended");
                        Flow::Stop
                    }
                    _ => Flow::Continue,
                }
            }
        }
    }

    pub(crate) async fn run(mut self) {
        info!(
            room = %self.session.room(),
            role = %self.session.role(),
            "negotiation loop started"
        );

        let deadline = self.negotiation_timeout.map(|t| Instant::now() + t);

        loop {
            let negotiating = self.session.phase() != NegotiationPhase::Connected;

            tokio::select! {
                _ = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)),
                    if negotiating && deadline.is_some() =>
                {
                    warn!(room = %self.session.room(), "negotiation deadline passed");
                    self.state_tx.send_replace(LinkState::Failed);
                    break;
                }

                msg = self.relay_rx.recv() => {
                    match msg {
                        Some(m) => router::route(&mut self, m).await,
                        None => {
                            info!("relay stream closed, shutting session down");
                            break;
                        }
                    }
                }

                event = self.connectivity_rx.recv() => {
                    match event {
                        Some(e) => {
                            if self.handle_connectivity_event(e).await == Flow::Stop {
                                break;
                            }
                        }
                        None => {
                            warn!("connectivity event channel closed unexpectedly");
                            break;
                        }
                    }
                }
            }
        }

        if let Err(e) = self.connectivity.close().await {
            debug!(error = %e, "connectivity close reported an error");
        }
        if let Err(e) = self.relay.close().await {
            debug!(error = %e, "relay close reported an error");
        }

        info!(room = %self.session.room(), "negotiation loop finished");
    }
}
