use crate::session::engine::NegotiationEngine;
use paircall_core::{RelayMessage, Role, SdpKind};
use tracing::{debug, warn};

/// Dispatches one inbound relay message into the engine. Malformed or
/// out-of-place messages are dropped with a diagnostic; a failed engine
/// operation fails that message only and the session keeps going. Ordering
/// is the relay's FIFO guarantee, nothing is buffered here.
pub(crate) async fn route(engine: &mut NegotiationEngine, msg: RelayMessage) {
    if msg.room() != engine.room() {
        warn!(
            kind = msg.kind(),
            room = %msg.room(),
            session_room = %engine.room(),
            "message for another room dropped"
        );
        return;
    }

    match msg {
        // Relay-internal control traffic; members never consume these.
        RelayMessage::Create { .. } | RelayMessage::Join { .. } => {
            debug!(kind = msg.kind(), "relay control message ignored");
        }

        RelayMessage::Offer { offer, .. } => {
            if engine.role() != Role::Initiator {
                warn!("offer received on responder side, dropped");
                return;
            }
            if offer.kind != SdpKind::Offer || offer.sdp.is_empty() {
                warn!("malformed offer payload dropped");
                return;
            }
            if let Err(e) = engine.apply_remote_offer(offer).await {
                warn!(error = %e, "offer rejected");
            }
        }

        RelayMessage::Answer { answer, .. } => {
            if engine.role() != Role::Responder {
                warn!("answer received on initiator side, dropped");
                return;
            }
            if answer.kind != SdpKind::Answer || answer.sdp.is_empty() {
                warn!("malformed answer payload dropped");
                return;
            }
            if let Err(e) = engine.apply_remote_answer(answer).await {
                warn!(error = %e, "answer rejected");
            }
        }

        RelayMessage::Candidate {
            candidate: None, ..
        } => {
            // Gathering-complete marker, nothing to apply.
            debug!("null candidate ignored");
        }

        RelayMessage::Candidate {
            candidate: Some(candidate),
            ..
        } => {
            if candidate.candidate.is_empty() {
                warn!("empty candidate payload dropped");
                return;
            }
            if let Err(e) = engine.apply_remote_candidate(candidate).await {
                warn!(error = %e, "candidate rejected");
            }
        }
    }
}
