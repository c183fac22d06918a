use crate::error::NegotiationError;
use paircall_core::{Role, RoomId, SdpKind};

/// Where one session stands in the offer/answer exchange. The initiator
/// idles until the peer's offer arrives and then jumps straight to
/// `Connected`; the responder walks through the offer-sending phases.
/// `Connected` means both descriptions are in place; ICE keeps converging
/// underneath and is reported through `LinkState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegotiationPhase {
    Idle,
    LocalOfferSet,
    AwaitingRemoteAnswer,
    Connected,
}

/// Per-call negotiation state. Descriptions are single-shot: each slot can
/// be recorded exactly once for the lifetime of the session, and a session
/// is never reused for renegotiation.
pub(crate) struct RoomSession {
    room: RoomId,
    role: Role,
    phase: NegotiationPhase,
    local_description: Option<SdpKind>,
    remote_description: Option<SdpKind>,
}

impl RoomSession {
    pub(crate) fn new(room: RoomId, role: Role) -> Self {
        Self {
            room,
            role,
            phase: NegotiationPhase::Idle,
            local_description: None,
            remote_description: None,
        }
    }

    pub(crate) fn room(&self) -> &RoomId {
        &self.room
    }

    pub(crate) fn role(&self) -> Role {
        self.role
    }

    pub(crate) fn phase(&self) -> NegotiationPhase {
        self.phase
    }

    pub(crate) fn advance(&mut self, phase: NegotiationPhase) {
        self.phase = phase;
    }

    pub(crate) fn remote_description_set(&self) -> bool {
        self.remote_description.is_some()
    }

    /// Claims the local description slot. Fails if a local description was
    /// already recorded; there is no silent overwrite.
    pub(crate) fn record_local(&mut self, kind: SdpKind) -> Result<(), NegotiationError> {
        if self.local_description.is_some() {
            return Err(NegotiationError::LocalDescriptionAlreadySet);
        }
        self.local_description = Some(kind);
        Ok(())
    }

    /// Claims the remote description slot, same single-shot rule.
    pub(crate) fn record_remote(&mut self, kind: SdpKind) -> Result<(), NegotiationError> {
        if self.remote_description.is_some() {
            return Err(NegotiationError::RemoteDescriptionAlreadySet);
        }
        self.remote_description = Some(kind);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptions_are_single_shot() {
        let mut session = RoomSession::new(RoomId::from("r1"), Role::Initiator);

        session.record_remote(SdpKind::Offer).unwrap();
        assert!(matches!(
            session.record_remote(SdpKind::Offer),
            Err(NegotiationError::RemoteDescriptionAlreadySet)
        ));

        session.record_local(SdpKind::Answer).unwrap();
        assert!(matches!(
            session.record_local(SdpKind::Answer),
            Err(NegotiationError::LocalDescriptionAlreadySet)
        ));
    }

    #[test]
    fn remote_flag_tracks_recording() {
        let mut session = RoomSession::new(RoomId::from("r1"), Role::Responder);
        assert!(!session.remote_description_set());

        session.record_remote(SdpKind::Answer).unwrap();
        assert!(session.remote_description_set());
    }

    #[test]
    fn responder_phase_walk() {
        let mut session = RoomSession::new(RoomId::from("r2"), Role::Responder);
        assert_eq!(session.phase(), NegotiationPhase::Idle);

        session.advance(NegotiationPhase::LocalOfferSet);
        session.advance(NegotiationPhase::AwaitingRemoteAnswer);
        session.advance(NegotiationPhase::Connected);
        assert_eq!(session.phase(), NegotiationPhase::Connected);
    }
}
