//! Client-side signaling and negotiation for a two-party audio/video call.
//!
//! One endpoint creates a room on the signaling relay, the other joins it;
//! session descriptions and ICE candidates are exchanged through the relay
//! until media flows peer-to-peer. The negotiation engine here enforces the
//! ordering rules of that exchange; media capture/rendering and the relay
//! server itself stay behind trait seams.

pub mod config;
pub mod connectivity;
pub mod error;
pub mod media;
pub mod relay;
pub mod session;

pub use config::ClientConfig;
pub use connectivity::{Connectivity, ConnectivityEvent, LinkState, RtcLink};
pub use error::{NegotiationError, RelayError};
pub use media::{LocalMedia, MediaSink, MediaSource};
pub use relay::{RelayOutput, WsRelay};
pub use session::{CallSession, NegotiationPhase, SessionParts};
