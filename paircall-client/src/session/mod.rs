mod call;
mod engine;
mod room_session;
mod router;

pub use call::{CallSession, SessionParts};
pub use room_session::NegotiationPhase;
