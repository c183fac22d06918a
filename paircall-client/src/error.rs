use thiserror::Error;

/// Failures surfaced by the relay link.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay transport error: {0}")]
    Transport(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("relay connection closed")]
    Closed,
}

/// Failures of one negotiation operation. Protocol violations fail the
/// offending operation only; the session keeps processing later messages.
#[derive(Debug, Error)]
pub enum NegotiationError {
    #[error("local description already set")]
    LocalDescriptionAlreadySet,

    #[error("remote description already set")]
    RemoteDescriptionAlreadySet,

    #[error("candidate received before remote description")]
    CandidateBeforeRemoteDescription,

    #[error("media acquisition failed: {0}")]
    Media(#[source] anyhow::Error),

    #[error("connectivity operation failed: {0}")]
    Connectivity(#[source] anyhow::Error),

    #[error(transparent)]
    Relay(#[from] RelayError),
}
