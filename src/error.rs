use thiserror::Error;

/// Everything that can go wrong during one negotiation run. All variants are
/// handled the same way at the pipeline boundary: logged once, never retried.
#[derive(Debug, Error)]
pub enum NegotiateError {
    /// Offer construction or local commitment rejected by the RTC engine.
    #[error("local negotiation failed: {0}")]
    Local(#[from] webrtc::Error),

    /// Request failure or a response body that is not a session description.
    #[error("signaling exchange failed: {0}")]
    Signaling(#[from] reqwest::Error),

    /// The engine reported no committed local description after gathering.
    #[error("no local description committed")]
    MissingLocalDescription,

    /// The remote replied with something other than an answer.
    #[error("unexpected session description type {0:?}")]
    UnexpectedAnswerType(String),

    /// The RTC engine refused the received remote description.
    #[error("remote description rejected: {0}")]
    Remote(#[source] webrtc::Error),
}
