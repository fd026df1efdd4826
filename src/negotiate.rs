use crate::error::NegotiateError;
use crate::logger::log;
use crate::peer::{connection, ice};
use crate::session::Session;
use crate::signaling::{self, SdpMessage};
use webrtc::peer_connection::sdp::session_description::RTCSessionDescription;

/// Drive one session through the whole offer/answer handshake:
///
/// 1. declare recvonly receivers for video and audio
/// 2. build the offer and commit it locally (this starts gathering)
/// 3. suspend until candidate gathering completes
/// 4. send the final local description to the remote, commit its answer
///
/// Each step only starts after the previous one has resolved. Nothing is
/// rolled back on failure; the session keeps whatever state it reached.
pub async fn negotiate(session: &Session, remote_host: &str) -> Result<(), NegotiateError> {
    let pc = session.peer();

    connection::add_recv_transceivers(pc).await?;

    let offer = pc.create_offer(None).await?;
    pc.set_local_description(offer).await?;
    log(&format!(
        "Session {}: local offer committed, waiting for gathering",
        session.index()
    ));

    ice::wait_gathering_complete(pc).await;

    // Re-read the committed description: it has picked up the gathered
    // candidates since the commit above.
    let local = pc
        .local_description()
        .await
        .ok_or(NegotiateError::MissingLocalDescription)?;
    let offer_msg = SdpMessage {
        sdp: local.sdp,
        kind: local.sdp_type.to_string(),
    };

    let answer_msg = signaling::exchange_offer(remote_host, &offer_msg).await?;
    let answer = RTCSessionDescription::answer(answer_msg.sdp).map_err(NegotiateError::Remote)?;
    pc.set_remote_description(answer)
        .await
        .map_err(NegotiateError::Remote)?;

    log(&format!(
        "Session {}: remote answer committed",
        session.index()
    ));
    Ok(())
}

/// Top-level boundary for one handshake. Every failure, whatever the step,
/// ends up here as a single log record; there is no retry and a failed
/// session never affects its siblings.
pub async fn run(session: &Session, remote_host: &str) {
    if let Err(err) = negotiate(session, remote_host).await {
        log(&format!(
            "Session {}: negotiation with {} failed: {}",
            session.index(),
            remote_host,
            err
        ));
    }
}
