use crate::logger::log;
use tokio::sync::mpsc;
use webrtc::ice_transport::ice_gatherer_state::RTCIceGathererState;
use webrtc::ice_transport::ice_gathering_state::RTCIceGatheringState;
use webrtc::peer_connection::RTCPeerConnection;

/// Suspend until candidate gathering on `pc` is complete.
///
/// The fast path returns without registering a listener when gathering has
/// already finished. Otherwise we subscribe to gathering-state changes, wait
/// for Complete, and replace the handler with a no-op so later transitions
/// are never observed again. There is deliberately no timeout here: if the
/// engine never finishes gathering, this waits forever.
pub async fn wait_gathering_complete(pc: &RTCPeerConnection) {
    wait_gathering_complete_observed(pc, || {}).await
}

/// Same barrier with a hook invoked on every state change our listener sees.
/// Once the barrier has resolved the hook must never fire again.
async fn wait_gathering_complete_observed<F>(pc: &RTCPeerConnection, on_notify: F)
where
    F: Fn() + Send + Sync + 'static,
{
    if pc.ice_gathering_state() == RTCIceGatheringState::Complete {
        log("ICE gathering already complete, no wait needed");
        return;
    }

    let (tx, mut rx) = mpsc::channel::<()>(1);
    pc.on_ice_gathering_state_change(Box::new(move |state| {
        let tx = tx.clone();
        on_notify();
        log(&format!("ICE gathering state changed to: {:?}", state));
        Box::pin(async move {
            if state == RTCIceGathererState::Complete {
                let _ = tx.send(()).await;
            }
        })
    }));

    // Gathering may have finished between the check above and the handler
    // registration; the handler would then never fire.
    if pc.ice_gathering_state() == RTCIceGatheringState::Complete {
        pc.on_ice_gathering_state_change(Box::new(|_| Box::pin(async {})));
        log("ICE gathering completed during listener setup");
        return;
    }

    let _ = rx.recv().await;
    pc.on_ice_gathering_state_change(Box::new(|_| Box::pin(async {})));
    log("ICE gathering complete");
}
