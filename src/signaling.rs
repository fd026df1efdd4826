use crate::config::SIGNALING_PORT;
use crate::error::NegotiateError;
use crate::logger::log;
use serde::{Deserialize, Serialize};

/// Session description as it travels on the wire: exactly the payload string
/// and the role tag, nothing else.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SdpMessage {
    pub sdp: String,
    #[serde(rename = "type")]
    pub kind: String,
}

pub fn offer_url(host: &str) -> String {
    format!("http://{}:{}/offer", host, SIGNALING_PORT)
}

/// POST the committed local offer to the remote endpoint and decode the
/// answer out of the response body. One request, one response, no retries.
pub async fn exchange_offer(host: &str, offer: &SdpMessage) -> Result<SdpMessage, NegotiateError> {
    let url = offer_url(host);
    log(&format!("Sending offer to {}", url));

    let response = reqwest::Client::new()
        .post(&url)
        .json(offer)
        .send()
        .await?
        .error_for_status()?;

    let answer: SdpMessage = response.json().await?;
    log(&format!("Received {} from {}", answer.kind, url));

    if answer.kind != "answer" {
        return Err(NegotiateError::UnexpectedAnswerType(answer.kind));
    }
    Ok(answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offer_url_has_fixed_port_and_path() {
        assert_eq!(offer_url("example.com"), "http://example.com:8080/offer");
        assert_eq!(offer_url("127.0.0.1"), "http://127.0.0.1:8080/offer");
    }

    #[test]
    fn wire_format_is_exactly_sdp_and_type() {
        let msg = SdpMessage {
            sdp: "v=0...".into(),
            kind: "offer".into(),
        };
        let value: serde_json::Value = serde_json::to_value(&msg).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["sdp"], "v=0...");
        assert_eq!(obj["type"], "offer");
    }

    #[test]
    fn serialization_is_idempotent() {
        let msg = SdpMessage {
            sdp: "v=0\r\no=- 0 0 IN IP4 127.0.0.1\r\n".into(),
            kind: "offer".into(),
        };
        let first = serde_json::to_string(&msg).unwrap();
        let second = serde_json::to_string(&msg).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn answer_round_trips_through_json() {
        let json = r#"{"sdp":"v=0...(answer)","type":"answer"}"#;
        let msg: SdpMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.kind, "answer");
        assert_eq!(msg.sdp, "v=0...(answer)");
    }
}
