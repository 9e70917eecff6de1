use std::sync::Arc;

use futures::sync::mpsc::UnboundedSender;
use serde_derive::Serialize;

use crate::channel::MessageBuilder;
use crate::proto::CastMessage;
use crate::session::{self, Lifecycle};

const CHANNEL: &str = "heartbeat";
pub const NAMESPACE: &str = "urn:x-cast:com.google.cast.tp.heartbeat";

pub(crate) const MESSAGE_TYPE_PING: &str = "PING";
pub(crate) const MESSAGE_TYPE_PONG: &str = "PONG";

/// Answers inbound `PING`s and records inbound `PONG`s. The first `PONG`
/// after the handshake is what opens the virtual connection.
pub(crate) struct Handler {
    command: UnboundedSender<CastMessage>,
    sender_id: String,
    lifecycle: Arc<Lifecycle>,
    heartbeat: Arc<session::Heartbeat>,
}

impl Handler {
    pub fn new(
        command: UnboundedSender<CastMessage>,
        sender_id: String,
        lifecycle: Arc<Lifecycle>,
        heartbeat: Arc<session::Heartbeat>,
    ) -> Self {
        Self {
            command,
            sender_id,
            lifecycle,
            heartbeat,
        }
    }

    pub fn handle(&self, source: &str, kind: &str) {
        match kind {
            // The reply goes to whoever pinged us, not the default receiver.
            MESSAGE_TYPE_PING => {
                if self.command.unbounded_send(pong(&self.sender_id, source)).is_err() {
                    warn!("unable to answer PING from {}", source);
                }
            }
            MESSAGE_TYPE_PONG => {
                self.heartbeat.pong();
                if self.lifecycle.open_if_connecting() {
                    debug!("virtual connection opened");
                }
            }
            kind => debug!("unhandled {} message {}", CHANNEL, kind),
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum Request {
    Ping,
    Pong,
}

pub(crate) fn ping(source: &str, destination: &str) -> CastMessage {
    MessageBuilder::default()
        .namespace(NAMESPACE)
        .source(source)
        .destination(destination)
        .payload(&Request::Ping)
        .into_message()
}

pub(crate) fn pong(source: &str, destination: &str) -> CastMessage {
    MessageBuilder::default()
        .namespace(NAMESPACE)
        .source(source)
        .destination(destination)
        .payload(&Request::Pong)
        .into_message()
}

#[cfg(test)]
mod tests {
    use super::{ping, pong};
    use crate::proto::CastMessage_PayloadType;

    #[test]
    fn ping_is_a_string_payload_in_the_heartbeat_namespace() {
        let message = ping("sender-0", "receiver-0");
        assert_eq!(super::NAMESPACE, message.get_namespace());
        assert_eq!(CastMessage_PayloadType::STRING, message.get_payload_type());
        assert_eq!(r#"{"type":"PING"}"#, message.get_payload_utf8());
    }

    #[test]
    fn pong_addresses_the_pinger() {
        let message = pong("sender-0", "some-transport");
        assert_eq!("some-transport", message.get_destination_id());
        assert_eq!(r#"{"type":"PONG"}"#, message.get_payload_utf8());
    }
}
