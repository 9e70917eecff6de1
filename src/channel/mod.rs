//! Per-namespace protocol logic. Each submodule owns one `urn:x-cast:…`
//! namespace: its payload shapes, its envelope builders, and its handler for
//! unsolicited inbound traffic. The [`Responder`] is the single dispatcher
//! entry point; it offers every envelope to the correlator first and fans
//! the rest out by namespace.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::proto::{CastMessage, CastMessage_PayloadType, CastMessage_ProtocolVersion};
use crate::provider::Listeners;
use crate::request::{Handling, Tracker};

pub mod connection;
pub mod heartbeat;
pub mod media;
pub mod receiver;

/// Application id of the built-in Default Media Receiver.
pub const DEFAULT_MEDIA_RECEIVER_APP_ID: &str = "CC1AD845";

/// Kind string of a STRING payload. Replies carry `responseType`; broadcasts
/// and legacy replies carry `type`. When both are present the reply marker
/// wins.
pub(crate) fn response_kind(payload: &Value) -> Option<&str> {
    payload
        .get("responseType")
        .and_then(Value::as_str)
        .or_else(|| payload.get("type").and_then(Value::as_str))
}

/// Handler contract for application namespaces. Registered handlers receive
/// unsolicited STRING messages whose namespace they claim; anything carrying
/// a request id is a response and is consumed by the correlator before
/// dispatch reaches applications.
pub trait AppHandler: Send + Sync {
    /// Whether this handler consumes `namespace`.
    fn handles(&self, namespace: &str) -> bool;

    /// Called on the dispatcher, in wire order. Must not block; hand off
    /// anything expensive.
    fn handle(&self, source: &str, kind: &str, payload: &Value);
}

/// Consumes every inbound envelope on the dispatcher. Correlation first,
/// then the built-in namespaces, then registered application handlers. A
/// message that fails to parse is logged and dropped; it never tears the
/// session down.
pub(crate) struct Responder {
    tracker: Arc<Tracker>,
    connection: connection::Handler,
    heartbeat: heartbeat::Handler,
    receiver: receiver::Handler,
    apps: Arc<Listeners<dyn AppHandler>>,
}

impl Responder {
    pub fn new(
        tracker: Arc<Tracker>,
        connection: connection::Handler,
        heartbeat: heartbeat::Handler,
        receiver: receiver::Handler,
        apps: Arc<Listeners<dyn AppHandler>>,
    ) -> Self {
        Self {
            tracker,
            connection,
            heartbeat,
            receiver,
            apps,
        }
    }

    pub fn handle(&self, message: &CastMessage) {
        let namespace = message.get_namespace();
        match self.tracker.offer(message) {
            Handling::Correlated => {
                trace!("correlated response in {}", namespace);
                return;
            }
            Handling::Uncorrelated => {
                debug!(
                    "response in {} carries an unknown request id, delivering as unsolicited",
                    namespace
                );
            }
            Handling::Unsolicited => {}
        }

        if message.get_payload_type() == CastMessage_PayloadType::BINARY {
            warn!("dropping unsolicited binary message in {}", namespace);
            return;
        }
        let payload: Value = match serde_json::from_str(message.get_payload_utf8()) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("dropping unparseable message in {}: {}", namespace, err);
                return;
            }
        };
        let kind = match response_kind(&payload) {
            Some(kind) => kind.to_owned(),
            None => {
                warn!("dropping untyped message in {}", namespace);
                return;
            }
        };

        match namespace {
            connection::NAMESPACE => {
                self.connection.handle(message.get_source_id(), &kind)
            }
            heartbeat::NAMESPACE => self.heartbeat.handle(message.get_source_id(), &kind),
            receiver::NAMESPACE => self.receiver.handle(&kind, &payload),
            namespace => {
                let mut handled = false;
                for app in self.apps.snapshot() {
                    if app.handles(namespace) {
                        app.handle(message.get_source_id(), &kind, &payload);
                        handled = true;
                    }
                }
                if !handled {
                    warn!("message on unknown channel {}", namespace);
                }
            }
        }
    }
}

/// Assembles outbound envelopes. Exactly one of the payload setters is used
/// per message.
#[derive(Debug, Default)]
pub(crate) struct MessageBuilder<'a> {
    namespace: Option<&'a str>,
    source: Option<&'a str>,
    destination: Option<&'a str>,
    payload: Option<String>,
    payload_binary: Option<Vec<u8>>,
}

impl<'a> MessageBuilder<'a> {
    pub fn namespace(mut self, namespace: &'a str) -> Self {
        self.namespace = Some(namespace);
        self
    }

    pub fn source(mut self, source: &'a str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn destination(mut self, destination: &'a str) -> Self {
        self.destination = Some(destination);
        self
    }

    pub fn payload<T: Serialize>(mut self, payload: &T) -> Self {
        if let Ok(payload) = serde_json::to_string(payload) {
            self.payload = Some(payload);
        }
        self
    }

    pub fn payload_binary(mut self, payload: Vec<u8>) -> Self {
        self.payload_binary = Some(payload);
        self
    }

    pub fn into_message(mut self) -> CastMessage {
        let mut message = CastMessage::new();
        message.set_protocol_version(CastMessage_ProtocolVersion::CASTV2_1_0);
        if let Some(source) = self.source.take() {
            message.set_source_id(source.to_owned());
        }
        if let Some(destination) = self.destination.take() {
            message.set_destination_id(destination.to_owned());
        }
        if let Some(namespace) = self.namespace.take() {
            message.set_namespace(namespace.to_owned());
        }
        if let Some(payload) = self.payload_binary.take() {
            message.set_payload_type(CastMessage_PayloadType::BINARY);
            message.set_payload_binary(payload);
        } else if let Some(payload) = self.payload.take() {
            message.set_payload_type(CastMessage_PayloadType::STRING);
            message.set_payload_utf8(payload);
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::response_kind;

    #[test]
    fn response_type_wins_over_type() {
        let payload = json!({ "type": "MEDIA_STATUS", "responseType": "LOAD_FAILED" });
        assert_eq!(Some("LOAD_FAILED"), response_kind(&payload));
    }

    #[test]
    fn type_is_the_fallback() {
        let payload = json!({ "type": "RECEIVER_STATUS" });
        assert_eq!(Some("RECEIVER_STATUS"), response_kind(&payload));
    }

    #[test]
    fn untyped_payloads_have_no_kind() {
        assert_eq!(None, response_kind(&json!({ "requestId": 1 })));
    }
}
