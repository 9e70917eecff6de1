use std::sync::Arc;

use protobuf::Message;
use serde_derive::Serialize;

use crate::channel::MessageBuilder;
use crate::proto::{self, CastMessage};
use crate::provider::{ConnectionEvent, Error, Result};
use crate::session::{Sessions, Teardown};

const CHANNEL: &str = "connection";
pub const NAMESPACE: &str = "urn:x-cast:com.google.cast.tp.connection";
pub const AUTH_NAMESPACE: &str = "urn:x-cast:com.google.cast.tp.deviceauth";
const USER_AGENT: &str = "castwire";

pub(crate) const MESSAGE_TYPE_CLOSE: &str = "CLOSE";

/// Watches the connection namespace for the device closing sessions out
/// from under us.
pub(crate) struct Handler {
    default_receiver: String,
    sessions: Arc<Sessions>,
    teardown: Arc<Teardown>,
}

impl Handler {
    pub fn new(default_receiver: String, sessions: Arc<Sessions>, teardown: Arc<Teardown>) -> Self {
        Self {
            default_receiver,
            sessions,
            teardown,
        }
    }

    pub fn handle(&self, source: &str, kind: &str) {
        match kind {
            MESSAGE_TYPE_CLOSE if source == self.default_receiver => {
                warn!("device closed the virtual connection");
                self.teardown
                    .begin(Some(ConnectionEvent::RemoteClosed), Vec::new());
            }
            MESSAGE_TYPE_CLOSE => {
                // An app transport closed its sub-session. Forget it so the
                // controller does not close it a second time.
                debug!("transport {} closed its sub-session", source);
                self.sessions.leave(source);
            }
            kind => debug!("unhandled {} message {}", CHANNEL, kind),
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum Request {
    #[serde(rename_all = "camelCase")]
    Connect { user_agent: String },
    Close,
}

pub(crate) fn connect(source: &str, destination: &str) -> CastMessage {
    let payload = Request::Connect {
        user_agent: USER_AGENT.to_owned(),
    };
    MessageBuilder::default()
        .namespace(NAMESPACE)
        .source(source)
        .destination(destination)
        .payload(&payload)
        .into_message()
}

pub(crate) fn close(source: &str, destination: &str) -> CastMessage {
    MessageBuilder::default()
        .namespace(NAMESPACE)
        .source(source)
        .destination(destination)
        .payload(&Request::Close)
        .into_message()
}

/// Build the device-auth challenge sent immediately after the socket is
/// established. The payload is a binary `DeviceAuthMessage` with an empty
/// challenge.
pub(crate) fn auth_challenge(source: &str, destination: &str) -> Result<CastMessage> {
    let mut auth = proto::DeviceAuthMessage::new();
    auth.set_challenge(proto::AuthChallenge::new());
    let payload = auth
        .write_to_bytes()
        .map_err(|err| Error::Auth(format!("unable to encode challenge: {}", err)))?;
    Ok(MessageBuilder::default()
        .namespace(AUTH_NAMESPACE)
        .source(source)
        .destination(destination)
        .payload_binary(payload)
        .into_message())
}

/// Check the binary auth reply. A reply carrying an `error` fails the
/// handshake; certificate material in the response is accepted without
/// verification, matching the deployed protocol.
pub(crate) fn check_auth_reply(message: &CastMessage) -> Result<()> {
    let reply = protobuf::parse_from_bytes::<proto::DeviceAuthMessage>(message.get_payload_binary())
        .map_err(|err| Error::Auth(format!("malformed auth reply: {}", err)))?;
    if reply.has_error() {
        return Err(Error::Auth(format!(
            "device rejected the handshake: {:?}",
            reply.get_error().get_error_type()
        )));
    }
    if !reply.has_response() {
        return Err(Error::Auth("auth reply carried no response".to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use protobuf::Message;

    use super::{auth_challenge, check_auth_reply, close, connect};
    use crate::channel::MessageBuilder;
    use crate::proto::{self, CastMessage_PayloadType};

    #[test]
    fn connect_carries_a_user_agent() {
        let message = connect("sender-0", "receiver-0");
        assert_eq!(super::NAMESPACE, message.get_namespace());
        assert_eq!(
            r#"{"type":"CONNECT","userAgent":"castwire"}"#,
            message.get_payload_utf8()
        );
    }

    #[test]
    fn close_addresses_the_given_transport() {
        let message = close("sender-0", "transport-7");
        assert_eq!("transport-7", message.get_destination_id());
        assert_eq!(r#"{"type":"CLOSE"}"#, message.get_payload_utf8());
    }

    #[test]
    fn challenge_is_binary_and_decodable() {
        let message = auth_challenge("sender-0", "receiver-0").unwrap();
        assert_eq!(super::AUTH_NAMESPACE, message.get_namespace());
        assert_eq!(CastMessage_PayloadType::BINARY, message.get_payload_type());
        let auth = protobuf::parse_from_bytes::<proto::DeviceAuthMessage>(
            message.get_payload_binary(),
        )
        .unwrap();
        assert!(auth.has_challenge());
    }

    fn auth_reply(auth: &proto::DeviceAuthMessage) -> proto::CastMessage {
        MessageBuilder::default()
            .namespace(super::AUTH_NAMESPACE)
            .source("receiver-0")
            .destination("sender-0")
            .payload_binary(auth.write_to_bytes().unwrap())
            .into_message()
    }

    #[test]
    fn reply_with_a_response_passes() {
        let mut response = proto::AuthResponse::new();
        response.set_signature(Vec::new());
        response.set_client_auth_certificate(Vec::new());
        let mut auth = proto::DeviceAuthMessage::new();
        auth.set_response(response);
        assert!(check_auth_reply(&auth_reply(&auth)).is_ok());
    }

    #[test]
    fn reply_with_an_error_fails_the_handshake() {
        let mut auth = proto::DeviceAuthMessage::new();
        let mut error = proto::AuthError::new();
        error.set_error_type(proto::AuthError_ErrorType::INTERNAL_ERROR);
        auth.set_error(error);
        assert!(check_auth_reply(&auth_reply(&auth)).is_err());
    }

    #[test]
    fn garbage_reply_fails_the_handshake() {
        let message = MessageBuilder::default()
            .namespace(super::AUTH_NAMESPACE)
            .payload_binary(vec![0xff, 0x00, 0xfe])
            .into_message();
        assert!(check_auth_reply(&message).is_err());
    }
}
