//! In-process scripted cast receiver. Speaks the framed wire protocol over
//! plaintext TCP (the client is configured with `use_tls = false`), answers
//! the device-auth challenge and heartbeat `PING`s, and hands everything
//! else to the test's handler.

#![allow(dead_code)]

use std::io::{self, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use byteorder::{BigEndian, ByteOrder};
use protobuf::Message;
use serde_json::{json, Value};

use castwire::proto::{
    AuthResponse, CastMessage, CastMessage_PayloadType, CastMessage_ProtocolVersion,
    DeviceAuthMessage,
};

pub const AUTH_NAMESPACE: &str = "urn:x-cast:com.google.cast.tp.deviceauth";
pub const CONNECTION_NAMESPACE: &str = "urn:x-cast:com.google.cast.tp.connection";
pub const HEARTBEAT_NAMESPACE: &str = "urn:x-cast:com.google.cast.tp.heartbeat";
pub const RECEIVER_NAMESPACE: &str = "urn:x-cast:com.google.cast.receiver";
pub const MEDIA_NAMESPACE: &str = "urn:x-cast:com.google.cast.media";

/// One accepted connection, framed both ways.
pub struct Wire {
    stream: TcpStream,
}

impl Wire {
    pub fn new(stream: TcpStream) -> Self {
        Self { stream }
    }

    pub fn read_message(&mut self) -> io::Result<CastMessage> {
        let mut header = [0_u8; 4];
        self.stream.read_exact(&mut header)?;
        let length = BigEndian::read_u32(&header) as usize;
        let mut body = vec![0_u8; length];
        self.stream.read_exact(&mut body)?;
        protobuf::parse_from_bytes(&body).map_err(|err| io::Error::new(io::ErrorKind::Other, err))
    }

    pub fn write_message(&mut self, message: &CastMessage) -> io::Result<()> {
        let body = message
            .write_to_bytes()
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        let mut header = [0_u8; 4];
        BigEndian::write_u32(&mut header, body.len() as u32);
        self.stream.write_all(&header)?;
        self.stream.write_all(&body)
    }

    /// Write a STRING payload addressed at `destination`.
    pub fn send_json(
        &mut self,
        namespace: &str,
        destination: &str,
        payload: &Value,
    ) -> io::Result<()> {
        let message = string_message(namespace, "receiver-0", destination, payload);
        self.write_message(&message)
    }
}

pub fn string_message(
    namespace: &str,
    source: &str,
    destination: &str,
    payload: &Value,
) -> CastMessage {
    let mut message = CastMessage::new();
    message.set_protocol_version(CastMessage_ProtocolVersion::CASTV2_1_0);
    message.set_source_id(source.to_owned());
    message.set_destination_id(destination.to_owned());
    message.set_namespace(namespace.to_owned());
    message.set_payload_type(CastMessage_PayloadType::STRING);
    message.set_payload_utf8(payload.to_string());
    message
}

fn auth_reply(destination: &str) -> CastMessage {
    let mut response = AuthResponse::new();
    response.set_signature(Vec::new());
    response.set_client_auth_certificate(Vec::new());
    let mut auth = DeviceAuthMessage::new();
    auth.set_response(response);

    let mut message = CastMessage::new();
    message.set_protocol_version(CastMessage_ProtocolVersion::CASTV2_1_0);
    message.set_source_id("receiver-0".to_owned());
    message.set_destination_id(destination.to_owned());
    message.set_namespace(AUTH_NAMESPACE.to_owned());
    message.set_payload_type(CastMessage_PayloadType::BINARY);
    message.set_payload_binary(auth.write_to_bytes().expect("encode auth reply"));
    message
}

/// Parse a STRING payload, or `Null` for binary payloads.
pub fn payload_of(message: &CastMessage) -> Value {
    if message.get_payload_type() == CastMessage_PayloadType::STRING {
        serde_json::from_str(message.get_payload_utf8()).unwrap_or(Value::Null)
    } else {
        Value::Null
    }
}

#[derive(Clone, Debug)]
pub struct Options {
    /// How many `PING`s to answer; `None` answers all of them.
    pub pong_limit: Option<usize>,
    /// How many connections to accept before the thread exits.
    pub connections: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            pong_limit: None,
            connections: 1,
        }
    }
}

/// Run a scripted receiver. Device-auth and heartbeat are handled here;
/// every other inbound message (and heartbeat `PONG`s from the client) is
/// passed to `handle` in wire order.
pub fn serve<F>(listener: TcpListener, options: Options, mut handle: F) -> thread::JoinHandle<()>
where
    F: FnMut(&mut Wire, CastMessage) + Send + 'static,
{
    let _ = env_logger::builder().is_test(true).try_init();
    thread::spawn(move || {
        for _ in 0..options.connections {
            let (stream, _) = match listener.accept() {
                Ok(conn) => conn,
                Err(_) => return,
            };
            let mut wire = Wire::new(stream);
            let mut pongs_sent = 0_usize;
            loop {
                let message = match wire.read_message() {
                    Ok(message) => message,
                    Err(_) => break,
                };
                match message.get_namespace() {
                    AUTH_NAMESPACE => {
                        let reply = auth_reply(message.get_source_id());
                        if wire.write_message(&reply).is_err() {
                            break;
                        }
                    }
                    HEARTBEAT_NAMESPACE if payload_of(&message)["type"] == "PING" => {
                        let answer = options
                            .pong_limit
                            .map(|limit| pongs_sent < limit)
                            .unwrap_or(true);
                        if answer {
                            pongs_sent += 1;
                            let pong = json!({ "type": "PONG" });
                            if wire
                                .send_json(
                                    HEARTBEAT_NAMESPACE,
                                    message.get_source_id(),
                                    &pong,
                                )
                                .is_err()
                            {
                                break;
                            }
                        }
                    }
                    _ => handle(&mut wire, message),
                }
            }
        }
    })
}

/// A `RECEIVER_STATUS` payload with one running Default Media Receiver.
pub fn status_with_app(request_id: &Value, app_id: &str) -> Value {
    json!({
        "type": "RECEIVER_STATUS",
        "requestId": request_id,
        "status": {
            "applications": [{
                "appId": app_id,
                "displayName": "Default Media Receiver",
                "namespaces": [{ "name": MEDIA_NAMESPACE }],
                "sessionId": "sess-1",
                "statusText": "Ready To Cast",
                "transportId": "transport-1"
            }],
            "volume": { "controlType": "ATTENUATION", "level": 1.0, "muted": false, "stepInterval": 0.05 }
        }
    })
}

/// An idle `RECEIVER_STATUS` payload.
pub fn idle_status(request_id: &Value) -> Value {
    json!({
        "type": "RECEIVER_STATUS",
        "requestId": request_id,
        "status": {
            "applications": [],
            "volume": { "controlType": "ATTENUATION", "level": 1.0, "muted": false, "stepInterval": 0.05 }
        }
    })
}

/// A `MEDIA_STATUS` payload with a single session entry.
pub fn media_status(request_id: &Value, media_session_id: i64, player_state: &str) -> Value {
    json!({
        "type": "MEDIA_STATUS",
        "requestId": request_id,
        "status": [{
            "mediaSessionId": media_session_id,
            "playbackRate": 1.0,
            "playerState": player_state,
            "currentTime": 0.0,
            "supportedMediaCommands": 274447
        }]
    })
}
