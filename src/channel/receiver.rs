use std::collections::HashMap;
use std::sync::Arc;

use serde_derive::{Deserialize, Serialize};
use serde_json::Value;

use crate::channel::{response_kind, MessageBuilder};
use crate::proto::CastMessage;
use crate::provider::{Error, Listeners, Result};

const CHANNEL: &str = "receiver";
pub const NAMESPACE: &str = "urn:x-cast:com.google.cast.receiver";

pub(crate) const MESSAGE_TYPE_RECEIVER_STATUS: &str = "RECEIVER_STATUS";
pub(crate) const MESSAGE_TYPE_LAUNCH_ERROR: &str = "LAUNCH_ERROR";
pub(crate) const MESSAGE_TYPE_INVALID_REQUEST: &str = "INVALID_REQUEST";
pub(crate) const MESSAGE_TYPE_GET_APP_AVAILABILITY: &str = "GET_APP_AVAILABILITY";

pub(crate) type StatusListener = dyn Fn(&DeviceStatus) + Send + Sync;

/// Fans unsolicited `RECEIVER_STATUS` broadcasts out to device-status
/// listeners.
pub(crate) struct Handler {
    listeners: Arc<Listeners<StatusListener>>,
}

impl Handler {
    pub fn new(listeners: Arc<Listeners<StatusListener>>) -> Self {
        Self { listeners }
    }

    pub fn handle(&self, kind: &str, payload: &Value) {
        if kind != MESSAGE_TYPE_RECEIVER_STATUS {
            debug!("unhandled {} message {}", CHANNEL, kind);
            return;
        }
        match parse_status(payload) {
            Ok(status) => {
                for listener in self.listeners.snapshot() {
                    listener(&status);
                }
            }
            Err(err) => warn!("dropping unparseable {} broadcast: {}", CHANNEL, err),
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum Request {
    #[serde(rename_all = "camelCase")]
    GetStatus { request_id: i64 },
    #[serde(rename_all = "camelCase")]
    Launch { request_id: i64, app_id: String },
    #[serde(rename_all = "camelCase")]
    Stop { request_id: i64, session_id: String },
    #[serde(rename_all = "camelCase")]
    SetVolume { request_id: i64, volume: Volume },
    #[serde(rename_all = "camelCase")]
    GetAppAvailability {
        request_id: i64,
        app_id: Vec<String>,
    },
}

/// Device volume. Requests set only the field they change; statuses may
/// carry everything the device reports.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_type: Option<VolumeControlType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_interval: Option<f64>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolumeControlType {
    Attenuation,
    Fixed,
    Master,
}

/// Snapshot of the device: volume and whatever applications are running.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatus {
    #[serde(default)]
    pub applications: Vec<Application>,
    #[serde(default)]
    pub is_active_input: bool,
    #[serde(default)]
    pub is_stand_by: bool,
    pub volume: Volume,
}

impl DeviceStatus {
    /// The running application with the given id, if any.
    pub fn application(&self, app_id: &str) -> Option<&Application> {
        self.applications.iter().find(|app| app.app_id == app_id)
    }
}

/// Descriptor of a running application, as reported by the device.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub app_id: String,
    #[serde(default)]
    pub display_name: String,
    /// Session handle passed to `STOP`.
    pub session_id: String,
    /// Destination id for messages addressed at the app.
    pub transport_id: String,
    #[serde(default)]
    pub namespaces: Vec<Namespace>,
    #[serde(default)]
    pub is_idle_screen: bool,
    #[serde(default)]
    pub launched_from_cloud: bool,
    #[serde(default)]
    pub status_text: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Namespace {
    pub name: String,
}

/// Availability of an application id on the device.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
pub enum AppAvailability {
    #[serde(rename = "APP_AVAILABLE")]
    Available,
    #[serde(rename = "APP_NOT_AVAILABLE")]
    NotAvailable,
}

pub(crate) fn get_status(source: &str, destination: &str, request_id: i64) -> CastMessage {
    let payload = Request::GetStatus { request_id };
    MessageBuilder::default()
        .namespace(NAMESPACE)
        .source(source)
        .destination(destination)
        .payload(&payload)
        .into_message()
}

pub(crate) fn launch(
    source: &str,
    destination: &str,
    request_id: i64,
    app_id: &str,
) -> CastMessage {
    let payload = Request::Launch {
        request_id,
        app_id: app_id.to_owned(),
    };
    MessageBuilder::default()
        .namespace(NAMESPACE)
        .source(source)
        .destination(destination)
        .payload(&payload)
        .into_message()
}

pub(crate) fn stop(
    source: &str,
    destination: &str,
    request_id: i64,
    session_id: &str,
) -> CastMessage {
    let payload = Request::Stop {
        request_id,
        session_id: session_id.to_owned(),
    };
    MessageBuilder::default()
        .namespace(NAMESPACE)
        .source(source)
        .destination(destination)
        .payload(&payload)
        .into_message()
}

pub(crate) fn set_volume(
    source: &str,
    destination: &str,
    request_id: i64,
    volume: Volume,
) -> CastMessage {
    let payload = Request::SetVolume { request_id, volume };
    MessageBuilder::default()
        .namespace(NAMESPACE)
        .source(source)
        .destination(destination)
        .payload(&payload)
        .into_message()
}

pub(crate) fn app_availability(
    source: &str,
    destination: &str,
    request_id: i64,
    app_ids: Vec<String>,
) -> CastMessage {
    let payload = Request::GetAppAvailability {
        request_id,
        app_id: app_ids,
    };
    MessageBuilder::default()
        .namespace(NAMESPACE)
        .source(source)
        .destination(destination)
        .payload(&payload)
        .into_message()
}

fn parse_status(payload: &Value) -> Result<DeviceStatus> {
    let status = payload
        .get("status")
        .ok_or_else(|| Error::Parse("RECEIVER_STATUS without a status".to_owned()))?;
    serde_json::from_value(status.clone()).map_err(|err| Error::Parse(err.to_string()))
}

/// Parse a correlated receiver-namespace response into a device status.
/// Error kinds in the namespace's error set become protocol errors.
pub(crate) fn parse_status_response(payload: &Value) -> Result<DeviceStatus> {
    match response_kind(payload) {
        Some(MESSAGE_TYPE_RECEIVER_STATUS) => parse_status(payload),
        Some(kind)
            if kind == MESSAGE_TYPE_LAUNCH_ERROR || kind == MESSAGE_TYPE_INVALID_REQUEST =>
        {
            Err(protocol_error(kind, payload))
        }
        Some(kind) => Err(Error::Parse(format!("unexpected {} response {}", CHANNEL, kind))),
        None => Err(Error::Parse(format!("untyped {} response", CHANNEL))),
    }
}

/// Parse a `GET_APP_AVAILABILITY` response into its id → availability map.
pub(crate) fn parse_availability_response(
    payload: &Value,
) -> Result<HashMap<String, AppAvailability>> {
    match response_kind(payload) {
        Some(MESSAGE_TYPE_GET_APP_AVAILABILITY) => {
            let availability = payload.get("availability").ok_or_else(|| {
                Error::Parse("GET_APP_AVAILABILITY without an availability map".to_owned())
            })?;
            serde_json::from_value(availability.clone())
                .map_err(|err| Error::Parse(err.to_string()))
        }
        Some(kind) if kind == MESSAGE_TYPE_INVALID_REQUEST => Err(protocol_error(kind, payload)),
        Some(kind) => Err(Error::Parse(format!("unexpected {} response {}", CHANNEL, kind))),
        None => Err(Error::Parse(format!("untyped {} response", CHANNEL))),
    }
}

fn protocol_error(kind: &str, payload: &Value) -> Error {
    match payload.get("reason").and_then(Value::as_str) {
        Some(reason) => Error::Protocol(format!("{}: {}", kind, reason)),
        None => Error::Protocol(kind.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{
        parse_availability_response, parse_status_response, AppAvailability, Volume,
    };
    use crate::provider::Error;

    #[test]
    fn receiver_status_parses_applications_and_volume() {
        let payload = json!({
            "type": "RECEIVER_STATUS",
            "requestId": 3,
            "status": {
                "applications": [{
                    "appId": "CC1AD845",
                    "displayName": "Default Media Receiver",
                    "namespaces": [{ "name": "urn:x-cast:com.google.cast.media" }],
                    "sessionId": "sess-1",
                    "statusText": "Ready To Cast",
                    "transportId": "transport-1"
                }],
                "volume": { "controlType": "ATTENUATION", "level": 0.25, "muted": false, "stepInterval": 0.05 }
            }
        });
        let status = parse_status_response(&payload).unwrap();
        assert_eq!(Some(0.25), status.volume.level);
        assert_eq!(Some(false), status.volume.muted);
        let app = status.application("CC1AD845").unwrap();
        assert_eq!("sess-1", app.session_id);
        assert_eq!("transport-1", app.transport_id);
        assert_eq!(1, app.namespaces.len());
    }

    #[test]
    fn a_status_without_applications_is_idle() {
        let payload = json!({
            "type": "RECEIVER_STATUS",
            "status": { "volume": { "level": 1.0, "muted": true } }
        });
        let status = parse_status_response(&payload).unwrap();
        assert!(status.applications.is_empty());
        assert!(status.application("CC1AD845").is_none());
    }

    #[test]
    fn launch_error_is_a_protocol_error() {
        let payload = json!({ "responseType": "LAUNCH_ERROR", "requestId": 7 });
        match parse_status_response(&payload) {
            Err(Error::Protocol(message)) => assert!(message.contains("LAUNCH_ERROR")),
            other => panic!("expected protocol error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn invalid_request_carries_its_reason() {
        let payload = json!({
            "type": "INVALID_REQUEST",
            "requestId": 7,
            "reason": "INVALID_COMMAND"
        });
        match parse_status_response(&payload) {
            Err(Error::Protocol(message)) => {
                assert!(message.contains("INVALID_REQUEST"));
                assert!(message.contains("INVALID_COMMAND"));
            }
            other => panic!("expected protocol error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn availability_map_round_trips() {
        let payload = json!({
            "responseType": "GET_APP_AVAILABILITY",
            "requestId": 9,
            "availability": {
                "CC1AD845": "APP_AVAILABLE",
                "FOOBAR": "APP_NOT_AVAILABLE"
            }
        });
        let map = parse_availability_response(&payload).unwrap();
        assert_eq!(Some(&AppAvailability::Available), map.get("CC1AD845"));
        assert_eq!(Some(&AppAvailability::NotAvailable), map.get("FOOBAR"));
    }

    #[test]
    fn volume_requests_serialize_only_what_they_set() {
        let volume = Volume {
            level: Some(0.5),
            ..Volume::default()
        };
        assert_eq!(r#"{"level":0.5}"#, serde_json::to_string(&volume).unwrap());

        let muted = Volume {
            muted: Some(true),
            ..Volume::default()
        };
        assert_eq!(r#"{"muted":true}"#, serde_json::to_string(&muted).unwrap());
    }
}
