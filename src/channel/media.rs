use std::sync::Arc;

use serde_derive::{Deserialize, Serialize};
use serde_json::Value;

use crate::channel::{response_kind, AppHandler, MessageBuilder};
use crate::proto::CastMessage;
use crate::provider::{Error, Listeners, Result};
use crate::session::MediaSession;

const CHANNEL: &str = "media";
pub const NAMESPACE: &str = "urn:x-cast:com.google.cast.media";

const METADATA_TYPE_MUSIC_TRACK: u32 = 3;

pub(crate) const MESSAGE_TYPE_MEDIA_STATUS: &str = "MEDIA_STATUS";
pub(crate) const MESSAGE_TYPE_QUEUE_ITEM_IDS: &str = "QUEUE_ITEM_IDS";
pub(crate) const MESSAGE_TYPE_QUEUE_ITEMS: &str = "QUEUE_ITEMS";

/// Response kinds that surface as media errors, per the deployed protocol.
pub(crate) const ERROR_KINDS: &[&str] = &[
    "INVALID_REQUEST",
    "INVALID_PLAYER_STATE",
    "LOAD_FAILED",
    "LOAD_CANCELLED",
    "ERROR",
];

pub(crate) type StatusListener = dyn Fn(&MediaStatus) + Send + Sync;
pub(crate) type ErrorListener = dyn Fn(&MediaError) + Send + Sync;

/// Media controller for unsolicited traffic: parses `MEDIA_STATUS`
/// broadcasts for the status listeners, surfaces error kinds to the error
/// listeners, and keeps the observed media session id current.
pub(crate) struct Handler {
    media_session: Arc<MediaSession>,
    status: Arc<Listeners<StatusListener>>,
    errors: Arc<Listeners<ErrorListener>>,
}

impl Handler {
    pub fn new(
        media_session: Arc<MediaSession>,
        status: Arc<Listeners<StatusListener>>,
        errors: Arc<Listeners<ErrorListener>>,
    ) -> Self {
        Self {
            media_session,
            status,
            errors,
        }
    }
}

impl AppHandler for Handler {
    fn handles(&self, namespace: &str) -> bool {
        namespace == NAMESPACE
    }

    fn handle(&self, _source: &str, kind: &str, payload: &Value) {
        if kind == MESSAGE_TYPE_MEDIA_STATUS {
            let statuses = match parse_statuses(payload) {
                Ok(statuses) => statuses,
                Err(err) => {
                    warn!("dropping unparseable {} broadcast: {}", CHANNEL, err);
                    return;
                }
            };
            if statuses.is_empty() {
                self.media_session.invalidate();
                return;
            }
            for status in &statuses {
                if self.media_session.register(status.media_session_id) {
                    debug!("media session established: {}", status.media_session_id);
                }
                for listener in self.status.snapshot() {
                    listener(status);
                }
            }
        } else if ERROR_KINDS.contains(&kind) {
            let error = MediaError {
                kind: kind.to_owned(),
                reason: payload
                    .get("reason")
                    .and_then(Value::as_str)
                    .map(String::from),
            };
            for listener in self.errors.snapshot() {
                listener(&error);
            }
        } else {
            debug!("unhandled {} message {}", CHANNEL, kind);
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum Request {
    #[serde(rename_all = "camelCase")]
    Load {
        request_id: i64,
        session_id: String,
        media: MediaInformation,
        autoplay: bool,
        current_time: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        queue_data: Option<QueueData>,
    },
    #[serde(rename_all = "camelCase")]
    Play {
        request_id: i64,
        media_session_id: i64,
    },
    #[serde(rename_all = "camelCase")]
    Pause {
        request_id: i64,
        media_session_id: i64,
    },
    #[serde(rename_all = "camelCase")]
    Stop {
        request_id: i64,
        media_session_id: i64,
    },
    #[serde(rename_all = "camelCase")]
    Seek {
        request_id: i64,
        media_session_id: i64,
        current_time: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        resume_state: Option<ResumeState>,
    },
    #[serde(rename_all = "camelCase")]
    GetStatus {
        request_id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        media_session_id: Option<i64>,
    },
    #[serde(rename_all = "camelCase")]
    QueueInsert {
        request_id: i64,
        media_session_id: i64,
        items: Vec<QueueItem>,
    },
    #[serde(rename_all = "camelCase")]
    QueueRemove {
        request_id: i64,
        media_session_id: i64,
        item_ids: Vec<i64>,
    },
    #[serde(rename_all = "camelCase")]
    QueueUpdate {
        request_id: i64,
        media_session_id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        jump: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        repeat_mode: Option<RepeatMode>,
    },
    #[serde(rename_all = "camelCase")]
    QueueGetItemIds {
        request_id: i64,
        media_session_id: i64,
    },
    #[serde(rename_all = "camelCase")]
    QueueGetItems {
        request_id: i64,
        media_session_id: i64,
        item_ids: Vec<i64>,
    },
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaInformation {
    pub content_id: String,
    pub stream_type: StreamType,
    pub content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StreamType {
    None,
    Buffered,
    Live,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub metadata_type: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composer: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disc_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode: Option<u32>,
}

impl Metadata {
    pub fn music_default() -> Self {
        Self {
            metadata_type: METADATA_TYPE_MUSIC_TRACK,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Image {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResumeState {
    PlaybackStart,
    PlaybackPause,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RepeatMode {
    #[serde(rename = "REPEAT_OFF")]
    Off,
    #[serde(rename = "REPEAT_ALL")]
    All,
    #[serde(rename = "REPEAT_SINGLE")]
    Single,
    #[serde(rename = "REPEAT_ALL_AND_SHUFFLE")]
    AllAndShuffle,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueItem {
    /// Assigned by the device; absent on items a sender is inserting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,
    pub media: MediaInformation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preload_time: Option<f64>,
}

impl QueueItem {
    pub fn new(media: MediaInformation) -> Self {
        Self {
            item_id: None,
            media,
            autoplay: None,
            start_time: None,
            preload_time: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueData {
    pub items: Vec<QueueItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat_mode: Option<RepeatMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_index: Option<u32>,
}

/// One media session's playback state.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaStatus {
    pub media_session_id: i64,
    #[serde(default)]
    pub media: Option<MediaInformation>,
    pub player_state: PlayerState,
    #[serde(default)]
    pub idle_reason: Option<IdleReason>,
    #[serde(default)]
    pub current_time: f64,
    #[serde(default = "default_playback_rate")]
    pub playback_rate: f64,
    #[serde(default)]
    pub supported_media_commands: u32,
    #[serde(default)]
    pub repeat_mode: Option<RepeatMode>,
    #[serde(default)]
    pub items: Vec<QueueItem>,
    #[serde(default)]
    pub current_item_id: Option<i64>,
    #[serde(default)]
    pub volume: Option<crate::channel::receiver::Volume>,
}

fn default_playback_rate() -> f64 {
    1.0
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerState {
    Idle,
    Playing,
    Buffering,
    Paused,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdleReason {
    Cancelled,
    Interrupted,
    Finished,
    Error,
}

/// A media-namespace message in the error set, delivered to media-error
/// listeners when unsolicited and surfaced as [`Error::Protocol`] when it
/// answers a request.
#[derive(Clone, Debug)]
pub struct MediaError {
    pub kind: String,
    pub reason: Option<String>,
}

pub(crate) fn load(
    source: &str,
    destination: &str,
    request_id: i64,
    session_id: &str,
    media: MediaInformation,
    autoplay: bool,
    queue: Option<QueueData>,
) -> CastMessage {
    let payload = Request::Load {
        request_id,
        session_id: session_id.to_owned(),
        media,
        autoplay,
        current_time: 0.0,
        queue_data: queue,
    };
    MessageBuilder::default()
        .namespace(NAMESPACE)
        .source(source)
        .destination(destination)
        .payload(&payload)
        .into_message()
}

pub(crate) fn play(
    source: &str,
    destination: &str,
    request_id: i64,
    media_session_id: i64,
) -> CastMessage {
    let payload = Request::Play {
        request_id,
        media_session_id,
    };
    MessageBuilder::default()
        .namespace(NAMESPACE)
        .source(source)
        .destination(destination)
        .payload(&payload)
        .into_message()
}

pub(crate) fn pause(
    source: &str,
    destination: &str,
    request_id: i64,
    media_session_id: i64,
) -> CastMessage {
    let payload = Request::Pause {
        request_id,
        media_session_id,
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
    media_session_id: i64,
) -> CastMessage {
    let payload = Request::Stop {
        request_id,
        media_session_id,
    };
    MessageBuilder::default()
        .namespace(NAMESPACE)
        .source(source)
        .destination(destination)
        .payload(&payload)
        .into_message()
}

pub(crate) fn seek(
    source: &str,
    destination: &str,
    request_id: i64,
    media_session_id: i64,
    current_time: f64,
) -> CastMessage {
    let payload = Request::Seek {
        request_id,
        media_session_id,
        current_time,
        resume_state: None,
    };
    MessageBuilder::default()
        .namespace(NAMESPACE)
        .source(source)
        .destination(destination)
        .payload(&payload)
        .into_message()
}

pub(crate) fn status(
    source: &str,
    destination: &str,
    request_id: i64,
    media_session_id: Option<i64>,
) -> CastMessage {
    let payload = Request::GetStatus {
        request_id,
        media_session_id,
    };
    MessageBuilder::default()
        .namespace(NAMESPACE)
        .source(source)
        .destination(destination)
        .payload(&payload)
        .into_message()
}

pub(crate) fn queue_insert(
    source: &str,
    destination: &str,
    request_id: i64,
    media_session_id: i64,
    items: Vec<QueueItem>,
) -> CastMessage {
    let payload = Request::QueueInsert {
        request_id,
        media_session_id,
        items,
    };
    MessageBuilder::default()
        .namespace(NAMESPACE)
        .source(source)
        .destination(destination)
        .payload(&payload)
        .into_message()
}

pub(crate) fn queue_remove(
    source: &str,
    destination: &str,
    request_id: i64,
    media_session_id: i64,
    item_ids: Vec<i64>,
) -> CastMessage {
    let payload = Request::QueueRemove {
        request_id,
        media_session_id,
        item_ids,
    };
    MessageBuilder::default()
        .namespace(NAMESPACE)
        .source(source)
        .destination(destination)
        .payload(&payload)
        .into_message()
}

pub(crate) fn queue_update(
    source: &str,
    destination: &str,
    request_id: i64,
    media_session_id: i64,
    jump: Option<i64>,
    repeat_mode: Option<RepeatMode>,
) -> CastMessage {
    let payload = Request::QueueUpdate {
        request_id,
        media_session_id,
        jump,
        repeat_mode,
    };
    MessageBuilder::default()
        .namespace(NAMESPACE)
        .source(source)
        .destination(destination)
        .payload(&payload)
        .into_message()
}

pub(crate) fn queue_get_item_ids(
    source: &str,
    destination: &str,
    request_id: i64,
    media_session_id: i64,
) -> CastMessage {
    let payload = Request::QueueGetItemIds {
        request_id,
        media_session_id,
    };
    MessageBuilder::default()
        .namespace(NAMESPACE)
        .source(source)
        .destination(destination)
        .payload(&payload)
        .into_message()
}

pub(crate) fn queue_get_items(
    source: &str,
    destination: &str,
    request_id: i64,
    media_session_id: i64,
    item_ids: Vec<i64>,
) -> CastMessage {
    let payload = Request::QueueGetItems {
        request_id,
        media_session_id,
        item_ids,
    };
    MessageBuilder::default()
        .namespace(NAMESPACE)
        .source(source)
        .destination(destination)
        .payload(&payload)
        .into_message()
}

fn parse_statuses(payload: &Value) -> Result<Vec<MediaStatus>> {
    let statuses = payload
        .get("status")
        .ok_or_else(|| Error::Parse("MEDIA_STATUS without a status".to_owned()))?;
    serde_json::from_value(statuses.clone()).map_err(|err| Error::Parse(err.to_string()))
}

/// Parse a correlated media-namespace response into the latest media
/// status. The error set surfaces as protocol errors.
pub(crate) fn parse_status_response(payload: &Value) -> Result<MediaStatus> {
    match response_kind(payload) {
        Some(MESSAGE_TYPE_MEDIA_STATUS) => parse_statuses(payload)?
            .into_iter()
            .next()
            .ok_or_else(|| Error::Parse("MEDIA_STATUS carried no entries".to_owned())),
        Some(kind) if ERROR_KINDS.contains(&kind) => Err(protocol_error(kind, payload)),
        Some(kind) => Err(Error::Parse(format!("unexpected {} response {}", CHANNEL, kind))),
        None => Err(Error::Parse(format!("untyped {} response", CHANNEL))),
    }
}

/// Parse a `QUEUE_GET_ITEM_IDS` response.
pub(crate) fn parse_item_ids_response(payload: &Value) -> Result<Vec<i64>> {
    match response_kind(payload) {
        Some(MESSAGE_TYPE_QUEUE_ITEM_IDS) => {
            let ids = payload
                .get("itemIds")
                .ok_or_else(|| Error::Parse("QUEUE_ITEM_IDS without ids".to_owned()))?;
            serde_json::from_value(ids.clone()).map_err(|err| Error::Parse(err.to_string()))
        }
        Some(kind) if ERROR_KINDS.contains(&kind) => Err(protocol_error(kind, payload)),
        Some(kind) => Err(Error::Parse(format!("unexpected {} response {}", CHANNEL, kind))),
        None => Err(Error::Parse(format!("untyped {} response", CHANNEL))),
    }
}

/// Parse a `QUEUE_GET_ITEMS` response.
pub(crate) fn parse_items_response(payload: &Value) -> Result<Vec<QueueItem>> {
    match response_kind(payload) {
        Some(MESSAGE_TYPE_QUEUE_ITEMS) => {
            let items = payload
                .get("items")
                .ok_or_else(|| Error::Parse("QUEUE_ITEMS without items".to_owned()))?;
            serde_json::from_value(items.clone()).map_err(|err| Error::Parse(err.to_string()))
        }
        Some(kind) if ERROR_KINDS.contains(&kind) => Err(protocol_error(kind, payload)),
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
    use serde_json::{json, Value};

    use super::{
        load, parse_item_ids_response, parse_status_response, IdleReason, MediaInformation,
        PlayerState, RepeatMode, StreamType,
    };
    use crate::provider::Error;

    fn media() -> MediaInformation {
        MediaInformation {
            content_id: "http://192.0.2.1/track.mp3".to_owned(),
            stream_type: StreamType::Buffered,
            content_type: "audio/mp3".to_owned(),
            metadata: None,
            duration: Some(212.5),
        }
    }

    #[test]
    fn load_splices_the_session_and_starts_at_zero() {
        let message = load("sender-0", "transport-1", 4, "sess-1", media(), true, None);
        let payload: Value = serde_json::from_str(message.get_payload_utf8()).unwrap();
        assert_eq!("LOAD", payload["type"]);
        assert_eq!(4, payload["requestId"]);
        assert_eq!("sess-1", payload["sessionId"]);
        assert_eq!(true, payload["autoplay"]);
        assert_eq!(0.0, payload["currentTime"]);
        assert_eq!("BUFFERED", payload["media"]["streamType"]);
        assert!(payload.get("queueData").is_none());
    }

    #[test]
    fn media_status_takes_the_first_entry() {
        let payload = json!({
            "type": "MEDIA_STATUS",
            "requestId": 5,
            "status": [{
                "mediaSessionId": 7,
                "playbackRate": 1.0,
                "playerState": "PLAYING",
                "currentTime": 11.5,
                "supportedMediaCommands": 15,
                "repeatMode": "REPEAT_ALL",
                "volume": { "level": 1.0, "muted": false }
            }]
        });
        let status = parse_status_response(&payload).unwrap();
        assert_eq!(7, status.media_session_id);
        assert_eq!(PlayerState::Playing, status.player_state);
        assert_eq!(Some(RepeatMode::All), status.repeat_mode);
        assert_eq!(None, status.idle_reason);
    }

    #[test]
    fn idle_status_parses_with_defaults() {
        let payload = json!({
            "type": "MEDIA_STATUS",
            "status": [{
                "mediaSessionId": 2,
                "playerState": "IDLE",
                "idleReason": "FINISHED"
            }]
        });
        let status = parse_status_response(&payload).unwrap();
        assert_eq!(PlayerState::Idle, status.player_state);
        assert_eq!(Some(IdleReason::Finished), status.idle_reason);
        assert_eq!(1.0, status.playback_rate);
        assert_eq!(0.0, status.current_time);
        assert!(status.items.is_empty());
    }

    #[test]
    fn response_type_is_checked_before_type() {
        // A reply that still echoes `type` is classified by `responseType`.
        let payload = json!({
            "type": "MEDIA_STATUS",
            "responseType": "LOAD_FAILED",
            "requestId": 6
        });
        match parse_status_response(&payload) {
            Err(Error::Protocol(message)) => assert!(message.contains("LOAD_FAILED")),
            other => panic!("expected protocol error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn every_error_kind_is_a_protocol_error() {
        for kind in super::ERROR_KINDS {
            let payload = json!({ "type": kind, "requestId": 1 });
            match parse_status_response(&payload) {
                Err(Error::Protocol(message)) => assert!(message.contains(kind)),
                other => panic!("expected protocol error for {}, got {:?}", kind, other.map(|_| ())),
            }
        }
    }

    #[test]
    fn item_ids_parse_in_order() {
        let payload = json!({
            "type": "QUEUE_ITEM_IDS",
            "requestId": 8,
            "itemIds": [3, 1, 2]
        });
        assert_eq!(vec![3, 1, 2], parse_item_ids_response(&payload).unwrap());
    }
}
