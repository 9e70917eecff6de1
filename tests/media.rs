//! Default Media Receiver: load, transport control, queueing, and media
//! error surfacing.

mod support;

use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::Value;

use castwire::{
    Config, Device, DeviceInfo, Error, MediaInformation, PlayerState, QueueItem, RepeatMode,
    StreamType, DEFAULT_MEDIA_RECEIVER_APP_ID,
};
use support::Options;

fn config() -> Config {
    let mut config = Config::default();
    config.use_tls = false;
    config.request_timeout = Duration::from_secs(5);
    config.ping_interval = Duration::from_millis(100);
    config
}

fn device_at(addr: SocketAddr) -> Device {
    Device::new(
        DeviceInfo {
            id: "EMULATED_DEVICE".to_owned(),
            name: None,
            addr,
        },
        config(),
    )
}

fn track(content_id: &str) -> MediaInformation {
    MediaInformation {
        content_id: content_id.to_owned(),
        stream_type: StreamType::Buffered,
        content_type: "audio/mp3".to_owned(),
        metadata: None,
        duration: Some(180.0),
    }
}

/// Scripted Default Media Receiver: answers LAUNCH, echoes MEDIA_STATUS for
/// media commands, and records every media-namespace request payload.
fn media_device(
    listener: TcpListener,
) -> (
    Arc<Mutex<Vec<Value>>>,
    std::thread::JoinHandle<()>,
) {
    let log: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&log);
    let handle = support::serve(listener, Options::default(), move |wire, message| {
        let payload = support::payload_of(&message);
        if message.get_namespace() == support::MEDIA_NAMESPACE {
            seen.lock().unwrap().push(payload.clone());
        }
        let source = message.get_source_id().to_owned();
        match payload["type"].as_str() {
            Some("LAUNCH") => {
                let reply = support::status_with_app(&payload["requestId"], "CC1AD845");
                wire.send_json(support::RECEIVER_NAMESPACE, &source, &reply).unwrap();
            }
            Some("LOAD") => {
                if payload["media"]["contentId"] == "fail://" {
                    let reply = serde_json::json!({
                        "responseType": "LOAD_FAILED",
                        "requestId": payload["requestId"]
                    });
                    wire.send_json(support::MEDIA_NAMESPACE, &source, &reply).unwrap();
                } else {
                    // An unsolicited broadcast first, then the reply.
                    let broadcast = support::media_status(&Value::from(0), 7, "BUFFERING");
                    wire.send_json(support::MEDIA_NAMESPACE, &source, &broadcast).unwrap();
                    let reply = support::media_status(&payload["requestId"], 7, "PLAYING");
                    wire.send_json(support::MEDIA_NAMESPACE, &source, &reply).unwrap();
                }
            }
            Some("PLAY") | Some("PAUSE") | Some("SEEK") | Some("QUEUE_INSERT")
            | Some("QUEUE_UPDATE") | Some("QUEUE_REMOVE") => {
                let reply = support::media_status(&payload["requestId"], 7, "PLAYING");
                wire.send_json(support::MEDIA_NAMESPACE, &source, &reply).unwrap();
            }
            Some("QUEUE_GET_ITEM_IDS") => {
                let reply = serde_json::json!({
                    "type": "QUEUE_ITEM_IDS",
                    "requestId": payload["requestId"],
                    "itemIds": [11, 12]
                });
                wire.send_json(support::MEDIA_NAMESPACE, &source, &reply).unwrap();
            }
            Some("QUEUE_GET_ITEMS") => {
                let reply = serde_json::json!({
                    "type": "QUEUE_ITEMS",
                    "requestId": payload["requestId"],
                    "items": [
                        { "itemId": 11, "media": {
                            "contentId": "http://192.0.2.1/a.mp3",
                            "streamType": "BUFFERED",
                            "contentType": "audio/mp3"
                        }},
                        { "itemId": 12, "media": {
                            "contentId": "http://192.0.2.1/b.mp3",
                            "streamType": "BUFFERED",
                            "contentType": "audio/mp3"
                        }}
                    ]
                });
                wire.send_json(support::MEDIA_NAMESPACE, &source, &reply).unwrap();
            }
            _ => {}
        }
    });
    (log, handle)
}

#[test]
fn load_remembers_the_media_session_for_later_commands() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (log, handle) = media_device(listener);

    let device = device_at(addr);
    let statuses: Arc<Mutex<Vec<i64>>> = Arc::new(Mutex::new(Vec::new()));
    let observed = Arc::clone(&statuses);
    device.on_media_status(move |status| {
        observed.lock().unwrap().push(status.media_session_id);
    });
    device.connect(Duration::from_secs(5)).unwrap();

    let session = device.launch(DEFAULT_MEDIA_RECEIVER_APP_ID).unwrap();
    let status = session.load(track("http://192.0.2.1/a.mp3"), true).unwrap();
    assert_eq!(7, status.media_session_id);
    assert_eq!(PlayerState::Playing, status.player_state);

    // The unsolicited BUFFERING broadcast reached the media listeners.
    assert_eq!(vec![7], statuses.lock().unwrap().clone());

    let paused = session.pause().unwrap();
    assert_eq!(7, paused.media_session_id);
    let sought = session.seek(42.5).unwrap();
    assert_eq!(7, sought.media_session_id);

    device.close().unwrap();
    handle.join().unwrap();

    let entries = log.lock().unwrap();
    let load = entries.iter().find(|p| p["type"] == "LOAD").unwrap();
    assert_eq!("sess-1", load["sessionId"]);
    assert_eq!(0.0, load["currentTime"]);
    assert_eq!(true, load["autoplay"]);
    let pause = entries.iter().find(|p| p["type"] == "PAUSE").unwrap();
    assert_eq!(7, pause["mediaSessionId"]);
    let seek = entries.iter().find(|p| p["type"] == "SEEK").unwrap();
    assert_eq!(42.5, seek["currentTime"]);
}

#[test]
fn load_failure_is_a_protocol_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (_log, handle) = media_device(listener);

    let device = device_at(addr);
    device.connect(Duration::from_secs(5)).unwrap();
    let session = device.launch(DEFAULT_MEDIA_RECEIVER_APP_ID).unwrap();

    let error = session.load(track("fail://"), true).unwrap_err();
    assert!(error.to_string().contains("LOAD_FAILED"), "{}", error);

    device.close().unwrap();
    handle.join().unwrap();
}

#[test]
fn media_commands_without_a_session_are_state_errors() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (_log, handle) = media_device(listener);

    let device = device_at(addr);
    device.connect(Duration::from_secs(5)).unwrap();
    let session = device.launch(DEFAULT_MEDIA_RECEIVER_APP_ID).unwrap();

    match session.play() {
        Err(Error::State(reason)) => assert!(reason.contains("no media session"), "{}", reason),
        other => panic!("expected a state error, got {:?}", other.map(|_| ())),
    }

    device.close().unwrap();
    handle.join().unwrap();
}

#[test]
fn queue_commands_carry_the_session_and_parse_items() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (log, handle) = media_device(listener);

    let device = device_at(addr);
    device.connect(Duration::from_secs(5)).unwrap();
    let session = device.launch(DEFAULT_MEDIA_RECEIVER_APP_ID).unwrap();
    session.load(track("http://192.0.2.1/a.mp3"), true).unwrap();

    session
        .queue_insert(vec![QueueItem::new(track("http://192.0.2.1/b.mp3"))])
        .unwrap();
    session.next().unwrap();
    session.previous().unwrap();
    session.set_repeat_mode(RepeatMode::All).unwrap();
    session.queue_remove(vec![12]).unwrap();

    let items = session.queue_items().unwrap();
    assert_eq!(2, items.len());
    assert_eq!(Some(11), items[0].item_id);
    assert_eq!("http://192.0.2.1/b.mp3", items[1].media.content_id);

    device.close().unwrap();
    handle.join().unwrap();

    let entries = log.lock().unwrap();
    let updates: Vec<&Value> = entries
        .iter()
        .filter(|p| p["type"] == "QUEUE_UPDATE")
        .collect();
    assert_eq!(3, updates.len());
    assert_eq!(1, updates[0]["jump"]);
    assert_eq!(-1, updates[1]["jump"]);
    assert_eq!("REPEAT_ALL", updates[2]["repeatMode"]);
    for update in updates {
        assert_eq!(7, update["mediaSessionId"]);
    }
    let get_items = entries
        .iter()
        .find(|p| p["type"] == "QUEUE_GET_ITEMS")
        .unwrap();
    assert_eq!(11, get_items["itemIds"][0]);
}

#[test]
fn unsolicited_media_errors_reach_error_listeners() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = support::serve(listener, Options::default(), move |wire, message| {
        let payload = support::payload_of(&message);
        let source = message.get_source_id().to_owned();
        match payload["type"].as_str() {
            Some("LAUNCH") => {
                let reply = support::status_with_app(&payload["requestId"], "CC1AD845");
                wire.send_json(support::RECEIVER_NAMESPACE, &source, &reply).unwrap();
            }
            Some("GET_STATUS") if message.get_namespace() == support::MEDIA_NAMESPACE => {
                // An unsolicited error broadcast, then the reply.
                let error = serde_json::json!({
                    "type": "INVALID_PLAYER_STATE",
                    "reason": "NO_MEDIA_SESSION"
                });
                wire.send_json(support::MEDIA_NAMESPACE, &source, &error).unwrap();
                let reply = support::media_status(&payload["requestId"], 3, "IDLE");
                wire.send_json(support::MEDIA_NAMESPACE, &source, &reply).unwrap();
            }
            _ => {}
        }
    });

    let device = device_at(addr);
    let (error_tx, error_rx) = crossbeam_channel::unbounded();
    device.on_media_error(move |error| {
        let _ = error_tx.send((error.kind.clone(), error.reason.clone()));
    });
    device.connect(Duration::from_secs(5)).unwrap();

    let session = device.launch(DEFAULT_MEDIA_RECEIVER_APP_ID).unwrap();
    let status = session.media_status().unwrap();
    assert_eq!(3, status.media_session_id);

    let (kind, reason) = error_rx
        .recv_timeout(Duration::from_secs(2))
        .expect("media error event");
    assert_eq!("INVALID_PLAYER_STATE", kind);
    assert_eq!(Some("NO_MEDIA_SESSION".to_owned()), reason);

    device.close().unwrap();
    handle.join().unwrap();
}
