//! Heartbeat state machine: liveness, pong-timeout, and the PING responder.

mod support;

use std::net::{SocketAddr, TcpListener};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use castwire::{Config, ConnectionEvent, Device, DeviceInfo};
use support::Options;

const PING_INTERVAL: Duration = Duration::from_millis(100);

fn config() -> Config {
    let mut config = Config::default();
    config.use_tls = false;
    config.request_timeout = Duration::from_secs(5);
    config.ping_interval = PING_INTERVAL;
    config.pong_missed = 3;
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

#[test]
fn an_answering_device_keeps_the_connection_open() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = support::serve(listener, Options::default(), |_, _| {});

    let device = device_at(addr);
    let events = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&events);
    device.on_connection_event(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    device.connect(Duration::from_secs(5)).unwrap();

    // Several ping cycles worth of time.
    thread::sleep(PING_INTERVAL * 6);
    assert!(device.is_connected());
    assert_eq!(0, events.load(Ordering::SeqCst));

    device.close().unwrap();
    handle.join().unwrap();
}

#[test]
fn a_silent_device_is_declared_dead_once() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    // Answer exactly one PING: enough to open the connection, then silence.
    let mut options = Options::default();
    options.pong_limit = Some(1);
    let handle = support::serve(listener, options, |_, _| {});

    let device = device_at(addr);
    let (dead_tx, dead_rx) = crossbeam_channel::unbounded();
    device.on_connection_event(move |event| {
        let _ = dead_tx.send(*event);
    });
    device.connect(Duration::from_secs(5)).unwrap();
    let opened = Instant::now();

    let event = dead_rx
        .recv_timeout(Duration::from_secs(3))
        .expect("connectionDead event");
    let elapsed = opened.elapsed();
    assert_eq!(ConnectionEvent::Dead, event);
    assert!(!device.is_connected());
    // One pong-timeout interval, within a ping interval of slack.
    assert!(
        elapsed >= PING_INTERVAL * 2 && elapsed <= PING_INTERVAL * 8,
        "dead after {:?}",
        elapsed
    );

    // The event fires at most once per session.
    assert!(dead_rx.recv_timeout(PING_INTERVAL * 4).is_err());

    device.close().unwrap();
    handle.join().unwrap();
}

#[test]
fn an_inbound_ping_is_answered_to_its_source() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let (pong_tx, pong_rx) = crossbeam_channel::unbounded();
    let mut pinged = false;
    let handle = support::serve(listener, Options::default(), move |wire, message| {
        let payload = support::payload_of(&message);
        if payload["type"] == "CONNECT" && !pinged {
            // First CONNECT: ping the client from an app transport.
            pinged = true;
            let ping = serde_json::json!({ "type": "PING" });
            let message = support::string_message(
                support::HEARTBEAT_NAMESPACE,
                "transport-9",
                message.get_source_id(),
                &ping,
            );
            wire.write_message(&message).unwrap();
        } else if payload["type"] == "PONG" {
            let _ = pong_tx.send(message.get_destination_id().to_owned());
        }
    });

    let device = device_at(addr);
    device.connect(Duration::from_secs(5)).unwrap();

    let destination = pong_rx
        .recv_timeout(Duration::from_secs(2))
        .expect("PONG for the scripted PING");
    assert_eq!("transport-9", destination);

    device.close().unwrap();
    handle.join().unwrap();
}
