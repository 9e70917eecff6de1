//! Client for the Google Cast V2 protocol.
//!
//! A [`Device`] owns one authenticated channel to a cast receiver: a framed
//! TLS connection with background reader, dispatcher, and writer workers, a
//! `PING`/`PONG` heartbeat, and request/response correlation multiplexing
//! concurrent calls over the single socket. Receiver operations (status,
//! volume, launch, stop) live on the device; application operations live on
//! the [`AppSession`] handed out by [`Device::launch`] or [`Device::join`],
//! including playback and queue control for the Default Media Receiver.
//!
//! Devices are found with [`discovery::devices`], or constructed directly
//! from a known address with [`Device::new`].

#[macro_use]
extern crate log;
#[macro_use]
extern crate nom;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError};
use futures::prelude::*;
use futures::sync::mpsc::{self, UnboundedSender};
use serde_json::Value;
use tokio::codec::Framed;
use tokio::runtime::Runtime;
use uuid::Uuid;

mod channel;
mod codec;
mod config;
pub mod discovery;
#[allow(clippy::all, clippy::pedantic)]
pub mod proto;
mod provider;
mod request;
mod session;
mod shutdown;
mod task;

use crate::channel::{connection, heartbeat, media, receiver, Responder};
use crate::codec::MessageCodec;
use crate::proto::CastMessage;
use crate::provider::Listeners;
use crate::request::Tracker;
use crate::session::{MediaSession, Sessions, State, Teardown};
use crate::shutdown::{channel_shutdown, Outbox};

pub use crate::channel::media::{
    IdleReason, Image, MediaError, MediaInformation, MediaStatus, Metadata, PlayerState,
    QueueData, QueueItem, RepeatMode, ResumeState, StreamType,
};
pub use crate::channel::receiver::{
    AppAvailability, Application, DeviceStatus, Namespace, Volume, VolumeControlType,
};
pub use crate::channel::{AppHandler, DEFAULT_MEDIA_RECEIVER_APP_ID};
pub use crate::config::Config;
pub use crate::provider::{ConnectionEvent, DeviceInfo, Error, Result};

/// Bounded wait for the workers to wind down during `close`.
const WORKER_JOIN_TIMEOUT: Duration = Duration::from_secs(1);

type ConnectionListener = dyn Fn(&ConnectionEvent) + Send + Sync;

/// The live transport of a connected device: the per-connection runtime and
/// the handles needed to feed and stop its workers.
struct Link {
    runtime: Runtime,
    command: UnboundedSender<CastMessage>,
    teardown: Arc<Teardown>,
    local_close: Arc<AtomicBool>,
    writer_done: Receiver<()>,
}

/// Controller for one cast device. At most one socket is open per
/// controller; reconnecting after a close or failure is permitted and
/// starts a fresh channel.
pub struct Device {
    info: DeviceInfo,
    config: Config,
    sender_id: String,
    lifecycle: Arc<session::Lifecycle>,
    sessions: Arc<Sessions>,
    heartbeat: Arc<session::Heartbeat>,
    media_session: Arc<MediaSession>,
    tracker: Arc<Tracker>,
    device_status: Arc<Listeners<receiver::StatusListener>>,
    media_status: Arc<Listeners<media::StatusListener>>,
    media_errors: Arc<Listeners<media::ErrorListener>>,
    connection_events: Arc<Listeners<ConnectionListener>>,
    apps: Arc<Listeners<dyn AppHandler>>,
    link: Mutex<Option<Link>>,
}

impl Device {
    /// Build a controller for a device at a known address. The envelope
    /// source id is the configured sender name plus a process-unique
    /// suffix.
    pub fn new(info: DeviceInfo, config: Config) -> Self {
        let sender_id = format!("{}-{}", config.sender_name, Uuid::new_v4());
        let media_session = Arc::new(MediaSession::new());
        let media_status: Arc<Listeners<media::StatusListener>> = Arc::new(Listeners::new());
        let media_errors: Arc<Listeners<media::ErrorListener>> = Arc::new(Listeners::new());
        let apps: Arc<Listeners<dyn AppHandler>> = Arc::new(Listeners::new());
        apps.add(Arc::new(media::Handler::new(
            Arc::clone(&media_session),
            Arc::clone(&media_status),
            Arc::clone(&media_errors),
        )));
        Self {
            info,
            config,
            sender_id,
            lifecycle: Arc::new(session::Lifecycle::new()),
            sessions: Arc::new(Sessions::new()),
            heartbeat: Arc::new(session::Heartbeat::new()),
            media_session,
            tracker: Arc::new(Tracker::new()),
            device_status: Arc::new(Listeners::new()),
            media_status,
            media_errors,
            connection_events: Arc::new(Listeners::new()),
            apps,
            link: Mutex::new(None),
        }
    }

    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    pub fn is_connected(&self) -> bool {
        self.lifecycle.is_opened()
    }

    /// Device-status listener. Sees unsolicited `RECEIVER_STATUS`
    /// broadcasts and the statuses returned by receiver operations.
    pub fn on_device_status<F>(&self, listener: F)
    where
        F: Fn(&DeviceStatus) + Send + Sync + 'static,
    {
        self.device_status.add(Arc::new(listener));
    }

    /// Media-status listener for `MEDIA_STATUS` broadcasts.
    pub fn on_media_status<F>(&self, listener: F)
    where
        F: Fn(&MediaStatus) + Send + Sync + 'static,
    {
        self.media_status.add(Arc::new(listener));
    }

    /// Media-error listener for unsolicited media error messages.
    pub fn on_media_error<F>(&self, listener: F)
    where
        F: Fn(&MediaError) + Send + Sync + 'static,
    {
        self.media_errors.add(Arc::new(listener));
    }

    /// Connection listener. `Dead` fires on heartbeat timeout,
    /// `RemoteClosed` on socket failure or a remote `CLOSE`; each at most
    /// once per session.
    pub fn on_connection_event<F>(&self, listener: F)
    where
        F: Fn(&ConnectionEvent) + Send + Sync + 'static,
    {
        self.connection_events.add(Arc::new(listener));
    }

    /// Handler for an application namespace beyond the built-in channels.
    pub fn register_app_handler(&self, handler: Arc<dyn AppHandler>) {
        self.apps.add(handler);
    }

    /// Open the channel: socket, device-auth handshake, `CONNECT` to the
    /// default receiver, heartbeat. Blocks until the first `PONG` opens the
    /// connection or `timeout` elapses; time spent in the handshake counts
    /// against the same deadline. Idempotent while connected.
    pub fn connect(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        let mut link = self.link.lock().expect("poisoned link slot");
        if let Some(stale) = link.take() {
            if self.lifecycle.is_opened() {
                *link = Some(stale);
                return Ok(());
            }
            // The previous session died on its own; reap its workers
            // before dialing again.
            stale.local_close.store(true, Ordering::SeqCst);
            stale.teardown.begin(None, Vec::new());
            let _ = stale.writer_done.recv_timeout(WORKER_JOIN_TIMEOUT);
            let _ = stale.runtime.shutdown_now().wait();
        }

        self.lifecycle.set(State::Connecting);
        self.heartbeat.reset();
        self.media_session.invalidate();

        let mut runtime = Runtime::new().map_err(Error::Io)?;
        let (command_tx, command_rx) = mpsc::unbounded();
        let (event_tx, event_rx) = mpsc::unbounded();
        let (shutdown_handle, shutdown) = channel_shutdown();
        let local_close = Arc::new(AtomicBool::new(false));
        let teardown = Arc::new(Teardown::new(
            shutdown_handle,
            Arc::clone(&self.lifecycle),
            Arc::clone(&self.tracker),
            Arc::clone(&self.sessions),
            Arc::clone(&self.connection_events),
        ));
        let (ready_tx, ready_rx) = crossbeam_channel::bounded(1);
        let (done_tx, done_rx) = crossbeam_channel::bounded(1);

        let responder = Responder::new(
            Arc::clone(&self.tracker),
            connection::Handler::new(
                self.config.default_receiver_id.clone(),
                Arc::clone(&self.sessions),
                Arc::clone(&teardown),
            ),
            heartbeat::Handler::new(
                command_tx.clone(),
                self.sender_id.clone(),
                Arc::clone(&self.lifecycle),
                Arc::clone(&self.heartbeat),
            ),
            receiver::Handler::new(Arc::clone(&self.device_status)),
            Arc::clone(&self.apps),
        );

        let init = {
            let event_tx = event_tx.clone();
            let teardown = Arc::clone(&teardown);
            let local_close = Arc::clone(&local_close);
            let shutdown = shutdown.clone();
            task::connect_socket(self.info.addr, self.config.use_tls).then(move |result| {
                match result {
                    Ok(socket) => {
                        let (sink, source) =
                            Framed::new(socket, MessageCodec::default()).split();
                        tokio::spawn(task::read(source, event_tx.clone()));
                        tokio::spawn(task::dispatch(event_rx, responder, teardown, local_close));
                        tokio::spawn(task::send(
                            sink,
                            Outbox::new(command_rx, shutdown),
                            event_tx,
                            done_tx,
                        ));
                        let _ = ready_tx.send(Ok(()));
                    }
                    Err(err) => {
                        let _ = ready_tx.send(Err(err));
                    }
                }
                Ok(())
            })
        };
        runtime.spawn(init);

        match ready_rx.recv_timeout(remaining(deadline)) {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                abort_connect(runtime, &teardown, &local_close, None);
                return Err(Error::Io(err));
            }
            Err(_) => {
                abort_connect(runtime, &teardown, &local_close, None);
                return Err(Error::Timeout);
            }
        }

        let handshake = (|| {
            // The auth reply carries no request id; the predicate matches
            // the single binary exchange in flight.
            let auth_rx = self.tracker.register_binary(|message: &CastMessage| {
                message.get_namespace() == connection::AUTH_NAMESPACE
            });
            let challenge =
                connection::auth_challenge(&self.sender_id, &self.config.default_receiver_id)?;
            if command_tx.unbounded_send(challenge).is_err() {
                return Err(Error::ConnectionClosed);
            }
            let reply = match auth_rx.recv_timeout(remaining(deadline)) {
                Ok(reply) => reply,
                Err(RecvTimeoutError::Timeout) => return Err(Error::Timeout),
                Err(RecvTimeoutError::Disconnected) => return Err(Error::ConnectionClosed),
            };
            connection::check_auth_reply(&reply)?;
            debug!("device accepted the auth challenge");
            let virtual_connect =
                connection::connect(&self.sender_id, &self.config.default_receiver_id);
            if command_tx.unbounded_send(virtual_connect).is_err() {
                return Err(Error::ConnectionClosed);
            }
            Ok(())
        })();
        if let Err(err) = handshake {
            abort_connect(runtime, &teardown, &local_close, Some(&done_rx));
            return Err(err);
        }

        // Handshake time does not count as heartbeat silence.
        self.heartbeat.reset();
        runtime.spawn(task::Keepalive::new(
            shutdown,
            self.config.ping_interval,
            self.config.pong_timeout(),
            self.sender_id.clone(),
            self.config.default_receiver_id.clone(),
            command_tx.clone(),
            Arc::clone(&self.heartbeat),
            Arc::clone(&teardown),
        ));

        match self.lifecycle.wait_opened(deadline) {
            State::Opened => {
                info!("connected to {} at {}", self.info.id, self.info.addr);
                *link = Some(Link {
                    runtime,
                    command: command_tx,
                    teardown,
                    local_close,
                    writer_done: done_rx,
                });
                Ok(())
            }
            State::Closed => {
                abort_connect(runtime, &teardown, &local_close, Some(&done_rx));
                Err(Error::ConnectionClosed)
            }
            State::Connecting => {
                abort_connect(runtime, &teardown, &local_close, Some(&done_rx));
                Err(Error::Timeout)
            }
        }
    }

    /// Close the channel: relinquish open sub-sessions, send a final
    /// `CLOSE` to the default receiver, stop the workers (bounded wait),
    /// and release the socket. A later `connect` is permitted.
    pub fn close(&self) -> Result<()> {
        let link = self.link.lock().expect("poisoned link slot").take();
        if let Some(link) = link {
            debug!("closing connection to {}", self.info.id);
            link.local_close.store(true, Ordering::SeqCst);
            // Relinquish whatever sub-sessions are still open, then the
            // virtual connection itself, as the writer's farewell.
            let mut farewell: Vec<CastMessage> = self
                .sessions
                .drain()
                .into_iter()
                .map(|transport| connection::close(&self.sender_id, &transport))
                .collect();
            farewell.push(connection::close(
                &self.sender_id,
                &self.config.default_receiver_id,
            ));
            link.teardown.begin(None, farewell);
            if link.writer_done.recv_timeout(WORKER_JOIN_TIMEOUT).is_err() {
                warn!("writer did not drain before the join timeout");
            }
            let _ = link.runtime.shutdown_now().wait();
        }
        Ok(())
    }

    /// Current device status via `GET_STATUS`.
    pub fn status(&self) -> Result<DeviceStatus> {
        let id = self.tracker.next_id();
        let message =
            receiver::get_status(&self.sender_id, &self.config.default_receiver_id, id);
        let payload = self.send_request(id, message)?;
        let status = receiver::parse_status_response(&payload)?;
        self.notify_device_status(&status);
        Ok(status)
    }

    /// Set the device volume level (0.0 through 1.0).
    pub fn set_volume(&self, level: f64) -> Result<DeviceStatus> {
        self.set_volume_request(Volume {
            level: Some(level),
            ..Volume::default()
        })
    }

    /// Mute or unmute the device.
    pub fn set_muted(&self, muted: bool) -> Result<DeviceStatus> {
        self.set_volume_request(Volume {
            muted: Some(muted),
            ..Volume::default()
        })
    }

    fn set_volume_request(&self, volume: Volume) -> Result<DeviceStatus> {
        let id = self.tracker.next_id();
        let message =
            receiver::set_volume(&self.sender_id, &self.config.default_receiver_id, id, volume);
        let payload = self.send_request(id, message)?;
        let status = receiver::parse_status_response(&payload)?;
        self.notify_device_status(&status);
        Ok(status)
    }

    /// Availability of the given application ids on this device.
    pub fn app_availability(
        &self,
        app_ids: &[&str],
    ) -> Result<HashMap<String, AppAvailability>> {
        let id = self.tracker.next_id();
        let message = receiver::app_availability(
            &self.sender_id,
            &self.config.default_receiver_id,
            id,
            app_ids.iter().map(|id| (*id).to_owned()).collect(),
        );
        let payload = self.send_request(id, message)?;
        receiver::parse_availability_response(&payload)
    }

    /// Launch an application and join its session. `LAUNCH_ERROR` and
    /// `INVALID_REQUEST` responses surface as protocol errors.
    pub fn launch(&self, app_id: &str) -> Result<AppSession> {
        let id = self.tracker.next_id();
        let message =
            receiver::launch(&self.sender_id, &self.config.default_receiver_id, id, app_id);
        let payload = self.send_request(id, message)?;
        let status = receiver::parse_status_response(&payload)?;
        self.notify_device_status(&status);
        let app = status.application(app_id).cloned().ok_or_else(|| {
            Error::Protocol(format!("LAUNCH of {} reported no matching application", app_id))
        })?;
        self.join(app)
    }

    /// Join an already-running application. The `CONNECT` to its transport
    /// is sent at most once no matter how often the session is joined.
    pub fn join(&self, app: Application) -> Result<AppSession> {
        if self.sessions.join(&app.transport_id) {
            let message = connection::connect(&self.sender_id, &app.transport_id);
            if let Err(err) = self.send_message(message) {
                self.sessions.leave(&app.transport_id);
                return Err(err);
            }
        }
        Ok(AppSession { device: self, app })
    }

    fn leave_transport(&self, transport: &str) -> Result<()> {
        if self.sessions.leave(transport) {
            self.send_message(connection::close(&self.sender_id, transport))?;
        }
        Ok(())
    }

    fn notify_device_status(&self, status: &DeviceStatus) {
        for listener in self.device_status.snapshot() {
            listener(status);
        }
    }

    fn command_sender(&self) -> Result<UnboundedSender<CastMessage>> {
        let link = self.link.lock().expect("poisoned link slot");
        match link.as_ref() {
            Some(link) if self.lifecycle.is_opened() => Ok(link.command.clone()),
            _ => Err(Error::NotConnected),
        }
    }

    /// Fire-and-forget send. Fails if the channel is not opened.
    fn send_message(&self, message: CastMessage) -> Result<()> {
        self.command_sender()?
            .unbounded_send(message)
            .map_err(|_| Error::NotConnected)
    }

    /// Transmit a request and block for its correlated response. The
    /// pending entry is registered before the write so the reply cannot
    /// race it; on timeout the entry is abandoned and a late reply is
    /// delivered to listeners as unsolicited.
    fn send_request(&self, id: i64, message: CastMessage) -> Result<Value> {
        let command = self.command_sender()?;
        let rx = self.tracker.register(id);
        if command.unbounded_send(message).is_err() {
            self.tracker.abandon(id);
            return Err(Error::NotConnected);
        }
        let reply = self
            .tracker
            .await_response(id, &rx, self.config.request_timeout)?;
        serde_json::from_str(reply.get_payload_utf8()).map_err(|err| Error::Parse(err.to_string()))
    }
}

impl Drop for Device {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

/// A joined application session. Media operations target the Default Media
/// Receiver's `media` namespace at the app's transport id; the media
/// session id observed on `LOAD` (or any `MEDIA_STATUS`) is spliced into
/// every control request. Dropped, stopped, or torn down with the channel,
/// all operations fail.
pub struct AppSession<'a> {
    device: &'a Device,
    app: Application,
}

impl<'a> std::fmt::Debug for AppSession<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("AppSession").field("app", &self.app).finish()
    }
}

impl<'a> AppSession<'a> {
    pub fn app(&self) -> &Application {
        &self.app
    }

    /// Relinquish the sub-session without stopping the app. The matching
    /// `CLOSE` is sent exactly once.
    pub fn leave(self) -> Result<()> {
        self.device.leave_transport(&self.app.transport_id)
    }

    /// Close the sub-session, then stop the app with `STOP`. Returns the
    /// post-stop device status.
    pub fn stop(self) -> Result<DeviceStatus> {
        self.device.leave_transport(&self.app.transport_id)?;
        self.device.media_session.invalidate();
        let id = self.device.tracker.next_id();
        let message = receiver::stop(
            &self.device.sender_id,
            &self.device.config.default_receiver_id,
            id,
            &self.app.session_id,
        );
        let payload = self.device.send_request(id, message)?;
        let status = receiver::parse_status_response(&payload)?;
        self.device.notify_device_status(&status);
        Ok(status)
    }

    /// Load a single media item. Playback starts at zero.
    pub fn load(&self, media: MediaInformation, autoplay: bool) -> Result<MediaStatus> {
        let id = self.device.tracker.next_id();
        let message = media::load(
            &self.device.sender_id,
            &self.app.transport_id,
            id,
            &self.app.session_id,
            media,
            autoplay,
            None,
        );
        self.media_request(id, message)
    }

    /// Load a media item together with a queue.
    pub fn load_queue(
        &self,
        media: MediaInformation,
        autoplay: bool,
        queue: QueueData,
    ) -> Result<MediaStatus> {
        let id = self.device.tracker.next_id();
        let message = media::load(
            &self.device.sender_id,
            &self.app.transport_id,
            id,
            &self.app.session_id,
            media,
            autoplay,
            Some(queue),
        );
        self.media_request(id, message)
    }

    pub fn play(&self) -> Result<MediaStatus> {
        let session = self.media_session_id()?;
        let id = self.device.tracker.next_id();
        let message =
            media::play(&self.device.sender_id, &self.app.transport_id, id, session);
        self.media_request(id, message)
    }

    pub fn pause(&self) -> Result<MediaStatus> {
        let session = self.media_session_id()?;
        let id = self.device.tracker.next_id();
        let message =
            media::pause(&self.device.sender_id, &self.app.transport_id, id, session);
        self.media_request(id, message)
    }

    /// Stop playback of the current media session. The app keeps running;
    /// use [`AppSession::stop`] to stop the app itself.
    pub fn stop_media(&self) -> Result<MediaStatus> {
        let session = self.media_session_id()?;
        let id = self.device.tracker.next_id();
        let message =
            media::stop(&self.device.sender_id, &self.app.transport_id, id, session);
        let status = self.media_request(id, message);
        self.device.media_session.invalidate();
        status
    }

    pub fn seek(&self, seconds: f64) -> Result<MediaStatus> {
        let session = self.media_session_id()?;
        let id = self.device.tracker.next_id();
        let message = media::seek(
            &self.device.sender_id,
            &self.app.transport_id,
            id,
            session,
            seconds,
        );
        self.media_request(id, message)
    }

    /// Latest media status via `GET_STATUS` on the media namespace.
    pub fn media_status(&self) -> Result<MediaStatus> {
        let id = self.device.tracker.next_id();
        let message = media::status(
            &self.device.sender_id,
            &self.app.transport_id,
            id,
            self.device.media_session.current(),
        );
        self.media_request(id, message)
    }

    /// Jump to the next queue item.
    pub fn next(&self) -> Result<MediaStatus> {
        self.queue_jump(1)
    }

    /// Jump to the previous queue item.
    pub fn previous(&self) -> Result<MediaStatus> {
        self.queue_jump(-1)
    }

    fn queue_jump(&self, jump: i64) -> Result<MediaStatus> {
        let session = self.media_session_id()?;
        let id = self.device.tracker.next_id();
        let message = media::queue_update(
            &self.device.sender_id,
            &self.app.transport_id,
            id,
            session,
            Some(jump),
            None,
        );
        self.media_request(id, message)
    }

    pub fn set_repeat_mode(&self, mode: RepeatMode) -> Result<MediaStatus> {
        let session = self.media_session_id()?;
        let id = self.device.tracker.next_id();
        let message = media::queue_update(
            &self.device.sender_id,
            &self.app.transport_id,
            id,
            session,
            None,
            Some(mode),
        );
        self.media_request(id, message)
    }

    /// Append items to the queue.
    pub fn queue_insert(&self, items: Vec<QueueItem>) -> Result<MediaStatus> {
        let session = self.media_session_id()?;
        let id = self.device.tracker.next_id();
        let message = media::queue_insert(
            &self.device.sender_id,
            &self.app.transport_id,
            id,
            session,
            items,
        );
        self.media_request(id, message)
    }

    /// Remove items from the queue by item id.
    pub fn queue_remove(&self, item_ids: Vec<i64>) -> Result<MediaStatus> {
        let session = self.media_session_id()?;
        let id = self.device.tracker.next_id();
        let message = media::queue_remove(
            &self.device.sender_id,
            &self.app.transport_id,
            id,
            session,
            item_ids,
        );
        self.media_request(id, message)
    }

    /// List the queue: item ids first, then the items themselves.
    pub fn queue_items(&self) -> Result<Vec<QueueItem>> {
        let session = self.media_session_id()?;
        let id = self.device.tracker.next_id();
        let message = media::queue_get_item_ids(
            &self.device.sender_id,
            &self.app.transport_id,
            id,
            session,
        );
        let payload = self.device.send_request(id, message)?;
        let item_ids = media::parse_item_ids_response(&payload)?;
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let id = self.device.tracker.next_id();
        let message = media::queue_get_items(
            &self.device.sender_id,
            &self.app.transport_id,
            id,
            session,
            item_ids,
        );
        let payload = self.device.send_request(id, message)?;
        media::parse_items_response(&payload)
    }

    fn media_session_id(&self) -> Result<i64> {
        self.device
            .media_session
            .current()
            .ok_or_else(|| Error::State("no media session established".to_owned()))
    }

    fn media_request(&self, id: i64, message: CastMessage) -> Result<MediaStatus> {
        let payload = self.device.send_request(id, message)?;
        let status = media::parse_status_response(&payload)?;
        self.device.media_session.register(status.media_session_id);
        Ok(status)
    }
}

fn remaining(deadline: Instant) -> Duration {
    deadline.saturating_duration_since(Instant::now())
}

fn abort_connect(
    runtime: Runtime,
    teardown: &Teardown,
    local_close: &AtomicBool,
    writer_done: Option<&Receiver<()>>,
) {
    local_close.store(true, Ordering::SeqCst);
    teardown.begin(None, Vec::new());
    if let Some(done) = writer_done {
        let _ = done.recv_timeout(WORKER_JOIN_TIMEOUT);
    }
    let _ = runtime.shutdown_now().wait();
}
