use std::io::{self, Read, Write};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::prelude::*;
use futures::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use futures::{future, Future, Stream};
use tokio::net::TcpStream;
use tokio::timer::Interval;
use tokio_tls::{TlsConnector, TlsStream};

use crate::channel::{connection, heartbeat, Responder};
use crate::proto::CastMessage;
use crate::provider::ConnectionEvent;
use crate::session::{self, Teardown};
use crate::shutdown::Shutdown;

/// What the reader and writer feed the dispatcher. The dispatcher is the
/// only consumer, so listeners observe everything in wire order.
#[derive(Debug)]
pub(crate) enum Event {
    Message(CastMessage),
    /// The stream ended: cleanly (`None`) or with a socket error.
    Closed(Option<io::Error>),
}

/// The device socket. Plaintext is supported for test doubles only.
#[derive(Debug)]
pub(crate) enum Socket {
    Tls(TlsStream<TcpStream>),
    Plain(TcpStream),
}

impl Read for Socket {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Socket::Tls(stream) => stream.read(buf),
            Socket::Plain(stream) => stream.read(buf),
        }
    }
}

impl Write for Socket {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Socket::Tls(stream) => stream.write(buf),
            Socket::Plain(stream) => stream.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Socket::Tls(stream) => stream.flush(),
            Socket::Plain(stream) => stream.flush(),
        }
    }
}

impl tokio::io::AsyncRead for Socket {}

impl tokio::io::AsyncWrite for Socket {
    fn shutdown(&mut self) -> Poll<(), io::Error> {
        match self {
            Socket::Tls(stream) => tokio::io::AsyncWrite::shutdown(stream),
            Socket::Plain(stream) => tokio::io::AsyncWrite::shutdown(stream),
        }
    }
}

/// Asynchronously establish the device connection. The device presents a
/// self-signed certificate that cannot chain to a standard root, so the
/// TLS verifier accepts it unvalidated.
pub(crate) fn connect_socket(
    addr: SocketAddr,
    use_tls: bool,
) -> impl Future<Item = Socket, Error = io::Error> {
    let connect = TcpStream::connect(&addr);
    if !use_tls {
        return future::Either::A(connect.map(Socket::Plain));
    }
    let connect = connect.and_then(move |socket| {
        info!("establishing TLS connection to {:?}", addr);
        let connector = native_tls::TlsConnector::builder()
            .danger_accept_invalid_hostnames(true)
            .danger_accept_invalid_certs(true)
            .build()
            .map(TlsConnector::from)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err));
        future::result(connector).and_then(move |connector| {
            connector
                .connect(&addr.ip().to_string(), socket)
                .map(Socket::Tls)
                .map_err(|err| io::Error::new(io::ErrorKind::Other, err))
        })
    });
    future::Either::B(connect)
}

/// Reader: decode frames off the socket and hand them to the dispatcher.
/// EOF and socket errors both end in a single `Closed` sentinel.
pub(crate) fn read(
    source: impl Stream<Item = CastMessage, Error = io::Error>,
    events: UnboundedSender<Event>,
) -> impl Future<Item = (), Error = ()> {
    let done = events.clone();
    source
        .for_each(move |message| {
            events
                .unbounded_send(Event::Message(message))
                .map_err(|_| io::Error::new(io::ErrorKind::Other, "dispatcher is gone"))
        })
        .then(move |result| {
            let _ = done.unbounded_send(Event::Closed(result.err()));
            Ok(())
        })
}

/// Dispatcher: the single consumer of the event queue. A `Closed` sentinel
/// after a caller-initiated close is ordinary shutdown; anything else is a
/// dead socket and tears the session down.
pub(crate) fn dispatch(
    events: UnboundedReceiver<Event>,
    responder: Responder,
    teardown: Arc<Teardown>,
    local_close: Arc<AtomicBool>,
) -> impl Future<Item = (), Error = ()> {
    events.for_each(move |event| {
        match event {
            Event::Message(message) => responder.handle(&message),
            Event::Closed(err) => {
                if local_close.load(Ordering::SeqCst) {
                    debug!("socket closed after local shutdown");
                } else {
                    match err {
                        Some(err) => warn!("socket error: {}", err),
                        None => warn!("device closed the stream"),
                    }
                    // The socket is gone; there is no farewell to write.
                    teardown.begin(Some(ConnectionEvent::RemoteClosed), Vec::new());
                }
            }
        }
        Ok(())
    })
}

/// Writer: forward the outbound queue to the socket, in enqueue order.
/// Draining on shutdown lets final `CLOSE` messages reach the wire; `done`
/// fires once everything queued has been written.
pub(crate) fn send(
    sink: impl Sink<SinkItem = CastMessage, SinkError = io::Error>,
    commands: impl Stream<Item = CastMessage, Error = ()>,
    events: UnboundedSender<Event>,
    done: crossbeam_channel::Sender<()>,
) -> impl Future<Item = (), Error = ()> {
    commands
        .forward(sink.sink_map_err(move |err| {
            let _ = events.unbounded_send(Event::Closed(Some(err)));
        }))
        .then(move |_| {
            let _ = done.try_send(());
            Ok(())
        })
}

/// Keepalive worker: `PING` on a fixed cadence, and declare the connection
/// dead once the device has been silent past the pong timeout. On death the
/// farewell `CLOSE` rides the shutdown signal, so the drained writer still
/// delivers it; on an ordinary shutdown the worker just stops ticking.
pub(crate) struct Keepalive {
    interval: Interval,
    shutdown: Shutdown,
    pong_timeout: Duration,
    sender_id: String,
    receiver_id: String,
    command: UnboundedSender<CastMessage>,
    clock: Arc<session::Heartbeat>,
    teardown: Arc<Teardown>,
}

impl Keepalive {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        shutdown: Shutdown,
        interval: Duration,
        pong_timeout: Duration,
        sender_id: String,
        receiver_id: String,
        command: UnboundedSender<CastMessage>,
        clock: Arc<session::Heartbeat>,
        teardown: Arc<Teardown>,
    ) -> Self {
        Self {
            interval: Interval::new(Instant::now(), interval),
            shutdown,
            pong_timeout,
            sender_id,
            receiver_id,
            command,
            clock,
            teardown,
        }
    }
}

impl Future for Keepalive {
    type Item = ();
    type Error = ();

    fn poll(&mut self) -> Poll<(), ()> {
        if self.shutdown.triggered() {
            return Ok(Async::Ready(()));
        }
        loop {
            match self.interval.poll() {
                Ok(Async::NotReady) => return Ok(Async::NotReady),
                Ok(Async::Ready(None)) => return Ok(Async::Ready(())),
                Ok(Async::Ready(Some(_))) => {
                    let silent = self.clock.silent_for();
                    if silent > self.pong_timeout {
                        warn!(
                            "no PONG in {:?} (limit {:?}), closing the connection",
                            silent, self.pong_timeout
                        );
                        let farewell =
                            vec![connection::close(&self.sender_id, &self.receiver_id)];
                        self.teardown.begin(Some(ConnectionEvent::Dead), farewell);
                        return Ok(Async::Ready(()));
                    }
                    let ping = heartbeat::ping(&self.sender_id, &self.receiver_id);
                    if self.command.unbounded_send(ping).is_err() {
                        return Ok(Async::Ready(()));
                    }
                }
                Err(err) => {
                    warn!("heartbeat timer error: {:?}", err);
                    return Ok(Async::Ready(()));
                }
            }
        }
    }
}
