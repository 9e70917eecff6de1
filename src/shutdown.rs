//! Channel shutdown protocol.
//!
//! Tearing a channel down must not race the wire: whatever `CLOSE`
//! envelopes the session still owes the device have to go out after
//! everything already queued, and the workers have to stop on their own
//! poll cycle rather than being killed mid-frame. The shutdown signal is a
//! oneshot whose payload is that farewell batch: the session teardown fires
//! it through the [`ShutdownHandle`], the writer observes it through its
//! [`Outbox`], and the keepalive worker polls the same [`Shutdown`] signal
//! to know when to stop pinging.

use std::mem;
use std::vec;

use futures::future::Shared;
use futures::prelude::*;
use futures::sync::mpsc::UnboundedReceiver;
use futures::sync::oneshot;

use crate::proto::CastMessage;

/// Create the paired shutdown handle and signal for one connection.
pub(crate) fn channel_shutdown() -> (ShutdownHandle, Shutdown) {
    let (handle, signal) = oneshot::channel();
    (ShutdownHandle(Some(handle)), Shutdown(signal.shared()))
}

/// Owner side of the shutdown protocol, held by the session teardown.
/// Dropping the handle without an explicit shutdown stops the workers with
/// an empty farewell.
#[derive(Debug)]
pub(crate) struct ShutdownHandle(Option<oneshot::Sender<Vec<CastMessage>>>);

impl ShutdownHandle {
    /// Stop the workers. The writer puts `farewell` on the wire once the
    /// outbound queue has drained.
    pub fn shut_down(mut self, farewell: Vec<CastMessage>) {
        if let Some(handle) = self.0.take() {
            let _ = handle.send(farewell);
        }
    }
}

impl Drop for ShutdownHandle {
    fn drop(&mut self) {
        if let Some(handle) = self.0.take() {
            let _ = handle.send(Vec::new());
        }
    }
}

/// Worker side of the shutdown protocol, cloned into every worker that has
/// to wind down when the session tears down.
#[derive(Clone, Debug)]
pub(crate) struct Shutdown(Shared<oneshot::Receiver<Vec<CastMessage>>>);

impl Shutdown {
    /// Poll for shutdown, registering the current task for wakeup. For
    /// workers that carry no farewell of their own.
    pub fn triggered(&mut self) -> bool {
        self.poll_farewell().is_some()
    }

    /// Poll for shutdown and take a copy of the farewell envelopes.
    pub fn poll_farewell(&mut self) -> Option<Vec<CastMessage>> {
        match self.0.poll() {
            Ok(Async::NotReady) => None,
            Ok(Async::Ready(farewell)) => Some((*farewell).clone()),
            // The handle never cancels without sending, but a lost handle
            // still has to stop the workers.
            Err(_) => Some(Vec::new()),
        }
    }
}

enum OutboxState {
    /// Shutdown not observed yet; queued envelopes pass straight through.
    Open,
    /// Shutdown observed; the queue refuses new sends and is draining.
    Draining(Vec<CastMessage>),
    /// Queue empty; the farewell is going out.
    Farewell(vec::IntoIter<CastMessage>),
}

/// The writer's view of the outbound queue. Yields envelopes in enqueue
/// order until the [`ShutdownHandle`] fires, then drains what was already
/// queued, then yields the farewell envelopes and ends the stream. The
/// final `CLOSE` a session owes its device travels this path.
pub(crate) struct Outbox {
    queue: UnboundedReceiver<CastMessage>,
    shutdown: Shutdown,
    state: OutboxState,
}

impl Outbox {
    pub fn new(queue: UnboundedReceiver<CastMessage>, shutdown: Shutdown) -> Self {
        Self {
            queue,
            shutdown,
            state: OutboxState::Open,
        }
    }
}

impl Stream for Outbox {
    type Item = CastMessage;
    type Error = ();

    fn poll(&mut self) -> Poll<Option<Self::Item>, Self::Error> {
        loop {
            match self.state {
                OutboxState::Open => {
                    if let Some(farewell) = self.shutdown.poll_farewell() {
                        self.queue.close();
                        self.state = OutboxState::Draining(farewell);
                        continue;
                    }
                    return self.queue.poll();
                }
                OutboxState::Draining(ref mut farewell) => match self.queue.poll()? {
                    Async::Ready(Some(message)) => return Ok(Async::Ready(Some(message))),
                    Async::Ready(None) => {
                        let farewell = mem::replace(farewell, Vec::new());
                        self.state = OutboxState::Farewell(farewell.into_iter());
                    }
                    Async::NotReady => return Ok(Async::NotReady),
                },
                OutboxState::Farewell(ref mut farewell) => {
                    return Ok(Async::Ready(farewell.next()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use futures::sync::mpsc;
    use futures::Stream;

    use super::{channel_shutdown, Outbox};
    use crate::channel::connection;

    /// Run the outbox to completion and return the destination of every
    /// envelope it put on the wire, in order.
    fn destinations(outbox: Outbox) -> Vec<String> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let task = outbox.for_each(move |message| {
            sink.lock().unwrap().push(message.get_destination_id().to_owned());
            Ok(())
        });
        tokio::run(task);
        Arc::try_unwrap(seen).unwrap().into_inner().unwrap()
    }

    #[test]
    fn farewell_goes_out_after_the_queued_envelopes() {
        let (handle, shutdown) = channel_shutdown();
        let (sender, queue) = mpsc::unbounded();
        sender
            .unbounded_send(connection::connect("sender-0", "transport-1"))
            .unwrap();
        sender
            .unbounded_send(connection::connect("sender-0", "transport-2"))
            .unwrap();
        handle.shut_down(vec![connection::close("sender-0", "receiver-0")]);

        let yielded = destinations(Outbox::new(queue, shutdown));
        assert_eq!(vec!["transport-1", "transport-2", "receiver-0"], yielded);
    }

    #[test]
    fn a_dropped_handle_stops_the_writer_without_a_farewell() {
        let (handle, shutdown) = channel_shutdown();
        let (sender, queue) = mpsc::unbounded();
        sender
            .unbounded_send(connection::close("sender-0", "transport-1"))
            .unwrap();
        drop(handle);

        let yielded = destinations(Outbox::new(queue, shutdown));
        assert_eq!(vec!["transport-1"], yielded);
    }

    #[test]
    fn the_queue_refuses_sends_once_shut_down() {
        let (handle, shutdown) = channel_shutdown();
        let (sender, queue) = mpsc::unbounded();
        handle.shut_down(Vec::new());

        assert!(destinations(Outbox::new(queue, shutdown)).is_empty());
        assert!(sender
            .unbounded_send(connection::close("sender-0", "receiver-0"))
            .is_err());
    }
}
