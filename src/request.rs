use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use serde_derive::Deserialize;

use crate::proto::{CastMessage, CastMessage_PayloadType};
use crate::provider::{Error, Result};

/// How the dispatcher classified an inbound message.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Handling {
    /// Matched a pending request and was delivered to its waiter.
    /// Namespace listeners are skipped.
    Correlated,
    /// Carried a request id with no pending entry, e.g. a reply that
    /// arrived after its timeout. Delivered to namespace listeners.
    Uncorrelated,
    /// No request id. Delivered to namespace listeners.
    Unsolicited,
}

/// The request-id slot shared by every STRING payload. `requestId` of 0 or
/// absent means the message is not part of a request/response exchange.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct Header {
    pub request_id: i64,
}

type BinaryPredicate = Box<dyn Fn(&CastMessage) -> bool + Send>;

/// Correlates inbound messages with in-flight requests. STRING requests are
/// matched on the `requestId` the tracker issued; a single BINARY exchange
/// (the auth handshake) is matched by a caller-supplied predicate.
pub(crate) struct Tracker {
    counter: AtomicI64,
    pending: Mutex<HashMap<i64, Sender<CastMessage>>>,
    binary: Mutex<Option<(BinaryPredicate, Sender<CastMessage>)>>,
}

impl Tracker {
    pub fn new() -> Self {
        Self {
            counter: AtomicI64::new(0),
            pending: Mutex::new(HashMap::new()),
            binary: Mutex::new(None),
        }
    }

    /// Next request id. Strictly increasing for the life of the tracker,
    /// starting at 1; 0 is reserved for "no id".
    pub fn next_id(&self) -> i64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Park a waiter for `id`. Must be called before the request is
    /// transmitted so the response cannot race the registration.
    pub fn register(&self, id: i64) -> Receiver<CastMessage> {
        let (tx, rx) = bounded(1);
        self.pending
            .lock()
            .expect("poisoned pending table")
            .insert(id, tx);
        rx
    }

    /// Park a waiter for the next BINARY message accepted by `predicate`.
    /// At most one such exchange is in flight at a time.
    pub fn register_binary<F>(&self, predicate: F) -> Receiver<CastMessage>
    where
        F: Fn(&CastMessage) -> bool + Send + 'static,
    {
        let (tx, rx) = bounded(1);
        *self.binary.lock().expect("poisoned binary slot") = Some((Box::new(predicate), tx));
        rx
    }

    /// Drop the pending entry for `id`. A late reply becomes uncorrelated.
    pub fn abandon(&self, id: i64) {
        self.pending
            .lock()
            .expect("poisoned pending table")
            .remove(&id);
    }

    /// Block until the waiter registered for `id` is handed a response.
    /// Exactly one of response, timeout, or channel-close is observed.
    pub fn await_response(
        &self,
        id: i64,
        rx: &Receiver<CastMessage>,
        timeout: Duration,
    ) -> Result<CastMessage> {
        match rx.recv_timeout(timeout) {
            Ok(message) => Ok(message),
            Err(RecvTimeoutError::Timeout) => {
                self.abandon(id);
                Err(Error::Timeout)
            }
            Err(RecvTimeoutError::Disconnected) => Err(Error::ConnectionClosed),
        }
    }

    /// Offer an inbound message for correlation. Called by the dispatcher
    /// for every received envelope, in wire order.
    pub fn offer(&self, message: &CastMessage) -> Handling {
        if message.get_payload_type() == CastMessage_PayloadType::BINARY {
            let mut slot = self.binary.lock().expect("poisoned binary slot");
            if let Some((predicate, tx)) = slot.take() {
                if predicate(message) {
                    let _ = tx.send(message.clone());
                    return Handling::Correlated;
                }
                *slot = Some((predicate, tx));
            }
            return Handling::Unsolicited;
        }

        let header: Header = match serde_json::from_str(message.get_payload_utf8()) {
            Ok(header) => header,
            Err(_) => return Handling::Unsolicited,
        };
        if header.request_id <= 0 {
            return Handling::Unsolicited;
        }
        match self
            .pending
            .lock()
            .expect("poisoned pending table")
            .remove(&header.request_id)
        {
            Some(tx) => {
                let _ = tx.send(message.clone());
                Handling::Correlated
            }
            None => Handling::Uncorrelated,
        }
    }

    /// Fail every in-flight request. Waiters observe the drop as a channel
    /// close.
    pub fn fail_pending(&self) {
        self.pending.lock().expect("poisoned pending table").clear();
        self.binary.lock().expect("poisoned binary slot").take();
    }
}

impl std::fmt::Debug for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Tracker")
            .field("counter", &self.counter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Handling, Tracker};
    use crate::provider::Error;
    use crate::proto::{self, CastMessage_PayloadType};

    fn response(request_id: i64) -> proto::CastMessage {
        let mut message = proto::CastMessage::new();
        message.set_namespace("urn:x-cast:com.google.cast.receiver".to_owned());
        message.set_payload_type(CastMessage_PayloadType::STRING);
        message.set_payload_utf8(format!(
            r#"{{"type":"RECEIVER_STATUS","requestId":{}}}"#,
            request_id
        ));
        message
    }

    #[test]
    fn request_ids_are_strictly_monotonic_and_positive() {
        let tracker = Tracker::new();
        let mut previous = 0;
        for _ in 0..100 {
            let id = tracker.next_id();
            assert!(id > previous);
            previous = id;
        }
    }

    #[test]
    fn matching_response_is_delivered_to_the_waiter_once() {
        let tracker = Tracker::new();
        let id = tracker.next_id();
        let rx = tracker.register(id);

        assert_eq!(Handling::Correlated, tracker.offer(&response(id)));
        assert!(tracker
            .await_response(id, &rx, Duration::from_millis(10))
            .is_ok());

        // The entry is consumed: a duplicate reply is uncorrelated.
        assert_eq!(Handling::Uncorrelated, tracker.offer(&response(id)));
    }

    #[test]
    fn late_response_after_timeout_is_uncorrelated() {
        let tracker = Tracker::new();
        let id = tracker.next_id();
        let rx = tracker.register(id);

        match tracker.await_response(id, &rx, Duration::from_millis(10)) {
            Err(Error::Timeout) => {}
            other => panic!("expected timeout, got {:?}", other.map(|_| ())),
        }
        assert_eq!(Handling::Uncorrelated, tracker.offer(&response(id)));
    }

    #[test]
    fn unknown_request_id_is_uncorrelated() {
        let tracker = Tracker::new();
        assert_eq!(Handling::Uncorrelated, tracker.offer(&response(42)));
    }

    #[test]
    fn broadcasts_are_unsolicited() {
        let tracker = Tracker::new();
        let mut message = response(0);
        message.set_payload_utf8(r#"{"type":"RECEIVER_STATUS"}"#.to_owned());
        assert_eq!(Handling::Unsolicited, tracker.offer(&message));
    }

    #[test]
    fn failing_pending_disconnects_waiters() {
        let tracker = Tracker::new();
        let id = tracker.next_id();
        let rx = tracker.register(id);
        tracker.fail_pending();
        match tracker.await_response(id, &rx, Duration::from_millis(10)) {
            Err(Error::ConnectionClosed) => {}
            other => panic!("expected closed, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn binary_exchange_matches_on_the_predicate() {
        let tracker = Tracker::new();
        let rx = tracker.register_binary(|message: &proto::CastMessage| {
            message.get_namespace() == "urn:x-cast:com.google.cast.tp.deviceauth"
        });

        let mut wrong = proto::CastMessage::new();
        wrong.set_namespace("urn:x-cast:com.google.cast.tp.other".to_owned());
        wrong.set_payload_type(CastMessage_PayloadType::BINARY);
        assert_eq!(Handling::Unsolicited, tracker.offer(&wrong));

        let mut reply = proto::CastMessage::new();
        reply.set_namespace("urn:x-cast:com.google.cast.tp.deviceauth".to_owned());
        reply.set_payload_type(CastMessage_PayloadType::BINARY);
        assert_eq!(Handling::Correlated, tracker.offer(&reply));
        assert!(rx.recv_timeout(Duration::from_millis(10)).is_ok());
    }
}
