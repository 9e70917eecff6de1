use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

use crate::proto::CastMessage;
use crate::provider::{ConnectionEvent, Listeners};
use crate::request::Tracker;
use crate::shutdown::ShutdownHandle;

/// Externally visible channel lifecycle. There is no half-open state: the
/// channel is connecting, opened (authenticated and ponged), or closed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum State {
    Closed,
    Connecting,
    Opened,
}

/// Connection state under a lock, with a condvar for the blocking
/// `connect(timeout)` wait.
#[derive(Debug)]
pub(crate) struct Lifecycle {
    state: Mutex<State>,
    opened: Condvar,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::Closed),
            opened: Condvar::new(),
        }
    }

    pub fn get(&self) -> State {
        *self.state.lock().expect("poisoned state lock")
    }

    pub fn set(&self, next: State) {
        let mut state = self.state.lock().expect("poisoned state lock");
        *state = next;
        self.opened.notify_all();
    }

    pub fn is_opened(&self) -> bool {
        self.get() == State::Opened
    }

    /// Flip `Connecting` to `Opened`. Returns whether the transition
    /// happened; a `PONG` on an already-opened channel is a no-op here.
    pub fn open_if_connecting(&self) -> bool {
        let mut state = self.state.lock().expect("poisoned state lock");
        if *state == State::Connecting {
            *state = State::Opened;
            self.opened.notify_all();
            true
        } else {
            false
        }
    }

    /// Block until the state leaves `Connecting` or the deadline passes.
    /// Returns the last observed state.
    pub fn wait_opened(&self, deadline: Instant) -> State {
        let mut state = self.state.lock().expect("poisoned state lock");
        while *state == State::Connecting {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            let (next, _) = self
                .opened
                .wait_timeout(state, deadline - now)
                .expect("poisoned state lock");
            state = next;
        }
        *state
    }
}

/// Bookkeeping for virtual sub-sessions. `CONNECT` is sent to a transport at
/// most once; the matching `CLOSE` exactly once, on relinquish or teardown.
#[derive(Debug, Default)]
pub(crate) struct Sessions {
    transports: Mutex<HashSet<String>>,
}

impl Sessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a join. True when the transport was not yet joined and the
    /// caller must send `CONNECT`.
    pub fn join(&self, transport: &str) -> bool {
        self.transports
            .lock()
            .expect("poisoned session set")
            .insert(transport.to_owned())
    }

    /// Record a leave. True when the transport was joined and the caller
    /// must send `CLOSE`.
    pub fn leave(&self, transport: &str) -> bool {
        self.transports
            .lock()
            .expect("poisoned session set")
            .remove(transport)
    }

    /// Take every joined transport, e.g. to close them all at teardown.
    pub fn drain(&self) -> Vec<String> {
        self.transports
            .lock()
            .expect("poisoned session set")
            .drain()
            .collect()
    }
}

/// Last time the device answered a `PING`. The keepalive worker declares the
/// connection dead once the silence exceeds the pong timeout.
#[derive(Debug)]
pub(crate) struct Heartbeat {
    last_pong: Mutex<Instant>,
}

impl Heartbeat {
    pub fn new() -> Self {
        Self {
            last_pong: Mutex::new(Instant::now()),
        }
    }

    pub fn reset(&self) {
        *self.last_pong.lock().expect("poisoned heartbeat clock") = Instant::now();
    }

    pub fn pong(&self) {
        self.reset();
    }

    pub fn silent_for(&self) -> Duration {
        self.last_pong
            .lock()
            .expect("poisoned heartbeat clock")
            .elapsed()
    }
}

/// Media session id assigned by the device on `LOAD`, also observed in
/// unsolicited `MEDIA_STATUS` broadcasts. Required by every media control
/// request.
#[derive(Debug, Default)]
pub(crate) struct MediaSession {
    id: Mutex<Option<i64>>,
}

impl MediaSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a media session id. True when the id changed.
    pub fn register(&self, id: i64) -> bool {
        let mut current = self.id.lock().expect("poisoned media session");
        if *current == Some(id) {
            false
        } else {
            *current = Some(id);
            true
        }
    }

    pub fn invalidate(&self) {
        self.id.lock().expect("poisoned media session").take();
    }

    pub fn current(&self) -> Option<i64> {
        *self.id.lock().expect("poisoned media session")
    }
}

/// Once-only teardown of a connected channel. Every failure path funnels
/// here so pending waiters are failed, sub-sessions forgotten, workers
/// stopped, and connection listeners notified exactly once per session.
pub(crate) struct Teardown {
    fired: AtomicBool,
    handle: Mutex<Option<ShutdownHandle>>,
    lifecycle: Arc<Lifecycle>,
    tracker: Arc<Tracker>,
    sessions: Arc<Sessions>,
    listeners: Arc<Listeners<dyn Fn(&ConnectionEvent) + Send + Sync>>,
}

impl Teardown {
    pub fn new(
        handle: ShutdownHandle,
        lifecycle: Arc<Lifecycle>,
        tracker: Arc<Tracker>,
        sessions: Arc<Sessions>,
        listeners: Arc<Listeners<dyn Fn(&ConnectionEvent) + Send + Sync>>,
    ) -> Self {
        Self {
            fired: AtomicBool::new(false),
            handle: Mutex::new(Some(handle)),
            lifecycle,
            tracker,
            sessions,
            listeners,
        }
    }

    /// Tear the channel down. `farewell` rides the shutdown signal to the
    /// writer, which puts it on the wire after the queue drains. `event` is
    /// `None` for a caller-initiated close, which does not notify
    /// connection listeners. Subsequent calls are no-ops.
    pub fn begin(&self, event: Option<ConnectionEvent>, farewell: Vec<CastMessage>) {
        if self.fired.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(handle) = self.handle.lock().expect("poisoned shutdown handle").take() {
            handle.shut_down(farewell);
        }
        self.sessions.drain();
        self.tracker.fail_pending();
        self.lifecycle.set(State::Closed);
        if let Some(event) = event {
            for listener in self.listeners.snapshot() {
                listener(&event);
            }
        }
    }
}

impl std::fmt::Debug for Teardown {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Teardown")
            .field("fired", &self.fired)
            .finish()
    }
}
