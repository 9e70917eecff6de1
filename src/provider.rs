use std::error;
use std::fmt;
use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, RwLock};

/// Identity of a cast device as resolved by the browser.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeviceInfo {
    /// DNS-SD service instance name. Stable across address changes.
    pub id: String,
    /// Friendly name from the `fn` TXT attribute, when the device
    /// advertises one.
    pub name: Option<String>,
    /// Socket address the device listens on.
    pub addr: SocketAddr,
}

/// Terminal connection events delivered to connection listeners. Each fires
/// at most once per session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConnectionEvent {
    /// The device stopped answering `PING`s.
    Dead,
    /// The socket failed or the device closed the virtual connection.
    RemoteClosed,
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Socket-level failure. The caller may `connect` again.
    Io(io::Error),
    /// An operation was issued while the channel is not opened.
    NotConnected,
    /// The device-auth handshake failed. Fatal for the session.
    Auth(String),
    /// No correlated response arrived in time. Local to one call.
    Timeout,
    /// The response type is in the namespace's error set. Local to one
    /// call.
    Protocol(String),
    /// The operation is not valid in the current session state.
    State(String),
    /// The response could not be decoded into the expected shape. Local to
    /// one call.
    Parse(String),
    /// The channel was torn down while a response was pending.
    ConnectionClosed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Io(ref err) => write!(f, "I/O error: {}", err),
            Error::NotConnected => write!(f, "Connection is not opened"),
            Error::Auth(ref reason) => write!(f, "authentication failed: {}", reason),
            Error::Timeout => write!(f, "request timed out"),
            Error::Protocol(ref reason) => write!(f, "protocol error: {}", reason),
            Error::State(ref reason) => write!(f, "{}", reason),
            Error::Parse(ref reason) => write!(f, "malformed payload: {}", reason),
            Error::ConnectionClosed => {
                write!(f, "connection closed while a response was pending")
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Io(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// A snapshot-on-iterate listener list. Registration is visible to the next
/// dispatch cycle; an in-flight iteration is never disturbed.
#[derive(Debug)]
pub(crate) struct Listeners<T: ?Sized> {
    inner: RwLock<Vec<Arc<T>>>,
}

impl<T: ?Sized> Listeners<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    pub fn add(&self, listener: Arc<T>) {
        self.inner
            .write()
            .expect("poisoned listener list")
            .push(listener);
    }

    pub fn snapshot(&self) -> Vec<Arc<T>> {
        self.inner.read().expect("poisoned listener list").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn not_connected_names_the_closed_connection() {
        let message = Error::NotConnected.to_string();
        assert!(message.contains("Connection is not opened"), "{}", message);
    }

    #[test]
    fn protocol_errors_carry_the_response_type() {
        let message = Error::Protocol("LAUNCH_ERROR".to_owned()).to_string();
        assert!(message.contains("LAUNCH_ERROR"), "{}", message);
    }
}
