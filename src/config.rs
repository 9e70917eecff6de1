use std::time::Duration;

/// Google Chromecast multicast service identifier.
const SERVICE_NAME: &str = "_googlecast._tcp.local";
/// Key in DNS TXT record for Chromecast "friendly name".
const FRIENDLY_NAME_KEY: &str = "fn";
/// Destination of receiver-level traffic.
const DEFAULT_RECEIVER_ID: &str = "receiver-0";
/// Prefix of the envelope source id for this client.
const DEFAULT_SENDER_NAME: &str = "sender-0";

/// Tunables for discovery and the device channel. `Default` matches the
/// deployed protocol; tests dial the timings down and switch TLS off.
#[derive(Clone, Debug)]
pub struct Config {
    /// DNS-SD registration type browsed for cast devices.
    pub registration_type: String,
    /// TXT attribute carrying the device friendly name.
    pub friendly_name_key: String,
    /// Dial the device with TLS. Plaintext is supported for test doubles
    /// only; real devices always speak TLS.
    pub use_tls: bool,
    /// Prefix of the envelope source id. A process-unique suffix is
    /// appended per device controller.
    pub sender_name: String,
    /// Default destination for receiver-level traffic.
    pub default_receiver_id: String,
    /// How long a request waits for its correlated response.
    pub request_timeout: Duration,
    /// Cadence of outbound `PING`s once the virtual connection is up.
    pub ping_interval: Duration,
    /// Missed `PONG`s tolerated before the connection is declared dead.
    pub pong_missed: u32,
}

impl Config {
    /// Silence threshold for the heartbeat: `ping_interval * pong_missed`.
    pub fn pong_timeout(&self) -> Duration {
        self.ping_interval * self.pong_missed
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registration_type: SERVICE_NAME.to_owned(),
            friendly_name_key: FRIENDLY_NAME_KEY.to_owned(),
            use_tls: true,
            sender_name: DEFAULT_SENDER_NAME.to_owned(),
            default_receiver_id: DEFAULT_RECEIVER_ID.to_owned(),
            request_timeout: Duration::from_secs(5),
            ping_interval: Duration::from_secs(5),
            pong_missed: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::Config;

    #[test]
    fn defaults_match_the_deployed_protocol() {
        let config = Config::default();
        assert_eq!("_googlecast._tcp.local", config.registration_type);
        assert_eq!("fn", config.friendly_name_key);
        assert!(config.use_tls);
        assert_eq!("sender-0", config.sender_name);
        assert_eq!("receiver-0", config.default_receiver_id);
        assert_eq!(Duration::from_secs(5), config.request_timeout);
        assert_eq!(Duration::from_secs(5), config.ping_interval);
        assert_eq!(Duration::from_secs(15), config.pong_timeout());
    }
}
