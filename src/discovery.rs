//! Device browser. Resolves `_googlecast._tcp` DNS-SD services into
//! [`DeviceInfo`] tuples and hands back a [`Device`] controller per device
//! found.
//!
//! Each TXT record entry is a `key=value` pair of device metadata. The
//! relevant keys are `fn` (friendly name) and `md` (model name).

use std::collections::{HashMap, HashSet};
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use mdns::RecordKind;
use nom::rest;
use nom::types::CompleteStr;

use crate::config::Config;
use crate::provider::DeviceInfo;
use crate::Device;

// A TXT entry is a short alphanumeric key, `=`, and an arbitrary value.
// The value keeps any further `=` signs; friendly names often contain them.
named!(txt_entry<CompleteStr, (CompleteStr, CompleteStr)>,
    separated_pair!(
        take_while1!(call!(|c: char| c.is_ascii_alphanumeric())),
        char!('='),
        call!(rest)
    )
);

/// Parse one `key=value` TXT entry. Entries without a delimiter or with an
/// empty or non-alphanumeric key are rejected.
fn txt_attribute(entry: &str) -> Option<(String, String)> {
    match txt_entry(CompleteStr(entry)) {
        Ok((_, (key, value))) => Some((key.0.to_owned(), value.0.to_owned())),
        Err(_) => None,
    }
}

/// Collect the `key=value` entries of a TXT record into a `HashMap`.
/// Entries that do not parse are skipped.
pub fn dns_txt<T: AsRef<str>>(records: &[T]) -> HashMap<String, String> {
    records
        .iter()
        .filter_map(|txt| txt_attribute(txt.as_ref()))
        .collect()
}

/// One resolved DNS-SD service, accumulated from the records of a single
/// mdns response.
#[derive(Clone, Debug, Default)]
pub struct ServiceRecord {
    /// Service instance name, without the registration-type suffix.
    pub instance: Option<String>,
    /// Address from an A or AAAA record.
    pub addr: Option<IpAddr>,
    /// Port from the SRV record.
    pub port: Option<u16>,
    /// Parsed TXT attributes.
    pub attributes: HashMap<String, String>,
}

impl ServiceRecord {
    /// Fold the records of an mdns response into one service.
    pub fn from_response(response: &mdns::Response, registration_type: &str) -> Self {
        let mut service = Self::default();
        for record in response.records() {
            match record.kind {
                RecordKind::A(v4) => service.addr = Some(v4.into()),
                RecordKind::AAAA(v6) => service.addr = Some(v6.into()),
                RecordKind::SRV { port, .. } => {
                    service.port = Some(port);
                    if service.instance.is_none() {
                        service.instance = instance_name(&record.name, registration_type);
                    }
                }
                RecordKind::TXT(ref text) => {
                    service.attributes.extend(dns_txt(&[text.as_str()]));
                    if service.instance.is_none() {
                        service.instance = instance_name(&record.name, registration_type);
                    }
                }
                _ => (),
            }
        }
        service
    }

    /// Translate the service into a device identity. Services missing an
    /// address, port, or instance name are ignored.
    pub fn into_device_info(self, config: &Config) -> Option<DeviceInfo> {
        let id = self.instance?;
        let addr = self.addr?;
        let port = self.port?;
        let name = self.attributes.get(&config.friendly_name_key).cloned();
        Some(DeviceInfo {
            id,
            name,
            addr: SocketAddr::new(addr, port),
        })
    }
}

/// `Living Room TV._googlecast._tcp.local` → `Living Room TV`.
fn instance_name(record_name: &str, registration_type: &str) -> Option<String> {
    let suffix = format!(".{}", registration_type);
    if record_name.ends_with(&suffix) {
        Some(record_name[..record_name.len() - suffix.len()].to_owned())
    } else {
        None
    }
}

/// Browse for cast devices for `browse` long and return a controller per
/// device discovered. Devices are deduplicated by instance name.
pub fn devices(config: &Config, browse: Duration) -> io::Result<Vec<Device>> {
    let discovery = mdns::discover::all(&config.registration_type)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, format!("mdns: {:?}", err)))?;

    let mut seen = HashSet::new();
    let mut found = Vec::new();
    for response in discovery.timeout(browse) {
        let response = match response {
            Ok(response) => response,
            Err(err) => {
                warn!("mdns response error: {:?}", err);
                continue;
            }
        };
        let service = ServiceRecord::from_response(&response, &config.registration_type);
        if let Some(info) = service.into_device_info(config) {
            debug!("discovered {:?} at {}", info.id, info.addr);
            if seen.insert(info.id.clone()) {
                found.push(Device::new(info, config.clone()));
            }
        }
    }
    Ok(found)
}
