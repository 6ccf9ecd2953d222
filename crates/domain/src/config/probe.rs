use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_DNS_PORT: u16 = 53;
pub const DEFAULT_TIMEOUT_SECS: u64 = 2;

/// What to probe and where. An empty domain list means the root zone, an
/// empty resolver list means the host's system resolvers; both defaults
/// are applied once per collection pass, before any query executes.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Domains or subdomains to query for DNSKEY records.
    #[serde(default)]
    pub domains: Vec<String>,

    /// Resolvers, as `ip`, `ip:port`, `[ipv6]:port` or `host:port`.
    #[serde(default)]
    pub resolvers: Vec<String>,

    /// Query timeout in seconds. 0 means the default of 2.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            domains: Vec::new(),
            resolvers: Vec::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Bring a resolver entry into canonical `host:port` form, appending the
/// default DNS port when none is present. Already-normalized entries are
/// returned unchanged, so applying this twice is a no-op.
pub fn normalize_resolver(entry: &str) -> String {
    if is_host_port(entry) {
        return entry.to_string();
    }
    match entry.parse::<IpAddr>() {
        Ok(IpAddr::V6(_)) => format!("[{}]:{}", entry, DEFAULT_DNS_PORT),
        _ => format!("{}:{}", entry, DEFAULT_DNS_PORT),
    }
}

fn is_host_port(entry: &str) -> bool {
    // IPv4:port and [IPv6]:port
    if entry.parse::<SocketAddr>().is_ok() {
        return true;
    }
    // bare address literal, needs a port
    if entry.parse::<IpAddr>().is_ok() {
        return false;
    }
    // hostname with a trailing numeric port
    match entry.rsplit_once(':') {
        Some((host, port)) => {
            !host.is_empty() && !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}
