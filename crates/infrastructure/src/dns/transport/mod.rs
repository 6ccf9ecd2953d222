pub mod udp;

pub use udp::UdpTransport;

use thiserror::Error;

/// Transport-level failure, split so the executor can map timeouts and
/// I/O faults to distinct probe errors.
#[derive(Debug, Error)]
pub enum TransportFailure {
    #[error("no response within the timeout")]
    TimedOut,

    #[error("{0}")]
    Io(String),
}
