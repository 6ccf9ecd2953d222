use async_trait::async_trait;
use keywatch_domain::{KeyRecordObservation, ProbeError};
use std::time::Duration;

/// Outcome of one successful DNSKEY probe against a single server.
#[derive(Debug, Clone)]
pub struct KeyProbeResult {
    pub observations: Vec<KeyRecordObservation>,
    pub query_time_ms: f64,
}

/// One network exchange: query `server` for the DNSKEY set of `domain`,
/// validate the response status, and decode the answers. No retries.
#[async_trait]
pub trait KeyProber: Send + Sync {
    async fn probe(
        &self,
        domain: &str,
        server: &str,
        timeout: Duration,
    ) -> Result<KeyProbeResult, ProbeError>;
}
