use super::{decoder, executor};
use async_trait::async_trait;
use keywatch_application::ports::{KeyProbeResult, KeyProber};
use keywatch_domain::ProbeError;
use std::time::Duration;
use tracing::debug;

/// The full query/decode pipeline behind the `KeyProber` port: execute
/// one exchange, validate the response status, decode the answers.
pub struct DnskeyProber;

impl DnskeyProber {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DnskeyProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyProber for DnskeyProber {
    async fn probe(
        &self,
        domain: &str,
        server: &str,
        timeout: Duration,
    ) -> Result<KeyProbeResult, ProbeError> {
        let executed = executor::execute(domain, server, timeout).await?;

        decoder::validate(&executed.message, domain, server)?;

        let observations: Vec<_> = decoder::decode_answers(&executed.message, domain, server)
            .collect();

        debug!(
            domain = %domain,
            server = %server,
            keys = observations.len(),
            "DNSKEY answers decoded"
        );

        Ok(KeyProbeResult {
            observations,
            query_time_ms: executed.query_time_ms,
        })
    }
}
