use crate::ports::{CollectOutcome, ErrorReporter, KeyCollector, KeyProber, MetricsSink};
use crate::services::ResolverPicker;
use crate::use_cases::ApplyDefaults;
use async_trait::async_trait;
use keywatch_domain::{ProbeConfig, ProbeError};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub const MEASUREMENT: &str = "dnskey";

/// One collection pass: default the configuration once, then for every
/// domain in configured order pick a resolver, probe it, and emit one
/// measurement per decoded key record.
///
/// Fail-fast: the first error anywhere in the chain aborts the pass,
/// remaining domains are not attempted, and the error is reported exactly
/// once through the error channel. Observations emitted before the
/// failure stand.
pub struct CollectKeys {
    config: ProbeConfig,
    defaults: ApplyDefaults,
    picker: ResolverPicker,
    prober: Arc<dyn KeyProber>,
    sink: Arc<dyn MetricsSink>,
    reporter: Arc<dyn ErrorReporter>,
}

impl CollectKeys {
    pub fn new(
        config: ProbeConfig,
        defaults: ApplyDefaults,
        picker: ResolverPicker,
        prober: Arc<dyn KeyProber>,
        sink: Arc<dyn MetricsSink>,
        reporter: Arc<dyn ErrorReporter>,
    ) -> Self {
        Self {
            config,
            defaults,
            picker,
            prober,
            sink,
            reporter,
        }
    }

    pub async fn execute(&self) -> Result<CollectOutcome, ProbeError> {
        match self.run_pass().await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                self.reporter.report(&e);
                Err(e)
            }
        }
    }

    async fn run_pass(&self) -> Result<CollectOutcome, ProbeError> {
        let config = self.defaults.execute(&self.config).await?;
        let timeout = Duration::from_secs(config.timeout_secs);

        let mut records_emitted = 0;
        for domain in &config.domains {
            let server = self
                .picker
                .pick(&config.resolvers)
                .ok_or(ProbeError::EmptyResolverSet)?;

            debug!(domain = %domain, server = %server, "Probing for DNSKEY records");
            let result = self.prober.probe(domain, server, timeout).await?;

            for observation in &result.observations {
                let keytag = observation.key_tag.to_string();
                let tags = [
                    ("domain", observation.domain.as_str()),
                    ("server", observation.server.as_str()),
                    ("keytag", keytag.as_str()),
                    ("algorithm", observation.algorithm.as_str()),
                    ("key_type", observation.key_type.as_str()),
                ];
                self.sink.record(
                    MEASUREMENT,
                    &[("query_time_ms", result.query_time_ms)],
                    &tags,
                );
                records_emitted += 1;
            }
        }

        Ok(CollectOutcome {
            domains_queried: config.domains.len(),
            records_emitted,
        })
    }
}

#[async_trait]
impl KeyCollector for CollectKeys {
    async fn collect_once(&self) -> Result<CollectOutcome, ProbeError> {
        self.execute().await
    }
}
