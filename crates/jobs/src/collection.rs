use keywatch_application::ports::KeyCollector;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEFAULT_INTERVAL_SECS: u64 = 300;

/// Runs one collection pass per interval tick. A failed pass is logged
/// and the schedule keeps running; the pass itself already reported the
/// failure through the error channel.
pub struct CollectionJob {
    collector: Arc<dyn KeyCollector>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CollectionJob {
    pub fn new(collector: Arc<dyn KeyCollector>) -> Self {
        Self {
            collector,
            interval_secs: DEFAULT_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting DNSKEY collection job");

        let job = Arc::clone(&self);
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(job.interval_secs));
            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => {
                        info!("CollectionJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match job.collector.collect_once().await {
                            Ok(outcome) => {
                                info!(
                                    domains = outcome.domains_queried,
                                    records = outcome.records_emitted,
                                    "Collection pass completed"
                                );
                            }
                            Err(e) => {
                                error!(error = %e, "Collection pass failed");
                            }
                        }
                    }
                }
            }
        });
    }
}
