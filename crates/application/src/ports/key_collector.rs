use async_trait::async_trait;
use keywatch_domain::ProbeError;

/// Summary of a completed collection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectOutcome {
    pub domains_queried: usize,
    pub records_emitted: usize,
}

/// One full collection pass over every configured domain. The seam the
/// scheduler drives.
#[async_trait]
pub trait KeyCollector: Send + Sync {
    async fn collect_once(&self) -> Result<CollectOutcome, ProbeError>;
}
