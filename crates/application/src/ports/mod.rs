mod error_reporter;
mod key_collector;
mod key_prober;
mod metrics_sink;
mod system_resolvers;

pub use error_reporter::ErrorReporter;
pub use key_collector::{CollectOutcome, KeyCollector};
pub use key_prober::{KeyProbeResult, KeyProber};
pub use metrics_sink::MetricsSink;
pub use system_resolvers::SystemResolverSource;

// Re-export for convenience
pub use keywatch_domain::KeyRecordObservation;
