use keywatch_application::services::ResolverPicker;
use keywatch_application::use_cases::{ApplyDefaults, CollectKeys};
use keywatch_domain::Config;
use keywatch_infrastructure::dns::DnskeyProber;
use keywatch_infrastructure::metrics::{LineProtocolSink, TracingErrorReporter};
use keywatch_infrastructure::random::FastrandSource;
use keywatch_infrastructure::system::ResolvConfSource;
use std::sync::Arc;

/// Wire the collection pass: resolv.conf as the system resolver source,
/// fastrand-backed resolver selection, the UDP prober, and line-protocol
/// emission to stdout.
pub fn build_collector(config: &Config) -> Arc<CollectKeys> {
    let defaults = ApplyDefaults::new(Arc::new(ResolvConfSource::new()));
    let picker = ResolverPicker::new(Arc::new(FastrandSource));

    Arc::new(CollectKeys::new(
        config.probe.clone(),
        defaults,
        picker,
        Arc::new(DnskeyProber::new()),
        Arc::new(LineProtocolSink::new()),
        Arc::new(TracingErrorReporter::new()),
    ))
}
