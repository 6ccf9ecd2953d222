mod collector;
mod errors;
mod logging;
mod probe;
mod root;

pub use collector::CollectorConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use probe::{normalize_resolver, ProbeConfig, DEFAULT_DNS_PORT, DEFAULT_TIMEOUT_SECS};
pub use root::{CliOverrides, Config};
