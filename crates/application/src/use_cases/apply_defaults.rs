use crate::ports::SystemResolverSource;
use keywatch_domain::config::{normalize_resolver, ProbeConfig, DEFAULT_TIMEOUT_SECS};
use keywatch_domain::ProbeError;
use std::sync::Arc;
use tracing::debug;

/// Produces the normalized probe configuration a pass runs against: a
/// non-empty domain list, non-empty `host:port` resolvers, and a positive
/// timeout. Pure with respect to its input — the raw configuration is
/// never mutated, so concurrent passes can share it.
pub struct ApplyDefaults {
    resolver_source: Arc<dyn SystemResolverSource>,
}

impl ApplyDefaults {
    pub fn new(resolver_source: Arc<dyn SystemResolverSource>) -> Self {
        Self { resolver_source }
    }

    /// Idempotent: applying this to an already-normalized configuration
    /// returns it unchanged.
    pub async fn execute(&self, config: &ProbeConfig) -> Result<ProbeConfig, ProbeError> {
        let mut normalized = config.clone();

        if normalized.domains.is_empty() {
            normalized.domains = vec![".".to_string()];
        }

        if normalized.resolvers.is_empty() {
            normalized.resolvers = self.resolver_source.read_resolvers().await?;
            if normalized.resolvers.is_empty() {
                return Err(ProbeError::ConfigSourceUnavailable(
                    "system resolver source returned no servers".to_string(),
                ));
            }
            debug!(
                resolvers = normalized.resolvers.len(),
                "Using system resolvers"
            );
        }

        normalized.resolvers = normalized
            .resolvers
            .iter()
            .map(|entry| normalize_resolver(entry))
            .collect();

        if normalized.timeout_secs == 0 {
            normalized.timeout_secs = DEFAULT_TIMEOUT_SECS;
        }

        Ok(normalized)
    }
}
