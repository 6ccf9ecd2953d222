use async_trait::async_trait;
use keywatch_domain::ProbeError;

/// Source of the host's default name servers, read only when no explicit
/// resolvers are configured.
#[async_trait]
pub trait SystemResolverSource: Send + Sync {
    /// Returns the configured name servers. Errors with
    /// `ProbeError::ConfigSourceUnavailable` when the source cannot be
    /// read or names no servers.
    async fn read_resolvers(&self) -> Result<Vec<String>, ProbeError>;
}
