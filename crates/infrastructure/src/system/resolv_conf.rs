use async_trait::async_trait;
use keywatch_application::ports::SystemResolverSource;
use keywatch_domain::ProbeError;
use tokio::fs;
use tracing::debug;

/// System resolver reader (reads /etc/resolv.conf)
pub struct ResolvConfSource {
    resolv_path: String,
}

impl ResolvConfSource {
    pub fn new() -> Self {
        Self {
            resolv_path: "/etc/resolv.conf".to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_path(path: String) -> Self {
        Self { resolv_path: path }
    }
}

impl Default for ResolvConfSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SystemResolverSource for ResolvConfSource {
    async fn read_resolvers(&self) -> Result<Vec<String>, ProbeError> {
        let content = fs::read_to_string(&self.resolv_path).await.map_err(|_| {
            ProbeError::ConfigSourceUnavailable(format!("Could not read {}", self.resolv_path))
        })?;

        let mut servers = Vec::new();

        // Format of /etc/resolv.conf:
        // nameserver 192.168.1.1
        // options edns0

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            let mut fields = line.split_whitespace();
            if fields.next() == Some("nameserver") {
                if let Some(address) = fields.next() {
                    servers.push(address.to_string());
                }
            }
        }

        if servers.is_empty() {
            return Err(ProbeError::ConfigSourceUnavailable(format!(
                "No nameserver entries in {}",
                self.resolv_path
            )));
        }

        debug!(servers = servers.len(), "System resolvers read");
        Ok(servers)
    }
}
