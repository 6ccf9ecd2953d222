use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProbeError {
    #[error("Could not read system resolvers: {0}")]
    ConfigSourceUnavailable(String),

    #[error("Query timed out after {elapsed_ms:.1}ms querying {server} for {domain}")]
    QueryTimeout {
        domain: String,
        server: String,
        elapsed_ms: f64,
    },

    #[error("Transport error querying {server} for {domain}: {cause}")]
    Transport {
        domain: String,
        server: String,
        cause: String,
    },

    #[error("Query failed! Rcode {rcode} querying {server} for {domain}")]
    QueryFailed {
        rcode: String,
        domain: String,
        server: String,
    },

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Resolver set is empty")]
    EmptyResolverSet,
}
