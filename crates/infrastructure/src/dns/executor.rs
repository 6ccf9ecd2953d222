//! Query execution: one DNSKEY exchange against one server, with the
//! round-trip latency measured as fractional milliseconds.

use super::message_builder::MessageBuilder;
use super::transport::{TransportFailure, UdpTransport};
use hickory_proto::op::Message;
use keywatch_domain::ProbeError;
use std::time::{Duration, Instant};
use tracing::debug;

/// A decoded response plus the latency of the exchange that produced it.
pub struct ExecutedQuery {
    pub message: Message,
    pub query_time_ms: f64,
}

/// Perform exactly one network exchange: build the DNSKEY query for
/// `domain`, send it to `server` (`host:port`), and wait at most
/// `timeout` for the response. No retries happen at this layer.
pub async fn execute(
    domain: &str,
    server: &str,
    timeout: Duration,
) -> Result<ExecutedQuery, ProbeError> {
    let query_bytes = MessageBuilder::build_dnskey_query(domain)?;

    let server_addr = tokio::net::lookup_host(server)
        .await
        .map_err(|e| transport_error(domain, server, format!("cannot resolve server: {}", e)))?
        .next()
        .ok_or_else(|| {
            transport_error(domain, server, "server resolved to no addresses".to_string())
        })?;

    let started = Instant::now();
    let response_bytes = UdpTransport::new(server_addr)
        .send(&query_bytes, timeout)
        .await
        .map_err(|failure| match failure {
            TransportFailure::TimedOut => ProbeError::QueryTimeout {
                domain: domain.to_string(),
                server: server.to_string(),
                elapsed_ms: elapsed_ms(started),
            },
            TransportFailure::Io(cause) => transport_error(domain, server, cause),
        })?;
    let query_time_ms = elapsed_ms(started);

    let message = Message::from_vec(&response_bytes)
        .map_err(|e| transport_error(domain, server, format!("malformed response: {}", e)))?;

    debug!(
        domain = %domain,
        server = %server,
        query_time_ms = query_time_ms,
        answers = message.answers.len(),
        "DNSKEY query exchanged"
    );

    Ok(ExecutedQuery {
        message,
        query_time_ms,
    })
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

fn transport_error(domain: &str, server: &str, cause: String) -> ProbeError {
    ProbeError::Transport {
        domain: domain.to_string(),
        server: server.to_string(),
        cause,
    }
}
