//! DNS Message Builder
//!
//! Constructs the DNSKEY query in wire format using `hickory-proto`.
//! EDNS(0) is always attached: key record answer sets routinely exceed
//! the legacy 512-byte message limit.

use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use keywatch_domain::ProbeError;
use std::str::FromStr;

/// Maximum response payload advertised through EDNS(0)
const MAX_RESPONSE_PAYLOAD: u16 = 4096;

/// Builds DNSKEY query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a recursive DNSKEY query for the fully-qualified form of
    /// `domain` and serialize it to wire format bytes.
    pub fn build_dnskey_query(domain: &str) -> Result<Vec<u8>, ProbeError> {
        let name = Name::from_str(&Self::fqdn(domain)).map_err(|e| {
            ProbeError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordType::DNSKEY);
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(fastrand::u16(..), MessageType::Query, OpCode::Query);
        message.metadata.recursion_desired = true;
        message.add_query(query);

        let edns = message.edns.get_or_insert_with(Edns::new);
        edns.enable_dnssec();
        edns.set_max_payload(MAX_RESPONSE_PAYLOAD);

        Self::serialize_message(&message)
    }

    /// Trailing-dot canonicalization: "ietf.org" queries as "ietf.org.".
    fn fqdn(domain: &str) -> String {
        if domain.ends_with('.') {
            domain.to_string()
        } else {
            format!("{}.", domain)
        }
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, ProbeError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            ProbeError::InvalidDomainName(format!("Failed to serialize DNS query: {}", e))
        })?;

        Ok(buf)
    }
}
