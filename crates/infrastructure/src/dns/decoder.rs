//! Response decoding: status validation and the semantic reduction of
//! DNSKEY answers into observations.

use hickory_proto::dnssec::rdata::DNSSECRData;
use hickory_proto::dnssec::PublicKey;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use keywatch_domain::{KeyRecordObservation, ProbeError};

/// A non-success status aborts the pass exactly like a transport
/// failure; it is never treated as a per-record skip.
pub fn validate(message: &Message, domain: &str, server: &str) -> Result<(), ProbeError> {
    let rcode = message.metadata.response_code;
    if rcode != ResponseCode::NoError {
        return Err(ProbeError::QueryFailed {
            rcode: rcode_name(rcode),
            domain: domain.to_string(),
            server: server.to_string(),
        });
    }
    Ok(())
}

/// One lazy pass over the answer section. Records of any other type are
/// skipped: only DNSKEY was asked for, but answer sets may carry
/// unrelated records.
pub fn decode_answers<'a>(
    message: &'a Message,
    domain: &'a str,
    server: &'a str,
) -> impl Iterator<Item = KeyRecordObservation> + 'a {
    message
        .answers
        .iter()
        .filter_map(move |record| match &record.data {
            RData::DNSSEC(DNSSECRData::DNSKEY(key)) => {
                let public_key = key.public_key();
                let algorithm = u8::from(<dyn PublicKey>::algorithm(public_key));
                let tag = key_tag(
                    key.flags(),
                    algorithm,
                    <dyn PublicKey>::public_bytes(public_key),
                );
                Some(KeyRecordObservation::new(
                    domain,
                    server,
                    tag,
                    algorithm,
                    key.flags(),
                ))
            }
            _ => None,
        })
}

pub fn rcode_name(rcode: ResponseCode) -> String {
    match rcode {
        ResponseCode::NoError => "NOERROR".to_string(),
        ResponseCode::NXDomain => "NXDOMAIN".to_string(),
        ResponseCode::ServFail => "SERVFAIL".to_string(),
        ResponseCode::Refused => "REFUSED".to_string(),
        ResponseCode::NotImp => "NOTIMP".to_string(),
        ResponseCode::FormErr => "FORMERR".to_string(),
        other => format!("{:?}", other),
    }
}

/// RFC 4034 appendix B key tag over the record's wire form. The protocol
/// octet is always 3 for DNSKEY.
fn key_tag(flags: u16, algorithm: u8, public_key: &[u8]) -> u16 {
    let mut wire = Vec::with_capacity(4 + public_key.len());
    wire.extend_from_slice(&flags.to_be_bytes());
    wire.push(3);
    wire.push(algorithm);
    wire.extend_from_slice(public_key);

    let mut accumulator: u32 = 0;

    for chunk in wire.chunks(2) {
        if chunk.len() == 2 {
            accumulator += u32::from(u16::from_be_bytes([chunk[0], chunk[1]]));
        } else {
            accumulator += u32::from(chunk[0]) << 8;
        }
    }

    accumulator += accumulator >> 16;
    (accumulator & 0xFFFF) as u16
}
