//! Semantic classification of DNSKEY records.
//!
//! A DNSKEY answer is reduced to three stable, human-meaningful tags: the
//! key tag (RFC 4034 §B fingerprint), the algorithm name, and the key type
//! derived from the flags field (RFC 4034 §2.1.1).

use std::fmt;

/// One decoded DNSKEY answer, ready to be emitted as a measurement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRecordObservation {
    pub domain: String,
    pub server: String,
    pub key_tag: u16,
    pub algorithm: String,
    pub key_type: String,
}

impl KeyRecordObservation {
    pub fn new(domain: &str, server: &str, key_tag: u16, algorithm: u8, flags: u16) -> Self {
        Self {
            domain: domain.to_string(),
            server: server.to_string(),
            key_tag,
            algorithm: algorithm_name(algorithm),
            key_type: key_type(flags),
        }
    }
}

impl fmt::Display for KeyRecordObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DNSKEY(domain={}, tag={}, algo={}, {})",
            self.domain, self.key_tag, self.algorithm, self.key_type
        )
    }
}

/// IANA DNSSEC algorithm number to mnemonic. Numbers missing from the
/// registry fall back to their decimal form.
pub fn algorithm_name(algorithm: u8) -> String {
    let name = match algorithm {
        1 => "RSAMD5",
        2 => "DH",
        3 => "DSA",
        5 => "RSASHA1",
        6 => "DSA-NSEC3-SHA1",
        7 => "RSASHA1-NSEC3-SHA1",
        8 => "RSASHA256",
        10 => "RSASHA512",
        12 => "ECC-GOST",
        13 => "ECDSAP256SHA256",
        14 => "ECDSAP384SHA384",
        15 => "ED25519",
        16 => "ED448",
        252 => "INDIRECT",
        253 => "PRIVATEDNS",
        254 => "PRIVATEOID",
        other => return other.to_string(),
    };
    name.to_string()
}

/// Key type from the DNSKEY flags field: 256 (zone key) is a ZSK, 257
/// (zone key + secure entry point) is a KSK. Anything else is reported as
/// the raw decimal value.
pub fn key_type(flags: u16) -> String {
    match flags {
        256 => "ZSK".to_string(),
        257 => "KSK".to_string(),
        other => other.to_string(),
    }
}
