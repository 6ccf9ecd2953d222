//! Keywatch Domain Layer
pub mod config;
pub mod errors;
pub mod key_record;

pub use config::{CollectorConfig, Config, LoggingConfig, ProbeConfig};
pub use errors::ProbeError;
pub use key_record::KeyRecordObservation;
