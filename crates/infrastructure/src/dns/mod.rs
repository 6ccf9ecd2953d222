pub mod decoder;
pub mod executor;
pub mod message_builder;
pub mod prober;
pub mod transport;

pub use executor::{execute, ExecutedQuery};
pub use message_builder::MessageBuilder;
pub use prober::DnskeyProber;
