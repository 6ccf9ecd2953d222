use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CollectorConfig {
    /// Seconds between collection passes.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

fn default_interval_secs() -> u64 {
    300
}
