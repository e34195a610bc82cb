//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Simulated persistence latency applied to each submission.
    #[serde(default = "default_persistence_delay_ms")]
    pub persistence_delay_ms: u64,
}

fn default_persistence_delay_ms() -> u64 {
    2000
}

impl ServerConfig {
    pub fn persistence_delay(&self) -> Duration {
        Duration::from_millis(self.persistence_delay_ms)
    }
}
