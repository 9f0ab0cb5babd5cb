use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct HostConfig {
    pub controller: ControllerSection,
    #[serde(default)]
    pub relay: RelaySection,
    pub logging: LoggingSection,
}

#[derive(Debug, Deserialize)]
pub struct ControllerSection {
    pub address: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct RelaySection {
    /// Milliseconds between dispatch ticks. At most one command is applied
    /// per tick. Default: 100.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Commands the queue holds before new arrivals are dropped.
    /// Default: 256.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

fn default_tick_interval_ms() -> u64 {
    100
}

fn default_queue_capacity() -> usize {
    256
}

impl Default for RelaySection {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    pub level: String,
}

impl HostConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}
