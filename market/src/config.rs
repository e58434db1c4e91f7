use log::{info, warn};
use serde_derive::Deserialize;
use std::path::Path;

/// Size of the market, fixed before the first order is admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketConfig {
    pub num_equities: u32,
    pub num_traders: u32,
}

impl MarketConfig {
    pub fn new(num_equities: u32, num_traders: u32) -> Self {
        Self {
            num_equities,
            num_traders,
        }
    }
}

/// Report options read from the runtime config file.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RuntimeConfig {
    pub verbose: bool,
    pub median: bool,
    pub trader_info: bool,
    pub time_travelers: bool,
    pub json: bool,
}

impl RuntimeConfig {
    pub fn new() -> Self {
        RuntimeConfig::default()
    }

    /// Loads the config at `path`. A missing or broken file is not fatal:
    /// it is reported and the defaults are used instead.
    pub fn from_toml(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!(
                    "Something went wrong reading the runtime config file {}, {:?}",
                    path.display(),
                    e
                );
                return RuntimeConfig::new();
            }
        };
        match toml::from_str(&contents) {
            Ok(config) => {
                info!("runtime config loaded from {}", path.display());
                config
            }
            Err(e) => {
                warn!(
                    "Something went wrong parsing the runtime config file {}, {:?}",
                    path.display(),
                    e
                );
                RuntimeConfig::new()
            }
        }
    }
}
