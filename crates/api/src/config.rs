//! Process configuration, read once at startup.

use std::path::PathBuf;

use invtrack_ai::ForecastConfig;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listen address (`INVTRACK_BIND`).
    pub bind_addr: String,
    /// Directory of the persisted state slots (`INVTRACK_DATA_DIR`).
    pub data_dir: PathBuf,
    /// Region label shown by the health route (`AWS_REGION`). Cosmetic.
    pub region: String,
    pub forecast: ForecastConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            region: DEFAULT_REGION.to_string(),
            forecast: ForecastConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to
    /// pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            bind_addr: get("INVTRACK_BIND").unwrap_or(defaults.bind_addr),
            data_dir: get("INVTRACK_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            region: get("AWS_REGION").unwrap_or(defaults.region),
            forecast: ForecastConfig::from_lookup(&lookup),
        }
    }
}
