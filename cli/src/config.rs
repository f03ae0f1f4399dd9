use anyhow::Context;
use serde::{Deserialize, Serialize};

use std::path::Path;

use geo_client::{ApiKey, GeocodingConfig};
use market_client::MarketClientConfig;

use super::tracing::TracingConfig;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub market: MarketClientConfig,
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    #[serde(default)]
    pub tracing: TracingConfig,
    /// BUL stroops per euro cent.
    #[serde(default = "default_bul_stroops_price")]
    pub bul_stroops_price: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            market: MarketClientConfig::default(),
            geocoding: GeocodingConfig::default(),
            tracing: TracingConfig::default(),
            bul_stroops_price: default_bul_stroops_price(),
        }
    }
}

pub struct EnvOverride {
    pub google_api_key: Option<String>,
}

impl Config {
    pub fn from_path(
        path: Option<impl AsRef<Path>>,
        EnvOverride { google_api_key }: EnvOverride,
    ) -> anyhow::Result<Self> {
        let mut config: Config = match path {
            Some(path) => {
                let config_file =
                    std::fs::read_to_string(path).context("Couldn't read config file")?;
                serde_yaml::from_str(&config_file).context("Couldn't parse config file")?
            }
            None => Config::default(),
        };

        if let Some(key) = google_api_key {
            config.geocoding.api_key = Some(ApiKey::from(key));
        }

        Ok(config)
    }
}

fn default_bul_stroops_price() -> u64 {
    10
}
