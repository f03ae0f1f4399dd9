use serde::{Deserialize, Serialize};

use super::ApiKey;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeocodingConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default)]
    pub api_key: Option<ApiKey>,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            api_key: None,
            language: default_language(),
        }
    }
}

fn default_url() -> String {
    "https://maps.googleapis.com/maps/api/geocode/json".to_string()
}

fn default_language() -> String {
    "en".to_string()
}
