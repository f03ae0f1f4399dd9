use serde::Deserialize;

use crate::error::GeodecodingError;

pub const COUNTRY_RESULT_TYPE: &str = "country";

#[derive(Deserialize, Debug)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Deserialize, Debug)]
pub struct GeocodeResult {
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

#[derive(Deserialize, Debug)]
pub struct AddressComponent {
    pub short_name: String,
}

impl GeocodeResponse {
    /// Short country code of the first country result; empty when the place
    /// belongs to no country.
    pub fn country_code(self) -> Result<String, GeodecodingError> {
        match self.status.as_str() {
            "ZERO_RESULTS" => return Ok(String::new()),
            "OK" => (),
            _ => {
                return Err(GeodecodingError::Provider(
                    self.error_message.unwrap_or(self.status),
                ))
            }
        }
        Ok(self
            .results
            .into_iter()
            .find(|result| result.types.iter().any(|t| t == COUNTRY_RESULT_TYPE))
            .and_then(|result| result.address_components.into_iter().next())
            .map(|component| component.short_name)
            .unwrap_or_default())
    }
}
