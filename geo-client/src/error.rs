use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeodecodingError {
    #[error("{0}")]
    Provider(String),
    #[error("GeodecodingError - Reqwest: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("GeodecodingError - SerdeJson: {0}")]
    Deserialization(#[from] serde_json::Error),
    #[error("GeodecodingError - InvalidCoordinates: {0:?}")]
    InvalidCoordinates(String),
}
