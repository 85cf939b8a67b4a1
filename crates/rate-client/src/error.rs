// In crates/rate-client/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(#[from] serde_json::Error),
    #[error("Rate endpoint returned HTTP {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("Response contained no rate for {0}")]
    MissingRate(core_types::Currency),
}

pub type Result<T> = std::result::Result<T, Error>;
