// In crates/core-types/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
}

pub type Result<T> = std::result::Result<T, Error>;
