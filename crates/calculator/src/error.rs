// In crates/calculator/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The conversion rate to JPY could not be resolved. Network failure, a
    /// non-success HTTP status and a malformed or rate-less body all collapse
    /// into this one variant; the underlying cause is logged, not surfaced.
    #[error("Conversion rate to JPY is unavailable")]
    RateUnavailable,
}

pub type Result<T> = std::result::Result<T, Error>;
