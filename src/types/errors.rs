use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonetaryError {
    #[error("Monetary error: {0}")]
    InvalidFormat(String),
    #[error("Monetary error: Overflow")]
    Overflow
}

#[derive(Debug, Error)]
pub enum DateError {
    #[error("Date error: {0}")]
    InvalidFormat(String)
}
