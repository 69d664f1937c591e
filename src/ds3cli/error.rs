use crate::failure::AggregatedFailure;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Ds3Error {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Cannot aggregate an empty set of failures")]
    EmptyFailureSet,

    #[error("{0}")]
    TapeFailures(AggregatedFailure),

    #[error("Request failed with status code {status_code}: {response}")]
    FailedRequest { status_code: u16, response: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Ds3Error>;
