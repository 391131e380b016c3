//! Custom error types for the engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unsupported hash algorithm: {name}")]
    UnsupportedHashAlgorithm { name: String },

    #[error("Unknown DEX source: {identifier}")]
    UnknownDexSource { identifier: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

pub type EngineResult<T> = Result<T, EngineError>;
