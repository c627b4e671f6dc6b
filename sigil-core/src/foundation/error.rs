use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable error classification surfaced in [`crate::domain::model::SigningOutput`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum ErrorCode {
    Codec,
    Address,
    Key,
    UnsupportedCall,
    UnknownNetwork,
    NetworkMismatch,
    InvalidValue,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ErrorContext {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum SigningError {
    #[error("malformed SCALE encoding: {details}")]
    Codec { details: String },

    #[error("invalid address: {details}")]
    Address { details: String },

    #[error("invalid private key length: expected {expected} bytes, got {actual}")]
    KeyLength { expected: usize, actual: usize },

    #[error("invalid {scheme} key material: {details}")]
    Key { scheme: &'static str, details: String },

    #[error("call {call} has no index entry for network {network}")]
    UnsupportedCall { call: &'static str, network: u16 },

    #[error("unknown network id: {0}")]
    UnknownNetwork(u16),

    #[error("network mismatch: request targets {request}, pipeline configured for {config}")]
    NetworkMismatch { request: u16, config: u16 },

    #[error("invalid value: {details}")]
    InvalidValue { details: String },
}

pub type Result<T> = std::result::Result<T, SigningError>;

impl SigningError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SigningError::Codec { .. } => ErrorCode::Codec,
            SigningError::Address { .. } => ErrorCode::Address,
            SigningError::KeyLength { .. } => ErrorCode::Key,
            SigningError::Key { .. } => ErrorCode::Key,
            SigningError::UnsupportedCall { .. } => ErrorCode::UnsupportedCall,
            SigningError::UnknownNetwork(_) => ErrorCode::UnknownNetwork,
            SigningError::NetworkMismatch { .. } => ErrorCode::NetworkMismatch,
            SigningError::InvalidValue { .. } => ErrorCode::InvalidValue,
        }
    }

    pub fn context(&self) -> ErrorContext {
        ErrorContext { code: self.code(), message: self.to_string() }
    }

    pub fn codec(details: impl Into<String>) -> Self {
        SigningError::Codec { details: details.into() }
    }

    pub fn address(details: impl Into<String>) -> Self {
        SigningError::Address { details: details.into() }
    }

    pub fn invalid_value(details: impl Into<String>) -> Self {
        SigningError::InvalidValue { details: details.into() }
    }
}

impl From<hex::FromHexError> for SigningError {
    fn from(err: hex::FromHexError) -> Self {
        SigningError::InvalidValue { details: format!("hex decode error: {}", err) }
    }
}
