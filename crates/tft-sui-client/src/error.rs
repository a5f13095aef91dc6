//! Error types for the Sui client.
//!
//! This module provides a unified error type [`SuiError`] covering every
//! failure the library can produce: malformed key material, transaction
//! building mistakes, transport failures, and on-chain execution failures.

use thiserror::Error;

/// A specialized Result type for Sui client operations.
pub type SuiResult<T> = Result<T, SuiError>;

/// The main error type for the Sui client.
#[derive(Error, Debug)]
pub enum SuiError {
    /// Error occurred during HTTP communication
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error occurred during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error occurred during BCS serialization/deserialization
    #[error("BCS error: {0}")]
    Bcs(String),

    /// Error occurred during URL parsing
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Error occurred during hex encoding/decoding
    #[error("Hex error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Error occurred during base64 decoding
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Invalid Sui address
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Invalid object identifier or digest
    #[error("Invalid object: {0}")]
    InvalidObject(String),

    /// Invalid public key
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Invalid private key
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// Invalid signature
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    /// Signature verification failed
    #[error("Signature verification failed")]
    SignatureVerificationFailed,

    /// Invalid type tag format
    #[error("Invalid type tag: {0}")]
    InvalidTypeTag(String),

    /// Transaction building error
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// No owned gas coin can cover the requested budget
    #[error("No gas coin with balance >= {required}")]
    InsufficientGas {
        /// The gas budget that could not be covered
        required: u64,
    },

    /// JSON-RPC error response from the fullnode
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code
        code: i64,
        /// Error message from the node
        message: String,
    },

    /// Transaction execution failed on chain
    #[error("Execution failed: {status}")]
    ExecutionFailed {
        /// The execution status message returned by the node
        status: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal client error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Any other error
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl SuiError {
    /// Creates a new BCS error
    pub fn bcs<E: std::fmt::Display>(err: E) -> Self {
        Self::Bcs(err.to_string())
    }

    /// Creates a new transaction error
    pub fn transaction<S: Into<String>>(msg: S) -> Self {
        Self::Transaction(msg.into())
    }

    /// Creates a new RPC error
    pub fn rpc(code: i64, message: impl Into<String>) -> Self {
        Self::Rpc {
            code,
            message: message.into(),
        }
    }

    /// Returns true if the error came from the remote node rather than
    /// local validation.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Rpc { .. } | Self::ExecutionFailed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SuiError::InvalidAddress("bad address".to_string());
        assert_eq!(err.to_string(), "Invalid address: bad address");
    }

    #[test]
    fn test_rpc_error() {
        let err = SuiError::rpc(-32602, "invalid params");
        assert!(err.to_string().contains("-32602"));
        assert!(err.to_string().contains("invalid params"));
        assert!(err.is_remote());
    }

    #[test]
    fn test_execution_failed() {
        let err = SuiError::ExecutionFailed {
            status: "MoveAbort(7)".to_string(),
        };
        assert!(err.to_string().contains("MoveAbort(7)"));
        assert!(err.is_remote());
    }

    #[test]
    fn test_insufficient_gas() {
        let err = SuiError::InsufficientGas {
            required: 100_000_000,
        };
        assert!(err.to_string().contains("100000000"));
        assert!(!err.is_remote());
    }

    #[test]
    fn test_bcs_error() {
        let err = SuiError::bcs("serialization failed");
        assert!(matches!(err, SuiError::Bcs(_)));
        assert!(err.to_string().contains("serialization failed"));
    }

    #[test]
    fn test_transaction_error() {
        let err = SuiError::transaction("missing sender");
        assert!(matches!(err, SuiError::Transaction(_)));
        assert!(!err.is_remote());
    }
}
