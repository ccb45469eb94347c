//! Errors for entity serialization and signing.

use crate::crypto::CryptoError;
use snowcodec_core::CodecError;
use thiserror::Error;

/// Errors raised by the serializable entities.
#[derive(Debug, Error)]
pub enum TxError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary encoding error: {0}")]
    Binary(#[from] bincode::Error),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error("transaction has {inputs} inputs but {credentials} credentials")]
    CredentialCount { inputs: usize, credentials: usize },

    #[error("input {input} expects {expected} signatures, credential has {found}")]
    SignatureCount {
        input: usize,
        expected: usize,
        found: usize,
    },

    #[error("no key at signer index {0}")]
    UnknownSigner(u32),
}

impl TxError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedEnvelope(reason.into())
    }
}

/// Result type for entity operations.
pub type Result<T> = std::result::Result<T, TxError>;
