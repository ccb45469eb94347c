//! Codec errors.

use crate::types::SerializedType;
use thiserror::Error;

/// Errors raised while converting between bytes and their representations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("checksum mismatch in {0} payload")]
    ChecksumMismatch(&'static str),

    #[error("invalid address format: {0}")]
    InvalidAddressFormat(String),

    #[error("unsupported serialized type: {0}")]
    UnsupportedType(String),

    #[error("value needs {needed} bytes but the fixed width is {width}")]
    WidthOverflow { width: usize, needed: usize },

    #[error("invalid {kind} value: {reason}")]
    InvalidValue { kind: SerializedType, reason: String },

    #[error("integer {0} does not fit in a native number")]
    NumberOutOfRange(String),
}

impl CodecError {
    pub(crate) fn invalid(kind: SerializedType, reason: impl ToString) -> Self {
        Self::InvalidValue {
            kind,
            reason: reason.to_string(),
        }
    }
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
