//! Byte codecs and type conversion for snowcodec.
//!
//! This crate converts between a canonical byte buffer and the textual and
//! numeric representations used by transaction documents:
//! - Checksummed base58 ("cb58") and plain base58
//! - Bech32 addresses with a chain-alias prefix (`X-avax1...`)
//! - The ten serialized types and the converter between them
//! - The hex/display encoding policy and the shared codec service
//!
//! # Example
//!
//! ```rust
//! use snowcodec_core::{Repr, Serialization, SerializedEncoding, Value};
//!
//! let codec = Serialization::global();
//! let amount = codec
//!     .encode(
//!         &Value::Text("100".into()),
//!         SerializedEncoding::Hex,
//!         Repr::DecimalString { width: Some(8) },
//!         Repr::DecimalString { width: Some(8) },
//!     )
//!     .unwrap();
//! assert_eq!(amount, Value::Text("0000000000000064".into()));
//! ```

pub mod address;
pub mod checksum;
pub mod config;
pub mod convert;
pub mod engine;
pub mod error;
pub mod ids;
pub mod types;

// Re-export commonly used types at the crate root
pub use address::{address_to_string, parse_address, ParsedAddress};
pub use checksum::{decode_base58, decode_checksummed, encode_base58, encode_checksummed};
pub use config::CodecConfig;
pub use convert::{buffer_to_value, value_to_buffer};
pub use engine::Serialization;
pub use error::{CodecError, Result};
pub use ids::{Id, ShortId};
pub use types::{Repr, SerializedEncoding, SerializedType, Value};
