//! Serialized type tags, encodings, and the values that move between them.

use crate::error::CodecError;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The logical representations a canonical byte buffer can take.
///
/// The serde and string forms use the interchange tags (`"BN"`, `"cb58"`,
/// `"decimalString"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SerializedType {
    #[serde(rename = "hex")]
    Hex,
    #[serde(rename = "BN")]
    Bn,
    Buffer,
    Bech32,
    #[serde(rename = "cb58")]
    Cb58,
    #[serde(rename = "base58")]
    Base58,
    #[serde(rename = "base64")]
    Base64,
    #[serde(rename = "decimalString")]
    DecimalString,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "utf8")]
    Utf8,
}

impl SerializedType {
    /// Every variant, in tag order.
    pub const ALL: [SerializedType; 10] = [
        Self::Hex,
        Self::Bn,
        Self::Buffer,
        Self::Bech32,
        Self::Cb58,
        Self::Base58,
        Self::Base64,
        Self::DecimalString,
        Self::Number,
        Self::Utf8,
    ];

    /// The interchange tag for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Bn => "BN",
            Self::Buffer => "Buffer",
            Self::Bech32 => "Bech32",
            Self::Cb58 => "cb58",
            Self::Base58 => "base58",
            Self::Base64 => "base64",
            Self::DecimalString => "decimalString",
            Self::Number => "number",
            Self::Utf8 => "utf8",
        }
    }

    /// Whether the type accepts a fixed byte width.
    pub fn takes_width(&self) -> bool {
        matches!(self, Self::Bn | Self::Number | Self::DecimalString)
    }
}

impl fmt::Display for SerializedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SerializedType {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| CodecError::UnsupportedType(s.to_string()))
    }
}

/// How a field is rendered in a document.
///
/// `Hex` forces raw hex whatever the field's logical type; `Display` uses
/// the logical type's natural human representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerializedEncoding {
    #[default]
    Hex,
    Display,
}

impl SerializedEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Display => "display",
        }
    }
}

impl fmt::Display for SerializedEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SerializedEncoding {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(Self::Hex),
            "display" => Ok(Self::Display),
            other => Err(CodecError::UnsupportedType(other.to_string())),
        }
    }
}

/// A serialized type together with the arguments that type needs.
///
/// Numeric types carry an optional fixed byte width; Bech32 carries the
/// human-readable part and chain alias. Every other type takes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repr<'a> {
    Hex,
    Buffer,
    Bn { width: Option<usize> },
    Number { width: Option<usize> },
    DecimalString { width: Option<usize> },
    Cb58,
    Base58,
    Base64,
    Bech32 { hrp: &'a str, chain_alias: &'a str },
    Utf8,
}

impl<'a> Repr<'a> {
    /// Build a representation from a type tag and loose arguments.
    ///
    /// `width` only reaches types for which [`SerializedType::takes_width`]
    /// holds. Bech32 fails without an address context.
    pub fn from_parts(
        kind: SerializedType,
        width: Option<usize>,
        address: Option<(&'a str, &'a str)>,
    ) -> Result<Self, CodecError> {
        let width = width.filter(|_| kind.takes_width());
        Ok(match kind {
            SerializedType::Hex => Self::Hex,
            SerializedType::Buffer => Self::Buffer,
            SerializedType::Bn => Self::Bn { width },
            SerializedType::Number => Self::Number { width },
            SerializedType::DecimalString => Self::DecimalString { width },
            SerializedType::Cb58 => Self::Cb58,
            SerializedType::Base58 => Self::Base58,
            SerializedType::Base64 => Self::Base64,
            SerializedType::Utf8 => Self::Utf8,
            SerializedType::Bech32 => {
                let (hrp, chain_alias) = address.ok_or_else(|| {
                    CodecError::InvalidAddressFormat(
                        "Bech32 needs a human-readable part and a chain alias".into(),
                    )
                })?;
                Self::Bech32 { hrp, chain_alias }
            }
        })
    }

    /// The type tag of this representation.
    pub fn kind(&self) -> SerializedType {
        match self {
            Self::Hex => SerializedType::Hex,
            Self::Buffer => SerializedType::Buffer,
            Self::Bn { .. } => SerializedType::Bn,
            Self::Number { .. } => SerializedType::Number,
            Self::DecimalString { .. } => SerializedType::DecimalString,
            Self::Cb58 => SerializedType::Cb58,
            Self::Base58 => SerializedType::Base58,
            Self::Base64 => SerializedType::Base64,
            Self::Bech32 { .. } => SerializedType::Bech32,
            Self::Utf8 => SerializedType::Utf8,
        }
    }
}

/// A logical value on one side of a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Raw bytes (`Buffer`).
    Bytes(Vec<u8>),
    /// Arbitrary-precision unsigned integer (`BN`).
    Integer(BigUint),
    /// Native unsigned number (`number`).
    Number(u64),
    /// Any textual form: hex, cb58, base58, base64, Bech32, decimal, utf8.
    Text(String),
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Short name of the variant, for error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Bytes(_) => "bytes",
            Self::Integer(_) => "integer",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(b) => write!(f, "0x{}", hex::encode(b)),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<BigUint> for Value {
    fn from(n: BigUint) -> Self {
        Self::Integer(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}
