//! Fixed-size identifiers carried in transaction fields.

use crate::address;
use crate::checksum;
use crate::error::{CodecError, Result};
use crate::types::SerializedType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte identifier (asset, blockchain, transaction), shown as cb58.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id(pub [u8; 32]);

impl Id {
    /// The all-zero id.
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Build an id from a slice that must be exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(Self(fixed(bytes)?))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_cb58(&self) -> String {
        checksum::encode_checksummed(&self.0)
    }

    pub fn from_cb58(s: &str) -> Result<Self> {
        Self::from_slice(&checksum::decode_checksummed(s)?)
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.to_cb58())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_cb58())
    }
}

impl From<[u8; 32]> for Id {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Id {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A 20-byte identifier, the payload of an address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShortId(pub [u8; 20]);

impl ShortId {
    pub const ZERO: Self = Self([0u8; 20]);

    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Build a short id from a slice that must be exactly 20 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(Self(fixed(bytes)?))
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Convert to a hex string (with 0x prefix).
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Render as `<chain_alias>-<bech32>`.
    pub fn to_address(&self, hrp: &str, chain_alias: &str) -> Result<String> {
        address::address_to_string(hrp, chain_alias, &self.0)
    }

    /// Parse an address whose HRP must equal `hrp`.
    pub fn from_address(s: &str, hrp: &str) -> Result<Self> {
        Self::from_slice(&address::string_to_address_with_hrp(s, hrp)?)
    }
}

impl fmt::Debug for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShortId({})", self.to_hex())
    }
}

impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<[u8; 20]> for ShortId {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for ShortId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

fn fixed<const N: usize>(bytes: &[u8]) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| {
        CodecError::invalid(
            SerializedType::Buffer,
            format!("expected {} bytes, got {}", N, bytes.len()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_cb58_roundtrip() {
        let id = Id([0xab; 32]);
        let parsed = Id::from_cb58(&id.to_cb58()).unwrap();
        assert_eq!(id, parsed);
        assert_eq!(id.to_string(), id.to_cb58());
    }

    #[test]
    fn test_id_wrong_length() {
        let short = checksum::encode_checksummed(&[1u8; 20]);
        assert!(matches!(
            Id::from_cb58(&short),
            Err(CodecError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_short_id_address_roundtrip() {
        let sid = ShortId([0x11; 20]);
        let addr = sid.to_address("avax", "X").unwrap();
        assert_eq!(ShortId::from_address(&addr, "avax").unwrap(), sid);
        assert!(ShortId::from_address(&addr, "fuji").is_err());
    }

    #[test]
    fn test_short_id_hex() {
        let sid = ShortId([0xaa; 20]);
        assert_eq!(sid.to_hex(), format!("0x{}", "aa".repeat(20)));
    }
}
