//! Bech32 addresses with a chain-alias prefix.
//!
//! An address string looks like `X-avax1...`: the chain alias, a `-`
//! separator, then a Bech32 string whose human-readable part (HRP) names
//! the network.

use crate::error::{CodecError, Result};
use bech32::{FromBase32, ToBase32, Variant};
use tracing::debug;

/// Separator between the chain alias and the Bech32 string.
pub const ALIAS_SEPARATOR: char = '-';

/// The parts of a decoded address string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAddress {
    pub chain_alias: String,
    pub hrp: String,
    pub bytes: Vec<u8>,
}

/// Render bytes as `<chain_alias>-<bech32(hrp, bytes)>`.
pub fn address_to_string(hrp: &str, chain_alias: &str, bytes: &[u8]) -> Result<String> {
    if chain_alias.is_empty() || chain_alias.contains(ALIAS_SEPARATOR) {
        return Err(CodecError::InvalidAddressFormat(format!(
            "chain alias {:?} must be non-empty and contain no '{}'",
            chain_alias, ALIAS_SEPARATOR
        )));
    }
    let encoded = bech32::encode(hrp, bytes.to_base32(), Variant::Bech32).map_err(|e| {
        CodecError::InvalidAddressFormat(format!("cannot encode with hrp {:?}: {}", hrp, e))
    })?;
    Ok(format!("{}{}{}", chain_alias, ALIAS_SEPARATOR, encoded))
}

/// Split and decode an address string without checking its network.
pub fn parse_address(address: &str) -> Result<ParsedAddress> {
    let address = address.trim();
    let (chain_alias, encoded) = address.split_once(ALIAS_SEPARATOR).ok_or_else(|| {
        CodecError::InvalidAddressFormat(format!("{:?} has no chain alias prefix", address))
    })?;
    if chain_alias.is_empty() {
        return Err(CodecError::InvalidAddressFormat(format!(
            "{:?} has an empty chain alias",
            address
        )));
    }

    let (hrp, data, variant) = bech32::decode(encoded).map_err(bech32_error)?;
    if variant != Variant::Bech32 {
        return Err(CodecError::InvalidAddressFormat(
            "bech32m addresses are not accepted".into(),
        ));
    }
    let bytes = Vec::<u8>::from_base32(&data).map_err(bech32_error)?;

    Ok(ParsedAddress {
        chain_alias: chain_alias.to_string(),
        hrp,
        bytes,
    })
}

/// Decode an address whose HRP must be one of `known_hrps`.
pub fn string_to_address<S: AsRef<str>>(address: &str, known_hrps: &[S]) -> Result<Vec<u8>> {
    let parsed = parse_address(address)?;
    if !known_hrps
        .iter()
        .any(|known| known.as_ref().eq_ignore_ascii_case(&parsed.hrp))
    {
        debug!(hrp = %parsed.hrp, "address uses an unknown hrp");
        return Err(CodecError::InvalidAddressFormat(format!(
            "unknown hrp {:?}",
            parsed.hrp
        )));
    }
    Ok(parsed.bytes)
}

/// Decode an address whose HRP must equal `expected_hrp`.
pub fn string_to_address_with_hrp(address: &str, expected_hrp: &str) -> Result<Vec<u8>> {
    let parsed = parse_address(address)?;
    if !parsed.hrp.eq_ignore_ascii_case(expected_hrp) {
        debug!(hrp = %parsed.hrp, expected = expected_hrp, "address hrp mismatch");
        return Err(CodecError::InvalidAddressFormat(format!(
            "expected hrp {:?}, found {:?}",
            expected_hrp, parsed.hrp
        )));
    }
    Ok(parsed.bytes)
}

fn bech32_error(err: bech32::Error) -> CodecError {
    match err {
        bech32::Error::InvalidChecksum => CodecError::ChecksumMismatch("bech32"),
        other => CodecError::InvalidAddressFormat(other.to_string()),
    }
}
