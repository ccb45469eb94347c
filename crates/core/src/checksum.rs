//! Checksummed base58 ("cb58") and plain base58.
//!
//! A cb58 string is the base58 encoding of `payload || checksum`, where the
//! checksum is the last four bytes of SHA-256(payload).

use crate::error::{CodecError, Result};
use crate::types::SerializedType;
use sha2::{Digest, Sha256};
use tracing::debug;

/// Number of checksum bytes appended to a cb58 payload.
pub const CHECKSUM_LEN: usize = 4;

/// Compute the 4-byte checksum of a payload.
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha256::digest(payload);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[digest.len() - CHECKSUM_LEN..]);
    out
}

/// Encode bytes as cb58.
pub fn encode_checksummed(payload: &[u8]) -> String {
    let mut buf = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&checksum(payload));
    bs58::encode(buf).into_string()
}

/// Decode a cb58 string, verifying its checksum.
pub fn decode_checksummed(s: &str) -> Result<Vec<u8>> {
    let mut raw = bs58::decode(s)
        .into_vec()
        .map_err(|e| CodecError::invalid(SerializedType::Cb58, e))?;

    if raw.len() < CHECKSUM_LEN {
        debug!(len = raw.len(), "cb58 payload shorter than its checksum");
        return Err(CodecError::ChecksumMismatch("cb58"));
    }

    let claimed = raw.split_off(raw.len() - CHECKSUM_LEN);
    if checksum(&raw)[..] != claimed[..] {
        debug!(input = s, "cb58 checksum mismatch");
        return Err(CodecError::ChecksumMismatch("cb58"));
    }
    Ok(raw)
}

/// Encode bytes as plain base58.
pub fn encode_base58(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Decode a plain base58 string.
pub fn decode_base58(s: &str) -> Result<Vec<u8>> {
    bs58::decode(s)
        .into_vec()
        .map_err(|e| CodecError::invalid(SerializedType::Base58, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

    #[test]
    fn test_cb58_roundtrip() {
        let payload: Vec<u8> = (0u8..32).collect();
        let encoded = encode_checksummed(&payload);
        assert_eq!(decode_checksummed(&encoded).unwrap(), payload);
    }

    #[test]
    fn test_cb58_empty_payload() {
        let encoded = encode_checksummed(&[]);
        assert!(!encoded.is_empty());
        assert_eq!(decode_checksummed(&encoded).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_cb58_leading_zeros_preserved() {
        let payload = vec![0, 0, 0, 1, 2, 3];
        let encoded = encode_checksummed(&payload);
        assert!(encoded.starts_with("111"));
        assert_eq!(decode_checksummed(&encoded).unwrap(), payload);
    }

    #[test]
    fn test_cb58_single_character_corruption() {
        let payload = [0x5au8; 32];
        let encoded = encode_checksummed(&payload);

        for (i, original) in encoded.char_indices() {
            let replacement = ALPHABET.chars().find(|c| *c != original).unwrap();
            let mut corrupted: Vec<char> = encoded.chars().collect();
            corrupted[i] = replacement;
            let corrupted: String = corrupted.into_iter().collect();

            assert_eq!(
                decode_checksummed(&corrupted),
                Err(CodecError::ChecksumMismatch("cb58")),
                "corruption at position {} was accepted",
                i
            );
        }
    }

    #[test]
    fn test_cb58_too_short() {
        let encoded = encode_base58(&[1, 2, 3]);
        assert_eq!(
            decode_checksummed(&encoded),
            Err(CodecError::ChecksumMismatch("cb58"))
        );
    }

    #[test]
    fn test_cb58_invalid_alphabet() {
        let err = decode_checksummed("0OIl").unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidValue {
                kind: SerializedType::Cb58,
                ..
            }
        ));
    }

    #[test]
    fn test_base58_roundtrip() {
        for payload in [vec![], vec![0u8], vec![0, 0, 255], b"hello world".to_vec()] {
            let encoded = encode_base58(&payload);
            assert_eq!(decode_base58(&encoded).unwrap(), payload);
        }
    }

    #[test]
    fn test_base58_known_vector() {
        assert_eq!(encode_base58(b"hello world"), "StV1DL6CwTryKyV");
    }

    #[test]
    fn test_checksum_is_sha256_tail() {
        // SHA-256("") = e3b0c442...7852b855
        assert_eq!(checksum(&[]), [0x78, 0x52, 0xb8, 0x55]);
    }
}
