//! Conversion between canonical bytes and the ten serialized types.
//!
//! | type          | bytes -> value                  | value -> bytes                       |
//! |---------------|---------------------------------|--------------------------------------|
//! | hex           | lowercase hex                   | hex parse                            |
//! | Buffer        | identity                        | identity                             |
//! | BN            | big-endian unsigned integer     | minimal big-endian, padded to width  |
//! | number        | as BN, then `u64`               | as BN                                |
//! | decimalString | as BN, base 10                  | base-10 parse, then as BN            |
//! | cb58          | checksummed base58              | checksummed base58 decode            |
//! | base58        | base58                          | base58 decode                        |
//! | base64        | standard base64                 | standard base64 decode               |
//! | Bech32        | `<alias>-<bech32(hrp, bytes)>`  | address decode, hrp checked          |
//! | utf8          | UTF-8 text                      | UTF-8 bytes                          |

use crate::address;
use crate::checksum;
use crate::error::{CodecError, Result};
use crate::types::{Repr, SerializedType, Value};
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Encode a logical value into canonical bytes.
pub fn value_to_buffer(value: &Value, repr: Repr<'_>) -> Result<Vec<u8>> {
    let kind = repr.kind();
    match repr {
        Repr::Hex => hex::decode(text(value, kind)?).map_err(|e| CodecError::invalid(kind, e)),
        Repr::Buffer => match value {
            Value::Bytes(bytes) => Ok(bytes.clone()),
            other => Err(mismatch(kind, other)),
        },
        Repr::Bn { width } | Repr::Number { width } => match value {
            Value::Integer(n) => integer_to_bytes(n, width),
            Value::Number(n) => integer_to_bytes(&BigUint::from(*n), width),
            other => Err(mismatch(kind, other)),
        },
        Repr::DecimalString { width } => {
            let n = parse_decimal(text(value, kind)?)?;
            integer_to_bytes(&n, width)
        }
        Repr::Cb58 => checksum::decode_checksummed(text(value, kind)?),
        Repr::Base58 => checksum::decode_base58(text(value, kind)?),
        Repr::Base64 => B64
            .decode(text(value, kind)?)
            .map_err(|e| CodecError::invalid(kind, e)),
        Repr::Bech32 { hrp, .. } => address::string_to_address_with_hrp(text(value, kind)?, hrp),
        Repr::Utf8 => Ok(text(value, kind)?.as_bytes().to_vec()),
    }
}

/// Decode canonical bytes into a logical value.
pub fn buffer_to_value(bytes: &[u8], repr: Repr<'_>) -> Result<Value> {
    let kind = repr.kind();
    Ok(match repr {
        Repr::Hex => Value::Text(hex::encode(bytes)),
        Repr::Buffer => Value::Bytes(bytes.to_vec()),
        Repr::Bn { .. } => Value::Integer(BigUint::from_bytes_be(bytes)),
        Repr::Number { .. } => {
            let n = BigUint::from_bytes_be(bytes);
            let native = n
                .to_u64()
                .ok_or_else(|| CodecError::NumberOutOfRange(n.to_string()))?;
            Value::Number(native)
        }
        Repr::DecimalString { .. } => Value::Text(BigUint::from_bytes_be(bytes).to_str_radix(10)),
        Repr::Cb58 => Value::Text(checksum::encode_checksummed(bytes)),
        Repr::Base58 => Value::Text(checksum::encode_base58(bytes)),
        Repr::Base64 => Value::Text(B64.encode(bytes)),
        Repr::Bech32 { hrp, chain_alias } => {
            Value::Text(address::address_to_string(hrp, chain_alias, bytes)?)
        }
        Repr::Utf8 => Value::Text(
            String::from_utf8(bytes.to_vec()).map_err(|e| CodecError::invalid(kind, e))?,
        ),
    })
}

/// Minimal big-endian bytes of `n`, left-padded with zeros to `width`.
///
/// Zero has no significant bytes, so without a width it encodes as an
/// empty buffer.
fn integer_to_bytes(n: &BigUint, width: Option<usize>) -> Result<Vec<u8>> {
    let minimal = if n.is_zero() {
        Vec::new()
    } else {
        n.to_bytes_be()
    };
    let Some(width) = width else {
        return Ok(minimal);
    };
    if minimal.len() > width {
        return Err(CodecError::WidthOverflow {
            width,
            needed: minimal.len(),
        });
    }
    let mut out = vec![0u8; width - minimal.len()];
    out.extend_from_slice(&minimal);
    Ok(out)
}

fn parse_decimal(s: &str) -> Result<BigUint> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::invalid(
            SerializedType::DecimalString,
            format!("{:?} is not an unsigned base-10 integer", s),
        ));
    }
    BigUint::parse_bytes(s.as_bytes(), 10).ok_or_else(|| {
        CodecError::invalid(SerializedType::DecimalString, format!("cannot parse {:?}", s))
    })
}

fn text(value: &Value, kind: SerializedType) -> Result<&str> {
    value.as_text().ok_or_else(|| mismatch(kind, value))
}

fn mismatch(kind: SerializedType, value: &Value) -> CodecError {
    CodecError::invalid(kind, format!("cannot take a {} value", value.shape()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<Vec<u8>> {
        vec![
            vec![],
            vec![0],
            vec![0, 0, 1],
            vec![0xff; 7],
            (0u8..=255).collect(),
            b"plain ascii".to_vec(),
        ]
    }

    #[test]
    fn test_byte_roundtrips() {
        for repr in [Repr::Hex, Repr::Base58, Repr::Base64, Repr::Cb58, Repr::Buffer] {
            for bytes in samples() {
                let value = buffer_to_value(&bytes, repr).unwrap();
                assert_eq!(value_to_buffer(&value, repr).unwrap(), bytes, "{:?}", repr);
            }
        }
    }

    #[test]
    fn test_utf8_roundtrip() {
        for text in ["", "hello", "snow \u{2744} flake"] {
            let bytes = value_to_buffer(&Value::from(text), Repr::Utf8).unwrap();
            assert_eq!(bytes, text.as_bytes());
            assert_eq!(buffer_to_value(&bytes, Repr::Utf8).unwrap(), Value::from(text));
        }
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let err = buffer_to_value(&[0xff, 0xfe], Repr::Utf8).unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidValue {
                kind: SerializedType::Utf8,
                ..
            }
        ));
    }

    #[test]
    fn test_fixed_width_bn() {
        let bytes =
            value_to_buffer(&Value::Integer(BigUint::from(255u32)), Repr::Bn { width: Some(4) })
                .unwrap();
        assert_eq!(bytes, vec![0x00, 0x00, 0x00, 0xff]);
    }

    #[test]
    fn test_amount_to_decimal_string() {
        let bytes =
            value_to_buffer(&Value::Integer(BigUint::from(100u32)), Repr::Bn { width: Some(8) })
                .unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 0, 0, 0, 0, 0x64]);
        let value = buffer_to_value(&bytes, Repr::DecimalString { width: Some(8) }).unwrap();
        assert_eq!(value, Value::from("100"));
    }

    #[test]
    fn test_unpadded_integers() {
        let bytes = value_to_buffer(&Value::Number(256), Repr::Number { width: None }).unwrap();
        assert_eq!(bytes, vec![0x01, 0x00]);
        let bytes = value_to_buffer(&Value::Number(0), Repr::Number { width: None }).unwrap();
        assert!(bytes.is_empty());
        assert_eq!(
            buffer_to_value(&bytes, Repr::DecimalString { width: None }).unwrap(),
            Value::from("0")
        );
    }

    #[test]
    fn test_width_overflow() {
        let err = value_to_buffer(&Value::Number(0x1_0000), Repr::Number { width: Some(2) })
            .unwrap_err();
        assert_eq!(err, CodecError::WidthOverflow { width: 2, needed: 3 });
    }

    #[test]
    fn test_decimal_string_large() {
        let big = "340282366920938463463374607431768211456"; // 2^128
        let bytes =
            value_to_buffer(&Value::from(big), Repr::DecimalString { width: Some(32) }).unwrap();
        assert_eq!(bytes.len(), 32);
        assert_eq!(bytes[15], 0x01);
        assert_eq!(
            buffer_to_value(&bytes, Repr::DecimalString { width: Some(32) }).unwrap(),
            Value::from(big)
        );
    }

    #[test]
    fn test_negative_and_junk_decimals_rejected() {
        for bad in ["-100", "", "12a", "1_000", " 5"] {
            let err = value_to_buffer(&Value::from(bad), Repr::DecimalString { width: None })
                .unwrap_err();
            assert!(
                matches!(
                    err,
                    CodecError::InvalidValue {
                        kind: SerializedType::DecimalString,
                        ..
                    }
                ),
                "{:?} accepted",
                bad
            );
        }
    }

    #[test]
    fn test_leading_zeros_tolerated() {
        let bytes = [0, 0, 0, 0, 0, 0, 0x30, 0x39];
        let value = buffer_to_value(&bytes, Repr::Number { width: Some(8) }).unwrap();
        assert_eq!(value, Value::Number(12345));
    }

    #[test]
    fn test_number_out_of_range() {
        let err = buffer_to_value(&[1; 9], Repr::Number { width: None }).unwrap_err();
        assert!(matches!(err, CodecError::NumberOutOfRange(_)));
    }

    #[test]
    fn test_bech32_roundtrip() {
        let bytes = [7u8; 20];
        let repr = Repr::Bech32 {
            hrp: "avax",
            chain_alias: "X",
        };
        let value = buffer_to_value(&bytes, repr).unwrap();
        assert!(value.as_text().unwrap().starts_with("X-avax1"));
        assert_eq!(value_to_buffer(&value, repr).unwrap(), bytes);

        let wrong = Repr::Bech32 {
            hrp: "fuji",
            chain_alias: "X",
        };
        assert!(matches!(
            value_to_buffer(&value, wrong),
            Err(CodecError::InvalidAddressFormat(_))
        ));
    }

    #[test]
    fn test_shape_mismatch() {
        assert!(value_to_buffer(&Value::Number(1), Repr::Hex).is_err());
        assert!(value_to_buffer(&Value::from("00"), Repr::Buffer).is_err());
        assert!(value_to_buffer(&Value::Bytes(vec![1]), Repr::Bn { width: None }).is_err());
    }

    #[test]
    fn test_invalid_hex() {
        assert!(value_to_buffer(&Value::from("abc"), Repr::Hex).is_err());
        assert!(value_to_buffer(&Value::from("zz"), Repr::Hex).is_err());
    }
}
