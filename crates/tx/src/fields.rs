//! Field tables and the helpers entities use to fill and read them.
//!
//! A field is written by converting its canonical bytes through the codec
//! engine: in hex mode every field becomes the hex of its fixed-width bytes,
//! in display mode it takes its human form (cb58 id, Bech32 address,
//! decimal amount, ...). Reading reverses the same path.

use crate::error::{Result, TxError};
use serde_json::Value as JsonValue;
use snowcodec_core::{
    Id, Repr, Serialization, SerializedEncoding, SerializedType, ShortId, Value,
};

/// An insertion-ordered map of field name to document value.
pub type FieldMap = serde_json::Map<String, JsonValue>;

/// Amounts and locktimes are 8-byte big-endian integers.
pub const U64_WIDTH: usize = 8;
/// Indices, thresholds and network ids are 4-byte big-endian integers.
pub const U32_WIDTH: usize = 4;

const U64: Repr<'static> = Repr::Number {
    width: Some(U64_WIDTH),
};
const AMOUNT: Repr<'static> = Repr::DecimalString {
    width: Some(U64_WIDTH),
};
const U32: Repr<'static> = Repr::Number {
    width: Some(U32_WIDTH),
};

/// Render a converter output as a document value.
pub fn value_to_json(value: Value) -> JsonValue {
    match value {
        Value::Text(s) => JsonValue::String(s),
        Value::Number(n) => JsonValue::from(n),
        Value::Integer(n) => JsonValue::String(n.to_str_radix(10)),
        Value::Bytes(b) => JsonValue::String(hex::encode(b)),
    }
}

/// Read a document value as the input of a `kind` conversion.
pub fn json_to_value(
    json: &JsonValue,
    kind: SerializedType,
) -> std::result::Result<Value, String> {
    match kind {
        SerializedType::Number => json
            .as_u64()
            .map(Value::Number)
            .ok_or_else(|| format!("expected an unsigned number, found {}", json)),
        SerializedType::Bn => match json {
            JsonValue::Number(n) => n
                .as_u64()
                .map(|n| Value::Integer(n.into()))
                .ok_or_else(|| format!("expected an unsigned integer, found {}", n)),
            JsonValue::String(s) => s
                .parse()
                .map(Value::Integer)
                .map_err(|_| format!("expected a decimal integer, found {:?}", s)),
            other => Err(format!("expected an integer, found {}", other)),
        },
        SerializedType::Buffer => {
            let s = json
                .as_str()
                .ok_or_else(|| format!("expected a hex string, found {}", json))?;
            hex::decode(s)
                .map(Value::Bytes)
                .map_err(|e| format!("bad hex {:?}: {}", s, e))
        }
        _ => json
            .as_str()
            .map(|s| Value::Text(s.to_string()))
            .ok_or_else(|| format!("expected a string, found {}", json)),
    }
}

/// Look up a required field.
pub fn require<'m>(fields: &'m FieldMap, key: &str) -> Result<&'m JsonValue> {
    fields
        .get(key)
        .ok_or_else(|| TxError::malformed(format!("missing field {:?}", key)))
}

/// Look up a required array field.
pub fn require_array<'m>(fields: &'m FieldMap, key: &str) -> Result<&'m Vec<JsonValue>> {
    require(fields, key)?
        .as_array()
        .ok_or_else(|| TxError::malformed(format!("field {:?} is not an array", key)))
}

/// A codec bound to one document encoding.
#[derive(Debug, Clone, Copy)]
pub struct FieldCodec<'a> {
    codec: &'a Serialization,
    encoding: SerializedEncoding,
}

impl<'a> FieldCodec<'a> {
    pub fn new(codec: &'a Serialization, encoding: SerializedEncoding) -> Self {
        Self { codec, encoding }
    }

    /// Convert `value` read as `from` into its document form `display`.
    pub fn encode(&self, value: Value, from: Repr<'_>, display: Repr<'_>) -> Result<JsonValue> {
        let out = self.codec.encode(&value, self.encoding, from, display)?;
        Ok(value_to_json(out))
    }

    /// Convert a document value in form `display` back into `to`.
    pub fn decode(
        &self,
        json: &JsonValue,
        key: &str,
        display: Repr<'_>,
        to: Repr<'_>,
    ) -> Result<Value> {
        let kind = match self.encoding {
            SerializedEncoding::Hex => SerializedType::Hex,
            SerializedEncoding::Display => display.kind(),
        };
        let value = json_to_value(json, kind)
            .map_err(|reason| TxError::malformed(format!("field {:?}: {}", key, reason)))?;
        Ok(self.codec.decode(&value, self.encoding, display, to)?)
    }

    pub fn put_id(&self, id: &Id) -> Result<JsonValue> {
        self.encode(Value::Bytes(id.0.to_vec()), Repr::Buffer, Repr::Cb58)
    }

    pub fn get_id(&self, fields: &FieldMap, key: &str) -> Result<Id> {
        let bytes = self.decode_bytes(require(fields, key)?, key, Repr::Cb58)?;
        Ok(Id::from_slice(&bytes)?)
    }

    pub fn put_short_id(&self, id: &ShortId) -> Result<JsonValue> {
        self.encode(
            Value::Bytes(id.0.to_vec()),
            Repr::Buffer,
            self.codec.address_repr(),
        )
    }

    pub fn get_short_id(&self, json: &JsonValue, key: &str) -> Result<ShortId> {
        let bytes = self.decode_bytes(json, key, self.codec.address_repr())?;
        Ok(ShortId::from_slice(&bytes)?)
    }

    /// An 8-byte amount, shown as a decimal string.
    pub fn put_amount(&self, amount: u64) -> Result<JsonValue> {
        self.encode(Value::Number(amount), U64, AMOUNT)
    }

    pub fn get_amount(&self, fields: &FieldMap, key: &str) -> Result<u64> {
        self.decode_number(require(fields, key)?, key, AMOUNT, U64)
    }

    /// An 8-byte integer, shown as a number.
    pub fn put_u64(&self, n: u64) -> Result<JsonValue> {
        self.encode(Value::Number(n), U64, U64)
    }

    pub fn get_u64(&self, fields: &FieldMap, key: &str) -> Result<u64> {
        self.decode_number(require(fields, key)?, key, U64, U64)
    }

    /// A 4-byte integer, shown as a number.
    pub fn put_u32(&self, n: u32) -> Result<JsonValue> {
        self.encode(Value::Number(u64::from(n)), U32, U32)
    }

    pub fn get_u32(&self, fields: &FieldMap, key: &str) -> Result<u32> {
        self.get_u32_value(require(fields, key)?, key)
    }

    pub fn get_u32_value(&self, json: &JsonValue, key: &str) -> Result<u32> {
        let n = self.decode_number(json, key, U32, U32)?;
        u32::try_from(n).map_err(|_| {
            TxError::malformed(format!("field {:?}: {} exceeds 32 bits", key, n))
        })
    }

    /// Raw bytes, shown as `display`.
    pub fn put_bytes(&self, bytes: &[u8], display: Repr<'_>) -> Result<JsonValue> {
        self.encode(Value::Bytes(bytes.to_vec()), Repr::Buffer, display)
    }

    pub fn get_bytes(&self, fields: &FieldMap, key: &str, display: Repr<'_>) -> Result<Vec<u8>> {
        self.decode_bytes(require(fields, key)?, key, display)
    }

    pub fn decode_bytes(
        &self,
        json: &JsonValue,
        key: &str,
        display: Repr<'_>,
    ) -> Result<Vec<u8>> {
        let value = self.decode(json, key, display, Repr::Buffer)?;
        let shape = value.shape();
        value.into_bytes().ok_or_else(|| {
            TxError::malformed(format!("field {:?}: expected bytes, got {}", key, shape))
        })
    }

    fn decode_number(
        &self,
        json: &JsonValue,
        key: &str,
        display: Repr<'_>,
        to: Repr<'_>,
    ) -> Result<u64> {
        let value = self.decode(json, key, display, to)?;
        value.as_number().ok_or_else(|| {
            TxError::malformed(format!(
                "field {:?}: expected a number, got {}",
                key,
                value.shape()
            ))
        })
    }
}
