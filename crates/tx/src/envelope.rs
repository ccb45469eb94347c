//! Entity descriptors and the `{vm, encoding, fields}` interchange envelope.
//!
//! Keys keep insertion order, so two producers that build the same entity
//! with the same VM name and encoding emit byte-identical documents.

use crate::error::{Result, TxError};
use crate::fields::FieldMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use snowcodec_core::SerializedEncoding;

/// Describe one entity as `{type, fields, typeID?}`.
///
/// `typeID` is only present for entities that take part in a
/// binary-discriminated union.
pub fn describe(type_name: &str, fields: FieldMap, type_id: Option<u32>) -> JsonValue {
    let mut obj = FieldMap::new();
    obj.insert("type".into(), JsonValue::String(type_name.to_string()));
    obj.insert("fields".into(), JsonValue::Object(fields));
    if let Some(id) = type_id {
        obj.insert("typeID".into(), JsonValue::from(id));
    }
    JsonValue::Object(obj)
}

/// Split a descriptor back into its fields, checking type name and id.
pub fn open<'d>(
    descriptor: &'d JsonValue,
    type_name: &str,
    type_id: Option<u32>,
) -> Result<&'d FieldMap> {
    let obj = descriptor
        .as_object()
        .ok_or_else(|| TxError::malformed(format!("{} descriptor is not an object", type_name)))?;

    match obj.get("type").and_then(JsonValue::as_str) {
        Some(found) if found == type_name => {}
        Some(found) => {
            return Err(TxError::malformed(format!(
                "expected type {:?}, found {:?}",
                type_name, found
            )))
        }
        None => return Err(TxError::malformed(format!("{} descriptor has no type", type_name))),
    }

    if let Some(expected) = type_id {
        let found = obj.get("typeID").and_then(JsonValue::as_u64);
        if found != Some(u64::from(expected)) {
            return Err(TxError::malformed(format!(
                "{} expects typeID {}, found {:?}",
                type_name, expected, found
            )));
        }
    }

    obj.get("fields")
        .and_then(JsonValue::as_object)
        .ok_or_else(|| TxError::malformed(format!("{} descriptor has no fields object", type_name)))
}

/// The top-level interchange document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub vm: String,
    pub encoding: SerializedEncoding,
    pub fields: JsonValue,
}

impl Envelope {
    /// Compact JSON, the form compared across implementations.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Wrap a field tree into an envelope.
pub fn wrap(fields: JsonValue, vm: impl Into<String>, encoding: SerializedEncoding) -> Envelope {
    Envelope {
        vm: vm.into(),
        encoding,
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_fields() -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("zeta".into(), json!("1"));
        fields.insert("alpha".into(), json!(2));
        fields
    }

    #[test]
    fn test_describe_with_and_without_type_id() {
        let with_id = describe("SECPTransferOutput", sample_fields(), Some(7));
        assert_eq!(with_id["typeID"], json!(7));
        let without = describe("Tx", sample_fields(), None);
        assert!(without.get("typeID").is_none());
    }

    #[test]
    fn test_describe_preserves_field_order() {
        let desc = describe("T", sample_fields(), None);
        assert_eq!(
            serde_json::to_string(&desc).unwrap(),
            r#"{"type":"T","fields":{"zeta":"1","alpha":2}}"#
        );
    }

    #[test]
    fn test_wrap_is_deterministic() {
        let fields = describe("T", sample_fields(), Some(1));
        let a = wrap(fields.clone(), "vmName", SerializedEncoding::Display)
            .to_json_string()
            .unwrap();
        let b = wrap(fields, "vmName", SerializedEncoding::Display)
            .to_json_string()
            .unwrap();
        assert_eq!(a, b);
        assert!(a.starts_with(r#"{"vm":"vmName","encoding":"display","fields":"#));
    }

    #[test]
    fn test_envelope_json_roundtrip() {
        let env = wrap(describe("T", sample_fields(), None), "avm", SerializedEncoding::Hex);
        let parsed = Envelope::from_json_str(&env.to_json_string().unwrap()).unwrap();
        assert_eq!(parsed, env);
    }

    #[test]
    fn test_open_checks_type_and_id() {
        let desc = describe("T", sample_fields(), Some(3));
        assert_eq!(open(&desc, "T", Some(3)).unwrap(), &sample_fields());
        assert!(matches!(open(&desc, "U", Some(3)), Err(TxError::MalformedEnvelope(_))));
        assert!(matches!(open(&desc, "T", Some(4)), Err(TxError::MalformedEnvelope(_))));
        assert!(matches!(open(&json!([]), "T", None), Err(TxError::MalformedEnvelope(_))));
        assert!(matches!(
            open(&json!({"type": "T"}), "T", None),
            Err(TxError::MalformedEnvelope(_))
        ));
    }
}
