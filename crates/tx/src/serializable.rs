//! The contract every document-producing entity implements.

use crate::envelope::{self, Envelope};
use crate::error::{Result, TxError};
use crate::fields::FieldMap;
use serde_json::Value as JsonValue;
use snowcodec_core::{Serialization, SerializedEncoding};

/// An entity that can be turned into a field table and rebuilt from one.
///
/// Implementors supply `get_fields` and `set_fields`; descriptors,
/// documents and envelopes are derived from those two.
pub trait Serializable: Default {
    /// The `type` written into descriptors.
    const TYPE_NAME: &'static str;
    /// The `typeID` written into descriptors, if the entity has one.
    const TYPE_ID: Option<u32> = None;

    /// Project the entity's own fields in the given encoding.
    fn get_fields(&self, codec: &Serialization, encoding: SerializedEncoding) -> Result<FieldMap>;

    /// Overwrite the entity from a field table in the given encoding.
    fn set_fields(
        &mut self,
        codec: &Serialization,
        fields: &FieldMap,
        encoding: SerializedEncoding,
    ) -> Result<()>;

    /// The `{type, fields, typeID?}` descriptor of this entity.
    fn describe(&self, codec: &Serialization, encoding: SerializedEncoding) -> Result<JsonValue> {
        let fields = self.get_fields(codec, encoding)?;
        Ok(envelope::describe(Self::TYPE_NAME, fields, Self::TYPE_ID))
    }

    /// Rebuild an entity from its descriptor.
    fn from_descriptor(
        codec: &Serialization,
        descriptor: &JsonValue,
        encoding: SerializedEncoding,
    ) -> Result<Self> {
        let fields = envelope::open(descriptor, Self::TYPE_NAME, Self::TYPE_ID)?;
        let mut entity = Self::default();
        entity.set_fields(codec, fields, encoding)?;
        Ok(entity)
    }

    /// The descriptor as a compact JSON document.
    fn serialize(&self, codec: &Serialization, encoding: SerializedEncoding) -> Result<String> {
        Ok(serde_json::to_string(&self.describe(codec, encoding)?)?)
    }

    /// Parse a document produced by [`Serializable::serialize`].
    fn deserialize(
        codec: &Serialization,
        document: &str,
        encoding: SerializedEncoding,
    ) -> Result<Self> {
        let descriptor: JsonValue = serde_json::from_str(document)?;
        Self::from_descriptor(codec, &descriptor, encoding)
    }

    /// Wrap the descriptor in an envelope named after the configured VM.
    fn to_envelope(&self, codec: &Serialization, encoding: SerializedEncoding) -> Result<Envelope> {
        let descriptor = self.describe(codec, encoding)?;
        Ok(envelope::wrap(descriptor, codec.config().vm.clone(), encoding))
    }

    /// Rebuild an entity from an envelope, using the envelope's encoding.
    ///
    /// The envelope must name the configured VM.
    fn from_envelope(codec: &Serialization, envelope: &Envelope) -> Result<Self> {
        let vm = &codec.config().vm;
        if envelope.vm != *vm {
            return Err(TxError::malformed(format!(
                "envelope is for vm {:?}, expected {:?}",
                envelope.vm, vm
            )));
        }
        Self::from_descriptor(codec, &envelope.fields, envelope.encoding)
    }
}

/// Describe every entity in a slice.
pub fn describe_all<T: Serializable>(
    items: &[T],
    codec: &Serialization,
    encoding: SerializedEncoding,
) -> Result<JsonValue> {
    let described = items
        .iter()
        .map(|item| item.describe(codec, encoding))
        .collect::<Result<Vec<_>>>()?;
    Ok(JsonValue::Array(described))
}

/// Rebuild every entity in a descriptor array.
pub fn from_descriptors<T: Serializable>(
    codec: &Serialization,
    descriptors: &[JsonValue],
    encoding: SerializedEncoding,
) -> Result<Vec<T>> {
    descriptors
        .iter()
        .map(|d| T::from_descriptor(codec, d, encoding))
        .collect()
}
