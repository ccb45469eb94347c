//! Credentials: the signatures authorising one input.
//!
//! The type tags and ids follow the SECP transfer family, but signatures
//! here are 64-byte ed25519 signatures (see [`crate::crypto`]), not
//! recoverable secp256k1 ones. Documents round-trip within this crate and
//! will not match secp256k1-signed vectors from other implementations.

use crate::crypto::Signature;
use crate::error::Result;
use crate::fields::{require_array, FieldCodec, FieldMap};
use crate::serializable::Serializable;
use snowcodec_core::{Repr, Serialization, SerializedEncoding};

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Credential {
    pub signatures: Vec<Signature>,
}

impl Credential {
    pub fn new(signatures: Vec<Signature>) -> Self {
        Self { signatures }
    }
}

impl Serializable for Credential {
    const TYPE_NAME: &'static str = "SECPCredential";
    const TYPE_ID: Option<u32> = Some(9);

    fn get_fields(&self, codec: &Serialization, encoding: SerializedEncoding) -> Result<FieldMap> {
        let fc = FieldCodec::new(codec, encoding);
        let sigs = self
            .signatures
            .iter()
            .map(|s| fc.put_bytes(s.as_bytes(), Repr::Cb58))
            .collect::<Result<Vec<_>>>()?;

        let mut fields = FieldMap::new();
        fields.insert("sigArray".into(), sigs.into());
        Ok(fields)
    }

    fn set_fields(
        &mut self,
        codec: &Serialization,
        fields: &FieldMap,
        encoding: SerializedEncoding,
    ) -> Result<()> {
        let fc = FieldCodec::new(codec, encoding);
        self.signatures = require_array(fields, "sigArray")?
            .iter()
            .map(|s| {
                let bytes = fc.decode_bytes(s, "sigArray", Repr::Cb58)?;
                Ok(Signature::from_slice(&bytes)?)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Keypair;
    use crate::error::TxError;
    use serde_json::json;

    #[test]
    fn test_roundtrip_both_encodings() {
        let codec = Serialization::global();
        let kp = Keypair::generate();
        let cred = Credential::new(vec![kp.sign(b"a"), kp.sign(b"b")]);
        for encoding in [SerializedEncoding::Hex, SerializedEncoding::Display] {
            let doc = Serializable::serialize(&cred, codec, encoding).unwrap();
            let back = <Credential as Serializable>::deserialize(codec, &doc, encoding).unwrap();
            assert_eq!(back, cred);
        }
    }

    #[test]
    fn test_short_signature_rejected() {
        let codec = Serialization::global();
        let mut fields = FieldMap::new();
        fields.insert("sigArray".into(), json!(["00".repeat(63)]));
        let mut cred = Credential::default();
        let err = cred
            .set_fields(codec, &fields, SerializedEncoding::Hex)
            .unwrap_err();
        assert!(matches!(err, TxError::Crypto(_)));
    }
}
