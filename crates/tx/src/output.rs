//! Transfer outputs locked to a set of addresses.
//!
//! Addresses are 20-byte short ids derived from ed25519 public keys with
//! blake3 ([`crate::crypto::PublicKey::short_id`]).

use crate::error::{Result, TxError};
use crate::fields::{require_array, FieldCodec, FieldMap};
use crate::serializable::Serializable;
use snowcodec_core::{Id, Serialization, SerializedEncoding, ShortId};

/// An output paying `amount` of `asset_id`, spendable by `threshold` of
/// `addresses` once `locktime` has passed.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct SecpTransferOutput {
    pub asset_id: Id,
    pub amount: u64,
    pub locktime: u64,
    pub threshold: u32,
    pub addresses: Vec<ShortId>,
}

impl SecpTransferOutput {
    /// A single-signature output with no locktime.
    pub fn new(asset_id: Id, amount: u64, addresses: Vec<ShortId>) -> Self {
        Self {
            asset_id,
            amount,
            locktime: 0,
            threshold: 1,
            addresses,
        }
    }

    pub fn with_locktime(mut self, locktime: u64) -> Self {
        self.locktime = locktime;
        self
    }

    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }
}

impl Serializable for SecpTransferOutput {
    const TYPE_NAME: &'static str = "SECPTransferOutput";
    const TYPE_ID: Option<u32> = Some(7);

    fn get_fields(&self, codec: &Serialization, encoding: SerializedEncoding) -> Result<FieldMap> {
        let fc = FieldCodec::new(codec, encoding);
        let addresses = self
            .addresses
            .iter()
            .map(|a| fc.put_short_id(a))
            .collect::<Result<Vec<_>>>()?;

        let mut fields = FieldMap::new();
        fields.insert("assetID".into(), fc.put_id(&self.asset_id)?);
        fields.insert("amount".into(), fc.put_amount(self.amount)?);
        fields.insert("locktime".into(), fc.put_u64(self.locktime)?);
        fields.insert("threshold".into(), fc.put_u32(self.threshold)?);
        fields.insert("addresses".into(), addresses.into());
        Ok(fields)
    }

    fn set_fields(
        &mut self,
        codec: &Serialization,
        fields: &FieldMap,
        encoding: SerializedEncoding,
    ) -> Result<()> {
        let fc = FieldCodec::new(codec, encoding);
        let addresses = require_array(fields, "addresses")?
            .iter()
            .map(|a| fc.get_short_id(a, "addresses"))
            .collect::<Result<Vec<_>>>()?;
        let threshold = fc.get_u32(fields, "threshold")?;
        if threshold as usize > addresses.len() {
            return Err(TxError::malformed(format!(
                "threshold {} exceeds {} addresses",
                threshold,
                addresses.len()
            )));
        }

        self.asset_id = fc.get_id(fields, "assetID")?;
        self.amount = fc.get_amount(fields, "amount")?;
        self.locktime = fc.get_u64(fields, "locktime")?;
        self.threshold = threshold;
        self.addresses = addresses;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> SecpTransferOutput {
        SecpTransferOutput::new(Id([0x21; 32]), 100, vec![ShortId([1; 20]), ShortId([2; 20])])
            .with_locktime(1_700_000_000)
    }

    #[test]
    fn test_display_fields() {
        let codec = Serialization::global();
        let fields = sample().get_fields(codec, SerializedEncoding::Display).unwrap();
        assert_eq!(fields["amount"], json!("100"));
        assert_eq!(fields["threshold"], json!(1));
        assert_eq!(fields["assetID"], json!(Id([0x21; 32]).to_cb58()));
        let first = fields["addresses"][0].as_str().unwrap();
        assert!(first.starts_with("X-avax1"));
    }

    #[test]
    fn test_hex_fields() {
        let codec = Serialization::global();
        let fields = sample().get_fields(codec, SerializedEncoding::Hex).unwrap();
        assert_eq!(fields["amount"], json!("0000000000000064"));
        assert_eq!(fields["threshold"], json!("00000001"));
        assert_eq!(fields["addresses"][1], json!("02".repeat(20)));
    }

    #[test]
    fn test_roundtrip_both_encodings() {
        let codec = Serialization::global();
        let out = sample();
        for encoding in [SerializedEncoding::Hex, SerializedEncoding::Display] {
            let doc = Serializable::serialize(&out, codec, encoding).unwrap();
            let back =
                <SecpTransferOutput as Serializable>::deserialize(codec, &doc, encoding).unwrap();
            assert_eq!(back, out);
        }
    }

    #[test]
    fn test_threshold_above_addresses_rejected() {
        let codec = Serialization::global();
        let out = sample().with_threshold(3);
        let fields = out.get_fields(codec, SerializedEncoding::Display).unwrap();
        let mut fresh = SecpTransferOutput::default();
        assert!(matches!(
            fresh.set_fields(codec, &fields, SerializedEncoding::Display),
            Err(TxError::MalformedEnvelope(_))
        ));
    }

    #[test]
    fn test_missing_field_rejected() {
        let codec = Serialization::global();
        let mut fields = sample().get_fields(codec, SerializedEncoding::Display).unwrap();
        fields.remove("locktime");
        let mut fresh = SecpTransferOutput::default();
        assert!(matches!(
            fresh.set_fields(codec, &fields, SerializedEncoding::Display),
            Err(TxError::MalformedEnvelope(_))
        ));
    }
}
