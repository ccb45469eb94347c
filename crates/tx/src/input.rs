//! Transfer inputs spending a previous output.

use crate::error::Result;
use crate::fields::{require_array, FieldCodec, FieldMap};
use crate::serializable::Serializable;
use snowcodec_core::{Id, Serialization, SerializedEncoding};

/// Spends output `output_index` of transaction `tx_id`.
///
/// `sig_indices` name which of the output's addresses sign for it.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct SecpTransferInput {
    pub tx_id: Id,
    pub output_index: u32,
    pub asset_id: Id,
    pub amount: u64,
    pub sig_indices: Vec<u32>,
}

impl SecpTransferInput {
    pub fn new(
        tx_id: Id,
        output_index: u32,
        asset_id: Id,
        amount: u64,
        sig_indices: Vec<u32>,
    ) -> Self {
        Self {
            tx_id,
            output_index,
            asset_id,
            amount,
            sig_indices,
        }
    }
}

impl Serializable for SecpTransferInput {
    const TYPE_NAME: &'static str = "SECPTransferInput";
    const TYPE_ID: Option<u32> = Some(5);

    fn get_fields(&self, codec: &Serialization, encoding: SerializedEncoding) -> Result<FieldMap> {
        let fc = FieldCodec::new(codec, encoding);
        let sig_indices = self
            .sig_indices
            .iter()
            .map(|i| fc.put_u32(*i))
            .collect::<Result<Vec<_>>>()?;

        let mut fields = FieldMap::new();
        fields.insert("txID".into(), fc.put_id(&self.tx_id)?);
        fields.insert("outputIndex".into(), fc.put_u32(self.output_index)?);
        fields.insert("assetID".into(), fc.put_id(&self.asset_id)?);
        fields.insert("amount".into(), fc.put_amount(self.amount)?);
        fields.insert("sigIndices".into(), sig_indices.into());
        Ok(fields)
    }

    fn set_fields(
        &mut self,
        codec: &Serialization,
        fields: &FieldMap,
        encoding: SerializedEncoding,
    ) -> Result<()> {
        let fc = FieldCodec::new(codec, encoding);
        let sig_indices = require_array(fields, "sigIndices")?
            .iter()
            .map(|i| fc.get_u32_value(i, "sigIndices"))
            .collect::<Result<Vec<_>>>()?;

        self.tx_id = fc.get_id(fields, "txID")?;
        self.output_index = fc.get_u32(fields, "outputIndex")?;
        self.asset_id = fc.get_id(fields, "assetID")?;
        self.amount = fc.get_amount(fields, "amount")?;
        self.sig_indices = sig_indices;
        Ok(())
    }
}
