//! Base transactions, signing, and signed transactions.

use crate::credential::Credential;
use crate::crypto::{Keypair, PublicKey};
use crate::error::{Result, TxError};
use crate::fields::{require, require_array, FieldCodec, FieldMap};
use crate::input::SecpTransferInput;
use crate::output::SecpTransferOutput;
use crate::serializable::{describe_all, from_descriptors, Serializable};
use snowcodec_core::{Id, Repr, Serialization, SerializedEncoding};
use tracing::debug;

/// An unsigned transfer between outputs on one blockchain.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct BaseTx {
    pub network_id: u32,
    pub blockchain_id: Id,
    pub outputs: Vec<SecpTransferOutput>,
    pub inputs: Vec<SecpTransferInput>,
    pub memo: Vec<u8>,
}

impl BaseTx {
    pub fn new(
        network_id: u32,
        blockchain_id: Id,
        outputs: Vec<SecpTransferOutput>,
        inputs: Vec<SecpTransferInput>,
    ) -> Self {
        Self {
            network_id,
            blockchain_id,
            outputs,
            inputs,
            memo: Vec::new(),
        }
    }

    pub fn with_memo(mut self, memo: impl Into<Vec<u8>>) -> Self {
        self.memo = memo.into();
        self
    }

    /// Canonical binary form, the bytes that get signed.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Blake3 hash of the canonical bytes.
    pub fn tx_id(&self) -> Result<Id> {
        Ok(Id(blake3::hash(&self.to_bytes()?).into()))
    }

    /// Sum of input amounts minus sum of output amounts, if inputs cover outputs.
    pub fn fee(&self) -> Option<u64> {
        let consumed = self
            .inputs
            .iter()
            .try_fold(0u64, |acc, i| acc.checked_add(i.amount))?;
        let produced = self
            .outputs
            .iter()
            .try_fold(0u64, |acc, o| acc.checked_add(o.amount))?;
        consumed.checked_sub(produced)
    }
}

impl Serializable for BaseTx {
    const TYPE_NAME: &'static str = "BaseTx";
    const TYPE_ID: Option<u32> = Some(0);

    fn get_fields(&self, codec: &Serialization, encoding: SerializedEncoding) -> Result<FieldMap> {
        let fc = FieldCodec::new(codec, encoding);
        let mut fields = FieldMap::new();
        fields.insert("networkID".into(), fc.put_u32(self.network_id)?);
        fields.insert("blockchainID".into(), fc.put_id(&self.blockchain_id)?);
        fields.insert("outs".into(), describe_all(&self.outputs, codec, encoding)?);
        fields.insert("ins".into(), describe_all(&self.inputs, codec, encoding)?);
        fields.insert("memo".into(), fc.put_bytes(&self.memo, Repr::Base64)?);
        Ok(fields)
    }

    fn set_fields(
        &mut self,
        codec: &Serialization,
        fields: &FieldMap,
        encoding: SerializedEncoding,
    ) -> Result<()> {
        let fc = FieldCodec::new(codec, encoding);
        self.network_id = fc.get_u32(fields, "networkID")?;
        self.blockchain_id = fc.get_id(fields, "blockchainID")?;
        self.outputs = from_descriptors(codec, require_array(fields, "outs")?, encoding)?;
        self.inputs = from_descriptors(codec, require_array(fields, "ins")?, encoding)?;
        self.memo = fc.get_bytes(fields, "memo", Repr::Base64)?;
        Ok(())
    }
}

/// A base transaction with one credential per input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tx {
    pub unsigned: BaseTx,
    pub credentials: Vec<Credential>,
}

impl Tx {
    /// Sign every input of `unsigned`.
    ///
    /// Each entry of an input's `sig_indices` selects the key in `keys` that
    /// signs for it.
    pub fn sign(unsigned: BaseTx, keys: &[Keypair]) -> Result<Self> {
        let message = unsigned.tx_id()?;
        let credentials = unsigned
            .inputs
            .iter()
            .map(|input| {
                let signatures = input
                    .sig_indices
                    .iter()
                    .map(|&idx| {
                        keys.get(idx as usize)
                            .map(|kp| kp.sign(message.as_bytes()))
                            .ok_or(TxError::UnknownSigner(idx))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Credential::new(signatures))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(tx_id = %message, credentials = credentials.len(), "signed transaction");
        Ok(Self {
            unsigned,
            credentials,
        })
    }

    /// The id of the unsigned transaction.
    pub fn tx_id(&self) -> Result<Id> {
        self.unsigned.tx_id()
    }

    /// Check every credential against the keys its input names.
    pub fn verify(&self, public_keys: &[PublicKey]) -> Result<()> {
        let inputs = &self.unsigned.inputs;
        if inputs.len() != self.credentials.len() {
            return Err(TxError::CredentialCount {
                inputs: inputs.len(),
                credentials: self.credentials.len(),
            });
        }

        let message = self.tx_id()?;
        for (n, (input, credential)) in inputs.iter().zip(&self.credentials).enumerate() {
            if input.sig_indices.len() != credential.signatures.len() {
                return Err(TxError::SignatureCount {
                    input: n,
                    expected: input.sig_indices.len(),
                    found: credential.signatures.len(),
                });
            }
            for (&idx, signature) in input.sig_indices.iter().zip(&credential.signatures) {
                let key = public_keys
                    .get(idx as usize)
                    .ok_or(TxError::UnknownSigner(idx))?;
                key.verify(message.as_bytes(), signature)?;
            }
        }
        Ok(())
    }
}

impl Serializable for Tx {
    const TYPE_NAME: &'static str = "Tx";

    fn get_fields(&self, codec: &Serialization, encoding: SerializedEncoding) -> Result<FieldMap> {
        let mut fields = FieldMap::new();
        fields.insert("unsignedTx".into(), self.unsigned.describe(codec, encoding)?);
        fields.insert(
            "credentials".into(),
            describe_all(&self.credentials, codec, encoding)?,
        );
        Ok(fields)
    }

    fn set_fields(
        &mut self,
        codec: &Serialization,
        fields: &FieldMap,
        encoding: SerializedEncoding,
    ) -> Result<()> {
        self.unsigned = BaseTx::from_descriptor(codec, require(fields, "unsignedTx")?, encoding)?;
        self.credentials =
            from_descriptors(codec, require_array(fields, "credentials")?, encoding)?;
        Ok(())
    }
}
