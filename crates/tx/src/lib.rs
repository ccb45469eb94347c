//! Serializable transaction entities and interchange envelopes.
//!
//! Every entity implements [`Serializable`], which turns it into a field
//! table through the codec engine and back:
//!
//! ```text
//!  Tx ──► BaseTx ──► SECPTransferOutput / SECPTransferInput
//!   └──► SECPCredential
//!            │ get_fields / set_fields
//!            ▼
//!   {type, fields, typeID?}  ──wrap──►  {vm, encoding, fields}
//! ```
//!
//! # Example
//!
//! ```rust
//! use snowcodec_core::{Id, Serialization, SerializedEncoding};
//! use snowcodec_tx::{BaseTx, Keypair, SecpTransferInput, SecpTransferOutput, Serializable, Tx};
//!
//! let codec = Serialization::global();
//! let key = Keypair::generate();
//! let asset = Id([7; 32]);
//!
//! let unsigned = BaseTx::new(
//!     1,
//!     Id([1; 32]),
//!     vec![SecpTransferOutput::new(asset, 90, vec![key.short_id()])],
//!     vec![SecpTransferInput::new(Id([2; 32]), 0, asset, 100, vec![0])],
//! );
//! let tx = Tx::sign(unsigned, std::slice::from_ref(&key)).unwrap();
//!
//! let envelope = tx.to_envelope(codec, SerializedEncoding::Display).unwrap();
//! let back = Tx::from_envelope(codec, &envelope).unwrap();
//! assert_eq!(back, tx);
//! ```

pub mod credential;
pub mod crypto;
pub mod envelope;
pub mod error;
pub mod fields;
pub mod input;
pub mod output;
pub mod serializable;
pub mod tx;

// Re-export commonly used types
pub use credential::Credential;
pub use crypto::{CryptoError, Keypair, PublicKey, Signature};
pub use envelope::{describe, wrap, Envelope};
pub use error::{Result, TxError};
pub use fields::{FieldCodec, FieldMap};
pub use input::SecpTransferInput;
pub use output::SecpTransferOutput;
pub use serializable::Serializable;
pub use tx::{BaseTx, Tx};
