//! The codec service and its hex/display encoding policy.
//!
//! `Serialization` is immutable and holds only its configuration, so one
//! instance can be shared by every caller. Construct it once and pass it
//! down, or use [`Serialization::global`] for the default network.

use crate::address;
use crate::config::CodecConfig;
use crate::convert;
use crate::error::Result;
use crate::types::{Repr, SerializedEncoding, Value};
use std::sync::OnceLock;
use tracing::{debug, trace};

/// Stateless codec service.
#[derive(Debug, Clone, Default)]
pub struct Serialization {
    config: CodecConfig,
}

impl Serialization {
    /// Create a service with the given configuration.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// The process-wide instance with the default configuration.
    pub fn global() -> &'static Serialization {
        static INSTANCE: OnceLock<Serialization> = OnceLock::new();
        INSTANCE.get_or_init(Serialization::default)
    }

    /// Get the configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Bech32 representation using the configured HRP and chain alias.
    pub fn address_repr(&self) -> Repr<'_> {
        Repr::Bech32 {
            hrp: &self.config.hrp,
            chain_alias: &self.config.chain_alias,
        }
    }

    /// Encode a logical value into canonical bytes.
    pub fn value_to_buffer(&self, value: &Value, repr: Repr<'_>) -> Result<Vec<u8>> {
        convert::value_to_buffer(value, repr)
    }

    /// Decode canonical bytes into a logical value.
    pub fn buffer_to_value(&self, bytes: &[u8], repr: Repr<'_>) -> Result<Value> {
        convert::buffer_to_value(bytes, repr)
    }

    /// Render an address with the configured HRP and chain alias.
    pub fn address_to_string(&self, bytes: &[u8]) -> Result<String> {
        address::address_to_string(&self.config.hrp, &self.config.chain_alias, bytes)
    }

    /// Decode an address on any configured network.
    pub fn string_to_address(&self, address: &str) -> Result<Vec<u8>> {
        address::string_to_address(address, self.config.known_hrps.as_slice())
    }

    /// Convert `value` from `from` to `to`.
    ///
    /// In hex mode the output is always hex, whatever `to` asks for.
    pub fn encode(
        &self,
        value: &Value,
        mode: SerializedEncoding,
        from: Repr<'_>,
        to: Repr<'_>,
    ) -> Result<Value> {
        let to = match mode {
            SerializedEncoding::Hex => Repr::Hex,
            SerializedEncoding::Display => to,
        };
        self.convert(value, from, to)
    }

    /// Convert `value` from `from` to `to`.
    ///
    /// In hex mode the input is always read as hex, whatever `from` says.
    pub fn decode(
        &self,
        value: &Value,
        mode: SerializedEncoding,
        from: Repr<'_>,
        to: Repr<'_>,
    ) -> Result<Value> {
        let from = match mode {
            SerializedEncoding::Hex => Repr::Hex,
            SerializedEncoding::Display => from,
        };
        self.convert(value, from, to)
    }

    fn convert(&self, value: &Value, from: Repr<'_>, to: Repr<'_>) -> Result<Value> {
        trace!(from = %from.kind(), to = %to.kind(), "converting value");
        let result = convert::value_to_buffer(value, from)
            .and_then(|bytes| convert::buffer_to_value(&bytes, to));
        if let Err(e) = &result {
            debug!(from = %from.kind(), to = %to.kind(), error = %e, "conversion failed");
        }
        result
    }
}
