//! Codec configuration: network HRPs and document defaults.

use serde::{Deserialize, Serialize};

/// Network id to HRP table.
const NETWORK_HRPS: [(u32, &str); 7] = [
    (0, "custom"),
    (1, "avax"),
    (2, "cascade"),
    (3, "denali"),
    (4, "everest"),
    (5, "fuji"),
    (12345, "local"),
];

/// Look up the HRP for a network id.
pub fn hrp_for_network(network_id: u32) -> Option<&'static str> {
    NETWORK_HRPS
        .iter()
        .find(|(id, _)| *id == network_id)
        .map(|(_, hrp)| *hrp)
}

/// Look up the network id for an HRP.
pub fn network_for_hrp(hrp: &str) -> Option<u32> {
    NETWORK_HRPS
        .iter()
        .find(|(_, known)| known.eq_ignore_ascii_case(hrp))
        .map(|(id, _)| *id)
}

/// Configuration for the codec service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// HRPs accepted when decoding an address without an explicit network.
    pub known_hrps: Vec<String>,
    /// HRP used when rendering addresses.
    pub hrp: String,
    /// Chain alias placed before rendered addresses.
    pub chain_alias: String,
    /// VM name written into envelopes.
    pub vm: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            known_hrps: NETWORK_HRPS.iter().map(|(_, hrp)| hrp.to_string()).collect(),
            hrp: "avax".to_string(),
            chain_alias: "X".to_string(),
            vm: "avm".to_string(),
        }
    }
}

impl CodecConfig {
    /// Default configuration for a known network id.
    pub fn for_network(network_id: u32) -> Option<Self> {
        let hrp = hrp_for_network(network_id)?;
        Some(Self {
            hrp: hrp.to_string(),
            ..Self::default()
        })
    }

    /// Set the chain alias and VM name.
    pub fn with_chain(mut self, chain_alias: impl Into<String>, vm: impl Into<String>) -> Self {
        self.chain_alias = chain_alias.into();
        self.vm = vm.into();
        self
    }

    /// Check whether an HRP is accepted.
    pub fn is_known_hrp(&self, hrp: &str) -> bool {
        self.known_hrps.iter().any(|known| known.eq_ignore_ascii_case(hrp))
    }
}
