//! Loading the codec configuration file.

use anyhow::{bail, Context, Result};
use snowcodec_core::CodecConfig;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load the configuration at `path`, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<CodecConfig> {
    let Some(path) = path else {
        return Ok(CodecConfig::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: CodecConfig = serde_json::from_str(&text)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    if !config.is_known_hrp(&config.hrp) {
        bail!(
            "hrp {:?} is not listed in known_hrps {:?}",
            config.hrp,
            config.known_hrps
        );
    }
    debug!(hrp = %config.hrp, alias = %config.chain_alias, vm = %config.vm, "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_path() {
        assert_eq!(load(None).unwrap(), CodecConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"hrp": "fuji", "chain_alias": "P", "vm": "platformvm"}}"#).unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.hrp, "fuji");
        assert_eq!(config.chain_alias, "P");
        assert!(config.is_known_hrp("avax"));
    }

    #[test]
    fn test_unknown_hrp_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"hrp": "btc"}}"#).unwrap();
        assert!(load(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(Some(&dir.path().join("absent.json"))).is_err());
    }
}
