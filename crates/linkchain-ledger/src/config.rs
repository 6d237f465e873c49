use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Payload of the genesis block when no configuration overrides it.
pub const DEFAULT_GENESIS_PAYLOAD: &str = "Genesis";

/// Construction parameters for a [`Chain`](crate::Chain).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Payload sealed into the genesis block.
    pub genesis_payload: String,
    /// Upper bound on the number of blocks, genesis included. `None` means
    /// the chain grows without limit.
    pub max_blocks: Option<usize>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            genesis_payload: DEFAULT_GENESIS_PAYLOAD.to_string(),
            max_blocks: None,
        }
    }
}

impl ChainConfig {
    /// Parse a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, LedgerError> {
        let config: Self = toml::from_str(text).map_err(|e| LedgerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| LedgerError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Reject settings that could never produce a valid chain.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.max_blocks == Some(0) {
            return Err(LedgerError::Config(
                "max_blocks must leave room for the genesis block".into(),
            ));
        }
        Ok(())
    }
}
