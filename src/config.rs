use std::path::Path;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_DECIMALS, DEFAULT_SYMBOL, DEFAULT_TOKEN_ADDRESS, MAX_SHORT_STRING};

/// Static token metadata and deployment address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenConfig {
    /// Returned by `name()`
    pub name: String,
    /// Returned by `symbol()`
    pub symbol: String,
    /// Returned by `decimals()`
    pub decimals: u8,
    /// Account the token storage is allocated under in genesis exports
    pub contract_address: Address,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SYMBOL.to_string(),
            symbol: DEFAULT_SYMBOL.to_string(),
            decimals: DEFAULT_DECIMALS,
            contract_address: DEFAULT_TOKEN_ADDRESS,
        }
    }
}

/// Errors loading or validating a [`TokenConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Name or symbol does not fit a short-string result
    #[error("{field} is {len} bytes, at most 32 allowed")]
    TooLong {
        /// Offending field
        field: &'static str,
        /// Its length in bytes
        len: usize,
    },
}

impl TokenConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("name", &self.name), ("symbol", &self.symbol)] {
            if value.len() > MAX_SHORT_STRING {
                return Err(ConfigError::TooLong {
                    field,
                    len: value.len(),
                });
            }
        }
        Ok(())
    }
}
