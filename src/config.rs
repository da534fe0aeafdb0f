use serde::Deserialize;

use crate::error::{ContractError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContractConfig {
    /// Prepended to every resource path, e.g. `/api/v1`. Empty by default.
    pub api_prefix: String,
}

impl ContractConfig {
    pub fn from_env() -> Result<Self> {
        let api_prefix = std::env::var("API_PREFIX").unwrap_or_default();
        Self::with_prefix(api_prefix)
    }

    pub fn with_prefix(api_prefix: impl Into<String>) -> Result<Self> {
        let api_prefix = api_prefix.into().trim().to_string();
        if !api_prefix.is_empty() && !api_prefix.starts_with('/') {
            return Err(ContractError::Config {
                message: format!("API_PREFIX must start with '/': {api_prefix}"),
            });
        }
        if api_prefix.ends_with('/') {
            return Err(ContractError::Config {
                message: format!("API_PREFIX must not end with '/': {api_prefix}"),
            });
        }
        Ok(Self { api_prefix })
    }
}
