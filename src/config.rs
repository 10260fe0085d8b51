// File: src/config.rs
use crate::core::resolver::LookupPolicy;
use crate::error::DataError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Optional table sources. Anything left unset uses the built-in seed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub dictionary: Option<PathBuf>,
    pub gestures: Option<PathBuf>,
    pub phrases: Option<PathBuf>,
    /// A bincode snapshot; takes precedence over the JSON tables.
    pub snapshot: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub max_input_chars: usize,
    pub lookup_timeout_ms: u64,
    pub max_concurrent_lookups: usize,
    /// Fail the call instead of silently dropping unresolved symbols.
    pub strict: bool,
    pub data: DataConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 200,
            lookup_timeout_ms: 2000,
            max_concurrent_lookups: 16,
            strict: false,
            data: DataConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, DataError> {
        let config: EngineConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, DataError> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DataError> {
        if self.max_input_chars == 0 {
            return Err(DataError::Invalid("max_input_chars must be positive".into()));
        }
        if self.lookup_timeout_ms == 0 {
            return Err(DataError::Invalid("lookup_timeout_ms must be positive".into()));
        }
        if self.max_concurrent_lookups == 0 {
            return Err(DataError::Invalid(
                "max_concurrent_lookups must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn lookup_policy(&self) -> LookupPolicy {
        LookupPolicy {
            timeout: Duration::from_millis(self.lookup_timeout_ms),
            concurrency: self.max_concurrent_lookups,
        }
    }
}
