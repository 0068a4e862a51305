//! encoder/config.rs
//! Encoder limits.
//!
//! Both limits default to the largest value the u32 wire fields can hold.
//! Lower caps are useful to bound memory or to match a reader with tighter
//! limits.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{MAX_CHUNK_SIZE, MAX_NUMBER_OF_FRAMES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Largest chunk accepted, raw or compressed.
    pub max_chunk_size: u64,
    /// Largest number of entries `end_stream` will serialize.
    pub max_frames: u64,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: MAX_CHUNK_SIZE,
            max_frames: MAX_NUMBER_OF_FRAMES,
        }
    }
}

impl EncoderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_limit("max_chunk_size", self.max_chunk_size, MAX_CHUNK_SIZE)?;
        check_limit("max_frames", self.max_frames, MAX_NUMBER_OF_FRAMES)?;
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let cfg: EncoderConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

fn check_limit(field: &'static str, have: u64, max: u64) -> Result<(), ConfigError> {
    if have == 0 {
        return Err(ConfigError::ZeroLimit { field });
    }
    if have > max {
        return Err(ConfigError::LimitTooLarge { field, have, max });
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be non-zero")]
    ZeroLimit { field: &'static str },

    #[error("{field} too large: {have} > {max}")]
    LimitTooLarge { field: &'static str, have: u64, max: u64 },

    #[error("invalid encoder config: {0}")]
    Parse(#[from] serde_json::Error),
}
