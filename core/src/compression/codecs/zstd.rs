//! src/compression/codecs/zstd.rs
//!
//! Zstd one-shot compressor.
//!
//! Design notes:
//! - Uses the bulk API (`zstd::bulk::Compressor`): every call emits a complete,
//!   standalone zstd frame, which is what makes a chunk independently seekable.
//! - The compression context is created once and reused across chunks.
//! - Errors are mapped into `CompressionError` variants with codec context.

use crate::compression::constants::{DEFAULT_LEVEL_ZSTD, MAX_LEVEL_ZSTD, MIN_LEVEL_ZSTD};
use crate::compression::types::{CompressionError, Compressor};

/// Zstd compressor producing one frame per chunk.
pub struct ZstdCompressor {
    inner: ::zstd::bulk::Compressor<'static>,
    level: i32,
}

impl ZstdCompressor {
    /// Create a new Zstd compressor with given level and optional dictionary.
    ///
    /// # Errors
    /// - `CompressionError::InvalidLevel` if `level` is outside `1..=22`.
    /// - `CompressionError::CodecInitFailed` if context initialization fails.
    pub fn new(level: i32, dict: Option<&[u8]>) -> Result<Self, CompressionError> {
        if !(MIN_LEVEL_ZSTD..=MAX_LEVEL_ZSTD).contains(&level) {
            return Err(CompressionError::InvalidLevel {
                codec: "zstd".into(),
                level,
                min: MIN_LEVEL_ZSTD,
                max: MAX_LEVEL_ZSTD,
            });
        }

        let inner = match dict {
            Some(d) => ::zstd::bulk::Compressor::with_dictionary(level, d),
            None => ::zstd::bulk::Compressor::new(level),
        }
        .map_err(|e| CompressionError::CodecInitFailed {
            codec: "zstd".into(),
            msg: e.to_string(),
        })?;

        Ok(Self { inner, level })
    }

    /// Compressor at `DEFAULT_LEVEL_ZSTD`, no dictionary.
    pub fn with_default_level() -> Result<Self, CompressionError> {
        Self::new(DEFAULT_LEVEL_ZSTD, None)
    }

    pub fn level(&self) -> i32 {
        self.level
    }
}

impl Compressor for ZstdCompressor {
    fn encode_all(&mut self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        self.inner
            .compress(input)
            .map_err(|e| CompressionError::CodecProcessFailed {
                codec: "zstd".into(),
                msg: e.to_string(),
            })
    }
}
