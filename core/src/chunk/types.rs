use thiserror::Error;

use crate::compression::CompressionError;

#[derive(Debug, Error)]
pub enum ChunkError {
    /// Raw chunk does not fit the entry's u32 size field (or the configured cap).
    #[error("chunk size too big for seekable format: {have} > {max}")]
    ChunkTooLarge { have: usize, max: u64 },

    /// Codec output does not fit the entry's u32 size field (or the configured cap).
    #[error("result size too big for seekable format: {have} > {max}")]
    CompressedChunkTooLarge { have: usize, max: u64 },

    #[error(transparent)]
    Compression(#[from] CompressionError),
}

impl ChunkError {
    /// Either size bound was hit, raw or compressed.
    pub fn is_too_large(&self) -> bool {
        matches!(self, ChunkError::ChunkTooLarge { .. } | ChunkError::CompressedChunkTooLarge { .. })
    }
}
