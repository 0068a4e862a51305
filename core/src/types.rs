use thiserror::Error;

use crate::{
    chunk::ChunkError,
    compression::CompressionError,
    encoder::ConfigError,
    seek_table::SeekTableError,
    skippable::SkippableFrameError,
};

/// Unified error covering chunk, seek table, framing, codec and config failures.
/// - `From<T>` impls let `?` cross module boundaries.
/// - Every variant is returned synchronously; nothing is retried internally.
#[derive(Debug, Error)]
pub enum SeekableError {
    #[error("chunk error: {0}")]
    Chunk(#[from] ChunkError),

    #[error("seek table error: {0}")]
    SeekTable(#[from] SeekTableError),

    #[error("skippable frame error: {0}")]
    Frame(#[from] SkippableFrameError),

    #[error("compression error: {0}")]
    Compression(#[from] CompressionError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// `encode` or `end_stream` called after `end_stream`.
    #[error("stream already ended")]
    StreamClosed,
}

impl SeekableError {
    /// Raw or compressed chunk exceeded the size bound.
    pub fn is_chunk_too_large(&self) -> bool {
        matches!(self, SeekableError::Chunk(e) if e.is_too_large())
    }

    pub fn is_too_many_frames(&self) -> bool {
        matches!(self, SeekableError::SeekTable(SeekTableError::TooManyFrames { .. }))
    }
}

pub type Result<T> = std::result::Result<T, SeekableError>;
