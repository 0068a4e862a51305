//! src/chunk/encode.rs
//!
//! Design notes:
//! - The raw size is checked before the codec runs; the compressed size after.
//! - The checksum covers the decompressed bytes so a reader can verify what
//!   it hands back to its caller, not what it read from disk.
//! - Nothing is retained between calls: a failed chunk leaves no trace.

use log::{trace, warn};

use crate::compression::Compressor;
use crate::constants::MAX_CHUNK_SIZE;
use crate::chunk::types::ChunkError;
use crate::seek_table::FrameEntry;
use crate::utils::compute_checksum;

/// Compresses chunks one at a time and describes each with a `FrameEntry`.
pub struct ChunkEncoder {
    codec: Box<dyn Compressor + Send>,
    max_chunk_size: u64,
}

impl ChunkEncoder {
    pub fn new(codec: Box<dyn Compressor + Send>) -> Self {
        Self::with_max_chunk_size(codec, MAX_CHUNK_SIZE)
    }

    /// Encoder rejecting chunks (raw or compressed) above `max_chunk_size`.
    /// The cap never exceeds what a u32 entry field can hold.
    pub fn with_max_chunk_size(codec: Box<dyn Compressor + Send>, max_chunk_size: u64) -> Self {
        Self {
            codec,
            max_chunk_size: max_chunk_size.min(MAX_CHUNK_SIZE),
        }
    }

    pub fn max_chunk_size(&self) -> u64 {
        self.max_chunk_size
    }

    /// Compress `src` into one standalone frame.
    ///
    /// Returns the compressed bytes and the entry describing them. An empty
    /// `src` is a no-op: empty output, no entry, codec not called.
    ///
    /// # Errors
    /// - `ChunkError::ChunkTooLarge` if `src` exceeds the cap (codec not called).
    /// - `ChunkError::CompressedChunkTooLarge` if the codec output exceeds it.
    /// - `ChunkError::Compression` if the codec fails.
    pub fn encode(&mut self, src: &[u8]) -> Result<(Vec<u8>, Option<FrameEntry>), ChunkError> {
        if src.len() as u64 > self.max_chunk_size {
            warn!("rejecting chunk: {} bytes > {}", src.len(), self.max_chunk_size);
            return Err(ChunkError::ChunkTooLarge { have: src.len(), max: self.max_chunk_size });
        }

        if src.is_empty() {
            return Ok((Vec::new(), None));
        }

        let dst = self.codec.encode_all(src)?;

        if dst.len() as u64 > self.max_chunk_size {
            warn!("rejecting compressed chunk: {} bytes > {}", dst.len(), self.max_chunk_size);
            return Err(ChunkError::CompressedChunkTooLarge { have: dst.len(), max: self.max_chunk_size });
        }

        // Both lengths are within max_chunk_size <= u32::MAX.
        let entry = FrameEntry {
            compressed_size: dst.len() as u32,
            decompressed_size: src.len() as u32,
            checksum: compute_checksum(src),
        };
        trace!(
            "chunk encoded: {} -> {} bytes, checksum {:08x}",
            entry.decompressed_size, entry.compressed_size, entry.checksum
        );

        Ok((dst, Some(entry)))
    }
}
