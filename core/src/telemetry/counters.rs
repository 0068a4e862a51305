//! telemetry/counters.rs
//! Mutable counters collected while a stream is encoded.

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderCounters {
    /// Chunks that produced a frame entry.
    pub frames_data: u64,
    /// Empty `encode` calls (no-ops).
    pub frames_empty: u64,
    /// Chunks rejected by a size bound or the codec.
    pub frames_rejected: u64,
    /// Seek table frames emitted (0 or 1 per stream).
    pub frames_seek_table: u64,
    pub bytes_decompressed: u64,
    pub bytes_compressed: u64,
    /// Skippable frame bytes, header included.
    pub bytes_overhead: u64,
}

impl EncoderCounters {
    /// Record one encoded chunk.
    pub fn add_chunk(&mut self, decompressed_len: usize, compressed_len: usize) {
        self.frames_data += 1;
        self.bytes_decompressed += decompressed_len as u64;
        self.bytes_compressed += compressed_len as u64;
    }

    pub fn add_empty(&mut self) {
        self.frames_empty += 1;
    }

    pub fn add_rejected(&mut self) {
        self.frames_rejected += 1;
    }

    /// Record the seek table frame.
    /// - `frame_len`: total encoded length of the skippable frame
    pub fn add_seek_table(&mut self, frame_len: usize) {
        self.frames_seek_table += 1;
        self.bytes_overhead += frame_len as u64;
    }

    /// Every byte handed back to the caller.
    pub fn output_bytes(&self) -> u64 {
        self.bytes_compressed + self.bytes_overhead
    }
}
