//! encoder/core.rs
//!
//! The encoder facade.
//!
//! Design notes:
//! - `encode` returns each compressed chunk immediately; only its entry is
//!   kept. The caller writes chunks in order, then the `end_stream` frame.
//! - `end_stream` is terminal. Whatever it returns, the encoder is Closed
//!   afterwards and rejects further calls with `StreamClosed`.
//! - A failed `encode` changes nothing: no entry, no output.

use log::debug;

use crate::chunk::ChunkEncoder;
use crate::compression::{Compressor, ZstdCompressor};
use crate::constants::SEEKABLE_TAG;
use crate::encoder::config::EncoderConfig;
use crate::seek_table::{FrameEntry, SeekTableBuilder};
use crate::skippable;
use crate::telemetry::{EncoderCounters, Stage, TelemetrySnapshot, TelemetryTimer};
use crate::types::SeekableError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderState {
    /// Accepting chunks.
    Open,
    /// `end_stream` has run.
    Closed,
}

/// Byte-oriented seekable encoder.
///
/// Not synchronized: mutation takes `&mut self`. Wrap it in a `Mutex` or
/// feed it from one thread to share it.
pub struct Encoder {
    chunks: ChunkEncoder,
    table: SeekTableBuilder,
    state: EncoderState,
    counters: EncoderCounters,
    timer: TelemetryTimer,
}

impl Encoder {
    /// Encoder with default limits.
    pub fn new(codec: Box<dyn Compressor + Send>) -> Self {
        Self::build(codec, EncoderConfig::default())
    }

    /// Encoder with explicit limits.
    ///
    /// # Errors
    /// - `SeekableError::Config` if a limit is zero or exceeds the u32 bound.
    pub fn with_config(
        codec: Box<dyn Compressor + Send>,
        config: EncoderConfig,
    ) -> Result<Self, SeekableError> {
        config.validate()?;
        Ok(Self::build(codec, config))
    }

    /// Encoder over a fresh zstd context at `level`.
    pub fn zstd(level: i32) -> Result<Self, SeekableError> {
        Ok(Self::new(Box::new(ZstdCompressor::new(level, None)?)))
    }

    fn build(codec: Box<dyn Compressor + Send>, config: EncoderConfig) -> Self {
        Self {
            chunks: ChunkEncoder::with_max_chunk_size(codec, config.max_chunk_size),
            table: SeekTableBuilder::with_max_frames(config.max_frames),
            state: EncoderState::Open,
            counters: EncoderCounters::default(),
            timer: TelemetryTimer::new(),
        }
    }

    /// Compress one chunk and record it in the seek table.
    ///
    /// Returns the compressed frame; empty input returns empty output and
    /// records nothing.
    ///
    /// # Errors
    /// - `SeekableError::StreamClosed` after `end_stream`.
    /// - `SeekableError::Chunk` for size bound or codec failures.
    pub fn encode(&mut self, src: &[u8]) -> Result<Vec<u8>, SeekableError> {
        self.ensure_open()?;

        if src.is_empty() {
            self.counters.add_empty();
            return Ok(Vec::new());
        }

        let chunks = &mut self.chunks;
        let result = self.timer.time(Stage::Compress, || chunks.encode(src));

        match result {
            Ok((dst, Some(entry))) => {
                self.table.append(entry);
                self.counters.add_chunk(src.len(), dst.len());
                Ok(dst)
            }
            Ok((dst, None)) => Ok(dst),
            Err(e) => {
                self.counters.add_rejected();
                Err(e.into())
            }
        }
    }

    /// Serialize the seek table and wrap it in a skippable frame.
    ///
    /// The returned bytes go after the last chunk. The encoder is Closed
    /// afterwards, whether this succeeds or not.
    ///
    /// # Errors
    /// - `SeekableError::StreamClosed` if already called.
    /// - `SeekableError::SeekTable` (`TooManyFrames`) if the entry count
    ///   exceeds the configured cap; no bytes are produced.
    pub fn end_stream(&mut self) -> Result<Vec<u8>, SeekableError> {
        self.ensure_open()?;
        self.state = EncoderState::Closed;

        let table = &self.table;
        let frame = self.timer.time(Stage::Finalize, || -> Result<Vec<u8>, SeekableError> {
            let payload = table.finalize()?;
            Ok(skippable::wrap(SEEKABLE_TAG, &payload)?)
        })?;

        self.counters.add_seek_table(frame.len());
        debug!(
            "stream ended: {} frames, {} -> {} bytes, index frame {} bytes",
            self.table.len(),
            self.counters.bytes_decompressed,
            self.counters.bytes_compressed,
            frame.len()
        );
        Ok(frame)
    }

    fn ensure_open(&self) -> Result<(), SeekableError> {
        match self.state {
            EncoderState::Open => Ok(()),
            EncoderState::Closed => Err(SeekableError::StreamClosed),
        }
    }

    pub fn state(&self) -> EncoderState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == EncoderState::Closed
    }

    /// Entries recorded so far.
    pub fn frame_count(&self) -> usize {
        self.table.len()
    }

    pub fn entries(&self) -> &[FrameEntry] {
        self.table.entries()
    }

    pub fn telemetry(&self) -> TelemetrySnapshot {
        TelemetrySnapshot::from(&self.counters, &self.timer)
    }
}
