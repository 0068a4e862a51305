//! compression/types.rs
//! Codec capability trait and its error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("codec {codec} init failed: {msg}")]
    CodecInitFailed { codec: String, msg: String },

    #[error("codec {codec} process failed: {msg}")]
    CodecProcessFailed { codec: String, msg: String },

    #[error("invalid {codec} level {level} (allowed {min}..={max})")]
    InvalidLevel { codec: String, level: i32, min: i32, max: i32 },
}

/// One-shot chunk compressor.
///
/// `encode_all` must compress the whole input into one self-contained frame
/// and must be deterministic: the same input yields the same output. The
/// `&mut self` receiver lets implementations reuse a context between calls,
/// but no state may leak from one chunk into the next.
///
/// Requires `Send` so an encoder can move to a writer thread.
pub trait Compressor: Send {
    fn encode_all(&mut self, input: &[u8]) -> Result<Vec<u8>, CompressionError>;
}
