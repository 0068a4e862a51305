//! compression/mod.rs
//! Codec boundary for the seekable encoder.
//!
//! Notes:
//! - The encoder only needs one capability from a codec: compress a whole
//!   chunk into a standalone frame. Everything else stays behind `Compressor`.
//! - Each call must be independent of the previous one so any chunk can be
//!   decoded on its own later.

pub mod constants;
pub mod types;
pub mod codecs;

pub use constants::*;
pub use types::*;
pub use codecs::ZstdCompressor;
