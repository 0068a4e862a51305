//! seekable-core
//!
//! Encoder for the seekable zstd format: chunks are compressed into
//! independent zstd frames and a trailing seek table, carried in a skippable
//! frame, records each chunk's sizes and checksum so a reader can jump to
//! any chunk. Stock zstd decoders skip the table and see a plain
//! multi-frame stream.
//!
//! ```no_run
//! use seekable_core::Encoder;
//!
//! # fn main() -> seekable_core::Result<()> {
//! let mut enc = Encoder::zstd(3)?;
//! let mut out = Vec::new();
//! for chunk in [&b"first chunk"[..], &b"second chunk"[..]] {
//!     out.extend(enc.encode(chunk)?);
//! }
//! out.extend(enc.end_stream()?);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

pub mod compression;
pub mod seek_table;
pub mod skippable;
pub mod chunk;
pub mod telemetry;

// Facade
pub mod encoder;

pub use encoder::{encode_chunked, Encoder, EncoderConfig, EncoderState};
pub use types::{Result, SeekableError};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{Compressor, CompressionError, ZstdCompressor};
    pub use crate::encoder::{encode_chunked, Encoder, EncoderConfig, EncoderState};
    pub use crate::seek_table::{decode_seek_table, FrameEntry, Footer, SeekTable};
    pub use crate::types::{Result, SeekableError};
}
