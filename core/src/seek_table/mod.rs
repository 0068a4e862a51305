//! seek_table/mod.rs
//! The seek table: per-chunk records plus a footer, serialized at fixed
//! offsets in little-endian order.
//!
//! Layout of one table holding N entries (12 * N + 9 bytes):
//!
//! ```text
//! [ compressed_size (4) | decompressed_size (4) | checksum (4) ] * N
//! [ number_of_frames (4) | descriptor (1) | magic (4) ]
//! ```

pub mod types;
pub mod encode;
pub mod decode;
pub mod builder;

pub use types::*;
pub use encode::*;
pub use decode::*;
pub use builder::SeekTableBuilder;
