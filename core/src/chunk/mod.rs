//! chunk/mod.rs
//! Per-chunk compression: bounds, codec call, checksum, frame entry.

pub mod types;
pub mod encode;

pub use types::ChunkError;
pub use encode::ChunkEncoder;
